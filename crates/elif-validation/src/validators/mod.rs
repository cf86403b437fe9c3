//! Built-in validators, grouped into tags covering several target types
//!
//! Each tag is a function returning a fresh [`ValidationTag`](crate::ValidationTag),
//! usable from `#[validate(tag = ...)]`.

pub mod identity;
pub mod number;
pub mod temporal;
pub mod text;

pub use identity::{non_nil, NonNilUuid};
pub use number::{positive, PositiveF64, PositiveI32, PositiveI64, PositiveU32, PositiveU64};
pub use temporal::{not_in_future, NotInFutureDate, NotInFutureDateTime};
pub use text::{email, not_blank, Email, NotBlank, NotBlankStr};
