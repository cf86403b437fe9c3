use elif_validation::validators::{NotBlank, PositiveU32};
use elif_validation::Validatable;

#[derive(Validatable)]
struct Signup {
    #[validate(with(NotBlank))]
    name: String,
    #[validate(with(PositiveU32))]
    age: u32,
    nickname: String,
}

fn main() {
    let signup = Signup { name: "ana".into(), age: 30, nickname: String::new() };
    let _ = &signup.nickname;
    assert_eq!(signup.fields().len(), 3);
    assert!(signup.fields()[2].tag().is_none());
    assert!(signup.type_tag().is_none());
}
