//! Validatable derive macro implementation
//!
//! Reads `#[validate(...)]` attributes on a struct and its fields and emits
//! the `Validatable` impl listing every non-skipped field as a site, in
//! declaration order. Fields whose type implements `Validatable` are walked
//! even without `nested`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Result, parse_macro_input, Attribute, Data, DeriveInput, Error, Field, Fields,
    GenericParam, LitStr, Path, Type,
};

/// Main implementation function for the Validatable derive
pub fn derive_validatable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Metadata declared by `#[validate(...)]` on one site
#[derive(Default)]
struct SiteAttrs {
    validators: Vec<Path>,
    tag_fn: Option<Path>,
    nested: bool,
    skip: bool,
    /// Whether `with(...)` appeared, even if empty
    has_with: bool,
}

impl SiteAttrs {
    fn is_tagged(&self) -> bool {
        self.has_with || self.tag_fn.is_some()
    }
}

fn parse_site_attrs(attrs: &[Attribute]) -> Result<SiteAttrs> {
    let mut site = SiteAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("validate")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("with") {
                site.has_with = true;
                meta.parse_nested_meta(|inner| {
                    site.validators.push(inner.path.clone());
                    Ok(())
                })
            } else if meta.path.is_ident("tag") {
                if site.tag_fn.is_some() {
                    return Err(meta.error("duplicate `tag` in #[validate]"));
                }
                site.tag_fn = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("nested") {
                site.nested = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                site.skip = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported #[validate] option, expected `with`, `tag`, `nested` or `skip`",
                ))
            }
        })?;

        if site.has_with && site.validators.is_empty() {
            return Err(Error::new_spanned(attr, "`with(...)` needs at least one validator"));
        }
        if site.has_with && site.tag_fn.is_some() {
            return Err(Error::new_spanned(attr, "use either `with(...)` or `tag = ...`, not both"));
        }
    }

    Ok(site)
}

/// Build the expression producing the `ValidationTag` for a site
fn tag_expr(site: &SiteAttrs, name: &str) -> Option<TokenStream2> {
    if let Some(tag_fn) = &site.tag_fn {
        return Some(quote! { #tag_fn() });
    }
    if !site.has_with {
        return None;
    }

    let name = LitStr::new(name, proc_macro2::Span::call_site());
    let validators = &site.validators;
    Some(quote! {
        ::elif_validation::ValidationTag::new(#name)
            #(.with::<#validators>())*
    })
}

/// Whether the field type is spelled `Option<...>`
fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}

fn expand_field(struct_name: &str, field: &Field) -> Result<Option<TokenStream2>> {
    let site = parse_site_attrs(&field.attrs)?;
    let Some(ident) = &field.ident else {
        return Err(Error::new_spanned(field, "#[derive(Validatable)] requires named fields"));
    };

    if site.skip {
        if site.is_tagged() || site.nested {
            return Err(Error::new_spanned(ident, "`skip` cannot be combined with other options"));
        }
        return Ok(None);
    }

    let field_name = ident.to_string();
    let name = LitStr::new(&field_name, ident.span());
    let optional = is_option(&field.ty);

    // `nested` insists on a Validatable field; otherwise the probe decides
    let constructor = match (site.nested, optional) {
        (true, true) => quote! {
            ::elif_validation::FieldSite::optional_bean(
                #name,
                self.#ident.as_ref().map(|v| v as &dyn ::elif_validation::Validatable),
            )
        },
        (true, false) => quote! { ::elif_validation::FieldSite::bean(#name, &self.#ident) },
        (false, true) => quote! {
            (&::elif_validation::derive_support::OptionProbe(self.#ident.as_ref())).site(#name)
        },
        (false, false) => quote! {
            (&::elif_validation::derive_support::FieldProbe(&self.#ident)).site(#name)
        },
    };

    let tagged = tag_expr(&site, &format!("{struct_name}.{field_name}"))
        .map(|tag| quote! { .tagged(#tag) });

    Ok(Some(quote! { #constructor #tagged }))
}

fn expand(input: &DeriveInput) -> Result<TokenStream2> {
    let ident = &input.ident;
    let struct_name = ident.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => {
                return Err(Error::new_spanned(
                    ident,
                    "#[derive(Validatable)] requires structs with named fields",
                ))
            }
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    &data.fields,
                    "#[derive(Validatable)] requires structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                ident,
                "#[derive(Validatable)] can only be applied to structs",
            ))
        }
    };

    let container = parse_site_attrs(&input.attrs)?;
    if container.nested || container.skip {
        return Err(Error::new_spanned(
            ident,
            "`nested` and `skip` are only valid on fields",
        ));
    }

    let mut sites = Vec::new();
    for field in fields {
        if let Some(site) = expand_field(&struct_name, field)? {
            sites.push(site);
        }
    }

    let type_tag = tag_expr(&container, &struct_name).map(|tag| {
        quote! {
            fn type_tag(&self) -> ::core::option::Option<::elif_validation::ValidationTag> {
                ::core::option::Option::Some(#tag)
            }
        }
    });

    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(syn::parse_quote!('static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::elif_validation::Validatable for #ident #ty_generics #where_clause {
            #type_tag

            fn fields(&self) -> ::std::vec::Vec<::elif_validation::FieldSite<'_>> {
                #[allow(unused_imports)]
                use ::elif_validation::derive_support::{NestedSite as _, ValueSite as _};
                ::std::vec![#(#sites),*]
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    })
}
