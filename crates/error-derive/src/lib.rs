//! `#[derive(Error)]` for error enums
//!
//! Every variant needs a `#[msg = "..."]` attribute, which is used for its
//! `Display` implementation.
//!
//! * Unit variants display the message as-is.
//! * Tuple variants wrap exactly one other error. They get a `From` impl and
//!   report the wrapped value as their `source()`.
//! * Struct variants may refer to their fields by name inside the message,
//!   like `#[msg = "cannot assign to `{attribute}`"]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = syn::parse(input).expect("Could not parse input as enum");

    let name = &item.ident;
    let mut variant_displays = vec![];
    let mut from_impls = vec![];
    let mut variant_sources = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;

        let Some(message) = message_of(variant) else {
            panic!("{name}::{ident} needs a #[msg = \"...\"] attribute");
        };

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays.push(quote!(Self::#ident => f.write_str(#message)));
            },
            syn::Fields::Unnamed(unnamed_fields) => {
                if unnamed_fields.unnamed.len() != 1 {
                    panic!("{name}::{ident} needs exactly one field");
                }

                let ty = &unnamed_fields.unnamed[0].ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl From<#ty> for #name {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays.push(quote!(Self::#ident(_) => f.write_str(#message)));
                variant_sources.push(quote!(Self::#ident(ref value) => Some(value)));
            },
            syn::Fields::Named(named_fields) => {
                variant_displays.push(display_named_variant(ident, message, named_fields));
            },
        }
    }

    quote!(
        #[automatically_derived]
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl ::std::error::Error for #name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    )
    .into()
}

fn message_of(variant: &syn::Variant) -> Option<&syn::Expr> {
    variant
        .attrs
        .iter()
        .flat_map(|attr| match &attr.meta {
            syn::Meta::NameValue(name_value) => Some(name_value),
            _ => None,
        })
        .find(|name_value| name_value.path.is_ident("msg"))
        .map(|name_value| &name_value.value)
}

/// Only the fields that are mentioned in the message are bound, since
/// unused named arguments are rejected by `format_args!`
fn display_named_variant(
    ident: &syn::Ident,
    message: &syn::Expr,
    fields: &syn::FieldsNamed,
) -> TokenStream2 {
    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(format_string),
        ..
    }) = message
    else {
        panic!("the message of a struct variant must be a string literal");
    };

    let format_string_value = format_string.value();
    let arguments = format_arguments(&format_string_value);
    let mentioned: Vec<&syn::Ident> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .filter(|field| arguments.iter().any(|argument| field == argument))
        .collect();

    quote!(
        Self::#ident { #(#mentioned,)* .. } => write!(f, #format_string #(, #mentioned = #mentioned)*)
    )
}

/// Names of the arguments referenced by a format string, like `name` in
/// `"{name:>5}"`. Escaped braces (`{{` and `}}`) are skipped.
fn format_arguments(template: &str) -> Vec<&str> {
    let mut arguments = vec![];
    let mut remaining = template;

    while let Some(position) = remaining.find(['{', '}']) {
        let (brace, after) = remaining[position..].split_at(1);

        // "{{" and "}}" are literal braces
        if after.starts_with(brace) {
            remaining = &after[1..];
            continue;
        }

        if brace == "}" {
            remaining = after;
            continue;
        }

        let end = after.find('}').unwrap_or(after.len());
        let argument = &after[..end];
        let argument = argument.split_once(':').map_or(argument, |(name, _)| name);
        arguments.push(argument.trim());

        remaining = after.get(end + 1..).unwrap_or_default();
    }

    arguments
}

#[cfg(test)]
mod tests {
    use super::format_arguments;

    #[test]
    fn test_plain_arguments() {
        assert_eq!(format_arguments("{a} and {b}"), ["a", "b"]);
    }

    #[test]
    fn test_format_spec() {
        assert_eq!(format_arguments("[{name:>5}] {count:?}"), ["name", "count"]);
    }

    #[test]
    fn test_escaped_braces() {
        assert!(format_arguments("literal {{name}} braces").is_empty());
        assert_eq!(format_arguments("{{{name}}}"), ["name"]);
        assert_eq!(format_arguments("{{}} {name}"), ["name"]);
    }

    #[test]
    fn test_prefix_of_field_is_not_a_mention() {
        assert_eq!(format_arguments("{names}"), ["names"]);
    }
}
