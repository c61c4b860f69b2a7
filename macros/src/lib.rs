//! Derive macros for slicekit
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Names every variant of a slice's action enum as
//!   `"<slice>/<operation>"` and implements `slicekit_core::action::ActionType`
//!
//! # Example
//!
//! ```ignore
//! use slicekit_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(slice = "todos")]
//! enum TodosAction {
//!     Create { description: String },
//!     #[action(rename = "remove")]
//!     Delete { id: String },
//! }
//!
//! assert_eq!(TodosAction::Create { description: "x".into() }.action_type(), "todos/create");
//! assert_eq!(TodosAction::ACTION_TYPES, &["todos/create", "todos/remove"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for slice action enums
///
/// Generates:
/// - an `ActionType` implementation returning `"<slice>/<operation>"`
/// - `SLICE`, the slice name
/// - `ACTION_TYPES`, every action type of the enum in declaration order
///
/// The operation defaults to the variant name in lower camel case
/// (`SetFilter` becomes `setFilter`).
///
/// # Attributes
///
/// - `#[action(slice = "...")]` on the enum (required)
/// - `#[action(rename = "...")]` on a variant to override the operation name
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type or to an enum without variants
/// - The enum has no `#[action(slice = "...")]` attribute
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    if data_enum.variants.is_empty() {
        return syn::Error::new_spanned(&input, "#[derive(Action)] needs at least one variant")
            .to_compile_error()
            .into();
    }

    let slice = match action_attribute(&input.attrs, "slice") {
        Ok(Some(slice)) => slice,
        Ok(None) => {
            return syn::Error::new_spanned(
                &input,
                "#[derive(Action)] requires #[action(slice = \"...\")] on the enum",
            )
            .to_compile_error()
            .into();
        },
        Err(error) => return error.to_compile_error().into(),
    };

    let mut arms = Vec::new();
    let mut action_types = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let operation = match action_attribute(&variant.attrs, "rename") {
            Ok(Some(rename)) => rename,
            Ok(None) => lower_camel(&variant_name.to_string()),
            Err(error) => return error.to_compile_error().into(),
        };
        let action_type = format!("{slice}/{operation}");

        arms.push(match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #action_type, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #action_type, },
            Fields::Unit => quote! { Self::#variant_name => #action_type, },
        });
        action_types.push(action_type);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::slicekit_core::action::ActionType for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Name of the slice these actions belong to
            pub const SLICE: &'static str = #slice;

            /// Every action type of this slice, in declaration order
            pub const ACTION_TYPES: &'static [&'static str] = &[#(#action_types),*];
        }
    };

    TokenStream::from(expanded)
}

/// Reads `key = "value"` out of the `#[action(...)]` attributes
fn action_attribute(attrs: &[Attribute], key: &str) -> syn::Result<Option<String>> {
    let mut value = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("slice") || meta.path.is_ident("rename") {
                // Valid key, just not the one being read
                let _: LitStr = meta.value()?.parse()?;
                Ok(())
            } else {
                Err(meta.error("expected `slice = \"...\"` or `rename = \"...\"`"))
            }
        })?;
    }

    Ok(value)
}

/// `SetFilter` -> `setFilter`
fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
