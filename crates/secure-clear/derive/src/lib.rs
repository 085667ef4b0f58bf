// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `secure_clear` crate.
//!
//! Provides `#[derive(BulkClearable)]`.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Ident, LitStr, Type, parse_macro_input};

/// Derives `BulkClearable` for a struct whose fields are all `BulkClearable`.
///
/// # Requirements
///
/// - The struct must be `Copy` (required by the trait, which also means it
///   cannot implement `Drop`).
/// - Every field type must implement `BulkClearable`. Each field is checked
///   individually, so the error points at the offending field.
/// - Enums and unions are rejected: an all-zero discriminant is not
///   guaranteed to name a variant.
///
/// Type parameters receive a `BulkClearable` bound.
///
/// # Example
///
/// ```rust
/// use secure_clear_core::clear;
///
/// #[derive(Clone, Copy, secure_clear_derive::BulkClearable)]
/// struct Credentials {
///     user_id: u32,
///     pin: [u8; 8],
///     expires_at: i64,
/// }
///
/// let mut creds = Credentials { user_id: 7, pin: *b"12345678", expires_at: 1_700_000_000 };
/// clear(&mut creds);
/// assert_eq!(creds.user_id, 0);
/// assert_eq!(creds.pin, [0u8; 8]);
/// assert_eq!(creds.expires_at, 0);
/// ```
#[proc_macro_derive(BulkClearable)]
pub fn derive_bulk_clearable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(|e| e).into()
}

/// Finds the root crate path from a list of candidates.
///
/// Resolves `secure_clear_core` or the `secure_clear` facade depending on
/// what the calling crate depends on.
pub(crate) fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        match crate_name(candidate) {
            Ok(FoundCrate::Itself) => return quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                return quote!(#id);
            }
            Err(_) => continue,
        }
    }

    let msg = "BulkClearable: could not find secure-clear or secure-clear-core. Add secure-clear to Cargo.toml.";
    let lit = LitStr::new(msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

/// Collects the field types of a struct, or rejects the input.
pub(crate) fn struct_field_types(input: &DeriveInput) -> Result<Vec<&Type>, TokenStream2> {
    match &input.data {
        Data::Struct(data) => Ok(match &data.fields {
            Fields::Named(named) => named.named.iter().map(|f| &f.ty).collect(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.iter().map(|f| &f.ty).collect(),
            Fields::Unit => vec![],
        }),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "BulkClearable cannot be derived for enums: an all-zero discriminant is not guaranteed to be a valid variant.",
        )
        .to_compile_error()),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "BulkClearable cannot be derived for unions. Implement it manually if all-zero is a valid value.",
        )
        .to_compile_error()),
    }
}

/// Expands the DeriveInput into the `BulkClearable` implementation.
fn expand(input: DeriveInput) -> Result<TokenStream2, TokenStream2> {
    let struct_name = &input.ident;

    // 1) Resolve the `secure_clear_core` or `secure_clear` crate (prefer core)
    let root = find_root_with_candidates(&["secure-clear-core", "secure-clear"]);

    // 2) Field types (rejects enums and unions)
    let field_types = struct_field_types(&input)?;

    // 3) Every type parameter must itself be clearable
    let mut generics = input.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(syn::parse_quote!(#root::BulkClearable));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // 4) Per-field assertion, so a bad field is reported at its own span
    let assertions = field_types.iter().map(|ty| {
        quote! {
            __assert_field_is_bulk_clearable::<#ty>();
        }
    });

    let output = quote! {
        const _: () = {
            #[allow(dead_code)]
            fn __assert_field_is_bulk_clearable<__T: #root::BulkClearable>() {}

            #[allow(dead_code)]
            fn __assert_fields #impl_generics () #where_clause {
                #( #assertions )*
            }
        };

        // SAFETY: every field is `BulkClearable` (asserted above), so the
        // all-zero pattern is valid for each of them and thus for the struct.
        unsafe impl #impl_generics #root::BulkClearable for #struct_name #ty_generics #where_clause {}
    };

    Ok(output)
}
