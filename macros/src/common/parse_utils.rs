//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Fields, Ident, LitStr, Member, Token, Type,
};

// =============================================================================
// Export Alias Parsing: `#[opt(js = "name", yaml = "n")]`
// =============================================================================

/// Attribute carrying export aliases on spec fields.
pub const OPT_ATTR: &str = "opt";

/// A single export alias: `namespace = "alias"`
#[derive(Clone)]
pub struct FieldTag {
    pub namespace: Ident,
    pub alias: LitStr,
}

impl Parse for FieldTag {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let namespace: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let alias: LitStr = input.parse()?;
        Ok(FieldTag { namespace, alias })
    }
}

/// Collect the aliases of every `#[opt(...)]` attribute on a field.
///
/// A namespace may be given only once per field.
pub fn parse_field_tags(attrs: &[Attribute]) -> syn::Result<Vec<FieldTag>> {
    let mut tags: Vec<FieldTag> = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(OPT_ATTR)) {
        let parsed = attr.parse_args_with(Punctuated::<FieldTag, Token![,]>::parse_terminated)?;
        for tag in parsed {
            if tags.iter().any(|seen| seen.namespace == tag.namespace) {
                return Err(syn::Error::new_spanned(
                    &tag.namespace,
                    format!("duplicate `{}` alias", tag.namespace),
                ));
            }
            tags.push(tag);
        }
    }
    Ok(tags)
}

// =============================================================================
// Slot Type Checks
// =============================================================================

/// Type as written, without whitespace.
pub fn type_string(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

/// Check for fields sharing a slot type.
///
/// Only catches types written identically; aliases are caught when binding.
pub fn check_duplicate_slots(types: &[&Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ty in types {
        let ty_str = type_string(ty);
        if !seen.insert(ty_str.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate slot type `{}`\n\
                     \n\
                     Each field of a spec needs its own slot type.\n\
                     Options are routed by type, so a shared slot could only reach one field.",
                    ty_str
                ),
            ));
        }
    }
    Ok(())
}

/// The single payload field of a slot struct: how to access it and its type.
pub fn payload_field(fields: &Fields) -> Option<(Member, &Type)> {
    let mut iter = fields.iter();
    match (iter.next(), iter.next()) {
        (Some(field), None) => {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(0.into()),
            };
            Some((member, &field.ty))
        }
        _ => None,
    }
}
