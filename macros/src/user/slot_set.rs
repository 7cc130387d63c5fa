//! Batch slot definition
//!
//! - `define_slots!` - define several newtype slots with doc strings

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Generics, Ident, LitStr, Member, Token, Type, Visibility,
};

use super::slot::slot_impl;

// =============================================================================
// define_slots! Input Parser
// =============================================================================

/// Single slot definition: `#[attr] pub Name: Type => "doc string"`
///
/// The doc string is optional.
pub struct SlotDef {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub ty: Type,
    pub doc: Option<LitStr>,
}

impl Parse for SlotDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;
        let doc = if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(SlotDef { attrs, vis, name, ty, doc })
    }
}

/// Multiple slot definitions separated by commas
pub struct DefineSlotsInput {
    pub slots: Punctuated<SlotDef, Token![,]>,
}

impl Parse for DefineSlotsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let slots = Punctuated::parse_terminated(input)?;
        Ok(DefineSlotsInput { slots })
    }
}

// =============================================================================
// expand_define_slots
// =============================================================================

/// Each slot becomes `struct Name(pub Type)` with the common derives and an
/// `OptionSlot` impl. The payload type must therefore be
/// `Debug + Clone + Default + PartialEq`.
pub fn expand_define_slots(input: DefineSlotsInput) -> TokenStream2 {
    let payload = Member::Unnamed(0.into());
    let generics = Generics::default();

    let slots = input.slots.iter().map(|slot| {
        let SlotDef { attrs, vis, name, ty, doc } = slot;
        let doc_attr = doc.as_ref().map(|doc| quote! { #[doc = #doc] });
        let option_impl = slot_impl(name, &generics, &payload, ty);

        quote! {
            #doc_attr
            #(#attrs)*
            #[derive(Debug, Clone, Default, PartialEq)]
            #vis struct #name(pub #ty);

            #option_impl

            impl ::core::convert::From<#ty> for #name {
                #[inline]
                fn from(value: #ty) -> Self {
                    #name(value)
                }
            }
        }
    });

    quote! {
        #(#slots)*
    }
}
