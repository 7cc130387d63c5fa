use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, Member, Type};

use crate::common::payload_field;

/// #[derive(OptionSlot)] implements `OptionSlot` for a single-field struct.
///
/// The one field (tuple or named) is the payload:
///
/// ```ignore
/// #[derive(OptionSlot)]
/// struct RouteName(String);
///
/// #[derive(OptionSlot)]
/// struct Port { value: u16 }
/// ```
pub fn expand_derive_option_slot(input: DeriveInput) -> TokenStream2 {
    let fields = match &input.data {
        syn::Data::Struct(data) => &data.fields,
        _ => {
            return syn::Error::new_spanned(&input.ident, "OptionSlot can only be derived for structs")
                .to_compile_error();
        }
    };

    let Some((member, ty)) = payload_field(fields) else {
        return syn::Error::new_spanned(
            &input.ident,
            format!(
                "option slot `{}` must have exactly one payload field\n\
                 \n\
                 e.g. `struct {}(String);`",
                input.ident, input.ident
            ),
        )
        .to_compile_error();
    };

    slot_impl(&input.ident, &input.generics, &member, ty)
}

/// `impl OptionSlot` for `ident`, with `member` as the payload.
pub fn slot_impl(ident: &Ident, generics: &Generics, member: &Member, ty: &Type) -> TokenStream2 {
    let ident_str = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_opts::OptionSlot for #ident #ty_generics #where_clause {
            type Value = #ty;

            #[inline]
            fn new(value: #ty) -> Self {
                Self { #member: value }
            }

            #[inline]
            fn value(&self) -> &#ty {
                &self.#member
            }

            #[inline]
            fn into_value(self) -> #ty {
                self.#member
            }

            fn name() -> &'static str {
                #ident_str
            }
        }
    }
}
