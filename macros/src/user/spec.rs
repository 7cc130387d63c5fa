use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ext::IdentExt, DeriveInput};

use crate::common::{check_duplicate_slots, parse_field_tags, type_string};

/// #[derive(OptionSpec)] builds the spec's static field table.
///
/// ```ignore
/// #[derive(OptionSpec)]
/// struct WhateverSpec {
///     #[opt(js = "name")]
///     name: Name,
///     num: Num,
/// }
///
/// // Expands to:
/// // impl OptionSpec for WhateverSpec {
/// //     const NAME: &'static str = "WhateverSpec";
/// //     const FIELDS: &'static [FieldDescriptor<Self>] = &[
/// //         FieldDescriptor { name: "name", tags: &[("js", "name")], .. },
/// //         FieldDescriptor { name: "num", tags: &[], .. },
/// //     ];
/// // }
/// ```
pub fn expand_derive_option_spec(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let ident_str = ident.unraw().to_string();

    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    ident,
                    "OptionSpec only supports structs with named fields",
                )
                .to_compile_error();
            }
        },
        _ => {
            return syn::Error::new_spanned(ident, "OptionSpec can only be derived for structs")
                .to_compile_error();
        }
    };

    let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    if let Err(err) = check_duplicate_slots(&types) {
        return err.to_compile_error();
    }

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let tags = match parse_field_tags(&field.attrs) {
            Ok(tags) => tags,
            Err(err) => return err.to_compile_error(),
        };

        // Named fields always carry an ident
        let Some(member) = &field.ident else { continue };
        let name = member.unraw().to_string();
        let ty = &field.ty;
        let ty_str = type_string(ty);
        let tag_pairs = tags.iter().map(|tag| {
            let namespace = tag.namespace.to_string();
            let alias = &tag.alias;
            quote! { (#namespace, #alias) }
        });

        descriptors.push(quote! {
            ::tola_opts::FieldDescriptor {
                name: #name,
                slot_type: ::core::any::TypeId::of::<#ty>,
                slot_name: #ty_str,
                tags: &[#(#tag_pairs),*],
                get: |spec| &spec.#member,
                get_mut: |spec| &mut spec.#member,
            }
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_opts::OptionSpec for #ident #ty_generics #where_clause {
            const NAME: &'static str = #ident_str;

            const FIELDS: &'static [::tola_opts::FieldDescriptor<Self>] = &[
                #(#descriptors),*
            ];
        }
    }
}
