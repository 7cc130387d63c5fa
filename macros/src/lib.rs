//! Procedural macros for tola-opts typed options
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(OptionSlot)]` | single-field struct | Define an option slot |
//! | `#[derive(OptionSpec)]` | named-field struct | Build the spec's field table |
//! | `define_slots!{}` | - | Batch define newtype slots |
//!
//! ## Example
//!
//! ```ignore
//! // 1. Define slots
//! #[derive(OptionSlot)]
//! struct RouteName(String);
//!
//! define_slots! {
//!     pub Timeout: u64 => "Request timeout in seconds",
//! }
//!
//! // 2. Define a spec
//! #[derive(OptionSpec, Default)]
//! struct RouteSpec {
//!     #[opt(js = "name")]
//!     name: RouteName,
//!     timeout: Timeout,
//! }
//!
//! // 3. Bind options
//! let binder = OptionsBinder::<RouteSpec>::with_default()?
//!     .with(RouteName("home".into()))?;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to implement the `OptionSlot` trait.
///
/// The struct must have exactly one field, which becomes the payload.
///
/// # Usage
/// ```ignore
/// #[derive(OptionSlot)]
/// struct RouteName(String);
///
/// #[derive(OptionSlot)]
/// struct Port { value: u16 }
///
/// assert_eq!(RouteName::new("home".into()).value(), "home");
/// ```
#[proc_macro_derive(OptionSlot)]
pub fn derive_option_slot(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_option_slot(input).into()
}

/// Derive macro to implement the `OptionSpec` trait.
///
/// Every field must be a distinct `OptionSlot` type. Export aliases are
/// declared per namespace with `#[opt(namespace = "alias")]`.
///
/// # Usage
/// ```ignore
/// #[derive(OptionSpec, Default)]
/// struct WhateverSpec {
///     #[opt(js = "name", yaml = "display_name")]
///     name: Name,
///     #[opt(js = "num")]
///     num: Num,
/// }
/// ```
#[proc_macro_derive(OptionSpec, attributes(opt))]
pub fn derive_option_spec(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_option_spec(input).into()
}

/// Batch define newtype slots.
///
/// # Usage
/// ```ignore
/// define_slots! {
///     pub Name: String => "Display name",
///     pub Num: i64 => "A number",
///     Hidden: bool,
/// }
/// // Generates: pub struct Name(pub String); pub struct Num(pub i64); struct Hidden(pub bool);
/// // each with Debug, Clone, Default, PartialEq, From<payload> and OptionSlot
/// ```
#[proc_macro]
pub fn define_slots(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::DefineSlotsInput);
    user::expand_define_slots(input).into()
}
