//! # tola-opts
//!
//! Typed options container: bind self-describing option values to a spec
//! struct, track which options were set, export the set ones to a map.
//!
//! **Variadic, self-documenting configuration without setter boilerplate.**
//!
//! ## Architecture
//!
//! ### 1. Slots
//! Every option is its own type (a *slot*) carrying exactly one payload.
//! The slot's `TypeId` is the option's identity.
//!
//! ### 2. Specs
//! A spec is a struct whose fields are distinct slots.
//! `#[derive(OptionSpec)]` emits a `const` field table, shared by all binders:
//!
//! ```text
//! Field -> (name, slot TypeId, export aliases, accessors)
//! ```
//!
//! ### 3. Binding
//! The binder indexes the table by slot type once, then routes each option
//! value to its field and marks it set.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Slots                                                   |
//! |  - OptionSlot, Slot<Tag, T>, DynOption (type-erased option)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Specs                                                   |
//! |  - OptionSpec, FieldDescriptor (static field table, aliases)      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Binder                                                  |
//! |  - OptionsBinder (assign, is_set, export), options![]             |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_opts::{define_slots, options, OptionSpec, OptionsBinder};
//!
//! define_slots! {
//!     pub Name: String => "Display name",
//!     pub Num: i64 => "A number",
//!     pub Num2: f32 => "Another number",
//! }
//!
//! #[derive(OptionSpec, Default)]
//! struct WhateverSpec {
//!     #[opt(js = "name")]
//!     name: Name,
//!     #[opt(js = "num")]
//!     num: Num,
//!     #[opt(js = "num2")]
//!     num2: Num2,
//! }
//!
//! let mut binder = OptionsBinder::<WhateverSpec>::with_default()?;
//! binder.assign(options![Name("abc".into()), Num(42)])?;
//!
//! assert_eq!(binder.spec().name.0, "abc");
//! assert!(!binder.is_set("num2"));
//!
//! // With the default `json` feature:
//! #[cfg(feature = "json")]
//! let map = binder.export_to_map_with_tag("js")?;
//! #[cfg(feature = "json")]
//! assert_eq!(serde_json::Value::Object(map), serde_json::json!({ "name": "abc", "num": 42 }));
//! # Ok::<(), tola_opts::OptionsError>(())
//! ```
//!
//! ## Compile-time Errors
//!
//! Mistakes in slot and spec definitions are rejected by the derives.
//!
//! A slot needs exactly one payload field:
//!
//! ```compile_fail
//! #[derive(tola_opts::OptionSlot)]
//! struct Endpoint { host: String, port: u16 }
//! ```
//!
//! ```compile_fail
//! #[derive(tola_opts::OptionSlot)]
//! struct Marker;
//! ```
//!
//! A spec must be a struct with named fields:
//!
//! ```compile_fail
//! #[derive(tola_opts::OptionSlot)]
//! struct Level(u8);
//!
//! #[derive(tola_opts::OptionSpec)]
//! enum Spec { A(Level) }
//! ```
//!
//! Two fields of one spec cannot share a slot type:
//!
//! ```compile_fail
//! #[derive(tola_opts::OptionSlot)]
//! struct Level(u8);
//!
//! #[derive(tola_opts::OptionSpec)]
//! struct Spec { low: Level, high: Level }
//! ```
//!
//! A binder needs exclusive access to the spec:
//!
//! ```compile_fail
//! # #[derive(tola_opts::OptionSlot, Default)]
//! # struct Level(u8);
//! # #[derive(tola_opts::OptionSpec, Default)]
//! # struct Spec { level: Level }
//! let spec = Spec::default();
//! let binder = tola_opts::OptionsBinder::new(&spec);
//! ```
//!
//! Only slot types are options:
//!
//! ```compile_fail
//! let opts = tola_opts::options![42_u8];
//! ```

// Allow `::tola_opts` to work inside the crate itself
extern crate self as tola_opts;

// =============================================================================
// Layer 0: Slots
// =============================================================================
pub mod slot;

// =============================================================================
// Layer 1: Specs
// =============================================================================
pub mod spec;

// =============================================================================
// Layer 2: Binder
// =============================================================================
pub mod binder;
pub mod error;

// Syntax macros (options!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use binder::OptionsBinder;
pub use error::{OptionsError, Result};
pub use slot::{DynOption, OptionSlot, Payload, Slot};
pub use spec::{FieldDescriptor, OptionSpec};

// Re-export proc-macros (derives share names with their traits)
pub use macros::{define_slots, OptionSlot, OptionSpec};

/// Common items for defining and binding options.
pub mod prelude {
    pub use crate::binder::OptionsBinder;
    pub use crate::error::OptionsError;
    pub use crate::options;
    pub use crate::slot::{DynOption, OptionSlot, Slot};
    pub use crate::spec::OptionSpec;
    pub use macros::{define_slots, OptionSlot, OptionSpec};
}
