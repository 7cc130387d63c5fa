//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(OptionSlot)]` | on struct | Define an option slot |
//! | `#[derive(OptionSpec)]` | on struct | Build a spec's field table |
//! | `define_slots!` | function macro | Batch define slots |

pub mod slot;
mod slot_set;
pub mod spec;

// Re-export all public items
pub use slot::expand_derive_option_slot;
pub use slot_set::{expand_define_slots, DefineSlotsInput};
pub use spec::expand_derive_option_spec;
