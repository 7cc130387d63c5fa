// Common utilities shared between the derives and function-like macros
//
// This module contains:
// - parse_utils: `#[opt]` alias parsing, slot field checks

mod parse_utils;

pub use parse_utils::*;
