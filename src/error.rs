//! Error types for tola-opts

use thiserror::Error;

/// Errors raised while binding options to a spec.
///
/// All of these are usage errors: they point at a mismatch between the spec
/// definition and the options handed to it, not at bad user input.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// No field of the spec has the option's slot type.
    #[error("spec `{spec}` has no option `{option}`")]
    UnknownOption {
        spec: &'static str,
        option: &'static str,
    },

    /// Two fields of the spec share one slot type.
    #[error("spec `{spec}` uses slot `{slot}` for both `{first}` and `{second}`")]
    DuplicateSlot {
        spec: &'static str,
        slot: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// A set payload could not be serialized during export.
    #[cfg(feature = "json")]
    #[error("failed to export option `{field}`")]
    Export {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = OptionsError> = core::result::Result<T, E>;
