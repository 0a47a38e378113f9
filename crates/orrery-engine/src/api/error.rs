//! Error types for body configuration and interaction input.

/// Malformed input arriving from a UI control.
///
/// Recovered locally: the update is dropped and the previous value kept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The raw slider value is not a decimal number.
    #[error("speed input {raw:?} is not a number")]
    Unparsable { raw: String },

    /// The raw slider value parsed to NaN or infinity.
    #[error("speed input {raw:?} is not finite")]
    NonFinite { raw: String },

    /// The control refers to a body index outside the registry.
    #[error("no body at index {index}")]
    UnknownBody { index: usize },
}

/// Errors raised while building a body registry.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The body table is not valid JSON or does not match the schema.
    #[error("failed to parse body table: {0}")]
    Json(#[source] serde_json::Error),

    /// The body table has no entries.
    #[error("body table is empty")]
    Empty,

    /// A descriptor field is out of its domain.
    #[error("body {name:?}: {field} {reason}")]
    InvalidField {
        name: String,
        field: &'static str,
        reason: &'static str,
    },

    /// Two descriptors share a name.
    #[error("duplicate body name {0:?}")]
    DuplicateName(String),
}

/// Any error the engine surfaces to a game.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
