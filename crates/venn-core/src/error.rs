/// Core error types for the Venn layout engine.
use std::path::PathBuf;

/// A specialized Result type for Venn operations.
pub type VennResult<T> = Result<T, VennError>;

/// Top-level error type.
///
/// Layout computation itself never fails; these errors come from loading
/// calibration files and parsing caller input.
#[derive(Debug, thiserror::Error)]
pub enum VennError {
    #[error("config error: {message} ({path:?})")]
    ConfigFile { message: String, path: PathBuf },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid set expression '{input}': {message}")]
    SetExpression { input: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VennError {
    /// Create a config file error.
    pub fn config_file(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        VennError::ConfigFile {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a set expression error.
    pub fn set_expression(input: impl Into<String>, message: impl Into<String>) -> Self {
        VennError::SetExpression {
            input: input.into(),
            message: message.into(),
        }
    }
}
