use thiserror::Error;

/// Unified result type for the wall layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the layout engine and its configuration layer.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid engine constant `{name}`: {reason}")]
    InvalidConstant { name: &'static str, reason: String },
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("JSON error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
