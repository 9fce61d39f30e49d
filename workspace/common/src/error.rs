use thiserror::Error;

/// Error types shared by the marketplace crates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// A detail lookup did not match any record in the catalog
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// User input rejected before any action was invoked
    #[error("{0}")]
    Validation(String),

    /// A marketplace action reported failure
    #[error("Action failed: {0}")]
    Action(String),

    /// An unknown sort key, filter key or enum value
    #[error("Invalid {what}: '{value}'")]
    Parse { what: &'static str, value: String },

    /// Session storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Session data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MarketError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        MarketError::NotFound { kind, id: id.into() }
    }

    pub fn parse(what: &'static str, value: impl Into<String>) -> Self {
        MarketError::Parse { what, value: value.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MarketError::NotFound { .. })
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(error: serde_json::Error) -> Self {
        MarketError::Serialization(error.to_string())
    }
}

impl From<std::convert::Infallible> for MarketError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Type alias for Result with MarketError
pub type Result<T> = std::result::Result<T, MarketError>;
