use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {var}")]
    MissingVar { var: &'static str },

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Errors produced by pure domain computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("buy price is zero, arbitrage ratio is undefined")]
    ZeroBuyPrice,

    #[error("no quotation available for exchange `{exchange}`")]
    MissingQuotation { exchange: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error from {endpoint}: {reason}")]
    Api { endpoint: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
