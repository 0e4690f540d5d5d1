use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("Invalid provider URL: {source}")]
    UrlError {
        #[from]
        source: url::ParseError,
    },

    #[error("Response decode error: {source}")]
    DecodeError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Market data provider error: {0}")]
    ProviderError(String),

    #[error("No market data returned for symbol '{0}'")]
    EmptySeries(String),

    #[error("Unsupported period '{0}'")]
    UnknownPeriod(String),

    #[error("Internal processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
