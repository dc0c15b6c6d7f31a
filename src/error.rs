use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::Endpoint;

pub type Result<T> = std::result::Result<T, FormError>;

/// Every failure is fatal to a run; nothing here is retried.
#[derive(Error, Debug)]
pub enum FormError {
    /// Endpoint unreachable, timed out, or answered with a non-2xx status.
    #[error("{endpoint} request to {url} failed: {message}")]
    Network {
        endpoint: Endpoint,
        url: String,
        message: String,
    },

    /// Body was not valid JSON or did not match the expected record shape.
    #[error("invalid {endpoint} json: {source}")]
    Parse {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("inconsistent data: {0}")]
    DataConsistency(String),

    #[error("no fixtures found for gameweek {gameweek}")]
    MissingFixture { gameweek: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed writing report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl FormError {
    pub fn network(endpoint: Endpoint, url: &str, message: impl Into<String>) -> Self {
        Self::Network {
            endpoint,
            url: url.to_string(),
            message: message.into(),
        }
    }

    pub fn data_consistency(msg: impl Into<String>) -> Self {
        Self::DataConsistency(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
