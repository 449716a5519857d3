// src/openalex/error.rs
use thiserror::Error;

/// Any failure talking to OpenAlex. Every variant aborts the current action.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub(crate) fn from_ureq(endpoint: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => FetchError::Status {
                status,
                endpoint: endpoint.to_string(),
            },
            other => FetchError::Transport {
                endpoint: endpoint.to_string(),
                reason: other.to_string(),
            },
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Status { endpoint, .. }
            | FetchError::Transport { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => endpoint,
        }
    }
}
