use thiserror::Error;

/// Failure taxonomy for a tag retrieval run.
///
/// Precondition and infrastructure failures abort the whole run; rejected
/// pair records are not errors and never show up here (they are filtered and
/// logged by the validator instead).
#[derive(Error, Debug)]
pub enum TagsError {
    #[error("Unsupported chain id: {0} (only 42161 is supported)")] UnsupportedChain(String),

    #[error("Missing subgraph API key")] MissingCredential,

    #[error("Transport error: {0}")] Transport(String),

    #[error("Subgraph query error: {0}")] UpstreamQuery(String),

    #[error("Malformed subgraph response: {0}")] MalformedResponse(String),

    #[error("Unknown error: {0}")] Unknown(String),
}

impl From<reqwest::Error> for TagsError {
    fn from(err: reqwest::Error) -> Self {
        TagsError::Transport(format!("HTTP request failed: {}", err))
    }
}

pub type TagsResult<T> = Result<T, TagsError>;
