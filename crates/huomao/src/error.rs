use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("channel list not found in payload")]
    MissingChannelList,
    #[error("missing or malformed field: {0}")]
    InvalidField(&'static str),
    #[error("no live channels")]
    NoLiveChannels,
}

impl ExtractorError {
    /// Whether this error originated on the wire rather than in the payload.
    pub fn is_network(&self) -> bool {
        matches!(self, ExtractorError::HttpError(_))
    }
}
