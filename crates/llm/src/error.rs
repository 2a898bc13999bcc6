use crate::provider::Provider;
use thiserror::Error;

/// Errors from a completion request.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured for the provider serving the model.
    #[error("No API key configured for {0}")]
    MissingApiKey(Provider),

    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("{provider} returned {status}: {body}")]
    Api {
        provider: Provider,
        status: u16,
        body: String,
    },

    /// Response carried no choices.
    #[error("Empty completion from {0}")]
    EmptyResponse(Provider),
}
