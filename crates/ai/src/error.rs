/// Errors from the generative-model layer.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model API returned a non-2xx status code.
    #[error("Model API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The model response could not be parsed into the expected shape.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// The model response parsed but violated the output contract
    /// (e.g. a confidence score outside [0.0, 1.0]).
    #[error("Model response violates output contract: {0}")]
    ContractViolation(String),
}
