use thiserror::Error;

/// Failures from the travel-commerce API calls.
///
/// Authentication failures collapse to a message built from the response
/// status alone, so the client credentials never reach a log line or the
/// interface. Offer and order failures keep the upstream status and body
/// verbatim.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Upstream returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}
