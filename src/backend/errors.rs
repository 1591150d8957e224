use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("order not found")]
    OrderNotFound,
    #[error("order service is disabled in mock mode")]
    Disabled,
    #[error("failed to parse string as url: {0}")]
    UrlParseError(#[from] url::ParseError),
}
