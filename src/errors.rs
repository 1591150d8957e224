use crate::backend::BackendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("socket address parsing error: {0}")]
    SocketAddressParsingError(#[from] std::net::AddrParseError),
    #[error(transparent)]
    AppErrors(#[from] AppErrors),
}

#[derive(Error, Debug)]
pub enum AppErrors {
    #[error("backend error: {0}")]
    BackendError(#[from] BackendError),
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("unknown backend mode, use either `live` or `mock`")]
    UnknownBackendMode,
    #[error("`{0}` is not a valid backend base url")]
    InvalidBaseUrl(String),
}
