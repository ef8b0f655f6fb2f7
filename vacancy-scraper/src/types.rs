use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' failed with status {status}")]
    RequestNotOk { url: String, status: StatusCode },
    #[error("Missing credential, environment variable '{0}' is not set")]
    MissingCredential(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
