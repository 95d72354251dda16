use reqwest::header::InvalidHeaderValue;

use thiserror::Error;

/// Result type for `wallhaven`, using [`wallhaven::error::Error`].
///
/// [`wallhaven::error::Error`]: enum.Error.html
pub type Result<T> = ::std::result::Result<T, Error>;

/// Enum for `wallhaven` errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with `404 Not Found`: the wallpaper, tag, user or collection doesn't
    /// exist (or isn't visible with the current API key).
    #[error("HTTP error 404 Not Found: the requested resource doesn't exist")]
    NotFound,

    /// The API answered with `401 Unauthorized`. Usually means the API key is invalid, or that
    /// NSFW content was requested without one.
    #[error("HTTP error 401 Unauthorized: the API key is missing or invalid")]
    Unauthorized,

    /// An endpoint that only works for authenticated users was called on a client without an API
    /// key. No request was made. Contains a description of what needed the key.
    #[error("an API key is required to {0}")]
    CredentialRequired(&'static str),

    /// The request couldn't be sent or its response couldn't be read.
    #[error("couldn't send request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body didn't have the expected shape.
    #[error("couldn't decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client couldn't be created. Contains a description of the error.
    #[error("couldn't create client: {0}")]
    CannotCreateClient(String),
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        Error::CannotCreateClient(format!("Invalid header value: {}", e))
    }
}

impl Error {
    /// Whether this error means the requested resource doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    /// Whether retrying with a (valid) API key could make this request succeed.
    pub fn needs_api_key(&self) -> bool {
        matches!(self, Error::Unauthorized | Error::CredentialRequired(_))
    }
}
