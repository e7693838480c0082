//! Error types for the request executor.

/// Errors returned by [`RequestExecutor`](crate::RequestExecutor) calls.
///
/// Callers tell the two failure families apart through [`Error::status`]:
/// an HTTP-level failure always carries the status code, a transport failure
/// never does.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a status outside the success set for the method.
    /// `body` is the full response text, which usually embeds a server error code.
    /// It is decoded as UTF-8; invalid byte sequences become U+FFFD, so a
    /// non-UTF-8 body is not kept byte-for-byte.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The request never completed: bad URL, connect failure, or body read failure.
    #[error("Request could not be completed: {0}")]
    Transport(#[from] TransportError),
}

/// Underlying cause of an [`Error::Transport`].
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP transport failure: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Transport(TransportError::InvalidUrl(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::Http(err))
    }
}

impl Error {
    /// HTTP status of the failed call, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(_) => None,
        }
    }

    /// Response body returned alongside a failing status.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { body, .. } => Some(body),
            Error::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Outcome of a single executor call: the raw body on success.
pub type ApiCallResult = Result<String, Error>;
