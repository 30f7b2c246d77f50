//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the Worldpay Total client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The operation name is not registered in the endpoint registry.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    /// The endpoint template of the operation needs path parameters that were not supplied.
    #[error("Operation {operation} requires {required} path parameter(s), {supplied} supplied")]
    MissingParameter {
        operation: String,
        required: usize,
        supplied: usize,
    },
    /// The call did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    /// The gateway host could not be reached.
    #[error("Could not connect: {0}")]
    Connection(#[source] reqwest::Error),
    /// The redirect limit was exceeded.
    #[error("Too many redirects: {0}")]
    TooManyRedirects(#[source] reqwest::Error),
    /// The gateway answered with an HTTP status other than `200 OK`.
    #[error("{0}")]
    Http(#[from] ApiError),
    /// The response body is not valid JSON, or does not match the expected shape.
    #[error("Malformed response for {operation}: {source}")]
    MalformedResponse {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
    /// The gateway processed the call but rejected the operation.
    #[error("{0}")]
    BusinessRejection(#[from] Rejection),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

/// Fieldless discriminant of an [`Error`](crate::error::Error), handy when branching on the failure class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownOperation,
    MissingParameter,
    Timeout,
    Connection,
    TooManyRedirects,
    Http,
    MalformedResponse,
    BusinessRejection,
    Other,
}

impl Error {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownOperation(_) => ErrorKind::UnknownOperation,
            Error::MissingParameter { .. } => ErrorKind::MissingParameter,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::Connection(_) => ErrorKind::Connection,
            Error::TooManyRedirects(_) => ErrorKind::TooManyRedirects,
            Error::Http(_) => ErrorKind::Http,
            Error::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Error::BusinessRejection(_) => ErrorKind::BusinessRejection,
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout(e)
        } else if e.is_redirect() {
            Error::TooManyRedirects(e)
        } else if let Some(status) = e.status() {
            Error::Http(ApiError {
                status: status.as_u16(),
                body: None,
            })
        } else if e.is_builder() {
            Error::Other(e.into())
        } else {
            Error::Connection(e)
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Worldpay HTTP error: the gateway answered with a status other than `200 OK`.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Body of the response, if any was returned.
    pub body: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Worldpay HTTP error {}", self.status)?;

        if let Some(ref body) = self.body {
            write!(f, "\nResponse body: {}", body)?;
        }

        Ok(())
    }
}

/// A response that was decoded successfully but whose response code reports a failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Gateway response code (`1` means approved).
    pub response_code: Option<i64>,
    /// Short result string, e.g. `DECLINED`.
    pub result: Option<String>,
    /// Human readable explanation.
    pub message: Option<String>,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction not processed")?;

        if let Some(code) = self.response_code {
            write!(f, " (response code {})", code)?;
        }

        if let Some(ref result) = self.result {
            write!(f, ": {}", result)?;
        }

        if let Some(ref message) = self.message {
            write!(f, "\nMessage: {}", message)?;
        }

        Ok(())
    }
}
