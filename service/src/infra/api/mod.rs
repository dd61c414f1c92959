//! REST [`Api`]-related implementations.

#[cfg(feature = "http")]
mod dto;
#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Operation of the REST API.
pub use common::Handler as Api;

/// [`Api`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request could not be sent or its response could not be read.
    #[display("Request failed: {_0}")]
    Request(#[error(not(source))] String),

    /// Server requires an authenticated session.
    #[display("Authentication required")]
    Unauthorized,

    /// Server answered with an unexpected status code.
    #[display("Unexpected `{_0}` response status")]
    Status(#[error(not(source))] u16),

    /// Pagination cursor points outside the origin of the REST API.
    #[display("Pagination cursor `{_0}` leaves the API origin")]
    ForeignCursor(#[error(not(source))] String),

    /// Created record is returned without its required fields.
    #[display("`{_0}` is returned incomplete")]
    Incomplete(#[error(not(source))] &'static str),

    /// Response body is not of the expected shape.
    #[display("Failed to decode response body: {_0}")]
    #[from]
    Decode(serde_json::Error),
}

impl Error {
    /// Indicates whether this [`Error`] means the user must log in.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
