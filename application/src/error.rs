//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::{
    command::{
        create_comment, create_post, submit_review, toggle_bookmark,
        toggle_like,
    },
    infra::api,
};
use tracerr::{Trace, Traced};

/// Defines a new error type of user-facing notices.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// User-facing [`Error`] notice.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an unexpected failure.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_ERROR",
            message: msg.to_string(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for api::Error {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Unauthorized => Some(Notice::LoginRequired.into()),
            Self::Request(_) => Some(Notice::NetworkFailure.into()),
            Self::Status(_) | Self::ForeignCursor(_) | Self::Incomplete(_) => {
                Some(Notice::ServerFailure.into())
            }
            Self::Decode(_) => None,
        }
    }
}

/// Implements [`AsError`] for `ExecutionError`s of the commands requiring a
/// logged in user.
macro_rules! impl_as_error_for_login_required {
    ($($command:ident),* $(,)?) => {$(
        impl AsError for $command::ExecutionError {
            fn try_as_error(&self) -> Option<Error> {
                match self {
                    Self::Api(e) => e.try_as_error(),
                    Self::LoginRequired => Some(Notice::LoginRequired.into()),
                }
            }
        }
    )*};
}

impl_as_error_for_login_required!(
    create_comment,
    create_post,
    submit_review,
    toggle_bookmark,
    toggle_like,
);

define_error! {
    enum Notice {
        #[code = "LOGIN_REQUIRED"]
        #[message = "Login is required"]
        LoginRequired,

        #[code = "NETWORK_FAILURE"]
        #[message = "Server is unreachable, try again later"]
        NetworkFailure,

        #[code = "SERVER_FAILURE"]
        #[message = "Server failed to process the request"]
        ServerFailure,

        #[code = "INVALID_RATING"]
        #[message = "Rating must be from 1 to 5 stars"]
        InvalidRating,

        #[code = "BLANK_TEXT"]
        #[message = "Text must not be blank"]
        BlankText,
    }
}
