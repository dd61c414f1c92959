//! [`Session`] definitions.

use derive_more::Debug;
use secrecy::{ExposeSecret as _, SecretString};

/// Authenticated session of the current user.
///
/// Passed explicitly to every operation requiring authentication. Having no
/// [`Session`] means the user is not logged in.
#[derive(Debug)]
pub struct Session {
    /// Access [`Token`] of this [`Session`].
    pub token: Token,
}

impl Session {
    /// Creates a new [`Session`] out of the provided access `token`.
    ///
    /// [`None`] is returned if the `token` is blank.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        Token::new(token).map(|token| Self { token })
    }
}

/// Access token of a [`Session`].
#[derive(Debug)]
#[debug("Token(***)")]
pub struct Token(SecretString);

impl Token {
    /// Creates a new [`Token`] unless the provided `token` is blank.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let token = token.trim();
        (!token.is_empty())
            .then(|| Self(SecretString::from(token.to_owned())))
    }

    /// Exposes the secret value of this [`Token`].
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[cfg(test)]
mod spec {
    use super::{Session, Token};

    #[test]
    fn rejects_blank_tokens() {
        assert!(Session::new("").is_none());
        assert!(Session::new("   ").is_none());
        assert_eq!(Token::new(" abc ").unwrap().expose(), "abc");
    }

    #[test]
    fn hides_token_in_debug() {
        let session = Session::new("very-secret").unwrap();
        assert!(!format!("{session:?}").contains("very-secret"));
    }
}
