//! [`Context`]-related definitions.

use service::{domain::Session, infra::Http};

use crate::{config, error::Notice, Error, Service};

/// Application context.
///
/// Holds the [`Service`] along with the [`Session`] of the logged in user,
/// passed explicitly to every operation requiring authentication.
#[derive(Debug)]
pub struct Context<A = Http> {
    /// [`Service`] instance.
    service: Service<A>,

    /// Current [`Session`], if logged in.
    session: Option<Session>,

    /// Map configuration.
    map: config::Map,
}

impl<A> Context<A> {
    /// Creates a new [`Context`] out of the provided parameters.
    #[must_use]
    pub const fn new(
        service: Service<A>,
        session: Option<Session>,
        map: config::Map,
    ) -> Self {
        Self {
            service,
            session,
            map,
        }
    }

    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub const fn service(&self) -> &Service<A> {
        &self.service
    }

    /// Returns the current [`Session`], if logged in.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the current [`Session`].
    ///
    /// # Errors
    ///
    /// If the user is not logged in.
    pub fn current_session(&self) -> Result<&Session, Error> {
        self.session
            .as_ref()
            .ok_or_else(|| Notice::LoginRequired.into())
    }

    /// Returns the map configuration of this [`Context`].
    #[must_use]
    pub const fn map(&self) -> &config::Map {
        &self.map
    }
}
