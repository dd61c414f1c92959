//! [`Command`] for toggling a [`Bookmark`].

use common::operations::{By, Toggle};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{bookmark, room, Session},
    infra::{api, Api},
    read::bookmark::toggle,
    Service,
};
#[cfg(doc)]
use crate::domain::{Bookmark, Room};

use super::Command;

/// [`Command`] for toggling a [`Bookmark`] of a [`Room`].
#[derive(Clone, Copy, Debug)]
pub struct ToggleBookmark<'s> {
    /// [`Session`] of the user toggling the [`Bookmark`], if logged in.
    pub session: Option<&'s Session>,

    /// ID of the [`Room`] to toggle the [`Bookmark`] of.
    pub room_id: room::Id,
}

impl<'s, A> Command<ToggleBookmark<'s>> for Service<A>
where
    A: Api<
        Toggle<By<bookmark::Action, toggle::Target<'s>>>,
        Ok = bookmark::Action,
        Err = Traced<api::Error>,
    >,
{
    type Ok = bookmark::Action;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ToggleBookmark<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ToggleBookmark { session, room_id } = cmd;

        let session = session
            .ok_or(E::LoginRequired)
            .map_err(tracerr::wrap!())?;

        self.api()
            .execute(Toggle(By::new(toggle::Target { session, room_id })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`ToggleBookmark`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    #[from]
    Api(api::Error),

    /// No [`Session`] is provided.
    #[display("Login is required to bookmark a `Room`")]
    LoginRequired,
}

impl ExecutionError {
    /// Indicates whether this [`ExecutionError`] means the user must log in.
    #[must_use]
    pub const fn is_login_required(&self) -> bool {
        match self {
            Self::LoginRequired => true,
            Self::Api(e) => e.is_unauthorized(),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::cell::Cell;

    use common::operations::{By, Toggle};
    use tracerr::Traced;

    use crate::{
        domain::{bookmark, room, Session},
        infra::{api, Api},
        read::bookmark::toggle,
        Config, Service,
    };

    use super::{ExecutionError, ToggleBookmark};

    /// [`Api`] flipping a single bookmark on every request.
    #[derive(Debug, Default)]
    struct Flip {
        bookmarked: Cell<bool>,
        calls: Cell<usize>,
    }

    impl<'s> Api<Toggle<By<bookmark::Action, toggle::Target<'s>>>> for Flip {
        type Ok = bookmark::Action;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Toggle<By<bookmark::Action, toggle::Target<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            self.calls.set(self.calls.get() + 1);
            self.bookmarked.set(!self.bookmarked.get());
            Ok(if self.bookmarked.get() {
                bookmark::Action::Added
            } else {
                bookmark::Action::Removed
            })
        }
    }

    #[tokio::test]
    async fn toggles_back_and_forth() {
        let service = Service::new(Config::default(), Flip::default());
        let session = Session::new("token").unwrap();
        let cmd = ToggleBookmark {
            session: Some(&session),
            room_id: room::Id::from(7),
        };

        assert_eq!(
            service.execute(cmd).await.unwrap(),
            bookmark::Action::Added,
        );
        assert_eq!(
            service.execute(cmd).await.unwrap(),
            bookmark::Action::Removed,
        );
    }

    #[tokio::test]
    async fn requires_login() {
        let service = Service::new(Config::default(), Flip::default());

        let err = service
            .execute(ToggleBookmark {
                session: None,
                room_id: room::Id::from(7),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::LoginRequired));
        assert!(err.as_ref().is_login_required());
        assert_eq!(service.api().calls.get(), 0);
    }
}
