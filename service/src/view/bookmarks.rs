//! [`BookmarkOverlay`] mirroring the server bookmark state.

use std::collections::HashSet;

use tracerr::Traced;
use tracing as log;

use crate::{
    command::{toggle_bookmark, Command, ToggleBookmark},
    domain::{bookmark, room, Session},
    infra::api,
    query::{bookmarks::RoomIds, Query},
};
#[cfg(doc)]
use crate::domain::{Bookmark, Room};

/// Client-side set of bookmarked [`Room`]s with optimistic toggling.
#[derive(Clone, Debug, Default)]
pub struct BookmarkOverlay {
    /// IDs of the bookmarked [`Room`]s.
    ids: HashSet<room::Id>,
}

/// Optimistic toggle awaiting the server answer.
///
/// Must be either [`confirm`]ed or [`revert`]ed.
///
/// [`confirm`]: BookmarkOverlay::confirm
/// [`revert`]: BookmarkOverlay::revert
#[derive(Debug)]
#[must_use = "must be either confirmed or reverted"]
pub struct Tentative {
    /// ID of the toggled [`Room`].
    room_id: room::Id,

    /// Membership before the toggle.
    was_bookmarked: bool,
}

impl Tentative {
    /// Returns ID of the toggled [`Room`].
    #[must_use]
    pub const fn room_id(&self) -> room::Id {
        self.room_id
    }
}

impl BookmarkOverlay {
    /// Indicates whether the provided [`Room`] is bookmarked.
    #[must_use]
    pub fn contains(&self, room_id: room::Id) -> bool {
        self.ids.contains(&room_id)
    }

    /// Returns IDs of all the bookmarked [`Room`]s.
    #[must_use]
    pub const fn ids(&self) -> &HashSet<room::Id> {
        &self.ids
    }

    /// Replaces the whole set with the provided [`Room`] IDs.
    pub fn seed(&mut self, ids: impl IntoIterator<Item = room::Id>) {
        self.ids = ids.into_iter().collect();
    }

    /// Flips the membership of the provided [`Room`] locally.
    pub fn begin(&mut self, room_id: room::Id) -> Tentative {
        let was_bookmarked = !self.ids.insert(room_id);
        if was_bookmarked {
            _ = self.ids.remove(&room_id);
        }
        Tentative {
            room_id,
            was_bookmarked,
        }
    }

    /// Settles the [`Tentative`] toggle with the [`bookmark::Action`]
    /// reported by the server.
    pub fn confirm(&mut self, tentative: Tentative, action: bookmark::Action) {
        let Tentative { room_id, .. } = tentative;
        if action.is_bookmarked() {
            _ = self.ids.insert(room_id);
        } else {
            _ = self.ids.remove(&room_id);
        }
    }

    /// Rolls the [`Tentative`] toggle back.
    pub fn revert(&mut self, tentative: Tentative) {
        let Tentative {
            room_id,
            was_bookmarked,
        } = tentative;
        log::debug!("reverting `Bookmark` toggle of `Room(id: {room_id})`");
        if was_bookmarked {
            _ = self.ids.insert(room_id);
        } else {
            _ = self.ids.remove(&room_id);
        }
    }

    /// Seeds this [`BookmarkOverlay`] with all the [`Bookmark`]s of the
    /// [`Session`] owner.
    ///
    /// # Errors
    ///
    /// If the [`Bookmark`]s cannot be fetched, in which case the set is left
    /// intact.
    pub async fn initialize<'s, S>(
        &mut self,
        service: &S,
        session: &'s Session,
    ) -> Result<(), Traced<api::Error>>
    where
        S: Query<
            RoomIds<'s>,
            Ok = HashSet<room::Id>,
            Err = Traced<api::Error>,
        >,
    {
        let ids = service
            .execute(RoomIds { session })
            .await
            .map_err(tracerr::wrap!())?;
        log::debug!("{} `Bookmark`s loaded", ids.len());
        self.ids = ids;
        Ok(())
    }

    /// Toggles the [`Bookmark`] of the provided [`Room`] optimistically,
    /// settling it with the server answer.
    ///
    /// # Errors
    ///
    /// - [`toggle_bookmark::ExecutionError::LoginRequired`] if no [`Session`]
    ///   is provided, without touching the set or the server.
    /// - Any [`api::Error`], after rolling the set back.
    pub async fn toggle<'s, S>(
        &mut self,
        service: &S,
        session: Option<&'s Session>,
        room_id: room::Id,
    ) -> Result<bookmark::Action, Traced<toggle_bookmark::ExecutionError>>
    where
        S: Command<
            ToggleBookmark<'s>,
            Ok = bookmark::Action,
            Err = Traced<toggle_bookmark::ExecutionError>,
        >,
    {
        if session.is_none() {
            return Err(tracerr::new!(
                toggle_bookmark::ExecutionError::LoginRequired
            ));
        }

        let tentative = self.begin(room_id);
        match service.execute(ToggleBookmark { session, room_id }).await {
            Ok(action) => {
                self.confirm(tentative, action);
                Ok(action)
            }
            Err(e) => {
                self.revert(tentative);
                Err(e).map_err(tracerr::wrap!())
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{cell::Cell, collections::HashSet};

    use common::{
        operations::{By, Select, Toggle},
        pagination::Page,
    };
    use tracerr::Traced;

    use crate::{
        command::toggle_bookmark::ExecutionError,
        domain::{bookmark, room, Bookmark, Session},
        infra::{api, Api},
        read::bookmark::{list as bookmarks, toggle},
        Config, Service,
    };

    use super::BookmarkOverlay;

    fn id(n: u64) -> room::Id {
        room::Id::from(n)
    }

    /// [`Api`] answering every toggle with the configured outcome.
    #[derive(Debug)]
    struct Server {
        answer: Result<bookmark::Action, u16>,
        calls: Cell<usize>,
    }

    impl Server {
        fn answering(answer: Result<bookmark::Action, u16>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl<'s> Api<Toggle<By<bookmark::Action, toggle::Target<'s>>>> for Server {
        type Ok = bookmark::Action;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Toggle<By<bookmark::Action, toggle::Target<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            self.calls.set(self.calls.get() + 1);
            self.answer
                .map_err(|code| tracerr::new!(api::Error::Status(code)))
        }
    }

    impl<'s> Api<Select<By<bookmarks::Page, bookmarks::Selector<'s>>>>
        for Server
    {
        type Ok = bookmarks::Page;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Select<By<bookmarks::Page, bookmarks::Selector<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Page::single(
                [3, 5]
                    .into_iter()
                    .map(|n| Bookmark {
                        id: bookmark::Id::from(n * 10),
                        room_id: id(n),
                    })
                    .collect(),
            ))
        }
    }

    #[test]
    fn flips_optimistically() {
        let mut overlay = BookmarkOverlay::default();

        let tentative = overlay.begin(id(1));
        assert!(overlay.contains(id(1)));

        overlay.confirm(tentative, bookmark::Action::Removed);
        assert!(!overlay.contains(id(1)));
    }

    #[test]
    fn reverts_to_previous_membership() {
        let mut overlay = BookmarkOverlay::default();
        overlay.seed([id(1)]);

        let tentative = overlay.begin(id(1));
        assert!(!overlay.contains(id(1)));
        assert_eq!(tentative.room_id(), id(1));

        overlay.revert(tentative);
        assert!(overlay.contains(id(1)));
    }

    #[tokio::test]
    async fn initializes_from_server() {
        let service = Service::new(
            Config::default(),
            Server::answering(Ok(bookmark::Action::Added)),
        );
        let session = Session::new("token").unwrap();
        let mut overlay = BookmarkOverlay::default();
        overlay.seed([id(1)]);

        overlay.initialize(&service, &session).await.unwrap();

        assert_eq!(*overlay.ids(), HashSet::from([id(3), id(5)]));
    }

    #[tokio::test]
    async fn converges_to_server_answer() {
        let service = Service::new(
            Config::default(),
            Server::answering(Ok(bookmark::Action::Removed)),
        );
        let session = Session::new("token").unwrap();
        let mut overlay = BookmarkOverlay::default();

        let action = overlay
            .toggle(&service, Some(&session), id(2))
            .await
            .unwrap();

        assert_eq!(action, bookmark::Action::Removed);
        assert!(!overlay.contains(id(2)));
    }

    #[tokio::test]
    async fn rolls_back_on_failure() {
        let service =
            Service::new(Config::default(), Server::answering(Err(500)));
        let session = Session::new("token").unwrap();
        let mut overlay = BookmarkOverlay::default();
        overlay.seed([id(2)]);

        let err = overlay
            .toggle(&service, Some(&session), id(2))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Api(api::Error::Status(500)),
        ));
        assert!(overlay.contains(id(2)));
    }

    #[tokio::test]
    async fn fails_fast_without_session() {
        let service = Service::new(
            Config::default(),
            Server::answering(Ok(bookmark::Action::Added)),
        );
        let mut overlay = BookmarkOverlay::default();

        let err = overlay.toggle(&service, None, id(2)).await.unwrap_err();

        assert!(err.as_ref().is_login_required());
        assert!(!overlay.contains(id(2)));
        assert_eq!(service.api().calls.get(), 0);
    }
}
