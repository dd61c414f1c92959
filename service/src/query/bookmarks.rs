//! [`Query`] collection related to [`Bookmark`]s.

use std::collections::HashSet;

use common::{
    operations::{By, Select},
    pagination::Cursor,
};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Bookmark;
use crate::{
    domain::{room, Session},
    infra::{api, Api},
    read::bookmark::list as bookmarks,
    Service,
};

use super::{ApiQuery, Query};

/// Queries a single [`bookmarks::Page`].
pub type Page<'s> = ApiQuery<By<bookmarks::Page, bookmarks::Selector<'s>>>;

/// Queries IDs of all the [`Room`]s bookmarked by the [`Session`] owner.
///
/// [`Room`]: crate::domain::Room
#[derive(Clone, Copy, Debug)]
pub struct RoomIds<'s> {
    /// [`Session`] to authenticate with.
    pub session: &'s Session,
}

impl<'s, A> Query<RoomIds<'s>> for Service<A>
where
    A: for<'a> Api<
        Select<By<bookmarks::Page, bookmarks::Selector<'a>>>,
        Ok = bookmarks::Page,
        Err = Traced<api::Error>,
    >,
{
    type Ok = HashSet<room::Id>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        RoomIds { session }: RoomIds<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut ids = HashSet::new();
        let mut visited = HashSet::<Cursor>::new();
        let mut cursor: Option<Cursor> = None;

        for _ in 0..self.config().max_pages {
            let page = self
                .execute(Page::by(bookmarks::Selector {
                    session,
                    cursor: cursor.as_ref(),
                }))
                .await
                .map_err(tracerr::wrap!())?;

            ids.extend(page.items.into_iter().map(|b| b.room_id));

            cursor = match page.next {
                Some(next) if visited.insert(next.clone()) => Some(next),
                Some(next) => {
                    log::warn!(
                        "`Bookmark` list cursor `{next}` loops, stopping",
                    );
                    None
                }
                None => None,
            };
            if cursor.is_none() {
                return Ok(ids);
            }
        }

        log::warn!(
            "`Bookmark` list exceeds {} pages, the rest is skipped",
            self.config().max_pages,
        );
        Ok(ids)
    }
}

#[cfg(test)]
mod spec {
    use std::cell::Cell;

    use common::{
        operations::{By, Select},
        pagination::{Cursor, Page},
    };
    use tracerr::Traced;

    use crate::{
        domain::{bookmark, room, Bookmark, Session},
        infra::{api, Api},
        read::bookmark::list as bookmarks,
        Config, Service,
    };

    use super::RoomIds;

    /// [`Api`] serving two [`Bookmark`] pages, the second one pointing back
    /// to itself.
    #[derive(Debug, Default)]
    struct Looping {
        calls: Cell<usize>,
    }

    fn bookmark(id: u64, room_id: u64) -> Bookmark {
        Bookmark {
            id: bookmark::Id::from(id),
            room_id: room::Id::from(room_id),
        }
    }

    impl<'s> Api<Select<By<bookmarks::Page, bookmarks::Selector<'s>>>>
        for Looping
    {
        type Ok = bookmarks::Page;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<bookmarks::Page, bookmarks::Selector<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            self.calls.set(self.calls.get() + 1);

            let selector = by.into_inner();
            if selector.session.token.expose() != "token" {
                return Err(tracerr::new!(api::Error::Unauthorized));
            }

            Ok(match selector.cursor.map(ToString::to_string).as_deref() {
                None => Page {
                    items: vec![bookmark(1, 10), bookmark(2, 20)],
                    next: Cursor::new("https://api/bookmarks/?page=2"),
                    previous: None,
                    count: Some(3),
                },
                Some(_) => Page {
                    items: vec![bookmark(3, 30), bookmark(4, 20)],
                    next: Cursor::new("https://api/bookmarks/?page=2"),
                    previous: None,
                    count: Some(3),
                },
            })
        }
    }

    #[tokio::test]
    async fn collects_room_ids_across_pages() {
        let service = Service::new(Config::default(), Looping::default());
        let session = Session::new("token").unwrap();

        let ids = service
            .execute(RoomIds { session: &session })
            .await
            .unwrap();

        let mut ids = ids.into_iter().map(u64::from).collect::<Vec<_>>();
        ids.sort_unstable();
        assert_eq!(ids, [10, 20, 30]);
        assert_eq!(service.api().calls.get(), 2);
    }

    #[tokio::test]
    async fn respects_page_limit() {
        let config = Config {
            max_pages: 1,
            ..Config::default()
        };
        let service = Service::new(config, Looping::default());
        let session = Session::new("token").unwrap();

        let ids = service
            .execute(RoomIds { session: &session })
            .await
            .unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(service.api().calls.get(), 1);
    }

    #[tokio::test]
    async fn fails_when_unauthorized() {
        let service = Service::new(Config::default(), Looping::default());
        let session = Session::new("expired").unwrap();

        let err = service
            .execute(RoomIds { session: &session })
            .await
            .unwrap_err();

        assert!(err.as_ref().is_unauthorized());
    }
}
