//! [`Query`] collection related to [`Review`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{room, Review},
    infra::{api, Api},
    read::review::list as reviews,
    Service,
};
#[cfg(doc)]
use crate::domain::Room;

use super::{collect_pages, ApiQuery, Query};

/// Queries a single [`reviews::Page`].
pub type Page = ApiQuery<By<reviews::Page, reviews::Selector>>;

/// Queries all the [`Review`]s of a [`Room`].
#[derive(Clone, Copy, Debug)]
pub struct OfRoom {
    /// ID of the reviewed [`Room`].
    pub room_id: room::Id,
}

impl<A> Query<OfRoom> for Service<A>
where
    A: Api<
        Select<By<reviews::Page, reviews::Selector>>,
        Ok = reviews::Page,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Vec<Review>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        OfRoom { room_id }: OfRoom,
    ) -> Result<Self::Ok, Self::Err> {
        let fetch = move |cursor| {
            self.execute(Page::by(reviews::Selector { room_id, cursor }))
        };
        collect_pages("Review", self.config().max_pages, fetch)
            .await
            .map_err(tracerr::wrap!())
    }
}
