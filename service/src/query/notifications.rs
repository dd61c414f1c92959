//! [`Query`] collection related to [`Notification`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{Notification, Session},
    infra::{api, Api},
    read::notification::list as notifications,
    Service,
};

use super::{collect_pages, ApiQuery, Query};

/// Queries a single [`notifications::Page`].
pub type Page<'s> =
    ApiQuery<By<notifications::Page, notifications::Selector<'s>>>;

/// Queries all the [`Notification`]s of the [`Session`] owner.
#[derive(Clone, Copy, Debug)]
pub struct List<'s> {
    /// [`Session`] to authenticate with.
    pub session: &'s Session,
}

impl<'s, A> Query<List<'s>> for Service<A>
where
    A: Api<
        Select<By<notifications::Page, notifications::Selector<'s>>>,
        Ok = notifications::Page,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Vec<Notification>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        List { session }: List<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let fetch = move |cursor| {
            self.execute(Page::by(notifications::Selector { session, cursor }))
        };
        collect_pages("Notification", self.config().max_pages, fetch)
            .await
            .map_err(tracerr::wrap!())
    }
}
