//! [`Query`] collection related to the [`Room`] list.

use std::collections::HashSet;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Room,
    infra::{api, Api},
    read::room::list as rooms,
    Service,
};

use super::{collect_pages, ApiQuery, Query};

/// Queries a single [`rooms::Page`].
pub type Page = ApiQuery<By<rooms::Page, rooms::Selector>>;

/// Queries the whole [`Room`] list, following all its pages.
#[derive(Clone, Debug, Default)]
pub struct List {
    /// Search query narrowing the list server-side.
    pub search: Option<String>,
}

impl<A> Query<List> for Service<A>
where
    A: Api<
        Select<By<rooms::Page, rooms::Selector>>,
        Ok = rooms::Page,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Vec<Room>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        List { search }: List,
    ) -> Result<Self::Ok, Self::Err> {
        let search = &search;
        let fetch = move |cursor| {
            self.execute(Page::by(rooms::Selector {
                search: search.clone(),
                cursor,
            }))
        };
        let rooms = collect_pages("Room", self.config().max_pages, fetch)
            .await
            .map_err(tracerr::wrap!())?;

        let mut ids = HashSet::new();
        let rooms = rooms.into_iter().filter(|r| ids.insert(r.id)).collect();

        Ok(rooms)
    }
}
