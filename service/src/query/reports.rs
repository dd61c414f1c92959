//! [`Query`] collection related to [`Report`]s.

use std::num::NonZeroU32;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{Report, Session},
    infra::{api, Api},
    read::report::list as reports,
    Service,
};

use super::{ApiQuery, Query};

/// Queries a single raw [`reports::Page`].
pub type Page<'s> = ApiQuery<By<reports::Page, reports::Selector<'s>>>;

/// Queries a single page of the [`Session`] owner's [`Report`]s.
#[derive(Clone, Copy, Debug)]
pub struct List<'s> {
    /// [`Session`] to authenticate with.
    pub session: &'s Session,

    /// One-based number of the page to query.
    pub page: NonZeroU32,
}

/// Page of [`Report`]s along with its position in the whole listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// [`Report`]s on this page.
    pub reports: Vec<Report>,

    /// One-based number of this page.
    pub page: NonZeroU32,

    /// Total number of pages, at least one.
    pub total_pages: usize,

    /// Indicates whether a next page exists.
    pub has_next: bool,

    /// Indicates whether a previous page exists.
    pub has_previous: bool,
}

impl<'s, A> Query<List<'s>> for Service<A>
where
    A: Api<
        Select<By<reports::Page, reports::Selector<'s>>>,
        Ok = reports::Page,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Listing;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        List { session, page }: List<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        let fetched = self
            .execute(Page::by(reports::Selector { session, page }))
            .await
            .map_err(tracerr::wrap!())?;

        let total_pages = fetched.total_pages(self.config().report_page_size);
        Ok(Listing {
            has_next: fetched.has_next(),
            has_previous: fetched.previous.is_some() || page.get() > 1,
            reports: fetched.items,
            page,
            total_pages,
        })
    }
}
