//! [`Query`] definition.

pub mod bookmarks;
pub mod comments;
pub mod notifications;
pub mod posts;
pub mod reports;
pub mod reviews;
pub mod rooms;

use std::{collections::HashSet, future::Future};

use common::{
    operations::{By, Select},
    pagination::{Cursor, Page},
};
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{api, Api},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a single `T`ype from the REST [`Api`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct ApiQuery<T>(T);

impl<W, B> ApiQuery<By<W, B>> {
    /// Creates a new [`ApiQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<A, W, B> Query<ApiQuery<By<W, B>>> for Service<A>
where
    A: Api<Select<By<W, B>>, Ok = W, Err = Traced<api::Error>>,
{
    type Ok = W;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        ApiQuery(by): ApiQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.api().execute(Select(by)).await.map_err(tracerr::wrap!())
    }
}

/// Collects the items of a whole listing, following its [`Page`]s from the
/// first one with the provided `fetch`.
///
/// Stops at the last [`Page`], on a [`Cursor`] seen before, or after
/// `max_pages` pages, logging the latter two.
async fn collect_pages<T, F, Fut>(
    listing: &str,
    max_pages: usize,
    mut fetch: F,
) -> Result<Vec<T>, Traced<api::Error>>
where
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<Page<T>, Traced<api::Error>>>,
{
    let mut items = Vec::new();
    let mut visited = HashSet::<Cursor>::new();
    let mut cursor = None;

    for _ in 0..max_pages {
        let page = fetch(cursor.take()).await.map_err(tracerr::wrap!())?;
        items.extend(page.items);

        match page.next {
            Some(next) if visited.insert(next.clone()) => {
                cursor = Some(next);
            }
            Some(next) => {
                log::warn!("`{listing}` list cursor `{next}` loops, stopping");
                break;
            }
            None => break,
        }
    }
    if cursor.is_some() {
        log::warn!(
            "`{listing}` list exceeds {max_pages} pages, the rest is skipped",
        );
    }

    Ok(items)
}
