//! [`Query`] collection related to [`Comment`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{post, Comment},
    infra::{api, Api},
    read::comment::list as comments,
    Service,
};
#[cfg(doc)]
use crate::domain::Post;

use super::{collect_pages, ApiQuery, Query};

/// Queries a single [`comments::Page`].
pub type Page = ApiQuery<By<comments::Page, comments::Selector>>;

/// Queries all the [`Comment`]s under a [`Post`].
#[derive(Clone, Copy, Debug)]
pub struct OfPost {
    /// ID of the commented [`Post`].
    pub post_id: post::Id,
}

impl<A> Query<OfPost> for Service<A>
where
    A: Api<
        Select<By<comments::Page, comments::Selector>>,
        Ok = comments::Page,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Vec<Comment>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        OfPost { post_id }: OfPost,
    ) -> Result<Self::Ok, Self::Err> {
        let fetch = move |cursor| {
            self.execute(Page::by(comments::Selector { post_id, cursor }))
        };
        collect_pages("Comment", self.config().max_pages, fetch)
            .await
            .map_err(tracerr::wrap!())
    }
}
