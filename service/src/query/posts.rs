//! [`Query`] collection related to the community board.

use common::operations::By;

#[cfg(doc)]
use crate::domain::Post;
use crate::read::post::list as posts;

use super::ApiQuery;

/// Queries a single [`posts::Page`] of the community board, newest
/// [`Post`]s first.
pub type Feed<'s> = ApiQuery<By<posts::Page, posts::Selector<'s>>>;

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select},
        pagination::{Cursor, Page},
    };
    use tracerr::Traced;

    use crate::{
        domain::{post, Content, Post, Session},
        infra::{api, Api},
        read::post::list as posts,
        Config, Service,
    };

    use super::Feed;

    /// [`Api`] marking posts liked only for logged in users.
    #[derive(Clone, Copy, Debug)]
    struct Board;

    impl<'s> Api<Select<By<posts::Page, posts::Selector<'s>>>> for Board {
        type Ok = posts::Page;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<posts::Page, posts::Selector<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            let posts::Selector { session, cursor } = by.into_inner();

            Ok(Page {
                items: vec![Post {
                    id: post::Id::from(1),
                    title: post::Title::new("신촌 자취 팁").unwrap(),
                    content: Content::new("관리비 꼭 확인하세요").unwrap(),
                    author: Some("세입자".to_owned()),
                    like_count: 3,
                    comment_count: 1,
                    liked: session.is_some(),
                    created_at: None,
                }],
                next: cursor.is_none().then(|| Cursor::new("p2")).flatten(),
                previous: None,
                count: Some(2),
            })
        }
    }

    #[tokio::test]
    async fn personalizes_feed_by_session() {
        let service = Service::new(Config::default(), Board);
        let session = Session::new("token").unwrap();

        let anonymous = service
            .execute(Feed::by(posts::Selector {
                session: None,
                cursor: None,
            }))
            .await
            .unwrap();
        assert!(!anonymous.items[0].liked);
        assert!(anonymous.has_next());

        let personal = service
            .execute(Feed::by(posts::Selector {
                session: Some(&session),
                cursor: anonymous.next,
            }))
            .await
            .unwrap();
        assert!(personal.items[0].liked);
        assert!(!personal.has_next());
    }
}
