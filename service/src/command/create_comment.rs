//! [`Command`] for creating a [`Comment`].

use common::operations::{By, Insert};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{post, Comment, Content, Session},
    infra::{api, Api},
    read::comment::create,
    Service,
};
#[cfg(doc)]
use crate::domain::Post;

use super::Command;

/// [`Command`] for commenting a [`Post`].
#[derive(Clone, Debug)]
pub struct CreateComment<'s> {
    /// [`Session`] of the author, if logged in.
    pub session: Option<&'s Session>,

    /// ID of the [`Post`] to comment.
    pub post_id: post::Id,

    /// Text of the new [`Comment`].
    pub content: Content,
}

impl<'s, A> Command<CreateComment<'s>> for Service<A>
where
    A: Api<
        Insert<By<Comment, create::Draft<'s>>>,
        Ok = Comment,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Comment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateComment<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateComment {
            session,
            post_id,
            content,
        } = cmd;

        let session = session
            .ok_or(E::LoginRequired)
            .map_err(tracerr::wrap!())?;

        self.api()
            .execute(Insert(By::new(create::Draft {
                session,
                post_id,
                content,
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateComment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    #[from]
    Api(api::Error),

    /// No [`Session`] is provided.
    #[display("Login is required to comment a `Post`")]
    LoginRequired,
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert};
    use tracerr::Traced;

    use crate::{
        domain::{comment, post, Comment, Content, Session},
        infra::{api, Api},
        read::comment::create,
        Config, Service,
    };

    use super::{CreateComment, ExecutionError};

    /// [`Api`] refusing to comment missing posts.
    #[derive(Clone, Copy, Debug)]
    struct OnePost;

    impl<'s> Api<Insert<By<Comment, create::Draft<'s>>>> for OnePost {
        type Ok = Comment;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            Insert(by): Insert<By<Comment, create::Draft<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            let create::Draft {
                post_id, content, ..
            } = by.into_inner();
            if post_id != post::Id::from(1) {
                return Err(tracerr::new!(api::Error::Status(404)));
            }
            Ok(Comment {
                id: comment::Id::from(10),
                post_id,
                content,
                author: None,
                created_at: None,
            })
        }
    }

    fn cmd(session: Option<&Session>, post_id: u64) -> CreateComment<'_> {
        CreateComment {
            session,
            post_id: post::Id::from(post_id),
            content: Content::new("저도 궁금해요").unwrap(),
        }
    }

    #[tokio::test]
    async fn comments_post() {
        let service = Service::new(Config::default(), OnePost);
        let session = Session::new("token").unwrap();

        let comment = service.execute(cmd(Some(&session), 1)).await.unwrap();

        assert_eq!(comment.id, comment::Id::from(10));
        assert_eq!(comment.content.to_string(), "저도 궁금해요");
    }

    #[tokio::test]
    async fn wraps_api_errors() {
        let service = Service::new(Config::default(), OnePost);
        let session = Session::new("token").unwrap();

        let err = service.execute(cmd(Some(&session), 2)).await.unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::Api(api::Error::Status(404)),
        ));

        let err = service.execute(cmd(None, 1)).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::LoginRequired));
    }
}
