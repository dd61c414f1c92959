//! [`Command`] for creating a [`Post`].

use common::operations::{By, Insert};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{post, Content, Post, Session},
    infra::{api, Api},
    read::post::create,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Post`] on the community board.
#[derive(Clone, Debug)]
pub struct CreatePost<'s> {
    /// [`Session`] of the author, if logged in.
    pub session: Option<&'s Session>,

    /// Title of the new [`Post`].
    pub title: post::Title,

    /// Text of the new [`Post`].
    pub content: Content,
}

impl<'s, A> Command<CreatePost<'s>> for Service<A>
where
    A: Api<
        Insert<By<Post, create::Draft<'s>>>,
        Ok = Post,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Post;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreatePost<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreatePost {
            session,
            title,
            content,
        } = cmd;

        let session = session
            .ok_or(E::LoginRequired)
            .map_err(tracerr::wrap!())?;

        self.api()
            .execute(Insert(By::new(create::Draft {
                session,
                title,
                content,
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreatePost`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    #[from]
    Api(api::Error),

    /// No [`Session`] is provided.
    #[display("Login is required to write a `Post`")]
    LoginRequired,
}
