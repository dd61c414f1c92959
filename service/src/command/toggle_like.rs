//! [`Command`] for toggling a like of a [`Post`].

use common::operations::{By, Toggle};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{post, Session},
    infra::{api, Api},
    read::post::like,
    Service,
};
#[cfg(doc)]
use crate::domain::Post;

use super::Command;

/// [`Command`] for liking a [`Post`], or withdrawing the like.
#[derive(Clone, Copy, Debug)]
pub struct ToggleLike<'s> {
    /// [`Session`] of the user, if logged in.
    pub session: Option<&'s Session>,

    /// ID of the [`Post`] to toggle the like of.
    pub post_id: post::Id,
}

impl<'s, A> Command<ToggleLike<'s>> for Service<A>
where
    A: Api<
        Toggle<By<post::Like, like::Target<'s>>>,
        Ok = post::Like,
        Err = Traced<api::Error>,
    >,
{
    type Ok = post::Like;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ToggleLike<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ToggleLike { session, post_id } = cmd;

        let session = session
            .ok_or(E::LoginRequired)
            .map_err(tracerr::wrap!())?;

        self.api()
            .execute(Toggle(By::new(like::Target { session, post_id })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`ToggleLike`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    #[from]
    Api(api::Error),

    /// No [`Session`] is provided.
    #[display("Login is required to like a `Post`")]
    LoginRequired,
}
