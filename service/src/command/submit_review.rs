//! [`Command`] for submitting a [`Review`].

use common::operations::{By, Insert};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{review::Rating, room, Content, Review, Session},
    infra::{api, Api},
    read::review::submit,
    Service,
};
#[cfg(doc)]
use crate::domain::Room;

use super::Command;

/// [`Command`] for submitting a new [`Review`] of a [`Room`].
#[derive(Clone, Debug)]
pub struct SubmitReview<'s> {
    /// [`Session`] of the author, if logged in.
    pub session: Option<&'s Session>,

    /// ID of the [`Room`] to review.
    pub room_id: room::Id,

    /// [`Rating`] of the new [`Review`].
    pub rating: Rating,

    /// Text of the new [`Review`].
    pub content: Content,
}

impl<'s, A> Command<SubmitReview<'s>> for Service<A>
where
    A: Api<
        Insert<By<Review, submit::Draft<'s>>>,
        Ok = Review,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Review;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitReview<'s>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitReview {
            session,
            room_id,
            rating,
            content,
        } = cmd;

        let session = session
            .ok_or(E::LoginRequired)
            .map_err(tracerr::wrap!())?;

        self.api()
            .execute(Insert(By::new(submit::Draft {
                session,
                room_id,
                rating,
                content,
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SubmitReview`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    #[from]
    Api(api::Error),

    /// No [`Session`] is provided.
    #[display("Login is required to review a `Room`")]
    LoginRequired,
}
