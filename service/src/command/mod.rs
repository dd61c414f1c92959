//! [`Command`] definition.

pub mod create_comment;
pub mod create_post;
pub mod submit_review;
pub mod toggle_bookmark;
pub mod toggle_like;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_comment::CreateComment, create_post::CreatePost,
    submit_review::SubmitReview, toggle_bookmark::ToggleBookmark,
    toggle_like::ToggleLike,
};
