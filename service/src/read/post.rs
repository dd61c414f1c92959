//! [`Post`]-related read definitions.

#[cfg(doc)]
use crate::domain::Post;

pub mod list {
    //! [`Post`] list definitions.

    use common::pagination::{self, Cursor};

    use crate::domain::{Post, Session};

    /// Page of the community board.
    pub type Page = pagination::Page<Post>;

    /// Selector of a [`Page`] of the community board.
    #[derive(Clone, Debug)]
    pub struct Selector<'s> {
        /// [`Session`] to personalize [`Post::liked`] with, if logged in.
        pub session: Option<&'s Session>,

        /// [`Cursor`] of the [`Page`] to select, or the first one.
        pub cursor: Option<Cursor>,
    }
}

pub mod create {
    //! [`Post`] creation definitions.

    use crate::domain::{post, Content, Session};
    #[cfg(doc)]
    use crate::domain::Post;

    /// Draft of a new [`Post`].
    #[derive(Clone, Debug)]
    pub struct Draft<'s> {
        /// [`Session`] of the author.
        pub session: &'s Session,

        /// Title of the [`Post`].
        pub title: post::Title,

        /// Text of the [`Post`].
        pub content: Content,
    }
}

pub mod like {
    //! [`Post`] like toggling definitions.

    use crate::domain::{post, Session};
    #[cfg(doc)]
    use crate::domain::Post;

    /// Target of toggling a like of a [`Post`].
    #[derive(Clone, Copy, Debug)]
    pub struct Target<'s> {
        /// [`Session`] to authenticate with.
        pub session: &'s Session,

        /// ID of the [`Post`] to toggle the like of.
        pub post_id: post::Id,
    }
}
