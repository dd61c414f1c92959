//! [`Comment`]-related read definitions.

#[cfg(doc)]
use crate::domain::Comment;

pub mod list {
    //! [`Comment`] list definitions.

    use common::pagination::{self, Cursor};

    use crate::domain::{post, Comment};
    #[cfg(doc)]
    use crate::domain::Post;

    /// Page of a [`Comment`] list.
    pub type Page = pagination::Page<Comment>;

    /// Selector of a [`Page`] of a [`Post`]'s [`Comment`]s.
    #[derive(Clone, Debug)]
    pub struct Selector {
        /// ID of the commented [`Post`].
        pub post_id: post::Id,

        /// [`Cursor`] of the [`Page`] to select, or the first one.
        pub cursor: Option<Cursor>,
    }
}

pub mod create {
    //! [`Comment`] creation definitions.

    use crate::domain::{post, Content, Session};
    #[cfg(doc)]
    use crate::domain::{Comment, Post};

    /// Draft of a new [`Comment`].
    #[derive(Clone, Debug)]
    pub struct Draft<'s> {
        /// [`Session`] of the author.
        pub session: &'s Session,

        /// ID of the [`Post`] to comment.
        pub post_id: post::Id,

        /// Text of the [`Comment`].
        pub content: Content,
    }
}
