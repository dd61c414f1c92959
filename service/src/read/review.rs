//! [`Review`]-related read definitions.

#[cfg(doc)]
use crate::domain::Review;

pub mod list {
    //! [`Review`] list definitions.

    use common::pagination::{self, Cursor};

    use crate::domain::{room, Review};
    #[cfg(doc)]
    use crate::domain::Room;

    /// Page of a [`Review`] list.
    pub type Page = pagination::Page<Review>;

    /// Selector of a [`Page`] of a [`Room`]'s [`Review`]s.
    #[derive(Clone, Debug)]
    pub struct Selector {
        /// ID of the reviewed [`Room`].
        pub room_id: room::Id,

        /// [`Cursor`] of the [`Page`] to select, or the first one.
        pub cursor: Option<Cursor>,
    }
}

pub mod submit {
    //! [`Review`] submission definitions.

    use crate::domain::{review::Rating, room, Content, Session};
    #[cfg(doc)]
    use crate::domain::{Review, Room};

    /// Draft of a new [`Review`].
    #[derive(Clone, Debug)]
    pub struct Draft<'s> {
        /// [`Session`] of the author.
        pub session: &'s Session,

        /// ID of the [`Room`] to review.
        pub room_id: room::Id,

        /// [`Rating`] of the [`Review`].
        pub rating: Rating,

        /// Text of the [`Review`].
        pub content: Content,
    }
}
