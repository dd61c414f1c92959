//! [`Bookmark`]-related read definitions.

#[cfg(doc)]
use crate::domain::Bookmark;

pub mod list {
    //! [`Bookmark`] list definitions.

    use common::pagination::{self, Cursor};

    use crate::domain::{Bookmark, Session};

    /// Page of a [`Bookmark`] list.
    pub type Page = pagination::Page<Bookmark>;

    /// Selector of a [`Page`] of the [`Session`] owner's [`Bookmark`]s.
    #[derive(Clone, Copy, Debug)]
    pub struct Selector<'s> {
        /// [`Session`] to authenticate with.
        pub session: &'s Session,

        /// [`Cursor`] of the [`Page`] to select, or the first one.
        pub cursor: Option<&'s Cursor>,
    }
}

pub mod toggle {
    //! [`Bookmark`] toggling definitions.

    use crate::domain::{room, Session};
    #[cfg(doc)]
    use crate::domain::{Bookmark, Room};

    /// Target of toggling a [`Bookmark`].
    #[derive(Clone, Copy, Debug)]
    pub struct Target<'s> {
        /// [`Session`] to authenticate with.
        pub session: &'s Session,

        /// ID of the [`Room`] to toggle a [`Bookmark`] of.
        pub room_id: room::Id,
    }
}
