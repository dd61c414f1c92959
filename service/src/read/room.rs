//! [`Room`]-related read definitions.

#[cfg(doc)]
use crate::domain::Room;

pub mod list {
    //! [`Room`] list definitions.

    use common::pagination::{self, Cursor};

    use crate::domain::Room;

    /// Page of a [`Room`] list.
    pub type Page = pagination::Page<Room>;

    /// Selector of a [`Page`].
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// Search query narrowing the list server-side.
        pub search: Option<String>,

        /// [`Cursor`] of the [`Page`] to select, or the first one.
        pub cursor: Option<Cursor>,
    }
}
