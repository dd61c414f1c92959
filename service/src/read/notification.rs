//! [`Notification`]-related read definitions.

#[cfg(doc)]
use crate::domain::Notification;

pub mod list {
    //! [`Notification`] list definitions.

    use common::pagination::{self, Cursor};

    use crate::domain::{Notification, Session};

    /// Page of a [`Notification`] list.
    pub type Page = pagination::Page<Notification>;

    /// Selector of a [`Page`] of the [`Session`] owner's [`Notification`]s.
    #[derive(Clone, Debug)]
    pub struct Selector<'s> {
        /// [`Session`] to authenticate with.
        pub session: &'s Session,

        /// [`Cursor`] of the [`Page`] to select, or the first one.
        pub cursor: Option<Cursor>,
    }
}
