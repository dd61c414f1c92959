//! [`Report`]-related read definitions.

#[cfg(doc)]
use crate::domain::Report;

pub mod list {
    //! [`Report`] list definitions.

    use std::num::NonZeroU32;

    use common::pagination;

    use crate::domain::{Report, Session};

    /// Page of a [`Report`] list.
    pub type Page = pagination::Page<Report>;

    /// Selector of a [`Page`] of the [`Session`] owner's [`Report`]s.
    #[derive(Clone, Copy, Debug)]
    pub struct Selector<'s> {
        /// [`Session`] to authenticate with.
        pub session: &'s Session,

        /// One-based number of the [`Page`] to select.
        pub page: NonZeroU32,
    }
}
