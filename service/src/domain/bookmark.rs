//! [`Bookmark`] definitions.

use common::define_kind;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use crate::domain::room;
#[cfg(doc)]
use crate::domain::Room;

/// [`Room`] bookmarked by the current user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bookmark {
    /// ID of this [`Bookmark`].
    pub id: Id,

    /// ID of the bookmarked [`Room`].
    pub room_id: room::Id,
}

/// ID of a [`Bookmark`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

define_kind! {
    #[doc = "Outcome of toggling a [`Bookmark`] reported by the server."]
    enum Action {
        #[doc = "[`Bookmark`] has been created."]
        #[label = "added"]
        Added = 1,

        #[doc = "[`Bookmark`] has been removed."]
        #[label = "removed"]
        Removed = 2,
    }
}

impl Action {
    /// Indicates whether the [`Room`] is bookmarked after this [`Action`].
    #[must_use]
    pub const fn is_bookmarked(self) -> bool {
        matches!(self, Self::Added)
    }
}
