//! [`Review`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use crate::domain::{room, Content};
#[cfg(doc)]
use crate::domain::Room;

/// Review of a [`Room`] left by a tenant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Review {
    /// ID of this [`Review`].
    pub id: Id,

    /// ID of the reviewed [`Room`].
    pub room_id: room::Id,

    /// [`Rating`] of this [`Review`].
    pub rating: Rating,

    /// Text of this [`Review`].
    pub content: Content,

    /// Display name of the author, if disclosed.
    pub author: Option<String>,

    /// Creation time of this [`Review`], as formatted by the server.
    pub created_at: Option<String>,
}

/// ID of a [`Review`].
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

/// Star rating of a [`Review`], from [`Rating::MIN`] to [`Rating::MAX`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rating(u8);

impl Rating {
    /// Lowest [`Rating`].
    pub const MIN: u8 = 1;

    /// Highest [`Rating`].
    pub const MAX: u8 = 5;

    /// Creates a new [`Rating`] if the provided number of stars is in range.
    #[must_use]
    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    /// Returns the number of stars of this [`Rating`].
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod spec {
    use super::Rating;

    #[test]
    fn bounds_rating() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(1).map(Rating::get), Some(1));
        assert_eq!(Rating::new(5).map(Rating::get), Some(5));
    }
}
