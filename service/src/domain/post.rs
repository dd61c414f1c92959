//! [`Post`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use crate::domain::Content;

/// Post on the community board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    /// ID of this [`Post`].
    pub id: Id,

    /// [`Title`] of this [`Post`].
    pub title: Title,

    /// Text of this [`Post`].
    pub content: Content,

    /// Display name of the author, if disclosed.
    pub author: Option<String>,

    /// Number of likes of this [`Post`].
    pub like_count: u32,

    /// Number of comments under this [`Post`].
    pub comment_count: u32,

    /// Indicates whether the current user likes this [`Post`].
    ///
    /// Always `false` for anonymous users.
    pub liked: bool,

    /// Creation time of this [`Post`], as formatted by the server.
    pub created_at: Option<String>,
}

/// ID of a [`Post`].
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

/// Title of a [`Post`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] out of the provided text, trimming it.
    ///
    /// [`None`] is returned for blank text.
    #[must_use]
    pub fn new(title: impl AsRef<str>) -> Option<Self> {
        let title = title.as_ref().trim();
        (!title.is_empty()).then(|| Self(title.to_owned()))
    }
}

define_kind! {
    #[doc = "Outcome of toggling a like of a [`Post`] reported by the server."]
    enum Like {
        #[doc = "[`Post`] has been liked."]
        #[label = "liked"]
        Liked = 1,

        #[doc = "Like of the [`Post`] has been withdrawn."]
        #[label = "unliked"]
        Unliked = 2,
    }
}

impl Like {
    /// Indicates whether the [`Post`] is liked after this [`Like`].
    #[must_use]
    pub const fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }
}
