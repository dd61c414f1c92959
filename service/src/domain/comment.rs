//! [`Comment`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use crate::domain::{post, Content};
#[cfg(doc)]
use crate::domain::Post;

/// Comment under a community [`Post`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    /// ID of this [`Comment`].
    pub id: Id,

    /// ID of the commented [`Post`].
    pub post_id: post::Id,

    /// Text of this [`Comment`].
    pub content: Content,

    /// Display name of the author, if disclosed.
    pub author: Option<String>,

    /// Creation time of this [`Comment`], as formatted by the server.
    pub created_at: Option<String>,
}

/// ID of a [`Comment`].
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
