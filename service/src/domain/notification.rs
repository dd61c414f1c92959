//! [`Notification`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Notification of the current user about community activity (comments and
/// likes of their posts).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    /// ID of this [`Notification`].
    pub id: Id,

    /// Human-readable text of this [`Notification`].
    pub message: String,

    /// Indicates whether this [`Notification`] has been read.
    pub read: bool,

    /// Creation time of this [`Notification`], as formatted by the server.
    pub created_at: Option<String>,
}

/// ID of a [`Notification`].
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
