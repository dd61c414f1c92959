//! [`Report`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use crate::domain::room;
#[cfg(doc)]
use crate::domain::Room;

/// Summary of an AI-generated comparison report of several [`Room`]s.
///
/// Reports are generated server-side, the client only lists them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// ID of this [`Report`].
    pub id: Id,

    /// Title of this [`Report`].
    pub title: String,

    /// IDs of the compared [`Room`]s.
    pub room_ids: Vec<room::Id>,

    /// Creation time of this [`Report`], as formatted by the server.
    pub created_at: Option<String>,
}

/// ID of a [`Report`].
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
