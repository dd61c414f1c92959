//! [`VisibilityTracker`] of the map viewport.

use std::collections::HashSet;

use common::Bounds;
use tracing as log;

use crate::domain::{room, Room};

/// Outcome of recomputing the visible set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Update {
    /// Visible set stays exactly the same.
    Unchanged,

    /// Visible set has been replaced.
    Changed,
}

/// Tracker of [`Room`]s placed inside the current map viewport.
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    /// IDs of the visible [`Room`]s.
    ///
    /// [`None`] means "not computed yet", which puts no constraint, unlike
    /// an empty set meaning "nothing is visible".
    visible: Option<HashSet<room::Id>>,
}

impl VisibilityTracker {
    /// Returns IDs of the visible [`Room`]s, if computed.
    #[must_use]
    pub const fn visible(&self) -> Option<&HashSet<room::Id>> {
        self.visible.as_ref()
    }

    /// Indicates whether the visible set is computed and contains the
    /// provided [`Room`] ID.
    #[must_use]
    pub fn contains(&self, id: room::Id) -> bool {
        self.visible.as_ref().is_some_and(|v| v.contains(&id))
    }

    /// Indicates whether the provided [`Room`] ID passes the viewport
    /// constraint, which is always the case while nothing is computed.
    #[must_use]
    pub fn admits(&self, id: room::Id) -> bool {
        self.visible.as_ref().is_none_or(|v| v.contains(&id))
    }

    /// Recomputes the visible set out of the provided viewport [`Bounds`].
    ///
    /// Missing [`Bounds`] (the map is not mounted yet) keep the previous set
    /// intact. [`Room`]s without valid coordinates are never visible.
    pub fn recompute<'r>(
        &mut self,
        bounds: Option<Bounds>,
        rooms: impl IntoIterator<Item = &'r Room>,
    ) -> Update {
        let Some(bounds) = bounds else {
            return Update::Unchanged;
        };

        let visible = rooms
            .into_iter()
            .filter_map(|r| Some((r.id, r.location?)))
            .filter(|(_, at)| at.is_valid() && bounds.contains(*at))
            .map(|(id, _)| id)
            .collect::<HashSet<_>>();

        if self.visible.as_ref() == Some(&visible) {
            return Update::Unchanged;
        }

        log::debug!("{} `Room`s visible within {bounds}", visible.len());
        self.visible = Some(visible);
        Update::Changed
    }

    /// Resets the visible set to "not computed".
    pub fn invalidate(&mut self) -> Update {
        if self.visible.take().is_some() {
            Update::Changed
        } else {
            Update::Unchanged
        }
    }
}
