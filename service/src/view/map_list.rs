//! [`MapListView`] definitions.

use std::collections::HashSet;

use common::{Bounds, Coordinates};
use tracerr::Traced;
use tracing as log;

use crate::{
    command::{toggle_bookmark, Command, ToggleBookmark},
    domain::{bookmark, room, Room, Session},
    filter::{Dropdown, FilterPanel, Pick, Selection},
    infra::api,
    query::{bookmarks::RoomIds, Query},
};

use super::{
    scroll::Tick,
    visibility::Update,
    BookmarkOverlay, ScrollCoordinator, ScrollSurface, VisibilityTracker,
};

/// Generation token of a [`Room`] list fetch.
///
/// Only the response of the latest issued [`FetchToken`] is accepted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use = "required to apply the fetched rooms"]
pub struct FetchToken(u64);

/// [`Room`] placed on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// ID of the [`Room`].
    pub id: room::Id,

    /// Location of the [`Room`].
    pub at: Coordinates,

    /// Indicates whether the [`Room`] is selected.
    pub selected: bool,
}

/// [`Room`] shown in the result list.
#[derive(Clone, Copy, Debug)]
pub struct Listed<'r> {
    /// Shown [`Room`].
    pub room: &'r Room,

    /// Indicates whether the [`Room`] is bookmarked.
    pub bookmarked: bool,

    /// Indicates whether the [`Room`] is selected.
    pub selected: bool,
}

/// Shared state of the map and the result list.
///
/// Every transition goes through the methods of this type, keeping the
/// filter [`Selection`], the visible set, the selected [`Room`] and the
/// list scroll position consistent with each other.
#[derive(Debug, Default)]
pub struct MapListView {
    /// Currently accepted [`Room`] list.
    rooms: Vec<Room>,

    /// Generation of the latest issued [`FetchToken`].
    generation: u64,

    /// Filter panel state.
    panel: FilterPanel,

    /// Visible set of the map viewport.
    visibility: VisibilityTracker,

    /// ID of the selected [`Room`], if any.
    selected: Option<room::Id>,

    /// Centering of the list on the selected [`Room`].
    scroll: ScrollCoordinator,

    /// Bookmarked [`Room`]s.
    bookmarks: BookmarkOverlay,
}

impl MapListView {
    /// Issues a new [`FetchToken`], making all the previous ones stale.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        FetchToken(self.generation)
    }

    /// Accepts the fetched [`Room`]s, unless the provided [`FetchToken`] is
    /// stale.
    ///
    /// Returns whether the [`Room`]s have been accepted.
    pub fn apply_rooms(&mut self, token: FetchToken, rooms: Vec<Room>) -> bool {
        if token.0 != self.generation {
            log::debug!(
                "discarding stale `Room` list of generation {} (latest is {})",
                token.0,
                self.generation,
            );
            return false;
        }

        let mut seen = HashSet::with_capacity(rooms.len());
        self.rooms = rooms.into_iter().filter(|r| seen.insert(r.id)).collect();
        _ = self.visibility.invalidate();

        if let Some(id) = self.selected.filter(|id| !seen.contains(id)) {
            log::debug!("selected `Room(id: {id})` is gone, deselecting");
            self.deselect();
        }
        log::debug!("{} `Room`s accepted", self.rooms.len());
        true
    }

    /// Returns all the accepted [`Room`]s.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the [`FilterPanel`].
    #[must_use]
    pub const fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    /// Returns the current filter [`Selection`].
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        self.panel.selection()
    }

    /// Returns the [`VisibilityTracker`] of the map viewport.
    #[must_use]
    pub const fn visibility(&self) -> &VisibilityTracker {
        &self.visibility
    }

    /// Returns the [`BookmarkOverlay`].
    #[must_use]
    pub const fn bookmarks(&self) -> &BookmarkOverlay {
        &self.bookmarks
    }

    /// Returns ID of the selected [`Room`], if any.
    #[must_use]
    pub const fn selected(&self) -> Option<room::Id> {
        self.selected
    }

    /// Returns ID of the [`Room`] the list is being centered on, if any.
    #[must_use]
    pub fn pending_scroll(&self) -> Option<room::Id> {
        self.scroll.target()
    }

    /// Recomputes the visible set out of the new map viewport [`Bounds`].
    ///
    /// Deselects the selected [`Room`] once it leaves the viewport, or
    /// re-centers the list on it when the visible set changes.
    pub fn on_bounds_changed(&mut self, bounds: Option<Bounds>) -> Update {
        let selection = self.panel.selection();
        let update = self.visibility.recompute(
            bounds,
            self.rooms.iter().filter(|r| selection.matches(r)),
        );

        if let Some(id) = self.selected {
            if !self.visibility.admits(id) {
                log::debug!("selected `Room(id: {id})` left the viewport");
                self.deselect();
            } else if update == Update::Changed && self.visibility.contains(id)
            {
                self.scroll.request(id);
            }
        }
        update
    }

    /// Selects the [`Room`] with the provided ID, by a marker or a list
    /// item click.
    ///
    /// The list is centered on the [`Room`] only if it is visible.
    pub fn select(&mut self, id: room::Id) {
        self.selected = Some(id);
        if self.visibility.contains(id) {
            self.scroll.request(id);
        } else {
            self.scroll.cancel();
        }
    }

    /// Clears the selection, cancelling any centering.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.scroll.cancel();
    }

    /// Drives centering of the list for one animation frame.
    pub fn on_animation_frame(
        &mut self,
        surface: &mut impl ScrollSurface,
    ) -> Tick {
        self.scroll.tick(surface)
    }

    /// Returns the [`Room`]s matching the filter [`Selection`] and the visible
    /// set.
    pub fn filtered(&self) -> impl Iterator<Item = &Room> + '_ {
        let selection = self.panel.selection();
        self.rooms
            .iter()
            .filter(|r| selection.matches(r) && self.visibility.admits(r.id))
    }

    /// Returns [`Marker`]s of the [`Room`]s matching the filter
    /// [`Selection`], regardless of the viewport.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        let selection = self.panel.selection();
        self.rooms
            .iter()
            .filter(|r| selection.matches(r))
            .filter_map(|r| {
                Some(Marker {
                    id: r.id,
                    at: r.location.filter(Coordinates::is_valid)?,
                    selected: self.selected == Some(r.id),
                })
            })
    }

    /// Returns the [`filtered()`] [`Room`]s decorated with their bookmark and
    /// selection status.
    ///
    /// [`filtered()`]: MapListView::filtered
    pub fn listing(&self) -> impl Iterator<Item = Listed<'_>> + '_ {
        self.filtered().map(|room| Listed {
            room,
            bookmarked: self.bookmarks.contains(room.id),
            selected: self.selected == Some(room.id),
        })
    }

    /// Toggles the provided [`Dropdown`] of the [`FilterPanel`].
    pub fn toggle_dropdown(&mut self, dropdown: Dropdown) {
        self.panel.toggle(dropdown);
    }

    /// Applies the provided [`Pick`] to the [`FilterPanel`].
    ///
    /// Returns whether the filter [`Selection`] has changed, which resets the
    /// visible set.
    pub fn pick(&mut self, pick: Pick) -> bool {
        let changed = self.panel.pick(pick);
        if changed {
            _ = self.visibility.invalidate();
        }
        changed
    }

    /// Resets the [`FilterPanel`].
    ///
    /// Returns whether the filter [`Selection`] has changed, which resets the
    /// visible set.
    pub fn reset_filters(&mut self) -> bool {
        let changed = self.panel.reset();
        if changed {
            _ = self.visibility.invalidate();
        }
        changed
    }

    /// Seeds the [`BookmarkOverlay`] from the server.
    ///
    /// # Errors
    ///
    /// If the bookmarks cannot be fetched.
    pub async fn initialize_bookmarks<'s, S>(
        &mut self,
        service: &S,
        session: &'s Session,
    ) -> Result<(), Traced<api::Error>>
    where
        S: Query<
            RoomIds<'s>,
            Ok = HashSet<room::Id>,
            Err = Traced<api::Error>,
        >,
    {
        self.bookmarks
            .initialize(service, session)
            .await
            .map_err(tracerr::wrap!())
    }

    /// Toggles the bookmark of the provided [`Room`] optimistically.
    ///
    /// # Errors
    ///
    /// See [`BookmarkOverlay::toggle()`].
    pub async fn toggle_bookmark<'s, S>(
        &mut self,
        service: &S,
        session: Option<&'s Session>,
        room_id: room::Id,
    ) -> Result<bookmark::Action, Traced<toggle_bookmark::ExecutionError>>
    where
        S: Command<
            ToggleBookmark<'s>,
            Ok = bookmark::Action,
            Err = Traced<toggle_bookmark::ExecutionError>,
        >,
    {
        self.bookmarks
            .toggle(service, session, room_id)
            .await
            .map_err(tracerr::wrap!())
    }
}
