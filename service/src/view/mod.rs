//! Map/list view state kept consistent across the map, the result list and
//! the filter panel.

pub mod bookmarks;
pub mod location;
mod map_list;
pub mod scroll;
pub mod visibility;

pub use self::{
    bookmarks::BookmarkOverlay,
    map_list::{FetchToken, Listed, MapListView, Marker},
    scroll::{ScrollCoordinator, ScrollSurface},
    visibility::VisibilityTracker,
};
