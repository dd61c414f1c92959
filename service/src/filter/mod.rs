//! Filtering of the [`Room`] list.
//!
//! [`Room`]: crate::domain::Room

mod panel;
mod predicate;
mod selection;

pub use self::{
    panel::{Dropdown, FilterPanel, Pick},
    selection::{FloorConstraint, Lease, Selection},
};
