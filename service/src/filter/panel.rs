//! [`FilterPanel`] state machine.

use common::define_kind;
use rust_decimal::Decimal;
use tracing as log;

use crate::domain::room;

use super::{FloorConstraint, Lease, Selection};

define_kind! {
    #[doc = "Dropdown of the [`FilterPanel`]."]
    enum Dropdown {
        #[doc = "Dropdown of the room type."]
        #[label = "type"]
        Type = 1,

        #[doc = "Dropdown of the lease kind."]
        #[label = "lease"]
        Lease = 2,

        #[doc = "Dropdown of the maximum monthly fee."]
        #[label = "price"]
        Price = 3,

        #[doc = "Dropdown of the size bucket."]
        #[label = "size"]
        Size = 4,

        #[doc = "Dropdown of the floor."]
        #[label = "floor"]
        Floor = 5,
    }
}

/// Value picked in one of the [`Dropdown`]s.
///
/// [`None`] values clear the corresponding field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Pick {
    /// Picked [`room::Type`].
    Type(Option<room::Type>),

    /// Picked [`Lease`] kind.
    Lease(Option<Lease>),

    /// Picked maximum monthly fee in man-won.
    Price(Option<Decimal>),

    /// Picked base of the size bucket in pyeong.
    Size(Option<u32>),

    /// Picked [`FloorConstraint`].
    Floor(Option<FloorConstraint>),
}

impl Pick {
    /// Returns the [`Dropdown`] this [`Pick`] is made in.
    #[must_use]
    pub const fn dropdown(&self) -> Dropdown {
        match self {
            Self::Type(_) => Dropdown::Type,
            Self::Lease(_) => Dropdown::Lease,
            Self::Price(_) => Dropdown::Price,
            Self::Size(_) => Dropdown::Size,
            Self::Floor(_) => Dropdown::Floor,
        }
    }
}

/// State of the filter panel: the current [`Selection`] and the single open
/// [`Dropdown`].
#[derive(Clone, Debug, Default)]
pub struct FilterPanel {
    /// Current [`Selection`].
    selection: Selection,

    /// Currently open [`Dropdown`], if any.
    open: Option<Dropdown>,
}

impl FilterPanel {
    /// Returns the current [`Selection`].
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the currently open [`Dropdown`], if any.
    #[must_use]
    pub const fn open(&self) -> Option<Dropdown> {
        self.open
    }

    /// Indicates whether the provided [`Dropdown`] is open.
    #[must_use]
    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        self.open == Some(dropdown)
    }

    /// Toggles the provided [`Dropdown`].
    ///
    /// Opening a [`Dropdown`] closes any other one, while toggling the open
    /// one closes it.
    pub fn toggle(&mut self, dropdown: Dropdown) {
        self.open = (!self.is_open(dropdown)).then_some(dropdown);
    }

    /// Applies the provided [`Pick`], closing its [`Dropdown`].
    ///
    /// Returns whether the [`Selection`] has changed.
    pub fn pick(&mut self, pick: Pick) -> bool {
        if self.is_open(pick.dropdown()) {
            self.open = None;
        }

        let before = self.selection.clone();
        let s = &mut self.selection;
        match pick {
            Pick::Type(v) => s.room_type = v,
            Pick::Lease(v) => s.lease = v,
            Pick::Price(v) => s.max_price = v,
            Pick::Size(v) => s.size = v,
            Pick::Floor(v) => s.set_floor(v),
        }

        let changed = before != self.selection;
        if changed {
            log::debug!("filter `Selection` changed: {:?}", self.selection);
        }
        changed
    }

    /// Clears the whole [`Selection`] and closes every [`Dropdown`] at once.
    ///
    /// Returns whether the [`Selection`] has changed.
    pub fn reset(&mut self) -> bool {
        self.open = None;
        let changed = !self.selection.is_empty();
        self.selection = Selection::default();
        changed
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;
    use strum::IntoEnumIterator as _;

    use crate::{domain::room, filter::Lease};

    use super::{Dropdown, FilterPanel, FloorConstraint, Pick};

    #[test]
    fn keeps_at_most_one_dropdown_open() {
        let mut panel = FilterPanel::default();
        assert_eq!(panel.open(), None);

        panel.toggle(Dropdown::Lease);
        assert!(panel.is_open(Dropdown::Lease));

        panel.toggle(Dropdown::Price);
        assert!(panel.is_open(Dropdown::Price));
        assert_eq!(
            Dropdown::iter().filter(|d| panel.is_open(*d)).count(),
            1,
        );

        panel.toggle(Dropdown::Price);
        assert_eq!(panel.open(), None);
    }

    #[test]
    fn picking_closes_dropdown() {
        let mut panel = FilterPanel::default();
        panel.toggle(Dropdown::Type);

        assert!(panel.pick(Pick::Type(room::Type::new("투룸"))));
        assert_eq!(panel.open(), None);
        assert_eq!(
            panel.selection().room_type.as_ref().map(ToString::to_string),
            Some("투룸".to_owned()),
        );

        panel.toggle(Dropdown::Type);
        assert!(!panel.pick(Pick::Type(room::Type::new("투룸"))));
        assert_eq!(panel.open(), None);
    }

    #[test]
    fn picking_elsewhere_keeps_other_dropdown() {
        let mut panel = FilterPanel::default();
        panel.toggle(Dropdown::Size);

        assert!(panel.pick(Pick::Lease(Some(Lease::Monthly))));
        assert!(panel.is_open(Dropdown::Size));
    }

    #[test]
    fn resets_atomically() {
        let mut panel = FilterPanel::default();
        assert!(panel.pick(Pick::Price(Some(Decimal::from(50)))));
        assert!(panel.pick(Pick::Floor(Some(FloorConstraint::Exact(2)))));
        panel.toggle(Dropdown::Floor);

        assert!(panel.reset());
        assert!(panel.selection().is_empty());
        assert_eq!(panel.open(), None);

        assert!(!panel.reset());
    }
}
