//! [`Selection`] definitions.

use common::define_kind;
use rust_decimal::Decimal;

use crate::domain::room;
#[cfg(doc)]
use crate::domain::Room;

/// Filter values currently chosen by the user.
///
/// Every field being [`None`] means "no constraint".
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    /// Exact [`room::Type`] to match.
    pub room_type: Option<room::Type>,

    /// [`Lease`] kind to match.
    pub lease: Option<Lease>,

    /// Maximum monthly fee in man-won (만원).
    pub max_price: Option<Decimal>,

    /// Base of the one-pyeong-wide size bucket `[base, base + 1)`.
    pub size: Option<u32>,

    /// Floor constraint.
    ///
    /// Kept private, so the label and the number cannot be set at once.
    floor: Option<FloorConstraint>,
}

impl Selection {
    /// Returns the [`FloorConstraint`] of this [`Selection`], if any.
    #[must_use]
    pub const fn floor(&self) -> Option<FloorConstraint> {
        self.floor
    }

    /// Sets (or clears) the [`FloorConstraint`] of this [`Selection`].
    pub fn set_floor(&mut self, floor: Option<FloorConstraint>) {
        self.floor = floor;
    }

    /// Sets the floor label, clearing the exact floor number.
    ///
    /// Unknown or blank labels clear the floor constraint altogether.
    pub fn set_floor_label(&mut self, label: &str) {
        self.floor = FloorConstraint::from_label(label);
    }

    /// Sets the exact front floor number, clearing the floor label.
    pub fn set_floor_num(&mut self, num: Option<i32>) {
        self.floor = num.map(FloorConstraint::Exact);
    }

    /// Indicates whether this [`Selection`] constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

define_kind! {
    #[doc = "Kind of a [`Room`] lease."]
    enum Lease {
        #[doc = "Monthly rent (월세) with a positive monthly fee."]
        #[label = "월세"]
        Monthly = 1,

        #[doc = "Lump-sum deposit lease (전세) without a monthly fee."]
        #[label = "전세"]
        Jeonse = 2,
    }
}

/// Constraint on the floor of a [`Room`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FloorConstraint {
    /// Only semi-basement (반지하) units.
    SemiBasement,

    /// Only units with exactly this front floor number.
    Exact(i32),
}

impl FloorConstraint {
    /// Parses a [`FloorConstraint`] out of a floor label.
    ///
    /// Both `"반지하"` and `"반지층"` denote a semi-basement, while a plain
    /// number denotes [`FloorConstraint::Exact`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "반지하" | "반지층" => Some(Self::SemiBasement),
            other => other
                .trim_end_matches('층')
                .parse()
                .ok()
                .map(Self::Exact),
        }
    }
}
