//! Geographic primitives.

use derive_more::Display;

/// Point on the map in WGS 84 degrees.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display("({lat}, {lng})")]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinates {
    /// Creates new [`Coordinates`].
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates new [`Coordinates`] if they can be placed on the map.
    ///
    /// Non-finite values and the exact `(0, 0)` origin are geocoding
    /// failures and yield [`None`].
    #[must_use]
    pub fn valid(lat: f64, lng: f64) -> Option<Self> {
        let this = Self::new(lat, lng);
        this.is_valid().then_some(this)
    }

    /// Indicates whether these [`Coordinates`] can be placed on the map.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && !(self.lat == 0.0 && self.lng == 0.0)
    }
}

/// Rectangular map viewport described by its south-west and north-east
/// corners.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display("[{south_west} .. {north_east}]")]
pub struct Bounds {
    /// South-west corner.
    pub south_west: Coordinates,

    /// North-east corner.
    pub north_east: Coordinates,
}

impl Bounds {
    /// Creates new [`Bounds`] out of the provided corners.
    #[must_use]
    pub const fn new(south_west: Coordinates, north_east: Coordinates) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates new [`Bounds`] spanning `half_span` degrees around the
    /// provided `center` in every direction.
    #[must_use]
    pub fn around(center: Coordinates, half_span: f64) -> Self {
        Self {
            south_west: Coordinates::new(
                center.lat - half_span,
                center.lng - half_span,
            ),
            north_east: Coordinates::new(
                center.lat + half_span,
                center.lng + half_span,
            ),
        }
    }

    /// Indicates whether the provided point lies inside these [`Bounds`],
    /// edges included.
    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}
