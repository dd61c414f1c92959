//! [`Room`] definitions.

use std::sync::LazyLock;

use common::{Area, Coordinates, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Room listed for rent.
///
/// Rooms are immutable for the client: the whole list is refetched when the
/// route or the search query changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    /// ID of this [`Room`].
    pub id: Id,

    /// Title of this [`Room`] listing.
    pub title: Title,

    /// [`Type`] of this [`Room`], if known.
    pub room_type: Option<Type>,

    /// [`Floor`] of this [`Room`], if known.
    pub floor: Option<Floor>,

    /// Deposit required to rent this [`Room`].
    pub deposit: Option<Money>,

    /// Monthly rent fee of this [`Room`].
    ///
    /// Missing or zero fee means a jeonse (전세) lease.
    pub monthly_fee: Option<Money>,

    /// Monthly maintenance cost of this [`Room`].
    pub maintenance_cost: Option<Money>,

    /// Actual usable area of this [`Room`].
    pub real_area: Option<Area>,

    /// Location of this [`Room`] on the map.
    ///
    /// [`None`] if geocoding failed, so the [`Room`] is never shown on the
    /// map.
    pub location: Option<Coordinates>,

    /// Ordered images of this [`Room`].
    pub images: Vec<ImageUrl>,
}

impl Room {
    /// Indicates whether this [`Room`] is a semi-basement (반지하) unit.
    ///
    /// Detected either by the [`Floor`] text, by the [`Type`] text, or by a
    /// non-positive front floor number.
    #[must_use]
    pub fn is_semi_basement(&self) -> bool {
        let by_floor = self.floor.as_ref().is_some_and(|f| {
            f.is_basement_marked() || f.front().is_some_and(|n| n <= 0)
        });
        let by_type = self
            .room_type
            .as_ref()
            .is_some_and(Type::is_semi_basement_marked);

        by_floor || by_type
    }

    /// Returns the front floor number of this [`Room`], if it can be parsed.
    #[must_use]
    pub fn front_floor(&self) -> Option<i32> {
        self.floor.as_ref().and_then(Floor::front)
    }
}

/// ID of a [`Room`].
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
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

/// Title of a [`Room`] listing.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] out of the provided text, trimming it.
    #[must_use]
    pub fn new(title: impl AsRef<str>) -> Self {
        Self(title.as_ref().trim().to_owned())
    }
}

/// Type of a [`Room`] (원룸, 투룸, 오피스텔, etc).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Type(String);

impl Type {
    /// Creates a new [`Type`] out of the provided text.
    ///
    /// The text is trimmed, and [`None`] is returned if nothing is left.
    #[must_use]
    pub fn new(room_type: impl AsRef<str>) -> Option<Self> {
        let room_type = room_type.as_ref().trim();
        (!room_type.is_empty()).then(|| Self(room_type.to_owned()))
    }

    /// Indicates whether this [`Type`] text marks a semi-basement unit.
    #[must_use]
    pub fn is_semi_basement_marked(&self) -> bool {
        self.0.contains("반지층") || self.0.contains("반지하")
    }
}

impl FromStr for Type {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("blank `room::Type`")
    }
}

/// Free-form floor description of a [`Room`].
///
/// Besides plain numbers (`"3"`, `"3층"`) it may encode a basement
/// (`"지하"`, `"반지하"`, `"B1"`) or a front/back pair of a split-level
/// building (`"3/15"`).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Floor(String);

impl Floor {
    /// Front floor number forced for basement-marked floors.
    pub const BASEMENT: i32 = -1;

    /// Creates a new [`Floor`] out of the provided text.
    ///
    /// [`None`] is returned for blank text.
    #[must_use]
    pub fn new(floor: impl AsRef<str>) -> Option<Self> {
        let floor = floor.as_ref().trim();
        (!floor.is_empty()).then(|| Self(floor.to_owned()))
    }

    /// Indicates whether this [`Floor`] text marks a basement or
    /// semi-basement unit.
    #[must_use]
    pub fn is_basement_marked(&self) -> bool {
        static B_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[Bb]\d+").expect("valid regex")
        });

        self.0.contains("반지층")
            || self.0.contains("반지하")
            || self.0.contains("지하")
            || B_PREFIX.is_match(&self.0)
    }

    /// Returns the front floor number: the first signed integer before the
    /// `/` separator.
    ///
    /// Basement-marked floors are always [`Floor::BASEMENT`], whatever
    /// numbers they contain.
    #[must_use]
    pub fn front(&self) -> Option<i32> {
        static SIGNED_INT: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"[-+]?\d+").expect("valid regex")
        });

        if self.is_basement_marked() {
            return Some(Self::BASEMENT);
        }

        let front = self.0.split('/').next().unwrap_or_default();
        SIGNED_INT
            .find(front)
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// URL of a [`Room`] image.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Creates a new [`ImageUrl`] unless the provided `url` is blank.
    #[must_use]
    pub fn new(url: impl AsRef<str>) -> Option<Self> {
        let url = url.as_ref().trim();
        (!url.is_empty()).then(|| Self(url.to_owned()))
    }
}

#[cfg(test)]
pub(crate) mod spec {
    use common::{Coordinates, Money};
    use rust_decimal::Decimal;

    use super::{Floor, Id, Room, Title, Type};

    /// Builds a bare [`Room`] for tests.
    pub(crate) fn room(id: u64) -> Room {
        Room {
            id: Id::from(id),
            title: Title::new(format!("room #{id}")),
            room_type: None,
            floor: None,
            deposit: None,
            monthly_fee: None,
            maintenance_cost: None,
            real_area: None,
            location: None,
            images: vec![],
        }
    }

    /// Builds a [`Room`] placed at the provided location.
    pub(crate) fn room_at(id: u64, lat: f64, lng: f64) -> Room {
        Room {
            location: Coordinates::valid(lat, lng),
            ..room(id)
        }
    }

    /// Builds a [`Room`] with the provided monthly fee in won.
    pub(crate) fn room_with_fee(id: u64, fee: i64) -> Room {
        Room {
            monthly_fee: Some(Money::won(Decimal::from(fee))),
            ..room(id)
        }
    }

    fn floor(s: &str) -> Floor {
        Floor::new(s).unwrap()
    }

    #[test]
    fn parses_front_floor() {
        assert_eq!(floor("3").front(), Some(3));
        assert_eq!(floor("3층").front(), Some(3));
        assert_eq!(floor("3/15").front(), Some(3));
        assert_eq!(floor("고/15").front(), None);
        assert_eq!(floor("-1/5").front(), Some(-1));
        assert_eq!(floor("옥탑").front(), None);
    }

    #[test]
    fn forces_basement_front_floor() {
        assert_eq!(floor("반지하").front(), Some(Floor::BASEMENT));
        assert_eq!(floor("지하2층").front(), Some(Floor::BASEMENT));
        assert_eq!(floor("B2").front(), Some(Floor::BASEMENT));
        assert_eq!(floor("b1/7").front(), Some(Floor::BASEMENT));
        assert_eq!(floor("반지층/3").front(), Some(Floor::BASEMENT));
    }

    #[test]
    fn detects_semi_basement() {
        let by_floor = Room {
            floor: Floor::new("B1"),
            ..room(1)
        };
        assert!(by_floor.is_semi_basement());

        let by_type = Room {
            room_type: Type::new("반지하 원룸"),
            floor: Floor::new("1"),
            ..room(2)
        };
        assert!(by_type.is_semi_basement());

        let by_number = Room {
            floor: Floor::new("0/3"),
            ..room(3)
        };
        assert!(by_number.is_semi_basement());

        let regular = Room {
            room_type: Type::new("원룸"),
            floor: Floor::new("2/5"),
            ..room(4)
        };
        assert!(!regular.is_semi_basement());
        assert!(!room(5).is_semi_basement());
    }

    #[test]
    fn trims_texts() {
        assert_eq!(Type::new("  원룸 ").unwrap().to_string(), "원룸");
        assert!(Type::new("   ").is_none());
        assert!(Floor::new("").is_none());
        assert_eq!(Title::new(" 신촌 원룸 ").to_string(), "신촌 원룸");
    }
}
