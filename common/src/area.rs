//! [`Area`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

/// Floor area in square meters.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Area(Decimal);

impl Area {
    /// Number of square meters in one pyeong (평).
    pub const SQUARE_METERS_PER_PYEONG: Decimal =
        Decimal::from_parts(3_305_785, 0, 0, false, 6);

    /// Creates a new [`Area`] out of the provided square meters.
    ///
    /// [`None`] is returned for negative values.
    #[must_use]
    pub fn square_meters(value: Decimal) -> Option<Self> {
        (value >= Decimal::ZERO).then_some(Self(value))
    }

    /// Returns this [`Area`] in square meters.
    #[must_use]
    pub const fn in_square_meters(self) -> Decimal {
        self.0
    }

    /// Returns this [`Area`] in pyeong.
    #[must_use]
    pub fn in_pyeong(self) -> Decimal {
        self.0 / Self::SQUARE_METERS_PER_PYEONG
    }

    /// Parses an [`Area`] out of a loosely formatted number, as the REST API
    /// sends it (`"33.06"`, `"33.06㎡"`, `"33.06m2"`).
    #[must_use]
    pub fn parse_lenient(input: &str) -> Option<Self> {
        let cleaned = input
            .trim()
            .trim_end_matches('㎡')
            .trim_end_matches("m2")
            .trim_end();
        if cleaned.is_empty() {
            return None;
        }
        Decimal::from_str(cleaned)
            .or_else(|_| Decimal::from_scientific(cleaned))
            .ok()
            .and_then(Self::square_meters)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}㎡", self.0.normalize())
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::fmt;

    use rust_decimal::Decimal;
    use serde::{
        de::{self, Visitor},
        Deserializer,
    };

    use super::Area;

    /// Deserializes an optional [`Area`] out of a number, a numeric string,
    /// an empty string or `null`.
    ///
    /// # Errors
    ///
    /// Only propagates errors of the underlying [`Deserializer`].
    pub fn lenient<'de, D>(deserializer: D) -> Result<Option<Area>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientVisitor)
    }

    /// [`Visitor`] behind [`lenient()`].
    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = Option<Area>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an area in square meters")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Area::square_meters(Decimal::from(v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Area::square_meters(Decimal::from(v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if !v.is_finite() {
                return Ok(None);
            }
            Ok(Area::parse_lenient(&v.to_string()))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Area::parse_lenient(v))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, d: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            d.deserialize_any(self)
        }
    }
}

#[cfg(feature = "serde")]
pub use self::serde::lenient;
