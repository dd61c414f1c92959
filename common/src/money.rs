//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Amount of money in Korean won (KRW).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    /// Zero won.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Number of won in one man-won (만원), the unit listing prices are
    /// usually quoted in.
    pub const MAN_WON: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

    /// Creates a new [`Money`] out of the provided amount of won.
    #[must_use]
    pub const fn won(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of won of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] is strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Indicates whether this [`Money`] is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns this [`Money`] expressed in man-won.
    ///
    /// Listings mix plain won and man-won amounts, so only values of at least
    /// [`Money::MAN_WON`] are divided; smaller values are assumed to be
    /// man-won already.
    #[must_use]
    pub fn in_man_won(self) -> Decimal {
        if self.0 >= Self::MAN_WON {
            self.0 / Self::MAN_WON
        } else {
            self.0
        }
    }

    /// Parses a [`Money`] out of a loosely formatted amount, as the REST API
    /// sends it.
    ///
    /// Thousands separators and surrounding whitespace are ignored. [`None`]
    /// is returned for blank or non-numeric input.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Option<Self> {
        let cleaned = input.trim().replace(',', "");
        if cleaned.is_empty() {
            return None;
        }
        Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .ok()
            .map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0.normalize();
        if amount.is_integer() {
            write!(f, "{}KRW", amount.to_i128().unwrap_or_default())
        } else {
            write!(f, "{amount}KRW")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s.strip_suffix("KRW").ok_or("missing currency")?;
        Decimal::from_str(amount)
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::fmt;

    use rust_decimal::Decimal;
    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer,
    };

    use super::Money;

    /// Deserializes an optional [`Money`] out of a number, a numeric string,
    /// an empty string or `null`.
    ///
    /// Anything that cannot be read as an amount is treated as absent.
    ///
    /// # Errors
    ///
    /// Only propagates errors of the underlying [`Deserializer`].
    pub fn lenient<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientVisitor)
    }

    /// [`Visitor`] behind [`lenient()`].
    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = Option<Money>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an amount of money")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(Money(Decimal::from(v))))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(Money(Decimal::from(v))))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if !v.is_finite() {
                return Ok(None);
            }
            Ok(Money::parse_lenient(&v.to_string()))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Money::parse_lenient(v))
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

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            lenient(deserializer)?
                .ok_or_else(|| de::Error::custom("invalid amount of money"))
        }
    }
}

#[cfg(feature = "serde")]
pub use self::serde::lenient;
