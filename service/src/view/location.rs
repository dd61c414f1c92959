//! Best-effort resolving of the current user location.

use common::Coordinates;
use derive_more::Display;
use tracing as log;

/// Provider of the device position (geolocation).
pub use common::Handler as PositionProvider;

/// Operation of a [`PositionProvider`] returning the current device
/// [`Coordinates`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentPosition;

/// Seoul City Hall, the location used when nothing better is known.
pub const SEOUL_CITY_HALL: Coordinates = Coordinates::new(37.5665, 126.9780);

/// Resolved location.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
pub enum Location {
    /// Current device position.
    #[display("current position {_0}")]
    Current(Coordinates),

    /// Fallback used because the current position is unknown.
    #[display("fallback position {_0}")]
    Fallback(Coordinates),
}

impl Location {
    /// Returns the [`Coordinates`] of this [`Location`].
    #[must_use]
    pub const fn coordinates(self) -> Coordinates {
        match self {
            Self::Current(c) | Self::Fallback(c) => c,
        }
    }

    /// Indicates whether this [`Location`] is a fallback one.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolves the current [`Location`] with the provided [`PositionProvider`],
/// if any.
///
/// Falls back to the provided `fallback` [`Coordinates`] when there is no
/// provider, it fails, or it reports unplaceable [`Coordinates`].
pub async fn resolve<P>(provider: Option<&P>, fallback: Coordinates) -> Location
where
    P: PositionProvider<CurrentPosition, Ok = Coordinates> + ?Sized,
    P::Err: Display,
{
    let Some(provider) = provider else {
        log::warn!("geolocation is unavailable, using {fallback}");
        return Location::Fallback(fallback);
    };

    match provider.execute(CurrentPosition).await {
        Ok(position) if position.is_valid() => Location::Current(position),
        Ok(position) => {
            log::warn!(
                "invalid position {position} reported, using {fallback}",
            );
            Location::Fallback(fallback)
        }
        Err(e) => {
            log::warn!(
                "failed to get current position, using {fallback}: {e}",
            );
            Location::Fallback(fallback)
        }
    }
}
