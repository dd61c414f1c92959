//! Abstractions for pagination of REST API listings.

use std::num::NonZeroUsize;

use derive_more::{AsRef, Display, From, Into};

/// Opaque continuation pointing to a neighbour [`Page`].
///
/// The REST API hands out absolute URLs, which are followed verbatim.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[as_ref(forward)]
pub struct Cursor(String);

impl Cursor {
    /// Creates a new [`Cursor`] unless the provided `value` is blank.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        (!value.trim().is_empty()).then_some(Self(value))
    }
}

/// Single page of a listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<T> {
    /// Items on this [`Page`].
    pub items: Vec<T>,

    /// [`Cursor`] of the next [`Page`], if any.
    pub next: Option<Cursor>,

    /// [`Cursor`] of the previous [`Page`], if any.
    pub previous: Option<Cursor>,

    /// Total number of items across all pages, if reported.
    pub count: Option<usize>,
}

impl<T> Page<T> {
    /// Creates a [`Page`] holding the whole listing.
    #[must_use]
    pub fn single(items: Vec<T>) -> Self {
        Self {
            count: Some(items.len()),
            items,
            next: None,
            previous: None,
        }
    }

    /// Indicates whether this [`Page`] is followed by another one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the total number of items, falling back to the number of items
    /// on this [`Page`] when the total is not reported.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.count.unwrap_or(self.items.len())
    }

    /// Returns the total number of pages of `page_size` items.
    ///
    /// There is always at least one (possibly empty) page.
    #[must_use]
    pub fn total_pages(&self, page_size: NonZeroUsize) -> usize {
        self.total_count().div_ceil(page_size.get()).max(1)
    }

    /// Maps items of this [`Page`] preserving its position in the listing.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next: self.next,
            previous: self.previous,
            count: self.count,
        }
    }

    /// Maps items of this [`Page`], dropping the ones `f` rejects.
    ///
    /// The reported total is left intact.
    #[must_use]
    pub fn filter_map<U>(self, f: impl FnMut(T) -> Option<U>) -> Page<U> {
        Page {
            items: self.items.into_iter().filter_map(f).collect(),
            next: self.next,
            previous: self.previous,
            count: self.count,
        }
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{Deserialize, Deserializer};

    use super::{Cursor, Page};

    /// Shapes a listing may arrive in.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape<T> {
        /// Unpaginated bare array.
        List(Vec<T>),

        /// Paginated envelope.
        Envelope {
            #[serde(alias = "items", alias = "data")]
            results: Vec<T>,
            #[serde(default)]
            next: Option<String>,
            #[serde(default)]
            previous: Option<String>,
            #[serde(default)]
            count: Option<usize>,
        },
    }

    impl<'de, T> Deserialize<'de> for Page<T>
    where
        T: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(match Shape::deserialize(deserializer)? {
                Shape::List(items) => Page::single(items),
                Shape::Envelope {
                    results,
                    next,
                    previous,
                    count,
                } => Page {
                    items: results,
                    next: next.and_then(Cursor::new),
                    previous: previous.and_then(Cursor::new),
                    count,
                },
            })
        }
    }
}
