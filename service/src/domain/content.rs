//! [`Content`] definitions.

use derive_more::{AsRef, Display};

/// Free-form text body written by a user: a review, a post or a comment.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(forward)]
pub struct Content(String);

impl Content {
    /// Creates a new [`Content`] out of the provided text, trimming it.
    ///
    /// [`None`] is returned for blank text.
    #[must_use]
    pub fn new(content: impl AsRef<str>) -> Option<Self> {
        let content = content.as_ref().trim();
        (!content.is_empty()).then(|| Self(content.to_owned()))
    }
}
