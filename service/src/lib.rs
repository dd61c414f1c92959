//! Service contains the client-side business logic of Uniroom: talking to
//! the REST API and keeping the map/list view state consistent.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod filter;
pub mod infra;
pub mod query;
pub mod read;
pub mod view;

use std::num::NonZeroUsize;

use smart_default::SmartDefault;

#[cfg(doc)]
use infra::Api;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Maximum number of pages followed when collecting a whole listing.
    #[default(50)]
    pub max_pages: usize,

    /// Number of reports per page served by the REST [`Api`].
    #[default(NonZeroUsize::MIN.saturating_add(9))]
    pub report_page_size: NonZeroUsize,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<A> {
    /// Configuration of this [`Service`].
    config: Config,

    /// REST [`Api`] of this [`Service`].
    api: A,
}

impl<A> Service<A> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub const fn new(config: Config, api: A) -> Self {
        Self { config, api }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns REST [`Api`] of this [`Service`].
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }
}
