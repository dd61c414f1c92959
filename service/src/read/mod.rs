//! Read-side definitions of the REST API listings.

pub mod bookmark;
pub mod comment;
pub mod notification;
pub mod post;
pub mod report;
pub mod review;
pub mod room;
