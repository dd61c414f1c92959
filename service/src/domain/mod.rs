//! Domain definitions.

pub mod bookmark;
pub mod comment;
pub mod content;
pub mod notification;
pub mod post;
pub mod report;
pub mod review;
pub mod room;
pub mod session;

pub use self::{
    bookmark::Bookmark, comment::Comment, content::Content,
    notification::Notification, post::Post, report::Report, review::Review,
    room::Room, session::Session,
};
