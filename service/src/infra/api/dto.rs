//! DTOs for decoding REST API responses.
//!
//! The adapter decodes into these transport DTOs first, then maps them into
//! domain records in one pass, dropping records it cannot reason about.

use common::{area, money, Area, Coordinates, Money};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing as log;

use crate::domain::{
    bookmark, comment, notification, post, report,
    review::{self, Rating},
    room::{self, Floor, ImageUrl, Title, Type},
    Bookmark, Comment, Content, Notification, Post, Report, Review, Room,
};

#[derive(Debug, Deserialize)]
pub(super) struct RoomDto {
    id: room::Id,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    room_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    floor: Option<String>,
    #[serde(default, deserialize_with = "money::lenient")]
    deposit: Option<Money>,
    #[serde(default, deserialize_with = "money::lenient")]
    monthly_fee: Option<Money>,
    #[serde(default, deserialize_with = "money::lenient")]
    maintenance_cost: Option<Money>,
    #[serde(default, deserialize_with = "area::lenient")]
    real_area: Option<Area>,
    #[serde(default, deserialize_with = "lenient_degrees")]
    latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_degrees")]
    longitude: Option<f64>,
    #[serde(default)]
    images: Vec<ImageDto>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageDto {
    Url(String),
    Object {
        #[serde(alias = "url")]
        image: String,
    },
}

impl RoomDto {
    pub(super) fn into_domain(self) -> Room {
        let location = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Coordinates::valid(lat, lng),
            _ => None,
        };
        if location.is_none() {
            log::debug!("`Room(id: {})` has no valid coordinates", self.id);
        }

        Room {
            id: self.id,
            title: Title::new(self.title.unwrap_or_default()),
            room_type: self.room_type.and_then(Type::new),
            floor: self.floor.and_then(Floor::new),
            deposit: self.deposit,
            monthly_fee: self.monthly_fee,
            maintenance_cost: self.maintenance_cost,
            real_area: self.real_area,
            location,
            images: self
                .images
                .into_iter()
                .filter_map(|i| match i {
                    ImageDto::Url(url) | ImageDto::Object { image: url } => {
                        ImageUrl::new(url)
                    }
                })
                .collect(),
        }
    }
}

/// Reference to a [`Room`] the server sends either as a bare ID or as an
/// embedded object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoomRefDto {
    Id(room::Id),
    Embedded { id: room::Id },
    Text(String),
}

impl RoomRefDto {
    fn room_id(self) -> Option<room::Id> {
        match self {
            Self::Id(id) | Self::Embedded { id } => Some(id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct BookmarkDto {
    id: bookmark::Id,
    #[serde(alias = "room_id")]
    room: RoomRefDto,
}

impl BookmarkDto {
    pub(super) fn into_domain(self) -> Option<Bookmark> {
        let id = self.id;
        let room_id = self.room.room_id();
        if room_id.is_none() {
            log::warn!("`Bookmark(id: {id})` refers to no valid `Room`");
        }
        room_id.map(|room_id| Bookmark { id, room_id })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ReportDto {
    id: report::Id,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, alias = "rooms")]
    room_ids: Vec<RoomRefDto>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
}

impl ReportDto {
    pub(super) fn into_domain(self) -> Report {
        Report {
            id: self.id,
            title: self.title.unwrap_or_default(),
            room_ids: self
                .room_ids
                .into_iter()
                .filter_map(RoomRefDto::room_id)
                .collect(),
            created_at: self.created_at,
        }
    }
}

/// Author of a user-written record, sent either as a plain name or as an
/// embedded user object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AuthorDto {
    Name(String),
    User {
        #[serde(alias = "username", alias = "name")]
        nickname: String,
    },
}

impl AuthorDto {
    fn into_name(self) -> Option<String> {
        let (Self::Name(name) | Self::User { nickname: name }) = self;
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_owned())
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ReviewDto {
    id: review::Id,
    #[serde(alias = "room_id")]
    room: RoomRefDto,
    #[serde(default, deserialize_with = "lenient_count")]
    rating: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    content: Option<String>,
    #[serde(default, alias = "user")]
    author: Option<AuthorDto>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
}

impl ReviewDto {
    pub(super) fn into_domain(self) -> Option<Review> {
        let id = self.id;
        let rating = self
            .rating
            .and_then(|r| u8::try_from(r).ok())
            .and_then(Rating::new);
        let (Some(room_id), Some(rating), Some(content)) = (
            self.room.room_id(),
            rating,
            self.content.and_then(Content::new),
        ) else {
            log::warn!("`Review(id: {id})` is incomplete, skipping");
            return None;
        };

        Some(Review {
            id,
            room_id,
            rating,
            content,
            author: self.author.and_then(AuthorDto::into_name),
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PostDto {
    id: post::Id,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    content: Option<String>,
    #[serde(default, alias = "user")]
    author: Option<AuthorDto>,
    #[serde(default, alias = "likes", deserialize_with = "lenient_count")]
    like_count: Option<u32>,
    #[serde(
        default,
        alias = "comments_count",
        deserialize_with = "lenient_count"
    )]
    comment_count: Option<u32>,
    #[serde(default, alias = "liked")]
    is_liked: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
}

impl PostDto {
    pub(super) fn into_domain(self) -> Option<Post> {
        let id = self.id;
        let (Some(title), Some(content)) = (
            self.title.and_then(post::Title::new),
            self.content.and_then(Content::new),
        ) else {
            log::warn!("`Post(id: {id})` is incomplete, skipping");
            return None;
        };

        Some(Post {
            id,
            title,
            content,
            author: self.author.and_then(AuthorDto::into_name),
            like_count: self.like_count.unwrap_or_default(),
            comment_count: self.comment_count.unwrap_or_default(),
            liked: self.is_liked.unwrap_or_default(),
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CommentDto {
    id: comment::Id,
    #[serde(default, alias = "post_id")]
    post: Option<post::Id>,
    #[serde(default, deserialize_with = "lenient_text")]
    content: Option<String>,
    #[serde(default, alias = "user")]
    author: Option<AuthorDto>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
}

impl CommentDto {
    /// Maps this [`CommentDto`] into a [`Comment`] of the provided `post`,
    /// unless the server attributes it to another one.
    pub(super) fn into_domain(self, post: post::Id) -> Option<Comment> {
        let id = self.id;
        if self.post.is_some_and(|p| p != post) {
            log::warn!("`Comment(id: {id})` belongs to another `Post`");
            return None;
        }
        let Some(content) = self.content.and_then(Content::new) else {
            log::warn!("`Comment(id: {id})` is blank, skipping");
            return None;
        };

        Some(Comment {
            id,
            post_id: post,
            content,
            author: self.author.and_then(AuthorDto::into_name),
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct NotificationDto {
    id: notification::Id,
    #[serde(default, alias = "content", deserialize_with = "lenient_text")]
    message: Option<String>,
    #[serde(default, alias = "read")]
    is_read: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
}

impl NotificationDto {
    pub(super) fn into_domain(self) -> Notification {
        Notification {
            id: self.id,
            message: self.message.unwrap_or_default(),
            read: self.is_read.unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

/// Reads an optional text out of a string or a number.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(_) | None => None,
    })
}

/// Reads an optional non-negative count out of a number or a numeric
/// string.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| n.try_into().ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) | None => None,
    })
}

/// Reads optional degrees out of a number or a numeric string.
fn lenient_degrees<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) | None => None,
    })
}
