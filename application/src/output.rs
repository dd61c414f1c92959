//! Rendering of the command results.

use std::fmt;

use itertools::Itertools as _;
use service::{
    domain::{
        bookmark, post, review::Rating, room, Comment, Notification, Post,
        Review, Room,
    },
    query::reports::Listing,
    view::Listed,
};

/// Row of the room list.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomRow {
    /// ID of the room.
    pub id: room::Id,

    /// Rendered summary of the room.
    pub summary: String,

    /// Indicates whether the room is bookmarked.
    pub bookmarked: bool,

    /// Indicates whether the room is selected.
    pub selected: bool,
}

impl From<Listed<'_>> for RoomRow {
    fn from(listed: Listed<'_>) -> Self {
        Self {
            id: listed.room.id,
            summary: summarize(listed.room),
            bookmarked: listed.bookmarked,
            selected: listed.selected,
        }
    }
}

impl fmt::Display for RoomRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} #{} {}",
            if self.selected { '>' } else { ' ' },
            if self.bookmarked { '★' } else { '☆' },
            self.id,
            self.summary,
        )
    }
}

/// Renders a one-line summary of the provided [`Room`].
fn summarize(room: &Room) -> String {
    let fee = match room.monthly_fee {
        Some(fee) if fee.is_positive() => {
            format!("월세 {}만원", fee.in_man_won().normalize())
        }
        _ => "전세".to_owned(),
    };
    [
        Some(room.title.to_string()),
        room.room_type.as_ref().map(ToString::to_string),
        room.floor.as_ref().map(|f| format!("floor {f}")),
        Some(fee),
        room.real_area
            .map(|a| format!("{}평", a.in_pyeong().round_dp(1).normalize())),
    ]
    .into_iter()
    .flatten()
    .join(" | ")
}

/// Rendered outcome of a bookmark toggle.
#[derive(Clone, Copy, Debug)]
pub struct Toggled {
    /// ID of the toggled room.
    pub room_id: room::Id,

    /// Outcome reported by the server.
    pub action: bookmark::Action,
}

impl fmt::Display for Toggled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { room_id, action } = self;
        write!(f, "room #{room_id} bookmark {action}")
    }
}

/// Rendered page of reports.
#[derive(Clone, Debug)]
pub struct Reports(pub Listing);

impl fmt::Display for Reports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Listing {
            reports,
            page,
            total_pages,
            ..
        } = &self.0;

        for report in reports {
            writeln!(
                f,
                "#{} {} [{}] {}",
                report.id,
                report.title,
                report.room_ids.iter().join(", "),
                report.created_at.as_deref().unwrap_or_default(),
            )?;
        }
        write!(f, "page {page}/{total_pages}")
    }
}

/// Rendered outcome of a like toggle.
#[derive(Clone, Copy, Debug)]
pub struct Liked {
    /// ID of the toggled post.
    pub post_id: post::Id,

    /// Outcome reported by the server.
    pub like: post::Like,
}

impl fmt::Display for Liked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { post_id, like } = self;
        write!(f, "post #{post_id} {like}")
    }
}

/// One-line rendering of a listed record.
#[derive(Clone, Debug)]
pub struct Line<T>(pub T);

/// Renders the optional author and creation time of a record.
fn byline(author: Option<&str>, created_at: Option<&str>) -> String {
    [author, created_at].into_iter().flatten().join(", ")
}

impl fmt::Display for Line<Review> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let review = &self.0;
        write!(
            f,
            "#{} {}{} {} ({})",
            review.id,
            "★".repeat(usize::from(review.rating.get())),
            "☆".repeat(usize::from(Rating::MAX - review.rating.get())),
            review.content,
            byline(review.author.as_deref(), review.created_at.as_deref()),
        )
    }
}

impl fmt::Display for Line<Post> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let post = &self.0;
        write!(
            f,
            "#{} {} [{}{} likes, {} comments] ({})",
            post.id,
            post.title,
            if post.liked { "♥ " } else { "" },
            post.like_count,
            post.comment_count,
            byline(post.author.as_deref(), post.created_at.as_deref()),
        )
    }
}

impl fmt::Display for Line<Comment> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comment = &self.0;
        write!(
            f,
            "#{} {} ({})",
            comment.id,
            comment.content,
            byline(comment.author.as_deref(), comment.created_at.as_deref()),
        )
    }
}

impl fmt::Display for Line<Notification> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notification = &self.0;
        write!(
            f,
            "{} {} {}",
            if notification.read { ' ' } else { '*' },
            notification.message,
            notification.created_at.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Area, Money};
    use rust_decimal::Decimal;
    use service::domain::{
        post, review,
        room::{self, Floor, Title, Type},
        Content, Post, Review, Room,
    };

    use super::{summarize, Line};

    #[test]
    fn summarizes_room() {
        let room = Room {
            id: room::Id::from(1),
            title: Title::new("신촌역 도보 5분"),
            room_type: Type::new("원룸"),
            floor: Floor::new("3"),
            deposit: None,
            monthly_fee: Money::parse_lenient("500,000"),
            maintenance_cost: None,
            real_area: Area::square_meters(
                Decimal::from_str("33.05785").unwrap(),
            ),
            location: None,
            images: vec![],
        };

        assert_eq!(
            summarize(&room),
            "신촌역 도보 5분 | 원룸 | floor 3 | 월세 50만원 | 10평",
        );
    }

    #[test]
    fn renders_community_lines() {
        let review = Review {
            id: review::Id::from(1),
            room_id: room::Id::from(2),
            rating: review::Rating::new(4).unwrap(),
            content: Content::new("조용해요").unwrap(),
            author: Some("tenant".to_owned()),
            created_at: None,
        };
        assert_eq!(Line(review).to_string(), "#1 ★★★★☆ 조용해요 (tenant)");

        let post = Post {
            id: post::Id::from(3),
            title: post::Title::new("자취 팁").unwrap(),
            content: Content::new("관리비 확인").unwrap(),
            author: None,
            like_count: 2,
            comment_count: 0,
            liked: true,
            created_at: Some("2024-05-01".to_owned()),
        };
        assert_eq!(
            Line(post).to_string(),
            "#3 자취 팁 [♥ 2 likes, 0 comments] (2024-05-01)",
        );
    }
}
