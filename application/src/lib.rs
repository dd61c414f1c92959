//! Application provides a command line front end of the [`Service`].

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

pub mod args;
pub mod config;
mod context;
pub mod error;
pub mod output;

use std::{collections::HashSet, num::NonZeroU32};

use common::{Bounds, Coordinates};
use rust_decimal::Decimal;
use service::{
    command::{
        create_comment, create_post, submit_review, toggle_bookmark,
        toggle_like, Command, CreateComment, CreatePost, SubmitReview,
        ToggleBookmark, ToggleLike,
    },
    domain::{
        bookmark, post, review::Rating, room, Comment, Content, Notification,
        Post, Review, Room,
    },
    filter::{FloorConstraint, Lease, Pick},
    infra::{api, Http},
    query::{self, bookmarks::RoomIds, posts::Feed, reports::Listing, Query},
    read::post::list as posts,
    view::{
        location::{self, CurrentPosition, PositionProvider},
        BookmarkOverlay, MapListView,
    },
};
use tracerr::Traced;
use tracing as log;
// Used in binary.
use tokio as _;
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    context::Context,
    error::{AsError, Error, Notice},
    output::{Liked, Line, Reports, RoomRow, Toggled},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service<A = Http> = service::Service<A>;

/// [`PositionProvider`] of a position given as `<latitude>,<longitude>`
/// text.
#[derive(Clone, Debug)]
pub struct GivenPosition(pub String);

impl PositionProvider<CurrentPosition> for GivenPosition {
    type Ok = Coordinates;
    type Err = String;

    async fn execute(
        &self,
        _: CurrentPosition,
    ) -> Result<Self::Ok, Self::Err> {
        let degrees = |s: &str| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| format!("`{s}` is not degrees: {e}"))
        };

        let (lat, lng) = self
            .0
            .split_once(',')
            .ok_or_else(|| format!("`{}` is not `<lat>,<lng>`", self.0))?;
        Ok(Coordinates::new(degrees(lat)?, degrees(lng)?))
    }
}

/// Lists the rooms matching the provided [`args::Rooms`] filters, decorated
/// with their bookmark status.
///
/// # Errors
///
/// If the rooms cannot be fetched. Failing to fetch bookmarks is only logged.
pub async fn list_rooms<A>(
    ctx: &Context<A>,
    args: args::Rooms,
) -> Result<Vec<RoomRow>, Error>
where
    Service<A>: Query<
            query::rooms::List,
            Ok = Vec<Room>,
            Err = Traced<api::Error>,
        > + for<'s> Query<
            RoomIds<'s>,
            Ok = HashSet<room::Id>,
            Err = Traced<api::Error>,
        >,
{
    let args::Rooms {
        search,
        room_type,
        lease,
        max_price,
        size,
        floor,
        at,
        everywhere,
        select,
    } = args;

    let mut view = MapListView::default();

    let token = view.begin_fetch();
    let rooms = ctx
        .service()
        .execute(query::rooms::List { search })
        .await
        .map_err(AsError::into_error)?;
    _ = view.apply_rooms(token, rooms);

    if let Some(session) = ctx.session() {
        if let Err(e) = view.initialize_bookmarks(ctx.service(), session).await
        {
            log::warn!("failed to load bookmarks: {e}");
        }
    }

    for pick in picks(room_type, lease, max_price, size, floor) {
        _ = view.pick(pick);
    }

    if !everywhere {
        let provider = at.map(GivenPosition);
        let location =
            location::resolve(provider.as_ref(), ctx.map().center()).await;
        log::info!("showing rooms around {location}");

        _ = view.on_bounds_changed(Some(Bounds::around(
            location.coordinates(),
            ctx.map().half_span,
        )));
    }

    if let Some(id) = select {
        view.select(room::Id::from(id));
    }

    Ok(view.listing().map(RoomRow::from).collect())
}

/// Converts the raw filter arguments into [`Pick`]s, skipping unknown
/// values.
fn picks(
    room_type: Option<String>,
    lease: Option<String>,
    max_price: Option<Decimal>,
    size: Option<u32>,
    floor: Option<String>,
) -> Vec<Pick> {
    let lease = lease.and_then(|l| {
        let parsed = Lease::from_label(&l);
        if parsed.is_none() {
            log::warn!("unknown lease `{l}` is ignored");
        }
        parsed
    });
    let floor = floor.and_then(|f| {
        let parsed = FloorConstraint::from_label(&f);
        if parsed.is_none() {
            log::warn!("unknown floor `{f}` is ignored");
        }
        parsed
    });

    [
        room_type.and_then(room::Type::new).map(|t| Pick::Type(Some(t))),
        lease.map(|l| Pick::Lease(Some(l))),
        max_price.map(|p| Pick::Price(Some(p))),
        size.map(|s| Pick::Size(Some(s))),
        floor.map(|f| Pick::Floor(Some(f))),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Toggles the bookmark of the provided room.
///
/// # Errors
///
/// If the user is not logged in, or the server fails to toggle.
pub async fn toggle_bookmark<A>(
    ctx: &Context<A>,
    room_id: u64,
) -> Result<Toggled, Error>
where
    Service<A>: for<'s> Command<
        ToggleBookmark<'s>,
        Ok = bookmark::Action,
        Err = Traced<toggle_bookmark::ExecutionError>,
    >,
{
    let room_id = room::Id::from(room_id);

    let mut bookmarks = BookmarkOverlay::default();
    let action = bookmarks
        .toggle(ctx.service(), ctx.session(), room_id)
        .await
        .map_err(AsError::into_error)?;

    Ok(Toggled { room_id, action })
}

/// Lists a page of the room comparison reports.
///
/// # Errors
///
/// If the user is not logged in, or the reports cannot be fetched.
pub async fn list_reports<A>(
    ctx: &Context<A>,
    page: NonZeroU32,
) -> Result<Reports, Error>
where
    Service<A>: for<'s> Query<
        query::reports::List<'s>,
        Ok = Listing,
        Err = Traced<api::Error>,
    >,
{
    let session = ctx.current_session()?;

    ctx.service()
        .execute(query::reports::List { session, page })
        .await
        .map(Reports)
        .map_err(AsError::into_error)
}

/// Lists all the reviews of the provided room.
///
/// # Errors
///
/// If the reviews cannot be fetched.
pub async fn list_reviews<A>(
    ctx: &Context<A>,
    room_id: u64,
) -> Result<Vec<Review>, Error>
where
    Service<A>: Query<
        query::reviews::OfRoom,
        Ok = Vec<Review>,
        Err = Traced<api::Error>,
    >,
{
    ctx.service()
        .execute(query::reviews::OfRoom {
            room_id: room::Id::from(room_id),
        })
        .await
        .map_err(AsError::into_error)
}

/// Reviews the provided room.
///
/// # Errors
///
/// If the `rating` is out of range, the `content` is blank, the user is not
/// logged in, or the server fails to store the review.
pub async fn submit_review<A>(
    ctx: &Context<A>,
    room_id: u64,
    rating: u8,
    content: &str,
) -> Result<Review, Error>
where
    Service<A>: for<'s> Command<
        SubmitReview<'s>,
        Ok = Review,
        Err = Traced<submit_review::ExecutionError>,
    >,
{
    let rating = Rating::new(rating).ok_or(Notice::InvalidRating)?;
    let content = Content::new(content).ok_or(Notice::BlankText)?;

    ctx.service()
        .execute(SubmitReview {
            session: ctx.session(),
            room_id: room::Id::from(room_id),
            rating,
            content,
        })
        .await
        .map_err(AsError::into_error)
}

/// Lists the first page of the community board, personalized for the
/// logged in user.
///
/// # Errors
///
/// If the board cannot be fetched.
pub async fn list_posts<A>(ctx: &Context<A>) -> Result<Vec<Post>, Error>
where
    Service<A>: for<'s> Query<
        Feed<'s>,
        Ok = posts::Page,
        Err = Traced<api::Error>,
    >,
{
    ctx.service()
        .execute(Feed::by(posts::Selector {
            session: ctx.session(),
            cursor: None,
        }))
        .await
        .map(|page| page.items)
        .map_err(AsError::into_error)
}

/// Writes a post on the community board.
///
/// # Errors
///
/// If the `title` or the `content` is blank, the user is not logged in, or
/// the server fails to store the post.
pub async fn create_post<A>(
    ctx: &Context<A>,
    title: &str,
    content: &str,
) -> Result<Post, Error>
where
    Service<A>: for<'s> Command<
        CreatePost<'s>,
        Ok = Post,
        Err = Traced<create_post::ExecutionError>,
    >,
{
    let title = post::Title::new(title).ok_or(Notice::BlankText)?;
    let content = Content::new(content).ok_or(Notice::BlankText)?;

    ctx.service()
        .execute(CreatePost {
            session: ctx.session(),
            title,
            content,
        })
        .await
        .map_err(AsError::into_error)
}

/// Lists all the comments of the provided community post.
///
/// # Errors
///
/// If the comments cannot be fetched.
pub async fn list_comments<A>(
    ctx: &Context<A>,
    post_id: u64,
) -> Result<Vec<Comment>, Error>
where
    Service<A>: Query<
        query::comments::OfPost,
        Ok = Vec<Comment>,
        Err = Traced<api::Error>,
    >,
{
    ctx.service()
        .execute(query::comments::OfPost {
            post_id: post::Id::from(post_id),
        })
        .await
        .map_err(AsError::into_error)
}

/// Comments the provided community post.
///
/// # Errors
///
/// If the `content` is blank, the user is not logged in, or the server fails
/// to store the comment.
pub async fn create_comment<A>(
    ctx: &Context<A>,
    post_id: u64,
    content: &str,
) -> Result<Comment, Error>
where
    Service<A>: for<'s> Command<
        CreateComment<'s>,
        Ok = Comment,
        Err = Traced<create_comment::ExecutionError>,
    >,
{
    let content = Content::new(content).ok_or(Notice::BlankText)?;

    ctx.service()
        .execute(CreateComment {
            session: ctx.session(),
            post_id: post::Id::from(post_id),
            content,
        })
        .await
        .map_err(AsError::into_error)
}

/// Toggles the like of the provided community post.
///
/// # Errors
///
/// If the user is not logged in, or the server fails to toggle.
pub async fn toggle_like<A>(
    ctx: &Context<A>,
    post_id: u64,
) -> Result<Liked, Error>
where
    Service<A>: for<'s> Command<
        ToggleLike<'s>,
        Ok = post::Like,
        Err = Traced<toggle_like::ExecutionError>,
    >,
{
    let post_id = post::Id::from(post_id);

    let like = ctx
        .service()
        .execute(ToggleLike {
            session: ctx.session(),
            post_id,
        })
        .await
        .map_err(AsError::into_error)?;

    Ok(Liked { post_id, like })
}

/// Lists all the notifications of the logged in user.
///
/// # Errors
///
/// If the user is not logged in, or the notifications cannot be fetched.
pub async fn list_notifications<A>(
    ctx: &Context<A>,
) -> Result<Vec<Notification>, Error>
where
    Service<A>: for<'s> Query<
        query::notifications::List<'s>,
        Ok = Vec<Notification>,
        Err = Traced<api::Error>,
    >,
{
    let session = ctx.current_session()?;

    ctx.service()
        .execute(query::notifications::List { session })
        .await
        .map_err(AsError::into_error)
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroU32;

    use common::{
        operations::{By, Insert, Select, Toggle},
        pagination::Page,
        Money,
    };
    use service::{
        domain::{
            bookmark, notification, post, review, room, Bookmark,
            Notification, Review, Room, Session,
        },
        infra::{api, Api},
        read::{
            bookmark::{list as bookmarks, toggle},
            notification::list as notifications,
            post::like,
            report::list as reports,
            review::submit,
            room::list as rooms,
        },
    };
    use tracerr::Traced;

    use crate::{args, config, Context, Service};

    /// In-memory REST API of a few rooms around Seoul City Hall.
    #[derive(Clone, Copy, Debug)]
    struct Backend;

    fn room(id: u64, lat: f64, lng: f64, fee: &str) -> Room {
        Room {
            id: room::Id::from(id),
            title: room::Title::new(format!("room #{id}")),
            room_type: room::Type::new("원룸"),
            floor: None,
            deposit: None,
            monthly_fee: Money::parse_lenient(fee),
            maintenance_cost: None,
            real_area: None,
            location: common::Coordinates::valid(lat, lng),
            images: vec![],
        }
    }

    impl Api<Select<By<rooms::Page, rooms::Selector>>> for Backend {
        type Ok = rooms::Page;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Select<By<rooms::Page, rooms::Selector>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Page::single(vec![
                room(1, 37.5660, 126.9770, "0"),
                room(2, 37.5670, 126.9790, "500000"),
                room(3, 37.5668, 126.9785, ""),
                room(4, 35.1796, 129.0756, "0"),
            ]))
        }
    }

    impl<'s> Api<Select<By<bookmarks::Page, bookmarks::Selector<'s>>>>
        for Backend
    {
        type Ok = bookmarks::Page;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Select<By<bookmarks::Page, bookmarks::Selector<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Page::single(vec![Bookmark {
                id: bookmark::Id::from(10),
                room_id: room::Id::from(3),
            }]))
        }
    }

    impl<'s> Api<Select<By<reports::Page, reports::Selector<'s>>>>
        for Backend
    {
        type Ok = reports::Page;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Select<By<reports::Page, reports::Selector<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Page::single(vec![]))
        }
    }

    impl<'s> Api<Toggle<By<bookmark::Action, toggle::Target<'s>>>> for Backend {
        type Ok = bookmark::Action;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Toggle<By<bookmark::Action, toggle::Target<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(bookmark::Action::Added)
        }
    }

    impl<'s> Api<Insert<By<Review, submit::Draft<'s>>>> for Backend {
        type Ok = Review;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            Insert(by): Insert<By<Review, submit::Draft<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            let draft = by.into_inner();
            Ok(Review {
                id: review::Id::from(1),
                room_id: draft.room_id,
                rating: draft.rating,
                content: draft.content,
                author: None,
                created_at: None,
            })
        }
    }

    impl<'s> Api<Toggle<By<post::Like, like::Target<'s>>>> for Backend {
        type Ok = post::Like;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Toggle<By<post::Like, like::Target<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(post::Like::Unliked)
        }
    }

    impl<'s>
        Api<Select<By<notifications::Page, notifications::Selector<'s>>>>
        for Backend
    {
        type Ok = notifications::Page;
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            _: Select<By<notifications::Page, notifications::Selector<'s>>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Page::single(vec![Notification {
                id: notification::Id::from(5),
                message: "새 댓글이 달렸어요".to_owned(),
                read: false,
                created_at: None,
            }]))
        }
    }

    fn context(token: Option<&str>) -> Context<Backend> {
        Context::new(
            Service::new(service::Config::default(), Backend),
            token.and_then(Session::new),
            config::Map::default(),
        )
    }

    #[tokio::test]
    async fn lists_jeonse_rooms_nearby() {
        let ctx = context(Some("token"));

        let rows = super::list_rooms(
            &ctx,
            args::Rooms {
                lease: Some("전세".to_owned()),
                ..args::Rooms::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(
            rows.iter()
                .map(|r| (u64::from(r.id), r.bookmarked))
                .collect::<Vec<_>>(),
            [(1, false), (3, true)],
        );
    }

    #[tokio::test]
    async fn lists_everywhere_with_selection() {
        let ctx = context(None);

        let rows = super::list_rooms(
            &ctx,
            args::Rooms {
                at: Some("not a position".to_owned()),
                everywhere: true,
                select: Some(4),
                ..args::Rooms::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| !r.bookmarked));
        assert!(rows.iter().any(|r| r.selected && u64::from(r.id) == 4));
    }

    #[tokio::test]
    async fn toggles_bookmark() {
        let ctx = context(Some("token"));

        let toggled = super::toggle_bookmark(&ctx, 2).await.unwrap();

        assert_eq!(toggled.to_string(), "room #2 bookmark added");
    }

    #[tokio::test]
    async fn requires_login_for_bookmarks_and_reports() {
        let ctx = context(None);

        let err = super::toggle_bookmark(&ctx, 2).await.unwrap_err();
        assert_eq!(err.code, "LOGIN_REQUIRED");

        let err = super::list_reports(&ctx, NonZeroU32::MIN).await.unwrap_err();
        assert_eq!(err.code, "LOGIN_REQUIRED");
    }

    #[tokio::test]
    async fn lists_reports() {
        let ctx = context(Some("token"));

        let reports = super::list_reports(&ctx, NonZeroU32::MIN).await.unwrap();

        assert_eq!(reports.to_string(), "page 1/1");
    }

    #[tokio::test]
    async fn validates_review_before_login() {
        let ctx = context(None);

        let err = super::submit_review(&ctx, 1, 6, "좋아요").await.unwrap_err();
        assert_eq!(err.code, "INVALID_RATING");

        let err = super::submit_review(&ctx, 1, 0, "좋아요").await.unwrap_err();
        assert_eq!(err.code, "INVALID_RATING");

        let err = super::submit_review(&ctx, 1, 5, "  ").await.unwrap_err();
        assert_eq!(err.code, "BLANK_TEXT");

        let err = super::submit_review(&ctx, 1, 5, "좋아요").await.unwrap_err();
        assert_eq!(err.code, "LOGIN_REQUIRED");
    }

    #[tokio::test]
    async fn submits_review() {
        let ctx = context(Some("token"));

        let review = super::submit_review(&ctx, 3, 4, " 조용해요 ")
            .await
            .unwrap();

        assert_eq!(u64::from(review.room_id), 3);
        assert_eq!(review.rating.get(), 4);
        assert_eq!(review.content.to_string(), "조용해요");
    }

    #[tokio::test]
    async fn toggles_like() {
        let ctx = context(Some("token"));

        let liked = super::toggle_like(&ctx, 7).await.unwrap();
        assert_eq!(liked.to_string(), "post #7 unliked");

        let err = super::toggle_like(&context(None), 7).await.unwrap_err();
        assert_eq!(err.code, "LOGIN_REQUIRED");
    }

    #[tokio::test]
    async fn lists_notifications_of_logged_in_user() {
        let notifications = super::list_notifications(&context(Some("token")))
            .await
            .unwrap();
        assert_eq!(notifications.len(), 1);
        assert!(!notifications[0].read);

        let err = super::list_notifications(&context(None)).await.unwrap_err();
        assert_eq!(err.code, "LOGIN_REQUIRED");
    }
}
