//! HTTP implementation of the REST [`Api`].

use std::time::Duration;

use common::{
    operations::{By, Insert, Select, Toggle},
    pagination::{Cursor, Page},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{bookmark, post, Comment, Post, Review, Session},
    infra::api::{self, Api},
    read::{
        bookmark::{list as bookmarks, toggle},
        comment::{create as comment_create, list as comments},
        notification::list as notifications,
        post::{create as post_create, like, list as posts},
        report::list as reports,
        review::{list as reviews, submit},
        room::list as rooms,
    },
};

use super::dto::{
    BookmarkDto, CommentDto, NotificationDto, PostDto, ReportDto, ReviewDto,
    RoomDto,
};

/// [`Http`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,

    /// Timeout of a single request.
    pub timeout: Duration,
}

/// REST [`Api`] client over HTTP.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL of the REST API.
    base_url: String,

    /// Parsed [`Http::base_url`], pinning the origin pagination cursors may
    /// point to.
    base: reqwest::Url,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the underlying HTTP client cannot be built, or the configured base
    /// URL is malformed.
    pub fn new(config: &Config) -> Result<Self, Traced<api::Error>> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| tracerr::new!(api::Error::Request(e.to_string())))?;
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        let base = reqwest::Url::parse(&base_url)
            .map_err(|e| tracerr::new!(api::Error::Request(e.to_string())))?;

        Ok(Self {
            client,
            base_url,
            base,
        })
    }

    /// Returns an absolute URL of the provided API `path`.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the provided request and decodes its JSON response.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        session: Option<&Session>,
    ) -> Result<T, Traced<api::Error>> {
        let response = self.send(request, session).await?;
        let body = response
            .text()
            .await
            .map_err(|e| tracerr::new!(api::Error::Request(e.to_string())))?;

        serde_json::from_str(&body)
            .map_err(tracerr::from_and_wrap!(=> api::Error))
    }

    /// Sends the provided request, authenticating it with the provided
    /// [`Session`] (if any), and checks its response status.
    async fn send(
        &self,
        mut request: reqwest::RequestBuilder,
        session: Option<&Session>,
    ) -> Result<reqwest::Response, Traced<api::Error>> {
        use api::Error as E;

        if let Some(session) = session {
            request = request.bearer_auth(session.token.expose());
        }

        let response = request
            .send()
            .await
            .map_err(|e| tracerr::new!(E::Request(e.to_string())))?;

        let status = response.status();
        log::debug!("`{}` responded with `{status}`", response.url());

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(tracerr::new!(E::Unauthorized));
        }
        if !status.is_success() {
            return Err(tracerr::new!(E::Status(status.as_u16())));
        }

        Ok(response)
    }

    /// Builds a `GET` request either of the provided [`Cursor`] or of the
    /// first page at `path`.
    ///
    /// # Errors
    ///
    /// If the [`Cursor`] points outside the origin of the REST API, so the
    /// session token is never sent to another host.
    fn page_request(
        &self,
        cursor: Option<&Cursor>,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, Traced<api::Error>> {
        let Some(cursor) = cursor else {
            return Ok(self.client.get(self.url(path)));
        };

        let url = reqwest::Url::parse(cursor.as_ref())
            .ok()
            .filter(|url| url.origin() == self.base.origin())
            .ok_or_else(|| {
                tracerr::new!(api::Error::ForeignCursor(cursor.to_string()))
            })?;
        Ok(self.client.get(url))
    }
}

impl Api<Select<By<rooms::Page, rooms::Selector>>> for Http {
    type Ok = rooms::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<rooms::Page, rooms::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let rooms::Selector { search, cursor } = by.into_inner();

        let mut request = self
            .page_request(cursor.as_ref(), "rooms/")
            .map_err(tracerr::wrap!())?;
        if let (None, Some(search)) = (&cursor, &search) {
            request = request.query(&[("search", search)]);
        }

        self.fetch::<Page<RoomDto>>(request, None)
            .await
            .map(|page| page.map(RoomDto::into_domain))
            .map_err(tracerr::wrap!())
    }
}

impl<'s> Api<Select<By<bookmarks::Page, bookmarks::Selector<'s>>>> for Http {
    type Ok = bookmarks::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<bookmarks::Page, bookmarks::Selector<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let bookmarks::Selector { session, cursor } = by.into_inner();

        let request = self
            .page_request(cursor, "bookmarks/")
            .map_err(tracerr::wrap!())?;
        self.fetch::<Page<BookmarkDto>>(request, Some(session))
            .await
            .map(|page| page.filter_map(BookmarkDto::into_domain))
            .map_err(tracerr::wrap!())
    }
}

impl<'s> Api<Select<By<reports::Page, reports::Selector<'s>>>> for Http {
    type Ok = reports::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<reports::Page, reports::Selector<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let reports::Selector { session, page } = by.into_inner();

        let request = self
            .client
            .get(self.url("reports/"))
            .query(&[("page", page.get())]);
        self.fetch::<Page<ReportDto>>(request, Some(session))
            .await
            .map(|page| page.map(ReportDto::into_domain))
            .map_err(tracerr::wrap!())
    }
}

impl Api<Select<By<reviews::Page, reviews::Selector>>> for Http {
    type Ok = reviews::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<reviews::Page, reviews::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let reviews::Selector { room_id, cursor } = by.into_inner();

        let path = format!("rooms/{room_id}/reviews/");
        let request = self
            .page_request(cursor.as_ref(), &path)
            .map_err(tracerr::wrap!())?;
        self.fetch::<Page<ReviewDto>>(request, None)
            .await
            .map(|page| page.filter_map(ReviewDto::into_domain))
            .map_err(tracerr::wrap!())
    }
}

impl<'s> Api<Insert<By<Review, submit::Draft<'s>>>> for Http {
    type Ok = Review;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(by): Insert<By<Review, submit::Draft<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let submit::Draft {
            session,
            room_id,
            rating,
            content,
        } = by.into_inner();

        let request = self
            .client
            .post(self.url(&format!("rooms/{room_id}/reviews/")))
            .json(&json!({
                "rating": rating.get(),
                "content": content.to_string(),
            }));
        self.fetch::<ReviewDto>(request, Some(session))
            .await
            .map_err(tracerr::wrap!())?
            .into_domain()
            .ok_or_else(|| tracerr::new!(api::Error::Incomplete("Review")))
    }
}

impl<'s> Api<Select<By<posts::Page, posts::Selector<'s>>>> for Http {
    type Ok = posts::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<posts::Page, posts::Selector<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let posts::Selector { session, cursor } = by.into_inner();

        let request = self
            .page_request(cursor.as_ref(), "community/posts/")
            .map_err(tracerr::wrap!())?;
        self.fetch::<Page<PostDto>>(request, session)
            .await
            .map(|page| page.filter_map(PostDto::into_domain))
            .map_err(tracerr::wrap!())
    }
}

impl<'s> Api<Insert<By<Post, post_create::Draft<'s>>>> for Http {
    type Ok = Post;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(by): Insert<By<Post, post_create::Draft<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let post_create::Draft {
            session,
            title,
            content,
        } = by.into_inner();

        let request =
            self.client.post(self.url("community/posts/")).json(&json!({
                "title": title.to_string(),
                "content": content.to_string(),
            }));
        self.fetch::<PostDto>(request, Some(session))
            .await
            .map_err(tracerr::wrap!())?
            .into_domain()
            .ok_or_else(|| tracerr::new!(api::Error::Incomplete("Post")))
    }
}

impl Api<Select<By<comments::Page, comments::Selector>>> for Http {
    type Ok = comments::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<comments::Page, comments::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let comments::Selector { post_id, cursor } = by.into_inner();

        let path = format!("community/posts/{post_id}/comments/");
        let request = self
            .page_request(cursor.as_ref(), &path)
            .map_err(tracerr::wrap!())?;
        self.fetch::<Page<CommentDto>>(request, None)
            .await
            .map(|page| page.filter_map(|c| c.into_domain(post_id)))
            .map_err(tracerr::wrap!())
    }
}

impl<'s> Api<Insert<By<Comment, comment_create::Draft<'s>>>> for Http {
    type Ok = Comment;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(by): Insert<By<Comment, comment_create::Draft<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let comment_create::Draft {
            session,
            post_id,
            content,
        } = by.into_inner();

        let request = self
            .client
            .post(self.url(&format!("community/posts/{post_id}/comments/")))
            .json(&json!({ "content": content.to_string() }));
        self.fetch::<CommentDto>(request, Some(session))
            .await
            .map_err(tracerr::wrap!())?
            .into_domain(post_id)
            .ok_or_else(|| tracerr::new!(api::Error::Incomplete("Comment")))
    }
}

impl<'s> Api<Select<By<notifications::Page, notifications::Selector<'s>>>>
    for Http
{
    type Ok = notifications::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<notifications::Page, notifications::Selector<'s>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let notifications::Selector { session, cursor } = by.into_inner();

        let request = self
            .page_request(cursor.as_ref(), "notifications/")
            .map_err(tracerr::wrap!())?;
        self.fetch::<Page<NotificationDto>>(request, Some(session))
            .await
            .map(|page| page.map(NotificationDto::into_domain))
            .map_err(tracerr::wrap!())
    }
}

impl<'s> Api<Toggle<By<bookmark::Action, toggle::Target<'s>>>> for Http {
    type Ok = bookmark::Action;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Toggle(by): Toggle<By<bookmark::Action, toggle::Target<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let toggle::Target { session, room_id } = by.into_inner();

        let request =
            self.client.post(self.url(&format!("rooms/{room_id}/bookmark/")));
        let response = self
            .send(request, Some(session))
            .await
            .map_err(tracerr::wrap!())?;

        // The action is told by the status code only.
        Ok(if response.status() == reqwest::StatusCode::CREATED {
            bookmark::Action::Added
        } else {
            bookmark::Action::Removed
        })
    }
}

impl<'s> Api<Toggle<By<post::Like, like::Target<'s>>>> for Http {
    type Ok = post::Like;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Toggle(by): Toggle<By<post::Like, like::Target<'s>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let like::Target { session, post_id } = by.into_inner();

        let request = self
            .client
            .post(self.url(&format!("community/posts/{post_id}/like/")));
        let response = self
            .send(request, Some(session))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(if response.status() == reqwest::StatusCode::CREATED {
            post::Like::Liked
        } else {
            post::Like::Unliked
        })
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::pagination::Cursor;

    use crate::infra::api;

    use super::{Config, Http};

    fn http() -> Http {
        Http::new(&Config {
            base_url: "https://api.uniroom.kr/v1/".into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn follows_own_cursors_only() {
        let http = http();

        let own = Cursor::new("https://api.uniroom.kr/v1/rooms/?page=2");
        assert!(http.page_request(own.as_ref(), "rooms/").is_ok());
        assert!(http.page_request(None, "rooms/").is_ok());

        for foreign in [
            "https://elsewhere.example/rooms/?page=2",
            "http://api.uniroom.kr/v1/rooms/?page=2",
            "https://api.uniroom.kr:8443/v1/rooms/?page=2",
            "/v1/rooms/?page=2",
        ] {
            let cursor = Cursor::new(foreign);
            let err = http
                .page_request(cursor.as_ref(), "rooms/")
                .unwrap_err();
            assert!(
                matches!(
                    err.as_ref(),
                    api::Error::ForeignCursor(c) if c == foreign,
                ),
                "`{foreign}` is followed",
            );
        }
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = Http::new(&Config {
            base_url: "api.uniroom.kr".into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap_err();

        assert!(matches!(err.as_ref(), api::Error::Request(_)));
    }
}
