use std::{io, sync::OnceLock};

use service::{domain::Session, infra::Http, Service};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};
use uniroom::{args::Command, Args, Config, Context, Line};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        api,
        service,
        map,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let http = Http::new(&(&api).into()).map_err(|e| {
        log::error!("failed to initialize `Http` client: {e}");
    })?;

    let session = api.token.and_then(Session::new);
    if session.is_none() {
        log::info!("no access token configured, running anonymously");
    }

    let ctx = Context::new(Service::new(service.into(), http), session, map);

    match command.unwrap_or_default() {
        Command::Rooms(args) => {
            for row in uniroom::list_rooms(&ctx, args).await.map_err(|e| {
                log::error!("failed to list rooms: {e}");
            })? {
                println!("{row}");
            }
        }
        Command::Bookmark { room_id } => {
            let toggled = uniroom::toggle_bookmark(&ctx, room_id)
                .await
                .map_err(|e| log::error!("failed to toggle bookmark: {e}"))?;
            println!("{toggled}");
        }
        Command::Reports { page } => {
            let reports = uniroom::list_reports(&ctx, page)
                .await
                .map_err(|e| log::error!("failed to list reports: {e}"))?;
            println!("{reports}");
        }
        Command::Reviews { room_id } => {
            let reviews = uniroom::list_reviews(&ctx, room_id)
                .await
                .map_err(|e| log::error!("failed to list reviews: {e}"))?;
            for review in reviews {
                println!("{}", Line(review));
            }
        }
        Command::Review {
            room_id,
            rating,
            content,
        } => {
            let review =
                uniroom::submit_review(&ctx, room_id, rating, &content)
                    .await
                    .map_err(|e| log::error!("failed to submit review: {e}"))?;
            println!("{}", Line(review));
        }
        Command::Posts => {
            let posts = uniroom::list_posts(&ctx)
                .await
                .map_err(|e| log::error!("failed to list posts: {e}"))?;
            for post in posts {
                println!("{}", Line(post));
            }
        }
        Command::Post { title, content } => {
            let post = uniroom::create_post(&ctx, &title, &content)
                .await
                .map_err(|e| log::error!("failed to create post: {e}"))?;
            println!("{}", Line(post));
        }
        Command::Comments { post_id } => {
            let comments = uniroom::list_comments(&ctx, post_id)
                .await
                .map_err(|e| log::error!("failed to list comments: {e}"))?;
            for comment in comments {
                println!("{}", Line(comment));
            }
        }
        Command::Comment { post_id, content } => {
            let comment = uniroom::create_comment(&ctx, post_id, &content)
                .await
                .map_err(|e| log::error!("failed to create comment: {e}"))?;
            println!("{}", Line(comment));
        }
        Command::Like { post_id } => {
            let liked = uniroom::toggle_like(&ctx, post_id)
                .await
                .map_err(|e| log::error!("failed to toggle like: {e}"))?;
            println!("{liked}");
        }
        Command::Notifications => {
            let notifications = uniroom::list_notifications(&ctx)
                .await
                .map_err(|e| {
                    log::error!("failed to list notifications: {e}");
                })?;
            for notification in notifications {
                println!("{}", Line(notification));
            }
        }
    }

    Ok(())
}
