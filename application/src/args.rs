//! [`Args`] definitions.

use std::num::NonZeroU32;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Command line client of the Uniroom room discovery service.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command of the [`Args`].
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists rooms around the current location.
    Rooms(Rooms),

    /// Toggles a bookmark of a room.
    Bookmark {
        /// ID of the room to toggle the bookmark of.
        room_id: u64,
    },

    /// Lists room comparison reports.
    Reports {
        /// One-based number of the page to list.
        #[arg(short, long, default_value = "1")]
        page: NonZeroU32,
    },

    /// Lists reviews of a room.
    Reviews {
        /// ID of the reviewed room.
        room_id: u64,
    },

    /// Reviews a room.
    Review {
        /// ID of the room to review.
        room_id: u64,

        /// Number of stars, from 1 to 5.
        #[arg(short, long)]
        rating: u8,

        /// Text of the review.
        content: String,
    },

    /// Lists the latest posts of the community board.
    Posts,

    /// Writes a post on the community board.
    Post {
        /// Title of the post.
        title: String,

        /// Text of the post.
        content: String,
    },

    /// Lists comments of a community post.
    Comments {
        /// ID of the commented post.
        post_id: u64,
    },

    /// Comments a community post.
    Comment {
        /// ID of the post to comment.
        post_id: u64,

        /// Text of the comment.
        content: String,
    },

    /// Toggles a like of a community post.
    Like {
        /// ID of the post to toggle the like of.
        post_id: u64,
    },

    /// Lists notifications of the logged in user.
    Notifications,
}

impl Default for Command {
    fn default() -> Self {
        Self::Rooms(Rooms::default())
    }
}

/// Arguments of the [`Command::Rooms`].
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Rooms {
    /// Search query narrowing the room list on the server.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Room type to match exactly (원룸, 투룸, ...).
    #[arg(long = "type")]
    pub room_type: Option<String>,

    /// Lease kind (월세 or 전세).
    #[arg(long)]
    pub lease: Option<String>,

    /// Maximum monthly fee in man-won (만원).
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Base of the one-pyeong-wide size bucket.
    #[arg(long)]
    pub size: Option<u32>,

    /// Floor (반지하, or an exact front floor number).
    #[arg(long, allow_hyphen_values = true)]
    pub floor: Option<String>,

    /// Current position as `<latitude>,<longitude>`.
    #[arg(long)]
    pub at: Option<String>,

    /// Lists rooms regardless of the map viewport.
    #[arg(long)]
    pub everywhere: bool,

    /// ID of the room to select.
    #[arg(long)]
    pub select: Option<u64>,
}
