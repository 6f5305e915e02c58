//! # playstv
//!
//! An async Rust client for the Plays.tv REST API.
//!
//! ## Features
//!
//! - **Credential Verification**: Check an app id / app key pair against `/auth/verify`
//! - **User Lookup**: Fetch a user record by username
//! - **Video Search**: Filtered search with transparent pagination; tail pages
//!   are fetched concurrently and results come back in a single ordered list
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use playstv::{PlaysTv, Result, SearchFilters, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PlaysTv::new("my-app-id", "my-app-key")?;
//!
//!     // Check the credentials before doing anything else
//!     client.verify().await?;
//!
//!     // Look up a single user
//!     let user = client.user("alice").await?;
//!
//!     // Search videos; pagination is resolved automatically
//!     let filters = SearchFilters::new().game_id("cs-go");
//!     let videos = client
//!         .search_videos(&filters, SearchOptions::new().count(120))
//!         .await?;
//!
//!     println!("{} videos for {user}", videos.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      PlaysTv client                     │
//! │  verify() → content    user(name) → UserRecord          │
//! │  search_videos(filters, options) → Vec<VideoRecord>     │
//! └───────────────────────────┬─────────────────────────────┘
//!                             │
//!             ┌───────────────┴───────────────┐
//!             │   Search Aggregator           │
//!             │   page 0 → clamp → fan out    │
//!             │   assemble in page order      │
//!             └───────────────┬───────────────┘
//!                             │
//!             ┌───────────────┴───────────────┐
//!             │   Transport (reqwest GET)     │
//!             │   appid/appkey injection      │
//!             │   status + content handling   │
//!             └───────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport with credential injection
pub mod http;

/// Paginated video search
pub mod search;

/// The public Plays.tv client
mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ClientConfig, PlaysTv};
pub use error::{Error, Result};
pub use http::{Credentials, HttpTransport, Transport, TransportConfig};
pub use search::{SearchFilters, SearchOptions, RESULTS_PER_PAGE};
pub use types::{SortDirection, SortKey, UserRecord, VideoRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
