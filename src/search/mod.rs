//! Paginated video search
//!
//! The backend serves search results in pages of 50. This module owns the
//! pagination algorithm: fetch page 0 to learn the authoritative result
//! count, clamp the target to the caller's requested count, fetch the
//! remaining pages concurrently, and assemble one ordered list.
//!
//! # Overview
//!
//! - Page 0 is always fetched first and alone, because `total_results` is
//!   unknown before it arrives
//! - Tail pages are fanned out concurrently and joined all-or-nothing
//! - Output order is ascending page index then within-page order, no matter
//!   which tail fetch completes first

mod aggregator;
mod query;

pub use aggregator::{search, RESULTS_PER_PAGE};
pub use query::{SearchFilters, SearchOptions};
