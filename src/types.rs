//! Common types used throughout the Plays.tv client
//!
//! This module contains shared type definitions, type aliases,
//! and the wire shapes of API responses.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single video record as returned by the backend.
///
/// The record shape is defined by the backend and passed through untouched;
/// the search aggregator never inspects it.
pub type VideoRecord = JsonValue;

/// A user record as returned by `/users/{username}`
pub type UserRecord = JsonValue;

// ============================================================================
// Sorting
// ============================================================================

/// Sort key for video search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Trending,
    Popular,
    #[default]
    Recent,
}

impl SortKey {
    /// The query-parameter value for this sort key
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Trending => "trending",
            SortKey::Popular => "popular",
            SortKey::Recent => "recent",
        }
    }
}

/// Sort direction for video search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// The query-parameter value for this direction
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

// ============================================================================
// Response Shapes
// ============================================================================

/// Top-level response wrapper shared by all endpoints.
///
/// Every successful response carries its payload under a `content` field.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub content: T,
}

/// One page of search results.
///
/// `total_results` is the authoritative backend count for the whole query.
/// It is only trusted from page 0; the aggregator fixes it there and uses
/// it for all page-count math.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub total_results: u64,
    pub items: Vec<VideoRecord>,
}
