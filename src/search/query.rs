//! Search filters and options
//!
//! Builder-style structs that flatten into the query parameters the
//! `/videos/search` endpoint understands.

use crate::types::{SortDirection, SortKey};

/// Filter set narrowing a video search.
///
/// At least one field must be present; an empty filter set is a usage
/// error, not a query with no constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Handle of the user who curated the video (`userId` on the wire)
    pub curator_id: Option<String>,
    /// Plays.tv id of the game (`gameId` on the wire)
    pub game_id: Option<String>,
    /// Hashtags without the leading `#`
    pub hashtags: Vec<String>,
    /// Metatags with the leading `#` removed
    pub metatags: Vec<String>,
}

impl SearchFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by the curating user's handle
    #[must_use]
    pub fn curator_id(mut self, curator_id: impl Into<String>) -> Self {
        self.curator_id = Some(curator_id.into());
        self
    }

    /// Filter by game id
    #[must_use]
    pub fn game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    /// Filter by hashtags (no leading `#`)
    #[must_use]
    pub fn hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = hashtags.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by metatags (leading `#` removed)
    #[must_use]
    pub fn metatags<I, S>(mut self, metatags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metatags = metatags.into_iter().map(Into::into).collect();
        self
    }

    /// True when no filter field is present
    pub fn is_empty(&self) -> bool {
        self.curator_id.is_none()
            && self.game_id.is_none()
            && self.hashtags.is_empty()
            && self.metatags.is_empty()
    }

    /// Flatten the present fields into query parameters.
    ///
    /// Tag arrays serialize as comma-joined strings.
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(curator_id) = &self.curator_id {
            params.push(("userId".to_string(), curator_id.clone()));
        }
        if let Some(game_id) = &self.game_id {
            params.push(("gameId".to_string(), game_id.clone()));
        }
        if !self.hashtags.is_empty() {
            params.push(("hashtags".to_string(), self.hashtags.join(",")));
        }
        if !self.metatags.is_empty() {
            params.push(("metatags".to_string(), self.metatags.join(",")));
        }
        params
    }
}

/// Options controlling how many results come back and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Desired total result count
    pub count: u32,
    /// Sort key
    pub sort: SortKey,
    /// Sort direction
    pub sort_direction: SortDirection,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            count: 50,
            sort: SortKey::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl SearchOptions {
    /// Create options with the defaults (50 results, recent, descending)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the desired total result count
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the sort key
    #[must_use]
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the sort direction
    #[must_use]
    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }
}
