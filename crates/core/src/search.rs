//! Search submission types.
//!
//! The mode is a tagged enum dispatched exhaustively to the request
//! builders; the endpoint/parameter mapping is checkable at compile time
//! instead of living in ad hoc string comparisons.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::messages;

/// Field a generic search can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Name,
    CategoryId,
    SupplierId,
}

impl SearchField {
    /// Query-string key understood by the search endpoint.
    pub fn query_key(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::CategoryId => "categoryId",
            SearchField::SupplierId => "supplierId",
        }
    }
}

/// How a lookup submission is routed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Single-record fetch keyed by identifier.
    ById,
    /// Collection fetch filtered by category; exactly one result collapses
    /// into the single-item card view.
    ByCategory,
    /// Generic list search on one field; never collapses.
    ByField(SearchField),
}

/// A validated search submission.
///
/// Created on form submit, discarded once the resulting call resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    mode: SearchMode,
    value: String,
}

impl SearchRequest {
    /// Trim the raw value and reject blank input before any network call.
    ///
    /// An all-whitespace value is equivalent to empty and fails with the
    /// same message the form shows for a missing required field.
    pub fn new(mode: SearchMode, raw_value: &str) -> Result<Self, ApiError> {
        let value = raw_value.trim();
        if value.is_empty() {
            let msg = match mode {
                SearchMode::ByField(_) => messages::SEARCH_TERM_REQUIRED,
                SearchMode::ById | SearchMode::ByCategory => messages::VALUE_REQUIRED,
            };
            return Err(ApiError::validation(msg));
        }
        Ok(Self {
            mode,
            value: value.to_string(),
        })
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
