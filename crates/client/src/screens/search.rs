//! Generic inventory search on a single field.

use stockroom_core::error::ScreenError;
use stockroom_core::{InventoryItem, SearchField, SearchMode, SearchRequest};

use crate::http::ApiClient;
use crate::resolver::{local_failure, LookupResolver};
use crate::screens::reentry_error;

/// State behind the "Search Inventory" screen.
///
/// Results are always a flat list; this screen never collapses a single
/// match into a card view.
#[derive(Debug)]
pub struct SearchScreen {
    resolver: LookupResolver,
    pub busy: bool,
    error: Option<ScreenError>,
    pub results: Vec<InventoryItem>,
}

impl SearchScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            resolver: LookupResolver::new(api),
            busy: false,
            error: None,
            results: Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&ScreenError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }

    pub async fn submit(&mut self, field: SearchField, query: &str) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        self.error = None;
        self.results.clear();

        let request = match SearchRequest::new(SearchMode::ByField(field), query) {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(local_failure(err));
                return;
            }
        };

        self.busy = true;
        let outcome = self.resolver.resolve_request(&request).await;
        self.busy = false;

        match outcome {
            Ok(view) => self.results = view.items,
            Err(err) => self.error = Some(err),
        }
    }
}
