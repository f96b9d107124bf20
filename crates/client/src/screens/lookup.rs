//! Dual-mode item lookup: by inventory ID or by category ID.

use stockroom_core::error::ScreenError;
use stockroom_core::{InventoryItem, SearchMode, SearchRequest};

use crate::http::ApiClient;
use crate::resolver::{local_failure, LookupResolver};
use crate::screens::reentry_error;

/// State behind the "Inventory Item Lookup" screen.
///
/// `item` holds the card view (exactly one record), `items` the table view;
/// the two are populated per the shaping rules in [`crate::resolver`].
#[derive(Debug)]
pub struct LookupScreen {
    resolver: LookupResolver,
    pub busy: bool,
    error: Option<ScreenError>,
    pub item: Option<InventoryItem>,
    pub items: Vec<InventoryItem>,
}

impl LookupScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            resolver: LookupResolver::new(api),
            busy: false,
            error: None,
            item: None,
            items: Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&ScreenError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }

    /// Submit one lookup. Terminal per submission: a failure requires the
    /// user to resubmit.
    pub async fn submit(&mut self, mode: SearchMode, raw_value: &str) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        // Clear the previous outcome before resolving the new one.
        self.error = None;
        self.item = None;
        self.items.clear();

        // Local validation short-circuits without flipping the busy flag.
        let request = match SearchRequest::new(mode, raw_value) {
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
            Ok(view) => {
                self.item = view.item;
                self.items = view.items;
            }
            Err(err) => self.error = Some(err),
        }
    }
}
