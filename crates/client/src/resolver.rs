//! Lookup/search resolution.
//!
//! Translates one validated search submission into exactly one outbound
//! request and shapes the response into a presentation-ready result:
//! a single-record card, a multi-record list, or both.

use stockroom_core::error::{ApiError, ScreenError};
use stockroom_core::{messages, InventoryItem, SearchField, SearchMode, SearchRequest};

use crate::http::ApiClient;

/// Presentation-ready result of a lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultView {
    /// Populated when exactly one record should be shown as a card.
    pub item: Option<InventoryItem>,
    /// Every resolved record, in server order.
    pub items: Vec<InventoryItem>,
}

impl ResultView {
    /// An identifier lookup always yields a single record by construction:
    /// it becomes the card and the sole list entry.
    fn single(item: InventoryItem) -> Self {
        Self {
            item: Some(item.clone()),
            items: vec![item],
        }
    }

    /// Category shaping: the card view is used only when exactly one record
    /// came back.
    fn collapsed(items: Vec<InventoryItem>) -> Self {
        let item = if items.len() == 1 {
            Some(items[0].clone())
        } else {
            None
        };
        Self { item, items }
    }

    /// Generic-search shaping: always a list, never a card.
    fn list_only(items: Vec<InventoryItem>) -> Self {
        Self { item: None, items }
    }
}

/// Maps a search submission to one REST call and a shaped result.
///
/// Construct with the [`ApiClient`] whose base URL was injected by the
/// host; the resolver holds no other state.
#[derive(Debug, Clone)]
pub struct LookupResolver {
    api: ApiClient,
}

impl LookupResolver {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Resolve one raw submission.
    ///
    /// Blank input (after trimming) fails locally; no request is issued.
    pub async fn resolve(
        &self,
        mode: SearchMode,
        raw_value: &str,
    ) -> Result<ResultView, ScreenError> {
        let request = SearchRequest::new(mode, raw_value).map_err(local_failure)?;
        self.resolve_request(&request).await
    }

    /// Resolve an already-validated submission.
    pub async fn resolve_request(&self, request: &SearchRequest) -> Result<ResultView, ScreenError> {
        match request.mode() {
            SearchMode::ById => self.by_id(request.value()).await,
            SearchMode::ByCategory => self.by_category(request.value()).await,
            SearchMode::ByField(field) => self.by_field(field, request.value()).await,
        }
    }

    async fn by_id(&self, id: &str) -> Result<ResultView, ScreenError> {
        match self.api.fetch_item(id).await {
            Ok(item) => Ok(ResultView::single(item)),
            Err(cause @ ApiError::NotFound) => {
                Err(ScreenError::new(cause, messages::ITEM_NOT_FOUND))
            }
            Err(cause @ ApiError::InvalidInput) => {
                Err(ScreenError::new(cause, messages::INVALID_ITEM_ID))
            }
            Err(cause) => Err(ScreenError::new(cause, messages::ITEM_LOAD_FAILED)),
        }
    }

    async fn by_category(&self, category: &str) -> Result<ResultView, ScreenError> {
        match self.api.search_items(SearchField::CategoryId, category).await {
            // Zero matches is an error state, not an empty success.
            Ok(items) if items.is_empty() => Err(ScreenError::new(
                ApiError::NotFound,
                messages::NO_ITEMS_FOR_CATEGORY,
            )),
            Ok(items) => Ok(ResultView::collapsed(items)),
            Err(cause @ ApiError::InvalidInput) => {
                Err(ScreenError::new(cause, messages::INVALID_CATEGORY_ID))
            }
            // A 404 from the search route means the same thing as an empty
            // result set.
            Err(cause @ ApiError::NotFound) => {
                Err(ScreenError::new(cause, messages::NO_ITEMS_FOR_CATEGORY))
            }
            Err(cause) => Err(ScreenError::new(cause, messages::CATEGORY_LOAD_FAILED)),
        }
    }

    async fn by_field(&self, field: SearchField, value: &str) -> Result<ResultView, ScreenError> {
        match self.api.search_items(field, value).await {
            Ok(items) => Ok(ResultView::list_only(items)),
            Err(cause) => Err(ScreenError::new(cause, messages::SEARCH_FAILED)),
        }
    }
}

pub(crate) fn local_failure(err: ApiError) -> ScreenError {
    match err {
        ApiError::Validation(msg) => ScreenError::validation(msg),
        other => ScreenError::new(other, messages::SEARCH_FAILED),
    }
}
