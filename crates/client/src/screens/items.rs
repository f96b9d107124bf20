//! Item create/update/delete/list screens.

use stockroom_core::error::{ApiError, ScreenError};
use stockroom_core::{messages, InventoryItem, NewInventoryItem};

use crate::http::ApiClient;
use crate::screens::reentry_error;

/// State behind the "Create Inventory Item" form.
#[derive(Debug)]
pub struct CreateItemScreen {
    api: ApiClient,
    pub busy: bool,
    error: Option<ScreenError>,
    pub success_message: String,
}

impl CreateItemScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            busy: false,
            error: None,
            success_message: String::new(),
        }
    }

    pub fn error(&self) -> Option<&ScreenError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }

    pub async fn submit(&mut self, item: &NewInventoryItem) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        self.error = None;
        self.success_message.clear();

        self.busy = true;
        let outcome = self.api.create_item(item).await;
        self.busy = false;

        match outcome {
            Ok(()) => self.success_message = messages::ITEM_CREATED.to_string(),
            // Local validation keeps its own message; everything else is the
            // single create-failure string the form shows.
            Err(ApiError::Validation(msg)) => self.error = Some(ScreenError::validation(msg)),
            Err(cause) => self.error = Some(ScreenError::new(cause, messages::ITEM_CREATE_FAILED)),
        }
    }
}

/// State behind the editable inventory table (load all, update one row).
#[derive(Debug)]
pub struct UpdateItemsScreen {
    api: ApiClient,
    pub busy: bool,
    error: Option<ScreenError>,
    pub success_message: String,
    pub items: Vec<InventoryItem>,
}

impl UpdateItemsScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            busy: false,
            error: None,
            success_message: String::new(),
            items: Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&ScreenError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }

    /// Fetch every item so rows can be edited.
    pub async fn load(&mut self) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        self.error = None;
        self.items.clear();

        self.busy = true;
        let outcome = self.api.list_items().await;
        self.busy = false;

        match outcome {
            Ok(items) => self.items = items,
            Err(cause) => self.error = Some(ScreenError::new(cause, messages::ITEMS_LOAD_FAILED)),
        }
    }

    /// Copy of a loaded row with its editable fields changed.
    ///
    /// Returns `None` when no loaded item has the given identifier.
    pub fn edited(
        &self,
        id: &str,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Option<InventoryItem> {
        let mut item = self.items.iter().find(|item| item.id == id)?.clone();
        if let Some(quantity) = quantity {
            item.quantity = quantity;
        }
        if let Some(price) = price {
            item.price = price;
        }
        Some(item)
    }

    /// Send one edited row back: the full item object is PUT in place.
    pub async fn update(&mut self, item: &InventoryItem) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        self.error = None;
        self.success_message.clear();

        self.busy = true;
        let outcome = self.api.update_item(item).await;
        self.busy = false;

        match outcome {
            Ok(()) => self.success_message = messages::ITEM_UPDATED.to_string(),
            Err(cause) => self.error = Some(ScreenError::new(cause, messages::ITEM_UPDATE_FAILED)),
        }
    }
}

/// State behind the "Delete Inventory Item" form.
#[derive(Debug)]
pub struct DeleteItemScreen {
    api: ApiClient,
    pub busy: bool,
    error: Option<ScreenError>,
    pub success_message: String,
}

impl DeleteItemScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            busy: false,
            error: None,
            success_message: String::new(),
        }
    }

    pub fn error(&self) -> Option<&ScreenError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }

    pub async fn submit(&mut self, raw_id: &str) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        self.error = None;
        self.success_message.clear();

        let id = raw_id.trim();
        if id.is_empty() {
            self.error = Some(ScreenError::validation(messages::INVENTORY_ID_REQUIRED));
            return;
        }

        self.busy = true;
        let outcome = self.api.delete_item(id).await;
        self.busy = false;

        match outcome {
            Ok(resp) => {
                // Prefer the server's message; fall back to the fixed one.
                self.success_message = if resp.message.trim().is_empty() {
                    messages::ITEM_DELETED.to_string()
                } else {
                    resp.message
                };
            }
            Err(cause @ ApiError::NotFound) => {
                self.error = Some(ScreenError::new(cause, messages::ITEM_NOT_FOUND));
            }
            Err(cause @ ApiError::InvalidInput) => {
                self.error = Some(ScreenError::new(cause, messages::INVALID_ITEM_ID));
            }
            Err(cause) => {
                self.error = Some(ScreenError::new(cause, messages::ITEM_DELETE_FAILED));
            }
        }
    }
}

/// State behind the read-only inventory listing.
#[derive(Debug)]
pub struct ListItemsScreen {
    api: ApiClient,
    pub busy: bool,
    error: Option<ScreenError>,
    pub items: Vec<InventoryItem>,
}

impl ListItemsScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            busy: false,
            error: None,
            items: Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&ScreenError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }

    pub async fn load(&mut self) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        self.error = None;
        self.items.clear();

        self.busy = true;
        let outcome = self.api.list_items().await;
        self.busy = false;

        match outcome {
            Ok(items) => self.items = items,
            Err(cause) => self.error = Some(ScreenError::new(cause, messages::ITEMS_LOAD_FAILED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:1")
    }

    fn new_item() -> NewInventoryItem {
        NewInventoryItem {
            category_id: 1,
            supplier_id: 2,
            name: "Widget".to_string(),
            description: None,
            quantity: 1,
            price: 1.0,
        }
    }

    #[tokio::test]
    async fn create_keeps_validation_message_and_skips_network() {
        let mut screen = CreateItemScreen::new(api());
        let mut item = new_item();
        item.name = "  ".to_string();

        screen.submit(&item).await;

        assert_eq!(screen.error_message(), "Name is required.");
        assert!(matches!(
            screen.error().unwrap().cause,
            ApiError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn create_failure_uses_the_fixed_message() {
        let mut screen = CreateItemScreen::new(api());
        screen.submit(&new_item()).await;

        assert_eq!(screen.error_message(), messages::ITEM_CREATE_FAILED);
        assert_eq!(screen.success_message, "");
    }

    #[tokio::test]
    async fn delete_requires_a_non_blank_id() {
        let mut screen = DeleteItemScreen::new(api());
        screen.submit(" \t").await;

        assert_eq!(screen.error_message(), messages::INVENTORY_ID_REQUIRED);
    }

    #[tokio::test]
    async fn list_failure_uses_the_load_message() {
        let mut screen = ListItemsScreen::new(api());
        screen.load().await;

        assert_eq!(screen.error_message(), messages::ITEMS_LOAD_FAILED);
        assert!(screen.items.is_empty());
    }

    #[test]
    fn edited_changes_only_requested_fields() {
        let mut screen = UpdateItemsScreen::new(api());
        screen.items = vec![InventoryItem {
            id: "a".to_string(),
            category_id: 1,
            supplier_id: 2,
            name: "Widget".to_string(),
            description: None,
            quantity: 5,
            price: 9.99,
        }];

        let edited = screen.edited("a", Some(7), None).unwrap();
        assert_eq!(edited.quantity, 7);
        assert_eq!(edited.price, 9.99);

        assert!(screen.edited("missing", None, None).is_none());
    }
}
