//! Typed wrappers for the `/api/inventory` endpoints.

use serde::Deserialize;

use stockroom_core::error::ApiResult;
use stockroom_core::{InventoryItem, NewInventoryItem, SearchField};

use crate::http::ApiClient;

/// Body of a successful delete. Only the message is surfaced; the rest of
/// the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: String,
}

impl ApiClient {
    /// Fetch one item by identifier: `GET /api/inventory/{id}`.
    pub async fn fetch_item(&self, id: &str) -> ApiResult<InventoryItem> {
        tracing::debug!(id, "fetching inventory item");
        self.get_json(&format!("/api/inventory/{id}"), &[]).await
    }

    /// Search on one field: `GET /api/inventory/search?{field}={value}`.
    pub async fn search_items(
        &self,
        field: SearchField,
        value: &str,
    ) -> ApiResult<Vec<InventoryItem>> {
        tracing::debug!(field = field.query_key(), value, "searching inventory");
        self.get_json("/api/inventory/search", &[(field.query_key(), value)])
            .await
    }

    /// List every item: `GET /api/inventory`.
    pub async fn list_items(&self) -> ApiResult<Vec<InventoryItem>> {
        self.get_json("/api/inventory", &[]).await
    }

    /// Create an item: `POST /api/inventory`.
    ///
    /// The payload is validated locally first; a rejected payload never
    /// reaches the network.
    pub async fn create_item(&self, item: &NewInventoryItem) -> ApiResult<()> {
        item.validate()?;
        tracing::debug!(name = %item.name, "creating inventory item");
        let resp = self
            .http()
            .post(self.url("/api/inventory"))
            .json(item)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::check_status(resp)?;
        Ok(())
    }

    /// Replace an item in full: `PUT /api/inventory/{id}`.
    pub async fn update_item(&self, item: &InventoryItem) -> ApiResult<()> {
        tracing::debug!(id = %item.id, "updating inventory item");
        let resp = self
            .http()
            .put(self.url(&format!("/api/inventory/{}", item.id)))
            .json(item)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::check_status(resp)?;
        Ok(())
    }

    /// Delete by identifier: `DELETE /api/inventory/{id}`.
    pub async fn delete_item(&self, id: &str) -> ApiResult<DeleteResponse> {
        tracing::debug!(id, "deleting inventory item");
        let resp = self
            .http()
            .delete(self.url(&format!("/api/inventory/{id}")))
            .send()
            .await
            .map_err(Self::transport_error)?;
        let resp = Self::check_status(resp)?;
        Self::decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_response_tolerates_missing_and_extra_fields() {
        let resp: DeleteResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.message, "");

        let resp: DeleteResponse =
            serde_json::from_str(r#"{"message":"Inventory item deleted successfully.","id":"x"}"#)
                .unwrap();
        assert_eq!(resp.message, "Inventory item deleted successfully.");
    }
}
