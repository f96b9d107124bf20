use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Inventory item read model, as returned by the backend.
///
/// The backend assigns the identifier; everything else is user-entered.
/// No invariants are enforced client-side beyond the creation checks in
/// [`NewInventoryItem::validate`] — the server is the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Opaque server-assigned identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    pub category_id: i64,
    pub supplier_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
}

/// Payload for creating a new inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub category_id: i64,
    pub supplier_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
}

impl NewInventoryItem {
    /// Pre-submission validation, mirroring the required/min checks the
    /// create form enforces. A rejected payload never reaches the network.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Name is required."));
        }
        if self.quantity < 0 {
            return Err(ApiError::validation("Quantity must be 0 or greater."));
        }
        if self.price < 0.0 {
            return Err(ApiError::validation("Price must be 0 or greater."));
        }
        Ok(())
    }
}
