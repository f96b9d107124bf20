use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Supplier read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Server-assigned identifier; absent on a creation echo.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub supplier_id: i64,
    pub supplier_name: String,
    pub contact_information: String,
    pub address: String,
}

/// Payload for creating a new supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub contact_information: String,
    pub address: String,
}

impl NewSupplier {
    /// All fields are required on the supplier form.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.supplier_name.trim().is_empty() {
            return Err(ApiError::validation("Supplier name is required."));
        }
        if self.contact_information.trim().is_empty() {
            return Err(ApiError::validation("Contact information is required."));
        }
        if self.address.trim().is_empty() {
            return Err(ApiError::validation("Address is required."));
        }
        Ok(())
    }
}
