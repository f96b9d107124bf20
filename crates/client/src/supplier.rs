//! Typed wrappers for the `/api/supplier` endpoints.

use stockroom_core::error::ApiResult;
use stockroom_core::{NewSupplier, Supplier};

use crate::http::ApiClient;

impl ApiClient {
    /// Create a supplier: `POST /api/supplier`.
    ///
    /// Validated locally first, same as item creation.
    pub async fn create_supplier(&self, supplier: &NewSupplier) -> ApiResult<()> {
        supplier.validate()?;
        tracing::debug!(name = %supplier.supplier_name, "creating supplier");
        let resp = self
            .http()
            .post(self.url("/api/supplier"))
            .json(supplier)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::check_status(resp)?;
        Ok(())
    }

    /// List every supplier: `GET /api/supplier`.
    pub async fn list_suppliers(&self) -> ApiResult<Vec<Supplier>> {
        self.get_json("/api/supplier", &[]).await
    }
}
