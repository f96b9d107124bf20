//! Supplier create/list screens.

use stockroom_core::error::{ApiError, ScreenError};
use stockroom_core::{messages, NewSupplier, Supplier};

use crate::http::ApiClient;
use crate::screens::reentry_error;

/// State behind the "Create Supplier" form.
#[derive(Debug)]
pub struct CreateSupplierScreen {
    api: ApiClient,
    pub busy: bool,
    error: Option<ScreenError>,
    pub success_message: String,
}

impl CreateSupplierScreen {
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

    pub async fn submit(&mut self, supplier: &NewSupplier) {
        if self.busy {
            self.error = Some(reentry_error());
            return;
        }

        self.error = None;
        self.success_message.clear();

        self.busy = true;
        let outcome = self.api.create_supplier(supplier).await;
        self.busy = false;

        match outcome {
            Ok(()) => self.success_message = messages::SUPPLIER_CREATED.to_string(),
            Err(ApiError::Validation(msg)) => self.error = Some(ScreenError::validation(msg)),
            Err(cause) => {
                self.error = Some(ScreenError::new(cause, messages::SUPPLIER_CREATE_FAILED));
            }
        }
    }
}

/// State behind the supplier listing.
#[derive(Debug)]
pub struct ListSuppliersScreen {
    api: ApiClient,
    pub busy: bool,
    error: Option<ScreenError>,
    pub suppliers: Vec<Supplier>,
}

impl ListSuppliersScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            busy: false,
            error: None,
            suppliers: Vec::new(),
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
        self.suppliers.clear();

        self.busy = true;
        let outcome = self.api.list_suppliers().await;
        self.busy = false;

        match outcome {
            Ok(suppliers) => self.suppliers = suppliers,
            Err(cause) => {
                self.error = Some(ScreenError::new(cause, messages::SUPPLIERS_LOAD_FAILED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_failure_uses_the_fixed_message() {
        let mut screen = CreateSupplierScreen::new(ApiClient::new("http://127.0.0.1:1"));
        let supplier = NewSupplier {
            supplier_id: 1,
            supplier_name: "Acme".to_string(),
            contact_information: "555-0100".to_string(),
            address: "1 Main St".to_string(),
        };

        screen.submit(&supplier).await;

        assert_eq!(screen.error_message(), messages::SUPPLIER_CREATE_FAILED);
        assert_eq!(screen.success_message, "");
    }

    #[tokio::test]
    async fn blank_supplier_name_fails_locally() {
        let mut screen = CreateSupplierScreen::new(ApiClient::new("http://127.0.0.1:1"));
        let supplier = NewSupplier {
            supplier_id: 1,
            supplier_name: " ".to_string(),
            contact_information: "555-0100".to_string(),
            address: "1 Main St".to_string(),
        };

        screen.submit(&supplier).await;

        assert_eq!(screen.error_message(), "Supplier name is required.");
    }

    #[tokio::test]
    async fn list_failure_uses_the_load_message() {
        let mut screen = ListSuppliersScreen::new(ApiClient::new("http://127.0.0.1:1"));
        screen.load().await;

        assert_eq!(screen.error_message(), messages::SUPPLIERS_LOAD_FAILED);
    }
}
