//! `stockroom supplier` command handlers.

use std::io::Write;

use serde::Serialize;

use stockroom_client::screens::{CreateSupplierScreen, ListSuppliersScreen};
use stockroom_client::ApiClient;
use stockroom_core::{NewSupplier, Supplier};

use crate::cli::SupplierAction;
use crate::error::CliError;
use crate::output::{self, MessageReport, OutputWriter, Render};

/// Full supplier listing.
#[derive(Debug, Serialize)]
pub struct SupplierListReport {
    pub suppliers: Vec<Supplier>,
}

impl Render for SupplierListReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{}", output::supplier_table(&self.suppliers))
    }
}

/// Execute a `supplier` subcommand.
pub async fn execute(
    action: SupplierAction,
    api: ApiClient,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    match action {
        SupplierAction::List => list(api, writer).await,
        SupplierAction::Create {
            supplier_id,
            supplier_name,
            contact_information,
            address,
        } => {
            let supplier = NewSupplier {
                supplier_id,
                supplier_name,
                contact_information,
                address,
            };
            create(api, writer, &supplier).await
        }
    }
}

async fn list(api: ApiClient, writer: &OutputWriter) -> Result<(), CliError> {
    let mut screen = ListSuppliersScreen::new(api);
    screen.load().await;

    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&SupplierListReport {
        suppliers: screen.suppliers,
    })
}

async fn create(
    api: ApiClient,
    writer: &OutputWriter,
    supplier: &NewSupplier,
) -> Result<(), CliError> {
    let mut screen = CreateSupplierScreen::new(api);
    screen.submit(supplier).await;

    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&MessageReport {
        message: screen.success_message,
    })
}
