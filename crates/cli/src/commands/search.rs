//! `stockroom search` command handler.

use std::io::Write;

use serde::Serialize;

use stockroom_client::screens::SearchScreen;
use stockroom_client::ApiClient;
use stockroom_core::InventoryItem;

use crate::cli::SearchArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Generic search outcome: always a flat list.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub results: Vec<InventoryItem>,
}

impl Render for SearchReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        if self.results.is_empty() {
            return writeln!(w, "No results.");
        }
        for item in &self.results {
            writeln!(
                w,
                "{} - Qty: {} - Category ID: {} - Supplier ID: {}",
                item.name, item.quantity, item.category_id, item.supplier_id
            )?;
        }
        Ok(())
    }
}

/// Execute the `search` command.
pub async fn execute(
    args: SearchArgs,
    api: ApiClient,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let mut screen = SearchScreen::new(api);
    screen.submit(args.field.into(), &args.query).await;

    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&SearchReport {
        results: screen.results,
    })
}
