//! `stockroom lookup` command handler.

use std::io::Write;

use serde::Serialize;

use stockroom_client::screens::LookupScreen;
use stockroom_client::ApiClient;
use stockroom_core::{InventoryItem, SearchMode};

use crate::cli::LookupArgs;
use crate::error::CliError;
use crate::output::{self, OutputWriter, Render};

/// Lookup outcome: a card when exactly one record resolved, otherwise a
/// table.
#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub item: Option<InventoryItem>,
    pub items: Vec<InventoryItem>,
}

impl Render for LookupReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        if let Some(item) = &self.item {
            output::item_card(w, item)
        } else {
            writeln!(w, "{} items found", self.items.len())?;
            writeln!(w, "{}", output::item_table(&self.items))
        }
    }
}

/// Execute the `lookup` command.
pub async fn execute(
    args: LookupArgs,
    api: ApiClient,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let mode = if args.by_category {
        SearchMode::ByCategory
    } else {
        SearchMode::ById
    };

    let mut screen = LookupScreen::new(api);
    screen.submit(mode, &args.value).await;

    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&LookupReport {
        item: screen.item,
        items: screen.items,
    })
}
