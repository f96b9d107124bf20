//! `stockroom item` command handlers.

use std::io::Write;

use serde::Serialize;

use stockroom_client::screens::{
    CreateItemScreen, DeleteItemScreen, ListItemsScreen, UpdateItemsScreen,
};
use stockroom_client::ApiClient;
use stockroom_core::{messages, InventoryItem, NewInventoryItem};

use crate::cli::ItemAction;
use crate::error::CliError;
use crate::output::{self, MessageReport, OutputWriter, Render};

/// Full inventory listing.
#[derive(Debug, Serialize)]
pub struct ItemListReport {
    pub items: Vec<InventoryItem>,
}

impl Render for ItemListReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{}", output::item_table(&self.items))
    }
}

/// Execute an `item` subcommand.
pub async fn execute(
    action: ItemAction,
    api: ApiClient,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    match action {
        ItemAction::List => list(api, writer).await,
        ItemAction::Create {
            category_id,
            supplier_id,
            name,
            description,
            quantity,
            price,
        } => {
            let item = NewInventoryItem {
                category_id,
                supplier_id,
                name,
                description,
                quantity,
                price,
            };
            create(api, writer, &item).await
        }
        ItemAction::Update {
            id,
            quantity,
            price,
        } => update(api, writer, &id, quantity, price).await,
        ItemAction::Delete { id } => delete(api, writer, &id).await,
    }
}

async fn list(api: ApiClient, writer: &OutputWriter) -> Result<(), CliError> {
    let mut screen = ListItemsScreen::new(api);
    screen.load().await;

    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&ItemListReport {
        items: screen.items,
    })
}

async fn create(
    api: ApiClient,
    writer: &OutputWriter,
    item: &NewInventoryItem,
) -> Result<(), CliError> {
    let mut screen = CreateItemScreen::new(api);
    screen.submit(item).await;

    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&MessageReport {
        message: screen.success_message,
    })
}

async fn update(
    api: ApiClient,
    writer: &OutputWriter,
    id: &str,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<(), CliError> {
    let mut screen = UpdateItemsScreen::new(api);

    // The update screen edits rows of the loaded table, so load first.
    screen.load().await;
    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    let edited = screen
        .edited(id, quantity, price)
        .ok_or_else(|| CliError::NotFound(messages::ITEM_NOT_FOUND.to_string()))?;

    screen.update(&edited).await;
    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&MessageReport {
        message: screen.success_message,
    })
}

async fn delete(api: ApiClient, writer: &OutputWriter, id: &str) -> Result<(), CliError> {
    let mut screen = DeleteItemScreen::new(api);
    screen.submit(id).await;

    if let Some(err) = screen.error() {
        return Err(err.clone().into());
    }

    writer.render(&MessageReport {
        message: screen.success_message,
    })
}
