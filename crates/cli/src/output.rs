//! Output formatting: text vs JSON rendering.
//!
//! All subcommand output flows through [`OutputWriter`], which handles
//! format switching; command handlers stay free of format-specific logic.

use std::io::Write;

use colored::Colorize;
use comfy_table::Table;
use serde::Serialize;

use stockroom_core::{InventoryItem, Supplier};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Writes CLI payloads in the selected format.
///
/// Subcommand handlers call `writer.render(&payload)` where `payload`
/// implements both `Serialize` (for JSON) and [`Render`] (for text).
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a payload to stdout.
    pub fn render<T: Render + Serialize>(&self, payload: &T) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Text => {
                payload.render_text(&mut handle)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, payload)?;
                writeln!(handle)?;
            }
        }
        Ok(())
    }
}

/// Trait for human-readable text rendering, implemented by every CLI
/// payload alongside `serde::Serialize`.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

/// One-line success payload shared by the mutating commands.
#[derive(Debug, Serialize)]
pub struct MessageReport {
    pub message: String,
}

impl Render for MessageReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{}", self.message.green())
    }
}

/// Table view over inventory items.
pub fn item_table(items: &[InventoryItem]) -> Table {
    let mut table = Table::new();
    table.set_header([
        "ID",
        "Category ID",
        "Supplier ID",
        "Name",
        "Description",
        "Quantity",
        "Price",
    ]);
    for item in items {
        table.add_row([
            item.id.clone(),
            item.category_id.to_string(),
            item.supplier_id.to_string(),
            item.name.clone(),
            item.description.clone().unwrap_or_else(|| "N/A".to_string()),
            item.quantity.to_string(),
            format!("{:.2}", item.price),
        ]);
    }
    table
}

/// Single-record card view.
pub fn item_card(w: &mut dyn Write, item: &InventoryItem) -> std::io::Result<()> {
    writeln!(w, "ID:          {}", item.id)?;
    writeln!(w, "Name:        {}", item.name)?;
    writeln!(
        w,
        "Description: {}",
        item.description.as_deref().unwrap_or("N/A")
    )?;
    writeln!(w, "Category ID: {}", item.category_id)?;
    writeln!(w, "Supplier ID: {}", item.supplier_id)?;
    writeln!(w, "Quantity:    {}", item.quantity)?;
    writeln!(w, "Price:       {:.2}", item.price)
}

/// Table view over suppliers.
pub fn supplier_table(suppliers: &[Supplier]) -> Table {
    let mut table = Table::new();
    table.set_header([
        "ID",
        "Supplier ID",
        "Name",
        "Contact Information",
        "Address",
    ]);
    for supplier in suppliers {
        table.add_row([
            supplier.id.clone().unwrap_or_else(|| "-".to_string()),
            supplier.supplier_id.to_string(),
            supplier.supplier_name.clone(),
            supplier.contact_information.clone(),
            supplier.address.clone(),
        ]);
    }
    table
}
