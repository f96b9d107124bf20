//! CLI argument parsing using clap derive API.
//!
//! Purely declarative; no side effects or I/O.

use clap::{Args, Parser, Subcommand, ValueEnum};

use stockroom_core::SearchField;

/// Stockroom -- inventory management over a REST backend.
///
/// Use `stockroom <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the inventory API (defaults to $STOCKROOM_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable card / table output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up items by inventory ID or category ID.
    Lookup(LookupArgs),

    /// Search the inventory on one field.
    Search(SearchArgs),

    /// Manage inventory items.
    Item(ItemArgs),

    /// Manage suppliers.
    Supplier(SupplierArgs),

    /// Check that the API is reachable.
    Ping,
}

// ---- lookup ----

/// Dual-mode item lookup.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Treat VALUE as a category ID instead of an inventory ID.
    #[arg(long)]
    pub by_category: bool,

    /// Inventory ID, or category ID with --by-category.
    pub value: String,
}

// ---- search ----

/// Generic inventory search.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Field to search on.
    #[arg(long, value_enum, default_value = "name")]
    pub field: FieldArg,

    /// Search value.
    pub query: String,
}

/// Searchable field, as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Name,
    CategoryId,
    SupplierId,
}

impl From<FieldArg> for SearchField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Name => SearchField::Name,
            FieldArg::CategoryId => SearchField::CategoryId,
            FieldArg::SupplierId => SearchField::SupplierId,
        }
    }
}

// ---- item ----

/// Inventory item operations.
#[derive(Args, Debug)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub action: ItemAction,
}

#[derive(Subcommand, Debug)]
pub enum ItemAction {
    /// List every inventory item.
    List,

    /// Create a new inventory item.
    Create {
        #[arg(long)]
        category_id: i64,
        #[arg(long)]
        supplier_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value_t = 0)]
        quantity: i64,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },

    /// Update quantity and/or price of an existing item.
    Update {
        /// Inventory ID of the item to change.
        id: String,
        #[arg(long)]
        quantity: Option<i64>,
        #[arg(long)]
        price: Option<f64>,
    },

    /// Delete an item by inventory ID.
    Delete {
        id: String,
    },
}

// ---- supplier ----

/// Supplier operations.
#[derive(Args, Debug)]
pub struct SupplierArgs {
    #[command(subcommand)]
    pub action: SupplierAction,
}

#[derive(Subcommand, Debug)]
pub enum SupplierAction {
    /// List every supplier.
    List,

    /// Create a new supplier.
    Create {
        #[arg(long)]
        supplier_id: i64,
        #[arg(long)]
        supplier_name: String,
        #[arg(long)]
        contact_information: String,
        #[arg(long)]
        address: String,
    },
}
