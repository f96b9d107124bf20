//! `stockroom-core` — domain foundation for the inventory client.
//!
//! This crate contains **pure domain** types (no I/O): the wire models for
//! inventory items and suppliers, per-screen validation, the search-mode
//! taxonomy, the error taxonomy, and the user-facing message catalog.

pub mod error;
pub mod item;
pub mod messages;
pub mod search;
pub mod supplier;

pub use error::{ApiError, ApiResult, ScreenError};
pub use item::{InventoryItem, NewInventoryItem};
pub use search::{SearchField, SearchMode, SearchRequest};
pub use supplier::{NewSupplier, Supplier};
