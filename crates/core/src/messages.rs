//! User-facing message catalog.
//!
//! Every screen reports outcomes through these fixed strings. Keeping them
//! in one place keeps the wording identical between screens, the CLI, and
//! the tests that assert on it.

pub const VALUE_REQUIRED: &str = "A value is required.";
pub const INVENTORY_ID_REQUIRED: &str = "Inventory ID is required.";
pub const SEARCH_TERM_REQUIRED: &str = "Please enter a search term.";
pub const REQUEST_IN_FLIGHT: &str = "A request is already in progress.";

pub const SEARCH_FAILED: &str = "Search failed.";

pub const ITEM_NOT_FOUND: &str = "Inventory item not found.";
pub const INVALID_ITEM_ID: &str = "Invalid inventory ID.";
pub const ITEM_LOAD_FAILED: &str = "Failed to load inventory item.";

pub const INVALID_CATEGORY_ID: &str = "Invalid Category ID.";
pub const NO_ITEMS_FOR_CATEGORY: &str = "No inventory items found for that Category ID.";
pub const CATEGORY_LOAD_FAILED: &str = "Failed to load inventory items for that Category ID.";

pub const ITEM_CREATED: &str = "Inventory item created successfully.";
pub const ITEM_CREATE_FAILED: &str = "Failed to create inventory item. Please try again.";
pub const ITEM_UPDATED: &str = "Item updated successfully!";
pub const ITEM_UPDATE_FAILED: &str = "Failed to update item.";
pub const ITEM_DELETED: &str = "Inventory item deleted successfully.";
pub const ITEM_DELETE_FAILED: &str = "Failed to delete inventory item.";
pub const ITEMS_LOAD_FAILED: &str = "Failed to load inventory items.";

pub const SUPPLIER_CREATED: &str = "Supplier created successfully.";
pub const SUPPLIER_CREATE_FAILED: &str = "Failed to create supplier. Please try again.";
pub const SUPPLIERS_LOAD_FAILED: &str = "Failed to load suppliers.";

pub const SERVER_MESSAGE_FAILED: &str = "Error loading server message";
