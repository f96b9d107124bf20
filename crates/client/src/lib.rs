//! `stockroom-client`
//!
//! **Responsibility:** HTTP access to the inventory backend plus the
//! presentation logic the screens share.
//!
//! This crate provides:
//! - [`ApiClient`] — typed wrappers over every REST endpoint
//! - [`resolver`] — the lookup/search resolver (mode dispatch + result shaping)
//! - [`screens`] — per-screen state: busy flag, messages, result fields
//!
//! The client is a **thin shell** around the backend API: one submission,
//! one request, no caching and no retries.

pub mod http;
pub mod inventory;
pub mod resolver;
pub mod screens;
pub mod supplier;

pub use http::ApiClient;
pub use inventory::DeleteResponse;
pub use resolver::{LookupResolver, ResultView};
