//! Core, DOM-free primitives and helpers for the dashboard.
pub mod health;
pub mod services;
pub mod stats;
pub mod store;

pub use kalidocker_api_models::{TOOL_CATALOG, ToolDescriptor};
