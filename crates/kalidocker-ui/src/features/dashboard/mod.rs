//! Dashboard feature slice.
//!
//! # Design
//! - Views receive derived values as props and never touch the store.

mod header;
mod stats_cards;
mod tool_grid;
mod view;

pub(crate) use view::DashboardPage;
