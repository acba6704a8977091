//! Browser-side service adapters.
pub(crate) mod api;
