//! Feature slices rendered by the root component.
pub(crate) mod dashboard;
