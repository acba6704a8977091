//! Tool catalog endpoint.

use axum::Json;
use kalidocker_api_models::{TOOL_CATALOG, ToolSummary};

pub(crate) async fn list_tools() -> Json<Vec<ToolSummary>> {
    Json(TOOL_CATALOG.iter().map(ToolSummary::from).collect())
}
