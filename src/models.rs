use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::paths::RouteEntry;

// --- Response Payloads (Output Schemas) ---

/// PageView
///
/// Identifies the page a request resolved to. Rendering is left to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct PageView {
    pub page: String,
    pub path: String,
}

impl PageView {
    pub fn new(page: &str, path: impl Into<String>) -> Self {
        Self {
            page: page.to_string(),
            path: path.into(),
        }
    }
}

/// RouteView
///
/// Owned, serializable copy of a route table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteView {
    pub name: String,
    pub template: String,
    pub parameterized: bool,
}

impl From<&RouteEntry> for RouteView {
    fn from(entry: &RouteEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            template: entry.template.to_string(),
            parameterized: entry.is_parameterized(),
        }
    }
}

/// RouteTable
///
/// Both route tables as served by `GET /api/routes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteTable {
    pub pages: Vec<RouteView>,
    pub endpoints: Vec<RouteView>,
}

impl RouteTable {
    pub fn from_tables(pages: &[RouteEntry], endpoints: &[RouteEntry]) -> Self {
        Self {
            pages: pages.iter().map(RouteView::from).collect(),
            endpoints: endpoints.iter().map(RouteView::from).collect(),
        }
    }
}
