//! Serializable view projection for the render host.

use crate::model::item::DisplayItem;
use serde::{Deserialize, Serialize};

/// Everything the host needs to paint one frame.
///
/// Snapshots are plain values: producing one never mutates session state,
/// and hosts can serialize them across a process boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// App title from session metadata.
    pub title: String,
    /// App subtitle from session metadata.
    pub subtitle: String,
    /// Breadcrumb labels from root to current view.
    pub breadcrumb: Vec<String>,
    /// Table column names, honoring the active command's field projection.
    pub columns: Vec<String>,
    /// Table rows; one cell per column, empty string for missing fields.
    pub rows: Vec<Vec<String>>,
    /// Textual body when the view is a detail or text view.
    pub text: Option<String>,
    /// Hover overlay body when the overlay is open.
    pub hover: Option<String>,
    /// User-visible feedback from the last dispatch.
    pub notice: Option<String>,
    /// Whether wide layout is active.
    pub wide_layout: bool,
    /// Selected row index.
    pub selected: usize,
}

/// Renders a single record as `field: value` lines.
pub fn format_record(item: &dyn DisplayItem) -> String {
    let mut lines = vec![item.label()];
    for name in item.field_names() {
        let value = item.field(&name).unwrap_or_default();
        lines.push(format!("{name}: {value}"));
    }
    lines.join("\n")
}
