//! Display item trait and capability declarations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared handle for displayable records.
///
/// Items flow through view models, drill outcomes and search results, so
/// they are reference counted rather than cloned.
pub type ItemRef = Arc<dyn DisplayItem>;

/// Optional behavior an item can declare.
///
/// An item declaring none of these is plain: hover, drill-in and jump all
/// degrade to silent no-ops on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// On-demand detail overlay for the selected item.
    Hover,
    /// Descend from the item into related data.
    DrillIn,
    /// Jump from the item to its owner collection.
    Jump,
}

impl Capability {
    /// Stable string id used in logs and snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::DrillIn => "drill_in",
            Self::Jump => "jump",
        }
    }
}

/// Result of a drill-in or jump request.
pub enum DrillOutcome {
    /// Plain text body; rendered as-is, does not open a new scope.
    Text(String),
    /// A single related record; opens a new scope.
    Record(ItemRef),
    /// A list of related records; opens a new scope.
    Records(Vec<ItemRef>),
}

impl fmt::Debug for DrillOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Record(item) => f.debug_tuple("Record").field(&item.label()).finish(),
            Self::Records(items) => f.debug_tuple("Records").field(&items.len()).finish(),
        }
    }
}

/// Interface every displayable record implements.
///
/// # Contract
/// - `capabilities()` is the source of truth for optional behavior; the
///   router never calls `hover`/`drill`/`jump` on an item that does not
///   declare the matching capability.
/// - A declared capability whose method still returns `None` is treated as
///   a silent no-op, not an error.
pub trait DisplayItem: Send + Sync {
    /// Short text used for breadcrumb segments and selection display.
    fn label(&self) -> String;

    /// Ordered field names available for table projection and sorting.
    fn field_names(&self) -> Vec<String>;

    /// Rendered value of one field, `None` when the item lacks it.
    fn field(&self, name: &str) -> Option<String>;

    /// Capabilities this item declares.
    fn capabilities(&self) -> &[Capability] {
        &[]
    }

    /// Textual representation used by substring search.
    ///
    /// Defaults to the label followed by every field value.
    fn search_text(&self) -> String {
        let mut parts = vec![self.label()];
        for name in self.field_names() {
            if let Some(value) = self.field(&name) {
                parts.push(value);
            }
        }
        parts.join(" ")
    }

    /// On-demand detail body for the hover overlay.
    fn hover(&self) -> Option<String> {
        None
    }

    /// Drill-in outcome for this item.
    fn drill(&self) -> Option<DrillOutcome> {
        None
    }

    /// Jump-to-owner outcome for this item.
    fn jump(&self) -> Option<DrillOutcome> {
        None
    }
}

impl dyn DisplayItem {
    /// Returns whether the item declares `capability`.
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}
