//! Breadcrumb stack shown to the user and used to scope commands.

use serde::{Deserialize, Serialize};

/// What created one breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SegmentScope {
    /// A contextual command invocation.
    Command { name: String },
    /// A search over the previous view.
    Search { query: String },
    /// A drill-in from the named item.
    Drill { origin: String },
    /// A jump-to-owner from the named item.
    Jump { origin: String },
}

/// One step of the drill-down path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Display label for the host.
    pub label: String,
    /// Scope context the segment was created under.
    pub scope: SegmentScope,
}

/// Ordered drill-down path from root to the current view.
///
/// # Contract
/// - `push` and `reset` never fail.
/// - `current` is side-effect free.
/// - Empty sequence means root state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    segments: Vec<Segment>,
}

impl Breadcrumb {
    /// Creates an empty breadcrumb (root state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one segment.
    pub fn push(&mut self, label: impl Into<String>, scope: SegmentScope) {
        self.segments.push(Segment {
            label: label.into(),
            scope,
        });
    }

    /// Clears all segments, returning to root state.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Removes and returns the most recent segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Ordered segments for display.
    pub fn current(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments on the stack.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the breadcrumb is in root state.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Display trail in `a > b > c` form.
    pub fn trail(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.label.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}
