//! Owned navigation context passed by reference through dispatch.

use crate::model::item::ItemRef;
use crate::nav::breadcrumb::{Breadcrumb, Segment, SegmentScope};
use crate::nav::view::ViewModel;

/// Last sort applied to a records view.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortState {
    field: String,
    descending: bool,
}

/// Saved state for one navigation level, restored on back navigation.
struct SavedFrame {
    view: ViewModel,
    selected: usize,
    /// Whether entering this level pushed a breadcrumb segment.
    /// Textual drill-ins replace the view without one.
    pushed_segment: bool,
}

/// Explicitly owned navigation state: breadcrumb, view, selection and sort.
///
/// # Invariants
/// - Breadcrumb length equals the number of saved frames that pushed a
///   segment; back navigation keeps the two in step.
/// - Selection always stays inside the current view bounds.
#[derive(Default)]
pub struct NavContext {
    breadcrumb: Breadcrumb,
    view: ViewModel,
    selected: usize,
    history: Vec<SavedFrame>,
    last_sort: Option<SortState>,
}

impl NavContext {
    /// Creates a context in root state with an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current breadcrumb.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    /// Current view model.
    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Currently selected row index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Currently selected item, when the view has one at the selection.
    pub fn selected_item(&self) -> Option<&ItemRef> {
        self.view.item_at(self.selected)
    }

    /// Moves the selection, clamped to the current view bounds.
    pub fn select(&mut self, index: usize) {
        let len = self.view.len();
        self.selected = if len == 0 { 0 } else { index.min(len - 1) };
    }

    /// Replaces everything with a root-scope view.
    ///
    /// Used by global dispatch: the breadcrumb is cleared first and stays
    /// empty afterwards.
    pub fn replace_root(&mut self, view: ViewModel) {
        self.breadcrumb.reset();
        self.history.clear();
        self.view = view;
        self.selected = 0;
    }

    /// Descends one level: saves the current view, pushes a segment and
    /// installs the new view.
    pub fn enter(&mut self, label: impl Into<String>, scope: SegmentScope, view: ViewModel) {
        let outgoing = std::mem::take(&mut self.view);
        self.history.push(SavedFrame {
            view: outgoing,
            selected: self.selected,
            pushed_segment: true,
        });
        self.breadcrumb.push(label, scope);
        self.view = view;
        self.selected = 0;
    }

    /// Shows a textual body without opening a new breadcrumb scope.
    ///
    /// Back navigation still restores the previous view.
    pub fn enter_text(&mut self, text: impl Into<String>) {
        let outgoing = std::mem::take(&mut self.view);
        self.history.push(SavedFrame {
            view: outgoing,
            selected: self.selected,
            pushed_segment: false,
        });
        self.view = ViewModel::Text(text.into());
        self.selected = 0;
    }

    /// Steps back one level, restoring the saved view and selection.
    ///
    /// Returns `false` at root state; the host decides whether that means
    /// quit.
    pub fn back(&mut self) -> bool {
        let Some(frame) = self.history.pop() else {
            return false;
        };
        if frame.pushed_segment {
            self.breadcrumb.pop();
        }
        self.view = frame.view;
        self.selected = frame.selected;
        true
    }

    /// Most recent segment, when not at root.
    pub fn current_segment(&self) -> Option<&Segment> {
        self.breadcrumb.current().last()
    }

    /// Sorts a records view by the rendered value of `field`.
    ///
    /// Sorting the same field twice in a row toggles descending order, as
    /// the host's repeated-hotkey convention expects. Non-record views are
    /// left untouched.
    pub fn sort_by(&mut self, field: &str) {
        let ViewModel::Records(items) = &mut self.view else {
            return;
        };

        let descending = match &self.last_sort {
            Some(last) if last.field == field => !last.descending,
            _ => false,
        };
        self.last_sort = Some(SortState {
            field: field.to_string(),
            descending,
        });

        items.sort_by(|a, b| {
            let left = a.field(field).unwrap_or_default();
            let right = b.field(field).unwrap_or_default();
            if descending {
                right.cmp(&left)
            } else {
                left.cmp(&right)
            }
        });
        self.selected = 0;
    }
}
