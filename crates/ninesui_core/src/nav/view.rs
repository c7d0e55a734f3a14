//! Current view model produced by the last dispatch.

use crate::model::item::ItemRef;
use std::fmt;
use std::slice;

/// What the host should currently display.
#[derive(Default)]
pub enum ViewModel {
    /// Root state before any dispatch.
    #[default]
    Empty,
    /// A textual body (drill-in into plain content).
    Text(String),
    /// A single record shown as a detail view.
    Record(ItemRef),
    /// A list of records shown as a table.
    Records(Vec<ItemRef>),
}

impl ViewModel {
    /// Items contained in the view; a record counts as one item.
    pub fn items(&self) -> &[ItemRef] {
        match self {
            Self::Empty | Self::Text(_) => &[],
            Self::Record(item) => slice::from_ref(item),
            Self::Records(items) => items,
        }
    }

    /// Number of contained items.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether the view holds no items and no text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Record(_) => false,
            Self::Records(items) => items.is_empty(),
        }
    }

    /// Item at `index`, when the view is record-backed.
    pub fn item_at(&self, index: usize) -> Option<&ItemRef> {
        self.items().get(index)
    }

    /// Text body, when the view is textual.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Debug for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Self::Record(item) => f.debug_tuple("Record").field(&item.label()).finish(),
            Self::Records(items) => f.debug_tuple("Records").field(&items.len()).finish(),
        }
    }
}
