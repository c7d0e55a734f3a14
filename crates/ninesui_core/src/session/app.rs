//! Session object driven by the render host.

use crate::command::input::{parse_input, CommandInput, CommandScope};
use crate::command::registry::CommandSet;
use crate::nav::context::NavContext;
use crate::nav::view::ViewModel;
use crate::router::{Dispatch, DispatchKind, Router, RouterResult};
use crate::session::hotkeys::assign_sort_hotkeys;
use crate::session::overlay::OverlayState;
use crate::session::snapshot::{format_record, ViewSnapshot};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static app description shown in the host's header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub title: String,
    pub subtitle: String,
}

impl AppMetadata {
    /// Creates metadata from title and subtitle.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// One key press forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

/// What the session did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The key changed session state.
    Handled,
    /// The key was not bound or degraded silently.
    Ignored,
    /// Escape at root state: the host should exit.
    Quit,
}

/// Owned state for one UI session.
///
/// The host submits input lines and key presses, then paints from
/// [`Session::snapshot`]. One submission is fully committed before the next
/// is processed.
pub struct Session {
    metadata: AppMetadata,
    router: Router,
    nav: NavContext,
    overlay: OverlayState,
    sort_hotkeys: BTreeMap<char, String>,
    visible_fields: Option<Vec<String>>,
    /// Projections of outer navigation levels, restored on back
    /// navigation; kept in step with the navigation history.
    saved_fields: Vec<Option<Vec<String>>>,
    notice: Option<String>,
}

impl Session {
    /// Creates a session over a validated command registry.
    pub fn new(metadata: AppMetadata, commands: CommandSet) -> Self {
        Self {
            metadata,
            router: Router::new(commands),
            nav: NavContext::new(),
            overlay: OverlayState::new(),
            sort_hotkeys: BTreeMap::new(),
            visible_fields: None,
            saved_fields: Vec::new(),
            notice: None,
        }
    }

    /// Runs the registry's default command globally, when one exists.
    ///
    /// Hosts call this once on mount so the first screen is not empty.
    pub fn start(&mut self) -> RouterResult<Option<Dispatch>> {
        let Some(name) = self
            .router
            .commands()
            .default_command()
            .map(|spec| spec.name().to_string())
        else {
            return Ok(None);
        };
        let input = CommandInput::Invoke {
            name,
            args: Vec::new(),
            scope: CommandScope::Global,
        };
        self.dispatch(&input).map(Some)
    }

    /// Parses and dispatches one submitted line.
    ///
    /// Blank lines are ignored and return `None`.
    pub fn submit(&mut self, line: &str) -> RouterResult<Option<Dispatch>> {
        let Some(input) = parse_input(line) else {
            return Ok(None);
        };
        self.dispatch(&input).map(Some)
    }

    /// Dispatches already-parsed input.
    pub fn dispatch(&mut self, input: &CommandInput) -> RouterResult<Dispatch> {
        let dispatch = self.router.dispatch(input, &mut self.nav)?;
        self.notice = dispatch.notice.clone();

        match &dispatch.kind {
            DispatchKind::Invoked { name, scope } => {
                let fields = self
                    .router
                    .commands()
                    .resolve(name)
                    .and_then(|spec| spec.visible_field_names().map(|fields| fields.to_vec()));
                match scope {
                    CommandScope::Global => self.saved_fields.clear(),
                    CommandScope::Contextual => {
                        self.saved_fields.push(self.visible_fields.take());
                    }
                }
                self.visible_fields = fields;
                self.after_view_change();
            }
            DispatchKind::Searched { .. } => {
                // Search narrows the same records, so the projection carries
                // over unchanged into the new level.
                self.saved_fields.push(self.visible_fields.clone());
                self.after_view_change();
            }
            DispatchKind::Unknown { .. } => {}
        }
        Ok(dispatch)
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: Key) -> KeyAction {
        match key {
            Key::Escape => {
                if self.nav.back() {
                    self.visible_fields = self.saved_fields.pop().flatten();
                    self.after_view_change();
                    KeyAction::Handled
                } else {
                    debug!("event=key module=session status=quit key=escape");
                    KeyAction::Quit
                }
            }
            Key::Enter => {
                if self.router.drill(&mut self.nav) {
                    self.saved_fields.push(self.visible_fields.take());
                    self.after_view_change();
                    KeyAction::Handled
                } else {
                    KeyAction::Ignored
                }
            }
            Key::Char('h') => {
                if self.overlay.toggle_hover(self.nav.selected_item()) {
                    KeyAction::Handled
                } else {
                    KeyAction::Ignored
                }
            }
            Key::Char('a') => {
                self.overlay.toggle_wide_layout();
                KeyAction::Handled
            }
            Key::Char('J') => {
                if self.router.jump(&mut self.nav) {
                    self.saved_fields.push(self.visible_fields.take());
                    self.after_view_change();
                    KeyAction::Handled
                } else {
                    KeyAction::Ignored
                }
            }
            Key::Char(ch) => {
                let Some(field) = self.sort_hotkeys.get(&ch).cloned() else {
                    return KeyAction::Ignored;
                };
                self.nav.sort_by(&field);
                // Sorting resets the selection, so a hover overlay for the
                // previously selected row must not stay open.
                self.after_view_change();
                KeyAction::Handled
            }
        }
    }

    /// Moves the selection, clamped to the current view.
    pub fn select(&mut self, index: usize) {
        self.nav.select(index);
    }

    /// Current navigation context.
    pub fn nav(&self) -> &NavContext {
        &self.nav
    }

    /// App metadata.
    pub fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    /// Feedback from the last dispatch, when any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Current sort hotkey assignment.
    pub fn sort_hotkeys(&self) -> &BTreeMap<char, String> {
        &self.sort_hotkeys
    }

    /// Projects the current state for the host to paint.
    pub fn snapshot(&self) -> ViewSnapshot {
        let columns = self.current_columns();
        let mut snapshot = ViewSnapshot {
            title: self.metadata.title.clone(),
            subtitle: self.metadata.subtitle.clone(),
            breadcrumb: self
                .nav
                .breadcrumb()
                .current()
                .iter()
                .map(|segment| segment.label.clone())
                .collect(),
            columns: columns.clone(),
            rows: Vec::new(),
            text: None,
            hover: self.overlay.hover().map(str::to_string),
            notice: self.notice.clone(),
            wide_layout: self.overlay.wide_layout(),
            selected: self.nav.selected_index(),
        };

        match self.nav.view() {
            ViewModel::Empty => {}
            ViewModel::Text(body) => snapshot.text = Some(body.clone()),
            ViewModel::Record(item) => snapshot.text = Some(format_record(item.as_ref())),
            ViewModel::Records(items) => {
                snapshot.rows = items
                    .iter()
                    .map(|item| {
                        columns
                            .iter()
                            .map(|column| item.field(column).unwrap_or_default())
                            .collect()
                    })
                    .collect();
            }
        }

        snapshot
    }

    /// Columns for the current view: the active command's projection, or
    /// every field of the first item.
    fn current_columns(&self) -> Vec<String> {
        if let Some(fields) = &self.visible_fields {
            return fields.clone();
        }
        self.nav
            .view()
            .items()
            .first()
            .map(|item| item.field_names())
            .unwrap_or_default()
    }

    fn after_view_change(&mut self) {
        self.overlay.close_hover();
        self.sort_hotkeys = assign_sort_hotkeys(&self.current_columns());
    }
}
