//! Command router: classification-aware dispatch, search, drill-in, jump.
//!
//! # Responsibility
//! - Execute parsed input against a command registry and one owned
//!   navigation context.
//! - Keep the breadcrumb in step with every scope change.
//!
//! # Invariants
//! - Global dispatch resets the breadcrumb before fetching and leaves it
//!   empty.
//! - Every contextual dispatch (commands and searches alike) pushes exactly
//!   one segment.
//! - Unknown commands and missing capabilities never mutate navigation
//!   state.

use crate::command::input::{CommandInput, CommandScope};
use crate::command::registry::{CommandSet, FetchContext, FetchError, FetchRequest};
use crate::model::item::{Capability, DrillOutcome, ItemRef};
use crate::nav::breadcrumb::SegmentScope;
use crate::nav::context::NavContext;
use crate::nav::view::ViewModel;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for dispatch operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// Dispatch-level failure.
#[derive(Debug)]
pub enum RouterError {
    /// A command's fetcher failed.
    Fetch { command: String, source: FetchError },
}

impl Display for RouterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch { command, source } => {
                write!(f, "command `{command}` failed: {source}")
            }
        }
    }
}

impl Error for RouterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch { source, .. } => Some(source),
        }
    }
}

/// What one dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchKind {
    /// A registered command ran.
    Invoked { name: String, scope: CommandScope },
    /// A search filtered the current view.
    Searched { query: String, matched: usize },
    /// The typed name matched no registered command.
    Unknown { name: String },
}

/// Report returned by [`Router::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// What happened.
    pub kind: DispatchKind,
    /// User-visible feedback, set when the host should show a toast.
    pub notice: Option<String>,
}

/// Dispatches parsed input against an owned navigation context.
pub struct Router {
    commands: CommandSet,
}

impl Router {
    /// Creates a router over a validated command registry.
    pub fn new(commands: CommandSet) -> Self {
        Self { commands }
    }

    /// The underlying command registry.
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Executes one parsed input submission.
    ///
    /// # Contract
    /// - Global invocation: reset the breadcrumb, fetch without context,
    ///   replace the view. The breadcrumb stays empty.
    /// - Contextual invocation: fetch scoped to the current view and
    ///   breadcrumb, push one command segment, replace the view.
    /// - Search: filter the current view's items by literal substring,
    ///   push one search segment, replace the view. An empty query keeps
    ///   every item.
    /// - Unknown command: no state change; the report carries a notice.
    ///
    /// # Errors
    /// - `RouterError::Fetch` when the command's fetcher fails; navigation
    ///   state is left untouched.
    pub fn dispatch(&self, input: &CommandInput, nav: &mut NavContext) -> RouterResult<Dispatch> {
        match input {
            CommandInput::Invoke { name, args, scope } => self.invoke(name, args, *scope, nav),
            CommandInput::Search { query } => Ok(self.search(query, nav)),
        }
    }

    fn invoke(
        &self,
        typed_name: &str,
        args: &[String],
        scope: CommandScope,
        nav: &mut NavContext,
    ) -> RouterResult<Dispatch> {
        let Some(spec) = self.commands.resolve(typed_name) else {
            warn!("event=dispatch module=router status=unknown command={typed_name}");
            return Ok(Dispatch {
                kind: DispatchKind::Unknown {
                    name: typed_name.to_string(),
                },
                notice: Some(format!("command not found: `{typed_name}`")),
            });
        };
        let name = spec.name().to_string();

        let items = match scope {
            CommandScope::Global => {
                let request = FetchRequest {
                    args,
                    context: None,
                };
                spec.fetch(&request).map_err(|source| RouterError::Fetch {
                    command: name.clone(),
                    source,
                })?
            }
            CommandScope::Contextual => {
                let request = FetchRequest {
                    args,
                    context: Some(FetchContext {
                        breadcrumb: nav.breadcrumb(),
                        view: nav.view(),
                    }),
                };
                spec.fetch(&request).map_err(|source| RouterError::Fetch {
                    command: name.clone(),
                    source,
                })?
            }
        };

        info!(
            "event=dispatch module=router status=ok command={} scope={:?} items={}",
            name,
            scope,
            items.len()
        );

        match scope {
            CommandScope::Global => nav.replace_root(ViewModel::Records(items)),
            CommandScope::Contextual => {
                let scope_tag = SegmentScope::Command { name: name.clone() };
                nav.enter(name.clone(), scope_tag, ViewModel::Records(items));
            }
        }

        Ok(Dispatch {
            kind: DispatchKind::Invoked { name, scope },
            notice: None,
        })
    }

    /// Degenerate contextual command: literal substring filter over the
    /// current view's items.
    fn search(&self, query: &str, nav: &mut NavContext) -> Dispatch {
        let matches: Vec<ItemRef> = nav
            .view()
            .items()
            .iter()
            .filter(|item| item.search_text().contains(query))
            .cloned()
            .collect();
        let matched = matches.len();

        debug!("event=search module=router status=ok query={query} matched={matched}");

        nav.enter(
            format!("/{query}"),
            SegmentScope::Search {
                query: query.to_string(),
            },
            ViewModel::Records(matches),
        );

        Dispatch {
            kind: DispatchKind::Searched {
                query: query.to_string(),
                matched,
            },
            notice: None,
        }
    }

    /// Drills into the selected item.
    ///
    /// Returns whether the view changed. Items without the drill-in
    /// capability degrade silently.
    pub fn drill(&self, nav: &mut NavContext) -> bool {
        self.descend(nav, Capability::DrillIn)
    }

    /// Jumps from the selected item to its owner collection.
    ///
    /// Same degrade rules as [`Router::drill`].
    pub fn jump(&self, nav: &mut NavContext) -> bool {
        self.descend(nav, Capability::Jump)
    }

    fn descend(&self, nav: &mut NavContext, capability: Capability) -> bool {
        let Some(item) = nav.selected_item().cloned() else {
            debug!(
                "event=descend module=router status=noop capability={} reason=no_selection",
                capability.as_str()
            );
            return false;
        };
        if !item.supports(capability) {
            debug!(
                "event=descend module=router status=noop capability={} item={}",
                capability.as_str(),
                item.label()
            );
            return false;
        }

        let outcome = match capability {
            Capability::DrillIn => item.drill(),
            Capability::Jump => item.jump(),
            Capability::Hover => None,
        };
        let Some(outcome) = outcome else {
            debug!(
                "event=descend module=router status=noop capability={} item={} reason=empty",
                capability.as_str(),
                item.label()
            );
            return false;
        };

        let origin = item.label();
        let scope_tag = match capability {
            Capability::Jump => SegmentScope::Jump {
                origin: origin.clone(),
            },
            _ => SegmentScope::Drill {
                origin: origin.clone(),
            },
        };

        match outcome {
            DrillOutcome::Text(text) => nav.enter_text(text),
            DrillOutcome::Record(record) => {
                nav.enter(origin.clone(), scope_tag, ViewModel::Record(record));
            }
            DrillOutcome::Records(records) => {
                nav.enter(origin.clone(), scope_tag, ViewModel::Records(records));
            }
        }

        info!(
            "event=descend module=router status=ok capability={} item={}",
            capability.as_str(),
            origin
        );
        true
    }
}
