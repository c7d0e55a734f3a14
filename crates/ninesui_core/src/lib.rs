//! Headless core for a drill-down terminal UI.
//! This crate owns navigation state, command dispatch and capability
//! contracts; the terminal render host is an external collaborator that
//! paints whatever view state this core produces.

pub mod command;
pub mod logging;
pub mod model;
pub mod nav;
pub mod router;
pub mod session;

pub use command::input::{parse_input, CommandInput, CommandScope};
pub use command::registry::{
    CommandSet, CommandSetError, CommandSpec, FetchContext, FetchError, FetchRequest, FetchResult,
    Fetcher,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Capability, DisplayItem, DrillOutcome, ItemRef};
pub use nav::breadcrumb::{Breadcrumb, Segment, SegmentScope};
pub use nav::context::NavContext;
pub use nav::view::ViewModel;
pub use router::{Dispatch, DispatchKind, Router, RouterError, RouterResult};
pub use session::app::{AppMetadata, Key, KeyAction, Session};
pub use session::overlay::OverlayState;
pub use session::snapshot::ViewSnapshot;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
