//! Navigation state: breadcrumb, view model and owned context.
//!
//! # Responsibility
//! - Track the drill-down path from root to the current view.
//! - Keep the current view model and selection in one owned object.
//!
//! # Invariants
//! - An empty breadcrumb means root state; contextual views always leave
//!   at least one segment on the stack.
//! - Navigation state is passed by reference, never held as ambient
//!   process-global state.

pub mod breadcrumb;
pub mod context;
pub mod view;
