//! Raw input line parsing.

use serde::{Deserialize, Serialize};

/// Scope of one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandScope {
    /// Discards navigation context and runs against the full data set.
    Global,
    /// Runs scoped to the current view and appends to the breadcrumb.
    Contextual,
}

/// One parsed input submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandInput {
    /// A named command with optional arguments.
    Invoke {
        /// Typed name with any `:` prefix stripped, capitalization kept.
        name: String,
        args: Vec<String>,
        scope: CommandScope,
    },
    /// A `/`-prefixed search over the current view.
    Search { query: String },
}

/// Parses one submitted input line.
///
/// # Contract
/// - Blank input yields `None`.
/// - A `/` prefix enters search mode; the rest of the line is the query,
///   trimmed, and may be empty.
/// - Otherwise the line is a command: optional `:` prefix, then a name and
///   whitespace-separated arguments. A name starting with an uppercase
///   character is global, anything else is contextual.
pub fn parse_input(line: &str) -> Option<CommandInput> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix('/') {
        return Some(CommandInput::Search {
            query: rest.trim().to_string(),
        });
    }

    let line = line.strip_prefix(':').unwrap_or(line).trim();
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_string();
    let args = tokens.map(str::to_string).collect();
    let scope = classify_scope(&name);

    Some(CommandInput::Invoke { name, args, scope })
}

fn classify_scope(name: &str) -> CommandScope {
    match name.chars().next() {
        Some(first) if first.is_uppercase() => CommandScope::Global,
        _ => CommandScope::Contextual,
    }
}
