//! Validated command registry and fetch contracts.

use crate::model::item::ItemRef;
use crate::nav::breadcrumb::Breadcrumb;
use crate::nav::view::ViewModel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

static COMMAND_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("valid command name regex"));

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Host-side data retrieval failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Creates a fetch error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "fetch failed: {}", self.message)
    }
}

impl Error for FetchError {}

/// Navigation state visible to a contextual fetch.
#[derive(Clone, Copy)]
pub struct FetchContext<'a> {
    /// Breadcrumb at dispatch time.
    pub breadcrumb: &'a Breadcrumb,
    /// View the command should narrow from.
    pub view: &'a ViewModel,
}

/// One fetch invocation.
pub struct FetchRequest<'a> {
    /// Arguments typed after the command name.
    pub args: &'a [String],
    /// `None` for global dispatch: the fetch must return the full,
    /// unfiltered data set.
    pub context: Option<FetchContext<'a>>,
}

/// Data retrieval seam implemented by the host per command.
pub trait Fetcher: Send + Sync {
    /// Produces the items for one command invocation.
    fn fetch(&self, request: &FetchRequest<'_>) -> FetchResult<Vec<ItemRef>>;
}

/// One registered command.
pub struct CommandSpec {
    name: String,
    aliases: Vec<String>,
    visible_fields: Option<Vec<String>>,
    is_default: bool,
    fetcher: Arc<dyn Fetcher>,
}

impl CommandSpec {
    /// Creates a spec with no aliases and full field projection.
    pub fn new(name: impl Into<String>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            visible_fields: None,
            is_default: false,
            fetcher,
        }
    }

    /// Adds lookup aliases.
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts table projection to the given fields, in order.
    pub fn visible_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Marks this command as the one a host runs on startup.
    pub fn default_command(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Canonical registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field projection for table display, `None` for all item fields.
    pub fn visible_field_names(&self) -> Option<&[String]> {
        self.visible_fields.as_deref()
    }

    /// Whether this command is the startup default.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Runs this command's fetcher.
    pub fn fetch(&self, request: &FetchRequest<'_>) -> FetchResult<Vec<ItemRef>> {
        self.fetcher.fetch(request)
    }
}

/// Command registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSetError {
    /// Name or alias is not a lowercase identifier.
    InvalidName(String),
    /// Name or alias clashes with an earlier registration.
    DuplicateName(String),
    /// A second command was flagged as the startup default.
    DuplicateDefault(String),
}

impl Display for CommandSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(f, "command name is invalid: `{value}`"),
            Self::DuplicateName(value) => {
                write!(f, "command name or alias already registered: `{value}`")
            }
            Self::DuplicateDefault(value) => {
                write!(f, "default command already registered: `{value}`")
            }
        }
    }
}

impl Error for CommandSetError {}

/// Validated registry of commands, resolvable by name or alias.
#[derive(Default)]
pub struct CommandSet {
    index: BTreeMap<String, Arc<CommandSpec>>,
    default: Option<Arc<CommandSpec>>,
}

impl CommandSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a list of specs.
    pub fn with_commands(
        specs: impl IntoIterator<Item = CommandSpec>,
    ) -> Result<Self, CommandSetError> {
        let mut set = Self::new();
        for spec in specs {
            set.register(spec)?;
        }
        Ok(set)
    }

    /// Registers one command spec.
    ///
    /// # Errors
    /// - `InvalidName` when the name or an alias is not lowercase
    ///   `[a-z][a-z0-9_-]*`.
    /// - `DuplicateName` when the name or an alias is already taken.
    /// - `DuplicateDefault` when a default command is already registered.
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), CommandSetError> {
        let mut keys = vec![spec.name.clone()];
        keys.extend(spec.aliases.iter().cloned());

        for key in &keys {
            if !COMMAND_NAME_RE.is_match(key) {
                return Err(CommandSetError::InvalidName(key.clone()));
            }
            if self.index.contains_key(key) {
                return Err(CommandSetError::DuplicateName(key.clone()));
            }
        }
        if spec.is_default {
            if let Some(existing) = &self.default {
                return Err(CommandSetError::DuplicateDefault(existing.name.clone()));
            }
        }

        let spec = Arc::new(spec);
        for key in keys {
            self.index.insert(key, Arc::clone(&spec));
        }
        if spec.is_default {
            self.default = Some(Arc::clone(&spec));
        }
        Ok(())
    }

    /// Resolves a typed name to its spec.
    ///
    /// Lookup strips any `:` prefix and lowercases, so a globally-typed
    /// `Films` resolves to the same spec as `films`.
    pub fn resolve(&self, typed: &str) -> Option<&Arc<CommandSpec>> {
        let key = typed.trim().trim_start_matches(':').to_lowercase();
        self.index.get(&key)
    }

    /// Returns the startup default command, if any.
    pub fn default_command(&self) -> Option<&Arc<CommandSpec>> {
        self.default.as_ref()
    }

    /// Returns all canonical command names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .index
            .values()
            .map(|spec| spec.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl fmt::Debug for CommandSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSet")
            .field("names", &self.names())
            .field("default", &self.default.as_ref().map(|spec| spec.name.as_str()))
            .finish()
    }
}
