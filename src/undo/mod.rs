pub mod command_log;
pub mod dispatch;
pub mod snapshot_stack;

use crate::todo::models::{Collection, Item, ItemId};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use command_log::CommandLogEngine;
pub use dispatch::Dispatcher;
pub use snapshot_stack::SnapshotStackEngine;

/// A request coming from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(Item),
    Toggle(ItemId),
    Delete(ItemId),
    Undo,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Add(item) => write!(f, "add {} {:?}", item.id, item.text),
            Intent::Toggle(id) => write!(f, "toggle {}", id),
            Intent::Delete(id) => write!(f, "delete {}", id),
            Intent::Undo => write!(f, "undo"),
        }
    }
}

/// Which history layout an engine keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Log of reversible commands; delete-undo re-appends at the end
    #[default]
    CommandLog,
    /// Full copy of the list before every attempted change
    SnapshotStack,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::CommandLog => write!(f, "command-log"),
            Strategy::SnapshotStack => write!(f, "snapshot-stack"),
        }
    }
}

/// State container with single-step undo.
///
/// Every method returns a complete `Collection`; unknown ids are never an
/// error. Implementations differ in whether such a no-op still adds a
/// history entry.
pub trait UndoEngine {
    fn apply(&mut self, intent: Intent) -> Collection;
    fn undo(&mut self) -> Collection;
    fn current(&self) -> Collection;
    fn can_undo(&self) -> bool;
    fn history_len(&self) -> usize;
    /// Label of what the next `undo()` reverts.
    fn undo_description(&self) -> Option<String>;
    fn strategy(&self) -> Strategy;
}

pub fn new_engine(strategy: Strategy) -> Box<dyn UndoEngine> {
    match strategy {
        Strategy::CommandLog => Box::new(CommandLogEngine::new()),
        Strategy::SnapshotStack => Box::new(SnapshotStackEngine::new()),
    }
}
