use crate::todo::models::{Collection, Item, ItemId};
use crate::undo::{Intent, Strategy, UndoEngine};
use std::fmt;

/// An applied change, carrying what is needed to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Item),
    Toggle(ItemId),
    /// The full item as it was before removal.
    Delete(Item),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add(item) => write!(f, "Add {:?}", item.text),
            Command::Toggle(id) => write!(f, "Toggle {}", id),
            Command::Delete(item) => write!(f, "Delete {:?}", item.text),
        }
    }
}

/// Undo by replaying inverses of a command log.
///
/// Only effective changes are logged: toggling or deleting an unknown id
/// leaves both the list and the log untouched. Undoing a delete appends the
/// item back at the end of the list; the original position is not kept.
#[derive(Debug)]
pub struct CommandLogEngine {
    collection: Collection,
    log: Vec<Command>,
}

impl CommandLogEngine {
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
            log: Vec::new(),
        }
    }

    pub fn log(&self) -> &[Command] {
        &self.log
    }

    fn record(&mut self, collection: Collection, command: Command) {
        log::debug!("command-log: applied {} (depth {})", command, self.log.len() + 1);
        self.collection = collection;
        self.log.push(command);
    }

    fn invert(&self, command: &Command) -> Collection {
        match command {
            Command::Add(item) => self.collection.remove(item.id).0,
            Command::Toggle(id) => match self.collection.find(*id) {
                Some(current) => self.collection.set_completed(*id, !current.completed),
                None => self.collection.clone(),
            },
            Command::Delete(item) => self.collection.insert(item.clone()),
        }
    }
}

impl UndoEngine for CommandLogEngine {
    fn apply(&mut self, intent: Intent) -> Collection {
        match intent {
            Intent::Add(item) => {
                let collection = self.collection.insert(item.clone());
                self.record(collection, Command::Add(item));
            }
            Intent::Toggle(id) => match self.collection.find(id) {
                Some(current) => {
                    let collection = self.collection.set_completed(id, !current.completed);
                    self.record(collection, Command::Toggle(id));
                }
                None => log::trace!("command-log: toggle {} ignored, no such item", id),
            },
            Intent::Delete(id) => match self.collection.remove(id) {
                (collection, Some(removed)) => self.record(collection, Command::Delete(removed)),
                (_, None) => log::trace!("command-log: delete {} ignored, no such item", id),
            },
            Intent::Undo => return self.undo(),
        }
        self.collection.clone()
    }

    fn undo(&mut self) -> Collection {
        if let Some(command) = self.log.pop() {
            self.collection = self.invert(&command);
            log::debug!("command-log: reverted {} (depth {})", command, self.log.len());
        }
        self.collection.clone()
    }

    fn current(&self) -> Collection {
        self.collection.clone()
    }

    fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    fn history_len(&self) -> usize {
        self.log.len()
    }

    fn undo_description(&self) -> Option<String> {
        self.log.last().map(|command| command.to_string())
    }

    fn strategy(&self) -> Strategy {
        Strategy::CommandLog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, text: &str) -> Item {
        Item::new(ItemId(id), text)
    }

    fn create_test_engine() -> CommandLogEngine {
        let mut engine = CommandLogEngine::new();
        engine.apply(Intent::Add(item(1, "A")));
        engine.apply(Intent::Add(item(2, "B")));
        engine.apply(Intent::Add(item(3, "C")));
        engine
    }

    fn texts(collection: &Collection) -> Vec<&str> {
        collection.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_log_records_effective_commands() {
        let mut engine = create_test_engine();
        engine.apply(Intent::Toggle(ItemId(2)));
        engine.apply(Intent::Delete(ItemId(1)));

        assert_eq!(
            engine.log(),
            &[
                Command::Add(item(1, "A")),
                Command::Add(item(2, "B")),
                Command::Add(item(3, "C")),
                Command::Toggle(ItemId(2)),
                Command::Delete(item(1, "A")),
            ]
        );
    }

    #[test]
    fn test_delete_captures_full_item() {
        let mut engine = create_test_engine();
        engine.apply(Intent::Toggle(ItemId(2)));
        engine.apply(Intent::Delete(ItemId(2)));

        // The captured item keeps the completed flag it had when removed
        assert_eq!(engine.log().last(), Some(&Command::Delete(item(2, "B").with_completed(true))));

        let restored = engine.undo();
        assert!(restored.find(ItemId(2)).unwrap().completed);
    }

    #[test]
    fn test_delete_undo_appends_at_end() {
        let mut engine = create_test_engine();

        let after_delete = engine.apply(Intent::Delete(ItemId(2)));
        assert_eq!(texts(&after_delete), vec!["A", "C"]);

        let after_undo = engine.undo();
        assert_eq!(texts(&after_undo), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_delete_unknown_id_is_not_logged() {
        let mut engine = CommandLogEngine::new();
        let before = engine.current();

        let after = engine.apply(Intent::Delete(ItemId(99)));
        assert_eq!(after, before);
        assert!(!engine.can_undo());

        let mut engine = create_test_engine();
        let before = engine.current();
        let after = engine.apply(Intent::Delete(ItemId(99)));
        assert_eq!(after, before);
        assert_eq!(engine.history_len(), 3);
    }

    #[test]
    fn test_toggle_unknown_id_is_not_logged() {
        let mut engine = create_test_engine();
        let before = engine.current();

        let after = engine.apply(Intent::Toggle(ItemId(99)));
        assert!(after.ptr_eq(&before));
        assert_eq!(engine.history_len(), 3);
    }

    #[test]
    fn test_undo_add_removes_item() {
        let mut engine = create_test_engine();
        let after = engine.undo();

        assert_eq!(texts(&after), vec!["A", "B"]);
        assert_eq!(engine.history_len(), 2);
    }

    #[test]
    fn test_full_unwind_after_delete_undo() {
        let mut engine = create_test_engine();
        engine.apply(Intent::Delete(ItemId(1)));
        engine.apply(Intent::Toggle(ItemId(3)));

        assert_eq!(texts(&engine.undo()), vec!["B", "C"]);
        assert!(!engine.current().find(ItemId(3)).unwrap().completed);
        assert_eq!(texts(&engine.undo()), vec!["B", "C", "A"]);
        assert_eq!(texts(&engine.undo()), vec!["B", "A"]);
        assert_eq!(texts(&engine.undo()), vec!["A"]);
        assert!(engine.undo().is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_undo_description() {
        let mut engine = create_test_engine();
        assert_eq!(engine.undo_description().as_deref(), Some("Add \"C\""));

        engine.apply(Intent::Toggle(ItemId(1)));
        assert_eq!(engine.undo_description().as_deref(), Some("Toggle #1"));

        engine.apply(Intent::Delete(ItemId(2)));
        assert_eq!(engine.undo_description().as_deref(), Some("Delete \"B\""));
    }
}
