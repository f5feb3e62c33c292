use crate::todo::models::Collection;
use crate::undo::{Intent, Strategy, UndoEngine};

/// Undo by restoring whole prior lists.
///
/// A snapshot is pushed before every attempted change, including ones that
/// turn out to be no-ops because the id is unknown. Undo restores the exact
/// previous list, ordering included.
#[derive(Debug)]
pub struct SnapshotStackEngine {
    collection: Collection,
    snapshots: Vec<Collection>,
}

impl SnapshotStackEngine {
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
            snapshots: Vec::new(),
        }
    }

    pub fn snapshots(&self) -> &[Collection] {
        &self.snapshots
    }
}

impl UndoEngine for SnapshotStackEngine {
    fn apply(&mut self, intent: Intent) -> Collection {
        let next = match &intent {
            Intent::Add(item) => self.collection.insert(item.clone()),
            Intent::Toggle(id) => match self.collection.find(*id) {
                Some(current) => self.collection.set_completed(*id, !current.completed),
                None => self.collection.clone(),
            },
            Intent::Delete(id) => self.collection.remove(*id).0,
            Intent::Undo => return self.undo(),
        };

        self.snapshots.push(std::mem::replace(&mut self.collection, next));
        log::debug!("snapshot-stack: applied {} (depth {})", intent, self.snapshots.len());
        self.collection.clone()
    }

    fn undo(&mut self) -> Collection {
        if let Some(previous) = self.snapshots.pop() {
            self.collection = previous;
            log::debug!("snapshot-stack: restored snapshot (depth {})", self.snapshots.len());
        }
        self.collection.clone()
    }

    fn current(&self) -> Collection {
        self.collection.clone()
    }

    fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    fn history_len(&self) -> usize {
        self.snapshots.len()
    }

    fn undo_description(&self) -> Option<String> {
        if self.snapshots.is_empty() {
            None
        } else {
            Some(format!("Restore snapshot {}", self.snapshots.len()))
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::SnapshotStack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::models::{Item, ItemId};

    fn item(id: u64, text: &str) -> Item {
        Item::new(ItemId(id), text)
    }

    fn create_test_engine() -> SnapshotStackEngine {
        let mut engine = SnapshotStackEngine::new();
        engine.apply(Intent::Add(item(1, "A")));
        engine.apply(Intent::Add(item(2, "B")));
        engine.apply(Intent::Add(item(3, "C")));
        engine
    }

    fn texts(collection: &Collection) -> Vec<&str> {
        collection.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_delete_undo_restores_original_order() {
        let mut engine = create_test_engine();

        let after_delete = engine.apply(Intent::Delete(ItemId(2)));
        assert_eq!(texts(&after_delete), vec!["A", "C"]);

        let after_undo = engine.undo();
        assert_eq!(texts(&after_undo), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_delete_unknown_id_still_pushes_snapshot() {
        let mut engine = SnapshotStackEngine::new();
        let before = engine.current();

        let after = engine.apply(Intent::Delete(ItemId(99)));
        assert_eq!(after, before);
        assert!(engine.can_undo());
        assert_eq!(engine.history_len(), 1);

        // Undoing the no-op also changes nothing
        assert!(engine.undo().is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_toggle_unknown_id_still_pushes_snapshot() {
        let mut engine = create_test_engine();
        let before = engine.current();

        let after = engine.apply(Intent::Toggle(ItemId(42)));
        assert_eq!(after, before);
        assert_eq!(engine.history_len(), 4);
    }

    #[test]
    fn test_snapshots_hold_pre_mutation_values() {
        let mut engine = create_test_engine();
        engine.apply(Intent::Toggle(ItemId(1)));

        let snapshots = engine.snapshots();
        assert_eq!(snapshots.len(), 4);
        assert!(snapshots[0].is_empty());
        assert_eq!(texts(&snapshots[1]), vec!["A"]);
        assert_eq!(texts(&snapshots[2]), vec!["A", "B"]);
        assert!(!snapshots[3].find(ItemId(1)).unwrap().completed);
        assert!(engine.current().find(ItemId(1)).unwrap().completed);
    }

    #[test]
    fn test_n_mutations_then_n_undos_return_to_initial() {
        let mut engine = SnapshotStackEngine::new();
        let initial = engine.current();

        let intents = vec![
            Intent::Add(item(1, "A")),
            Intent::Add(item(2, "B")),
            Intent::Toggle(ItemId(1)),
            Intent::Add(item(3, "C")),
            Intent::Delete(ItemId(1)),
            Intent::Delete(ItemId(7)),
            Intent::Toggle(ItemId(3)),
            Intent::Delete(ItemId(2)),
        ];
        let count = intents.len();
        let mut states = vec![initial.clone()];
        for intent in intents {
            states.push(engine.apply(intent));
        }

        // Every step back lands on the exact earlier value
        for expected in states.iter().rev().skip(1) {
            assert_eq!(&engine.undo(), expected);
        }
        assert_eq!(engine.current(), initial);
        assert_eq!(engine.history_len(), 0);
        assert_eq!(states.len(), count + 1);

        assert_eq!(engine.undo(), initial);
    }

    #[test]
    fn test_undo_description() {
        let mut engine = SnapshotStackEngine::new();
        assert!(engine.undo_description().is_none());

        engine.apply(Intent::Add(item(1, "A")));
        engine.apply(Intent::Delete(ItemId(5)));
        assert_eq!(engine.undo_description().as_deref(), Some("Restore snapshot 2"));
    }
}
