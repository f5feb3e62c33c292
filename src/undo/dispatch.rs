use crate::todo::models::Collection;
use crate::undo::{Intent, Strategy, UndoEngine, new_engine};

/// Single entry point between the UI and whichever engine is configured.
pub struct Dispatcher {
    engine: Box<dyn UndoEngine>,
}

impl Dispatcher {
    pub fn new(strategy: Strategy) -> Self {
        log::info!("using {} undo strategy", strategy);
        Self::with_engine(new_engine(strategy))
    }

    pub fn with_engine(engine: Box<dyn UndoEngine>) -> Self {
        Self { engine }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Collection {
        self.engine.apply(intent)
    }

    pub fn undo(&mut self) -> Collection {
        self.engine.undo()
    }

    pub fn current(&self) -> Collection {
        self.engine.current()
    }

    pub fn can_undo(&self) -> bool {
        self.engine.can_undo()
    }

    pub fn history_len(&self) -> usize {
        self.engine.history_len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.engine.undo_description()
    }

    pub fn strategy(&self) -> Strategy {
        self.engine.strategy()
    }
}
