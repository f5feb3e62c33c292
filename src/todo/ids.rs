use crate::todo::models::ItemId;

/// Hands out item ids.
pub trait IdSource {
    fn next_id(&mut self) -> ItemId;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for IdCounter {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}
