use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Same item with `completed` replaced.
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            completed,
        }
    }
}

/// Ordered list of live items.
///
/// The backing buffer is shared and never written after construction, so a
/// `Collection` kept by an undo history (or any other holder) keeps its value
/// no matter what happens to the live list afterwards. Every transform below
/// returns a new `Collection`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    items: Rc<Vec<Item>>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, item: Item) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Self::from(items)
    }

    /// Returns `self` unchanged (same buffer) when `id` is not present.
    pub fn set_completed(&self, id: ItemId, value: bool) -> Self {
        if self.find(id).is_none() {
            return self.clone();
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    item.with_completed(value)
                } else {
                    item.clone()
                }
            })
            .collect::<Vec<_>>();
        Self::from(items)
    }

    pub fn remove(&self, id: ItemId) -> (Self, Option<Item>) {
        let Some(index) = self.position(id) else {
            return (self.clone(), None);
        };

        let mut items = self.items.as_ref().clone();
        let removed = items.remove(index);
        (Self::from(items), Some(removed))
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn completed_items(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// True when both values share one buffer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl From<Vec<Item>> for Collection {
    fn from(items: Vec<Item>) -> Self {
        Self {
            items: Rc::new(items),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
