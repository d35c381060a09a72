//! Ordered container that rejects same-entity duplicates.
//!
//! # Responsibility
//! - Hold items in insertion order.
//! - Enforce uniqueness through the weak `SameEntity` relation.
//!
//! # Invariants
//! - No two stored items satisfy `is_same_entity` at any time.
//! - Failed operations leave the contents untouched.
//! - Targets of `set_item`/`remove` are located by full equality (`==`).

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Weak identity relation used for duplicate detection.
///
/// Implementors must keep it consistent with `PartialEq`:
/// `a == b` implies `a.is_same_entity(b)`.
pub trait SameEntity {
    fn is_same_entity(&self, other: &Self) -> bool;
}

/// Failure raised by list mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityError {
    /// Operation would leave two same-entity items in the list.
    Duplicate,
    /// Target item is not in the list.
    NotFound,
}

impl Display for EntityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate => write!(f, "operation would result in duplicate entries"),
            Self::NotFound => write!(f, "entry not found in list"),
        }
    }
}

impl Error for EntityError {}

/// Ordered list with no same-entity duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: SameEntity + PartialEq + Clone> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when an item same-entity with `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same_entity(item))
    }

    /// Appends `item` unless a same-entity item already exists.
    pub fn add(&mut self, item: T) -> Result<(), EntityError> {
        if self.contains(&item) {
            return Err(EntityError::Duplicate);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` with `replacement`, keeping its position.
    ///
    /// `replacement` may be same-entity with `target` itself; it may not be
    /// same-entity with any other stored item.
    pub fn set_item(&mut self, target: &T, replacement: T) -> Result<(), EntityError> {
        let position = self
            .items
            .iter()
            .position(|existing| existing == target)
            .ok_or(EntityError::NotFound)?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(idx, existing)| idx != position && existing.is_same_entity(&replacement));
        if collides {
            return Err(EntityError::Duplicate);
        }

        self.items[position] = replacement;
        Ok(())
    }

    pub fn remove(&mut self, target: &T) -> Result<(), EntityError> {
        let position = self
            .items
            .iter()
            .position(|existing| existing == target)
            .ok_or(EntityError::NotFound)?;
        self.items.remove(position);
        Ok(())
    }

    /// Replaces all contents at once; all-or-nothing.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), EntityError> {
        if !items_are_unique(&items) {
            return Err(EntityError::Duplicate);
        }
        self.items = items;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> UniqueList<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn items_are_unique<T: SameEntity>(items: &[T]) -> bool {
    for (idx, item) in items.iter().enumerate() {
        if items[idx + 1..]
            .iter()
            .any(|other| item.is_same_entity(other))
        {
            return false;
        }
    }
    true
}
