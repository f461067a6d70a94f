//! A module for the [`PressOrder`] data type, a fixed-capacity activation-order store

/// An insertion-ordered collection with a fixed maximum size
///
/// This data structure does not require the [`Hash`] trait,
/// and instead uses linear iteration to find entries.
/// Unlike a plain set, it remembers the order in which elements were inserted:
/// removal compacts the remaining elements so that the last slot always holds
/// the most recently inserted element still present.
///
/// Principally, this data structure should be used for very small collections,
/// where insertion order, stack-allocation and uniqueness matter more than
/// look-up speed. Insertion, removal and membership checks are O(CAP);
/// with `CAP` at most a handful of elements, performance is immaterial.
///
/// The maximum size of this type is given by the const-generic type parameter `CAP`.
/// Entries in this structure are guaranteed to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressOrder<T: PartialEq + Clone + Copy, const CAP: usize> {
    storage: [Option<T>; CAP],
    len: usize,
}

impl<T: PartialEq + Clone + Copy, const CAP: usize> Default for PressOrder<T, CAP> {
    fn default() -> Self {
        Self {
            storage: [None; CAP],
            len: 0,
        }
    }
}

impl<T: PartialEq + Clone + Copy, const CAP: usize> PressOrder<T, CAP> {
    /// Appends `element` after every element currently stored.
    ///
    /// Elements already present are left where they are; re-pushing does not
    /// refresh an element's position.
    ///
    /// PANICS: will panic if the collection is full and `element` is not
    /// already present.
    pub fn push(&mut self, element: T) {
        if let Err(PushError::Overfull) = self.try_push(element) {
            panic!("Pushing this element would have overflowed the collection!")
        }
    }

    /// Attempts to append `element` after every element currently stored.
    ///
    /// Returns `Ok` if this succeeds, or an error if this failed due to either
    /// capacity or a duplicate entry.
    pub fn try_push(&mut self, element: T) -> Result<(), PushError> {
        if self.contains(&element) {
            return Err(PushError::Duplicate);
        }
        if self.len == CAP {
            return Err(PushError::Overfull);
        }

        self.storage[self.len] = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Removes `element` from the collection, if it is present.
    ///
    /// Later elements shift down to fill the gap, preserving their relative
    /// order. Returns the removed element, or `None` if it was not present.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let index = (0..self.len).find(|&i| self.storage[i].as_ref() == Some(element))?;

        let removed = self.storage[index].take();
        for i in index..self.len - 1 {
            self.storage[i] = self.storage[i + 1];
        }
        self.len -= 1;
        self.storage[self.len] = None;
        removed
    }

    /// Returns the most recently inserted element still present, if any.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.storage[self.len - 1]
        }
    }

    /// Is the provided element in the collection?
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|existing| existing == *element)
    }

    /// Returns the current number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Are there exactly 0 elements?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements without allocation.
    pub fn clear(&mut self) {
        self.storage = [None; CAP];
        self.len = 0;
    }

    /// Iterates over the stored elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.storage[..self.len].iter().flatten().copied()
    }
}

/// An error returned when attempting to push into a [`PressOrder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    /// The collection was full before the push was attempted
    Overfull,
    /// A matching entry already existed
    Duplicate,
}
