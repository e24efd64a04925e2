use alloc::{boxed::Box, vec::Vec};
use core::fmt;

mod entry;
mod into_iter;
mod iter;
mod priority_list_error;

pub use entry::Entry;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use priority_list_error::PriorityListError;

/// Priority key used to order entries. Higher values are served first; negatives are allowed.
pub type Priority = i32;

type Link<T> = Option<Box<Entry<T>>>;

/// Priority-ordered singly-linked list
///
/// Entries are kept sorted by non-increasing priority. Among entries that share a priority the
/// one inserted first stays in front, so each priority tier behaves as a FIFO queue.
///
/// Every entry is owned by its predecessor and the first entry by the list itself, which rules
/// out cycles and shared links. The list is a plain owned value with no interior mutability;
/// callers that share it across threads must wrap it in their own lock.
///
/// # Complexity
///
/// * [`insert`](Self::insert) - `O(n)` worst case, `O(1)` when the new entry becomes the head
/// * [`remove_max`](Self::remove_max) / [`peek_head`](Self::peek_head) - `O(1)`
/// * [`size`](Self::size) - `O(1)`, backed by a counter updated on every mutation
pub struct PriorityList<T> {
  head: Link<T>,
  len:  usize,
}

impl<T> PriorityList<T> {
  /// Creates an empty list.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, len: 0 }
  }

  /// Inserts `payload` with the given `priority`
  ///
  /// The entry is linked in front of the first entry with a strictly lower priority, i.e. after
  /// every entry whose priority is greater than or equal to `priority`. An empty list, or a
  /// priority strictly above the current head, makes the new entry the head.
  ///
  /// # Arguments
  ///
  /// * `priority` - Ordering key; duplicates and negative values are accepted
  /// * `payload` - Value owned by the list until the entry is removed
  pub fn insert(&mut self, priority: Priority, payload: T) {
    let mut entry = Box::new(Entry::new(priority, payload));
    let (link, position) = Self::insertion_link(&mut self.head, priority);
    entry.next = link.take();
    *link = Some(entry);
    self.len += 1;
    tracing::trace!(priority, position, len = self.len, "priority list entry inserted");
  }

  /// Detaches and returns the head entry
  ///
  /// The head is the highest-priority entry, and among equal priorities the earliest inserted.
  /// The returned entry no longer links into the list.
  ///
  /// # Returns
  ///
  /// * `Some(Entry)` - The former head; the list now starts at its successor
  /// * `None` - If the list is empty; the list is left untouched
  pub fn remove_max(&mut self) -> Option<Entry<T>> {
    let Some(boxed) = self.head.take() else {
      tracing::trace!("remove_max on empty priority list");
      return None;
    };
    let mut entry = *boxed;
    self.head = entry.next.take();
    self.len -= 1;
    tracing::trace!(priority = entry.priority, len = self.len, "priority list entry removed");
    Some(entry)
  }

  /// Returns a view of the head entry without modifying the list
  ///
  /// The chain behind the head can be walked through [`Entry::next`].
  ///
  /// # Returns
  ///
  /// * `Some(&Entry)` - The current head
  /// * `None` - If the list is empty
  #[must_use]
  pub fn peek_head(&self) -> Option<&Entry<T>> {
    self.head.as_deref()
  }

  /// Same as [`remove_max`](Self::remove_max), reporting an empty list as an error.
  ///
  /// # Errors
  ///
  /// Returns [`PriorityListError::Empty`] when there is no entry to remove.
  pub fn try_remove_max(&mut self) -> Result<Entry<T>, PriorityListError> {
    self.remove_max().ok_or(PriorityListError::Empty)
  }

  /// Same as [`peek_head`](Self::peek_head), reporting an empty list as an error.
  ///
  /// # Errors
  ///
  /// Returns [`PriorityListError::Empty`] when the list has no head.
  pub fn try_peek_head(&self) -> Result<&Entry<T>, PriorityListError> {
    self.peek_head().ok_or(PriorityListError::Empty)
  }

  /// Returns the number of entries in the list.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.len
  }

  /// Returns `true` if the list has no entries.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Drops every entry, leaving the list empty.
  pub fn clear(&mut self) {
    let released = self.release_chain();
    tracing::debug!(released, "priority list cleared");
  }

  /// Returns an iterator over the entries in priority order.
  #[must_use]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.head.as_deref(), self.len)
  }

  /// Walks past every entry whose priority is `>= priority` and returns the link the new entry
  /// must occupy, together with its zero-based position.
  fn insertion_link(head: &mut Link<T>, priority: Priority) -> (&mut Link<T>, usize) {
    let mut link = head;
    let mut position = 0;
    while link.as_ref().is_some_and(|entry| entry.priority >= priority) {
      let Some(entry) = link else {
        break;
      };
      link = &mut entry.next;
      position += 1;
    }
    (link, position)
  }

  // Unlinks entries one at a time so long chains never recurse through `Box` drops.
  fn release_chain(&mut self) -> usize {
    let mut released = 0;
    let mut link = self.head.take();
    while let Some(mut entry) = link {
      link = entry.next.take();
      released += 1;
    }
    self.len = 0;
    released
  }
}

impl<T> Default for PriorityList<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for PriorityList<T> {
  fn drop(&mut self) {
    self.release_chain();
  }
}

impl<T: Clone> Clone for PriorityList<T> {
  fn clone(&self) -> Self {
    let entries: Vec<&Entry<T>> = self.iter().collect();
    let mut head: Link<T> = None;
    for source in entries.into_iter().rev() {
      let mut entry = Box::new(Entry::new(source.priority, source.payload.clone()));
      entry.next = head.take();
      head = Some(entry);
    }
    Self { head, len: self.len }
  }
}

impl<T: fmt::Debug> fmt::Debug for PriorityList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter().map(|entry| (entry.priority, &entry.payload))).finish()
  }
}

impl<T> Extend<(Priority, T)> for PriorityList<T> {
  fn extend<I: IntoIterator<Item = (Priority, T)>>(&mut self, iter: I) {
    for (priority, payload) in iter {
      self.insert(priority, payload);
    }
  }
}

impl<T> FromIterator<(Priority, T)> for PriorityList<T> {
  fn from_iter<I: IntoIterator<Item = (Priority, T)>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<T> IntoIterator for PriorityList<T> {
  type IntoIter = IntoIter<T>;
  type Item = Entry<T>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a PriorityList<T> {
  type IntoIter = Iter<'a, T>;
  type Item = &'a Entry<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
