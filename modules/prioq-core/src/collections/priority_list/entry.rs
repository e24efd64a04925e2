use alloc::boxed::Box;
use core::fmt;

use super::Priority;

/// A single `(priority, payload)` record stored in a [`PriorityList`](super::PriorityList).
///
/// Entries are created only by [`PriorityList::insert`](super::PriorityList::insert) and never
/// change their priority or payload afterwards. An entry handed out by
/// [`PriorityList::remove_max`](super::PriorityList::remove_max) is detached: its [`next`](Self::next)
/// link is always `None`.
pub struct Entry<T> {
  pub(super) priority: Priority,
  pub(super) payload:  T,
  pub(super) next:     Option<Box<Entry<T>>>,
}

impl<T> Entry<T> {
  pub(super) const fn new(priority: Priority, payload: T) -> Self {
    Self { priority, payload, next: None }
  }

  /// Returns the priority the entry was inserted with.
  #[must_use]
  pub const fn priority(&self) -> Priority {
    self.priority
  }

  /// Returns a reference to the payload.
  #[must_use]
  pub const fn payload(&self) -> &T {
    &self.payload
  }

  /// Returns the entry that follows this one in the owning list.
  ///
  /// Walking `next` from [`PriorityList::peek_head`](super::PriorityList::peek_head) visits the
  /// whole chain in priority order. Detached entries return `None`.
  #[must_use]
  pub fn next(&self) -> Option<&Entry<T>> {
    self.next.as_deref()
  }

  /// Consumes the entry and returns its payload.
  #[must_use]
  pub fn into_payload(self) -> T {
    self.payload
  }

  /// Consumes the entry and returns `(priority, payload)`.
  #[must_use]
  pub fn into_parts(self) -> (Priority, T) {
    (self.priority, self.payload)
  }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Entry")
      .field("priority", &self.priority)
      .field("payload", &self.payload)
      .field("linked", &self.next.is_some())
      .finish()
  }
}
