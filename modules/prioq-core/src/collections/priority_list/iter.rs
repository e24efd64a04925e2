use core::iter::FusedIterator;

use super::Entry;

/// Borrowing iterator over the entries of a [`PriorityList`](super::PriorityList) in chain order.
///
/// Created by [`PriorityList::iter`](super::PriorityList::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
  cursor:    Option<&'a Entry<T>>,
  remaining: usize,
}

impl<'a, T> Iter<'a, T> {
  pub(super) const fn new(head: Option<&'a Entry<T>>, len: usize) -> Self {
    Self { cursor: head, remaining: len }
  }
}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Self { cursor: self.cursor, remaining: self.remaining }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Entry<T>;

  fn next(&mut self) -> Option<Self::Item> {
    let entry = self.cursor?;
    self.cursor = entry.next();
    self.remaining = self.remaining.saturating_sub(1);
    Some(entry)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
