use core::iter::FusedIterator;

use super::{Entry, PriorityList};

/// Owning iterator that drains a [`PriorityList`] through repeated
/// [`remove_max`](PriorityList::remove_max) calls.
///
/// Entries come out in non-increasing priority order, FIFO among equal priorities, and are
/// already detached from the chain.
#[derive(Debug)]
pub struct IntoIter<T> {
  list: PriorityList<T>,
}

impl<T> IntoIter<T> {
  pub(super) const fn new(list: PriorityList<T>) -> Self {
    Self { list }
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = Entry<T>;

  fn next(&mut self) -> Option<Self::Item> {
    self.list.remove_max()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.list.size();
    (len, Some(len))
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
