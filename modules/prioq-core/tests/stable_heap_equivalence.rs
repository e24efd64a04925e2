//! A binary heap only matches `PriorityList` ordering when ties are broken by insertion sequence.

use std::{cmp::Reverse, collections::BinaryHeap};

use prioq_core_rs::{Entry, Priority, PriorityList};

const INSERTS: [(Priority, char); 7] = [(2, 'a'), (2, 'b'), (7, 'c'), (2, 'd'), (-1, 'e'), (7, 'f'), (-1, 'g')];

fn list_order() -> Vec<char> {
  let list: PriorityList<char> = INSERTS.into_iter().collect();
  list.into_iter().map(Entry::into_payload).collect()
}

#[test]
fn sequence_keyed_heap_matches_list() {
  let mut heap = BinaryHeap::new();
  for (seq, (priority, payload)) in INSERTS.into_iter().enumerate() {
    heap.push((priority, Reverse(seq), payload));
  }
  let heap_order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|(_, _, payload)| payload)).collect();

  assert_eq!(heap_order, list_order());
  assert_eq!(heap_order, vec!['c', 'f', 'a', 'b', 'd', 'e', 'g']);
}

#[test]
fn ascending_sequence_key_serves_ties_lifo() {
  let mut heap = BinaryHeap::new();
  for (seq, (priority, payload)) in INSERTS.into_iter().enumerate() {
    heap.push((priority, seq, payload));
  }
  let heap_order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|(_, _, payload)| payload)).collect();

  assert_eq!(heap_order, vec!['f', 'c', 'd', 'b', 'a', 'g', 'e']);
  assert_ne!(heap_order, list_order());
}
