use prioq_core_rs::{Entry, PriorityList};

fn chain<T>(list: &PriorityList<T>) -> Vec<i32> {
  let mut priorities = Vec::new();
  let mut cursor = list.peek_head();
  while let Some(entry) = cursor {
    priorities.push(entry.priority());
    cursor = entry.next();
  }
  priorities
}

#[test]
fn reference_sequence_round_trips() {
  let mut list = PriorityList::new();
  assert_eq!(list.size(), 0);

  list.insert(0, "first node");
  assert_eq!(list.size(), 1);
  let head = list.peek_head().expect("head after first insert");
  assert_eq!(*head.payload(), "first node");
  assert_eq!(head.priority(), 0);

  let steps = [
    (5, "abc", vec![5, 0]),
    (3, "def", vec![5, 3, 0]),
    (7, "hij", vec![7, 5, 3, 0]),
    (2, "pqr", vec![7, 5, 3, 2, 0]),
  ];
  for (priority, payload, expected) in steps {
    list.insert(priority, payload);
    assert_eq!(chain(&list), expected);
    assert_eq!(list.size(), expected.len());
  }

  let mut removed = Vec::new();
  while let Some(entry) = list.remove_max() {
    assert!(entry.next().is_none());
    removed.push(entry.into_parts());
    assert_eq!(list.size(), 5 - removed.len());
  }
  assert_eq!(removed, vec![(7, "hij"), (5, "abc"), (3, "def"), (2, "pqr"), (0, "first node")]);
  assert!(list.remove_max().is_none());
  assert_eq!(list.size(), 0);
}

#[test]
fn instances_do_not_share_state() {
  let mut left = PriorityList::new();
  let mut right = PriorityList::new();
  left.insert(1, "left");
  right.insert(2, "right");
  right.insert(3, "right");

  assert_eq!(left.size(), 1);
  assert_eq!(right.size(), 2);
  assert_eq!(left.remove_max().map(Entry::into_payload), Some("left"));
  assert_eq!(right.size(), 2);
}

#[test]
fn result_accessors_compose_with_question_mark() {
  fn top_two(list: &mut PriorityList<u32>) -> Result<(u32, u32), prioq_core_rs::PriorityListError> {
    let first = list.try_remove_max()?.into_payload();
    let second = list.try_remove_max()?.into_payload();
    Ok((first, second))
  }

  let mut list: PriorityList<u32> = [(1, 10), (4, 40), (4, 41)].into_iter().collect();
  assert_eq!(top_two(&mut list), Ok((40, 41)));
  assert_eq!(top_two(&mut list), Err(prioq_core_rs::PriorityListError::Empty));
}
