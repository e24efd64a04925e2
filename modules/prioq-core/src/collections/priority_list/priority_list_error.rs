use core::fmt;

/// Errors reported by the `Result`-returning accessors of [`PriorityList`](super::PriorityList).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityListError {
  /// The list has no entries to inspect or remove.
  Empty,
}

impl fmt::Display for PriorityListError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Empty => f.write_str("priority list is empty"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for PriorityListError {}
