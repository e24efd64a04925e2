mod priority_list;

pub use priority_list::{Entry, IntoIter, Iter, Priority, PriorityList, PriorityListError};
