//! Probabilistic binary search tree where each node also maintains the min-heap invariant on a
//! randomly assigned priority.

mod node;
mod set;
mod tree;

pub use self::set::{DuplicatePolicy, IntoIter, Iter, Treap};
