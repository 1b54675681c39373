//! Streaming-friendly sorting pipelines built on the crate's heap and treap.
//!
//! [`heap_sort`] favors early availability of the smallest results; [`TreapSort`] favors an
//! incrementally consistent ordering while elements arrive slowly. The two pipelines share no
//! runtime state.

mod heap_sort;
mod treap_sort;

pub use self::heap_sort::{heap_sort, SortedIter};
pub use self::treap_sort::{treap_sort, TreapSort};
