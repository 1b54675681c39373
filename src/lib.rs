//! Streaming-friendly sorting built on a binary min-heap and a randomized treap.
//!
//! Both sorting mechanisms interleave ingestion with result production instead of collecting the
//! whole input before emitting anything: [`sort::heap_sort`] makes the smallest results available
//! after a single pass of pushes, and [`sort::TreapSort`] keeps everything received so far in
//! order while elements trickle in. The structures underneath are exposed directly as
//! [`heap::MinHeap`] and [`treap::Treap`].
//!
//! All operations are synchronous, non-blocking, and complete in expected logarithmic time.
//! Sharing a structure across threads is the caller's responsibility: wrap it in a `Mutex`, or
//! feed a privately owned sorter through a channel.

mod error;

pub mod heap;
pub mod sort;
pub mod treap;

pub use self::error::HeapError;
