use crate::treap::{IntoIter, Iter, Treap};
use rand::Rng;
use rand::XorShiftRng;

/// An incremental sorter that keeps its input ordered as elements arrive.
///
/// Elements are ingested one at a time into a treap, so a sorted view of everything received so
/// far is available between any two arrivals without re-sorting. This is useful when producing
/// the input is slow and the results should already be in order while waiting. Interleaved
/// insertions and retractions are supported; each one costs expected logarithmic time.
///
/// # Examples
///
/// ```
/// use streamsort::sort::TreapSort;
///
/// let mut sorter = TreapSort::new();
/// sorter.insert(7);
/// sorter.insert(2);
/// sorter.insert(9);
/// assert_eq!(sorter.sorted_snapshot().collect::<Vec<_>>(), vec![&2, &7, &9]);
///
/// sorter.insert(1);
/// assert_eq!(sorter.sorted_snapshot().collect::<Vec<_>>(), vec![&1, &2, &7, &9]);
/// ```
pub struct TreapSort<T, R = XorShiftRng>
where
    T: Ord,
    R: Rng,
{
    treap: Treap<T, R>,
}

impl<T> TreapSort<T>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapSort<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::sort::TreapSort;
    ///
    /// let sorter: TreapSort<u32> = TreapSort::new();
    /// ```
    pub fn new() -> Self {
        TreapSort {
            treap: Treap::new(),
        }
    }
}

impl<T, R> TreapSort<T, R>
where
    T: Ord,
    R: Rng,
{
    /// Constructs a new, empty sorter drawing node priorities from `rng`.
    pub fn with_rng(rng: R) -> Self {
        TreapSort {
            treap: Treap::with_rng(rng),
        }
    }

    /// Ingests a value. Duplicates are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::sort::TreapSort;
    ///
    /// let mut sorter = TreapSort::new();
    /// sorter.insert(1);
    /// sorter.insert(1);
    /// assert_eq!(sorter.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.treap.insert(value);
    }

    /// Retracts one occurrence of a value. Returns the removed value, or `None` if the value was
    /// never ingested or has already been retracted.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::sort::TreapSort;
    ///
    /// let mut sorter = TreapSort::new();
    /// sorter.insert(1);
    /// assert_eq!(sorter.remove(&1), Some(1));
    /// assert_eq!(sorter.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.treap.remove(value)
    }

    /// Returns the number of values currently held.
    pub fn len(&self) -> usize {
        self.treap.len()
    }

    /// Returns `true` if no values are currently held.
    pub fn is_empty(&self) -> bool {
        self.treap.is_empty()
    }

    /// Returns the current ascending sequence of every value ingested and not retracted.
    ///
    /// Each call starts an independent fresh traversal, so snapshots may be taken at any point
    /// between arrivals.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::sort::TreapSort;
    ///
    /// let mut sorter = TreapSort::new();
    /// sorter.insert(2);
    /// sorter.insert(1);
    ///
    /// let mut snapshot = sorter.sorted_snapshot();
    /// assert_eq!(snapshot.next(), Some(&1));
    /// assert_eq!(snapshot.next(), Some(&2));
    /// assert_eq!(snapshot.next(), None);
    /// ```
    pub fn sorted_snapshot(&self) -> Iter<'_, T> {
        self.treap.iter()
    }

    /// Consumes the sorter and drains the held values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::sort::TreapSort;
    ///
    /// let mut sorter = TreapSort::new();
    /// sorter.insert(2);
    /// sorter.insert(1);
    /// assert_eq!(sorter.into_sorted().collect::<Vec<u32>>(), vec![1, 2]);
    /// ```
    pub fn into_sorted(self) -> IntoIter<T> {
        self.treap.into_iter()
    }
}

impl<T> Default for TreapSort<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts values by feeding them through a treap and draining it in ascending order.
///
/// The batch counterpart of [`TreapSort`]: every value is ingested, then the sorted sequence is
/// yielded lazily.
///
/// # Examples
///
/// ```
/// use streamsort::sort::treap_sort;
///
/// let sorted = treap_sort(vec![1, 7, 8, 0, 4, 6, 2, 3, 5]).collect::<Vec<u32>>();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn treap_sort<I>(values: I) -> IntoIter<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    values.into_iter().collect::<Treap<_>>().into_iter()
}
