use crate::treap::node::Node;
use crate::treap::tree;
use rand::Rng;
use rand::XorShiftRng;
use std::iter::FromIterator;

/// How an insertion behaves when an equal key is already present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// Keep every occurrence as its own node. Equal keys traverse in insertion order.
    Allow,
    /// Replace the stored key with the incoming one and return the old key.
    Replace,
    /// Leave the stored key untouched and return the incoming one.
    Ignore,
}

/// An ordered multiset implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a key and a priority. The key of any node is greater than all keys in its left
/// subtree and no greater than all keys occuring in its right subtree. The priority of a node is
/// less than or equal to the priority of all nodes in its subtrees. By randomly generating
/// priorities, the expected height of the tree is proportional to the logarithm of the number of
/// keys.
///
/// Priorities are drawn from an RNG owned by the treap, so a seeded generator can be injected to
/// make the tree shape reproducible.
///
/// # Examples
///
/// ```
/// use streamsort::treap::Treap;
///
/// let mut treap = Treap::new();
/// treap.insert(2);
/// treap.insert(0);
/// treap.insert(3);
///
/// assert!(treap.contains(&0));
/// assert_eq!(treap.len(), 3);
/// assert_eq!(treap.min(), Some(&0));
///
/// assert_eq!(treap.remove(&0), Some(0));
/// assert_eq!(treap.remove(&1), None);
///
/// assert_eq!(treap.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
/// ```
pub struct Treap<T, R = XorShiftRng>
where
    T: Ord,
    R: Rng,
{
    root: tree::Tree<T>,
    rng: R,
    policy: DuplicatePolicy,
    len: usize,
}

impl<T> Treap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `Treap<T>` with multiset semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let treap: Treap<u32> = Treap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_rng(XorShiftRng::new_unseeded())
    }

    /// Constructs a new, empty `Treap<T>` with the given duplicate-key policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::{DuplicatePolicy, Treap};
    ///
    /// let mut treap = Treap::with_policy(DuplicatePolicy::Ignore);
    /// assert_eq!(treap.insert(1), None);
    /// assert_eq!(treap.insert(1), Some(1));
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self::with_rng_and_policy(XorShiftRng::new_unseeded(), policy)
    }
}

impl<T, R> Treap<T, R>
where
    T: Ord,
    R: Rng,
{
    /// Constructs a new, empty treap drawing priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, XorShiftRng};
    /// use streamsort::treap::Treap;
    ///
    /// let rng: XorShiftRng = SeedableRng::from_seed([1, 2, 3, 4]);
    /// let treap: Treap<u32, XorShiftRng> = Treap::with_rng(rng);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self::with_rng_and_policy(rng, DuplicatePolicy::Allow)
    }

    /// Constructs a new, empty treap with both the priority source and the duplicate-key policy
    /// supplied by the caller.
    pub fn with_rng_and_policy(rng: R, policy: DuplicatePolicy) -> Self {
        Treap {
            root: None,
            rng,
            policy,
            len: 0,
        }
    }

    /// Inserts a key into the treap with a freshly drawn random priority.
    ///
    /// Returns `None` when a node was added. Under `DuplicatePolicy::Replace` an equal stored
    /// key is returned; under `DuplicatePolicy::Ignore` the incoming key is handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// assert_eq!(treap.insert(1), None);
    /// assert_eq!(treap.insert(1), None);
    /// assert_eq!(treap.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) -> Option<T> {
        let Treap {
            ref mut root,
            ref mut rng,
            policy,
            ref mut len,
        } = *self;
        let ret = tree::insert(root, Node::new(key, rng.next_u32()), policy);
        if ret.is_none() {
            *len += 1;
        }
        ret
    }

    /// Removes one occurrence of a key from the treap. Returns the removed key, or `None` if the
    /// key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1);
    /// assert_eq!(treap.remove(&1), Some(1));
    /// assert_eq!(treap.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        tree::remove(&mut self.root, key).map(|key| {
            self.len -= 1;
            key
        })
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1);
    /// assert_eq!(treap.contains(&0), false);
    /// assert_eq!(treap.contains(&1), true);
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the number of keys in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1);
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let treap: Treap<u32> = Treap::new();
    /// assert!(treap.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the treap, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1);
    /// treap.insert(2);
    /// treap.clear();
    /// assert_eq!(treap.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1);
    /// treap.insert(3);
    /// assert_eq!(treap.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1);
    /// treap.insert(3);
    /// assert_eq!(treap.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty treap
    /// has height zero. Expected to stay proportional to the logarithm of `len`.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns an iterator over the treap. The iterator yields keys in ascending order using an
    /// explicit stack, so pathologically deep trees cannot overflow the call stack. Each call
    /// starts an independent fresh walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamsort::treap::Treap;
    ///
    /// let mut treap = Treap::new();
    /// treap.insert(1);
    /// treap.insert(3);
    ///
    /// let mut iterator = treap.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T, R> IntoIterator for Treap<T, R>
where
    T: Ord,
    R: Rng,
{
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, R> IntoIterator for &'a Treap<T, R>
where
    T: 'a + Ord,
    R: Rng,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `Treap<T>`.
///
/// This iterator traverses the treap in-order and yields owned keys.
pub struct IntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `Treap<T>`.
///
/// This iterator traverses the treap in-order and yields immutable references.
pub struct Iter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref key, ref right, ..
            } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for Treap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Extend<T> for Treap<T, R>
where
    T: Ord,
    R: Rng,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for Treap<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut treap = Treap::new();
        treap.extend(iter);
        treap
    }
}
