use crate::treap::node::Node;
use crate::treap::set::DuplicatePolicy;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

enum RemovalCase {
    Splice,
    RotateLeft,
    RotateRight,
}

fn heap_order_violated<T>(child: &Tree<T>, parent_priority: u32) -> bool {
    match child {
        Some(ref child_node) => child_node.priority < parent_priority,
        None => false,
    }
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>, policy: DuplicatePolicy) -> Option<T>
where
    T: Ord,
{
    match *tree {
        Some(ref mut node) => match new_node.key.cmp(&node.key) {
            Ordering::Less => {
                let ret = insert(&mut node.left, new_node, policy);
                if heap_order_violated(&node.left, node.priority) {
                    node.rotate_right();
                }
                ret
            },
            Ordering::Greater => {
                let ret = insert(&mut node.right, new_node, policy);
                if heap_order_violated(&node.right, node.priority) {
                    node.rotate_left();
                }
                ret
            },
            Ordering::Equal => match policy {
                // Equal keys descend right so they traverse in insertion order.
                DuplicatePolicy::Allow => {
                    let ret = insert(&mut node.right, new_node, policy);
                    if heap_order_violated(&node.right, node.priority) {
                        node.rotate_left();
                    }
                    ret
                },
                DuplicatePolicy::Replace => Some(mem::replace(&mut node.key, new_node.key)),
                DuplicatePolicy::Ignore => Some(new_node.key),
            },
        },
        None => {
            *tree = Some(Box::new(new_node));
            None
        },
    }
}

fn removal_case<T>(tree: &Tree<T>) -> Option<RemovalCase> {
    tree.as_ref().map(|node| match (&node.left, &node.right) {
        (&Some(ref left_node), &Some(ref right_node)) => {
            if left_node.priority < right_node.priority {
                RemovalCase::RotateRight
            } else {
                RemovalCase::RotateLeft
            }
        },
        _ => RemovalCase::Splice,
    })
}

// Sinks the root of `tree` below the child with the smaller priority until at most one child
// remains, then replaces it with that child.
fn rotate_down<T>(tree: &mut Tree<T>) -> Option<T> {
    removal_case(tree).and_then(|case| match case {
        RemovalCase::RotateRight => tree.as_mut().and_then(|node| {
            node.rotate_right();
            rotate_down(&mut node.right)
        }),
        RemovalCase::RotateLeft => tree.as_mut().and_then(|node| {
            node.rotate_left();
            rotate_down(&mut node.left)
        }),
        RemovalCase::Splice => tree.take().map(|node| {
            let Node { key, left, right, .. } = *node;
            *tree = left.or(right);
            key
        }),
    })
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ordering = match tree.as_ref() {
        Some(node) => key.cmp(&node.key),
        None => return None,
    };
    match ordering {
        Ordering::Less => tree.as_mut().and_then(|node| remove(&mut node.left, key)),
        Ordering::Greater => tree.as_mut().and_then(|node| remove(&mut node.right, key)),
        Ordering::Equal => rotate_down(tree),
    }
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match *tree {
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match *tree {
        Some(ref node) => 1 + height(&node.left).max(height(&node.right)),
        None => 0,
    }
}
