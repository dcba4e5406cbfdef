//! A [singly-linked list] of integers with head-returning mutators.
//!
//! The list is identified by its head, an owned [`Link`] the caller passes
//! into and receives back from every structural operation, since inserting
//! at position 0 or deleting the head changes which node comes first. An
//! out-of-range position never raises: the mutators hand the list back
//! unchanged, and the boolean/optional returns say what happened.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

/// Creates a linked list containing the arguments, front to back.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::linked_list;
///
/// let head = list![10 => 20 => 30];
/// assert_eq!(linked_list::to_vec(head.as_deref()), [10, 20, 30]);
/// ```
#[macro_export]
macro_rules! list {
    ($($value:expr)=>*) => {
        $crate::ops::linked_list::from_slice(&[$($value),*])
    };
}

/// An owned handle to the first node of a list, or [`None`] for the empty
/// list.
pub type Link = Option<Box<ListNode>>;

/// A single list node: a value plus ownership of the rest of the chain.
#[derive(Debug, PartialEq, Eq)]
pub struct ListNode {
    /// Data the node holds.
    pub value: i32,
    /// The rest of the list, or [`None`] at the tail.
    pub next: Link,
}

impl ListNode {
    /// Creates a detached node holding `value`.
    #[inline]
    pub fn new(value: i32) -> Self {
        Self { value, next: None }
    }
}

impl Drop for ListNode {
    fn drop(&mut self) {
        // Unlink iteratively so dropping a long chain cannot recurse once
        // per node and overflow the stack.
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Inserts a new node holding `value` at `position`, returning the new head.
///
/// Position 0 prepends: the new node becomes the head. For larger positions
/// the list is walked `position - 1` links from the head; if the chain ends
/// before that, the list is returned *unchanged* — no error, no signal. A
/// caller who receives the same head back cannot tell a successful splice
/// from a skipped one without re-scanning, which mirrors the silent-failure
/// contract of the other list mutators.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. The list is walked link by link to the insertion
/// point; the splice itself only moves two links.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::linked_list;
///
/// let head = list![10 => 20 => 30 => 40];
/// let head = linked_list::insert_node(head, 25, 2);
/// assert_eq!(linked_list::to_vec(head.as_deref()), [10, 20, 25, 30, 40]);
///
/// // Prepending returns the new node as head.
/// let head = linked_list::insert_node(head, 5, 0);
/// assert_eq!(linked_list::to_vec(head.as_deref()), [5, 10, 20, 25, 30, 40]);
///
/// // Too far: the list comes back unchanged.
/// let head = linked_list::insert_node(head, 99, 12);
/// assert_eq!(linked_list::to_vec(head.as_deref()), [5, 10, 20, 25, 30, 40]);
/// ```
pub fn insert_node(mut head: Link, value: i32, position: usize) -> Link {
    if position == 0 {
        return Some(Box::new(ListNode { value, next: head }));
    }

    let mut cur = &mut head;
    let mut hops = position - 1;
    loop {
        match cur {
            // Ran off the end before reaching the splice point.
            None => break,
            Some(node) if hops == 0 => {
                let rest = node.next.take();
                node.next = Some(Box::new(ListNode { value, next: rest }));
                break;
            }
            Some(node) => {
                cur = &mut node.next;
                hops -= 1;
            }
        }
    }

    head
}

/// Removes the node at `position`, returning the new head.
///
/// An empty list returns [`None`]. Position 0 unlinks the head and returns
/// its successor. For larger positions the list is walked to the node
/// preceding the target; if the target does not exist the list is returned
/// unchanged.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. The list is walked link by link to the node before
/// the target; unlinking only moves one link.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::linked_list;
///
/// let head = list![10 => 20 => 25 => 30 => 40];
/// let head = linked_list::delete_node(head, 3);
/// assert_eq!(linked_list::to_vec(head.as_deref()), [10, 20, 25, 40]);
///
/// // Deleting the head promotes its successor.
/// let head = linked_list::delete_node(head, 0);
/// assert_eq!(linked_list::to_vec(head.as_deref()), [20, 25, 40]);
///
/// // An empty list stays empty, whatever the position.
/// assert_eq!(linked_list::delete_node(None, 7), None);
/// ```
pub fn delete_node(mut head: Link, position: usize) -> Link {
    if position == 0 {
        // Covers the empty list as well.
        return head.and_then(|mut node| node.next.take());
    }

    let mut cur = &mut head;
    let mut hops = position - 1;
    loop {
        match cur {
            None => break,
            Some(node) if hops == 0 => {
                // `node` precedes the target; splice it out if it exists.
                if let Some(mut target) = node.next.take() {
                    node.next = target.next.take();
                }
                break;
            }
            Some(node) => {
                cur = &mut node.next;
                hops -= 1;
            }
        }
    }

    head
}

/// Returns the position of the first node holding `value`, counting from 0,
/// or [`None`] if the value is absent.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. The list is walked from the head until a match is
/// found or the chain ends.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::linked_list;
///
/// let head = list![10 => 20 => 25 => 40];
///
/// assert_eq!(linked_list::search_node(head.as_deref(), 25), Some(2));
/// assert_eq!(linked_list::search_node(head.as_deref(), 99), None);
/// assert_eq!(linked_list::search_node(None, 10), None);
/// ```
pub fn search_node(head: Option<&ListNode>, value: i32) -> Option<usize> {
    let mut cur = head;
    let mut position = 0;

    while let Some(node) = cur {
        if node.value == value {
            return Some(position);
        }
        cur = node.next.as_deref();
        position += 1;
    }

    None
}

/// Overwrites the value of the node at `position`, in place. Returns `true`
/// on success and `false` if no such node exists.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. The list is walked link by link to the target node.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::linked_list;
///
/// let mut head = list![10 => 20 => 25 => 40];
///
/// assert!(linked_list::update_node(head.as_deref_mut(), 2, 35));
/// assert_eq!(linked_list::to_vec(head.as_deref()), [10, 20, 35, 40]);
///
/// assert!(!linked_list::update_node(head.as_deref_mut(), 4, 99));
/// ```
pub fn update_node(head: Option<&mut ListNode>, position: usize, new_value: i32) -> bool {
    let mut cur = head;
    let mut hops = position;

    while hops > 0 {
        match cur {
            Some(node) => {
                cur = node.next.as_deref_mut();
                hops -= 1;
            }
            None => return false,
        }
    }

    match cur {
        Some(node) => {
            node.value = new_value;
            true
        }
        None => false,
    }
}

/// Builds a list from a slice, preserving order: `values[0]` becomes the
/// head.
///
/// # Examples
///
/// ```
/// use dsa_ops::ops::linked_list;
///
/// let head = linked_list::from_slice(&[10, 20, 30]);
/// assert_eq!(linked_list::to_vec(head.as_deref()), [10, 20, 30]);
///
/// assert_eq!(linked_list::from_slice(&[]), None);
/// ```
pub fn from_slice(values: &[i32]) -> Link {
    let mut head = None;
    for &value in values.iter().rev() {
        head = Some(Box::new(ListNode { value, next: head }));
    }
    head
}

/// Collects the list's values into a `Vec`, front to back.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::linked_list;
///
/// let head = list![3 => 2 => 1];
/// assert_eq!(linked_list::to_vec(head.as_deref()), [3, 2, 1]);
/// ```
pub fn to_vec(head: Option<&ListNode>) -> Vec<i32> {
    let mut values = Vec::new();
    let mut cur = head;

    while let Some(node) = cur {
        values.push(node.value);
        cur = node.next.as_deref();
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_head() {
        let head = insert_node(None, 10, 0);
        let head = insert_node(head, 5, 0);
        assert_eq!(to_vec(head.as_deref()), [5, 10]);
    }

    #[test]
    fn test_insert_in_middle_and_at_tail() {
        let head = list![10 => 20 => 40];
        let head = insert_node(head, 30, 2);
        assert_eq!(to_vec(head.as_deref()), [10, 20, 30, 40]);

        let head = insert_node(head, 50, 4);
        assert_eq!(to_vec(head.as_deref()), [10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_insert_past_end_is_a_no_op() {
        let head = list![10 => 20];
        let head = insert_node(head, 99, 4);
        assert_eq!(to_vec(head.as_deref()), [10, 20]);

        // Non-zero position into an empty list is also a no-op.
        let head = insert_node(None, 99, 1);
        assert_eq!(head, None);
    }

    #[test]
    fn test_delete_head_and_middle() {
        let head = list![10 => 20 => 25 => 30 => 40];
        let head = delete_node(head, 3);
        assert_eq!(to_vec(head.as_deref()), [10, 20, 25, 40]);

        let head = delete_node(head, 0);
        assert_eq!(to_vec(head.as_deref()), [20, 25, 40]);
    }

    #[test]
    fn test_delete_out_of_range_is_a_no_op() {
        let head = list![10 => 20];
        let head = delete_node(head, 5);
        assert_eq!(to_vec(head.as_deref()), [10, 20]);
    }

    #[test]
    fn test_delete_from_empty_list() {
        assert_eq!(delete_node(None, 0), None);
        assert_eq!(delete_node(None, 3), None);
    }

    #[test]
    fn test_prepend_then_delete_head_round_trip() {
        let head = list![10 => 20 => 30];
        let head = insert_node(head, 5, 0);
        let head = delete_node(head, 0);
        assert_eq!(to_vec(head.as_deref()), [10, 20, 30]);
    }

    #[test]
    fn test_search_counts_from_zero() {
        let head = list![10 => 20 => 25 => 40];
        assert_eq!(search_node(head.as_deref(), 10), Some(0));
        assert_eq!(search_node(head.as_deref(), 40), Some(3));
        assert_eq!(search_node(head.as_deref(), 99), None);
    }

    #[test]
    fn test_update_in_place() {
        let mut head = list![10 => 20 => 30];
        assert!(update_node(head.as_deref_mut(), 1, 25));
        assert_eq!(to_vec(head.as_deref()), [10, 25, 30]);
    }

    #[test]
    fn test_update_out_of_range() {
        let mut head = list![10];
        assert!(!update_node(head.as_deref_mut(), 1, 99));
        assert!(!update_node(None, 0, 99));
        assert_eq!(to_vec(head.as_deref()), [10]);
    }

    #[test]
    fn test_demo_scenario() {
        let head = list![10 => 20 => 30 => 40];

        let head = insert_node(head, 25, 2);
        assert_eq!(to_vec(head.as_deref()), [10, 20, 25, 30, 40]);

        let mut head = delete_node(head, 3);
        assert_eq!(to_vec(head.as_deref()), [10, 20, 25, 40]);

        assert_eq!(search_node(head.as_deref(), 25), Some(2));

        assert!(update_node(head.as_deref_mut(), 2, 35));
        assert_eq!(to_vec(head.as_deref()), [10, 20, 35, 40]);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let values: Vec<i32> = (0..200_000).collect();
        let head = from_slice(&values);
        drop(head);
    }
}
