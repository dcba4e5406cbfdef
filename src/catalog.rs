//! A static catalog of the textbook operations this crate implements.
//!
//! Each entry bundles an operation with its presentation metadata: a title,
//! a prose description, complexity strings, a code sample, and the ordered
//! narration steps a visualization walks through. The catalog is immutable
//! process-wide data; it constrains nothing about the operations themselves
//! and exists purely for consumers that render them.

/// Which structure an [`Algorithm`] operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    /// Index-based operations over an integer array.
    Array,
    /// Singly-linked-list operations.
    LinkedList,
    /// Binary-search-tree operations.
    Tree,
}

/// One narration step of an operation, for presentation.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Short step heading.
    pub title: &'static str,
    /// What the step does, in prose.
    pub description: &'static str,
}

/// A cataloged operation: metadata plus narration steps.
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    /// Display title.
    pub title: &'static str,
    /// Prose description of what the operation does.
    pub description: &'static str,
    /// Time complexity, as display text.
    pub time_complexity: &'static str,
    /// Space complexity, as display text.
    pub space_complexity: &'static str,
    /// Structure the operation belongs to.
    pub kind: StructureKind,
    /// Code sample, as display text.
    pub code: &'static str,
    /// Ordered narration steps.
    pub steps: &'static [Step],
}

/// Returns the catalog entries for one structure, in catalog order.
///
/// # Examples
///
/// ```
/// use dsa_ops::catalog::{self, StructureKind};
///
/// let titles: Vec<&str> = catalog::entries(StructureKind::Tree)
///     .map(|algorithm| algorithm.title)
///     .collect();
/// assert_eq!(titles.len(), 4);
/// assert_eq!(titles[0], "Binary Tree Insertion");
/// ```
pub fn entries(kind: StructureKind) -> impl Iterator<Item = &'static Algorithm> {
    CATALOG.iter().filter(move |algorithm| algorithm.kind == kind)
}

/// Every cataloged operation, grouped by structure.
pub static CATALOG: [Algorithm; 12] = [
    Algorithm {
        title: "Array Insertion",
        description: "Insert a new element into an array at a specific index, \
                      shifting existing elements to make space.",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        kind: StructureKind::Array,
        code: "\
pub fn insert_at(arr: &[i32], index: usize, element: i32) -> Result<Vec<i32>> {
    if index > arr.len() {
        return Err(OpsError::IndexOutOfRange { index, len: arr.len() });
    }

    let mut out = Vec::with_capacity(arr.len() + 1);
    out.extend_from_slice(&arr[..index]);
    out.push(element);
    out.extend_from_slice(&arr[index..]);

    Ok(out)
}",
        steps: &[
            Step {
                title: "Select Insert Position",
                description: "Identify the position where the new element will be inserted.",
            },
            Step {
                title: "Insert Element",
                description: "Create space and insert the new element at the specified position.",
            },
            Step {
                title: "Complete Operation",
                description: "The new element is now in place and the array is ready for more operations.",
            },
        ],
    },
    Algorithm {
        title: "Array Deletion",
        description: "Remove an element from a specific index in the array, \
                      shifting remaining elements to fill the gap.",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        kind: StructureKind::Array,
        code: "\
pub fn delete_at(arr: &[i32], index: usize) -> Result<Vec<i32>> {
    if index >= arr.len() {
        return Err(OpsError::IndexOutOfRange { index, len: arr.len() });
    }

    let mut out = Vec::with_capacity(arr.len() - 1);
    out.extend_from_slice(&arr[..index]);
    out.extend_from_slice(&arr[index + 1..]);

    Ok(out)
}",
        steps: &[
            Step {
                title: "Select Element",
                description: "Identify the element to be removed from the array.",
            },
            Step {
                title: "Remove Element",
                description: "Remove the selected element and shift remaining elements.",
            },
            Step {
                title: "Complete Operation",
                description: "The element has been removed and the array is reindexed.",
            },
        ],
    },
    Algorithm {
        title: "Array Search",
        description: "Search for a value in the array using linear search, \
                      returning the index of the first match.",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        kind: StructureKind::Array,
        code: "\
pub fn search(arr: &[i32], target: i32) -> Option<usize> {
    for (i, &elem) in arr.iter().enumerate() {
        if elem == target {
            return Some(i);
        }
    }

    None
}",
        steps: &[
            Step {
                title: "Start Search",
                description: "Begin scanning the array from the first element.",
            },
            Step {
                title: "Compare Elements",
                description: "Compare each element with the target value.",
            },
            Step {
                title: "Complete Search",
                description: "Return the index of the first match, or a not-found result.",
            },
        ],
    },
    Algorithm {
        title: "Array Update",
        description: "Update the value at a specific index in the array, in place.",
        time_complexity: "O(1)",
        space_complexity: "O(1)",
        kind: StructureKind::Array,
        code: "\
pub fn update(arr: &mut [i32], index: usize, new_value: i32) -> bool {
    match arr.get_mut(index) {
        Some(slot) => {
            *slot = new_value;
            true
        }
        None => false,
    }
}",
        steps: &[
            Step {
                title: "Locate Index",
                description: "Check that the index falls within the array's bounds.",
            },
            Step {
                title: "Update Value",
                description: "Overwrite the element at the index with the new value.",
            },
            Step {
                title: "Complete Operation",
                description: "The array now holds the new value at the given index.",
            },
        ],
    },
    Algorithm {
        title: "Linked List Insertion",
        description: "Insert a new node into the linked list at a specific position, \
                      returning the new head.",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        kind: StructureKind::LinkedList,
        code: "\
pub fn insert_node(mut head: Link, value: i32, position: usize) -> Link {
    if position == 0 {
        return Some(Box::new(ListNode { value, next: head }));
    }

    let mut cur = &mut head;
    let mut hops = position - 1;
    loop {
        match cur {
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
}",
        steps: &[
            Step {
                title: "Create Node",
                description: "Create a new node with the given value.",
            },
            Step {
                title: "Find Position",
                description: "Traverse to the node before the insertion position.",
            },
            Step {
                title: "Update Links",
                description: "Splice the new node in by updating the surrounding links.",
            },
            Step {
                title: "Complete Operation",
                description: "Return the head of the updated list.",
            },
        ],
    },
    Algorithm {
        title: "Linked List Deletion",
        description: "Delete a node from the linked list at a specific position, \
                      returning the new head.",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        kind: StructureKind::LinkedList,
        code: "\
pub fn delete_node(mut head: Link, position: usize) -> Link {
    if position == 0 {
        return head.and_then(|mut node| node.next.take());
    }

    let mut cur = &mut head;
    let mut hops = position - 1;
    loop {
        match cur {
            None => break,
            Some(node) if hops == 0 => {
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
}",
        steps: &[
            Step {
                title: "Find Node",
                description: "Traverse to the node before the one to delete.",
            },
            Step {
                title: "Update Links",
                description: "Route the previous node's link around the deleted node.",
            },
            Step {
                title: "Complete Operation",
                description: "Return the head of the updated list.",
            },
        ],
    },
    Algorithm {
        title: "Linked List Search",
        description: "Search for a value in the linked list, returning its position.",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        kind: StructureKind::LinkedList,
        code: "\
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
}",
        steps: &[
            Step {
                title: "Start at Head",
                description: "Begin the traversal at the head of the list.",
            },
            Step {
                title: "Compare Values",
                description: "Compare each node's value with the target, counting positions.",
            },
            Step {
                title: "Complete Search",
                description: "Return the position of the first match, or a not-found result.",
            },
        ],
    },
    Algorithm {
        title: "Linked List Update",
        description: "Update the value of a node at a specific position, in place.",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        kind: StructureKind::LinkedList,
        code: "\
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
}",
        steps: &[
            Step {
                title: "Find Node",
                description: "Traverse to the node at the specified position.",
            },
            Step {
                title: "Update Value",
                description: "Change the node's value to the new value.",
            },
            Step {
                title: "Complete Operation",
                description: "The node's value has been updated.",
            },
        ],
    },
    Algorithm {
        title: "Binary Tree Insertion",
        description: "Insert a new node into a binary search tree while maintaining \
                      the BST property.",
        time_complexity: "O(h) where h is height",
        space_complexity: "O(h) where h is height",
        kind: StructureKind::Tree,
        code: "\
pub fn insert(root: Tree, value: i32) -> Tree {
    match root {
        None => Some(Box::new(TreeNode::new(value))),
        Some(mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => node.left = insert(node.left.take(), value),
                Ordering::Greater => node.right = insert(node.right.take(), value),
                Ordering::Equal => {}
            }
            Some(node)
        }
    }
}",
        steps: &[
            Step {
                title: "Check Empty Tree",
                description: "If tree is empty, create new root node.",
            },
            Step {
                title: "Compare Values",
                description: "Compare new value with current node.",
            },
            Step {
                title: "Recursive Insert",
                description: "Recursively insert into left or right subtree.",
            },
            Step {
                title: "Complete Operation",
                description: "Return the updated tree structure.",
            },
        ],
    },
    Algorithm {
        title: "Binary Tree Deletion",
        description: "Delete a node from a binary search tree while maintaining \
                      the BST property.",
        time_complexity: "O(h) where h is height",
        space_complexity: "O(h) where h is height",
        kind: StructureKind::Tree,
        code: "\
pub fn delete(root: Tree, value: i32) -> Tree {
    let mut node = match root {
        None => return None,
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            node.left = delete(node.left.take(), value);
            Some(node)
        }
        Ordering::Greater => {
            node.right = delete(node.right.take(), value);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, Some(right)) => {
                node.value = min_value(&right);
                node.left = left;
                node.right = delete(Some(right), node.value);
                Some(node)
            }
        },
    }
}",
        steps: &[
            Step {
                title: "Find Node",
                description: "Locate the node to be deleted.",
            },
            Step {
                title: "Handle Leaf Node",
                description: "If node has no children, simply remove it.",
            },
            Step {
                title: "Handle Single Child",
                description: "If node has one child, replace with child.",
            },
            Step {
                title: "Handle Two Children",
                description: "If node has two children, find inorder successor.",
            },
            Step {
                title: "Complete Operation",
                description: "Return the updated tree structure.",
            },
        ],
    },
    Algorithm {
        title: "Binary Tree Search",
        description: "Search for a value in a binary search tree.",
        time_complexity: "O(h) where h is height",
        space_complexity: "O(h) where h is height",
        kind: StructureKind::Tree,
        code: "\
pub fn search(root: Option<&TreeNode>, value: i32) -> Option<&TreeNode> {
    let node = root?;
    match value.cmp(&node.value) {
        Ordering::Less => search(node.left.as_deref(), value),
        Ordering::Greater => search(node.right.as_deref(), value),
        Ordering::Equal => Some(node),
    }
}",
        steps: &[
            Step {
                title: "Check Root",
                description: "Check if root is empty or contains target value.",
            },
            Step {
                title: "Compare Values",
                description: "Compare target with current node value.",
            },
            Step {
                title: "Recursive Search",
                description: "Search in appropriate subtree.",
            },
            Step {
                title: "Complete Search",
                description: "Return found node or a not-found result.",
            },
        ],
    },
    Algorithm {
        title: "Binary Tree Traversal",
        description: "Traverse a binary tree using different methods \
                      (inorder, preorder, postorder).",
        time_complexity: "O(n)",
        space_complexity: "O(h) where h is height",
        kind: StructureKind::Tree,
        code: "\
// In-order: left, node, right — sorted order on a BST.
let in_order: Vec<i32> = traverse(root.as_deref(), Order::InOrder).collect();

// Pre-order: node, left, right.
let pre_order: Vec<i32> = traverse(root.as_deref(), Order::PreOrder).collect();

// Post-order: left, right, node.
let post_order: Vec<i32> = traverse(root.as_deref(), Order::PostOrder).collect();",
        steps: &[
            Step {
                title: "Inorder Traversal",
                description: "Visit left subtree, then root, then right subtree.",
            },
            Step {
                title: "Preorder Traversal",
                description: "Visit root, then left subtree, then right subtree.",
            },
            Step {
                title: "Postorder Traversal",
                description: "Visit left subtree, then right subtree, then root.",
            },
            Step {
                title: "Complete Traversal",
                description: "Yield all nodes in the specified order.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_entries_per_structure() {
        assert_eq!(entries(StructureKind::Array).count(), 4);
        assert_eq!(entries(StructureKind::LinkedList).count(), 4);
        assert_eq!(entries(StructureKind::Tree).count(), 4);
    }

    #[test]
    fn test_entries_are_fully_populated() {
        for algorithm in &CATALOG {
            assert!(!algorithm.title.is_empty());
            assert!(!algorithm.description.is_empty());
            assert!(!algorithm.time_complexity.is_empty());
            assert!(!algorithm.space_complexity.is_empty());
            assert!(!algorithm.code.is_empty());
            assert!(!algorithm.steps.is_empty());
        }
    }

    #[test]
    fn test_catalog_order_groups_by_structure() {
        let kinds: Vec<StructureKind> = CATALOG.iter().map(|a| a.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|kind| match kind {
            StructureKind::Array => 0,
            StructureKind::LinkedList => 1,
            StructureKind::Tree => 2,
        });
        assert_eq!(kinds, sorted);
    }
}
