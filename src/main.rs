//! Demo driver: prints every catalog entry, then walks the three structures
//! through the operation sequences the catalog describes.

use dsa_ops::catalog::{Algorithm, CATALOG};
use dsa_ops::error::Result;
use dsa_ops::ops::tree::Order;
use dsa_ops::ops::{array, linked_list, tree};
use dsa_ops::{bst, list};

fn main() -> Result<()> {
    for algorithm in &CATALOG {
        print_algorithm(algorithm);
    }

    array_walkthrough()?;
    list_walkthrough();
    tree_walkthrough();

    Ok(())
}

fn print_algorithm(algorithm: &Algorithm) {
    println!("\n{}", algorithm.title);
    println!("Description: {}", algorithm.description);
    println!("Time Complexity: {}", algorithm.time_complexity);
    println!("Space Complexity: {}", algorithm.space_complexity);
    println!("\nCode:\n{}", algorithm.code);
    println!("\nSteps:");
    for step in algorithm.steps {
        println!("- {}: {}", step.title, step.description);
    }
    println!("----------------------------------------");
}

fn array_walkthrough() -> Result<()> {
    println!("\nArray operations:");

    let arr = vec![10, 20, 30, 40, 50];
    println!("Original array: {arr:?}");

    let arr = array::insert_at(&arr, 2, 35)?;
    println!("After insertion: {arr:?}");

    let mut arr = array::delete_at(&arr, 3)?;
    println!("After deletion: {arr:?}");

    match array::search(&arr, 35) {
        Some(index) => println!("Search result for 35: {index}"),
        None => println!("Search result for 35: not found"),
    }

    array::update(&mut arr, 2, 45);
    println!("After update: {arr:?}");

    Ok(())
}

fn list_walkthrough() {
    println!("\nLinked list operations:");

    let head = list![10 => 20 => 30 => 40];
    print_list(head.as_deref());

    let head = linked_list::insert_node(head, 25, 2);
    print_list(head.as_deref());

    let mut head = linked_list::delete_node(head, 3);
    print_list(head.as_deref());

    match linked_list::search_node(head.as_deref(), 25) {
        Some(position) => println!("Search result for 25: {position}"),
        None => println!("Search result for 25: not found"),
    }

    linked_list::update_node(head.as_deref_mut(), 2, 35);
    print_list(head.as_deref());
}

fn print_list(head: Option<&dsa_ops::ops::linked_list::ListNode>) {
    print!("Linked list: ");
    for value in linked_list::to_vec(head) {
        print!("{value} -> ");
    }
    println!("none");
}

fn tree_walkthrough() {
    println!("\nTree operations:");

    let root = bst![50, 30, 70, 20, 40];

    let in_order: Vec<i32> = tree::traverse(root.as_deref(), Order::InOrder).collect();
    println!("Inorder traversal: {in_order:?}");

    let pre_order: Vec<i32> = tree::traverse(root.as_deref(), Order::PreOrder).collect();
    println!("Preorder traversal: {pre_order:?}");

    let post_order: Vec<i32> = tree::traverse(root.as_deref(), Order::PostOrder).collect();
    println!("Postorder traversal: {post_order:?}");

    let root = tree::delete(root, 30);
    let in_order: Vec<i32> = tree::traverse(root.as_deref(), Order::InOrder).collect();
    println!("Inorder traversal after deleting 30: {in_order:?}");
}
