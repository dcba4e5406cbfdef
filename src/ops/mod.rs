//! Operations over the three cataloged structures.
//!
//! Each submodule is an independent leaf: none depends on another, and none
//! keeps state across calls. Every function is a plain computation over the
//! structure it is handed.

pub mod array;
pub mod linked_list;
pub mod tree;
