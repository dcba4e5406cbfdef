//! Textbook data-structure operations over integers, with a static catalog
//! of presentation metadata for each operation.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod catalog;
pub mod error;
pub mod ops;

/// Data Structure Operations Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{bst, list};

    #[doc(no_inline)]
    pub use crate::catalog::{Algorithm, Step, StructureKind};
    #[doc(no_inline)]
    pub use crate::error::OpsError;
    #[doc(no_inline)]
    pub use crate::ops::linked_list::{Link, ListNode};
    #[doc(no_inline)]
    pub use crate::ops::tree::{Order, Traversal, Tree, TreeNode};
}
