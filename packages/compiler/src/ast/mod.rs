//! Template AST
//!
//! Node definitions, builders, and the primitive predicates the rest of the
//! compiler dispatches on.

pub mod builders;
pub mod nodes;
pub mod util;

pub use builders::*;
pub use nodes::*;
pub use util::{append_child, children_for, is_helper, uses_morph};
