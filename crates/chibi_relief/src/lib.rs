//! Relief - The AST surface for chibi templates.
//!
//! The parser and transform passes live outside this workspace. They hand the
//! code generator an immutable, arena-allocated tree made of the node types
//! defined here, with every element already carrying its codegen node.

pub mod ast;
pub mod options;

pub use ast::*;
pub use options::*;
