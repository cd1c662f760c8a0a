//! Atelier Core - render function code generation for chibi templates.
//!
//! This crate takes the AST handed over by the parser and transform passes
//! and emits the source text of a render function:
//!
//! - [`codegen`]: the code generator and its output accumulator
//! - [`runtime_helpers`]: the process-wide helper name registry

pub mod codegen;
pub mod runtime_helpers;

// Re-export the AST surface this crate consumes
pub use chibi_relief::{ast, options};

pub use codegen::{generate, CodegenContext, CodegenResult, Mapping};
pub use runtime_helpers::{helper_name, is_registered, register_runtime_helpers, RuntimeHelpers};
