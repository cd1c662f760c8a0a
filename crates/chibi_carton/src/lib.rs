//! Carton - The shared toolbox for chibi.
//!
//! This crate holds the foundational pieces shared by the template compiler
//! and the vnode runtime: arena-allocated collections for AST construction,
//! compact strings, fast hash maps, and the shape flag bit set.
//!
//! # Example
//!
//! ```
//! use chibi_carton::{Box, Bump, Vec};
//!
//! let allocator = Bump::new();
//!
//! let boxed = Box::new_in(42, &allocator);
//! assert_eq!(*boxed, 42);
//!
//! let mut vec = Vec::new_in(&allocator);
//! vec.push(1);
//! vec.push(2);
//! assert_eq!(vec.len(), 2);
//! ```

pub mod flags;
pub mod general;

// Re-export arena types
pub use bumpalo::boxed::Box;
pub use bumpalo::collections::Vec;
pub use bumpalo::Bump;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export bitflags for flag types
pub use bitflags::bitflags;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

pub use flags::*;
pub use general::*;
