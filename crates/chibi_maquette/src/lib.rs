//! Maquette - the vnode model for chibi.
//!
//! A maquette is the small model a sculptor builds before the real piece.
//! Vnodes play the same role for the host UI tree: render functions build
//! them, and the patch algorithm compares them against the previous tree to
//! decide which host nodes to touch.
//!
//! - [`shape`]: classification of a vnode into [`ShapeFlags`]
//! - [`vnode`]: the vnode record and its factory functions
//! - [`render_context`]: the instance currently rendering on this thread
//!
//! # Example
//!
//! ```
//! use chibi_maquette::{create_vnode, ShapeFlags, VNode, VNodeChild};
//!
//! let vnode: VNode<()> = create_vnode("div", None, vec![VNodeChild::from("bar")]);
//! assert_eq!(vnode.shape_flag, ShapeFlags::ELEMENT | ShapeFlags::ARRAY_CHILDREN);
//! assert!(vnode.key.is_none());
//! ```

pub mod instance;
pub mod render_context;
pub mod shape;
pub mod vnode;

pub use chibi_carton::ShapeFlags;

pub use instance::{AppContext, ComponentDescriptor, DirectiveBinding, InstanceHandle};
pub use render_context::{
    current_rendering_instance, set_current_rendering_instance, RenderingInstanceGuard,
};
pub use shape::{normalize_children, type_shape_flag};
pub use vnode::*;
