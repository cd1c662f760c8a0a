//! Shape classification.
//!
//! A vnode's [`ShapeFlags`] combine a type-class bit, from what the vnode
//! stands for, with a children-class bit, from the form of its children.

use chibi_carton::{number_to_string, CompactString, FxHashMap, ShapeFlags};

use crate::vnode::{RawChildren, VNode, VNodeChildren, VNodeType, DEFAULT_SLOT};

/// Type-class bit of a vnode type.
///
/// Text and fragment vnodes carry no type-class bit; the renderer recognizes
/// them by their type directly.
pub fn type_shape_flag(node_type: &VNodeType) -> ShapeFlags {
    match node_type {
        VNodeType::Element(_) => ShapeFlags::ELEMENT,
        VNodeType::Component(_) => ShapeFlags::COMPONENT,
        VNodeType::Text | VNodeType::Fragment => ShapeFlags::empty(),
    }
}

/// Store `children` on `vnode` in normalized form and add its children-class
/// bit to `shape_flag`.
///
/// - a render function becomes the default slot
/// - a slot mapping on an element is stored without a bit, since elements
///   never take slots
/// - scalars are stored as text
pub fn normalize_children<H>(vnode: &mut VNode<H>, children: RawChildren<H>) {
    let (children, flag) = match children {
        RawChildren::Null => (VNodeChildren::Null, ShapeFlags::empty()),
        RawChildren::Function(slot) => {
            let mut slots = FxHashMap::default();
            slots.insert(CompactString::const_new(DEFAULT_SLOT), slot);
            (VNodeChildren::Slots(slots), ShapeFlags::SLOTS_CHILDREN)
        }
        RawChildren::Array(children) => (VNodeChildren::Array(children), ShapeFlags::ARRAY_CHILDREN),
        RawChildren::Slots(slots) if vnode.shape_flag.contains(ShapeFlags::ELEMENT) => {
            (VNodeChildren::Slots(slots), ShapeFlags::empty())
        }
        RawChildren::Slots(slots) => (VNodeChildren::Slots(slots), ShapeFlags::SLOTS_CHILDREN),
        RawChildren::Text(text) => (VNodeChildren::Text(text), ShapeFlags::TEXT_CHILDREN),
        RawChildren::Number(n) => (
            VNodeChildren::Text(number_to_string(n).into()),
            ShapeFlags::TEXT_CHILDREN,
        ),
        RawChildren::Bool(b) => (
            VNodeChildren::Text(if b { "true" } else { "false" }.into()),
            ShapeFlags::TEXT_CHILDREN,
        ),
    };
    vnode.children = children;
    vnode.shape_flag |= flag;
}

/// Children-class bit by the coarse text-or-array test the factory applies
/// after [`normalize_children`]. Slot mappings match neither and add nothing.
pub(crate) fn coarse_children_flag<H>(children: &VNodeChildren<H>) -> ShapeFlags {
    match children {
        VNodeChildren::Text(_) => ShapeFlags::TEXT_CHILDREN,
        VNodeChildren::Array(_) => ShapeFlags::ARRAY_CHILDREN,
        VNodeChildren::Null | VNodeChildren::Slots(_) => ShapeFlags::empty(),
    }
}
