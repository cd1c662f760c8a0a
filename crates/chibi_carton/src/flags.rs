//! Bit flags shared between the compiler and the runtime.

use crate::bitflags;

bitflags! {
    /// Classification of a vnode by what its `type` is and what its
    /// children are.
    ///
    /// `ELEMENT` and `COMPONENT` form the type class, the `*_CHILDREN` bits
    /// form the children class. A vnode carries at most one bit of each class.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    pub struct ShapeFlags: u32 {
        /// Host element (`type` is a tag name)
        const ELEMENT = 1;
        /// Component (`type` is a component descriptor)
        const COMPONENT = 1 << 2;
        /// Children are a single string
        const TEXT_CHILDREN = 1 << 3;
        /// Children are an ordered sequence
        const ARRAY_CHILDREN = 1 << 4;
        /// Children are a slot mapping
        const SLOTS_CHILDREN = 1 << 5;
    }
}

impl ShapeFlags {
    /// Mask covering the type-class bits.
    pub const TYPE_CLASS: Self = Self::ELEMENT.union(Self::COMPONENT);

    /// Mask covering the children-class bits.
    pub const CHILDREN_CLASS: Self = Self::TEXT_CHILDREN
        .union(Self::ARRAY_CHILDREN)
        .union(Self::SLOTS_CHILDREN);

    /// The type-class part of these flags.
    #[inline]
    pub fn type_class(self) -> Self {
        self.intersection(Self::TYPE_CLASS)
    }

    /// The children-class part of these flags.
    #[inline]
    pub fn children_class(self) -> Self {
        self.intersection(Self::CHILDREN_CLASS)
    }
}
