//! Handles to values the vnode model references but does not own: component
//! instances, component descriptors, app contexts and directive bindings.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use chibi_carton::CompactString;
use serde_json::{Map, Value};

/// Shared handle to a component instance.
///
/// The instance itself belongs to the renderer; vnodes only keep a handle.
/// Two handles are equal when they point at the same instance.
#[derive(Clone)]
pub struct InstanceHandle(Rc<dyn Any>);

impl InstanceHandle {
    pub fn new<T: 'static>(instance: T) -> Self {
        Self(Rc::new(instance))
    }

    /// Borrow the instance as `T`, if it is one
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl PartialEq for InstanceHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for InstanceHandle {}

impl fmt::Debug for InstanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceHandle({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Component definition a vnode can be created from.
///
/// Component vnode types compare by identity, so descriptors are shared
/// behind an `Rc` and two separately built descriptors never match.
#[derive(Debug, Default)]
pub struct ComponentDescriptor {
    pub name: Option<CompactString>,
    /// Declared props and their defaults
    pub props: Map<String, Value>,
}

impl ComponentDescriptor {
    pub fn new(name: impl Into<CompactString>) -> Rc<Self> {
        Rc::new(Self {
            name: Some(name.into()),
            props: Map::new(),
        })
    }

    pub fn anonymous() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

/// Application-wide context, attached to the root vnode only
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppContext {
    pub global_properties: Map<String, Value>,
    pub provides: Map<String, Value>,
}

/// A directive applied to a vnode
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveBinding {
    pub name: CompactString,
    pub value: Value,
    pub old_value: Value,
    pub arg: Option<CompactString>,
}

impl DirectiveBinding {
    pub fn new(name: impl Into<CompactString>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            old_value: Value::Null,
            arg: None,
        }
    }
}
