//! The vnode record and its factory functions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chibi_carton::{CompactString, FxHashMap, ShapeFlags};
use serde_json::{Map, Value};

use crate::instance::{AppContext, ComponentDescriptor, DirectiveBinding, InstanceHandle};
use crate::render_context::current_rendering_instance;
use crate::shape::{coarse_children_flag, normalize_children, type_shape_flag};

/// Props passed to a vnode, keyed by name
pub type VNodeProps = Map<String, Value>;

/// What a vnode stands for
#[derive(Debug, Clone)]
pub enum VNodeType {
    /// Host element, by tag name
    Element(CompactString),
    /// Host text node
    Text,
    /// Children mounted in place without a wrapper element
    Fragment,
    Component(Rc<ComponentDescriptor>),
}

/// Tags compare by value, components by identity.
impl PartialEq for VNodeType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => a == b,
            (Self::Text, Self::Text) | (Self::Fragment, Self::Fragment) => true,
            (Self::Component(a), Self::Component(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for VNodeType {}

impl From<&str> for VNodeType {
    fn from(tag: &str) -> Self {
        Self::Element(tag.into())
    }
}

impl From<CompactString> for VNodeType {
    fn from(tag: CompactString) -> Self {
        Self::Element(tag)
    }
}

impl From<Rc<ComponentDescriptor>> for VNodeType {
    fn from(component: Rc<ComponentDescriptor>) -> Self {
        Self::Component(component)
    }
}

/// Identity of a vnode among its siblings.
///
/// Keys compare strictly: a key only equals a key of the same kind, so
/// `true` and `"true"` are different keys. Numbers compare by value across
/// `Int` and `Number`, `NaN` never equals anything, and object keys compare
/// by identity.
#[derive(Debug, Clone)]
pub enum VNodeKey {
    String(CompactString),
    Int(i64),
    Number(f64),
    Bool(bool),
    /// An array or object key, shared by clones of the vnode
    Object(Rc<Value>),
}

impl VNodeKey {
    /// Read a key out of a props value. `null` means the vnode has no key.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::String(s.as_str().into())),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::Bool(b) => Some(Self::Bool(*b)),
            other => Some(Self::Object(Rc::new(other.clone()))),
        }
    }
}

impl PartialEq for VNodeKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Int(a), Self::Number(b)) | (Self::Number(b), Self::Int(a)) => *a as f64 == *b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for VNodeKey {
    fn from(key: &str) -> Self {
        Self::String(key.into())
    }
}

impl From<i64> for VNodeKey {
    fn from(key: i64) -> Self {
        Self::Int(key)
    }
}

/// A render function for a slot
pub struct Slot<H>(Rc<dyn Fn() -> Vec<VNodeChild<H>>>);

impl<H> Slot<H> {
    pub fn new(render: impl Fn() -> Vec<VNodeChild<H>> + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn call(&self) -> Vec<VNodeChild<H>> {
        (self.0)()
    }
}

impl<H> Clone for Slot<H> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<H> PartialEq for Slot<H> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl<H> fmt::Debug for Slot<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Named slots
pub type Slots<H> = FxHashMap<CompactString, Slot<H>>;

/// Name of the slot a bare render function is filed under
pub const DEFAULT_SLOT: &str = "default";

/// One entry of an array of children
#[derive(Debug)]
pub enum VNodeChild<H> {
    VNode(Rc<VNode<H>>),
    /// Kept as a string until mount time, see [`normalize_vnode`]
    Text(CompactString),
    /// Nested array, mounted as a fragment
    Array(Vec<VNodeChild<H>>),
}

impl<H> Clone for VNodeChild<H> {
    fn clone(&self) -> Self {
        match self {
            Self::VNode(vnode) => Self::VNode(Rc::clone(vnode)),
            Self::Text(text) => Self::Text(text.clone()),
            Self::Array(children) => Self::Array(children.clone()),
        }
    }
}

impl<H: PartialEq> PartialEq for VNodeChild<H> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::VNode(a), Self::VNode(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl<H> From<&str> for VNodeChild<H> {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl<H> From<VNode<H>> for VNodeChild<H> {
    fn from(vnode: VNode<H>) -> Self {
        Self::VNode(Rc::new(vnode))
    }
}

impl<H> From<Rc<VNode<H>>> for VNodeChild<H> {
    fn from(vnode: Rc<VNode<H>>) -> Self {
        Self::VNode(vnode)
    }
}

impl<H> From<Vec<VNodeChild<H>>> for VNodeChild<H> {
    fn from(children: Vec<VNodeChild<H>>) -> Self {
        Self::Array(children)
    }
}

/// Children as handed to [`create_vnode`], before classification
#[derive(Debug)]
pub enum RawChildren<H> {
    Null,
    Text(CompactString),
    Number(f64),
    Bool(bool),
    Array(Vec<VNodeChild<H>>),
    /// A keyed mapping of slots
    Slots(Slots<H>),
    /// A bare render function, filed as the default slot
    Function(Slot<H>),
}

impl<H> From<&str> for RawChildren<H> {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl<H> From<String> for RawChildren<H> {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl<H> From<CompactString> for RawChildren<H> {
    fn from(text: CompactString) -> Self {
        Self::Text(text)
    }
}

impl<H> From<f64> for RawChildren<H> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl<H> From<i32> for RawChildren<H> {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl<H> From<bool> for RawChildren<H> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<H> From<Vec<VNodeChild<H>>> for RawChildren<H> {
    fn from(children: Vec<VNodeChild<H>>) -> Self {
        Self::Array(children)
    }
}

impl<H> From<Slots<H>> for RawChildren<H> {
    fn from(slots: Slots<H>) -> Self {
        Self::Slots(slots)
    }
}

impl<H> From<Slot<H>> for RawChildren<H> {
    fn from(slot: Slot<H>) -> Self {
        Self::Function(slot)
    }
}

impl<H> From<Option<RawChildren<H>>> for RawChildren<H> {
    fn from(children: Option<RawChildren<H>>) -> Self {
        children.unwrap_or(Self::Null)
    }
}

/// Children of a vnode after classification
#[derive(Debug)]
pub enum VNodeChildren<H> {
    Null,
    Text(CompactString),
    Array(Vec<VNodeChild<H>>),
    Slots(Slots<H>),
}

impl<H> VNodeChildren<H> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[VNodeChild<H>]> {
        match self {
            Self::Array(children) => Some(children.as_slice()),
            _ => None,
        }
    }
}

impl<H> Clone for VNodeChildren<H> {
    fn clone(&self) -> Self {
        match self {
            Self::Null => Self::Null,
            Self::Text(text) => Self::Text(text.clone()),
            Self::Array(children) => Self::Array(children.clone()),
            Self::Slots(slots) => Self::Slots(slots.clone()),
        }
    }
}

impl<H: PartialEq> PartialEq for VNodeChildren<H> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Slots(a), Self::Slots(b)) => a == b,
            _ => false,
        }
    }
}

/// One node of the virtual tree.
///
/// `el`, `anchor` and `component` stay empty until the renderer mounts the
/// vnode; they sit behind `RefCell` so a vnode shared through `Rc` can still
/// be mounted. `H` is the renderer's host node handle.
#[derive(Debug)]
pub struct VNode<H> {
    pub node_type: VNodeType,
    pub props: Option<Rc<VNodeProps>>,
    pub key: Option<VNodeKey>,
    /// Template ref binding, from `props.ref`
    pub node_ref: Option<Value>,
    pub children: VNodeChildren<H>,
    pub shape_flag: ShapeFlags,
    pub component: RefCell<Option<InstanceHandle>>,
    pub dirs: Option<Rc<Vec<DirectiveBinding>>>,
    pub el: RefCell<Option<H>>,
    /// Fragment end anchor
    pub anchor: RefCell<Option<H>>,
    /// Instance that was rendering when this vnode was created
    pub ctx: Option<InstanceHandle>,
    /// Set on the application root only
    pub app_context: Option<Rc<AppContext>>,
}

impl<H> VNode<H> {
    /// A vnode counts as mounted once it is bound to a host node
    pub fn is_mounted(&self) -> bool {
        self.el.borrow().is_some()
    }
}

/// Structural equality; instance handles compare by identity.
impl<H: PartialEq> PartialEq for VNode<H> {
    fn eq(&self, other: &Self) -> bool {
        self.node_type == other.node_type
            && self.props == other.props
            && self.key == other.key
            && self.node_ref == other.node_ref
            && self.children == other.children
            && self.shape_flag == other.shape_flag
            && self.component == other.component
            && self.dirs == other.dirs
            && self.el == other.el
            && self.anchor == other.anchor
            && self.ctx == other.ctx
            && self.app_context == other.app_context
    }
}

/// Create a vnode.
///
/// `key` and `node_ref` are read from `props.key` and `props.ref`, and `ctx`
/// is the instance rendering on this thread at the time of the call.
pub fn create_vnode<H>(
    node_type: impl Into<VNodeType>,
    props: Option<VNodeProps>,
    children: impl Into<RawChildren<H>>,
) -> VNode<H> {
    let node_type = node_type.into();
    let shape_flag = type_shape_flag(&node_type);
    create_base_vnode(node_type, props, children.into(), shape_flag)
}

/// Same as [`create_vnode`]; compiled templates call it for host elements.
pub fn create_element_vnode<H>(
    node_type: impl Into<VNodeType>,
    props: Option<VNodeProps>,
    children: impl Into<RawChildren<H>>,
) -> VNode<H> {
    create_vnode(node_type, props, children)
}

fn create_base_vnode<H>(
    node_type: VNodeType,
    props: Option<VNodeProps>,
    children: RawChildren<H>,
    shape_flag: ShapeFlags,
) -> VNode<H> {
    let key = props
        .as_ref()
        .and_then(|props| props.get("key"))
        .and_then(VNodeKey::from_value);
    let node_ref = props
        .as_ref()
        .and_then(|props| props.get("ref"))
        .filter(|value| !value.is_null())
        .cloned();

    let mut vnode = VNode {
        node_type,
        props: props.map(Rc::new),
        key,
        node_ref,
        children: VNodeChildren::Null,
        shape_flag,
        component: RefCell::new(None),
        dirs: None,
        el: RefCell::new(None),
        anchor: RefCell::new(None),
        ctx: current_rendering_instance(),
        app_context: None,
    };

    normalize_children(&mut vnode, children);
    vnode.shape_flag |= coarse_children_flag(&vnode.children);

    vnode
}

/// Create a text vnode; `None` stands for a single space
pub fn create_text_vnode<H>(text: Option<&str>) -> VNode<H> {
    create_vnode(VNodeType::Text, None, text.unwrap_or(" "))
}

/// Turn a child into a vnode ready to mount.
///
/// Strings become text vnodes, nested arrays become fragments and vnodes
/// pass through [`clone_if_mounted`].
pub fn normalize_vnode<H: Clone>(child: &VNodeChild<H>) -> Rc<VNode<H>> {
    match child {
        VNodeChild::VNode(vnode) => clone_if_mounted(vnode),
        VNodeChild::Text(text) => Rc::new(create_vnode(VNodeType::Text, None, text.clone())),
        VNodeChild::Array(children) => Rc::new(create_vnode(
            VNodeType::Fragment,
            None,
            RawChildren::Array(children.clone()),
        )),
    }
}

/// The vnode itself while unmounted, otherwise a fresh clone so a new render
/// never aliases host bindings of the previous one.
pub fn clone_if_mounted<H: Clone>(vnode: &Rc<VNode<H>>) -> Rc<VNode<H>> {
    if vnode.is_mounted() {
        Rc::new(clone_vnode(vnode))
    } else {
        Rc::clone(vnode)
    }
}

/// Copy a vnode. Array children are cloned recursively; props, directives
/// and host bindings are shared with the original.
pub fn clone_vnode<H: Clone>(vnode: &VNode<H>) -> VNode<H> {
    let children = match &vnode.children {
        VNodeChildren::Array(children) => VNodeChildren::Array(clone_children(children)),
        other => other.clone(),
    };

    VNode {
        node_type: vnode.node_type.clone(),
        props: vnode.props.clone(),
        key: vnode.key.clone(),
        node_ref: vnode.node_ref.clone(),
        children,
        shape_flag: vnode.shape_flag,
        component: RefCell::new(vnode.component.borrow().clone()),
        dirs: vnode.dirs.clone(),
        el: RefCell::new(vnode.el.borrow().clone()),
        anchor: RefCell::new(vnode.anchor.borrow().clone()),
        ctx: vnode.ctx.clone(),
        app_context: vnode.app_context.clone(),
    }
}

fn clone_children<H: Clone>(children: &[VNodeChild<H>]) -> Vec<VNodeChild<H>> {
    children
        .iter()
        .map(|child| match child {
            VNodeChild::VNode(vnode) => VNodeChild::VNode(Rc::new(clone_vnode(vnode))),
            VNodeChild::Text(text) => VNodeChild::Text(text.clone()),
            VNodeChild::Array(nested) => VNodeChild::Array(clone_children(nested)),
        })
        .collect()
}

/// Whether the patch algorithm may update `b` in place of `a`
pub fn is_same_vnode_type<H>(a: &VNode<H>, b: &VNode<H>) -> bool {
    a.node_type == b.node_type && a.key == b.key
}

/// Whether a child is already a vnode
pub fn is_vnode<H>(child: &VNodeChild<H>) -> bool {
    matches!(child, VNodeChild::VNode(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Host = u32;

    fn props(value: Value) -> Option<VNodeProps> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[test]
    fn test_element_with_text_children() {
        let vnode: VNode<Host> = create_vnode("div", props(json!({ "id": "foo" })), "bar");
        assert_eq!(vnode.node_type, VNodeType::from("div"));
        assert_eq!(vnode.children.as_text(), Some("bar"));
        assert_eq!(vnode.shape_flag, ShapeFlags::ELEMENT | ShapeFlags::TEXT_CHILDREN);
        assert_eq!(vnode.props.as_deref(), props(json!({ "id": "foo" })).as_ref());
        assert!(vnode.key.is_none());
        assert!(vnode.ctx.is_none());
        assert!(!vnode.is_mounted());
    }

    #[test]
    fn test_key_and_ref_from_props() {
        let vnode: VNode<Host> =
            create_vnode("li", props(json!({ "key": 3, "ref": "item" })), RawChildren::Null);
        assert_eq!(vnode.key, Some(VNodeKey::Int(3)));
        assert_eq!(vnode.node_ref, Some(json!("item")));

        let vnode: VNode<Host> =
            create_vnode("li", props(json!({ "key": null, "ref": null })), RawChildren::Null);
        assert!(vnode.key.is_none());
        assert!(vnode.node_ref.is_none());
    }

    #[test]
    fn test_key_coercion() {
        assert_eq!(VNodeKey::from_value(&json!("a")), Some(VNodeKey::from("a")));
        assert_eq!(VNodeKey::from_value(&json!(-7)), Some(VNodeKey::Int(-7)));
        assert_eq!(VNodeKey::from_value(&json!(1.5)), Some(VNodeKey::Number(1.5)));
        assert_eq!(VNodeKey::from_value(&json!(true)), Some(VNodeKey::Bool(true)));
        assert_eq!(VNodeKey::from_value(&Value::Null), None);
    }

    #[test]
    fn test_keys_compare_strictly() {
        let key = |value: Value| VNodeKey::from_value(&value);
        assert_ne!(key(json!(true)), key(json!("true")));
        assert_ne!(key(json!(1.5)), key(json!("1.5")));
        assert_ne!(key(json!(1)), key(json!("1")));
        assert_eq!(key(json!(2)), key(json!(2.0)));
        assert_ne!(Some(VNodeKey::Number(f64::NAN)), Some(VNodeKey::Number(f64::NAN)));

        // object keys are equal only to themselves
        let object = key(json!({ "id": 1 }));
        assert_ne!(object, key(json!({ "id": 1 })));
        assert_eq!(object.clone(), object);
    }

    #[test]
    fn test_bool_key_differs_from_string_key() {
        let a: VNode<Host> = create_vnode("li", props(json!({ "key": true })), RawChildren::Null);
        let b: VNode<Host> = create_vnode("li", props(json!({ "key": "true" })), RawChildren::Null);
        assert!(!is_same_vnode_type(&a, &b));

        let c: VNode<Host> = create_vnode("li", props(json!({ "key": true })), RawChildren::Null);
        assert!(is_same_vnode_type(&a, &c));
    }

    #[test]
    fn test_text_vnode_defaults_to_space() {
        let vnode: VNode<Host> = create_text_vnode(None);
        assert_eq!(vnode.node_type, VNodeType::Text);
        assert_eq!(vnode.children.as_text(), Some(" "));
        assert_eq!(vnode.shape_flag, ShapeFlags::TEXT_CHILDREN);

        let vnode: VNode<Host> = create_text_vnode(Some("hi"));
        assert_eq!(vnode.children.as_text(), Some("hi"));
    }

    #[test]
    fn test_element_vnode_alias() {
        let a: VNode<Host> = create_element_vnode("p", None, "x");
        let b: VNode<Host> = create_vnode("p", None, "x");
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_vnode_type() {
        let keyed = |tag: &str, key: i64| -> VNode<Host> {
            create_vnode(tag, props(json!({ "key": key })), RawChildren::Null)
        };
        assert!(is_same_vnode_type(&keyed("div", 1), &keyed("div", 1)));
        assert!(!is_same_vnode_type(&keyed("div", 1), &keyed("div", 2)));
        assert!(!is_same_vnode_type(&keyed("div", 1), &keyed("span", 1)));

        let comp = ComponentDescriptor::new("Comp");
        let other = ComponentDescriptor::new("Comp");
        let a: VNode<Host> = create_vnode(Rc::clone(&comp), None, RawChildren::Null);
        let b: VNode<Host> = create_vnode(comp, None, RawChildren::Null);
        let c: VNode<Host> = create_vnode(other, None, RawChildren::Null);
        assert!(is_same_vnode_type(&a, &b));
        assert!(!is_same_vnode_type(&a, &c));
    }

    #[test]
    fn test_clone_if_mounted_identity() {
        let vnode: Rc<VNode<Host>> = Rc::new(create_vnode("div", None, "a"));
        assert!(Rc::ptr_eq(&clone_if_mounted(&vnode), &vnode));

        *vnode.el.borrow_mut() = Some(7);
        let cloned = clone_if_mounted(&vnode);
        assert!(!Rc::ptr_eq(&cloned, &vnode));
        assert_eq!(*cloned, *vnode);
        assert_eq!(*cloned.el.borrow(), Some(7));
    }

    #[test]
    fn test_normalize_vnode() {
        let text = normalize_vnode::<Host>(&VNodeChild::from("bar"));
        assert_eq!(text.node_type, VNodeType::Text);
        assert_eq!(text.children.as_text(), Some("bar"));

        let nested = VNodeChild::Array(vec![VNodeChild::from("a"), VNodeChild::from("b")]);
        let fragment = normalize_vnode::<Host>(&nested);
        assert_eq!(fragment.node_type, VNodeType::Fragment);
        assert_eq!(fragment.shape_flag, ShapeFlags::ARRAY_CHILDREN);
        assert_eq!(fragment.children.as_array().map(<[_]>::len), Some(2));

        let vnode = Rc::new(create_vnode::<Host>("p", None, RawChildren::Null));
        let child = VNodeChild::VNode(Rc::clone(&vnode));
        assert!(is_vnode(&child));
        assert!(Rc::ptr_eq(&normalize_vnode(&child), &vnode));
    }

    #[test]
    fn test_ctx_is_captured_from_rendering_instance() {
        use crate::render_context::RenderingInstanceGuard;

        let instance = InstanceHandle::new("App");
        let vnode: VNode<Host> = {
            let _guard = RenderingInstanceGuard::enter(instance.clone());
            create_vnode("div", None, RawChildren::Null)
        };
        assert_eq!(vnode.ctx, Some(instance));

        let outside: VNode<Host> = create_vnode("div", None, RawChildren::Null);
        assert!(outside.ctx.is_none());
    }
}
