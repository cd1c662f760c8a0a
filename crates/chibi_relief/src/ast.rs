//! Template AST node types consumed by codegen.
//!
//! All nodes are allocated in a bumpalo arena. The tree is produced by the
//! parser and transform passes and is treated as immutable by the code
//! generator.

use std::sync::atomic::{AtomicU32, Ordering};

use chibi_carton::{Box, Bump, String, Vec};
use serde::{Deserialize, Serialize};

/// Node type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Root = 0,
    Element = 1,
    Text = 2,
    SimpleExpression = 4,
    Interpolation = 5,
    CompoundExpression = 8,
    // Codegen nodes
    VNodeCall = 13,
    JsObjectExpression = 15,
    JsProperty = 16,
    JsArrayExpression = 17,
}

/// Source position in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// Byte offset from start of file
    pub offset: u32,
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number
    pub column: u32,
}

impl Position {
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Source location span [start, end)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::STUB
    }
}

impl SourceLocation {
    /// Stub location for generated nodes
    pub const STUB: Self = Self {
        start: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        end: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        source: String::const_new(""),
    };

    pub fn new(start: Position, end: Position, source: impl Into<String>) -> Self {
        Self {
            start,
            end,
            source: source.into(),
        }
    }

    /// Whether this location points at real template source.
    pub fn is_stub(&self) -> bool {
        self.source.is_empty() && self.start == self.end
    }
}

// ============================================================================
// Runtime Helpers
// ============================================================================

/// Opaque identity of a runtime helper function.
///
/// Generated code never spells helper names directly; it refers to helpers by
/// identity and asks the registry for the display name at emission time.
/// Identities are unique per process, so a user identifier can never collide
/// with a helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuntimeHelper(u32);

static NEXT_HELPER_ID: AtomicU32 = AtomicU32::new(RuntimeHelper::BUILTINS.len() as u32);

impl RuntimeHelper {
    pub const FRAGMENT: Self = Self(0);
    pub const CREATE_VNODE: Self = Self(1);
    pub const CREATE_ELEMENT_VNODE: Self = Self(2);
    pub const RESOLVE_COMPONENT: Self = Self(3);
    pub const WITH_DIRECTIVES: Self = Self(4);
    pub const RENDER_LIST: Self = Self(5);
    pub const TO_DISPLAY_STRING: Self = Self(6);
    pub const TO_HANDLER_KEY: Self = Self(7);
    pub const UNREF: Self = Self(8);

    /// Built-in helpers and their runtime names.
    pub const BUILTINS: [(Self, &'static str); 9] = [
        (Self::FRAGMENT, "Fragment"),
        (Self::CREATE_VNODE, "createVNode"),
        (Self::CREATE_ELEMENT_VNODE, "createElementVNode"),
        (Self::RESOLVE_COMPONENT, "resolveComponent"),
        (Self::WITH_DIRECTIVES, "withDirectives"),
        (Self::RENDER_LIST, "renderList"),
        (Self::TO_DISPLAY_STRING, "toDisplayString"),
        (Self::TO_HANDLER_KEY, "toHandlerKey"),
        (Self::UNREF, "unref"),
    ];

    /// Mint a fresh helper identity, distinct from every built-in and from
    /// every identity minted before.
    pub fn unique() -> Self {
        Self(NEXT_HELPER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Numeric identity, stable for the lifetime of the process.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Whether this is one of the built-in helpers.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        (self.0 as usize) < Self::BUILTINS.len()
    }
}

// ============================================================================
// Root
// ============================================================================

/// Root AST node
#[derive(Debug)]
pub struct RootNode<'a> {
    pub children: Vec<'a, TemplateChildNode<'a>>,
    /// Helpers the transform passes decided the render function needs
    pub helpers: Vec<'a, RuntimeHelper>,
    pub source: String,
    pub loc: SourceLocation,
}

impl<'a> RootNode<'a> {
    pub fn new(allocator: &'a Bump, source: impl Into<String>) -> Self {
        Self {
            children: Vec::new_in(allocator),
            helpers: Vec::new_in(allocator),
            source: source.into(),
            loc: SourceLocation::STUB,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Root
    }
}

// ============================================================================
// Template Nodes
// ============================================================================

/// All template child node types
#[derive(Debug)]
pub enum TemplateChildNode<'a> {
    Element(Box<'a, ElementNode<'a>>),
    Text(Box<'a, TextNode>),
    Interpolation(Box<'a, InterpolationNode<'a>>),
    CompoundExpression(Box<'a, CompoundExpressionNode<'a>>),
}

impl<'a> TemplateChildNode<'a> {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Element(_) => NodeType::Element,
            Self::Text(_) => NodeType::Text,
            Self::Interpolation(_) => NodeType::Interpolation,
            Self::CompoundExpression(_) => NodeType::CompoundExpression,
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Element(n) => &n.loc,
            Self::Text(n) => &n.loc,
            Self::Interpolation(n) => &n.loc,
            Self::CompoundExpression(n) => &n.loc,
        }
    }
}

/// Element node
#[derive(Debug)]
pub struct ElementNode<'a> {
    pub tag: String,
    /// Children as parsed; codegen reads `codegen_node` instead
    pub children: Vec<'a, TemplateChildNode<'a>>,
    pub loc: SourceLocation,
    pub codegen_node: Option<ElementCodegenNode<'a>>,
}

impl<'a> ElementNode<'a> {
    pub fn new(allocator: &'a Bump, tag: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new_in(allocator),
            loc,
            codegen_node: None,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Element
    }
}

/// Element codegen node
#[derive(Debug)]
pub enum ElementCodegenNode<'a> {
    VNodeCall(Box<'a, VNodeCall<'a>>),
    /// Reference to hoisted content
    SimpleExpression(Box<'a, SimpleExpressionNode>),
}

/// Text node
#[derive(Debug)]
pub struct TextNode {
    pub content: String,
    pub loc: SourceLocation,
}

impl TextNode {
    pub fn new(content: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Text
    }
}

/// Interpolation node ({{ expr }})
#[derive(Debug)]
pub struct InterpolationNode<'a> {
    pub content: ExpressionNode<'a>,
    pub loc: SourceLocation,
}

impl<'a> InterpolationNode<'a> {
    pub fn new(content: ExpressionNode<'a>, loc: SourceLocation) -> Self {
        Self { content, loc }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Interpolation
    }
}

// ============================================================================
// Expression Nodes
// ============================================================================

/// Expression node types
#[derive(Debug)]
pub enum ExpressionNode<'a> {
    Simple(Box<'a, SimpleExpressionNode>),
    Compound(Box<'a, CompoundExpressionNode<'a>>),
}

impl<'a> ExpressionNode<'a> {
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Simple(n) => &n.loc,
            Self::Compound(n) => &n.loc,
        }
    }
}

/// Simple expression node
#[derive(Debug)]
pub struct SimpleExpressionNode {
    pub content: String,
    /// Static expressions are string literals; dynamic ones are code
    pub is_static: bool,
    pub loc: SourceLocation,
}

impl SimpleExpressionNode {
    pub fn new(content: impl Into<String>, is_static: bool, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            is_static,
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::SimpleExpression
    }
}

/// Compound expression node (mixed content)
#[derive(Debug)]
pub struct CompoundExpressionNode<'a> {
    pub children: Vec<'a, CompoundExpressionChild<'a>>,
    pub loc: SourceLocation,
}

impl<'a> CompoundExpressionNode<'a> {
    pub fn new(allocator: &'a Bump, loc: SourceLocation) -> Self {
        Self {
            children: Vec::new_in(allocator),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::CompoundExpression
    }
}

/// Child of a compound expression
#[derive(Debug)]
pub enum CompoundExpressionChild<'a> {
    Simple(Box<'a, SimpleExpressionNode>),
    Compound(Box<'a, CompoundExpressionNode<'a>>),
    Interpolation(Box<'a, InterpolationNode<'a>>),
    Text(Box<'a, TextNode>),
    /// Raw code fragment, emitted verbatim
    String(String),
    Symbol(RuntimeHelper),
}

// ============================================================================
// Codegen Nodes
// ============================================================================

/// VNode call expression
#[derive(Debug)]
pub struct VNodeCall<'a> {
    pub tag: VNodeTag,
    pub props: Option<JsChildNode<'a>>,
    pub children: Option<VNodeChildren<'a>>,
    pub loc: SourceLocation,
}

impl<'a> VNodeCall<'a> {
    pub fn new(tag: VNodeTag, loc: SourceLocation) -> Self {
        Self {
            tag,
            props: None,
            children: None,
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::VNodeCall
    }
}

/// VNode tag type
#[derive(Debug)]
pub enum VNodeTag {
    /// Host tag name, emitted as a string literal
    String(String),
    /// Built-in type such as `Fragment`
    Symbol(RuntimeHelper),
    /// Identifier bound elsewhere (e.g. a resolved component), emitted verbatim
    Dynamic(String),
}

/// VNode children type
#[derive(Debug)]
pub enum VNodeChildren<'a> {
    Multiple(Vec<'a, TemplateChildNode<'a>>),
    Single(TemplateChildNode<'a>),
    Js(JsChildNode<'a>),
}

// ============================================================================
// JavaScript AST Nodes
// ============================================================================

/// All JavaScript child node types for codegen
#[derive(Debug)]
pub enum JsChildNode<'a> {
    VNodeCall(Box<'a, VNodeCall<'a>>),
    Object(Box<'a, ObjectExpression<'a>>),
    Array(Box<'a, ArrayExpression<'a>>),
    SimpleExpression(Box<'a, SimpleExpressionNode>),
    CompoundExpression(Box<'a, CompoundExpressionNode<'a>>),
}

impl<'a> JsChildNode<'a> {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::VNodeCall(_) => NodeType::VNodeCall,
            Self::Object(_) => NodeType::JsObjectExpression,
            Self::Array(_) => NodeType::JsArrayExpression,
            Self::SimpleExpression(_) => NodeType::SimpleExpression,
            Self::CompoundExpression(_) => NodeType::CompoundExpression,
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::VNodeCall(n) => &n.loc,
            Self::Object(n) => &n.loc,
            Self::Array(n) => &n.loc,
            Self::SimpleExpression(n) => &n.loc,
            Self::CompoundExpression(n) => &n.loc,
        }
    }
}

/// Object expression
#[derive(Debug)]
pub struct ObjectExpression<'a> {
    pub properties: Vec<'a, Property<'a>>,
    pub loc: SourceLocation,
}

impl<'a> ObjectExpression<'a> {
    pub fn new(allocator: &'a Bump, loc: SourceLocation) -> Self {
        Self {
            properties: Vec::new_in(allocator),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::JsObjectExpression
    }
}

/// Object property
#[derive(Debug)]
pub struct Property<'a> {
    pub key: ExpressionNode<'a>,
    pub value: JsChildNode<'a>,
    pub loc: SourceLocation,
}

impl<'a> Property<'a> {
    pub fn new(key: ExpressionNode<'a>, value: JsChildNode<'a>) -> Self {
        Self {
            key,
            value,
            loc: SourceLocation::STUB,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::JsProperty
    }
}

/// Array expression
#[derive(Debug)]
pub struct ArrayExpression<'a> {
    pub elements: Vec<'a, ArrayElement<'a>>,
    pub loc: SourceLocation,
}

impl<'a> ArrayExpression<'a> {
    pub fn new(allocator: &'a Bump, loc: SourceLocation) -> Self {
        Self {
            elements: Vec::new_in(allocator),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::JsArrayExpression
    }
}

/// Array element type
#[derive(Debug)]
pub enum ArrayElement<'a> {
    /// Raw code fragment, emitted verbatim
    String(String),
    Node(JsChildNode<'a>),
}
