//! Node dispatch.

use std::borrow::Cow;

use crate::ast::*;

use super::children::{generate_array_expression, generate_node_list_as_array};
use super::context::CodegenContext;
use super::element::{generate_element, generate_vnode_call};
use super::expression::{
    generate_compound_expression, generate_interpolation, generate_simple_expression,
    generate_text,
};
use super::props::generate_object_expression;

/// Anything the generator can emit: a pre-rendered code fragment, an AST
/// node, or a nested list of template children rendered as an array.
#[derive(Debug, Clone)]
pub enum CodegenNode<'n, 'a> {
    /// Code fragment pushed verbatim
    Raw(Cow<'n, str>),
    Template(&'n TemplateChildNode<'a>),
    Js(&'n JsChildNode<'a>),
    /// Rendered as `[child, child, ...]`
    Children(&'n [TemplateChildNode<'a>]),
}

impl<'n, 'a> CodegenNode<'n, 'a> {
    /// Literal `null`, used to hold interior argument positions
    pub const NULL: Self = Self::Raw(Cow::Borrowed("null"));
}

/// Generate node code
pub fn generate_node(ctx: &mut CodegenContext, node: &CodegenNode<'_, '_>) {
    match node {
        CodegenNode::Raw(code) => ctx.push(code),
        CodegenNode::Template(node) => generate_template_child(ctx, node),
        CodegenNode::Js(node) => generate_js_child(ctx, node),
        CodegenNode::Children(children) => {
            let items: Vec<_> = children.iter().map(CodegenNode::Template).collect();
            generate_node_list_as_array(ctx, &items);
        }
    }
}

/// Generate a template child node
pub fn generate_template_child(ctx: &mut CodegenContext, node: &TemplateChildNode<'_>) {
    match node {
        TemplateChildNode::Element(el) => generate_element(ctx, el),
        TemplateChildNode::Text(text) => generate_text(ctx, text),
        TemplateChildNode::Interpolation(interp) => generate_interpolation(ctx, interp),
        TemplateChildNode::CompoundExpression(exp) => generate_compound_expression(ctx, exp),
    }
}

/// Generate a JavaScript child node
pub fn generate_js_child(ctx: &mut CodegenContext, node: &JsChildNode<'_>) {
    match node {
        JsChildNode::VNodeCall(call) => generate_vnode_call(ctx, call),
        JsChildNode::Object(obj) => generate_object_expression(ctx, obj),
        JsChildNode::Array(arr) => generate_array_expression(ctx, arr),
        JsChildNode::SimpleExpression(exp) => generate_simple_expression(ctx, exp),
        JsChildNode::CompoundExpression(exp) => generate_compound_expression(ctx, exp),
    }
}
