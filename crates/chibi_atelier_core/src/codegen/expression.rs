//! Text and expression generation functions.

use chibi_carton::json_stringify;

use crate::ast::*;

use super::context::CodegenContext;

/// Generate a text node as a string literal
pub fn generate_text(ctx: &mut CodegenContext, text: &TextNode) {
    ctx.push_node(&json_stringify(&text.content), &text.loc);
}

/// Generate a simple expression: static content becomes a string literal,
/// dynamic content is emitted as code
pub fn generate_simple_expression(ctx: &mut CodegenContext, exp: &SimpleExpressionNode) {
    if exp.is_static {
        ctx.push_node(&json_stringify(&exp.content), &exp.loc);
    } else {
        ctx.push_node(&exp.content, &exp.loc);
    }
}

/// Generate an expression node
pub fn generate_expression(ctx: &mut CodegenContext, exp: &ExpressionNode<'_>) {
    match exp {
        ExpressionNode::Simple(simple) => generate_simple_expression(ctx, simple),
        ExpressionNode::Compound(compound) => generate_compound_expression(ctx, compound),
    }
}

/// Generate an interpolation by generating its inner expression
pub fn generate_interpolation(ctx: &mut CodegenContext, interp: &InterpolationNode<'_>) {
    generate_expression(ctx, &interp.content);
}

/// Generate a compound expression, children in order
pub fn generate_compound_expression(ctx: &mut CodegenContext, compound: &CompoundExpressionNode<'_>) {
    for child in compound.children.iter() {
        match child {
            CompoundExpressionChild::String(code) => ctx.push(code),
            CompoundExpressionChild::Symbol(helper) => {
                let name = ctx.helper(*helper);
                ctx.push(&name);
            }
            CompoundExpressionChild::Simple(exp) => generate_simple_expression(ctx, exp),
            CompoundExpressionChild::Compound(exp) => generate_compound_expression(ctx, exp),
            CompoundExpressionChild::Interpolation(interp) => generate_interpolation(ctx, interp),
            CompoundExpressionChild::Text(text) => generate_text(ctx, text),
        }
    }
}

/// Generate an object property key.
///
/// Compound keys are computed (`[a + b]`), static keys are quoted and
/// dynamic keys are computed from their content (`[key]`).
pub fn generate_expression_as_property_key(ctx: &mut CodegenContext, key: &ExpressionNode<'_>) {
    match key {
        ExpressionNode::Compound(compound) => {
            ctx.push("[");
            generate_compound_expression(ctx, compound);
            ctx.push("]");
        }
        ExpressionNode::Simple(exp) if exp.is_static => {
            ctx.push_node(&json_stringify(&exp.content), &exp.loc);
        }
        ExpressionNode::Simple(exp) => {
            ctx.push_node("[", &exp.loc);
            ctx.push(&exp.content);
            ctx.push("]");
        }
    }
}
