//! Argument list and array generation.

use std::borrow::Cow;

use crate::ast::*;

use super::context::CodegenContext;
use super::node::{generate_node, CodegenNode};

/// Generate a node list, separated by `, ` when `comma` is set
pub fn generate_node_list(ctx: &mut CodegenContext, nodes: &[CodegenNode<'_, '_>], comma: bool) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 && comma {
            ctx.push(", ");
        }
        generate_node(ctx, node);
    }
}

/// Generate a node list as an array literal
pub fn generate_node_list_as_array(ctx: &mut CodegenContext, nodes: &[CodegenNode<'_, '_>]) {
    ctx.push("[");
    generate_node_list(ctx, nodes, true);
    ctx.push("]");
}

/// Generate an array expression; string elements are emitted verbatim
pub fn generate_array_expression(ctx: &mut CodegenContext, arr: &ArrayExpression<'_>) {
    let items: Vec<_> = arr
        .elements
        .iter()
        .map(|element| match element {
            ArrayElement::String(code) => CodegenNode::Raw(Cow::Borrowed(code.as_str())),
            ArrayElement::Node(node) => CodegenNode::Js(node),
        })
        .collect();
    ctx.push_node("", &arr.loc);
    generate_node_list_as_array(ctx, &items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CodegenOptions;
    use chibi_carton::{Box, Bump};

    #[test]
    fn test_node_list_separators() {
        let nodes = [
            CodegenNode::Raw(Cow::Borrowed("a")),
            CodegenNode::NULL,
            CodegenNode::Raw(Cow::Borrowed("b")),
        ];

        let mut ctx = CodegenContext::new(CodegenOptions::default());
        generate_node_list(&mut ctx, &nodes, true);
        assert_eq!(ctx.code_as_str(), "a, null, b");

        let mut ctx = CodegenContext::new(CodegenOptions::default());
        generate_node_list(&mut ctx, &nodes, false);
        assert_eq!(ctx.code_as_str(), "anullb");
    }

    #[test]
    fn test_empty_array() {
        let mut ctx = CodegenContext::new(CodegenOptions::default());
        generate_node_list_as_array(&mut ctx, &[]);
        assert_eq!(ctx.code_as_str(), "[]");
    }

    #[test]
    fn test_array_expression_mixes_raw_and_nodes() {
        let allocator = Bump::new();
        let mut arr = ArrayExpression::new(&allocator, SourceLocation::STUB);
        arr.elements.push(ArrayElement::String("_ctx.items".into()));
        arr.elements.push(ArrayElement::Node(JsChildNode::SimpleExpression(Box::new_in(
            SimpleExpressionNode::new("x", true, SourceLocation::STUB),
            &allocator,
        ))));

        let mut ctx = CodegenContext::new(CodegenOptions::default());
        generate_array_expression(&mut ctx, &arr);
        assert_eq!(ctx.code_as_str(), "[_ctx.items, \"x\"]");
    }

    #[test]
    fn test_array_expression_matches_node_list() {
        let allocator = Bump::new();
        let mut arr = ArrayExpression::new(&allocator, SourceLocation::STUB);
        arr.elements.push(ArrayElement::String("a".into()));
        arr.elements.push(ArrayElement::String("b".into()));

        let mut from_array = CodegenContext::new(CodegenOptions::default());
        generate_array_expression(&mut from_array, &arr);

        let mut from_list = CodegenContext::new(CodegenOptions::default());
        generate_node_list_as_array(
            &mut from_list,
            &[CodegenNode::Raw(Cow::Borrowed("a")), CodegenNode::Raw(Cow::Borrowed("b"))],
        );
        assert_eq!(from_array.code_as_str(), from_list.code_as_str());
        assert_eq!(from_array.code_as_str(), "[a, b]");
    }
}
