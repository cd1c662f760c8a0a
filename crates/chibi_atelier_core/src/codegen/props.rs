//! Props object generation.

use crate::ast::*;

use super::context::CodegenContext;
use super::expression::generate_expression_as_property_key;
use super::node::generate_js_child;

/// Generate an object literal: `{ "id": "foo", [key]: value }`
pub fn generate_object_expression(ctx: &mut CodegenContext, obj: &ObjectExpression<'_>) {
    if obj.properties.is_empty() {
        ctx.push_node("{}", &obj.loc);
        return;
    }

    ctx.push_node("{ ", &obj.loc);
    for (i, prop) in obj.properties.iter().enumerate() {
        if i > 0 {
            ctx.push(", ");
        }
        generate_expression_as_property_key(ctx, &prop.key);
        ctx.push(": ");
        generate_js_child(ctx, &prop.value);
    }
    ctx.push(" }");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CodegenOptions;
    use chibi_carton::{Box, Bump};

    fn simple<'a>(allocator: &'a Bump, content: &str, is_static: bool) -> Box<'a, SimpleExpressionNode> {
        Box::new_in(
            SimpleExpressionNode::new(content, is_static, SourceLocation::STUB),
            allocator,
        )
    }

    #[test]
    fn test_empty_object() {
        let allocator = Bump::new();
        let obj = ObjectExpression::new(&allocator, SourceLocation::STUB);
        let mut ctx = CodegenContext::new(CodegenOptions::default());
        generate_object_expression(&mut ctx, &obj);
        assert_eq!(ctx.code_as_str(), "{}");
    }

    #[test]
    fn test_static_and_dynamic_properties() {
        let allocator = Bump::new();
        let mut obj = ObjectExpression::new(&allocator, SourceLocation::STUB);
        obj.properties.push(Property::new(
            ExpressionNode::Simple(simple(&allocator, "id", true)),
            JsChildNode::SimpleExpression(simple(&allocator, "foo", true)),
        ));
        obj.properties.push(Property::new(
            ExpressionNode::Simple(simple(&allocator, "class", true)),
            JsChildNode::SimpleExpression(simple(&allocator, "_ctx.cls", false)),
        ));
        obj.properties.push(Property::new(
            ExpressionNode::Simple(simple(&allocator, "_ctx.name", false)),
            JsChildNode::SimpleExpression(simple(&allocator, "1", false)),
        ));

        let mut ctx = CodegenContext::new(CodegenOptions::default());
        generate_object_expression(&mut ctx, &obj);
        assert_eq!(
            ctx.code_as_str(),
            r#"{ "id": "foo", "class": _ctx.cls, [_ctx.name]: 1 }"#
        );
    }
}
