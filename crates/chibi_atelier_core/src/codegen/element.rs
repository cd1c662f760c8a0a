//! Element and vnode call generation.

use std::borrow::Cow;

use chibi_carton::json_stringify;

use crate::ast::*;

use super::children::generate_node_list;
use super::context::CodegenContext;
use super::expression::generate_simple_expression;
use super::node::CodegenNode;
use super::VNODE_FUNC_NAME;

/// Generate an element through the codegen node the transform attached.
///
/// # Panics
///
/// Panics if the element has no codegen node. Upstream transforms must
/// attach one to every element before generation.
pub fn generate_element(ctx: &mut CodegenContext, el: &ElementNode<'_>) {
    match &el.codegen_node {
        Some(ElementCodegenNode::VNodeCall(call)) => generate_vnode_call(ctx, call),
        Some(ElementCodegenNode::SimpleExpression(exp)) => generate_simple_expression(ctx, exp),
        None => panic!(
            "element <{}> reached codegen without a codegen node",
            el.tag
        ),
    }
}

/// Generate `h(tag, props, children)` with trailing absent arguments elided
pub fn generate_vnode_call(ctx: &mut CodegenContext, call: &VNodeCall<'_>) {
    ctx.push_node(VNODE_FUNC_NAME, &call.loc);
    ctx.push("(");

    let tag = match &call.tag {
        VNodeTag::String(tag) => CodegenNode::Raw(Cow::Owned(json_stringify(tag))),
        VNodeTag::Symbol(helper) => CodegenNode::Raw(Cow::Owned(ctx.helper(*helper).into())),
        VNodeTag::Dynamic(ident) => CodegenNode::Raw(Cow::Borrowed(ident.as_str())),
    };
    let props = call.props.as_ref().map(CodegenNode::Js);
    let children = call.children.as_ref().map(|children| match children {
        VNodeChildren::Multiple(nodes) => CodegenNode::Children(nodes),
        VNodeChildren::Single(node) => CodegenNode::Template(node),
        VNodeChildren::Js(node) => CodegenNode::Js(node),
    });

    let args = generate_nullable_args([Some(tag), props, children]);
    generate_node_list(ctx, &args, true);
    ctx.push(")");
}

/// Drop trailing absent arguments and fill interior gaps with `null`.
///
/// `[tag, props, None]` becomes `[tag, props]`, while `[tag, None, children]`
/// keeps all three positions with a literal `null` in the middle.
pub fn generate_nullable_args<'n, 'a>(
    args: impl IntoIterator<Item = Option<CodegenNode<'n, 'a>>>,
) -> Vec<CodegenNode<'n, 'a>> {
    let mut args: Vec<_> = args.into_iter().collect();
    let len = args.iter().rposition(Option::is_some).map_or(0, |last| last + 1);
    args.truncate(len);
    args.into_iter()
        .map(|arg| arg.unwrap_or(CodegenNode::NULL))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: &'static str) -> Option<CodegenNode<'static, 'static>> {
        Some(CodegenNode::Raw(Cow::Borrowed(code)))
    }

    fn rendered(args: &[CodegenNode<'_, '_>]) -> Vec<String> {
        args.iter()
            .map(|arg| match arg {
                CodegenNode::Raw(code) => code.to_string(),
                other => format!("{:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_nullable_args_elides_trailing() {
        let args = generate_nullable_args([raw("\"div\""), raw("props"), None]);
        assert_eq!(rendered(&args), ["\"div\"", "props"]);
    }

    #[test]
    fn test_nullable_args_keeps_interior_null() {
        let args = generate_nullable_args([raw("\"div\""), None, raw("children")]);
        assert_eq!(rendered(&args), ["\"div\"", "null", "children"]);
    }

    #[test]
    fn test_nullable_args_elides_every_trailing_null() {
        let args = generate_nullable_args([raw("\"div\""), None, None]);
        assert_eq!(rendered(&args), ["\"div\""]);

        let args = generate_nullable_args([None, None, None]);
        assert!(args.is_empty());
    }
}
