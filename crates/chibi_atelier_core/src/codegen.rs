//! VDom code generation.
//!
//! This module generates the JavaScript render function from the transformed AST.

mod children;
mod context;
mod element;
mod expression;
mod node;
mod props;

use chibi_carton::CompactString;

use crate::ast::*;
use crate::options::CodegenOptions;

pub use context::{CodegenContext, CodegenResult, Mapping};
pub use element::generate_nullable_args;
pub use node::CodegenNode;

use children::generate_node_list_as_array;
use node::generate_template_child;

/// Name of the vnode construction function destructured in every preamble
pub(crate) const VNODE_FUNC_NAME: &str = "h";

/// Parameter name of the generated render function
const CTX_IDENT: &str = "_ctx";

/// Generate code from root AST
pub fn generate(root: &RootNode<'_>, options: CodegenOptions) -> CodegenResult {
    let span = tracing::debug_span!("generate", children = root.children.len());
    let _enter = span.enter();

    let mut ctx = CodegenContext::new(options);

    if ctx.options.is_browser {
        ctx.push("return ");
    }

    // Generate function signature
    ctx.push("function render(");
    ctx.push(CTX_IDENT);
    ctx.push(") { ");
    ctx.indent();

    generate_preamble(&mut ctx, root);

    // Generate return statement
    ctx.push("return ");
    match root.children.as_slice() {
        [] => ctx.push("null"),
        [child] => generate_template_child(&mut ctx, child),
        children => {
            let items: Vec<_> = children.iter().map(CodegenNode::Template).collect();
            ctx.push(VNODE_FUNC_NAME);
            ctx.push("(");
            let fragment = ctx.helper(RuntimeHelper::FRAGMENT);
            ctx.push(&fragment);
            ctx.push(", null, ");
            generate_node_list_as_array(&mut ctx, &items);
            ctx.push(")");
        }
    }

    ctx.deindent(false);
    ctx.push(" }");

    debug_assert_eq!(ctx.indent_level(), 0, "unbalanced indent in generated code");
    tracing::trace!(code = ctx.code_as_str(), "render function");

    let result = ctx.into_result();
    tracing::debug!(
        bytes = result.code.len(),
        helpers = result.helpers.len(),
        mappings = result.mappings.len(),
        "generated render function"
    );
    result
}

/// Emit `const { h, ... } = <global>` followed by a blank line.
///
/// Helpers come from the root in insertion order, after `h`, without
/// repeating a name. A multi-root template also pulls in `Fragment`.
fn generate_preamble(ctx: &mut CodegenContext, root: &RootNode<'_>) {
    let mut names: Vec<CompactString> = vec![CompactString::const_new(VNODE_FUNC_NAME)];
    let fragment = (root.children.len() > 1).then_some(RuntimeHelper::FRAGMENT);
    for helper in root.helpers.iter().copied().chain(fragment) {
        let name = ctx.helper(helper);
        if !names.contains(&name) {
            names.push(name);
        }
    }

    ctx.push("const { ");
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            ctx.push(", ");
        }
        ctx.push(name);
    }
    ctx.push(" } = ");
    let global = ctx.options.runtime_global_name.clone();
    ctx.push(&global);
    ctx.push("\n");
    ctx.newline();
}
