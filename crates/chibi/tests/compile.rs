//! End-to-end tests through the facade: configuration in, render function out.

use chibi::carton::{Box, Bump};
use chibi::relief::*;
use chibi::{compile, load_config, ChibiConfig};

fn div_with_text<'a>(allocator: &'a Bump) -> RootNode<'a> {
    let mut root = RootNode::new(allocator, "<div>hi</div>");
    let text = TemplateChildNode::Text(Box::new_in(
        TextNode::new("hi", SourceLocation::STUB),
        allocator,
    ));
    let mut call = VNodeCall::new(VNodeTag::String("div".into()), SourceLocation::STUB);
    call.children = Some(VNodeChildren::Single(text));
    let mut el = ElementNode::new(allocator, "div", SourceLocation::STUB);
    el.codegen_node = Some(ElementCodegenNode::VNodeCall(Box::new_in(call, allocator)));
    root.children.push(TemplateChildNode::Element(Box::new_in(el, allocator)));
    root
}

#[test]
fn compile_with_default_config() {
    let allocator = Bump::new();
    let root = div_with_text(&allocator);
    let result = compile(&root, &ChibiConfig::default());
    assert_eq!(
        result.code,
        "function render(_ctx) { \n  const { h } = ChibiVue\n\n  return h(\"div\", null, \"hi\")\n }"
    );
}

#[test]
fn compile_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("chibi.config.json"),
        r#"{ "compiler": { "isBrowser": true, "runtimeGlobalName": "Mini" } }"#,
    )
    .unwrap();
    let config = load_config(dir.path()).unwrap();

    let allocator = Bump::new();
    let root = div_with_text(&allocator);
    let result = compile(&root, &config);
    assert!(result.code.starts_with("return function render(_ctx) { "));
    assert!(result.code.contains("const { h } = Mini\n"));
    assert!(result.code.ends_with("return h(\"div\", null, \"hi\")\n }"));
}
