#![allow(dead_code)]

/**
 * Template Test Utilities
 *
 * Small tree builders and a flattener that turns a program into rows of
 * `[kind, detail, depth]` so whole trees can be compared with `assert_eq!`.
 */
use rebound_compiler::ast::*;

pub fn text(chars: &str) -> Node {
    build_text(chars)
}

pub fn mustache(path: &str) -> Node {
    build_mustache(build_path(path), vec![], None, true)
}

pub fn mustache_with_strip(path: &str, strip: StripFlags) -> Node {
    match build_mustache(build_path(path), vec![], None, true) {
        Node::Mustache(mut statement) => {
            statement.strip = strip;
            Node::Mustache(statement)
        }
        other => other,
    }
}

pub fn block(path: &str, body: Vec<Node>, inverse: Option<Vec<Node>>) -> Node {
    build_block(
        build_path(path),
        vec![],
        None,
        build_program(body, None),
        inverse.map(|body| build_program(body, None)),
    )
}

pub fn element(tag: &str, children: Vec<Node>) -> Node {
    let mut element = build_element(tag, vec![]);
    element.children = children;
    Node::Element(element)
}

pub fn element_with_attrs(tag: &str, attr_names: &[&str], children: Vec<Node>) -> ElementNode {
    let mut element = build_element(tag, attrs(attr_names));
    element.children = children;
    element
}

pub fn component(tag: &str, body: Vec<Node>) -> Node {
    Node::Component(build_component(tag, vec![], build_program(body, None)))
}

/// Attributes with the given names and empty static values, the way the
/// parser reports `as |item|` tokens.
pub fn attrs(names: &[&str]) -> Vec<AttrNode> {
    names
        .iter()
        .map(|name| build_attr(*name, build_text("")))
        .collect()
}

pub fn attr_names(attributes: &[AttrNode]) -> Vec<String> {
    attributes.iter().map(|attr| attr.name.clone()).collect()
}

pub fn humanize_program(program: &Program) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    humanize_nodes(&program.body, 0, &mut rows);
    rows
}

fn humanize_nodes(nodes: &[Node], depth: usize, rows: &mut Vec<Vec<String>>) {
    for node in nodes {
        let detail = match node {
            Node::Text(text) => text.chars.clone(),
            Node::Element(element) => element.tag.clone(),
            Node::Component(component) => component.tag.clone(),
            Node::Mustache(mustache) => mustache.path.original.clone(),
            Node::Block(block) => block.path.original.clone(),
            Node::Comment(comment) => comment.value.clone(),
            other => other.kind().to_string(),
        };
        rows.push(vec![node.kind().to_string(), detail, depth.to_string()]);

        match node {
            Node::Element(element) => humanize_nodes(&element.children, depth + 1, rows),
            Node::Component(component) => humanize_nodes(&component.program.body, depth + 1, rows),
            Node::Block(block) => {
                humanize_nodes(&block.program.body, depth + 1, rows);
                if let Some(inverse) = &block.inverse {
                    humanize_nodes(&inverse.body, depth + 1, rows);
                }
            }
            _ => {}
        }
    }
}

pub fn row(kind: &str, detail: &str, depth: usize) -> Vec<String> {
    vec![kind.to_string(), detail.to_string(), depth.to_string()]
}

/// True when no two neighbouring entries both produce morphs.
pub fn morphs_separated(nodes: &[Node]) -> bool {
    nodes
        .windows(2)
        .all(|pair| !(uses_morph(&pair[0]) && uses_morph(&pair[1])))
}
