//! Node builders
//!
//! Constructors used by the parser and by the normalizer when it synthesizes
//! nodes. Built nodes carry no source span.

use super::nodes::*;

pub fn build_text(chars: impl Into<String>) -> Node {
    Node::Text(TextNode {
        chars: chars.into(),
        loc: None,
    })
}

pub fn build_string(value: impl Into<String>) -> Node {
    Node::String(StringLiteral {
        value: value.into(),
        loc: None,
    })
}

pub fn build_number(value: f64) -> Node {
    Node::Number(NumberLiteral { value, loc: None })
}

pub fn build_boolean(value: bool) -> Node {
    Node::Boolean(BooleanLiteral { value, loc: None })
}

pub fn build_comment(value: impl Into<String>) -> Node {
    Node::Comment(CommentStatement {
        value: value.into(),
        loc: None,
    })
}

/// Build a path, splitting `a.b.c` into its parts.
pub fn build_path(original: impl Into<String>) -> PathExpression {
    let original = original.into();
    let parts = original
        .split('.')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    PathExpression {
        original,
        parts,
        loc: None,
    }
}

pub fn build_pair(key: impl Into<String>, value: Node) -> Pair {
    Pair {
        key: key.into(),
        value,
    }
}

pub fn build_hash(pairs: Vec<Pair>) -> Hash {
    Hash { pairs }
}

pub fn build_sexpr(path: PathExpression, params: Vec<Node>, hash: Option<Hash>) -> SubExpression {
    SubExpression {
        path,
        params,
        hash: hash.unwrap_or_default(),
        loc: None,
    }
}

pub fn build_mustache(
    path: PathExpression,
    params: Vec<Node>,
    hash: Option<Hash>,
    escaped: bool,
) -> Node {
    Node::Mustache(MustacheStatement {
        path,
        params,
        hash: hash.unwrap_or_default(),
        escaped,
        strip: StripFlags::empty(),
        loc: None,
    })
}

pub fn build_block(
    path: PathExpression,
    params: Vec<Node>,
    hash: Option<Hash>,
    program: Program,
    inverse: Option<Program>,
) -> Node {
    Node::Block(BlockStatement {
        path,
        params,
        hash: hash.unwrap_or_default(),
        program,
        inverse,
        open_strip: StripFlags::empty(),
        close_strip: StripFlags::empty(),
        loc: None,
    })
}

pub fn build_attr(name: impl Into<String>, value: Node) -> AttrNode {
    AttrNode {
        name: name.into(),
        value,
        loc: None,
    }
}

pub fn build_concat(parts: Vec<Node>) -> Node {
    Node::Concat(ConcatStatement { parts, loc: None })
}

pub fn build_element(tag: impl Into<String>, attributes: Vec<AttrNode>) -> ElementNode {
    ElementNode {
        tag: tag.into(),
        attributes,
        children: Vec::new(),
        loc: None,
    }
}

pub fn build_component(
    tag: impl Into<String>,
    attributes: Vec<AttrNode>,
    program: Program,
) -> ComponentNode {
    ComponentNode {
        tag: tag.into(),
        attributes,
        program,
        loc: None,
    }
}

pub fn build_program(body: Vec<Node>, block_params: Option<Vec<String>>) -> Program {
    Program {
        body,
        block_params,
        strip: StripFlags::empty(),
        loc: None,
    }
}
