//! Template AST node definitions
//!
//! Nodes arrive from the markup+expression parser already structured. The
//! compiler mutates them in place while normalizing a finished program and
//! treats them as read-only afterwards.

use crate::parse_util::ParseSourceSpan;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// `~` whitespace-control directives on either side of a mustache.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StripFlags: u8 {
        const LEFT = 0b01;
        const RIGHT = 0b10;
    }
}

/// Node type tag, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    ElementNode,
    ComponentNode,
    TextNode,
    MustacheStatement,
    BlockStatement,
    CommentStatement,
    ConcatStatement,
    SubExpression,
    PathExpression,
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ElementNode => "ElementNode",
            NodeKind::ComponentNode => "ComponentNode",
            NodeKind::TextNode => "TextNode",
            NodeKind::MustacheStatement => "MustacheStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::CommentStatement => "CommentStatement",
            NodeKind::ConcatStatement => "ConcatStatement",
            NodeKind::SubExpression => "SubExpression",
            NodeKind::PathExpression => "PathExpression",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node type union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Program(Program),
    #[serde(rename = "ElementNode")]
    Element(ElementNode),
    #[serde(rename = "ComponentNode")]
    Component(ComponentNode),
    #[serde(rename = "TextNode")]
    Text(TextNode),
    #[serde(rename = "MustacheStatement")]
    Mustache(MustacheStatement),
    #[serde(rename = "BlockStatement")]
    Block(BlockStatement),
    #[serde(rename = "CommentStatement")]
    Comment(CommentStatement),
    #[serde(rename = "ConcatStatement")]
    Concat(ConcatStatement),
    SubExpression(SubExpression),
    #[serde(rename = "PathExpression")]
    Path(PathExpression),
    #[serde(rename = "StringLiteral")]
    String(StringLiteral),
    #[serde(rename = "NumberLiteral")]
    Number(NumberLiteral),
    #[serde(rename = "BooleanLiteral")]
    Boolean(BooleanLiteral),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::Element(_) => NodeKind::ElementNode,
            Node::Component(_) => NodeKind::ComponentNode,
            Node::Text(_) => NodeKind::TextNode,
            Node::Mustache(_) => NodeKind::MustacheStatement,
            Node::Block(_) => NodeKind::BlockStatement,
            Node::Comment(_) => NodeKind::CommentStatement,
            Node::Concat(_) => NodeKind::ConcatStatement,
            Node::SubExpression(_) => NodeKind::SubExpression,
            Node::Path(_) => NodeKind::PathExpression,
            Node::String(_) => NodeKind::StringLiteral,
            Node::Number(_) => NodeKind::NumberLiteral,
            Node::Boolean(_) => NodeKind::BooleanLiteral,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True for a text node with no characters.
    pub fn is_empty_text(&self) -> bool {
        self.as_text().is_some_and(|text| text.chars.is_empty())
    }

    /// Strip directives facing this node's siblings: `LEFT` faces the previous
    /// sibling, `RIGHT` faces the next one.
    pub fn outer_strip(&self) -> StripFlags {
        match self {
            Node::Mustache(mustache) => mustache.strip,
            Node::Block(block) => {
                (block.open_strip & StripFlags::LEFT) | (block.close_strip & StripFlags::RIGHT)
            }
            _ => StripFlags::empty(),
        }
    }

    pub fn loc(&self) -> Option<&ParseSourceSpan> {
        match self {
            Node::Program(n) => n.loc.as_ref(),
            Node::Element(n) => n.loc.as_ref(),
            Node::Component(n) => n.loc.as_ref(),
            Node::Text(n) => n.loc.as_ref(),
            Node::Mustache(n) => n.loc.as_ref(),
            Node::Block(n) => n.loc.as_ref(),
            Node::Comment(n) => n.loc.as_ref(),
            Node::Concat(n) => n.loc.as_ref(),
            Node::SubExpression(n) => n.loc.as_ref(),
            Node::Path(n) => n.loc.as_ref(),
            Node::String(n) => n.loc.as_ref(),
            Node::Number(n) => n.loc.as_ref(),
            Node::Boolean(n) => n.loc.as_ref(),
        }
    }
}

/// A scoped block of template content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub body: Vec<Node>,
    /// Names bound by `as |...|`. `None` when the block declares none.
    #[serde(default)]
    pub block_params: Option<Vec<String>>,
    #[serde(default)]
    pub strip: StripFlags,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<AttrNode>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

/// A custom element invocation, compiled as a helper call with a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<AttrNode>,
    pub program: Program,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub chars: String,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MustacheStatement {
    pub path: PathExpression,
    #[serde(default)]
    pub params: Vec<Node>,
    #[serde(default)]
    pub hash: Hash,
    #[serde(default = "default_escaped")]
    pub escaped: bool,
    #[serde(default)]
    pub strip: StripFlags,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

fn default_escaped() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStatement {
    pub path: PathExpression,
    #[serde(default)]
    pub params: Vec<Node>,
    #[serde(default)]
    pub hash: Hash,
    pub program: Program,
    #[serde(default)]
    pub inverse: Option<Program>,
    #[serde(default)]
    pub open_strip: StripFlags,
    #[serde(default)]
    pub close_strip: StripFlags,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentStatement {
    pub value: String,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

/// Interpolated attribute value, e.g. `class="item {{state}}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcatStatement {
    pub parts: Vec<Node>,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrNode {
    pub name: String,
    pub value: Node,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubExpression {
    pub path: PathExpression,
    #[serde(default)]
    pub params: Vec<Node>,
    #[serde(default)]
    pub hash: Hash,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathExpression {
    pub original: String,
    #[serde(default)]
    pub parts: Vec<String>,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

/// Named arguments. Keys may repeat; order is preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hash {
    pub pairs: Vec<Pair>,
}

impl Hash {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: Node,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: f64,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    #[serde(default)]
    pub loc: Option<ParseSourceSpan>,
}

/// Nodes shaped like a call: a callee with positional and named arguments.
pub trait CallExpression {
    fn path(&self) -> &PathExpression;
    fn params(&self) -> &[Node];
    fn hash(&self) -> &Hash;
}

macro_rules! impl_call_expression {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CallExpression for $ty {
                fn path(&self) -> &PathExpression {
                    &self.path
                }

                fn params(&self) -> &[Node] {
                    &self.params
                }

                fn hash(&self) -> &Hash {
                    &self.hash
                }
            }
        )*
    };
}

impl_call_expression!(SubExpression, MustacheStatement, BlockStatement);
