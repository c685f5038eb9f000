//! The positioned abstract syntax tree.
//!
//! Every node keeps the inclusive byte range of the source text it was built
//! from. Literal text is kept exactly as matched: numbers are not converted
//! and string escapes are not decoded. Nodes are built bottom-up by the
//! parser and never mutated afterwards.

/// An inclusive byte range `[start, end]` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset of the last byte.
    pub end: usize,
}

impl Span {
    /// Creates a span, normalizing the order of the bounds.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Span { start, end }
        } else {
            Span {
                start: end,
                end: start,
            }
        }
    }

    /// Number of bytes covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: a span covers at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if `other` lies strictly inside this span.
    pub fn strictly_contains(&self, other: &Span) -> bool {
        self.start < other.start && other.end < self.end
    }

    /// The source text covered by the span, if it is in range.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..=self.end)
    }
}

/// `null`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullLiteral {
    pub span: Span,
}

/// `true` or `false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

/// A string, stored as its raw source text with the quotes and with escapes
/// left undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub raw: String,
    pub span: Span,
}

impl StringLiteral {
    /// The raw text between the quotes.
    pub fn contents(&self) -> &str {
        strip_quotes(&self.raw)
    }
}

/// A number, stored as its raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericLiteral {
    pub raw: String,
    pub span: Span,
}

/// `[ ... ]`, spanning both brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLiteral {
    pub elements: Vec<Node>,
    pub span: Span,
}

/// `{ ... }`, spanning both braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
    pub span: Span,
}

/// One `"key": value` pair of an object.
///
/// Properties are kept in source order; duplicate keys are neither checked
/// nor merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// The raw key token, quotes included.
    pub key: String,
    /// The span of the key token.
    pub key_span: Span,
    pub value: Node,
}

impl Property {
    /// The raw key text between the quotes.
    pub fn key_contents(&self) -> &str {
        strip_quotes(&self.key)
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

/// A node of the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Null(NullLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Number(NumericLiteral),
    Array(ArrayLiteral),
    Object(ObjectLiteral),
}

impl Node {
    /// The inclusive byte range of the node.
    pub fn span(&self) -> Span {
        match self {
            Node::Null(node) => node.span,
            Node::Boolean(node) => node.span,
            Node::String(node) => node.span,
            Node::Number(node) => node.span,
            Node::Array(node) => node.span,
            Node::Object(node) => node.span,
        }
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn end(&self) -> usize {
        self.span().end
    }

    /// Returns the node type name, e.g. `"ArrayLiteral"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null(_) => "NullLiteral",
            Node::Boolean(_) => "BooleanLiteral",
            Node::String(_) => "StringLiteral",
            Node::Number(_) => "NumericLiteral",
            Node::Array(_) => "ArrayLiteral",
            Node::Object(_) => "ObjectLiteral",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Node::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns the boolean value if this is a `BooleanLiteral`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Boolean(node) => Some(node.value),
            _ => None,
        }
    }

    /// Returns the raw text of a `StringLiteral` or `NumericLiteral`.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Node::String(node) => Some(&node.raw),
            Node::Number(node) => Some(&node.raw),
            _ => None,
        }
    }

    /// Returns the elements if this is an `ArrayLiteral`.
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(node) => Some(&node.elements),
            _ => None,
        }
    }

    /// Returns the properties if this is an `ObjectLiteral`.
    pub fn as_object(&self) -> Option<&[Property]> {
        match self {
            Node::Object(node) => Some(&node.properties),
            _ => None,
        }
    }

    /// Looks up the first property whose raw key contents equal `key`.
    ///
    /// Keys are compared without decoding escapes.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object()?
            .iter()
            .find(|property| property.key_contents() == key)
            .map(|property| &property.value)
    }

    /// Get an element of an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        self.as_array()?.get(index)
    }

    /// Calls `f` on this node and every descendant, parents before children,
    /// in source order.
    pub fn visit<F: FnMut(&Node)>(&self, f: &mut F) {
        f(self);
        match self {
            Node::Array(array) => {
                for element in &array.elements {
                    element.visit(f);
                }
            }
            Node::Object(object) => {
                for property in &object.properties {
                    property.value.visit(f);
                }
            }
            _ => {}
        }
    }
}

/// The result of a successful parse: the root node of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    root: Node,
}

impl Program {
    pub fn new(root: Node) -> Self {
        Program { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }
}
