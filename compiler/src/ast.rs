//! The regular-expression syntax tree produced by the parser.

use std::fmt;

/// A node of the parsed syntax tree. Arity is fixed by the variant: a
/// literal is a leaf, concatenation and alternation hold exactly two
/// children, and the repetition operators and grouping hold exactly one.
///
/// `Group` is a pure precedence marker introduced by the parenthesis rewrite
/// pass; the parser unwraps every `Group` bottom-up before returning, so a
/// finalized tree never contains one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Literal(char),
    Concat(Box<SyntaxNode>, Box<SyntaxNode>),
    Alternate(Box<SyntaxNode>, Box<SyntaxNode>),
    Star(Box<SyntaxNode>),
    Plus(Box<SyntaxNode>),
    Group(Box<SyntaxNode>),
}

impl SyntaxNode {
    pub fn concat(left: Self, right: Self) -> Self {
        Self::Concat(Box::new(left), Box::new(right))
    }

    pub fn alternate(left: Self, right: Self) -> Self {
        Self::Alternate(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Self) -> Self {
        Self::Star(Box::new(inner))
    }

    pub fn plus(inner: Self) -> Self {
        Self::Plus(Box::new(inner))
    }

    pub fn group(inner: Self) -> Self {
        Self::Group(Box::new(inner))
    }
}

impl fmt::Display for SyntaxNode {
    /// Renders the tree prefix-style, e.g. `ab|c` as `|(.(a,b),c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(c) => write!(f, "{}", c),
            Self::Concat(left, right) => write!(f, ".({},{})", left, right),
            Self::Alternate(left, right) => write!(f, "|({},{})", left, right),
            Self::Star(inner) => write!(f, "*({})", inner),
            Self::Plus(inner) => write!(f, "+({})", inner),
            Self::Group(inner) => write!(f, "({})", inner),
        }
    }
}
