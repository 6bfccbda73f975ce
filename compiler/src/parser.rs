//! Parses a pattern string into a [SyntaxNode] tree via precedence-ordered
//! rewrite passes over a flat token sequence.
//!
//! Tokenization yields one item per input character: the metacharacters
//! `. * + | ( )` become operator tokens, everything else a literal leaf.
//! The passes then run in strict priority order (parentheses, star, plus,
//! concatenation, alternation), each to fixed point before the next, so
//! repetition binds tighter than concatenation, which binds tighter than
//! alternation, with explicit grouping resolved first.
//!
//! `.` is tokenized as an operator but no pass resolves it: the syntax tree
//! has no node for it, so any pattern containing one fails as malformed
//! rather than producing a partial automaton downstream.

use std::fmt;

use crate::ast::SyntaxNode;

/// The failure classes of pattern compilation. Compilation is
/// all-or-nothing: any of these aborts the whole compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `(` without a matching `)`, or vice versa.
    UnmatchedParenthesis,
    /// A `*` or `+` with no resolved element immediately before it.
    DanglingRepetition,
    /// A `|` missing a resolved operand on either side.
    MissingAlternationOperand,
    /// Tokens left unresolved after every rewrite pass has run.
    MalformedPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> SyntaxErrorKind {
        self.kind
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SyntaxErrorKind::UnmatchedParenthesis => write!(f, "unmatched parenthesis"),
            SyntaxErrorKind::DanglingRepetition => write!(f, "dangling repetition operator"),
            SyntaxErrorKind::MissingAlternationOperand => {
                write!(f, "missing alternation operand")
            }
            SyntaxErrorKind::MalformedPattern => write!(f, "malformed pattern"),
        }
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaToken {
    Dot,
    Star,
    Plus,
    Alternation,
    OpenParen,
    CloseParen,
}

/// A partially-resolved element of the working sequence: either a finished
/// subtree or an operator token awaiting its rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Node(SyntaxNode),
    Meta(MetaToken),
}

/// Parses a pattern string, returning the finalized syntax tree.
///
/// Identical pattern strings always produce structurally identical trees.
///
/// # Example
///
/// ```rust
/// use pattern_compiler::ast::SyntaxNode;
/// use pattern_compiler::parser::parse;
///
/// // Concatenation binds tighter than alternation.
/// assert_eq!(
///     Ok(SyntaxNode::alternate(
///         SyntaxNode::concat(SyntaxNode::Literal('a'), SyntaxNode::Literal('b')),
///         SyntaxNode::Literal('c'),
///     )),
///     parse("ab|c")
/// );
/// ```
pub fn parse(pattern: &str) -> Result<SyntaxNode, SyntaxError> {
    let items = tokenize(pattern);
    resolve(items).map(unwrap_groups)
}

fn tokenize(pattern: &str) -> Vec<Item> {
    pattern
        .chars()
        .map(|c| match c {
            '.' => Item::Meta(MetaToken::Dot),
            '*' => Item::Meta(MetaToken::Star),
            '+' => Item::Meta(MetaToken::Plus),
            '|' => Item::Meta(MetaToken::Alternation),
            '(' => Item::Meta(MetaToken::OpenParen),
            ')' => Item::Meta(MetaToken::CloseParen),
            literal => Item::Node(SyntaxNode::Literal(literal)),
        })
        .collect()
}

fn find_meta(items: &[Item], token: MetaToken) -> Option<usize> {
    items
        .iter()
        .position(|item| matches!(item, Item::Meta(t) if *t == token))
}

/// Runs every rewrite pass over the sequence and demands that exactly one
/// resolved node remains.
fn resolve(mut items: Vec<Item>) -> Result<SyntaxNode, SyntaxError> {
    loop {
        let close = find_meta(&items, MetaToken::CloseParen);
        let open = find_meta(&items, MetaToken::OpenParen);
        match (open, close) {
            (None, None) => break,
            (_, Some(close_idx)) => items = reduce_parenthesis(items, close_idx)?,
            (Some(_), None) => {
                return Err(SyntaxError::new(SyntaxErrorKind::UnmatchedParenthesis))
            }
        }
    }

    for repetition in [MetaToken::Star, MetaToken::Plus] {
        while let Some(idx) = find_meta(&items, repetition) {
            items = reduce_repetition(items, idx)?;
        }
    }

    items = reduce_concatenation(items);

    while let Some(idx) = find_meta(&items, MetaToken::Alternation) {
        items = reduce_alternation(items, idx)?;
    }

    if items.len() == 1 {
        if let Some(Item::Node(node)) = items.pop() {
            return Ok(node);
        }
    }

    Err(SyntaxError::new(SyntaxErrorKind::MalformedPattern))
}

/// Pops the span back to the nearest `(` preceding the given `)`, resolves
/// the enclosed span recursively, and splices the result back in as a
/// `Group`.
fn reduce_parenthesis(mut items: Vec<Item>, close_idx: usize) -> Result<Vec<Item>, SyntaxError> {
    let open_idx = items[..close_idx]
        .iter()
        .rposition(|item| matches!(item, Item::Meta(MetaToken::OpenParen)))
        .ok_or_else(|| SyntaxError::new(SyntaxErrorKind::UnmatchedParenthesis))?;

    let tail = items.split_off(close_idx + 1);
    let mut enclosed = items.split_off(open_idx);
    enclosed.pop();
    enclosed.remove(0);

    let inner = resolve(enclosed)?;
    items.push(Item::Node(SyntaxNode::group(inner)));
    items.extend(tail);

    Ok(items)
}

/// Wraps the element immediately preceding a `*` or `+` token.
fn reduce_repetition(mut items: Vec<Item>, idx: usize) -> Result<Vec<Item>, SyntaxError> {
    let is_star = matches!(items[idx], Item::Meta(MetaToken::Star));
    if idx == 0 {
        return Err(SyntaxError::new(SyntaxErrorKind::DanglingRepetition));
    }

    let node = match items.remove(idx - 1) {
        Item::Node(operand) if is_star => SyntaxNode::star(operand),
        Item::Node(operand) => SyntaxNode::plus(operand),
        Item::Meta(_) => return Err(SyntaxError::new(SyntaxErrorKind::DanglingRepetition)),
    };
    // after the removal the operator token sits at idx - 1
    items[idx - 1] = Item::Node(node);

    Ok(items)
}

/// Merges adjacent resolved elements pairwise, left-associative, in one
/// left-to-right sweep. Operator tokens never merge, so an alternation
/// marker acts as a barrier.
fn reduce_concatenation(items: Vec<Item>) -> Vec<Item> {
    let mut result: Vec<Item> = Vec::with_capacity(items.len());
    for item in items {
        match (result.pop(), item) {
            (Some(Item::Node(left)), Item::Node(right)) => {
                result.push(Item::Node(SyntaxNode::concat(left, right)));
            }
            (Some(previous), item) => {
                result.push(previous);
                result.push(item);
            }
            (None, item) => result.push(item),
        }
    }

    result
}

/// Combines the resolved neighbors of a `|` token into an `Alternate` node.
fn reduce_alternation(mut items: Vec<Item>, idx: usize) -> Result<Vec<Item>, SyntaxError> {
    let has_left = idx > 0 && matches!(items[idx - 1], Item::Node(_));
    let has_right = idx + 1 < items.len() && matches!(items[idx + 1], Item::Node(_));
    if !has_left || !has_right {
        return Err(SyntaxError::new(SyntaxErrorKind::MissingAlternationOperand));
    }

    let right = items.remove(idx + 1);
    items.remove(idx);
    let left = items.remove(idx - 1);

    match (left, right) {
        (Item::Node(left), Item::Node(right)) => {
            items.insert(idx - 1, Item::Node(SyntaxNode::alternate(left, right)));
            Ok(items)
        }
        _ => Err(SyntaxError::new(SyntaxErrorKind::MissingAlternationOperand)),
    }
}

/// Strips every `Group` marker bottom-up; grouping is purely a precedence
/// device and never reaches the automaton builders.
fn unwrap_groups(node: SyntaxNode) -> SyntaxNode {
    match node {
        SyntaxNode::Group(inner) => unwrap_groups(*inner),
        SyntaxNode::Concat(left, right) => {
            SyntaxNode::concat(unwrap_groups(*left), unwrap_groups(*right))
        }
        SyntaxNode::Alternate(left, right) => {
            SyntaxNode::alternate(unwrap_groups(*left), unwrap_groups(*right))
        }
        SyntaxNode::Star(inner) => SyntaxNode::star(unwrap_groups(*inner)),
        SyntaxNode::Plus(inner) => SyntaxNode::plus(unwrap_groups(*inner)),
        leaf @ SyntaxNode::Literal(_) => leaf,
    }
}
