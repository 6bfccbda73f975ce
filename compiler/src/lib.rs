//! Provides for the parsing and compilation of a pattern into its
//! corresponding runtime automaton.
//!
//! A pattern travels through three stages: [parser::parse] rewrites the
//! token sequence into a syntax tree, [nfa::Nfa::from_syntax_tree] runs
//! Thompson construction over it, and [dfa::from_nfa] determinizes the
//! result by subset construction. [compile] chains all three; compilation
//! is all-or-nothing, so a failed parse never yields a partial automaton.
//!
//! The supported metacharacters are `. * + | ( )`; there are no character
//! classes, anchors, or bounded quantifiers.
//!
//! # Example
//!
//! ```rust
//! use pattern_compiler::compile;
//! use pattern_runtime::TextMatcher;
//!
//! let dfa = compile("ab*a").expect("failed to compile");
//!
//! // Unanchored scan over in-memory text; offsets are in characters.
//! let matches = dfa.find_all("xabbay", 0);
//! assert_eq!(vec![1], matches.offsets);
//!
//! // The same artifact enumerates the strings it accepts.
//! assert_eq!(
//!     vec!["aa".to_string(), "aba".to_string()],
//!     dfa.generate_words(2, 150)
//! );
//! ```

pub mod ast;
pub mod dfa;
pub mod nfa;
pub mod parser;

pub use parser::{parse, SyntaxError, SyntaxErrorKind};

/// Compiles a pattern string into a deterministic automaton, the single
/// entry point behind every search-facing surface.
pub fn compile(pattern: &str) -> Result<pattern_runtime::Dfa, SyntaxError> {
    parser::parse(pattern)
        .map(|tree| nfa::Nfa::from_syntax_tree(&tree))
        .map(|nfa| dfa::from_nfa(&nfa))
}
