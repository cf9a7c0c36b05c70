//! # Syntax
//! Parse AppleScript source code into a Concrete Syntax Tree
//!
//! A pratt parser, based on [Crafting Interpreters](https://craftinginterpreters.com/parsing-expressions.html).
//!
//! The source is first tokenised and then a tree is built from the tokens, with the tree
//! referencing the tokens. All references for tokens, expressions, and statements are
//! done with integers to save space - so when the tree is accessed the ast needs to be
//! passed as a reference.
//!
//! Words are matched against a vocabulary of keywords ignoring case, and the longest
//! keyword phrase wins. So `is not equal to` is a single token, and `ontology` is an
//! identifier rather than `on` followed by `tology`.
//!
//! Tries to be error tolerant, and recover from errors to continue parsing. If a token
//! is expected but is not found it will just assume it exists and continue parsing
//! (adding an error), otherwise if an error is found it will skip to the end of the line
//! and try parsing again from the next.

pub mod ast;
mod folding;
mod highlight;
mod incremental;
mod keywords;
mod parser;
mod span;
mod tokeniser;

#[cfg(test)]
mod test;

use tracing::debug;

/// Parses a source code string into an AST.
///
/// # Examples
/// ```
/// use applescript_syntax::parse;
/// let ast = parse("set x to 5 + 3".to_owned());
///
/// assert!(ast.is_valid());
/// ```
pub fn parse(source: String) -> AST {
  let mut ast = AST::new(source);
  run_parser(&mut ast);
  ast
}

/// Parses a source code string into an AST, reusing the allocation of a previous AST.
///
/// # Examples
/// ```
/// use applescript_syntax::{parse, parse_into};
///
/// let mut ast = parse("5 + 3".to_owned());
/// assert!(ast.is_valid());
///
/// parse_into("set x to 5 + 3".to_owned(), &mut ast);
/// assert!(ast.is_valid());
/// ```
pub fn parse_into(source: String, ast: &mut AST) {
  ast.reuse(source);
  run_parser(ast);
}

/// Parses from tokens which have already been found for the source
pub(crate) fn parse_tokens(source: String, tokens: Vec<Token>) -> AST {
  let mut ast = AST::from_tokens(source, tokens);
  run_parser(&mut ast);
  ast
}

fn run_parser(ast: &mut AST) {
  parser::Parser::new(ast).parse();

  debug!(
    tokens = ast.tokens.len(),
    statements = ast.statements.len(),
    expressions = ast.expressions.len(),
    errors = ast.errors.len(),
    "parsed source"
  );
}

/// Get the tokens from a source code string
///
/// # Examples
/// ```
/// use applescript_syntax::{TokenKind, tokenise};
///
/// let kinds: Vec<_> = tokenise("IS NOT EQUAL TO").map(|token| token.kind).collect();
/// assert_eq!(kinds, [TokenKind::NotEqual, TokenKind::EndOfFile]);
/// ```
pub fn tokenise(source: &str) -> Tokeniser<'_> {
  Tokeniser::from(source)
}

pub use ast::AST;
pub use folding::{FoldingKind, FoldingRange, folding_ranges};
pub use highlight::highlight;
pub use incremental::{Document, Edit, EditError};
pub use parser::ParseError;
pub use span::{LineIndex, Span};
pub use tokeniser::{Category, LexState, Token, TokenKind, Tokeniser};
