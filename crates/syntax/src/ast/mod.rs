//! # AST
//!
//! The definition of the concrete syntax tree, built from the tokens of the source

use crate::{
  parser::ParseError,
  span::{LineIndex, Span},
  tokeniser::{Token, Tokeniser},
};
use std::{cell::OnceCell, num::NonZero, ops};

pub mod expression;
mod prettyprint;
pub mod statement;
pub mod tree;

pub use expression::Expression;
pub use prettyprint::{Pretty, PrintConfig};
pub use statement::Statement;
pub use tree::{Child, Element, NodeKind, SyntaxNode};

/// Syntax Tree representing the source
#[must_use]
#[derive(Debug)]
pub struct AST {
  /// The source code which the AST is for
  pub source: String,
  /// Index of line locations, lazily constructed when required
  line_index: OnceCell<LineIndex>,
  /// The tokens of the source, including comments and the end of file
  pub tokens: Vec<Token>,

  /// The top level statements of the source
  pub root_statements: Vec<StatementIdx>,
  /// All the statements in the source
  pub statements: Vec<Statement>,
  /// The expressions in the source
  pub expressions: Vec<Expression>,

  /// Errors found during parsing
  pub errors: Vec<ParseError>,
  /// Tokens which were expected but not found
  pub missing: Vec<Missing>,
}
impl AST {
  pub(crate) fn new(source: String) -> Self {
    let tokens = Tokeniser::from(source.as_str()).collect();
    Self::from_tokens(source, tokens)
  }

  pub(crate) fn from_tokens(source: String, tokens: Vec<Token>) -> Self {
    Self {
      source,
      line_index: OnceCell::new(),
      tokens,

      root_statements: Vec::new(),
      statements: Vec::new(),
      expressions: Vec::new(),

      errors: Vec::new(),
      missing: Vec::new(),
    }
  }

  pub(crate) fn reuse(&mut self, source: String) {
    self.tokens.clear();
    self.tokens.extend(Tokeniser::from(source.as_str()));
    self.source = source;
    self.line_index = OnceCell::new();

    self.root_statements.clear();
    self.statements.clear();
    self.expressions.clear();
    self.errors.clear();
    self.missing.clear();
  }

  /// Is the parsed AST valid, with no errors found during parsing?
  #[must_use]
  pub fn is_valid(&self) -> bool {
    self.errors.is_empty()
  }

  /// The line index for the AST, the locations of the new lines in the source code
  ///
  /// It is lazily initialised, and will be initialised on the first call
  pub fn line_index(&self) -> &LineIndex {
    self
      .line_index
      .get_or_init(|| LineIndex::from_source(&self.source))
  }

  /// The top level statements
  pub fn root_statements(&self) -> impl Iterator<Item = &Statement> {
    self.root_statements.iter().map(|statement| &self[*statement])
  }

  /// The generic view of the tree, with named fields and the spans of every node
  pub fn root(&self) -> SyntaxNode {
    tree::build(self)
  }

  /// Display the tree, with the given options
  pub fn pretty(&self, config: PrintConfig) -> Pretty<'_> {
    Pretty::new(self, config)
  }

  pub(crate) fn add_expression(&mut self, expression: impl Into<Expression>) -> ExpressionIdx {
    self.expressions.push(expression.into());
    ExpressionIdx(index_from_length(self.expressions.len()))
  }

  pub(crate) fn add_statement(&mut self, statement: impl Into<Statement>) -> StatementIdx {
    self.statements.push(statement.into());
    StatementIdx(index_from_length(self.statements.len()))
  }

  pub(crate) fn get_token_text(&self, token: TokenIdx) -> &str {
    Span::from(self[token]).source_text(&self.source)
  }

  pub(crate) fn token_span(&self, token: TokenIdx) -> Span {
    Span::from(self[token])
  }
}

/// Something the parser expected but didn't find, such as a closing bracket or an `end`
///
/// It is shown in the tree as an empty invalid node, in the construct it is missing from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Missing {
  /// The keyword or opening bracket of the construct the token is missing from
  pub owner: TokenIdx,
  /// Where the missing token should have been
  pub position: u32,
}

/// The one based index of the last item in an arena of the given length
fn index_from_length(length: usize) -> NonZero<u32> {
  let offset = u32::try_from(length.saturating_sub(1)).unwrap_or(u32::MAX - 1);
  NonZero::<u32>::MIN.saturating_add(offset)
}

impl ops::Index<ExpressionIdx> for AST {
  type Output = Expression;

  fn index(&self, index: ExpressionIdx) -> &Self::Output {
    &self.expressions[index.get()]
  }
}
impl ops::IndexMut<ExpressionIdx> for AST {
  fn index_mut(&mut self, index: ExpressionIdx) -> &mut Self::Output {
    &mut self.expressions[index.get()]
  }
}
impl ops::Index<StatementIdx> for AST {
  type Output = Statement;

  fn index(&self, index: StatementIdx) -> &Self::Output {
    &self.statements[index.get()]
  }
}
impl ops::Index<TokenIdx> for AST {
  type Output = Token;

  fn index(&self, index: TokenIdx) -> &Self::Output {
    &self.tokens[index.get()]
  }
}

/// A reference to an expression stored in the [`AST`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpressionIdx(NonZero<u32>);
impl ExpressionIdx {
  fn get(self) -> usize {
    self.0.get() as usize - 1
  }
}

/// A reference to a statement stored in the [`AST`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatementIdx(NonZero<u32>);
impl StatementIdx {
  fn get(self) -> usize {
    self.0.get() as usize - 1
  }
}

/// A reference to a token of the [`AST`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenIdx(NonZero<u32>);
impl TokenIdx {
  pub(crate) fn new(position: usize) -> Self {
    Self(index_from_length(position + 1))
  }

  fn get(self) -> usize {
    self.0.get() as usize - 1
  }

  /// The tokens from this token up to and including the end token
  pub(crate) fn range(self, end: Self) -> impl Iterator<Item = Self> {
    (self.get()..=end.get()).map(Self::new)
  }
}
