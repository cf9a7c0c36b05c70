//! Regions of the source which an editor can fold away.

use crate::{
  ast::AST,
  span::Span,
  tokeniser::TokenKind,
};

/// What is being folded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldingKind {
  /// A block construct, such as a handler or a tell block
  Region,
  /// A block comment `(* .. *)`
  Comment,
}

/// A range of lines which can be folded, from the line of the opening keyword
/// to the line the construct ends on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldingRange {
  /// The first line of the range, starting at 1
  pub start_line: usize,
  /// The last line of the range, starting at 1
  pub end_line: usize,
  /// What is being folded
  pub kind: FoldingKind,
}

/// Get the folding ranges of the blocks and block comments which span multiple lines,
/// ordered by their start.
pub fn folding_ranges(ast: &AST) -> Vec<FoldingRange> {
  let line_index = ast.line_index();
  let mut ranges = Vec::new();

  let mut push = |span: Span, kind| {
    let (start_line, end_line) = (line_index.line(span), line_index.final_line(span));
    if start_line != end_line {
      ranges.push(FoldingRange {
        start_line,
        end_line,
        kind,
      });
    }
  };

  let root = ast.root();
  for node in root.descendants().filter(|node| node.kind.is_block()) {
    push(node.span, FoldingKind::Region);
  }

  let block_comments = (ast.tokens.iter())
    .filter(|token| token.kind == TokenKind::Comment)
    .filter(|token| token.text(&ast.source).starts_with("(*"));
  for comment in block_comments {
    push(comment.into(), FoldingKind::Comment);
  }

  ranges.sort_by_key(|range| (range.start_line, range.end_line));
  ranges
}
