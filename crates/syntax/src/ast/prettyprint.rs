//! Pretty-print the AST into a human readable format.
//!
//! Based upon this [blog post](https://www.georgevreilly.com/blog/2023/01/24/TreeInRust2PrintingTrees.html)

use super::{AST, tree::SyntaxNode};
use std::fmt;

impl fmt::Display for AST {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.pretty(PrintConfig::default()).fmt(f)
  }
}

const OTHER_CHILD: &str = "│  ";
const OTHER_ENTRY: &str = "├─ ";
const FINAL_CHILD: &str = "   ";
const FINAL_ENTRY: &str = "╰─ ";

/// Fields of tokens which are not shown, as they are the same for every node of a kind
const HIDDEN_FIELDS: [&str; 3] = ["keyword", "opening", "closing"];

/// Options for displaying the tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrintConfig {
  /// Show the byte range of each node
  pub spans: bool,
}

/// The tree of an AST, which can be displayed
pub struct Pretty<'a> {
  root: SyntaxNode,
  source: &'a str,
  config: PrintConfig,
}
impl<'a> Pretty<'a> {
  pub(super) fn new(ast: &'a AST, config: PrintConfig) -> Self {
    Self {
      root: ast.root(),
      source: &ast.source,
      config,
    }
  }

  fn node(&self, f: &mut fmt::Formatter, node: &SyntaxNode, prefix: &str, last: bool) -> fmt::Result {
    let connector = if last { FINAL_ENTRY } else { OTHER_ENTRY };
    write!(f, "{prefix}{connector}{}", node.kind)?;

    let detail = (node.tokens())
      .filter(|(field, _)| !field.is_some_and(|field| HIDDEN_FIELDS.contains(&field)))
      .map(|(_, token)| token.text(self.source))
      .collect::<Vec<_>>();
    if !detail.is_empty() {
      write!(f, " ({})", detail.join(" "))?;
    }

    if self.config.spans {
      write!(f, " [{}..{}]", node.span.start, node.span.end)?;
    }
    writeln!(f)?;

    let prefix = format!("{prefix}{}", if last { FINAL_CHILD } else { OTHER_CHILD });
    self.children(f, node, &prefix)
  }

  fn children(&self, f: &mut fmt::Formatter, node: &SyntaxNode, prefix: &str) -> fmt::Result {
    let mut children = node.nodes().peekable();

    while let Some(child) = children.next() {
      self.node(f, child, prefix, children.peek().is_none())?;
    }

    Ok(())
  }
}
impl fmt::Display for Pretty<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    // top level statements are all drawn as siblings of each other
    for statement in self.root.nodes() {
      self.node(f, statement, "", false)?;
    }

    Ok(())
  }
}
