//! The flat view of the tokens, used for syntax highlighting.

use crate::{
  span::Span,
  tokeniser::{Category, Tokeniser},
};

/// The highlighting category of each token in the source, in order.
///
/// Tokens without a category, such as unknown characters, are skipped.
///
/// # Examples
/// ```
/// use applescript_syntax::{Category, Span, highlight};
///
/// let mut tokens = highlight("set x to 5");
/// assert_eq!(tokens.next(), Some((Span::new(0, 3), Category::Keyword)));
/// assert_eq!(tokens.next(), Some((Span::new(4, 5), Category::Identifier)));
/// ```
pub fn highlight(source: &str) -> impl Iterator<Item = (Span, Category)> + '_ {
  Tokeniser::from(source)
    .filter_map(|token| Some((Span::from(token), token.category(source)?)))
}
