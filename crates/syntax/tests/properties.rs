//! # Property Tests
//!
//! Properties which should hold for any source, not just the ones written by hand.

use applescript_syntax::{Document, Edit, Span, Token, parse, tokenise};
use proptest::prelude::*;

/// Sources made of the characters which change how the rest of a line is tokenised, and the
/// keywords and brackets which start and end blocks
const INTERESTING_SOURCE: &str = concat!(
  "([a-z ]|is not|to|-|\"|\\\\|\\(\\*|\\*\\)|--|\\||¬|\n|\r|[0-9.e]|'s",
  "|tell |if |then|else|repeat |while |times|try|on error|end|of|set |with |in ",
  "|\\{|\\}|\\(|\\)|,|:){0,40}"
);

fn char_boundaries(source: &str) -> Vec<usize> {
  (0..=source.len()).filter(|index| source.is_char_boundary(*index)).collect()
}

proptest! {
  #[test]
  fn tokens_cover_the_source(source in any::<String>()) {
    let mut position = 0;

    for token in tokenise(&source) {
      prop_assert_eq!(token.trivia_span().start, position);
      prop_assert!(source.is_char_boundary(token.start as usize));
      position = token.end();
    }

    prop_assert_eq!(position as usize, source.len());
  }

  #[test]
  fn case_does_not_change_tokens(source in INTERESTING_SOURCE) {
    let lower: Vec<Token> = tokenise(&source).collect();
    let upper: Vec<Token> = tokenise(&source.to_ascii_uppercase()).collect();

    prop_assert_eq!(lower, upper);
  }

  #[test]
  fn case_does_not_change_the_tree(source in INTERESTING_SOURCE) {
    let nodes = |source: String| {
      let ast = parse(source);
      (ast.root().descendants()).map(|node| (node.kind, node.span)).collect::<Vec<_>>()
    };

    prop_assert_eq!(nodes(source.clone()), nodes(source.to_ascii_uppercase()));
  }

  #[test]
  fn parse_never_panics(source in INTERESTING_SOURCE) {
    let ast = parse(source.clone());
    let root = ast.root();

    for node in root.descendants() {
      prop_assert!(node.span.end as usize <= source.len());
      prop_assert!(node.span.start <= node.span.end);
    }
  }

  #[test]
  fn edits_match_tokenising_again(
    source in INTERESTING_SOURCE,
    start in any::<prop::sample::Index>(),
    length in 0usize..8,
    text in INTERESTING_SOURCE,
  ) {
    let boundaries = char_boundaries(&source);
    let start = start.index(boundaries.len());
    let end = (start + length).min(boundaries.len() - 1);
    let range = Span::new(boundaries[start] as u32, boundaries[end] as u32);

    let mut document = Document::new(source.clone());
    document.edit(Edit::new(range, text.clone())).unwrap();

    let mut expected = source;
    expected.replace_range(range.range(), &text);
    let tokens: Vec<Token> = tokenise(&expected).collect();

    prop_assert_eq!(document.source(), &expected[..]);
    prop_assert_eq!(document.tokens(), &tokens[..]);
  }
}
