//! # Tokeniser Tests
//!
//! Check the tokens found for a source, through the public tokenising interface.

use applescript_syntax::{Category, LexState, Span, TokenKind, Tokeniser, highlight, tokenise};

fn kinds(source: &str) -> Vec<TokenKind> {
  tokenise(source).map(|token| token.kind).collect()
}

fn texts(source: &str) -> Vec<&str> {
  tokenise(source).map(|token| token.text(source)).collect()
}

#[test]
fn empty_source() {
  assert_eq!(kinds(""), [TokenKind::EndOfFile]);
  assert_eq!(kinds("   \n\t  "), [TokenKind::EndOfFile]);

  let token = tokenise("  \n ").last().unwrap();
  assert_eq!(token.start, 4);
  assert_eq!(token.trivia, 4);
  assert!(token.line_break);
}

#[test]
fn ends_with_end_of_file() {
  let mut tokeniser = tokenise("beep");
  assert_eq!(tokeniser.next().map(|token| token.kind), Some(TokenKind::Command));
  assert_eq!(tokeniser.next().map(|token| token.kind), Some(TokenKind::EndOfFile));
  assert_eq!(tokeniser.next(), None);
  assert_eq!(tokeniser.next(), None);
}

#[test]
fn tokens_cover_the_source() {
  let source = "set x to {1, \"two\"} -- comment\n(* block *) log x's name ≠ 3";
  let mut position = 0;

  for token in tokenise(source) {
    assert_eq!(token.trivia_span().start, position);
    position = token.end();
  }
  assert_eq!(position as usize, source.len());
}

#[test]
fn keyword_phrases() {
  assert_eq!(kinds("is not equal to"), [TokenKind::NotEqual, TokenKind::EndOfFile]);
  assert_eq!(kinds("isn't"), [TokenKind::NotEqual, TokenKind::EndOfFile]);
  assert_eq!(
    kinds("display dialog \"hi\" with title \"t\""),
    [
      TokenKind::Command,
      TokenKind::String,
      TokenKind::Parameter,
      TokenKind::String,
      TokenKind::EndOfFile
    ]
  );
  assert_eq!(texts("a  is   greater than b"), ["a", "is   greater than", "b", ""]);
}

#[test]
fn keywords_ignore_case() {
  assert_eq!(kinds("TELL"), [TokenKind::Tell, TokenKind::EndOfFile]);
  assert_eq!(kinds("End Tell"), [TokenKind::End, TokenKind::Tell, TokenKind::EndOfFile]);
  assert_eq!(kinds("Missing Value"), [TokenKind::MissingValue, TokenKind::EndOfFile]);
}

#[test]
fn keyword_prefixes_are_identifiers() {
  assert_eq!(kinds("ontology"), [TokenKind::Identifier, TokenKind::EndOfFile]);
  assert_eq!(kinds("settings"), [TokenKind::Identifier, TokenKind::EndOfFile]);
  assert_eq!(kinds("is_valid"), [TokenKind::Identifier, TokenKind::EndOfFile]);
  assert_eq!(kinds("tell2"), [TokenKind::Identifier, TokenKind::EndOfFile]);
}

#[test]
fn quoted_identifiers() {
  assert_eq!(texts("|my var| + 1"), ["|my var|", "+", "1", ""]);
  assert_eq!(kinds("|tell|"), [TokenKind::Identifier, TokenKind::EndOfFile]);

  // must close on the same line
  assert_eq!(
    kinds("|foo\n|"),
    [TokenKind::Unknown, TokenKind::Identifier, TokenKind::Unknown, TokenKind::EndOfFile]
  );
}

#[test]
fn comments() {
  assert_eq!(texts("-- line comment\nx"), ["-- line comment", "x", ""]);
  assert_eq!(texts("#!/usr/bin/osascript"), ["#!/usr/bin/osascript", ""]);
  assert_eq!(texts("(* a (* nested *) comment *) x"), ["(* a (* nested *) comment *)", "x", ""]);

  // unterminated block comments continue to the end of the file
  let tokens: Vec<_> = tokenise("(* never closed\nset x to 5").collect();
  assert_eq!(tokens.len(), 2);
  assert_eq!(tokens[0].kind, TokenKind::Comment);
  assert!(!tokens[0].is_terminated("(* never closed\nset x to 5"));

  // a hash not followed by a bang isn't a comment
  assert_eq!(kinds("#"), [TokenKind::Unknown, TokenKind::EndOfFile]);
}

#[test]
fn strings() {
  assert_eq!(texts(r#""a \"quoted\" word""#), [r#""a \"quoted\" word""#, ""]);
  assert_eq!(texts("\"multi\nline\""), ["\"multi\nline\"", ""]);

  let source = "\"unterminated";
  let token = tokenise(source).next().unwrap();
  assert_eq!(token.kind, TokenKind::String);
  assert_eq!(token.length as usize, source.len());
  assert!(!token.is_terminated(source));
}

#[test]
fn numbers() {
  assert_eq!(texts("1 2.5 1e3 1.5E-2"), ["1", "2.5", "1e3", "1.5E-2", ""]);
  assert_eq!(texts("3."), ["3", ".", ""]);
  assert_eq!(texts("1e"), ["1", "e", ""]);
}

#[test]
fn minus_is_a_sign_only_before_an_operand() {
  assert_eq!(kinds("-1"), [TokenKind::Number, TokenKind::EndOfFile]);
  assert_eq!(kinds("x -1"), [TokenKind::Identifier, TokenKind::Minus, TokenKind::Number, TokenKind::EndOfFile]);
  assert_eq!(kinds("x - -1"), [TokenKind::Identifier, TokenKind::Minus, TokenKind::Number, TokenKind::EndOfFile]);
  assert_eq!(kinds("(1)-2"), [
    TokenKind::LeftParen,
    TokenKind::Number,
    TokenKind::RightParen,
    TokenKind::Minus,
    TokenKind::Number,
    TokenKind::EndOfFile
  ]);
  assert_eq!(kinds("set x to -2"), [
    TokenKind::Set,
    TokenKind::Identifier,
    TokenKind::To,
    TokenKind::Number,
    TokenKind::EndOfFile
  ]);
}

#[test]
fn comments_keep_the_lexer_state() {
  let source = "x (* note *) -1";
  assert_eq!(kinds(source), [
    TokenKind::Identifier,
    TokenKind::Comment,
    TokenKind::Minus,
    TokenKind::Number,
    TokenKind::EndOfFile
  ]);
}

#[test]
fn unicode_operators() {
  assert_eq!(kinds("¬ ≠ ≤ ≥ ÷"), [
    TokenKind::Not,
    TokenKind::NotEqual,
    TokenKind::LessEqual,
    TokenKind::GreaterEqual,
    TokenKind::Divide,
    TokenKind::EndOfFile
  ]);
  assert_eq!(kinds("/= <= >="), [
    TokenKind::NotEqual,
    TokenKind::LessEqual,
    TokenKind::GreaterEqual,
    TokenKind::EndOfFile
  ]);
}

#[test]
fn line_breaks() {
  let tokens: Vec<_> = tokenise("a\nb c\r\n\nd").collect();
  let breaks: Vec<_> = tokens.iter().map(|token| token.line_break).collect();
  assert_eq!(breaks, [false, true, false, true, false]);
}

#[test]
fn classic_line_endings() {
  let tokens: Vec<_> = tokenise("a\rb\r\rc").collect();
  let breaks: Vec<_> = tokens.iter().map(|token| token.line_break).collect();
  assert_eq!(breaks, [false, true, true, false]);

  assert_eq!(texts("-- note\rx"), ["-- note", "x", ""]);
  assert_eq!(kinds("|a\rb|"), [
    TokenKind::Unknown,
    TokenKind::Identifier,
    TokenKind::Identifier,
    TokenKind::Unknown,
    TokenKind::EndOfFile
  ]);

  for source in ["a + ¬\r  b", "a + ¬ \r\n  b"] {
    let tokens: Vec<_> = tokenise(source).collect();
    assert_eq!(tokens.len(), 4);
    assert!(!tokens[2].line_break);
  }
}

#[test]
fn line_continuation() {
  let tokens: Vec<_> = tokenise("a + ¬\n  b").collect();
  assert_eq!(tokens.len(), 4);
  assert!(!tokens[2].line_break);

  // a continuation character followed by more text is the not operator
  assert_eq!(kinds("¬ b"), [TokenKind::Not, TokenKind::Identifier, TokenKind::EndOfFile]);
}

#[test]
fn unknown_characters() {
  assert_eq!(kinds("$ 🤗"), [TokenKind::Unknown, TokenKind::Unknown, TokenKind::EndOfFile]);
  assert_eq!(texts("🤗"), ["🤗", ""]);
}

#[test]
fn non_ascii_identifiers() {
  assert_eq!(texts("café + naïve"), ["café", "+", "naïve", ""]);
  assert_eq!(kinds("café"), [TokenKind::Identifier, TokenKind::EndOfFile]);
}

#[test]
fn resuming() {
  let source = "set x to 1\nset y to x - 1";
  let all: Vec<_> = tokenise(source).collect();

  let position = source.find('\n').unwrap();
  let resumed: Vec<_> = Tokeniser::resume(source, position, LexState::AFTER_OPERAND).collect();
  assert_eq!(resumed[..], all[4..]);

  // the state decides whether a minus is a sign
  let kinds_from = |state| {
    (Tokeniser::resume("x -1", 1, state).map(|token| token.kind)).collect::<Vec<_>>()
  };
  assert_eq!(kinds_from(LexState::AFTER_OPERAND), [
    TokenKind::Minus,
    TokenKind::Number,
    TokenKind::EndOfFile
  ]);
  assert_eq!(kinds_from(LexState::INITIAL), [TokenKind::Number, TokenKind::EndOfFile]);
}

#[test]
fn categories() {
  let categories: Vec<_> = highlight("set x to \"a\" & 5 -- done\n{1}").collect();

  assert_eq!(
    categories,
    [
      (Span::new(0, 3), Category::Keyword),
      (Span::new(4, 5), Category::Identifier),
      (Span::new(6, 8), Category::Keyword),
      (Span::new(9, 12), Category::String),
      (Span::new(13, 14), Category::Operator),
      (Span::new(15, 16), Category::Number),
      (Span::new(17, 24), Category::Comment),
      (Span::new(25, 26), Category::Punctuation),
      (Span::new(26, 27), Category::Number),
      (Span::new(27, 28), Category::Punctuation),
    ]
  );
}
