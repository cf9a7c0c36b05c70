//! # Incremental Tests
//!
//! Check that editing a document leaves the same tokens as tokenising the edited source
//! from scratch.

use applescript_syntax::{Document, Edit, EditError, Span, Token, tokenise};
use indoc::indoc;

fn assert_same_as_full(document: &Document) {
  let expected: Vec<Token> = tokenise(document.source()).collect();
  assert_eq!(document.tokens(), &expected[..], "source: {:?}", document.source());
  assert_eq!(document.states().len(), expected.len());
}

fn edit(source: &str, range: (u32, u32), text: &str) -> Document {
  let mut document = Document::new(source.to_owned());
  document.edit(Edit::new(Span::new(range.0, range.1), text)).unwrap();

  assert_same_as_full(&document);
  document
}

#[test]
fn new_document() {
  let document = Document::new("set x to 5".to_owned());
  assert_same_as_full(&document);
  assert_eq!(document.tokens().len(), 5);
}

#[test]
fn insert_and_delete() {
  let document = edit("set x to 5", (9, 9), "1");
  assert_eq!(document.source(), "set x to 15");

  let document = edit("set x to 15", (9, 10), "");
  assert_eq!(document.source(), "set x to 5");

  edit("", (0, 0), "beep");
  edit("beep", (0, 4), "");
}

#[test]
fn edits_on_other_lines_shift_tokens() {
  let source = indoc! {"
    set x to 1
    set y to 2
    set z to 3
  "};

  let document = edit(source, (4, 5), "longer_name");
  assert!(document.source().starts_with("set longer_name to 1\n"));

  edit(source, (0, 0), "-- a new first line\n");
  edit(source, (source.len() as u32, source.len() as u32), "log z\n");
}

#[test]
fn edit_extends_a_keyword_phrase() {
  // `is not` becomes `is not equal to`
  let document = edit("a is not b", (8, 8), " equal to");
  assert_eq!(document.tokens().len(), 4);

  // `on` becomes `ontology`
  edit("on run", (2, 2), "tology");

  // splitting a phrase in two
  edit("a is greater than b", (12, 12), "x");
}

#[test]
fn edit_changes_a_following_minus() {
  // `x -1` is a subtraction, but `to -1` is a negative number
  edit("set y to x -1", (9, 10), "");
  edit("set y to -1", (9, 9), "x ");
}

#[test]
fn opening_a_string_changes_the_rest_of_the_file() {
  let source = "set a to 1\nset b to 2\nset c to 3";
  let document = edit(source, (9, 9), "\"");
  assert_eq!(document.tokens().len(), 5);

  let document = edit(&document.source().to_owned(), (9, 10), "");
  assert_eq!(document.tokens().len(), 13);
}

#[test]
fn opening_a_block_comment() {
  let source = "log 1\nlog 2\nlog 3";
  edit(source, (6, 6), "(*");
  edit(source, (6, 6), "(* closed *)");
  edit("log 1\n(*log 2\n*)log 3", (6, 8), "");
}

#[test]
fn line_continuations() {
  edit("set x to 1 +\n 2", (12, 12), " ¬");
  edit("set x to 1 + ¬\n 2", (12, 15), "");
}

#[test]
fn multi_byte_characters() {
  edit("a ≠ b", (2, 5), "=");
  edit("a = b", (2, 3), "≠");
  edit("set café to 1", (4, 9), "cafe");
}

#[test]
fn several_edits() {
  let mut document = Document::new("set x to 1".to_owned());
  document
    .edits([
      Edit::insert(10, "\nlog x"),
      Edit::new(Span::new(4, 5), "y"),
      Edit::new(Span::new(15, 16), "y"),
      Edit::delete(Span::new(0, 0)),
    ])
    .unwrap();

  assert_eq!(document.source(), "set y to 1\nlog y");
  assert_same_as_full(&document);
}

#[test]
fn every_single_character_deletion() {
  let source = indoc! {"
    on greet(name) -- say hello
      display dialog \"Hello \" & name with title \"Hi\"
      if name is not equal to \"\" then return {a:1, b:-2}
    end greet
  "};

  for (index, character) in source.char_indices() {
    let end = index + character.len_utf8();
    edit(source, (index as u32, end as u32), "");
  }
}

#[test]
fn every_single_character_insertion() {
  let source = "set x to \"a\" & 1 -- c\n(* d *) x's y";

  for index in (0..=source.len()).filter(|index| source.is_char_boundary(*index)) {
    for text in ["\"", "-", "(*", "|", "\n", "¬", "a", " "] {
      edit(source, (index as u32, index as u32), text);
    }
  }
}

#[test]
fn parse_after_edit() {
  let mut document = Document::new("set x to".to_owned());
  assert!(!document.parse().is_valid());

  document.edit(Edit::insert(8, " 5")).unwrap();
  let ast = document.parse();
  assert!(ast.is_valid());
  assert_eq!(ast.source, "set x to 5");
}

#[test]
fn invalid_edits() {
  let mut document = Document::new("a ≠ b".to_owned());

  assert_eq!(
    document.edit(Edit::insert(20, "x")),
    Err(EditError::OutOfBounds {
      range: Span::new(20, 20),
      length: 7,
    })
  );
  assert_eq!(
    document.edit(Edit::new(Span::new(3, 1), "")),
    Err(EditError::Reversed(Span::new(3, 1)))
  );
  assert_eq!(document.edit(Edit::insert(3, "x")), Err(EditError::NotCharBoundary(3)));

  // the document is unchanged
  assert_eq!(document.source(), "a ≠ b");
  assert_same_as_full(&document);
}
