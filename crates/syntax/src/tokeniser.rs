use crate::{keywords, span::Span};
use std::{fmt, iter};

/// Convert a string of source code into an [Iterator] of [Token]s
///
/// The last token is always an [`TokenKind::EndOfFile`], which holds any trailing trivia.
#[derive(Clone, Debug)]
pub struct Tokeniser<'source> {
  /// The source code to tokenise
  source: &'source str,
  /// The current position in the source code
  position: usize,
  /// The state of the lexer before the next token
  state: LexState,
  /// Has the end of file token been produced?
  finished: bool,
}
impl<'source> From<&'source str> for Tokeniser<'source> {
  /// Create a new [Tokeniser] from a source code string
  ///
  /// # Panics
  /// Panics if the length of the source code is greater than `u32::MAX`
  fn from(value: &'source str) -> Self {
    Self::resume(value, 0, LexState::INITIAL)
  }
}
impl<'source> Tokeniser<'source> {
  /// Continue tokenising from a token boundary, with the state the lexer was in there
  ///
  /// # Panics
  /// Panics if the length of the source code is greater than `u32::MAX`, or the position
  /// is not on a character boundary
  #[must_use]
  pub fn resume(source: &'source str, position: usize, state: LexState) -> Self {
    assert!(source.len() < u32::MAX as usize);
    assert!(source.is_char_boundary(position));

    Self {
      source,
      position,
      state,
      finished: false,
    }
  }

  /// The state of the lexer before the next token
  #[must_use]
  pub fn state(&self) -> LexState {
    self.state
  }

  /// The position in the source the next token's trivia starts at
  #[must_use]
  pub fn position(&self) -> usize {
    self.position
  }

  /// Has the end of the source code been reached?
  fn is_end(&self, position: usize) -> bool {
    position >= self.source.len()
  }

  fn byte(&self, position: usize) -> Option<u8> {
    self.source.as_bytes().get(position).copied()
  }

  /// Skip whitespace and line continuations, returning if a line was broken
  fn skip_trivia(&mut self) -> bool {
    let mut line_break = false;

    while let Some(character) = self.source[self.position..].chars().next() {
      match character {
        '\n' | '\r' => line_break = true,
        '¬' if self.is_continuation(self.position + '¬'.len_utf8()) => {
          // skip past the end of the line, so the line break isn't counted
          let rest = &self.source.as_bytes()[self.position..];
          self.position += match rest.iter().position(|c| is_line_end(*c)) {
            Some(end) if rest[end..].starts_with(b"\r\n") => end + 2,
            Some(end) => end + 1,
            None => rest.len(),
          };
          continue;
        }
        c if c.is_whitespace() => {}
        _ => break,
      }

      self.position += character.len_utf8();
    }

    line_break
  }

  /// Is the rest of the line from the position blank?
  fn is_continuation(&self, position: usize) -> bool {
    self.source.as_bytes()[position..]
      .iter()
      .find(|c| !matches!(c, b' ' | b'\t'))
      .is_none_or(|c| is_line_end(*c))
  }

  /// Get the next token from the source code
  fn get_next_token(&self) -> (TokenKind, usize) {
    let character = self.source.as_bytes()[self.position];
    let next_character = self.byte(self.position + 1);

    match character {
      // Comments
      b'-' if matches!(next_character, Some(b'-')) => self.line_comment(),
      b'#' if matches!(next_character, Some(b'!')) => self.line_comment(),
      b'(' if matches!(next_character, Some(b'*')) => self.block_comment(),

      // Values
      b'"' => self.string(),
      b'0'..=b'9' => self.number(),
      b'-' if !self.state.is_after_operand() && next_character.is_some_and(|c| c.is_ascii_digit()) => {
        self.number()
      }
      b'_' | b'a'..=b'z' | b'A'..=b'Z' => self.word(),
      b'|' => self.quoted_identifier(),

      // Punctuation
      b'(' => (TokenKind::LeftParen, 1),
      b')' => (TokenKind::RightParen, 1),
      b'{' => (TokenKind::LeftCurly, 1),
      b'}' => (TokenKind::RightCurly, 1),
      b'[' => (TokenKind::LeftSquare, 1),
      b']' => (TokenKind::RightSquare, 1),
      b',' => (TokenKind::Comma, 1),
      b':' => (TokenKind::Colon, 1),
      b'\'' => (TokenKind::Apostrophe, 1),

      // Operators
      b'+' => (TokenKind::Plus, 1),
      b'-' => (TokenKind::Minus, 1),
      b'*' => (TokenKind::Multiply, 1),
      b'/' if matches!(next_character, Some(b'=')) => (TokenKind::NotEqual, 2),
      b'/' => (TokenKind::Divide, 1),
      b'^' => (TokenKind::Caret, 1),
      b'&' => (TokenKind::Ampersand, 1),
      b'=' => (TokenKind::Equal, 1),
      b'<' if matches!(next_character, Some(b'=')) => (TokenKind::LessEqual, 2),
      b'<' => (TokenKind::Less, 1),
      b'>' if matches!(next_character, Some(b'=')) => (TokenKind::GreaterEqual, 2),
      b'>' => (TokenKind::Greater, 1),

      x if x.is_ascii() => (TokenKind::Unknown, 1),
      _ => self.unicode(),
    }
  }

  /// The non-ASCII operators, letters starting identifiers, or unknown characters
  fn unicode(&self) -> (TokenKind, usize) {
    let Some(character) = self.source[self.position..].chars().next() else {
      return (TokenKind::Unknown, 1);
    };

    match character {
      '÷' => (TokenKind::Divide, character.len_utf8()),
      '≠' => (TokenKind::NotEqual, character.len_utf8()),
      '≤' => (TokenKind::LessEqual, character.len_utf8()),
      '≥' => (TokenKind::GreaterEqual, character.len_utf8()),
      '¬' => (TokenKind::Not, character.len_utf8()),
      c if c.is_alphabetic() => self.word(),
      c => (TokenKind::Unknown, c.len_utf8()),
    }
  }

  /// Skip to the end of a line comment, not including the line break
  fn line_comment(&self) -> (TokenKind, usize) {
    let length = self.source.as_bytes()[self.position..]
      .iter()
      .take_while(|c| !is_line_end(**c))
      .count();

    (TokenKind::Comment, length)
  }

  /// A block comment `(* .. *)`, which can contain a single level of nested comment
  ///
  /// If unterminated, it continues to the end of the file.
  fn block_comment(&self) -> (TokenKind, usize) {
    let bytes = self.source.as_bytes();
    let mut position = self.position + 2;
    let mut depth = 1;

    while depth > 0 && !self.is_end(position) {
      match (bytes[position], bytes.get(position + 1)) {
        (b'*', Some(b')')) => {
          depth -= 1;
          position += 2;
        }
        (b'(', Some(b'*')) if depth == 1 => {
          depth += 1;
          position += 2;
        }
        _ => position += 1,
      }
    }

    (TokenKind::Comment, position.min(bytes.len()) - self.position)
  }

  /// Go to the end of a string token, the closing quote
  ///
  /// A backslash escapes the character after it. If unterminated, the string continues
  /// to the end of the file.
  fn string(&self) -> (TokenKind, usize) {
    let bytes = self.source.as_bytes();
    let mut position = self.position + 1;

    loop {
      match bytes.get(position) {
        None => break (TokenKind::String, bytes.len() - self.position),
        Some(b'"') => break (TokenKind::String, position + 1 - self.position),
        Some(b'\\') => match bytes.get(position + 1) {
          Some(escaped) => position += 1 + utf8_length(*escaped),
          None => position += 1,
        },
        Some(_) => position += 1,
      }
    }
  }

  /// Get a number token, with optional sign, decimal part, and exponent
  fn number(&self) -> (TokenKind, usize) {
    let bytes = self.source.as_bytes();
    let digits = |position: usize| {
      bytes[position.min(bytes.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
    };
    let is_digit = |position: usize| bytes.get(position).is_some_and(u8::is_ascii_digit);

    let mut position = self.position;
    if bytes[position] == b'-' {
      position += 1;
    }
    position += digits(position);

    // Match a decimal point
    if bytes.get(position) == Some(&b'.') && is_digit(position + 1) {
      position += 1 + digits(position + 1);
    }

    // Match an exponent
    if matches!(bytes.get(position), Some(b'e' | b'E')) {
      let sign = usize::from(matches!(bytes.get(position + 1), Some(b'+' | b'-')));
      if is_digit(position + 1 + sign) {
        position += 1 + sign;
        position += digits(position);
      }
    }

    (TokenKind::Number, position - self.position)
  }

  /// An identifier wrapped in pipes, e.g. `|my variable|`
  ///
  /// The pipes must be closed on the same line, otherwise it is an unknown character.
  fn quoted_identifier(&self) -> (TokenKind, usize) {
    let closing = self.source.as_bytes()[self.position + 1..]
      .iter()
      .take_while(|c| !is_line_end(**c))
      .position(|c| *c == b'|');

    match closing {
      Some(length) => (TokenKind::Identifier, length + 2),
      None => (TokenKind::Unknown, 1),
    }
  }

  /// Get a word, either a keyword (possibly of multiple words) or an identifier
  fn word(&self) -> (TokenKind, usize) {
    let text = &self.source[self.position..];
    let length = text
      .char_indices()
      .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
      .map_or(text.len(), |(index, _)| index);

    keywords::lookup(text, length).unwrap_or((TokenKind::Identifier, length))
  }
}
impl Iterator for Tokeniser<'_> {
  type Item = Token;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }

    let trivia_start = self.position;
    let line_break = self.skip_trivia();
    let start = self.position;

    let kind = if self.is_end(start) {
      self.finished = true;
      TokenKind::EndOfFile
    } else {
      let (kind, length) = self.get_next_token();
      self.position += length;
      kind
    };
    self.state = self.state.after(kind);

    Some(Token {
      kind,
      start: u32::try_from(start).unwrap_or(u32::MAX),
      length: u32::try_from(self.position - start).unwrap_or(0),
      trivia: u32::try_from(start - trivia_start).unwrap_or(0),
      line_break,
    })
  }
}
impl iter::FusedIterator for Tokeniser<'_> {}

/// Does the byte end a line? Both `\n` and classic Mac `\r` line endings are accepted.
pub(crate) fn is_line_end(byte: u8) -> bool {
  matches!(byte, b'\n' | b'\r')
}

/// The length of a UTF-8 character from its first byte
fn utf8_length(byte: u8) -> usize {
  match byte {
    x if (x & 0b1111_0000) == 0b1111_0000 => 4,
    x if (x & 0b1110_0000) == 0b1110_0000 => 3,
    x if (x & 0b1100_0000) == 0b1100_0000 => 2,
    _ => 1,
  }
}

/// The state of the tokeniser between tokens.
///
/// Lexing from a position is a pure function of the source after it and this state, so
/// tokenising can be resumed part way through a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexState(u8);
impl LexState {
  /// At the start of a file, or after a token which doesn't end an operand
  pub const INITIAL: Self = Self(0);
  /// After a token which ends an operand, so a `-` is subtraction rather than a sign
  pub const AFTER_OPERAND: Self = Self(1);

  /// The state as a small integer
  #[must_use]
  pub const fn id(self) -> u8 {
    self.0
  }

  /// Is the previous significant token the end of an operand?
  #[must_use]
  pub const fn is_after_operand(self) -> bool {
    self.0 == Self::AFTER_OPERAND.0
  }

  fn after(self, kind: TokenKind) -> Self {
    match kind {
      TokenKind::Comment => self,
      kind if kind.ends_operand() => Self::AFTER_OPERAND,
      _ => Self::INITIAL,
    }
  }
}
impl From<LexState> for u8 {
  fn from(state: LexState) -> Self {
    state.0
  }
}

/// A Token of source code, a lexeme of the language
///
/// With the type of token, start position and length of the token in the source code, and
/// the whitespace skipped before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Token {
  /// The type of the token
  pub kind: TokenKind,
  /// The byte offset the token starts at
  pub start: u32,
  /// The length of the token in bytes
  pub length: u32,
  /// The number of bytes of whitespace directly before the token
  pub trivia: u32,
  /// Does the whitespace before the token contain a line break?
  pub line_break: bool,
}
impl Token {
  /// The byte offset after the end of the token
  #[must_use]
  pub const fn end(self) -> u32 {
    self.start + self.length
  }

  /// The location of the whitespace before the token
  #[must_use]
  pub const fn trivia_span(self) -> Span {
    Span::new(self.start - self.trivia, self.start)
  }

  /// The source text of the token
  #[must_use]
  pub fn text(self, source: &str) -> &str {
    Span::from(self).source_text(source)
  }

  /// The category of the token, as used for highlighting
  #[must_use]
  pub fn category(self, source: &str) -> Option<Category> {
    let category = match self.kind {
      TokenKind::Comment => Category::Comment,
      TokenKind::String => Category::String,
      TokenKind::Number => Category::Number,
      TokenKind::Identifier => Category::Identifier,
      TokenKind::Unknown | TokenKind::EndOfFile => return None,
      kind if kind.is_punctuation() => Category::Punctuation,
      // word operators such as `mod` or `is equal to` are keywords
      kind if kind.is_operator() && !self.is_word(source) => Category::Operator,
      _ => Category::Keyword,
    };

    Some(category)
  }

  /// Does a string or comment token have its closing delimiter?
  #[must_use]
  pub fn is_terminated(self, source: &str) -> bool {
    let text = self.text(source);
    match self.kind {
      TokenKind::String => text.len() >= 2 && text.ends_with('"') && !ends_with_escape(&text[..text.len() - 1]),
      TokenKind::Comment if text.starts_with("(*") => text.len() >= 4 && text.ends_with("*)"),
      _ => true,
    }
  }

  fn is_word(self, source: &str) -> bool {
    self.text(source).starts_with(|c: char| c.is_alphabetic())
  }
}
impl From<Token> for Span {
  fn from(token: Token) -> Self {
    Self::new(token.start, token.end())
  }
}
impl From<&Token> for Span {
  fn from(token: &Token) -> Self {
    Self::from(*token)
  }
}

/// Does the text end in an odd number of backslashes?
fn ends_with_escape(text: &str) -> bool {
  text.bytes().rev().take_while(|c| *c == b'\\').count() % 2 == 1
}

/// The broad category of a token, for highlighting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
  /// A line or block comment
  Comment,
  /// A string literal
  String,
  /// A number literal
  Number,
  /// A keyword, including keywords made of multiple words
  Keyword,
  /// A symbolic operator
  Operator,
  /// Brackets and separators
  Punctuation,
  /// A name which isn't a keyword
  Identifier,
}
impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Comment => write!(f, "comment"),
      Self::String => write!(f, "string"),
      Self::Number => write!(f, "number"),
      Self::Keyword => write!(f, "keyword"),
      Self::Operator => write!(f, "operator"),
      Self::Punctuation => write!(f, "punctuation"),
      Self::Identifier => write!(f, "identifier"),
    }
  }
}

/// The type of a token
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
  // Punctuation
  /// `(`
  LeftParen,
  /// `)`
  RightParen,
  /// `{`
  LeftCurly,
  /// `}`
  RightCurly,
  /// `[`
  LeftSquare,
  /// `]`
  RightSquare,
  /// `,`
  Comma,
  /// `:`
  Colon,
  /// `'`
  Apostrophe,

  // Operators
  /// `+`
  Plus,
  /// `-`
  Minus,
  /// `*`
  Multiply,
  /// `/` or `÷`
  Divide,
  /// `div`
  Div,
  /// `mod`
  Mod,
  /// `^`
  Caret,
  /// `&`
  Ampersand,
  /// `not` or `¬`
  Not,
  /// `and`
  And,
  /// `or`
  Or,
  /// `as`
  As,

  // Comparisons
  /// `=`, `is`, `equals`, `is equal to`
  Equal,
  /// `≠`, `/=`, `is not`, `isn't`, `does not equal`
  NotEqual,
  /// `<`, `is less than`, `comes before`
  Less,
  /// `>`, `is greater than`, `comes after`
  Greater,
  /// `≤`, `<=`, `is less than or equal to`, `is not greater than`
  LessEqual,
  /// `≥`, `>=`, `is greater than or equal to`, `is not less than`
  GreaterEqual,
  /// `contains`
  Contains,
  /// `does not contain`
  DoesNotContain,
  /// `is in`, `is contained by`
  IsIn,
  /// `is not in`, `is not contained by`
  IsNotIn,
  /// `starts with`, `begins with`
  StartsWith,
  /// `ends with`
  EndsWith,

  // Values
  /// An identifier for a variable, or text wrapped in pipes
  Identifier,
  /// A number, with optional sign, decimal part, and exponent
  Number,
  /// A string, any characters between `"`
  String,
  /// `true`
  True,
  /// `false`
  False,
  /// `missing value`
  MissingValue,
  /// `me`
  Me,
  /// `it`
  It,
  /// `result`
  Result,
  /// `scripting additions`
  ScriptingAdditions,
  /// `AppleScript`
  AppleScript,

  // Keywords
  /// `on`
  On,
  /// `to`
  To,
  /// `end`
  End,
  /// `script`
  Script,
  /// `tell`
  Tell,
  /// `if`
  If,
  /// `then`
  Then,
  /// `else`
  Else,
  /// `repeat`
  Repeat,
  /// `with`
  With,
  /// `from`
  From,
  /// `by`
  By,
  /// `in`
  In,
  /// `while`
  While,
  /// `until`
  Until,
  /// `times`
  Times,
  /// `forever`
  Forever,
  /// `try`
  Try,
  /// `on error`
  OnError,
  /// `error`
  Error,
  /// `considering`
  Considering,
  /// `ignoring`
  Ignoring,
  /// `but`
  But,
  /// `with timeout`, `with timeout of`
  WithTimeout,
  /// `seconds`
  Seconds,
  /// `using terms from`
  UsingTermsFrom,
  /// `use`
  Use,
  /// `version`
  Version,
  /// `property`, `prop`
  Property,
  /// `global`
  Global,
  /// `local`
  Local,
  /// `set`
  Set,
  /// `copy`
  Copy,
  /// `return`
  Return,
  /// `exit`
  Exit,
  /// `continue`
  Continue,
  /// `log`
  Log,
  /// `given`
  Given,
  /// `of`
  Of,
  /// `thru`, `through`
  Thru,
  /// `my`
  My,
  /// `its`
  Its,
  /// `the`
  The,
  /// `whose`, `where`
  Whose,
  /// `number`
  NumberKeyword,

  // Vocabulary classes
  /// An ordinal or quantifier, e.g. `first`, `last`, `every`
  Ordinal,
  /// A type of element, e.g. `item`, `window`, `text item`
  ElementType,
  /// A type which values can be coerced to, e.g. `integer`, `POSIX file`
  TypeName,
  /// An attribute of string comparison, e.g. `case`, `white space`
  Attribute,
  /// The name of a command, e.g. `display dialog`, `beep`
  Command,
  /// The name of a command parameter, e.g. `with title`, `default answer`
  Parameter,

  // Other
  /// A comment, `-- ..`, `#! ..`, or `(* .. *)`
  Comment,
  /// A token to indicate the end of the file
  EndOfFile,
  /// An unknown character, not known to fit in a [`TokenKind`]
  #[default]
  Unknown,
}
impl TokenKind {
  /// Is the token a bracket or separator?
  #[must_use]
  pub const fn is_punctuation(self) -> bool {
    matches!(
      self,
      Self::LeftParen
        | Self::RightParen
        | Self::LeftCurly
        | Self::RightCurly
        | Self::LeftSquare
        | Self::RightSquare
        | Self::Comma
        | Self::Colon
        | Self::Apostrophe
    )
  }

  /// Is the token an operator, in either its symbol or word form?
  #[must_use]
  pub const fn is_operator(self) -> bool {
    matches!(
      self,
      Self::Plus
        | Self::Minus
        | Self::Multiply
        | Self::Divide
        | Self::Div
        | Self::Mod
        | Self::Caret
        | Self::Ampersand
        | Self::Not
        | Self::And
        | Self::Or
        | Self::As
    ) || self.is_comparison()
  }

  /// Is the token a comparison operator?
  #[must_use]
  pub const fn is_comparison(self) -> bool {
    matches!(
      self,
      Self::Equal
        | Self::NotEqual
        | Self::Less
        | Self::Greater
        | Self::LessEqual
        | Self::GreaterEqual
        | Self::Contains
        | Self::DoesNotContain
        | Self::IsIn
        | Self::IsNotIn
        | Self::StartsWith
        | Self::EndsWith
    )
  }

  /// Can the token be the last token of an operand?
  #[must_use]
  pub const fn ends_operand(self) -> bool {
    matches!(
      self,
      Self::Identifier
        | Self::Number
        | Self::String
        | Self::RightParen
        | Self::RightCurly
        | Self::RightSquare
        | Self::True
        | Self::False
        | Self::MissingValue
        | Self::Me
        | Self::It
        | Self::Result
    )
  }

  /// Can the token be the first token of an operand?
  #[must_use]
  pub const fn starts_operand(self) -> bool {
    matches!(
      self,
      Self::Identifier
        | Self::Number
        | Self::String
        | Self::True
        | Self::False
        | Self::MissingValue
        | Self::Me
        | Self::It
        | Self::Result
        | Self::ScriptingAdditions
        | Self::AppleScript
        | Self::LeftParen
        | Self::LeftCurly
        | Self::Minus
        | Self::Not
        | Self::My
        | Self::Its
        | Self::The
        | Self::Version
        | Self::NumberKeyword
        | Self::Ordinal
        | Self::ElementType
        | Self::TypeName
        | Self::Command
    )
  }

  /// Can the token be used as a name, such as the name of a handler or record label?
  #[must_use]
  pub const fn is_name(self) -> bool {
    matches!(
      self,
      Self::Identifier
        | Self::Command
        | Self::ElementType
        | Self::TypeName
        | Self::Attribute
        | Self::Version
        | Self::NumberKeyword
        | Self::Result
    )
  }
}
impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      // Punctuation
      Self::LeftParen => write!(f, "("),
      Self::RightParen => write!(f, ")"),
      Self::LeftCurly => write!(f, "{{"),
      Self::RightCurly => write!(f, "}}"),
      Self::LeftSquare => write!(f, "["),
      Self::RightSquare => write!(f, "]"),
      Self::Comma => write!(f, ","),
      Self::Colon => write!(f, ":"),
      Self::Apostrophe => write!(f, "'"),

      // Operators
      Self::Plus => write!(f, "+"),
      Self::Minus => write!(f, "-"),
      Self::Multiply => write!(f, "*"),
      Self::Divide => write!(f, "/"),
      Self::Div => write!(f, "div"),
      Self::Mod => write!(f, "mod"),
      Self::Caret => write!(f, "^"),
      Self::Ampersand => write!(f, "&"),
      Self::Not => write!(f, "not"),
      Self::And => write!(f, "and"),
      Self::Or => write!(f, "or"),
      Self::As => write!(f, "as"),

      // Comparisons
      Self::Equal => write!(f, "="),
      Self::NotEqual => write!(f, "≠"),
      Self::Less => write!(f, "<"),
      Self::Greater => write!(f, ">"),
      Self::LessEqual => write!(f, "≤"),
      Self::GreaterEqual => write!(f, "≥"),
      Self::Contains => write!(f, "contains"),
      Self::DoesNotContain => write!(f, "does not contain"),
      Self::IsIn => write!(f, "is in"),
      Self::IsNotIn => write!(f, "is not in"),
      Self::StartsWith => write!(f, "starts with"),
      Self::EndsWith => write!(f, "ends with"),

      // Values
      Self::Identifier => write!(f, "Identifier"),
      Self::Number => write!(f, "Number"),
      Self::String => write!(f, "String"),
      Self::True => write!(f, "true"),
      Self::False => write!(f, "false"),
      Self::MissingValue => write!(f, "missing value"),
      Self::Me => write!(f, "me"),
      Self::It => write!(f, "it"),
      Self::Result => write!(f, "result"),
      Self::ScriptingAdditions => write!(f, "scripting additions"),
      Self::AppleScript => write!(f, "AppleScript"),

      // Keywords
      Self::On => write!(f, "on"),
      Self::To => write!(f, "to"),
      Self::End => write!(f, "end"),
      Self::Script => write!(f, "script"),
      Self::Tell => write!(f, "tell"),
      Self::If => write!(f, "if"),
      Self::Then => write!(f, "then"),
      Self::Else => write!(f, "else"),
      Self::Repeat => write!(f, "repeat"),
      Self::With => write!(f, "with"),
      Self::From => write!(f, "from"),
      Self::By => write!(f, "by"),
      Self::In => write!(f, "in"),
      Self::While => write!(f, "while"),
      Self::Until => write!(f, "until"),
      Self::Times => write!(f, "times"),
      Self::Forever => write!(f, "forever"),
      Self::Try => write!(f, "try"),
      Self::OnError => write!(f, "on error"),
      Self::Error => write!(f, "error"),
      Self::Considering => write!(f, "considering"),
      Self::Ignoring => write!(f, "ignoring"),
      Self::But => write!(f, "but"),
      Self::WithTimeout => write!(f, "with timeout"),
      Self::Seconds => write!(f, "seconds"),
      Self::UsingTermsFrom => write!(f, "using terms from"),
      Self::Use => write!(f, "use"),
      Self::Version => write!(f, "version"),
      Self::Property => write!(f, "property"),
      Self::Global => write!(f, "global"),
      Self::Local => write!(f, "local"),
      Self::Set => write!(f, "set"),
      Self::Copy => write!(f, "copy"),
      Self::Return => write!(f, "return"),
      Self::Exit => write!(f, "exit"),
      Self::Continue => write!(f, "continue"),
      Self::Log => write!(f, "log"),
      Self::Given => write!(f, "given"),
      Self::Of => write!(f, "of"),
      Self::Thru => write!(f, "thru"),
      Self::My => write!(f, "my"),
      Self::Its => write!(f, "its"),
      Self::The => write!(f, "the"),
      Self::Whose => write!(f, "whose"),
      Self::NumberKeyword => write!(f, "number"),

      // Vocabulary classes
      Self::Ordinal => write!(f, "Ordinal"),
      Self::ElementType => write!(f, "Element Type"),
      Self::TypeName => write!(f, "Type Name"),
      Self::Attribute => write!(f, "Attribute"),
      Self::Command => write!(f, "Command"),
      Self::Parameter => write!(f, "Parameter"),

      // Other
      Self::Comment => write!(f, "Comment"),
      Self::EndOfFile => write!(f, "End of File"),
      Self::Unknown => write!(f, "Unknown Character"),
    }
  }
}
