//! # Incremental
//!
//! Keep the tokens of a document up to date as it is edited, without tokenising the whole
//! source again.
//!
//! The lexer state before every token is recorded, so lexing can resume from any token.
//! After an edit, lexing restarts from the start of the line the edit begins on. Keywords
//! and quoted identifiers never span lines, so the tokens before that line can't change.
//! It stops as soon as it reaches a token after the edit which starts in the same place,
//! and in the same state, as before the edit. From there the old tokens are reused.

use crate::{
  ast::AST,
  span::Span,
  tokeniser::{LexState, Token, Tokeniser},
};
use std::{error, fmt};
use tracing::debug;

/// A replacement of a range of the source with new text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
  /// The range of the source being replaced
  pub range: Span,
  /// The text replacing it
  pub text: String,
}
impl Edit {
  /// Replace the range with the text
  pub fn new(range: Span, text: impl Into<String>) -> Self {
    Self {
      range,
      text: text.into(),
    }
  }

  /// Insert text at a position
  pub fn insert(position: u32, text: impl Into<String>) -> Self {
    Self::new(Span::new(position, position), text)
  }

  /// Remove a range of the source
  pub fn delete(range: Span) -> Self {
    Self::new(range, String::new())
  }
}

/// A source document, with its tokens kept up to date as it is edited
#[derive(Clone, Debug)]
pub struct Document {
  source: String,
  tokens: Vec<Token>,
  /// The state of the lexer before each token
  states: Vec<LexState>,
}
impl Document {
  /// Tokenise a new document
  #[must_use]
  pub fn new(source: String) -> Self {
    let (tokens, states) = lex(&source, 0, LexState::INITIAL);
    Self {
      source,
      tokens,
      states,
    }
  }

  /// The current source of the document
  #[must_use]
  pub fn source(&self) -> &str {
    &self.source
  }

  /// The tokens of the current source
  #[must_use]
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  /// The state of the lexer before each of the tokens
  #[must_use]
  pub fn states(&self) -> &[LexState] {
    &self.states
  }

  /// Parse the current source, reusing the tokens
  pub fn parse(&self) -> AST {
    crate::parse_tokens(self.source.clone(), self.tokens.clone())
  }

  /// Apply several edits, one after the other
  ///
  /// The range of each edit is in the source left by the edits before it.
  ///
  /// # Errors
  /// Returns an error if an edit has an invalid range, edits before it are still applied
  pub fn edits(&mut self, edits: impl IntoIterator<Item = Edit>) -> Result<(), EditError> {
    edits.into_iter().try_for_each(|edit| self.edit(edit))
  }

  /// Replace a range of the source, and update the tokens
  ///
  /// # Errors
  /// Returns an error if the range is not within the source, or is not on character
  /// boundaries. The document is left unchanged.
  pub fn edit(&mut self, edit: Edit) -> Result<(), EditError> {
    self.check_range(edit.range)?;

    let (start, end) = (edit.range.start as usize, edit.range.end as usize);
    let restart = self.restart_index(start);
    let resume_at = self.tokens[restart].trivia_span().start as usize;

    self.source.replace_range(start..end, &edit.text);
    let delta = i64::try_from(edit.text.len()).unwrap_or(i64::MAX) - i64::from(edit.range.len());

    let mut tokeniser = Tokeniser::resume(&self.source, resume_at, self.states[restart]);
    let mut tokens = Vec::new();
    let mut states = Vec::new();
    let mut candidate = restart;

    let reused_from = loop {
      let position = tokeniser.position();

      // old tokens which start after the edit could line up with the new tokens
      while let Some(old) = self.tokens.get(candidate) {
        let trivia_start = old.trivia_span().start;
        if (trivia_start as usize) >= end && shift(trivia_start, delta) >= position {
          break;
        }
        candidate += 1;
      }
      if let Some(old) = self.tokens.get(candidate)
        && shift(old.trivia_span().start, delta) == position
        && self.states[candidate] == tokeniser.state()
      {
        break candidate;
      }

      let state = tokeniser.state();
      match tokeniser.next() {
        Some(token) => {
          tokens.push(token);
          states.push(state);
        }
        None => break self.tokens.len(),
      }
    };

    debug!(
      relexed.start = resume_at,
      relexed.end = tokeniser.position(),
      new_tokens = tokens.len(),
      reused_tokens = self.tokens.len() - reused_from,
      "edited document"
    );

    let reused = self.tokens[reused_from..].iter().map(|token| Token {
      start: u32::try_from(shift(token.start, delta)).unwrap_or(u32::MAX),
      ..*token
    });
    tokens.extend(reused);
    states.extend_from_slice(&self.states[reused_from..]);

    self.tokens.truncate(restart);
    self.tokens.append(&mut tokens);
    self.states.truncate(restart);
    self.states.append(&mut states);

    Ok(())
  }

  fn check_range(&self, range: Span) -> Result<(), EditError> {
    if range.start > range.end {
      return Err(EditError::Reversed(range));
    }
    if range.end as usize > self.source.len() {
      return Err(EditError::OutOfBounds {
        range,
        length: self.source.len(),
      });
    }
    if let Some(position) = [range.start, range.end]
      .into_iter()
      .find(|position| !self.source.is_char_boundary(*position as usize))
    {
      return Err(EditError::NotCharBoundary(position));
    }

    Ok(())
  }

  /// The first token on the line of the edit, or of the token the edit is part of
  fn restart_index(&self, edit_start: usize) -> usize {
    let last = self.tokens.len() - 1;
    let touched = (self.tokens.iter())
      .position(|token| token.end() as usize >= edit_start)
      .unwrap_or(last);

    let anchor = (self.tokens[touched].trivia_span().start as usize).min(edit_start);
    let line_start = self.source[..anchor].rfind(['\n', '\r']).map_or(0, |index| index + 1);

    (self.tokens.iter())
      .position(|token| token.end() as usize >= line_start)
      .unwrap_or(touched)
  }
}

/// Move a position by the change in length of an edit
fn shift(position: u32, delta: i64) -> usize {
  usize::try_from(i64::from(position) + delta).unwrap_or(0)
}

/// Tokenise from a position, recording the state before each token
fn lex(source: &str, position: usize, state: LexState) -> (Vec<Token>, Vec<LexState>) {
  let mut tokeniser = Tokeniser::resume(source, position, state);
  let mut tokens = Vec::new();
  let mut states = Vec::new();

  loop {
    let state = tokeniser.state();
    let Some(token) = tokeniser.next() else { break };
    tokens.push(token);
    states.push(state);
  }

  (tokens, states)
}

/// An edit which can't be applied to a document
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
  /// The range ends after the end of the source
  OutOfBounds {
    /// The range of the edit
    range: Span,
    /// The length of the source
    length: usize,
  },
  /// The range starts after it ends
  Reversed(Span),
  /// The position is inside a multi-byte character
  NotCharBoundary(u32),
}
impl EditError {
  /// The title of the error message
  #[must_use]
  pub fn title(&self) -> &'static str {
    match self {
      Self::OutOfBounds { .. } => "Edit Out of Bounds",
      Self::Reversed(_) => "Reversed Edit Range",
      Self::NotCharBoundary(_) => "Edit Not on Character Boundary",
    }
  }
}
impl fmt::Display for EditError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::OutOfBounds { range, length } => write!(
        f,
        "edit range {}..{} is outside the source of length {length}",
        range.start, range.end
      ),
      Self::Reversed(range) => {
        write!(f, "edit range {}..{} ends before it starts", range.start, range.end)
      }
      Self::NotCharBoundary(position) => {
        write!(f, "position {position} is inside a character")
      }
    }
  }
}
impl error::Error for EditError {}
