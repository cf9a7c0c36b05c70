//! The keyword vocabulary.
//!
//! Keywords are single words or phrases of words separated by whitespace, and are
//! matched ignoring case. When several keywords match at a position, the longest wins.

use crate::tokeniser::TokenKind;

/// The longest first word of any keyword, longer words are never looked up
const MAX_WORD_LENGTH: usize = 16;

/// Try to match a keyword at the start of `text`.
///
/// `word_length` is the length of the identifier-like word at the start of `text`. Returns
/// the kind of the keyword and the number of bytes it covers.
pub(crate) fn lookup(text: &str, word_length: usize) -> Option<(TokenKind, usize)> {
  let word = &text.as_bytes()[..word_length];
  if word_length > MAX_WORD_LENGTH || !word.is_ascii() {
    return None;
  }

  let mut buffer = [0; MAX_WORD_LENGTH];
  let lowercase = &mut buffer[..word_length];
  lowercase.copy_from_slice(word);
  lowercase.make_ascii_lowercase();
  let lowercase = &*lowercase;

  let first = KEYWORDS.partition_point(|(phrase, _)| phrase.as_bytes() < lowercase);

  KEYWORDS[first..]
    .iter()
    .take_while(|(phrase, _)| phrase.as_bytes().starts_with(lowercase))
    .filter(|(phrase, _)| {
      // the first word of the phrase must be exactly the word, not just share a prefix
      !phrase
        .as_bytes()
        .get(word_length)
        .is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_')
    })
    .filter_map(|(phrase, kind)| match_phrase(text, phrase).map(|length| (*kind, length)))
    .max_by_key(|(_, length)| *length)
}

/// Match a lowercase phrase against the start of the text, returning the length matched.
///
/// A space in the phrase matches one or more spaces or tabs. The match must end on a
/// word boundary.
fn match_phrase(text: &str, phrase: &str) -> Option<usize> {
  let bytes = text.as_bytes();
  let mut position = 0;

  for &expected in phrase.as_bytes() {
    if expected == b' ' {
      let spaces = bytes[position..]
        .iter()
        .take_while(|c| matches!(c, b' ' | b'\t'))
        .count();

      if spaces == 0 {
        return None;
      }
      position += spaces;
    } else if bytes
      .get(position)
      .is_some_and(|c| c.eq_ignore_ascii_case(&expected))
    {
      position += 1;
    } else {
      return None;
    }
  }

  match text[position..].chars().next() {
    Some(c) if c.is_alphanumeric() || c == '_' => None,
    _ => Some(position),
  }
}

/// All keywords, sorted by their bytes so they can be binary searched
#[rustfmt::skip]
pub(crate) const KEYWORDS: &[(&str, TokenKind)] = &[
  ("activate", TokenKind::Command),
  ("alias", TokenKind::TypeName),
  ("and", TokenKind::And),
  ("app", TokenKind::ElementType),
  ("applescript", TokenKind::AppleScript),
  ("application", TokenKind::ElementType),
  ("application process", TokenKind::ElementType),
  ("application processes", TokenKind::ElementType),
  ("application responses", TokenKind::Attribute),
  ("applications", TokenKind::ElementType),
  ("as", TokenKind::As),
  ("at", TokenKind::Parameter),
  ("back", TokenKind::Ordinal),
  ("beep", TokenKind::Command),
  ("begin with", TokenKind::StartsWith),
  ("begins with", TokenKind::StartsWith),
  ("boolean", TokenKind::TypeName),
  ("but", TokenKind::But),
  ("button", TokenKind::ElementType),
  ("buttons", TokenKind::Parameter),
  ("by", TokenKind::By),
  ("cancel button", TokenKind::Parameter),
  ("case", TokenKind::Attribute),
  ("character", TokenKind::ElementType),
  ("characters", TokenKind::ElementType),
  ("choose file", TokenKind::Command),
  ("choose folder", TokenKind::Command),
  ("choose from list", TokenKind::Command),
  ("class", TokenKind::TypeName),
  ("click", TokenKind::Command),
  ("close", TokenKind::Command),
  ("close access", TokenKind::Command),
  ("column", TokenKind::ElementType),
  ("columns", TokenKind::ElementType),
  ("comes after", TokenKind::Greater),
  ("comes before", TokenKind::Less),
  ("considering", TokenKind::Considering),
  ("constant", TokenKind::TypeName),
  ("contain", TokenKind::Contains),
  ("contains", TokenKind::Contains),
  ("continue", TokenKind::Continue),
  ("copy", TokenKind::Copy),
  ("count", TokenKind::Command),
  ("current date", TokenKind::Command),
  ("date", TokenKind::TypeName),
  ("default answer", TokenKind::Parameter),
  ("default button", TokenKind::Parameter),
  ("default items", TokenKind::Parameter),
  ("default location", TokenKind::Parameter),
  ("delay", TokenKind::Command),
  ("delete", TokenKind::Command),
  ("diacriticals", TokenKind::Attribute),
  ("disk", TokenKind::ElementType),
  ("disks", TokenKind::ElementType),
  ("display alert", TokenKind::Command),
  ("display dialog", TokenKind::Command),
  ("display notification", TokenKind::Command),
  ("div", TokenKind::Div),
  ("do javascript", TokenKind::Command),
  ("do shell script", TokenKind::Command),
  ("document", TokenKind::ElementType),
  ("documents", TokenKind::ElementType),
  ("does not come after", TokenKind::LessEqual),
  ("does not come before", TokenKind::GreaterEqual),
  ("does not contain", TokenKind::DoesNotContain),
  ("does not equal", TokenKind::NotEqual),
  ("doesn't come after", TokenKind::LessEqual),
  ("doesn't come before", TokenKind::GreaterEqual),
  ("doesn't contain", TokenKind::DoesNotContain),
  ("doesn't equal", TokenKind::NotEqual),
  ("duplicate", TokenKind::Command),
  ("eighth", TokenKind::Ordinal),
  ("else", TokenKind::Else),
  ("end", TokenKind::End),
  ("ends with", TokenKind::EndsWith),
  ("equal to", TokenKind::Equal),
  ("equals", TokenKind::Equal),
  ("error", TokenKind::Error),
  ("every", TokenKind::Ordinal),
  ("exists", TokenKind::Command),
  ("exit", TokenKind::Exit),
  ("expansion", TokenKind::Attribute),
  ("false", TokenKind::False),
  ("fifth", TokenKind::Ordinal),
  ("file", TokenKind::ElementType),
  ("files", TokenKind::ElementType),
  ("first", TokenKind::Ordinal),
  ("folder", TokenKind::ElementType),
  ("folders", TokenKind::ElementType),
  ("for", TokenKind::Parameter),
  ("forever", TokenKind::Forever),
  ("fourth", TokenKind::Ordinal),
  ("framework", TokenKind::ElementType),
  ("from", TokenKind::From),
  ("front", TokenKind::Ordinal),
  ("get", TokenKind::Command),
  ("given", TokenKind::Given),
  ("giving up after", TokenKind::Parameter),
  ("global", TokenKind::Global),
  ("greater than", TokenKind::Greater),
  ("greater than or equal to", TokenKind::GreaterEqual),
  ("hyphens", TokenKind::Attribute),
  ("if", TokenKind::If),
  ("ignoring", TokenKind::Ignoring),
  ("in", TokenKind::In),
  ("info for", TokenKind::Command),
  ("integer", TokenKind::TypeName),
  ("is", TokenKind::Equal),
  ("is contained by", TokenKind::IsIn),
  ("is equal to", TokenKind::Equal),
  ("is greater than", TokenKind::Greater),
  ("is greater than or equal to", TokenKind::GreaterEqual),
  ("is in", TokenKind::IsIn),
  ("is less than", TokenKind::Less),
  ("is less than or equal to", TokenKind::LessEqual),
  ("is not", TokenKind::NotEqual),
  ("is not contained by", TokenKind::IsNotIn),
  ("is not equal to", TokenKind::NotEqual),
  ("is not greater than", TokenKind::LessEqual),
  ("is not in", TokenKind::IsNotIn),
  ("is not less than", TokenKind::GreaterEqual),
  ("isn't", TokenKind::NotEqual),
  ("isn't contained by", TokenKind::IsNotIn),
  ("isn't equal to", TokenKind::NotEqual),
  ("isn't greater than", TokenKind::LessEqual),
  ("isn't in", TokenKind::IsNotIn),
  ("isn't less than", TokenKind::GreaterEqual),
  ("it", TokenKind::It),
  ("item", TokenKind::ElementType),
  ("items", TokenKind::ElementType),
  ("its", TokenKind::Its),
  ("key code", TokenKind::Command),
  ("keystroke", TokenKind::Command),
  ("last", TokenKind::Ordinal),
  ("launch", TokenKind::Command),
  ("less than", TokenKind::Less),
  ("less than or equal to", TokenKind::LessEqual),
  ("list", TokenKind::TypeName),
  ("load script", TokenKind::Command),
  ("local", TokenKind::Local),
  ("log", TokenKind::Log),
  ("make", TokenKind::Command),
  ("me", TokenKind::Me),
  ("menu", TokenKind::ElementType),
  ("menu bar", TokenKind::ElementType),
  ("menu bars", TokenKind::ElementType),
  ("menu item", TokenKind::ElementType),
  ("menu items", TokenKind::ElementType),
  ("menus", TokenKind::ElementType),
  ("middle", TokenKind::Ordinal),
  ("missing value", TokenKind::MissingValue),
  ("mod", TokenKind::Mod),
  ("move", TokenKind::Command),
  ("my", TokenKind::My),
  ("new", TokenKind::Parameter),
  ("ninth", TokenKind::Ordinal),
  ("not", TokenKind::Not),
  ("number", TokenKind::NumberKeyword),
  ("numeric strings", TokenKind::Attribute),
  ("of", TokenKind::Of),
  ("offset", TokenKind::Command),
  ("on", TokenKind::On),
  ("on error", TokenKind::OnError),
  ("open", TokenKind::Command),
  ("open for access", TokenKind::Command),
  ("or", TokenKind::Or),
  ("paragraph", TokenKind::ElementType),
  ("paragraphs", TokenKind::ElementType),
  ("path to", TokenKind::Command),
  ("posix file", TokenKind::TypeName),
  ("posix path", TokenKind::TypeName),
  ("print", TokenKind::Command),
  ("process", TokenKind::ElementType),
  ("processes", TokenKind::ElementType),
  ("prop", TokenKind::Property),
  ("property", TokenKind::Property),
  ("punctuation", TokenKind::Attribute),
  ("quit", TokenKind::Command),
  ("random number", TokenKind::Command),
  ("read", TokenKind::Command),
  ("real", TokenKind::TypeName),
  ("record", TokenKind::TypeName),
  ("reference", TokenKind::TypeName),
  ("reopen", TokenKind::Command),
  ("repeat", TokenKind::Repeat),
  ("result", TokenKind::Result),
  ("return", TokenKind::Return),
  ("round", TokenKind::Command),
  ("row", TokenKind::ElementType),
  ("rows", TokenKind::ElementType),
  ("run", TokenKind::Command),
  ("run script", TokenKind::Command),
  ("save", TokenKind::Command),
  ("say", TokenKind::Command),
  ("script", TokenKind::Script),
  ("scripting additions", TokenKind::ScriptingAdditions),
  ("second", TokenKind::Ordinal),
  ("seconds", TokenKind::Seconds),
  ("select", TokenKind::Command),
  ("set", TokenKind::Set),
  ("set volume", TokenKind::Command),
  ("seventh", TokenKind::Ordinal),
  ("sixth", TokenKind::Ordinal),
  ("some", TokenKind::Ordinal),
  ("start with", TokenKind::StartsWith),
  ("starting at", TokenKind::Parameter),
  ("starts with", TokenKind::StartsWith),
  ("store script", TokenKind::Command),
  ("string", TokenKind::TypeName),
  ("system info", TokenKind::Command),
  ("tell", TokenKind::Tell),
  ("tenth", TokenKind::Ordinal),
  ("text", TokenKind::TypeName),
  ("text item", TokenKind::ElementType),
  ("text item delimiters", TokenKind::Identifier),
  ("text items", TokenKind::ElementType),
  ("the", TokenKind::The),
  ("then", TokenKind::Then),
  ("third", TokenKind::Ordinal),
  ("through", TokenKind::Thru),
  ("thru", TokenKind::Thru),
  ("times", TokenKind::Times),
  ("to", TokenKind::To),
  ("true", TokenKind::True),
  ("try", TokenKind::Try),
  ("ui element", TokenKind::ElementType),
  ("ui elements", TokenKind::ElementType),
  ("unicode text", TokenKind::TypeName),
  ("until", TokenKind::Until),
  ("use", TokenKind::Use),
  ("using", TokenKind::Parameter),
  ("using terms from", TokenKind::UsingTermsFrom),
  ("version", TokenKind::Version),
  ("where", TokenKind::Whose),
  ("while", TokenKind::While),
  ("white space", TokenKind::Attribute),
  ("whose", TokenKind::Whose),
  ("window", TokenKind::ElementType),
  ("windows", TokenKind::ElementType),
  ("with", TokenKind::With),
  ("with administrator privileges", TokenKind::Parameter),
  ("with data", TokenKind::Parameter),
  ("with icon", TokenKind::Parameter),
  ("with prompt", TokenKind::Parameter),
  ("with properties", TokenKind::Parameter),
  ("with timeout", TokenKind::WithTimeout),
  ("with timeout of", TokenKind::WithTimeout),
  ("with title", TokenKind::Parameter),
  ("without", TokenKind::Parameter),
  ("word", TokenKind::ElementType),
  ("words", TokenKind::ElementType),
  ("write", TokenKind::Command),
];

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn keywords_are_sorted_and_unique() {
    for pair in KEYWORDS.windows(2) {
      assert!(pair[0].0 < pair[1].0, "{} should be before {}", pair[0].0, pair[1].0);
    }
  }

  #[test]
  fn keywords_are_lowercase_words() {
    for (phrase, _) in KEYWORDS {
      assert_eq!(*phrase, phrase.to_ascii_lowercase());
      assert!(!phrase.contains("  "), "{phrase} has a double space");

      let first_word = phrase.split([' ', '\'']).next().unwrap_or_default();
      assert!(first_word.len() <= MAX_WORD_LENGTH, "{phrase} is too long");
    }
  }

  #[test]
  fn longest_phrase_wins() {
    assert_eq!(lookup("is not equal to x", 2), Some((TokenKind::NotEqual, 15)));
    assert_eq!(lookup("is not x", 2), Some((TokenKind::NotEqual, 6)));
    assert_eq!(lookup("with timeout of 5", 4), Some((TokenKind::WithTimeout, 15)));
    assert_eq!(lookup("with timeout 5", 4), Some((TokenKind::WithTimeout, 12)));
  }

  #[test]
  fn phrases_allow_extra_spaces() {
    assert_eq!(lookup("IS  NOT\tEqual TO", 2), Some((TokenKind::NotEqual, 16)));
  }

  #[test]
  fn phrases_end_on_word_boundaries() {
    assert_eq!(lookup("ontology", 8), None);
    assert_eq!(lookup("on", 2), Some((TokenKind::On, 2)));
    assert_eq!(lookup("is notable", 2), Some((TokenKind::Equal, 2)));
  }

  #[test]
  fn long_and_non_ascii_words_are_not_keywords() {
    assert_eq!(lookup("averyveryverylongidentifier", 27), None);
    assert_eq!(lookup("café", 5), None);
  }
}
