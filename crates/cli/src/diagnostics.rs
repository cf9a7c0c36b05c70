use applescript_syntax::{Category, LineIndex, ParseError, Span, highlight};
use owo_colors::{OwoColorize, Style};
use std::fmt;

#[derive(Debug)]
pub enum Severity {
  Error,
}
pub struct Message {
  pub title: String,
  pub body: String,
  pub hint: Option<String>,
  pub severity: Severity,
}
impl Message {
  pub fn error(message: String) -> Self {
    Self {
      title: message,
      body: String::new(),
      hint: None,
      severity: Severity::Error,
    }
  }
}
impl fmt::Display for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.severity {
      Severity::Error => write!(f, "{}", "✕ Error".bold().red()),
    }?;
    writeln!(f, "{} {}", ":".bold(), &self.title.bold())?;

    if !self.body.is_empty() {
      writeln!(f, "{}", &self.body)?;
    }

    if let Some(hint) = &self.hint {
      writeln!(f, "{} {}", "hint:".italic().cyan(), hint)?;
    }

    Ok(())
  }
}
impl From<&ParseError> for Message {
  fn from(error: &ParseError) -> Self {
    Self {
      title: error.title(),
      body: error.message(),
      hint: error.suggestion(),
      severity: Severity::Error,
    }
  }
}

pub struct CodeFrame<'a> {
  title: &'a str,
  source: &'a str,
  span: Span,

  lines: LineIndex,
}
impl<'a> CodeFrame<'a> {
  pub fn new(title: &'a str, source: &'a str, span: Span) -> Self {
    Self {
      title: if title == "-" { "STDIN" } else { title },
      source,
      span,
      lines: LineIndex::from_source(source),
    }
  }
}
impl fmt::Display for CodeFrame<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let start_line = self.lines.line(self.span).max(1);
    let end_line = self.lines.final_line(self.span).max(start_line);

    writeln!(
      f,
      "    {}{}{}{}{}",
      "╭─[".dimmed(),
      self.title,
      ":".dimmed(),
      start_line,
      "]".dimmed()
    )?;

    for line in start_line..=end_line {
      let line_text = self.lines.line_span(line).source_text(self.source);
      let line_text = line_text.trim_end_matches(['\n', '\r']);

      write!(f, "{line:>3} {}", "│".dimmed())?;
      if !line_text.is_empty() {
        write!(f, " ")?;
      }
      highlight_source(f, line_text)?;
      writeln!(f)?;
    }

    write!(f, "{}", "────╯".dimmed())
  }
}

fn category_style(category: Category) -> Style {
  match category {
    Category::Keyword => Style::new().cyan(),
    Category::String => Style::new().green(),
    Category::Number => Style::new().blue(),
    Category::Comment => Style::new().dimmed(),
    Category::Operator | Category::Punctuation | Category::Identifier => Style::new(),
  }
}

/// Write the source with each token coloured by its category, keeping the text between
/// tokens as it is
pub fn highlight_source(output: &mut dyn fmt::Write, source: &str) -> fmt::Result {
  let mut last = 0;

  for (span, category) in highlight(source) {
    let range = span.range();
    output.write_str(&source[last..range.start])?;
    write!(output, "{}", (&source[range.clone()]).style(category_style(category)))?;
    last = range.end;
  }
  output.write_str(&source[last..])
}
