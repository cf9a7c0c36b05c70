use super::diagnostics::{CodeFrame, Message, highlight_source};

use applescript_syntax::{AST, FoldingKind, ast::PrintConfig, folding_ranges, tokenise};

use anstream::{eprintln, print, println};
use std::{fs, io};
use tracing::debug;

pub enum CommandStatus {
  /// Command was successful, no problems were found
  Success,
  /// Command ran, but problems were found in the source
  Failure,
}

fn read_file(filename: &str) -> Result<String, ()> {
  let source = if filename == "-" { read_stdin()? } else { read_path(filename)? };

  if source.len() >= u32::MAX as usize {
    eprintln!("{}", Message::error("File too large - max size 4GB".into()));
    return Err(());
  }

  debug!(file = filename, bytes = source.len(), "read source");
  Ok(source)
}

fn read_path(filename: &str) -> Result<String, ()> {
  match fs::read_to_string(filename) {
    Ok(file) => Ok(file),
    Err(error) if error.kind() == io::ErrorKind::InvalidData => {
      eprintln!("{}", Message::error(format!("File is not valid UTF-8 `{filename}`")));
      Err(())
    }
    Err(_) => {
      eprintln!("{}", Message::error(format!("File not found `{filename}`")));
      Err(())
    }
  }
}

fn read_stdin() -> Result<String, ()> {
  use std::io::Read;

  let mut buffer = String::new();
  match io::stdin().lock().read_to_string(&mut buffer) {
    Ok(_) => Ok(buffer),
    Err(_) => {
      eprintln!("{}", Message::error("Problem Reading from STDIN".into()));
      Err(())
    }
  }
}

fn display_name(filename: &str) -> &str {
  if filename == "-" { "STDIN" } else { filename }
}

fn report_errors(filename: &str, ast: &AST) {
  for error in &ast.errors {
    eprintln!("{}", Message::from(error));
    eprintln!("{}", CodeFrame::new(filename, &ast.source, error.span()));
  }
}

pub fn check(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let ast = applescript_syntax::parse(source);

  if ast.is_valid() {
    Ok(CommandStatus::Success)
  } else {
    report_errors(filename, &ast);
    Ok(CommandStatus::Failure)
  }
}

pub fn highlight(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;

  let mut output = String::new();
  if highlight_source(&mut output, &source).is_err() {
    eprintln!("{}", Message::error("Problem highlighting source".into()));
    return Err(());
  }
  print!("{output}");

  Ok(CommandStatus::Success)
}

pub fn print_tokens(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;

  println!("    ╭─[Tokens: {}]", display_name(filename));
  for token in tokenise(&source) {
    print!("{:>3} │ {}", token.start, token.kind);
    // show the text when the kind doesn't already say what it is
    let text = token.text(&source);
    if !text.is_empty() && !token.kind.to_string().eq_ignore_ascii_case(text) {
      print!(" {text:?}");
    }
    if token.line_break {
      print!(" (new line)");
    }
    println!();
  }
  println!("────╯");

  Ok(CommandStatus::Success)
}

pub fn print_tree(filename: &str, spans: bool) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let ast = applescript_syntax::parse(source);

  if !ast.is_valid() {
    report_errors(filename, &ast);
    eprintln!();
  }

  println!("╭─[Syntax Tree: {}]", display_name(filename));
  print!("{}", ast.pretty(PrintConfig { spans }));
  println!("╯");

  Ok(CommandStatus::Success)
}

pub fn print_folds(filename: &str) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let ast = applescript_syntax::parse(source);

  println!("    ╭─[Folding Ranges: {}]", display_name(filename));
  for range in folding_ranges(&ast) {
    let kind = match range.kind {
      FoldingKind::Region => "region",
      FoldingKind::Comment => "comment",
    };
    println!("{:>3} │ {kind} to line {}", range.start_line, range.end_line);
  }
  println!("────╯");

  Ok(CommandStatus::Success)
}
