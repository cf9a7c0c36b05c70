//! # AppleScript Syntax Tools
//! Inspect the structure of AppleScript source code from the command line.
//!
//! Prints the tokens, syntax tree, and folding ranges of a script, checks it for syntax
//! errors, and highlights it in the terminal.

#![allow(clippy::print_stdout)]

mod commands;
mod diagnostics;

use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::CommandStatus;
use owo_colors::*;
use std::{io, process};
use tracing_subscriber::EnvFilter;

const STYLES: Styles = Styles::styled()
  .usage(Style::new().italic())
  .header(AnsiColor::BrightYellow.on_default().bold());

fn coloured_header() -> String {
  format!(
    "{} {}",
    "AppleScript Syntax".fg::<owo_colors::colors::css::Orange>().bold(),
    concat!("(v", env!("CARGO_PKG_VERSION"), ")").italic().dimmed()
  )
}

fn about() -> String {
  format!(
    "{}\nTokenise and parse AppleScript into a concrete syntax tree.",
    coloured_header()
  )
}

#[derive(Parser)]
#[clap(
  name = "applescript",
  version,
  about = about(),
  styles = STYLES,
  disable_help_subcommand = true,
)]
struct App {
  #[command(subcommand)]
  command: Command,

  #[command(flatten)]
  options: GlobalOptions,
}

#[derive(Args)]
struct GlobalOptions {
  /// Log what the parser is doing to stderr
  #[clap(long, global = true)]
  verbose: bool,
  /// When to use colours in the output
  #[clap(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
  color: ColorWhen,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
  /// Use colours if the output is a terminal which supports them
  Auto,
  /// Always use colours
  Always,
  /// Never use colours
  Never,
}
impl From<ColorWhen> for anstream::ColorChoice {
  fn from(when: ColorWhen) -> Self {
    match when {
      ColorWhen::Auto => Self::Auto,
      ColorWhen::Always => Self::Always,
      ColorWhen::Never => Self::Never,
    }
  }
}

#[derive(Subcommand)]
enum Command {
  /// Checks the file for syntax errors
  Check {
    /// The file to check, or `-` for stdin
    file: String,
  },

  /// Prints the source with syntax highlighting
  Highlight {
    /// The file to highlight, or `-` for stdin
    file: String,
  },

  /// Prints debugging information
  Print {
    #[command(subcommand)]
    command: PrintCommand,
  },
}

#[derive(Subcommand)]
enum PrintCommand {
  /// Displays the tokens in the file
  Tokens {
    /// The file to print, or `-` for stdin
    file: String,
  },
  /// Displays the Concrete Syntax Tree
  Tree {
    /// The file to print, or `-` for stdin
    file: String,
    /// Show the byte range of each node
    #[clap(long)]
    spans: bool,
  },
  /// Displays the regions of the file which can be folded
  Folds {
    /// The file to print, or `-` for stdin
    file: String,
  },
}

/// Log to stderr if asked to, either with `--verbose` or the `RUST_LOG` variable
fn init_logging(verbose: bool) {
  let filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) if verbose => EnvFilter::new("debug"),
    Err(_) => return,
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn main() -> process::ExitCode {
  let args = App::parse();

  anstream::ColorChoice::from(args.options.color).write_global();
  init_logging(args.options.verbose);

  let result = match args.command {
    Command::Check { file } => commands::check(&file),
    Command::Highlight { file } => commands::highlight(&file),
    Command::Print { command } => match command {
      PrintCommand::Tokens { file } => commands::print_tokens(&file),
      PrintCommand::Tree { file, spans } => commands::print_tree(&file, spans),
      PrintCommand::Folds { file } => commands::print_folds(&file),
    },
  };

  match result {
    Ok(CommandStatus::Success) => process::ExitCode::from(0),
    Ok(CommandStatus::Failure) => process::ExitCode::from(1),
    Err(()) => process::ExitCode::from(2),
  }
}
