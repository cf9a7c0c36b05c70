//! # Statements

use crate::{
  ast::{
    AST, ExpressionIdx, StatementIdx, TokenIdx,
    expression::{Expression, Parameter},
  },
  span::Span,
  tokeniser::TokenKind,
};
use thin_vec::ThinVec;

/// A statement in the source code, a single line or a block ending in `end`
#[must_use]
#[derive(Debug)]
pub enum Statement {
  /// A handler definition, e.g. `on greet(name) .. end greet`
  Handler(Handler),
  /// A script object, e.g. `script Counter .. end script`
  Script(Script),
  /// A tell block, e.g. `tell application "Finder" .. end tell`
  Tell(Tell),
  /// A tell on a single line, e.g. `tell application "Finder" to activate`
  OneLineTell(OneLineTell),
  /// An if block, with optional else if and else branches
  If(If),
  /// An if on a single line, e.g. `if x then return y`
  OneLineIf(OneLineIf),
  /// A repeat block, e.g. `repeat with i from 1 to 10 .. end repeat`
  Repeat(Repeat),
  /// A try block, with an optional error handler
  Try(Try),
  /// A considering or ignoring block, e.g. `ignoring case .. end ignoring`
  Considering(Considering),
  /// A timeout block, e.g. `with timeout of 10 seconds .. end timeout`
  Timeout(Timeout),
  /// A using terms from block, e.g. `using terms from application "Mail" .. end using terms from`
  UsingTerms(UsingTerms),
  /// A use statement, e.g. `use scripting additions`
  Use(Use),
  /// A property declaration, e.g. `property count : 0`
  Property(Property),
  /// A global or local declaration, e.g. `global x, y`
  Declaration(Declaration),
  /// An assignment, e.g. `set x to 5`
  Set(Set),
  /// A copying assignment, e.g. `copy x to y`
  Copy(CopyStmt),
  /// A return from a handler, e.g. `return x`
  Return(Return),
  /// Raising an error, e.g. `error "failed" number 500`
  Error(ErrorStmt),
  /// Leaving a loop, e.g. `exit repeat`
  Exit(Exit),
  /// Calling the parent's handler, e.g. `continue quit`
  Continue(Continue),
  /// Logging a value, e.g. `log x`
  Log(Log),
  /// An expression on its own line, e.g. `display dialog "hello"`
  Expression(ExpressionStmt),
  /// Tokens which don't form a statement
  Invalid(InvalidStmt),
}
impl Statement {
  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    match self {
      Self::Handler(handler) => handler.span(ast),
      Self::Script(script) => script.span(ast),
      Self::Tell(tell) => tell.span(ast),
      Self::OneLineTell(tell) => tell.span(ast),
      Self::If(if_) => if_.span(ast),
      Self::OneLineIf(if_) => if_.span(ast),
      Self::Repeat(repeat) => repeat.span(ast),
      Self::Try(try_) => try_.span(ast),
      Self::Considering(considering) => considering.span(ast),
      Self::Timeout(timeout) => timeout.span(ast),
      Self::UsingTerms(using_terms) => using_terms.span(ast),
      Self::Use(use_) => use_.span(ast),
      Self::Property(property) => property.span(ast),
      Self::Declaration(declaration) => declaration.span(ast),
      Self::Set(set) => set.span(ast),
      Self::Copy(copy) => copy.span(ast),
      Self::Return(return_) => return_.span(ast),
      Self::Error(error) => error.span(ast),
      Self::Exit(exit) => exit.span(ast),
      Self::Continue(continue_) => continue_.span(ast),
      Self::Log(log) => log.span(ast),
      Self::Expression(expression) => expression.span(ast),
      Self::Invalid(invalid) => invalid.span(ast),
    }
  }
}

/// The statements which make up the body of a block
pub(crate) type Body = ThinVec<StatementIdx>;

fn body_statements<'a>(body: &'a Body, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
  body.iter().map(|statement| &ast[*statement])
}

/// The span of a block, from its keyword to the end of the last part present
fn block_span(ast: &AST, keyword: TokenIdx, header: Span, body: &Body, end: Option<&End>) -> Span {
  let last = match (end, body.last()) {
    (Some(end), _) => end.span(ast),
    (None, Some(statement)) => ast[*statement].span(ast),
    (None, None) => header,
  };

  ast.token_span(keyword).merge(header).merge(last)
}

/// The closing line of a block, e.g. `end tell`
///
/// The name after `end` is never checked against the opening keyword
#[derive(Debug)]
pub struct End {
  pub(crate) keyword: TokenIdx,
  pub(crate) name: Option<TokenIdx>,
}
impl End {
  /// The word after `end`, if present
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.name.map(|name| ast.get_token_text(name))
  }

  /// The location of the end line
  pub fn span(&self, ast: &AST) -> Span {
    let keyword = ast.token_span(self.keyword);
    self.name.map_or(keyword, |name| keyword.merge(ast.token_span(name)))
  }
}

/// A handler definition, e.g. `on greet(name) .. end greet`
#[derive(Debug)]
pub struct Handler {
  pub(crate) keyword: TokenIdx,
  pub(crate) name: Option<TokenIdx>,
  pub(crate) parameters: ThinVec<Parameter>,
  pub(crate) given: Option<TokenIdx>,
  pub(crate) header: Span,
  pub(crate) body: Body,
  pub(crate) end: Option<End>,
}
impl Handler {
  /// The name of the handler
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.name.map(|name| ast.get_token_text(name))
  }

  /// The parameters of the handler, positional or labeled
  #[must_use]
  pub fn parameters(&self) -> &[Parameter] {
    &self.parameters
  }

  /// The statements in the handler
  pub fn body<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
    body_statements(&self.body, ast)
  }

  /// The closing line of the handler, if present
  #[must_use]
  pub fn end(&self) -> Option<&End> {
    self.end.as_ref()
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    block_span(ast, self.keyword, self.header, &self.body, self.end.as_ref())
  }
}

/// A script object, e.g. `script Counter .. end script`
#[derive(Debug)]
pub struct Script {
  pub(crate) keyword: TokenIdx,
  pub(crate) name: Option<TokenIdx>,
  pub(crate) body: Body,
  pub(crate) end: Option<End>,
}
impl Script {
  /// The name of the script object
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.name.map(|name| ast.get_token_text(name))
  }

  /// The statements in the script object
  pub fn body<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
    body_statements(&self.body, ast)
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let header = ast.token_span(self.name.unwrap_or(self.keyword));
    block_span(ast, self.keyword, header, &self.body, self.end.as_ref())
  }
}

/// A tell block, e.g. `tell application "Finder" .. end tell`
#[derive(Debug)]
pub struct Tell {
  pub(crate) keyword: TokenIdx,
  pub(crate) target: ExpressionIdx,
  pub(crate) body: Body,
  pub(crate) end: Option<End>,
}
impl Tell {
  /// The object the commands are sent to
  pub fn target<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.target]
  }

  /// The statements in the block
  pub fn body<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
    body_statements(&self.body, ast)
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let header = self.target(ast).span(ast);
    block_span(ast, self.keyword, header, &self.body, self.end.as_ref())
  }
}

/// A tell on a single line, e.g. `tell application "Finder" to activate`
#[derive(Debug)]
pub struct OneLineTell {
  pub(crate) keyword: TokenIdx,
  pub(crate) target: ExpressionIdx,
  pub(crate) to: TokenIdx,
  pub(crate) action: StatementIdx,
}
impl OneLineTell {
  /// The object the command is sent to
  pub fn target<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.target]
  }

  /// The statement sent to the target
  pub fn action<'a>(&self, ast: &'a AST) -> &'a Statement {
    &ast[self.action]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.keyword).merge(self.action(ast).span(ast))
  }
}

/// An if block, with optional else if and else branches
#[derive(Debug)]
pub struct If {
  pub(crate) keyword: TokenIdx,
  pub(crate) condition: ExpressionIdx,
  pub(crate) then: Option<TokenIdx>,
  pub(crate) body: Body,
  pub(crate) else_ifs: ThinVec<ElseIf>,
  pub(crate) otherwise: Option<Else>,
  pub(crate) end: Option<End>,
}
impl If {
  /// The condition of the first branch
  pub fn condition<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.condition]
  }

  /// The statements run if the condition is true
  pub fn body<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
    body_statements(&self.body, ast)
  }

  /// The `else if` branches
  #[must_use]
  pub fn else_ifs(&self) -> &[ElseIf] {
    &self.else_ifs
  }

  /// The `else` branch, if present
  #[must_use]
  pub fn otherwise(&self) -> Option<&Else> {
    self.otherwise.as_ref()
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let mut header = self.condition(ast).span(ast);
    if let Some(then) = self.then {
      header = header.merge(ast.token_span(then));
    }
    if let Some(otherwise) = &self.otherwise {
      header = header.merge(otherwise.span(ast));
    } else if let Some(else_if) = self.else_ifs.last() {
      header = header.merge(else_if.span(ast));
    }

    block_span(ast, self.keyword, header, &self.body, self.end.as_ref())
  }
}

/// An `else if` branch of an if block
#[derive(Debug)]
pub struct ElseIf {
  pub(crate) keyword: TokenIdx,
  pub(crate) if_: TokenIdx,
  pub(crate) condition: ExpressionIdx,
  pub(crate) then: Option<TokenIdx>,
  pub(crate) body: Body,
}
impl ElseIf {
  /// The condition of the branch
  pub fn condition<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.condition]
  }

  /// The location of the branch
  pub fn span(&self, ast: &AST) -> Span {
    let header = ast.token_span(self.if_).merge(ast[self.condition].span(ast));
    block_span(ast, self.keyword, header, &self.body, None)
  }
}

/// The `else` branch of an if block
#[derive(Debug)]
pub struct Else {
  pub(crate) keyword: TokenIdx,
  pub(crate) body: Body,
}
impl Else {
  /// The statements in the branch
  pub fn body<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
    body_statements(&self.body, ast)
  }

  /// The location of the branch
  pub fn span(&self, ast: &AST) -> Span {
    block_span(ast, self.keyword, ast.token_span(self.keyword), &self.body, None)
  }
}

/// An if on a single line, e.g. `if x then return y`
#[derive(Debug)]
pub struct OneLineIf {
  pub(crate) keyword: TokenIdx,
  pub(crate) condition: ExpressionIdx,
  pub(crate) then: TokenIdx,
  pub(crate) action: StatementIdx,
}
impl OneLineIf {
  /// The condition
  pub fn condition<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.condition]
  }

  /// The statement run if the condition is true
  pub fn action<'a>(&self, ast: &'a AST) -> &'a Statement {
    &ast[self.action]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.keyword).merge(self.action(ast).span(ast))
  }
}

/// A repeat block, e.g. `repeat with i from 1 to 10 .. end repeat`
#[derive(Debug)]
pub struct Repeat {
  pub(crate) keyword: TokenIdx,
  pub(crate) clause: RepeatClause,
  pub(crate) header: Span,
  pub(crate) body: Body,
  pub(crate) end: Option<End>,
}
impl Repeat {
  /// How the loop is controlled
  #[must_use]
  pub fn clause(&self) -> &RepeatClause {
    &self.clause
  }

  /// The statements in the loop
  pub fn body<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
    body_statements(&self.body, ast)
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    block_span(ast, self.keyword, self.header, &self.body, self.end.as_ref())
  }
}

/// The header of a repeat block, how the loop is controlled
#[derive(Debug)]
pub enum RepeatClause {
  /// Loop until exited, `repeat` or `repeat forever`
  Forever(Option<TokenIdx>),
  /// Loop a number of times, `repeat 5 times`
  Times {
    /// How many times to loop
    count: ExpressionIdx,
    /// The `times` keyword
    times: Option<TokenIdx>,
  },
  /// Loop while a condition holds, `repeat while x < 5`
  While {
    /// The `while` keyword
    keyword: TokenIdx,
    /// The condition checked before each loop
    condition: ExpressionIdx,
  },
  /// Loop until a condition holds, `repeat until x = 5`
  Until {
    /// The `until` keyword
    keyword: TokenIdx,
    /// The condition checked before each loop
    condition: ExpressionIdx,
  },
  /// Count through numbers, `repeat with i from 1 to 10 by 2`
  Counted {
    /// The loop variable
    variable: Option<TokenIdx>,
    /// The first value
    from: ExpressionIdx,
    /// The last value
    to: ExpressionIdx,
    /// The step between values
    by: Option<ExpressionIdx>,
  },
  /// Loop over the items of a list, `repeat with item in list`
  ForEach {
    /// The loop variable
    variable: Option<TokenIdx>,
    /// The list being looped over
    collection: ExpressionIdx,
  },
}

/// A try block, with an optional error handler
#[derive(Debug)]
pub struct Try {
  pub(crate) keyword: TokenIdx,
  pub(crate) body: Body,
  pub(crate) handler: Option<ErrorHandler>,
  pub(crate) end: Option<End>,
}
impl Try {
  /// The statements which are tried
  pub fn body<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Statement> {
    body_statements(&self.body, ast)
  }

  /// The `on error` section, if present
  #[must_use]
  pub fn handler(&self) -> Option<&ErrorHandler> {
    self.handler.as_ref()
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let header = (self.handler.as_ref()).map_or_else(|| ast.token_span(self.keyword), |h| h.span(ast));
    block_span(ast, self.keyword, header, &self.body, self.end.as_ref())
  }
}

/// The `on error` section of a try block, e.g. `on error message number code`
#[derive(Debug)]
pub struct ErrorHandler {
  pub(crate) keyword: TokenIdx,
  pub(crate) message: Option<TokenIdx>,
  pub(crate) number: Option<TokenIdx>,
  pub(crate) body: Body,
}
impl ErrorHandler {
  /// The variable the error message is bound to
  #[must_use]
  pub fn message<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.message.map(|token| ast.get_token_text(token))
  }

  /// The variable the error number is bound to
  #[must_use]
  pub fn number<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.number.map(|token| ast.get_token_text(token))
  }

  /// The location of the section
  pub fn span(&self, ast: &AST) -> Span {
    let header = [self.message, self.number]
      .into_iter()
      .flatten()
      .fold(ast.token_span(self.keyword), |span, token| span.merge(ast.token_span(token)));

    block_span(ast, self.keyword, header, &self.body, None)
  }
}

/// A considering or ignoring block, e.g. `ignoring case but considering hyphens .. end ignoring`
#[derive(Debug)]
pub struct Considering {
  pub(crate) keyword: TokenIdx,
  pub(crate) attributes: ThinVec<TokenIdx>,
  pub(crate) but: Option<ButClause>,
  pub(crate) body: Body,
  pub(crate) end: Option<End>,
}
impl Considering {
  /// Is the block ignoring the attributes, rather than considering them?
  #[must_use]
  pub fn is_ignoring(&self, ast: &AST) -> bool {
    ast[self.keyword].kind == TokenKind::Ignoring
  }

  /// The attributes of string comparison which are changed
  pub fn attributes<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a str> {
    self.attributes.iter().map(|token| ast.get_token_text(*token))
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let header = (self.attributes.iter())
      .chain(self.but.iter().flat_map(|but| but.attributes.iter()))
      .fold(ast.token_span(self.keyword), |span, token| span.merge(ast.token_span(*token)));

    block_span(ast, self.keyword, header, &self.body, self.end.as_ref())
  }
}

/// The `but considering ..` or `but ignoring ..` clause of a considering block
#[derive(Debug)]
pub struct ButClause {
  pub(crate) but: TokenIdx,
  pub(crate) keyword: Option<TokenIdx>,
  pub(crate) attributes: ThinVec<TokenIdx>,
}

/// A timeout block, e.g. `with timeout of 10 seconds .. end timeout`
#[derive(Debug)]
pub struct Timeout {
  pub(crate) keyword: TokenIdx,
  pub(crate) duration: ExpressionIdx,
  pub(crate) seconds: Option<TokenIdx>,
  pub(crate) body: Body,
  pub(crate) end: Option<End>,
}
impl Timeout {
  /// How long to wait for a response
  pub fn duration<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.duration]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let header = self.duration(ast).span(ast);
    block_span(ast, self.keyword, header, &self.body, self.end.as_ref())
  }
}

/// A using terms from block, e.g. `using terms from application "Mail" .. end using terms from`
#[derive(Debug)]
pub struct UsingTerms {
  pub(crate) keyword: TokenIdx,
  pub(crate) target: ExpressionIdx,
  pub(crate) body: Body,
  pub(crate) end: Option<End>,
}
impl UsingTerms {
  /// Where the terminology comes from
  pub fn target<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.target]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let header = self.target(ast).span(ast);
    block_span(ast, self.keyword, header, &self.body, self.end.as_ref())
  }
}

/// A use statement, e.g. `use AppleScript version "2.4"`, `use F : application "Finder"`
#[derive(Debug)]
pub struct Use {
  pub(crate) keyword: TokenIdx,
  pub(crate) name: Option<TokenIdx>,
  pub(crate) target: ExpressionIdx,
  pub(crate) version: Option<ExpressionIdx>,
}
impl Use {
  /// The name the target is bound to
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.name.map(|name| ast.get_token_text(name))
  }

  /// What is being used
  pub fn target<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.target]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let end = self.version.unwrap_or(self.target);
    ast.token_span(self.keyword).merge(ast[end].span(ast))
  }
}

/// A property declaration, e.g. `property count : 0`
#[derive(Debug)]
pub struct Property {
  pub(crate) keyword: TokenIdx,
  pub(crate) name: Option<TokenIdx>,
  pub(crate) value: ExpressionIdx,
}
impl Property {
  /// The name of the property
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.name.map(|name| ast.get_token_text(name))
  }

  /// The initial value of the property
  pub fn value<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.value]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.keyword).merge(self.value(ast).span(ast))
  }
}

/// A global or local declaration, e.g. `local x, y`
#[derive(Debug)]
pub struct Declaration {
  pub(crate) keyword: TokenIdx,
  pub(crate) names: ThinVec<TokenIdx>,
}
impl Declaration {
  /// Is it a global declaration, rather than local?
  #[must_use]
  pub fn is_global(&self, ast: &AST) -> bool {
    ast[self.keyword].kind == TokenKind::Global
  }

  /// The names of the declared variables
  pub fn names<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a str> {
    self.names.iter().map(|name| ast.get_token_text(*name))
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    (self.names.iter()).fold(ast.token_span(self.keyword), |span, name| {
      span.merge(ast.token_span(*name))
    })
  }
}

/// An assignment, e.g. `set x to 5`
#[derive(Debug)]
pub struct Set {
  pub(crate) keyword: TokenIdx,
  pub(crate) target: ExpressionIdx,
  pub(crate) value: ExpressionIdx,
}
impl Set {
  /// What is being assigned to
  pub fn target<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.target]
  }

  /// The new value
  pub fn value<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.value]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.keyword).merge(self.value(ast).span(ast))
  }
}

/// A copying assignment, e.g. `copy x to y`
#[derive(Debug)]
pub struct CopyStmt {
  pub(crate) keyword: TokenIdx,
  pub(crate) value: ExpressionIdx,
  pub(crate) target: ExpressionIdx,
}
impl CopyStmt {
  /// The value which is copied
  pub fn value<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.value]
  }

  /// Where the copy is stored
  pub fn target<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.target]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.keyword).merge(self.target(ast).span(ast))
  }
}

/// A return from a handler, e.g. `return x`
#[derive(Debug)]
pub struct Return {
  pub(crate) keyword: TokenIdx,
  pub(crate) value: Option<ExpressionIdx>,
}
impl Return {
  /// The value returned, if present
  pub fn value<'a>(&self, ast: &'a AST) -> Option<&'a Expression> {
    self.value.map(|value| &ast[value])
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let keyword = ast.token_span(self.keyword);
    self.value(ast).map_or(keyword, |value| keyword.merge(value.span(ast)))
  }
}

/// Raising an error, e.g. `error "failed" number 500`
#[derive(Debug)]
pub struct ErrorStmt {
  pub(crate) keyword: TokenIdx,
  pub(crate) message: Option<ExpressionIdx>,
  pub(crate) parameters: ThinVec<Parameter>,
}
impl ErrorStmt {
  /// The message of the error
  pub fn message<'a>(&self, ast: &'a AST) -> Option<&'a Expression> {
    self.message.map(|message| &ast[message])
  }

  /// The parameters, such as `number`
  #[must_use]
  pub fn parameters(&self) -> &[Parameter] {
    &self.parameters
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let mut span = ast.token_span(self.keyword);
    if let Some(message) = self.message(ast) {
      span = span.merge(message.span(ast));
    }
    if let Some(parameter) = self.parameters.last() {
      span = span.merge(parameter.span(ast));
    }
    span
  }
}

/// Leaving a loop, e.g. `exit repeat`
#[derive(Debug)]
pub struct Exit {
  pub(crate) keyword: TokenIdx,
  pub(crate) repeat: Option<TokenIdx>,
}
impl Exit {
  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    let keyword = ast.token_span(self.keyword);
    self.repeat.map_or(keyword, |repeat| keyword.merge(ast.token_span(repeat)))
  }
}

/// Calling the parent's version of a handler, e.g. `continue quit`
#[derive(Debug)]
pub struct Continue {
  pub(crate) keyword: TokenIdx,
  pub(crate) value: ExpressionIdx,
}
impl Continue {
  /// The handler call passed to the parent
  pub fn value<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.value]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.keyword).merge(self.value(ast).span(ast))
  }
}

/// Logging a value, e.g. `log x`
#[derive(Debug)]
pub struct Log {
  pub(crate) keyword: TokenIdx,
  pub(crate) value: ExpressionIdx,
}
impl Log {
  /// The value logged
  pub fn value<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.value]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.keyword).merge(self.value(ast).span(ast))
  }
}

/// An expression on its own line
#[derive(Debug)]
pub struct ExpressionStmt {
  pub(crate) expression: ExpressionIdx,
}
impl ExpressionStmt {
  /// The expression
  pub fn expression<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.expression]
  }

  /// The location of the statement
  pub fn span(&self, ast: &AST) -> Span {
    self.expression(ast).span(ast)
  }
}

/// Tokens which don't form a statement, from the start to the end token inclusive
#[derive(Debug)]
pub struct InvalidStmt {
  pub(crate) start: TokenIdx,
  pub(crate) end: TokenIdx,
}
impl InvalidStmt {
  /// The location of the tokens
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.start).merge(ast.token_span(self.end))
  }
}

macro_rules! impl_from_statement {
  ($($variant:ident($type:ty)),* $(,)?) => {
    $(
      impl From<$type> for Statement {
        fn from(statement: $type) -> Self {
          Self::$variant(statement)
        }
      }
    )*
  };
}
impl_from_statement!(
  Handler(Handler),
  Script(Script),
  Tell(Tell),
  OneLineTell(OneLineTell),
  If(If),
  OneLineIf(OneLineIf),
  Repeat(Repeat),
  Try(Try),
  Considering(Considering),
  Timeout(Timeout),
  UsingTerms(UsingTerms),
  Use(Use),
  Property(Property),
  Declaration(Declaration),
  Set(Set),
  Copy(CopyStmt),
  Return(Return),
  Error(ErrorStmt),
  Exit(Exit),
  Continue(Continue),
  Log(Log),
  Expression(ExpressionStmt),
  Invalid(InvalidStmt),
);
