use crate::{
  ast::{AST, ExpressionIdx, Missing, StatementIdx, TokenIdx, expression::*, statement::*},
  span::Span,
  tokeniser::{Token, TokenKind},
};
use std::{error, fmt, mem};
use thin_vec::ThinVec;
use tracing::trace;

/// How deeply expressions and blocks can be nested inside each other
pub(crate) const MAX_DEPTH: u32 = 128;

pub struct Parser<'ast> {
  /// The AST being built up by the parser
  ast: &'ast mut AST,

  /// The current token, never a comment
  position: usize,
  /// The first token of the line currently being parsed
  line_start: usize,
  /// Have we encountered an error, and want to resync at the next chance?
  should_resync: bool,
  /// How many expressions and statements are being parsed inside each other
  depth: u32,
}
impl<'ast> Parser<'ast> {
  pub fn new(ast: &'ast mut AST) -> Self {
    let mut parser = Self {
      ast,
      position: 0,
      line_start: 0,
      should_resync: false,
      depth: 0,
    };
    parser.skip_comments();
    parser
  }

  pub fn parse(mut self) {
    let mut statements = Vec::new();

    while !self.is_finished() {
      self.statement_line(&mut statements);
    }

    self.ast.root_statements = statements;
  }

  fn add_error(&mut self, error: ParseError) {
    trace!(error = %error.title(), start = error.span().start, "parse error");
    self.ast.errors.push(error);
  }

  /// Report that part of the construct started by `owner` is missing, and mark where it
  /// should have been, just after the last token parsed
  fn add_missing(&mut self, owner: TokenIdx, error: ParseError) {
    let position = self.ast[self.previous_token_id()].end();
    self.ast.missing.push(Missing { owner, position });
    self.add_error(error);
  }

  fn is_finished(&self) -> bool {
    self.current_kind() == TokenKind::EndOfFile
  }

  /// Has the end of the current line been reached?
  ///
  /// Statements are ended by a line break, so no construct looks past it.
  fn at_line_end(&self) -> bool {
    self.is_finished() || (self.position != self.line_start && self.current_token().line_break)
  }

  fn start_line(&mut self) {
    self.line_start = self.position;
  }

  fn current_token_id(&self) -> TokenIdx {
    TokenIdx::new(self.position.min(self.ast.tokens.len().saturating_sub(1)))
  }

  fn current_token(&self) -> Token {
    self.ast[self.current_token_id()]
  }

  fn current_kind(&self) -> TokenKind {
    (self.ast.tokens.get(self.position)).map_or(TokenKind::EndOfFile, |token| token.kind)
  }

  /// The token after the current one, skipping comments
  fn peek(&self) -> Token {
    let rest = self.ast.tokens.get(self.position + 1..).unwrap_or_default();

    (rest.iter())
      .find(|token| token.kind != TokenKind::Comment)
      .copied()
      .unwrap_or_else(|| self.current_token())
  }

  /// Is the token after the current one on the same line, and of the given kind?
  fn peek_matches(&self, kind: TokenKind) -> bool {
    let next = self.peek();
    next.kind == kind && !next.line_break
  }

  fn previous_token_id(&self) -> TokenIdx {
    let end = self.position.min(self.ast.tokens.len());
    let position = self.ast.tokens[..end]
      .iter()
      .rposition(|token| token.kind != TokenKind::Comment)
      .unwrap_or(0);

    TokenIdx::new(position)
  }

  /// The token to report in an error, or an empty token if the line has ended
  fn unexpected(&self) -> Token {
    if self.is_finished() || !self.at_line_end() {
      return self.current_token();
    }

    let previous = self.ast[self.previous_token_id()];
    Token {
      kind: self.current_kind(),
      start: previous.end(),
      length: 0,
      trivia: 0,
      line_break: true,
    }
  }

  fn skip_comments(&mut self) {
    while self.current_kind() == TokenKind::Comment {
      self.position += 1;
    }
  }

  #[must_use]
  fn advance(&mut self) -> (TokenKind, TokenIdx) {
    let result = (self.current_kind(), self.current_token_id());
    if !self.is_finished() {
      self.position += 1;
      self.skip_comments();
    }
    result
  }

  /// Consume a token of the given kind, which is part of the construct started by `owner`
  fn expect(&mut self, owner: TokenIdx, kind: TokenKind) -> Option<TokenIdx> {
    let token = self.optional(kind);

    if token.is_none() {
      self.add_missing(owner, ParseError::Expected {
        expected: kind,
        received: self.unexpected(),
      });
    }

    token
  }

  /// Consume the current token if it is of the given kind and on the current line
  fn optional(&mut self, kind: TokenKind) -> Option<TokenIdx> {
    if !self.at_line_end() && self.current_kind() == kind {
      Some(self.advance().1)
    } else {
      None
    }
  }

  fn matches(&mut self, kind: TokenKind) -> bool {
    self.optional(kind).is_some()
  }

  /// A name, such as a variable or a handler name
  fn name(&mut self, owner: TokenIdx) -> Option<TokenIdx> {
    if !self.at_line_end() && self.current_kind().is_name() {
      Some(self.advance().1)
    } else {
      self.add_missing(owner, ParseError::ExpectedIdentifier(self.unexpected()));
      None
    }
  }

  /// Skip the rest of the line, returning the last token skipped
  fn skip_line(&mut self) -> TokenIdx {
    let mut end = self.current_token_id();
    while !self.at_line_end() {
      (_, end) = self.advance();
    }
    end
  }

  fn resync_if_error(&mut self, kind: TokenKind) {
    if mem::take(&mut self.should_resync) {
      while !self.at_line_end() && self.current_kind() != kind {
        _ = self.advance();
      }
    }
  }

  /// Check the line has ended, and wrap any remaining tokens in an invalid statement
  fn finish_line(&mut self) -> Option<StatementIdx> {
    let should_resync = mem::take(&mut self.should_resync);
    if self.at_line_end() {
      return None;
    }

    if !should_resync {
      self.add_error(ParseError::ExpectedEndOfLine(self.current_token()));
    }

    let start = self.current_token_id();
    let end = self.skip_line();
    trace!(start = self.ast[start].start, end = self.ast[end].end(), "skipped to end of line");

    Some(self.ast.add_statement(InvalidStmt { start, end }))
  }

  fn header_span(&self, keyword: TokenIdx) -> Span {
    self.ast.token_span(keyword).merge(self.ast.token_span(self.previous_token_id()))
  }
}
// Expressions
impl Parser<'_> {
  fn parse_expression(&mut self) -> ExpressionIdx {
    self.parse_expression_with_precedence(Precedence::LOWEST)
  }

  fn parse_expression_with_precedence(&mut self, precedence: Precedence) -> ExpressionIdx {
    if self.depth >= MAX_DEPTH {
      return self.invalid_expression(ParseError::NestedTooDeeply(self.unexpected()));
    }

    self.depth += 1;
    let expression = self.expression_with_precedence(precedence);
    self.depth -= 1;
    expression
  }

  /// Report an error, and add an invalid expression in place of the expression
  fn invalid_expression(&mut self, error: ParseError) -> ExpressionIdx {
    let token = if self.at_line_end() { self.previous_token_id() } else { self.current_token_id() };
    self.add_error(error);
    self.should_resync = true;
    self.ast.add_expression(Invalid { token })
  }

  fn expression_with_precedence(&mut self, precedence: Precedence) -> ExpressionIdx {
    if self.at_line_end() || self.at_closing_bracket() {
      return self.invalid_expression(ParseError::ExpectedExpression(self.unexpected()));
    }

    let (mut kind, mut token) = self.advance();
    // the article `the` is noise before an operand
    while kind == TokenKind::The && !self.at_line_end() {
      (kind, token) = self.advance();
    }

    let mut previous = match self.prefix_expression(kind, token) {
      Ok(expression) => expression,
      Err(error) => {
        self.add_error(error);
        self.should_resync = true;
        return self.ast.add_expression(Invalid { token });
      }
    };

    while !self.at_line_end() && precedence <= self.infix_precedence() {
      let (kind, token) = self.advance();
      previous = self.infix_expression(previous, kind, token);
    }

    previous
  }

  fn at_closing_bracket(&self) -> bool {
    matches!(self.current_kind(), TokenKind::RightParen | TokenKind::RightCurly)
  }

  /// Parse a prefix expression
  ///
  /// An expression which starts/ makes up the first part of the expression
  fn prefix_expression(
    &mut self,
    token_kind: TokenKind,
    token: TokenIdx,
  ) -> Result<ExpressionIdx, ParseError> {
    match token_kind {
      TokenKind::Number
      | TokenKind::String
      | TokenKind::True
      | TokenKind::False
      | TokenKind::MissingValue
      | TokenKind::Me
      | TokenKind::It
      | TokenKind::Result
      | TokenKind::ScriptingAdditions
      | TokenKind::AppleScript => Ok(self.ast.add_expression(Literal { token })),

      TokenKind::Identifier if self.current_kind() == TokenKind::LeftParen && !self.at_line_end() => {
        Ok(self.call(token))
      }
      TokenKind::Identifier | TokenKind::Version | TokenKind::Attribute => {
        Ok(self.ast.add_expression(Variable { token }))
      }
      // `end of x`, `front of x`
      TokenKind::End | TokenKind::Ordinal if self.current_kind() == TokenKind::Of => {
        Ok(self.ast.add_expression(Variable { token }))
      }

      TokenKind::Command => Ok(self.command(token)),
      TokenKind::ElementType | TokenKind::TypeName if self.starts_index() => Ok(self.index(token)),
      TokenKind::ElementType | TokenKind::TypeName | TokenKind::NumberKeyword => {
        Ok(self.ast.add_expression(Class { token }))
      }
      TokenKind::Ordinal => Ok(self.object_specifier(token)),
      TokenKind::My | TokenKind::Its => Ok(self.possessive_keyword(token)),

      TokenKind::LeftParen => Ok(self.group(token)),
      TokenKind::LeftCurly => Ok(self.list_or_record(token)),
      TokenKind::Minus | TokenKind::Not => Ok(self.unary(token)),

      TokenKind::Unknown => Err(ParseError::UnexpectedToken(self.ast[token])),
      _ => Err(ParseError::ExpectedExpression(self.ast[token])),
    }
  }

  /// The precedence of the current token when used as an infix operator
  fn infix_precedence(&self) -> Precedence {
    match self.current_kind() {
      TokenKind::Apostrophe if !self.is_possessive() => Precedence::None,
      kind => Precedence::from(kind),
    }
  }

  /// Is the current token the start of a possessive `'s`?
  fn is_possessive(&self) -> bool {
    self.ast.tokens.get(self.position + 1).is_some_and(|next| {
      next.kind == TokenKind::Identifier
        && next.trivia == 0
        && next.text(&self.ast.source).eq_ignore_ascii_case("s")
    })
  }

  /// Parse an infix expression
  ///
  /// An expression which relies on a previous expression to be complete.
  /// Passes the previously parsed expression to make up the start of the expression.
  fn infix_expression(
    &mut self,
    left: ExpressionIdx,
    kind: TokenKind,
    operator: TokenIdx,
  ) -> ExpressionIdx {
    match kind {
      TokenKind::Of => self.reference(left, operator),
      TokenKind::Apostrophe => self.possessive(left, operator),
      TokenKind::Whose => self.filter(left, operator),
      TokenKind::As => self.coercion(left, operator),
      _ => self.binary(left, kind, operator),
    }
  }

  fn binary(&mut self, left: ExpressionIdx, kind: TokenKind, operator: TokenIdx) -> ExpressionIdx {
    let precedence = Precedence::from(kind);
    // exponent is right associative
    let right_precedence = if kind == TokenKind::Caret { precedence } else { precedence.next() };
    let right = self.parse_expression_with_precedence(right_precedence);

    self.ast.add_expression(Binary {
      left,
      operator,
      right,
    })
  }

  fn call(&mut self, name: TokenIdx) -> ExpressionIdx {
    _ = self.advance();
    let mut arguments = ThinVec::new();

    if self.current_kind() != TokenKind::RightParen {
      loop {
        arguments.push(self.parse_expression());
        self.resync_if_error(TokenKind::RightParen);

        if !self.matches(TokenKind::Comma) {
          break;
        }
      }
    }
    let closing = self.expect(name, TokenKind::RightParen);

    self.ast.add_expression(Call {
      name,
      arguments,
      closing,
    })
  }

  fn coercion(&mut self, value: ExpressionIdx, keyword: TokenIdx) -> ExpressionIdx {
    let type_ = self.type_specifier(keyword);

    self.ast.add_expression(Coercion {
      value,
      keyword,
      type_,
    })
  }

  fn type_specifier(&mut self, keyword: TokenIdx) -> Option<TypeSpecifier> {
    let is_type = |kind| {
      matches!(
        kind,
        TokenKind::TypeName | TokenKind::ElementType | TokenKind::Identifier | TokenKind::NumberKeyword
      )
    };

    if self.at_line_end() || !is_type(self.current_kind()) {
      self.add_missing(keyword, ParseError::ExpectedTypeSpecifier(self.unexpected()));
      self.should_resync = true;
      return None;
    }

    let (_, start) = self.advance();
    let mut end = start;

    // compound types, e.g. `list of integer`
    while self.current_kind() == TokenKind::Of && !self.at_line_end() {
      let next = self.peek();
      if next.line_break || !is_type(next.kind) {
        break;
      }

      _ = self.advance();
      (_, end) = self.advance();
    }

    Some(TypeSpecifier { start, end })
  }

  fn command(&mut self, name: TokenIdx) -> ExpressionIdx {
    let argument = if self.matches(TokenKind::Of) || self.has_direct_argument() {
      Some(self.parse_expression())
    } else {
      None
    };
    let parameters = self.parameter_clauses();

    self.ast.add_expression(Command {
      name,
      argument,
      parameters,
    })
  }

  /// Is there a value on the line which isn't a parameter label?
  fn has_direct_argument(&self) -> bool {
    !self.at_line_end()
      && self.current_kind().starts_operand()
      && !is_parameter_label(self.current_kind())
  }

  fn parameter_clauses(&mut self) -> ThinVec<Parameter> {
    let mut parameters = ThinVec::new();

    while !self.at_line_end() && is_parameter_label(self.current_kind()) {
      let (_, label) = self.advance();
      let value = self.has_direct_argument().then(|| self.parse_expression());

      parameters.push(Parameter {
        label: Some(label),
        value,
      });
    }

    parameters
  }

  /// Is an element type followed by an index on the same line?
  fn starts_index(&self) -> bool {
    !self.at_line_end()
      && self.current_kind().starts_operand()
      && self.current_kind() != TokenKind::Not
  }

  fn index(&mut self, element: TokenIdx) -> ExpressionIdx {
    let index = self.parse_expression_with_precedence(Precedence::Primary);

    match self.optional(TokenKind::Thru) {
      Some(thru) => {
        let end = self.parse_expression_with_precedence(Precedence::Primary);
        self.ast.add_expression(Range {
          element,
          start: index,
          thru,
          end,
        })
      }
      None => self.ast.add_expression(Index { element, index }),
    }
  }

  fn object_specifier(&mut self, quantifier: TokenIdx) -> ExpressionIdx {
    let is_class = matches!(
      self.current_kind(),
      TokenKind::ElementType | TokenKind::TypeName | TokenKind::Identifier | TokenKind::NumberKeyword
    );

    let class = if is_class && !self.at_line_end() {
      Some(self.advance().1)
    } else {
      self.add_missing(quantifier, ParseError::ExpectedIdentifier(self.unexpected()));
      None
    };

    self.ast.add_expression(ObjectSpecifier {
      quantifier,
      class,
      of: None,
      container: None,
    })
  }

  fn possessive_keyword(&mut self, keyword: TokenIdx) -> ExpressionIdx {
    let element = self.parse_expression_with_precedence(Precedence::Primary);

    self.ast.add_expression(Reference {
      element,
      connector: keyword,
      container: None,
    })
  }

  fn reference(&mut self, element: ExpressionIdx, of: TokenIdx) -> ExpressionIdx {
    // containers nest to the right, `a of b of c` is `a of (b of c)`
    let container = self.parse_expression_with_precedence(Precedence::Reference);
    self.attach_container(element, of, container)
  }

  fn possessive(&mut self, container: ExpressionIdx, apostrophe: TokenIdx) -> ExpressionIdx {
    _ = self.advance();
    let element = self.parse_expression_with_precedence(Precedence::Primary);
    self.attach_container(element, apostrophe, container)
  }

  /// Join an element to its container, choosing the most specific form of reference
  fn attach_container(
    &mut self,
    element: ExpressionIdx,
    connector: TokenIdx,
    container: ExpressionIdx,
  ) -> ExpressionIdx {
    if let Expression::ObjectSpecifier(specifier) = &mut self.ast[element]
      && specifier.container.is_none()
    {
      specifier.of = Some(connector);
      specifier.container = Some(container);
      return element;
    }

    if let Expression::Variable(_) | Expression::Class(_) = self.ast[element] {
      return self.ast.add_expression(PropertyReference {
        property: element,
        connector,
        container,
      });
    }

    self.ast.add_expression(Reference {
      element,
      connector,
      container: Some(container),
    })
  }

  fn filter(&mut self, reference: ExpressionIdx, keyword: TokenIdx) -> ExpressionIdx {
    let condition = self.parse_expression();

    self.ast.add_expression(Filter {
      reference,
      keyword,
      condition,
    })
  }

  fn group(&mut self, opening: TokenIdx) -> ExpressionIdx {
    let expression = self.parse_expression();
    self.resync_if_error(TokenKind::RightParen);
    let closing = self.expect(opening, TokenKind::RightParen);

    self.ast.add_expression(Group {
      opening,
      expression,
      closing,
    })
  }

  /// Is the current token a label followed by a colon, the start of a record entry?
  fn at_record_label(&self) -> bool {
    !self.at_line_end()
      && self.current_kind().is_name()
      && self.peek_matches(TokenKind::Colon)
  }

  fn list_or_record(&mut self, opening: TokenIdx) -> ExpressionIdx {
    if let Some(closing) = self.optional(TokenKind::RightCurly) {
      return self.ast.add_expression(List {
        opening,
        items: ThinVec::new(),
        closing: Some(closing),
      });
    }

    // only the first entry decides between a list and a record
    if self.at_record_label() {
      self.record(opening)
    } else {
      self.list(opening)
    }
  }

  /// Check for a comma between items, returning if there are more items
  fn list_separator(&mut self, opening: TokenIdx) -> bool {
    self.resync_if_error(TokenKind::RightCurly);

    match self.current_kind() {
      _ if self.at_line_end() => false,
      TokenKind::RightCurly => false,
      TokenKind::Comma => {
        _ = self.advance();
        true
      }
      _ => {
        self.add_missing(opening, ParseError::MissingComma(self.current_token()));
        true
      }
    }
  }

  fn list(&mut self, opening: TokenIdx) -> ExpressionIdx {
    let mut items = ThinVec::new();

    loop {
      items.push(self.parse_expression());

      if !self.list_separator(opening) {
        break;
      }
    }
    let closing = self.expect(opening, TokenKind::RightCurly);

    self.ast.add_expression(List {
      opening,
      items,
      closing,
    })
  }

  fn record(&mut self, opening: TokenIdx) -> ExpressionIdx {
    let mut entries = ThinVec::new();

    loop {
      let label = if self.at_record_label() {
        let (_, label) = self.advance();
        _ = self.advance();
        Some(label)
      } else {
        self.add_missing(opening, ParseError::MissingRecordLabel(self.unexpected()));
        None
      };
      let value = self.parse_expression();
      entries.push(RecordEntry { label, value });

      if !self.list_separator(opening) {
        break;
      }
    }
    let closing = self.expect(opening, TokenKind::RightCurly);

    self.ast.add_expression(Record {
      opening,
      entries,
      closing,
    })
  }

  fn unary(&mut self, operator: TokenIdx) -> ExpressionIdx {
    let operand = self.parse_expression_with_precedence(Precedence::Unary);

    self.ast.add_expression(Unary { operator, operand })
  }
}
// Statements
impl Parser<'_> {
  /// Parse a statement, and anything left over on its final line
  fn statement_line(&mut self, statements: &mut impl Extend<StatementIdx>) {
    self.start_line();
    let statement = self.parse_statement();
    statements.extend([self.ast.add_statement(statement)]);
    statements.extend(self.finish_line());
  }

  fn parse_statement(&mut self) -> Statement {
    if self.depth >= MAX_DEPTH {
      return self.invalid_line(ParseError::NestedTooDeeply(self.current_token()));
    }

    self.depth += 1;
    let statement = self.statement();
    self.depth -= 1;
    statement
  }

  fn statement(&mut self) -> Statement {
    match self.current_kind() {
      TokenKind::On | TokenKind::To => self.handler(),
      TokenKind::Script => self.script(),
      TokenKind::Tell => self.tell(),
      TokenKind::If => self.if_(),
      TokenKind::Repeat => self.repeat(),
      TokenKind::Try => self.try_(),
      TokenKind::Considering | TokenKind::Ignoring => self.considering(),
      TokenKind::WithTimeout => self.timeout(),
      TokenKind::UsingTermsFrom => self.using_terms(),
      TokenKind::Use => self.use_(),
      TokenKind::Property => self.property(),
      TokenKind::Global | TokenKind::Local => self.declaration(),
      TokenKind::Set => self.set(),
      TokenKind::Copy => self.copy(),
      TokenKind::Return => self.return_(),
      TokenKind::Error => self.error(),
      TokenKind::Exit => self.exit(),
      TokenKind::Continue => self.continue_(),
      TokenKind::Log => self.log(),

      TokenKind::End => self.invalid_line(ParseError::UnexpectedEnd(self.current_token())),
      TokenKind::Else | TokenKind::OnError => {
        self.invalid_line(ParseError::UnexpectedToken(self.current_token()))
      }

      _ => Statement::Expression(ExpressionStmt {
        expression: self.parse_expression(),
      }),
    }
  }

  fn invalid_line(&mut self, error: ParseError) -> Statement {
    self.add_error(error);

    let start = self.current_token_id();
    let end = self.skip_line();
    Statement::Invalid(InvalidStmt { start, end })
  }

  /// Does the current token end the body of a block?
  fn at_block_end(&self) -> bool {
    matches!(
      self.current_kind(),
      TokenKind::End | TokenKind::Else | TokenKind::OnError | TokenKind::EndOfFile
    )
  }

  /// The statements in a block, after the header line
  fn block_body(&mut self) -> Body {
    let mut body = ThinVec::new();
    body.extend(self.finish_line());

    while !self.at_block_end() {
      self.statement_line(&mut body);
    }

    body
  }

  /// The `end` line of a block, the name after it is accepted but not checked
  fn block_end(&mut self, opening: TokenIdx) -> Option<End> {
    if self.current_kind() != TokenKind::End {
      self.add_missing(opening, ParseError::MissingEnd {
        opening: self.ast[opening],
      });
      return None;
    }

    self.start_line();
    let (_, keyword) = self.advance();
    let name = (!self.at_line_end()).then(|| self.advance().1);

    Some(End { keyword, name })
  }

  fn block(&mut self, opening: TokenIdx) -> (Body, Option<End>) {
    let body = self.block_body();
    let end = self.block_end(opening);
    (body, end)
  }

  fn handler(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let name = self.name(keyword);
    let mut parameters = ThinVec::new();
    let mut given = None;

    if self.matches(TokenKind::LeftParen) {
      if self.current_kind() != TokenKind::RightParen {
        loop {
          let value = self.parse_expression();
          parameters.push(Parameter {
            label: None,
            value: Some(value),
          });
          self.resync_if_error(TokenKind::RightParen);

          if !self.matches(TokenKind::Comma) {
            break;
          }
        }
      }
      self.expect(keyword, TokenKind::RightParen);
    } else {
      // a direct parameter, e.g. `on open theFiles`
      if !self.at_line_end()
        && self.current_kind().is_name()
        && !is_parameter_label(self.current_kind())
      {
        let (_, token) = self.advance();
        let value = self.ast.add_expression(Variable { token });
        parameters.push(Parameter {
          label: None,
          value: Some(value),
        });
      }

      while !self.at_line_end() && is_handler_label(self.current_kind()) {
        if let Some(keyword) = self.optional(TokenKind::Given) {
          given = Some(keyword);
          self.given_parameters(keyword, &mut parameters);
          break;
        }

        let (_, label) = self.advance();
        let value = self.name(keyword).map(|token| self.ast.add_expression(Variable { token }));
        parameters.push(Parameter {
          label: Some(label),
          value,
        });
      }
    }

    let header = self.header_span(keyword);
    let (body, end) = self.block(keyword);

    Statement::Handler(Handler {
      keyword,
      name,
      parameters,
      given,
      header,
      body,
      end,
    })
  }

  /// Parameters after `given`, e.g. `given name:x, age:y`
  fn given_parameters(&mut self, keyword: TokenIdx, parameters: &mut ThinVec<Parameter>) {
    loop {
      let label = self.name(keyword);
      self.expect(keyword, TokenKind::Colon);
      let value = self.name(keyword).map(|token| self.ast.add_expression(Variable { token }));
      parameters.push(Parameter { label, value });

      if !self.matches(TokenKind::Comma) {
        break;
      }
    }
  }

  fn script(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let name = (!self.at_line_end() && self.current_kind().is_name()).then(|| self.advance().1);
    let (body, end) = self.block(keyword);

    Statement::Script(Script {
      keyword,
      name,
      body,
      end,
    })
  }

  fn tell(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let target = self.parse_expression();

    if let Some(to) = self.optional(TokenKind::To) {
      let action = self.parse_statement();
      let action = self.ast.add_statement(action);

      return Statement::OneLineTell(OneLineTell {
        keyword,
        target,
        to,
        action,
      });
    }

    let (body, end) = self.block(keyword);
    Statement::Tell(Tell {
      keyword,
      target,
      body,
      end,
    })
  }

  fn if_(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let condition = self.parse_expression();
    let then = self.expect(keyword, TokenKind::Then);

    if let Some(then) = then
      && !self.at_line_end()
    {
      let action = self.parse_statement();
      let action = self.ast.add_statement(action);

      return Statement::OneLineIf(OneLineIf {
        keyword,
        condition,
        then,
        action,
      });
    }

    let body = self.block_body();
    let mut else_ifs = ThinVec::new();
    let mut otherwise = None;

    while self.current_kind() == TokenKind::Else && otherwise.is_none() {
      self.start_line();
      let (_, else_keyword) = self.advance();

      if let Some(if_) = self.optional(TokenKind::If) {
        let condition = self.parse_expression();
        let then = self.expect(else_keyword, TokenKind::Then);
        let body = self.block_body();

        else_ifs.push(ElseIf {
          keyword: else_keyword,
          if_,
          condition,
          then,
          body,
        });
      } else {
        let body = self.block_body();
        otherwise = Some(Else {
          keyword: else_keyword,
          body,
        });
      }
    }

    let end = self.block_end(keyword);
    Statement::If(If {
      keyword,
      condition,
      then,
      body,
      else_ifs,
      otherwise,
      end,
    })
  }

  fn repeat(&mut self) -> Statement {
    let (_, keyword) = self.advance();

    let clause = match self.current_kind() {
      _ if self.at_line_end() => RepeatClause::Forever(None),
      TokenKind::Forever => RepeatClause::Forever(Some(self.advance().1)),
      TokenKind::While => {
        let (_, keyword) = self.advance();
        let condition = self.parse_expression();
        RepeatClause::While { keyword, condition }
      }
      TokenKind::Until => {
        let (_, keyword) = self.advance();
        let condition = self.parse_expression();
        RepeatClause::Until { keyword, condition }
      }
      TokenKind::With => self.repeat_with(keyword),
      _ => {
        let count = self.parse_expression();
        let times = self.expect(keyword, TokenKind::Times);
        RepeatClause::Times { count, times }
      }
    };

    let header = self.header_span(keyword);
    let (body, end) = self.block(keyword);

    Statement::Repeat(Repeat {
      keyword,
      clause,
      header,
      body,
      end,
    })
  }

  fn repeat_with(&mut self, keyword: TokenIdx) -> RepeatClause {
    _ = self.advance();
    let variable = self.name(keyword);

    if self.matches(TokenKind::In) {
      let collection = self.parse_expression();
      return RepeatClause::ForEach {
        variable,
        collection,
      };
    }

    self.expect(keyword, TokenKind::From);
    let from = self.parse_expression();
    self.expect(keyword, TokenKind::To);
    let to = self.parse_expression();
    let by = self.matches(TokenKind::By).then(|| self.parse_expression());

    RepeatClause::Counted {
      variable,
      from,
      to,
      by,
    }
  }

  fn try_(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let body = self.block_body();

    let handler = (self.current_kind() == TokenKind::OnError).then(|| {
      self.start_line();
      let (_, keyword) = self.advance();

      let is_message = !self.at_line_end()
        && self.current_kind().is_name()
        && self.current_kind() != TokenKind::NumberKeyword;
      let message = is_message.then(|| self.advance().1);
      let number = if self.matches(TokenKind::NumberKeyword) { self.name(keyword) } else { None };
      let body = self.block_body();

      ErrorHandler {
        keyword,
        message,
        number,
        body,
      }
    });

    let end = self.block_end(keyword);
    Statement::Try(Try {
      keyword,
      body,
      handler,
      end,
    })
  }

  fn considering(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let attributes = self.attributes(keyword);

    let but = self.optional(TokenKind::But).map(|but| {
      let but_keyword = if !self.at_line_end()
        && matches!(self.current_kind(), TokenKind::Considering | TokenKind::Ignoring)
      {
        Some(self.advance().1)
      } else {
        self.add_missing(keyword, ParseError::Expected {
          expected: TokenKind::Considering,
          received: self.unexpected(),
        });
        None
      };

      ButClause {
        but,
        keyword: but_keyword,
        attributes: self.attributes(keyword),
      }
    });

    let (body, end) = self.block(keyword);
    Statement::Considering(Considering {
      keyword,
      attributes,
      but,
      body,
      end,
    })
  }

  /// Attributes separated by commas or `and`, e.g. `case, hyphens and white space`
  fn attributes(&mut self, keyword: TokenIdx) -> ThinVec<TokenIdx> {
    let mut attributes = ThinVec::new();

    loop {
      if !self.at_line_end()
        && matches!(self.current_kind(), TokenKind::Attribute | TokenKind::Identifier)
      {
        attributes.push(self.advance().1);
      } else {
        break self.add_missing(keyword, ParseError::Expected {
          expected: TokenKind::Attribute,
          received: self.unexpected(),
        });
      }

      if !(self.matches(TokenKind::Comma) || self.matches(TokenKind::And)) {
        break;
      }
    }

    attributes
  }

  fn timeout(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let duration = self.parse_expression();
    let seconds = self.optional(TokenKind::Seconds);
    let (body, end) = self.block(keyword);

    Statement::Timeout(Timeout {
      keyword,
      duration,
      seconds,
      body,
      end,
    })
  }

  fn using_terms(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let target = self.parse_expression();
    let (body, end) = self.block(keyword);

    Statement::UsingTerms(UsingTerms {
      keyword,
      target,
      body,
      end,
    })
  }

  fn use_(&mut self) -> Statement {
    let (_, keyword) = self.advance();

    let name = self.at_record_label().then(|| {
      let (_, name) = self.advance();
      _ = self.advance();
      name
    });

    // `use script "Library"`, where `script` would otherwise start a block
    let target = match self.optional(TokenKind::Script) {
      Some(element) => {
        let index = self.parse_expression_with_precedence(Precedence::Primary);
        self.ast.add_expression(Index { element, index })
      }
      None => self.parse_expression(),
    };
    let version = self.matches(TokenKind::Version).then(|| self.parse_expression());

    Statement::Use(Use {
      keyword,
      name,
      target,
      version,
    })
  }

  fn property(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let name = self.name(keyword);
    self.expect(keyword, TokenKind::Colon);
    let value = self.parse_expression();

    Statement::Property(Property {
      keyword,
      name,
      value,
    })
  }

  fn declaration(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let mut names = ThinVec::new();

    loop {
      names.extend(self.name(keyword));

      if !self.matches(TokenKind::Comma) {
        break;
      }
    }

    Statement::Declaration(Declaration { keyword, names })
  }

  fn set(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let target = self.parse_expression();
    self.expect(keyword, TokenKind::To);
    let value = self.parse_expression();

    Statement::Set(Set {
      keyword,
      target,
      value,
    })
  }

  fn copy(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let value = self.parse_expression();
    self.expect(keyword, TokenKind::To);
    let target = self.parse_expression();

    Statement::Copy(CopyStmt {
      keyword,
      value,
      target,
    })
  }

  fn return_(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let value = (!self.at_line_end()).then(|| self.parse_expression());

    Statement::Return(Return { keyword, value })
  }

  fn error(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let message = self.has_direct_argument().then(|| self.parse_expression());
    let parameters = self.parameter_clauses();

    Statement::Error(ErrorStmt {
      keyword,
      message,
      parameters,
    })
  }

  fn exit(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let repeat = self.optional(TokenKind::Repeat);

    Statement::Exit(Exit { keyword, repeat })
  }

  fn continue_(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let value = self.parse_expression();

    Statement::Continue(Continue { keyword, value })
  }

  fn log(&mut self) -> Statement {
    let (_, keyword) = self.advance();
    let value = self.parse_expression();

    Statement::Log(Log { keyword, value })
  }
}

/// Can the token label a parameter of a command?
fn is_parameter_label(kind: TokenKind) -> bool {
  matches!(
    kind,
    TokenKind::Parameter
      | TokenKind::To
      | TokenKind::In
      | TokenKind::From
      | TokenKind::By
      | TokenKind::With
      | TokenKind::NumberKeyword
      | TokenKind::Given
      | TokenKind::As
  )
}

/// Can the token label a parameter of a handler definition?
fn is_handler_label(kind: TokenKind) -> bool {
  is_parameter_label(kind) || kind == TokenKind::Of
}

/// The precedence of the different operators, lowest to highest
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Eq)]
enum Precedence {
  None = 1,
  Comparison,     // = ≠ < > ≤ ≥ contains, is in, starts with ...
  Coercion,       // as
  Logical,        // and or &
  Additive,       // + -
  Multiplicative, // * / ÷ div mod
  Exponent,       // ^
  Unary,          // - not ¬
  Filter,         // whose where
  Reference,      // of 's
  Primary,        // literal, variable, index
}
impl Precedence {
  const LOWEST: Self = Self::Comparison;

  fn next(self) -> Self {
    match self {
      Self::None => Self::Comparison,
      Self::Comparison => Self::Coercion,
      Self::Coercion => Self::Logical,
      Self::Logical => Self::Additive,
      Self::Additive => Self::Multiplicative,
      Self::Multiplicative => Self::Exponent,
      Self::Exponent => Self::Unary,
      Self::Unary => Self::Filter,
      Self::Filter => Self::Reference,
      Self::Reference | Self::Primary => Self::Primary,
    }
  }
}
impl From<TokenKind> for Precedence {
  fn from(kind: TokenKind) -> Self {
    match kind {
      kind if kind.is_comparison() => Self::Comparison,
      TokenKind::As => Self::Coercion,
      TokenKind::And | TokenKind::Or | TokenKind::Ampersand => Self::Logical,
      TokenKind::Plus | TokenKind::Minus => Self::Additive,
      TokenKind::Multiply | TokenKind::Divide | TokenKind::Div | TokenKind::Mod => {
        Self::Multiplicative
      }
      TokenKind::Caret => Self::Exponent,
      TokenKind::Whose => Self::Filter,
      TokenKind::Of | TokenKind::Apostrophe => Self::Reference,
      _ => Self::None,
    }
  }
}

/// Describe the token an error was found at
fn describe(token: &Token) -> String {
  if token.length == 0 && token.kind != TokenKind::EndOfFile {
    "end of line".into()
  } else {
    token.kind.to_string()
  }
}

/// An error which arose during parsing
#[derive(Clone, Debug)]
pub enum ParseError {
  /// Expected a token of a certain kind
  Expected {
    /// Expected Token Kind to be
    expected: TokenKind,
    /// Received this Token instead
    received: Token,
  },
  /// Expected Expression
  ExpectedExpression(Token),
  /// Expressions or blocks are nested inside each other too deeply
  NestedTooDeeply(Token),
  /// Expected the line to end after a statement
  ExpectedEndOfLine(Token),
  /// Expected a name, such as a variable
  ExpectedIdentifier(Token),
  /// Expected a type after `as`
  ExpectedTypeSpecifier(Token),

  /// A block has no `end`
  MissingEnd {
    /// The keyword which opened the block
    opening: Token,
  },
  /// An `end` without a block to close
  UnexpectedEnd(Token),
  /// A token which can't start a statement or expression
  UnexpectedToken(Token),
  /// A record entry without a label
  MissingRecordLabel(Token),
  /// Missing comma between items
  MissingComma(Token),
}
impl ParseError {
  /// The title of the error message
  #[must_use]
  pub fn title(&self) -> String {
    match self {
      Self::Expected { expected, .. } => format!("Expected {expected}"),
      Self::ExpectedExpression(_) => "Expected Expression".into(),
      Self::NestedTooDeeply(_) => "Nested Too Deeply".into(),
      Self::ExpectedEndOfLine(_) => "Expected End of Line".into(),
      Self::ExpectedIdentifier(_) => "Expected Identifier".into(),
      Self::ExpectedTypeSpecifier(_) => "Expected Type".into(),
      Self::MissingEnd { .. } => "Missing End".into(),
      Self::UnexpectedEnd(_) => "Unexpected End".into(),
      Self::UnexpectedToken(_) => "Unexpected Token".into(),
      Self::MissingRecordLabel(_) => "Missing Record Label".into(),
      Self::MissingComma(_) => "Missing Comma".into(),
    }
  }

  /// The body of the error message describing what has gone wrong
  #[must_use]
  pub fn message(&self) -> String {
    match self {
      Self::Expected { expected, received } => {
        format!("expected {expected} but got {}", describe(received))
      }
      Self::ExpectedExpression(t) => format!("expected expression but got {}", describe(t)),
      Self::NestedTooDeeply(_) => format!("nesting is limited to {MAX_DEPTH} levels"),
      Self::ExpectedEndOfLine(t) => format!("expected end of line but got {}", describe(t)),
      Self::ExpectedIdentifier(t) => format!("expected a name but got {}", describe(t)),
      Self::ExpectedTypeSpecifier(t) => format!("expected a type but got {}", describe(t)),
      Self::MissingEnd { opening } => format!("the {} block is never closed", opening.kind),
      Self::UnexpectedEnd(_) => "there is no block for `end` to close".into(),
      Self::UnexpectedToken(t) => format!("unexpected {}", describe(t)),
      Self::MissingRecordLabel(_) => "every entry in a record must have a label".into(),
      Self::MissingComma(_) => "expected there to be a comma between items".into(),
    }
  }

  /// The title and message of the error in a combined string
  #[must_use]
  pub fn full_message(&self) -> String {
    let mut message = self.title();
    message.push('\n');
    message.push_str(&self.message());

    if let Some(suggestion) = self.suggestion() {
      message.push('\n');
      message.push_str("hint: ");
      message.push_str(&suggestion);
    }

    message
  }

  /// The location of the error
  #[must_use]
  pub fn span(&self) -> Span {
    match self {
      Self::Expected { received, .. } => received.into(),
      Self::MissingEnd { opening } => opening.into(),
      Self::ExpectedExpression(token)
      | Self::NestedTooDeeply(token)
      | Self::ExpectedEndOfLine(token)
      | Self::ExpectedIdentifier(token)
      | Self::ExpectedTypeSpecifier(token)
      | Self::UnexpectedEnd(token)
      | Self::UnexpectedToken(token)
      | Self::MissingRecordLabel(token)
      | Self::MissingComma(token) => token.into(),
    }
  }

  /// A suggestion for how to fix the error
  #[must_use]
  pub fn suggestion(&self) -> Option<String> {
    match self {
      Self::MissingEnd { opening } => Some(format!("add `end {}` after the block", opening.kind)),
      Self::ExpectedEndOfLine(_) => {
        Some("a statement can continue onto the next line with `¬`".to_owned())
      }
      _ => None,
    }
  }
}
impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message())
  }
}
impl error::Error for ParseError {}
