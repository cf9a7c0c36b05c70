//! # Syntax Nodes
//!
//! A generic view of the tree, where every node has a kind, a span and ordered children.
//! Children are either nodes or tokens, and can be labelled with a field name.

use super::{
  AST, ExpressionIdx, Missing, StatementIdx, TokenIdx,
  expression::{Expression, Parameter, TypeSpecifier},
  statement::{Body, End, RepeatClause, Statement},
};
use crate::{span::Span, tokeniser::Token, tokeniser::TokenKind};
use std::fmt;

/// The kind of a node in the syntax tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
  /// The whole script
  Source,

  /// `on name(...)` ... `end`
  Handler,
  /// A labelled parameter of a command or handler
  Parameter,
  /// `script name` ... `end script`
  Script,
  /// `tell target` ... `end tell`
  Tell,
  /// `tell target to statement`
  OneLineTell,
  /// `if condition then` ... `end if`
  If,
  /// `else if condition then` branch
  ElseIf,
  /// `else` branch
  Else,
  /// `if condition then statement`
  OneLineIf,
  /// `repeat` with no condition
  RepeatForever,
  /// `repeat n times`
  RepeatTimes,
  /// `repeat while condition`
  RepeatWhile,
  /// `repeat until condition`
  RepeatUntil,
  /// `repeat with i from a to b [by c]`
  RepeatWith,
  /// `repeat with item in collection`
  RepeatIn,
  /// `try` ... `end try`
  Try,
  /// `on error` branch of a try block
  ErrorHandler,
  /// `considering attributes` ... `end considering`
  Considering,
  /// `ignoring attributes` ... `end ignoring`
  Ignoring,
  /// `with timeout of n seconds` ... `end timeout`
  Timeout,
  /// `using terms from target` ... `end using terms from`
  UsingTerms,
  /// `use` declaration
  Use,
  /// `property name : value`
  Property,
  /// `global names`
  Global,
  /// `local names`
  Local,
  /// `set variable to value`
  Set,
  /// `copy value to variable`
  Copy,
  /// `return [value]`
  Return,
  /// `error [message]`
  Error,
  /// `exit [repeat]`
  Exit,
  /// `continue handler`
  Continue,
  /// `log value`
  Log,
  /// The `end` which closes a block
  End,
  /// A statement which could not be parsed
  InvalidStatement,

  /// A number, string, boolean or constant
  Literal,
  /// A name
  Variable,
  /// `name(arguments)`
  Call,
  /// A command with its direct argument and parameters
  Command,
  /// `( expression )`
  Group,
  /// `{a, b}`
  List,
  /// `{label: value}`
  Record,
  /// A `label: value` entry of a record
  RecordEntry,
  /// A prefix operator
  Unary,
  /// An infix operator
  Binary,
  /// `a & b`
  Concatenation,
  /// `value as type`
  Coercion,
  /// An element by index, `item 1`
  Index,
  /// A range of elements, `items 1 thru 3`
  Range,
  /// An element by quantifier, `every item`
  ObjectSpecifier,
  /// A property of a container, `name of x`
  PropertyReference,
  /// Any other reference to something in a container
  Reference,
  /// `reference whose condition`
  Filter,
  /// A type specifier
  Class,
  /// An expression which could not be parsed
  Invalid,
}
impl NodeKind {
  /// Is the node a block, which can span multiple lines and ends with `end`?
  #[must_use]
  pub fn is_block(self) -> bool {
    matches!(
      self,
      Self::Handler
        | Self::Script
        | Self::Tell
        | Self::If
        | Self::ElseIf
        | Self::Else
        | Self::RepeatForever
        | Self::RepeatTimes
        | Self::RepeatWhile
        | Self::RepeatUntil
        | Self::RepeatWith
        | Self::RepeatIn
        | Self::Try
        | Self::ErrorHandler
        | Self::Considering
        | Self::Ignoring
        | Self::Timeout
        | Self::UsingTerms
    )
  }

  /// Is the node an error, wrapping input which couldn't be parsed?
  #[must_use]
  pub fn is_invalid(self) -> bool {
    matches!(self, Self::InvalidStatement | Self::Invalid)
  }
}
impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

/// A node of the syntax tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
  /// What construct the node is
  pub kind: NodeKind,
  /// The location of the node in the source
  pub span: Span,
  /// The children of the node, in source order
  pub children: Vec<Child>,
}
impl SyntaxNode {
  fn new(kind: NodeKind, span: Span) -> Self {
    Self {
      kind,
      span,
      children: Vec::new(),
    }
  }

  /// The first child with the given field name
  #[must_use]
  pub fn field(&self, name: &str) -> Option<&Element> {
    (self.children.iter())
      .find(|child| child.field == Some(name))
      .map(|child| &child.element)
  }

  /// All the children with the given field name
  pub fn fields<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
    (self.children.iter())
      .filter(move |child| child.field == Some(name))
      .map(|child| &child.element)
  }

  /// The children which are nodes
  pub fn nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
    self.children.iter().filter_map(|child| child.element.as_node())
  }

  /// The children which are tokens, with their field names
  pub fn tokens(&self) -> impl Iterator<Item = (Option<&'static str>, &Token)> {
    (self.children.iter()).filter_map(|child| Some((child.field, child.element.as_token()?)))
  }

  /// Every node in the tree, depth first, starting with this node
  pub fn descendants(&self) -> Box<dyn Iterator<Item = &SyntaxNode> + '_> {
    Box::new(std::iter::once(self).chain(self.nodes().flat_map(Self::descendants)))
  }

  fn token(mut self, field: &'static str, token: impl Into<Option<Token>>) -> Self {
    if let Some(token) = token.into() {
      self.children.push(Child {
        field: Some(field),
        element: Element::Token(token),
      });
    }
    self
  }

  fn node(mut self, field: Option<&'static str>, node: impl Into<Option<SyntaxNode>>) -> Self {
    if let Some(node) = node.into() {
      self.children.push(Child {
        field,
        element: Element::Node(node),
      });
    }
    self
  }
}

/// A child of a node, with an optional field name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Child {
  /// The role of the child in its parent, e.g. `condition`
  pub field: Option<&'static str>,
  /// The child itself
  pub element: Element,
}

/// Either a node or a token
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
  /// A nested node
  Node(SyntaxNode),
  /// A single token
  Token(Token),
}
impl Element {
  /// The node, if the element is a node
  #[must_use]
  pub fn as_node(&self) -> Option<&SyntaxNode> {
    match self {
      Self::Node(node) => Some(node),
      Self::Token(_) => None,
    }
  }

  /// The token, if the element is a token
  #[must_use]
  pub fn as_token(&self) -> Option<&Token> {
    match self {
      Self::Node(_) => None,
      Self::Token(token) => Some(token),
    }
  }

  /// The location of the element
  pub fn span(&self) -> Span {
    match self {
      Self::Node(node) => node.span,
      Self::Token(token) => token.into(),
    }
  }
}

pub(super) fn build(ast: &AST) -> SyntaxNode {
  let builder = Builder { ast };
  let span = ast.line_index().file_span();

  let mut root = (ast.root_statements.iter())
    .fold(SyntaxNode::new(NodeKind::Source, span), |node, statement| {
      node.node(None, builder.statement(*statement))
    });

  if !ast.missing.is_empty() {
    let mut missing = ast.missing.clone();
    missing.sort_by_key(|missing| (ast[missing.owner].start, missing.position));
    add_missing(&mut root, ast, &missing);
  }

  root
}

/// Add an empty invalid node where each missing token should have been, in the node
/// which has the owner of the missing token as one of its tokens
fn add_missing(node: &mut SyntaxNode, ast: &AST, missing: &[Missing]) {
  for child in &mut node.children {
    if let Element::Node(child) = &mut child.element {
      add_missing(child, ast, missing);
    }
  }

  let owners: Vec<u32> = node.tokens().map(|(_, token)| token.start).collect();
  for owner in owners {
    let first = missing.partition_point(|missing| ast[missing.owner].start < owner);
    let owned = missing[first..]
      .iter()
      .take_while(|missing| ast[missing.owner].start == owner);

    for missing in owned {
      let index = (node.children.iter())
        .position(|child| child.element.span().start >= missing.position)
        .unwrap_or(node.children.len());
      let position = Span::new(missing.position, missing.position);

      node.children.insert(index, Child {
        field: Some("missing"),
        element: Element::Node(SyntaxNode::new(NodeKind::Invalid, position)),
      });
    }
  }
}

struct Builder<'a> {
  ast: &'a AST,
}
impl Builder<'_> {
  fn token(&self, token: TokenIdx) -> Token {
    self.ast[token]
  }

  fn optional(&self, token: Option<TokenIdx>) -> Option<Token> {
    token.map(|token| self.ast[token])
  }

  fn body(&self, node: SyntaxNode, body: &Body) -> SyntaxNode {
    (body.iter()).fold(node, |node, statement| node.node(None, self.statement(*statement)))
  }

  fn end(&self, end: Option<&End>) -> Option<SyntaxNode> {
    let end = end?;

    let node = SyntaxNode::new(NodeKind::End, end.span(self.ast))
      .token("keyword", self.token(end.keyword))
      .token("name", self.optional(end.name));
    Some(node)
  }

  fn parameters(&self, node: SyntaxNode, parameters: &[Parameter]) -> SyntaxNode {
    (parameters.iter()).fold(node, |node, parameter| {
      let parameter = SyntaxNode::new(NodeKind::Parameter, parameter.span(self.ast))
        .token("label", self.optional(parameter.label))
        .node(Some("value"), parameter.value.map(|value| self.expression(value)));

      node.node(None, parameter)
    })
  }

  fn statement(&self, statement: StatementIdx) -> SyntaxNode {
    let statement = &self.ast[statement];
    let span = statement.span(self.ast);

    match statement {
      Statement::Handler(handler) => {
        let node = SyntaxNode::new(NodeKind::Handler, span)
          .token("keyword", self.token(handler.keyword))
          .token("name", self.optional(handler.name));

        // labeled parameters come before `given`, which is followed by the rest
        let split = (handler.given)
          .and_then(|given| {
            let given = self.ast.token_span(given);
            (handler.parameters.iter()).position(|parameter| given.start <= parameter.span(self.ast).start)
          })
          .unwrap_or(handler.parameters.len());
        let (before, after) = handler.parameters.split_at(split);

        let node = self.parameters(node, before).token("keyword", self.optional(handler.given));
        let node = self.parameters(node, after);
        self.body(node, &handler.body).node(Some("end"), self.end(handler.end.as_ref()))
      }
      Statement::Script(script) => {
        let node = SyntaxNode::new(NodeKind::Script, span)
          .token("keyword", self.token(script.keyword))
          .token("name", self.optional(script.name));
        self.body(node, &script.body).node(Some("end"), self.end(script.end.as_ref()))
      }
      Statement::Tell(tell) => {
        let node = SyntaxNode::new(NodeKind::Tell, span)
          .token("keyword", self.token(tell.keyword))
          .node(Some("target"), self.expression(tell.target));
        self.body(node, &tell.body).node(Some("end"), self.end(tell.end.as_ref()))
      }
      Statement::OneLineTell(tell) => SyntaxNode::new(NodeKind::OneLineTell, span)
        .token("keyword", self.token(tell.keyword))
        .node(Some("target"), self.expression(tell.target))
        .token("keyword", self.token(tell.to))
        .node(Some("action"), self.statement(tell.action)),
      Statement::If(if_) => {
        let node = SyntaxNode::new(NodeKind::If, span)
          .token("keyword", self.token(if_.keyword))
          .node(Some("condition"), self.expression(if_.condition))
          .token("keyword", self.optional(if_.then));
        let mut node = self.body(node, &if_.body);

        for else_if in &if_.else_ifs {
          let branch = SyntaxNode::new(NodeKind::ElseIf, else_if.span(self.ast))
            .token("keyword", self.token(else_if.keyword))
            .token("keyword", self.token(else_if.if_))
            .node(Some("condition"), self.expression(else_if.condition))
            .token("keyword", self.optional(else_if.then));
          node = node.node(None, self.body(branch, &else_if.body));
        }

        if let Some(otherwise) = &if_.otherwise {
          let branch = SyntaxNode::new(NodeKind::Else, otherwise.span(self.ast))
            .token("keyword", self.token(otherwise.keyword));
          node = node.node(None, self.body(branch, &otherwise.body));
        }

        node.node(Some("end"), self.end(if_.end.as_ref()))
      }
      Statement::OneLineIf(if_) => SyntaxNode::new(NodeKind::OneLineIf, span)
        .token("keyword", self.token(if_.keyword))
        .node(Some("condition"), self.expression(if_.condition))
        .token("keyword", self.token(if_.then))
        .node(Some("action"), self.statement(if_.action)),
      Statement::Repeat(repeat) => {
        let node = self.repeat_clause(&repeat.clause, span, self.token(repeat.keyword));
        self.body(node, &repeat.body).node(Some("end"), self.end(repeat.end.as_ref()))
      }
      Statement::Try(try_) => {
        let node = SyntaxNode::new(NodeKind::Try, span).token("keyword", self.token(try_.keyword));
        let mut node = self.body(node, &try_.body);

        if let Some(handler) = &try_.handler {
          let section = SyntaxNode::new(NodeKind::ErrorHandler, handler.span(self.ast))
            .token("keyword", self.token(handler.keyword))
            .token("message", self.optional(handler.message))
            .token("number", self.optional(handler.number));
          node = node.node(None, self.body(section, &handler.body));
        }

        node.node(Some("end"), self.end(try_.end.as_ref()))
      }
      Statement::Considering(considering) => {
        let kind = if considering.is_ignoring(self.ast) {
          NodeKind::Ignoring
        } else {
          NodeKind::Considering
        };

        let mut node = SyntaxNode::new(kind, span).token("keyword", self.token(considering.keyword));
        for attribute in &considering.attributes {
          node = node.token("attribute", self.token(*attribute));
        }
        if let Some(but) = &considering.but {
          node = node
            .token("keyword", self.token(but.but))
            .token("keyword", self.optional(but.keyword));
          for attribute in &but.attributes {
            node = node.token("attribute", self.token(*attribute));
          }
        }

        self.body(node, &considering.body).node(Some("end"), self.end(considering.end.as_ref()))
      }
      Statement::Timeout(timeout) => {
        let node = SyntaxNode::new(NodeKind::Timeout, span)
          .token("keyword", self.token(timeout.keyword))
          .node(Some("duration"), self.expression(timeout.duration))
          .token("keyword", self.optional(timeout.seconds));
        self.body(node, &timeout.body).node(Some("end"), self.end(timeout.end.as_ref()))
      }
      Statement::UsingTerms(using_terms) => {
        let node = SyntaxNode::new(NodeKind::UsingTerms, span)
          .token("keyword", self.token(using_terms.keyword))
          .node(Some("target"), self.expression(using_terms.target));
        self.body(node, &using_terms.body).node(Some("end"), self.end(using_terms.end.as_ref()))
      }
      Statement::Use(use_) => SyntaxNode::new(NodeKind::Use, span)
        .token("keyword", self.token(use_.keyword))
        .token("name", self.optional(use_.name))
        .node(Some("target"), self.expression(use_.target))
        .node(Some("version"), use_.version.map(|version| self.expression(version))),
      Statement::Property(property) => SyntaxNode::new(NodeKind::Property, span)
        .token("keyword", self.token(property.keyword))
        .token("name", self.optional(property.name))
        .node(Some("value"), self.expression(property.value)),
      Statement::Declaration(declaration) => {
        let kind = if declaration.is_global(self.ast) { NodeKind::Global } else { NodeKind::Local };

        (declaration.names.iter()).fold(
          SyntaxNode::new(kind, span).token("keyword", self.token(declaration.keyword)),
          |node, name| node.token("name", self.token(*name)),
        )
      }
      Statement::Set(set) => SyntaxNode::new(NodeKind::Set, span)
        .token("keyword", self.token(set.keyword))
        .node(Some("target"), self.expression(set.target))
        .node(Some("value"), self.expression(set.value)),
      Statement::Copy(copy) => SyntaxNode::new(NodeKind::Copy, span)
        .token("keyword", self.token(copy.keyword))
        .node(Some("value"), self.expression(copy.value))
        .node(Some("target"), self.expression(copy.target)),
      Statement::Return(return_) => SyntaxNode::new(NodeKind::Return, span)
        .token("keyword", self.token(return_.keyword))
        .node(Some("value"), return_.value.map(|value| self.expression(value))),
      Statement::Error(error) => {
        let node = SyntaxNode::new(NodeKind::Error, span)
          .token("keyword", self.token(error.keyword))
          .node(Some("message"), error.message.map(|message| self.expression(message)));
        self.parameters(node, &error.parameters)
      }
      Statement::Exit(exit) => SyntaxNode::new(NodeKind::Exit, span)
        .token("keyword", self.token(exit.keyword))
        .token("keyword", self.optional(exit.repeat)),
      Statement::Continue(continue_) => SyntaxNode::new(NodeKind::Continue, span)
        .token("keyword", self.token(continue_.keyword))
        .node(Some("value"), self.expression(continue_.value)),
      Statement::Log(log) => SyntaxNode::new(NodeKind::Log, span)
        .token("keyword", self.token(log.keyword))
        .node(Some("value"), self.expression(log.value)),
      Statement::Expression(statement) => self.expression(statement.expression),
      Statement::Invalid(invalid) => {
        (invalid.start.range(invalid.end)).fold(SyntaxNode::new(NodeKind::InvalidStatement, span), |node, token| {
          node.token("token", self.token(token))
        })
      }
    }
  }

  fn repeat_clause(&self, clause: &RepeatClause, span: Span, keyword: Token) -> SyntaxNode {
    match clause {
      RepeatClause::Forever(forever) => SyntaxNode::new(NodeKind::RepeatForever, span)
        .token("keyword", keyword)
        .token("keyword", self.optional(*forever)),
      RepeatClause::Times { count, times } => SyntaxNode::new(NodeKind::RepeatTimes, span)
        .token("keyword", keyword)
        .node(Some("count"), self.expression(*count))
        .token("keyword", self.optional(*times)),
      RepeatClause::While { keyword: while_, condition } => {
        SyntaxNode::new(NodeKind::RepeatWhile, span)
          .token("keyword", keyword)
          .token("keyword", self.token(*while_))
          .node(Some("condition"), self.expression(*condition))
      }
      RepeatClause::Until { keyword: until, condition } => {
        SyntaxNode::new(NodeKind::RepeatUntil, span)
          .token("keyword", keyword)
          .token("keyword", self.token(*until))
          .node(Some("condition"), self.expression(*condition))
      }
      RepeatClause::Counted { variable, from, to, by } => {
        SyntaxNode::new(NodeKind::RepeatWith, span)
          .token("keyword", keyword)
          .token("variable", self.optional(*variable))
          .node(Some("from"), self.expression(*from))
          .node(Some("to"), self.expression(*to))
          .node(Some("by"), by.map(|by| self.expression(by)))
      }
      RepeatClause::ForEach { variable, collection } => {
        SyntaxNode::new(NodeKind::RepeatIn, span)
          .token("keyword", keyword)
          .token("variable", self.optional(*variable))
          .node(Some("collection"), self.expression(*collection))
      }
    }
  }

  fn type_specifier(&self, node: SyntaxNode, type_: Option<&TypeSpecifier>) -> SyntaxNode {
    (type_.into_iter().flat_map(TypeSpecifier::tokens))
      .filter(|token| self.ast[*token].kind != TokenKind::Comment)
      .fold(node, |node, token| node.token("type", self.token(token)))
  }

  fn expression(&self, expression: ExpressionIdx) -> SyntaxNode {
    let expression = &self.ast[expression];
    let span = expression.span(self.ast);

    match expression {
      Expression::Literal(literal) => {
        SyntaxNode::new(NodeKind::Literal, span).token("value", self.token(literal.token))
      }
      Expression::Variable(variable) => {
        SyntaxNode::new(NodeKind::Variable, span).token("name", self.token(variable.token))
      }
      Expression::Call(call) => (call.arguments.iter())
        .fold(
          SyntaxNode::new(NodeKind::Call, span).token("callee", self.token(call.name)),
          |node, argument| node.node(Some("argument"), self.expression(*argument)),
        )
        .token("closing", self.optional(call.closing)),
      Expression::Command(command) => {
        let node = SyntaxNode::new(NodeKind::Command, span)
          .token("command", self.token(command.name))
          .node(Some("argument"), command.argument.map(|argument| self.expression(argument)));
        self.parameters(node, &command.parameters)
      }
      Expression::Group(group) => SyntaxNode::new(NodeKind::Group, span)
        .token("opening", self.token(group.opening))
        .node(None, self.expression(group.expression))
        .token("closing", self.optional(group.closing)),
      Expression::List(list) => (list.items.iter())
        .fold(
          SyntaxNode::new(NodeKind::List, span).token("opening", self.token(list.opening)),
          |node, item| node.node(None, self.expression(*item)),
        )
        .token("closing", self.optional(list.closing)),
      Expression::Record(record) => (record.entries.iter())
        .fold(
          SyntaxNode::new(NodeKind::Record, span).token("opening", self.token(record.opening)),
          |node, entry| {
            let entry = SyntaxNode::new(NodeKind::RecordEntry, entry.span(self.ast))
              .token("label", self.optional(entry.label))
              .node(Some("value"), self.expression(entry.value));
            node.node(None, entry)
          },
        )
        .token("closing", self.optional(record.closing)),
      Expression::Unary(unary) => SyntaxNode::new(NodeKind::Unary, span)
        .token("operator", self.token(unary.operator))
        .node(Some("operand"), self.expression(unary.operand)),
      Expression::Binary(binary) => {
        let kind = if self.ast[binary.operator].kind == TokenKind::Ampersand {
          NodeKind::Concatenation
        } else {
          NodeKind::Binary
        };

        SyntaxNode::new(kind, span)
          .node(Some("left"), self.expression(binary.left))
          .token("operator", self.token(binary.operator))
          .node(Some("right"), self.expression(binary.right))
      }
      Expression::Coercion(coercion) => {
        let node = SyntaxNode::new(NodeKind::Coercion, span)
          .node(Some("value"), self.expression(coercion.value))
          .token("keyword", self.token(coercion.keyword));
        self.type_specifier(node, coercion.type_.as_ref())
      }
      Expression::Index(index) => SyntaxNode::new(NodeKind::Index, span)
        .token("element", self.token(index.element))
        .node(Some("index"), self.expression(index.index)),
      Expression::Range(range) => SyntaxNode::new(NodeKind::Range, span)
        .token("element", self.token(range.element))
        .node(Some("start"), self.expression(range.start))
        .token("keyword", self.token(range.thru))
        .node(Some("end"), self.expression(range.end)),
      Expression::ObjectSpecifier(specifier) => SyntaxNode::new(NodeKind::ObjectSpecifier, span)
        .token("quantifier", self.token(specifier.quantifier))
        .token("element", self.optional(specifier.class))
        .token("keyword", self.optional(specifier.of))
        .node(Some("container"), specifier.container.map(|container| self.expression(container))),
      Expression::PropertyReference(reference) => {
        let node = SyntaxNode::new(NodeKind::PropertyReference, span);
        let property = self.expression(reference.property);
        let container = self.expression(reference.container);

        if reference.is_possessive(self.ast) {
          self
            .possessive(node.node(Some("container"), container), reference.connector)
            .node(Some("property"), property)
        } else {
          node
            .node(Some("property"), property)
            .token("keyword", self.token(reference.connector))
            .node(Some("container"), container)
        }
      }
      Expression::Reference(reference) => {
        let node = SyntaxNode::new(NodeKind::Reference, span);
        let element = self.expression(reference.element);
        let container = reference.container.map(|container| self.expression(container));

        match (self.ast[reference.connector].kind, container) {
          (TokenKind::Apostrophe, container) => self
            .possessive(node.node(Some("container"), container), reference.connector)
            .node(Some("element"), element),
          (_, None) => node
            .token("keyword", self.token(reference.connector))
            .node(Some("element"), element),
          (_, container) => node
            .node(Some("element"), element)
            .token("keyword", self.token(reference.connector))
            .node(Some("container"), container),
        }
      }
      Expression::Filter(filter) => SyntaxNode::new(NodeKind::Filter, span)
        .node(Some("container"), self.expression(filter.reference))
        .token("keyword", self.token(filter.keyword))
        .node(Some("condition"), self.expression(filter.condition)),
      Expression::Class(class) => {
        SyntaxNode::new(NodeKind::Class, span).token("name", self.token(class.token))
      }
      Expression::Invalid(invalid) => {
        SyntaxNode::new(NodeKind::Invalid, span).token("token", self.token(invalid.token))
      }
    }
  }

  /// The `'s` of a possessive, the apostrophe and the `s` directly after it
  fn possessive(&self, node: SyntaxNode, apostrophe: TokenIdx) -> SyntaxNode {
    let s = TokenIdx::new(apostrophe.get() + 1);
    node.token("keyword", self.token(apostrophe)).token("keyword", self.token(s))
  }
}
