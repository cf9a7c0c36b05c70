//! # Expressions

use crate::{
  ast::{AST, ExpressionIdx, TokenIdx},
  span::Span,
  tokeniser::TokenKind,
};
use std::fmt;
use thin_vec::ThinVec;

/// An expression, which can be evaluated to a value
#[must_use]
#[derive(Debug)]
pub enum Expression {
  /// A literal value, e.g. `1`, `"hello"`, `true`, `missing value`, `me`
  Literal(Literal),
  /// A variable, e.g. `x`, `|a variable|`
  Variable(Variable),
  /// A handler call with positional arguments, e.g. `greet("World", 2)`
  Call(Call),
  /// A command with optional direct argument and parameters, e.g. `display dialog "hi" with title "T"`
  Command(Command),
  /// An expression in parentheses, e.g. `(1 + 2)`
  Group(Group),
  /// A list, e.g. `{1, 2, 3}`
  List(List),
  /// A record, e.g. `{name: "x", age: 3}`
  Record(Record),
  /// A unary expression, e.g. `-x`, `not y`
  Unary(Unary),
  /// A binary expression, e.g. `1 + 2`, `a & b`, `x is greater than y`
  Binary(Binary),
  /// A coercion to another type, e.g. `x as integer`, `y as list of text`
  Coercion(Coercion),
  /// An element by index, e.g. `item 1`, `window "Main"`
  Index(Index),
  /// A range of elements, e.g. `words 2 thru 4`
  Range(Range),
  /// An object specifier with a quantifier, e.g. `every item of x`, `first window`
  ObjectSpecifier(ObjectSpecifier),
  /// A property of an object, e.g. `name of x`, `x's name`
  PropertyReference(PropertyReference),
  /// Any other reference, e.g. `item 1 of x`, `my x`
  Reference(Reference),
  /// A filtered reference, e.g. `every file whose name ends with ".txt"`
  Filter(Filter),
  /// A class name used as a value, e.g. `items`, `text`
  Class(Class),
  /// An invalid expression
  Invalid(Invalid),
}
impl Expression {
  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    match self {
      Self::Literal(literal) => literal.span(ast),
      Self::Variable(variable) => variable.span(ast),
      Self::Call(call) => call.span(ast),
      Self::Command(command) => command.span(ast),
      Self::Group(group) => group.span(ast),
      Self::List(list) => list.span(ast),
      Self::Record(record) => record.span(ast),
      Self::Unary(unary) => unary.span(ast),
      Self::Binary(binary) => binary.span(ast),
      Self::Coercion(coercion) => coercion.span(ast),
      Self::Index(index) => index.span(ast),
      Self::Range(range) => range.span(ast),
      Self::ObjectSpecifier(specifier) => specifier.span(ast),
      Self::PropertyReference(reference) => reference.span(ast),
      Self::Reference(reference) => reference.span(ast),
      Self::Filter(filter) => filter.span(ast),
      Self::Class(class) => class.span(ast),
      Self::Invalid(invalid) => invalid.span(ast),
    }
  }
}

/// A literal value, e.g. `1`, `"hello"`, `true`, `missing value`, `me`
#[derive(Debug)]
pub struct Literal {
  pub(crate) token: TokenIdx,
}
impl Literal {
  /// The source text of the literal
  #[must_use]
  pub fn text<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.token)
  }

  /// The kind of the literal's token
  #[must_use]
  pub fn kind(&self, ast: &AST) -> TokenKind {
    ast[self.token].kind
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.token)
  }
}

/// A variable, e.g. `x`, `|a variable|`
#[derive(Debug, Clone)]
pub struct Variable {
  pub(crate) token: TokenIdx,
}
impl Variable {
  /// The name of the variable
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.token)
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.token)
  }
}

/// A handler call with positional arguments, e.g. `greet("World", 2)`
#[derive(Debug)]
pub struct Call {
  pub(crate) name: TokenIdx,
  pub(crate) arguments: ThinVec<ExpressionIdx>,
  pub(crate) closing: Option<TokenIdx>,
}
impl Call {
  /// The name of the handler called
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.name)
  }

  /// The arguments of the call
  pub fn arguments<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Expression> {
    self.arguments.iter().map(|argument| &ast[*argument])
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let name = ast.token_span(self.name);
    match (self.closing, self.arguments.last()) {
      (Some(closing), _) => name.merge(ast.token_span(closing)),
      (None, Some(argument)) => name.merge(ast[*argument].span(ast)),
      (None, None) => name,
    }
  }
}

/// A command with optional direct argument and parameters, e.g. `display dialog "hi" with title "T"`
#[derive(Debug)]
pub struct Command {
  pub(crate) name: TokenIdx,
  pub(crate) argument: Option<ExpressionIdx>,
  pub(crate) parameters: ThinVec<Parameter>,
}
impl Command {
  /// The name of the command
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.name)
  }

  /// The direct argument, the value directly after the name
  pub fn argument<'a>(&self, ast: &'a AST) -> Option<&'a Expression> {
    self.argument.map(|argument| &ast[argument])
  }

  /// The labeled parameters
  #[must_use]
  pub fn parameters(&self) -> &[Parameter] {
    &self.parameters
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let mut span = ast.token_span(self.name);
    if let Some(argument) = self.argument(ast) {
      span = span.merge(argument.span(ast));
    }
    if let Some(parameter) = self.parameters.last() {
      span = span.merge(parameter.span(ast));
    }
    span
  }
}

/// A parameter, with a label and value, e.g. `with title "T"`, `given x:1`
///
/// A label without a value is a flag, e.g. `with administrator privileges`.
/// A value without a label is positional.
#[derive(Debug)]
pub struct Parameter {
  pub(crate) label: Option<TokenIdx>,
  pub(crate) value: Option<ExpressionIdx>,
}
impl Parameter {
  /// The label of the parameter
  #[must_use]
  pub fn label<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.label.map(|label| ast.get_token_text(label))
  }

  /// The value of the parameter
  pub fn value<'a>(&self, ast: &'a AST) -> Option<&'a Expression> {
    self.value.map(|value| &ast[value])
  }

  /// The location of the parameter
  pub fn span(&self, ast: &AST) -> Span {
    match (self.label, self.value(ast)) {
      (Some(label), Some(value)) => ast.token_span(label).merge(value.span(ast)),
      (Some(label), None) => ast.token_span(label),
      (None, Some(value)) => value.span(ast),
      (None, None) => Span::default(),
    }
  }
}

/// An expression in parentheses, e.g. `(1 + 2)`
#[derive(Debug)]
pub struct Group {
  pub(crate) opening: TokenIdx,
  pub(crate) expression: ExpressionIdx,
  pub(crate) closing: Option<TokenIdx>,
}
impl Group {
  /// The expression inside the parentheses
  pub fn expression<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.expression]
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let end = (self.closing)
      .map_or_else(|| self.expression(ast).span(ast), |closing| ast.token_span(closing));
    ast.token_span(self.opening).merge(end)
  }
}

/// A list, e.g. `{1, 2, 3}`
#[derive(Debug)]
pub struct List {
  pub(crate) opening: TokenIdx,
  pub(crate) items: ThinVec<ExpressionIdx>,
  pub(crate) closing: Option<TokenIdx>,
}
impl List {
  /// The items of the list
  pub fn items<'a>(&'a self, ast: &'a AST) -> impl Iterator<Item = &'a Expression> {
    self.items.iter().map(|item| &ast[*item])
  }

  /// How many items are in the list
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Is the list empty?
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let opening = ast.token_span(self.opening);
    match (self.closing, self.items.last()) {
      (Some(closing), _) => opening.merge(ast.token_span(closing)),
      (None, Some(item)) => opening.merge(ast[*item].span(ast)),
      (None, None) => opening,
    }
  }
}

/// A record, e.g. `{name: "x", age: 3}`
#[derive(Debug)]
pub struct Record {
  pub(crate) opening: TokenIdx,
  pub(crate) entries: ThinVec<RecordEntry>,
  pub(crate) closing: Option<TokenIdx>,
}
impl Record {
  /// The entries of the record
  #[must_use]
  pub fn entries(&self) -> &[RecordEntry] {
    &self.entries
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let opening = ast.token_span(self.opening);
    match (self.closing, self.entries.last()) {
      (Some(closing), _) => opening.merge(ast.token_span(closing)),
      (None, Some(entry)) => opening.merge(entry.span(ast)),
      (None, None) => opening,
    }
  }
}

/// An entry of a record, e.g. `name: "x"`
#[derive(Debug)]
pub struct RecordEntry {
  pub(crate) label: Option<TokenIdx>,
  pub(crate) value: ExpressionIdx,
}
impl RecordEntry {
  /// The label of the entry, missing if the entry is invalid
  #[must_use]
  pub fn label<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.label.map(|label| ast.get_token_text(label))
  }

  /// The value of the entry
  pub fn value<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.value]
  }

  /// The location of the entry
  pub fn span(&self, ast: &AST) -> Span {
    let value = self.value(ast).span(ast);
    self.label.map_or(value, |label| ast.token_span(label).merge(value))
  }
}

/// A unary expression, e.g. `-x`, `not y`
#[derive(Debug)]
pub struct Unary {
  pub(crate) operator: TokenIdx,
  pub(crate) operand: ExpressionIdx,
}
impl Unary {
  /// The operand of the expression
  pub fn operand<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.operand]
  }

  /// The operator of the expression
  pub fn operator(&self, ast: &AST) -> UnaryOperator {
    match ast[self.operator].kind {
      TokenKind::Minus => UnaryOperator::Minus,
      _ => UnaryOperator::Not,
    }
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.operator).merge(self.operand(ast).span(ast))
  }
}

/// A binary expression, e.g. `1 + 2`, `a & b`, `x is greater than y`
#[derive(Debug)]
pub struct Binary {
  pub(crate) left: ExpressionIdx,
  pub(crate) operator: TokenIdx,
  pub(crate) right: ExpressionIdx,
}
impl Binary {
  /// The left hand side of the operation
  pub fn left<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.left]
  }
  /// The right hand side of the operation
  pub fn right<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.right]
  }

  /// The operator of the operation
  pub fn operator(&self, ast: &AST) -> BinaryOperator {
    BinaryOperator::from(ast[self.operator].kind)
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    self.left(ast).span(ast).merge(self.right(ast).span(ast))
  }
}

/// A coercion to another type, e.g. `x as integer`, `y as list of text`
#[derive(Debug)]
pub struct Coercion {
  pub(crate) value: ExpressionIdx,
  pub(crate) keyword: TokenIdx,
  pub(crate) type_: Option<TypeSpecifier>,
}
impl Coercion {
  /// The value being coerced
  pub fn value<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.value]
  }

  /// The source text of the type, with words separated by single spaces
  #[must_use]
  pub fn type_name(&self, ast: &AST) -> Option<String> {
    self.type_.as_ref().map(|type_| type_.text(ast))
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let end = self.type_.as_ref().map_or(ast.token_span(self.keyword), |type_| type_.span(ast));
    self.value(ast).span(ast).merge(end)
  }
}

/// The type in a coercion, a run of tokens, e.g. `list of integer`
#[derive(Debug)]
pub struct TypeSpecifier {
  pub(crate) start: TokenIdx,
  pub(crate) end: TokenIdx,
}
impl TypeSpecifier {
  /// The tokens of the specifier
  pub(crate) fn tokens(&self) -> impl Iterator<Item = TokenIdx> {
    self.start.range(self.end)
  }

  /// The text of each token, joined with single spaces
  #[must_use]
  pub fn text(&self, ast: &AST) -> String {
    (self.tokens())
      .filter(|token| ast[*token].kind != TokenKind::Comment)
      .map(|token| ast.get_token_text(token))
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// The location of the specifier
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.start).merge(ast.token_span(self.end))
  }
}

/// An element by index, e.g. `item 1`, `window "Main"`
#[derive(Debug)]
pub struct Index {
  pub(crate) element: TokenIdx,
  pub(crate) index: ExpressionIdx,
}
impl Index {
  /// The type of the element
  #[must_use]
  pub fn element<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.element)
  }

  /// The index or name of the element
  pub fn index<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.index]
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.element).merge(self.index(ast).span(ast))
  }
}

/// A range of elements, e.g. `words 2 thru 4`
#[derive(Debug)]
pub struct Range {
  pub(crate) element: TokenIdx,
  pub(crate) start: ExpressionIdx,
  pub(crate) thru: TokenIdx,
  pub(crate) end: ExpressionIdx,
}
impl Range {
  /// The type of the elements
  #[must_use]
  pub fn element<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.element)
  }

  /// The first element of the range
  pub fn start<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.start]
  }

  /// The last element of the range
  pub fn end<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.end]
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.element).merge(self.end(ast).span(ast))
  }
}

/// An object specifier with a quantifier, e.g. `every item of x`, `first window`
#[derive(Debug)]
pub struct ObjectSpecifier {
  pub(crate) quantifier: TokenIdx,
  pub(crate) class: Option<TokenIdx>,
  pub(crate) of: Option<TokenIdx>,
  pub(crate) container: Option<ExpressionIdx>,
}
impl ObjectSpecifier {
  /// The quantifier, e.g. `every`, `first`, `some`
  #[must_use]
  pub fn quantifier<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.quantifier)
  }

  /// The class of the elements
  #[must_use]
  pub fn class<'a>(&self, ast: &'a AST) -> Option<&'a str> {
    self.class.map(|class| ast.get_token_text(class))
  }

  /// The object containing the elements
  pub fn container<'a>(&self, ast: &'a AST) -> Option<&'a Expression> {
    self.container.map(|container| &ast[container])
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let mut span = ast.token_span(self.quantifier);
    if let Some(class) = self.class {
      span = span.merge(ast.token_span(class));
    }
    if let Some(container) = self.container(ast) {
      span = span.merge(container.span(ast));
    }
    span
  }
}

/// A property of an object, e.g. `name of x`, `x's name`
#[derive(Debug)]
pub struct PropertyReference {
  pub(crate) property: ExpressionIdx,
  pub(crate) connector: TokenIdx,
  pub(crate) container: ExpressionIdx,
}
impl PropertyReference {
  /// The property being accessed
  pub fn property<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.property]
  }

  /// The object the property belongs to
  pub fn container<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.container]
  }

  /// Is the reference written with a possessive, `x's name`?
  #[must_use]
  pub fn is_possessive(&self, ast: &AST) -> bool {
    ast[self.connector].kind == TokenKind::Apostrophe
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    self.property(ast).span(ast).merge(self.container(ast).span(ast))
  }
}

/// Any other reference, e.g. `item 1 of x`, `my x`
#[derive(Debug)]
pub struct Reference {
  pub(crate) element: ExpressionIdx,
  pub(crate) connector: TokenIdx,
  pub(crate) container: Option<ExpressionIdx>,
}
impl Reference {
  /// The element being referenced
  pub fn element<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.element]
  }

  /// The object containing the element, missing for `my x` and `its x`
  pub fn container<'a>(&self, ast: &'a AST) -> Option<&'a Expression> {
    self.container.map(|container| &ast[container])
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    let span = ast.token_span(self.connector).merge(self.element(ast).span(ast));
    self.container(ast).map_or(span, |container| span.merge(container.span(ast)))
  }
}

/// A filtered reference, e.g. `every file whose name ends with ".txt"`
#[derive(Debug)]
pub struct Filter {
  pub(crate) reference: ExpressionIdx,
  pub(crate) keyword: TokenIdx,
  pub(crate) condition: ExpressionIdx,
}
impl Filter {
  /// The reference being filtered
  pub fn reference<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.reference]
  }

  /// The condition elements must match
  pub fn condition<'a>(&self, ast: &'a AST) -> &'a Expression {
    &ast[self.condition]
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    self.reference(ast).span(ast).merge(self.condition(ast).span(ast))
  }
}

/// A class name used as a value, e.g. `items`, `text`
#[derive(Debug)]
pub struct Class {
  pub(crate) token: TokenIdx,
}
impl Class {
  /// The name of the class
  #[must_use]
  pub fn name<'a>(&self, ast: &'a AST) -> &'a str {
    ast.get_token_text(self.token)
  }

  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.token)
  }
}

/// An invalid expression
#[derive(Debug)]
pub struct Invalid {
  pub(crate) token: TokenIdx,
}
impl Invalid {
  /// The location of the expression
  pub fn span(&self, ast: &AST) -> Span {
    ast.token_span(self.token)
  }
}

/// Operators with two operands
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
  /// `+`
  Add,
  /// `-`
  Subtract,
  /// `*`
  Multiply,
  /// `/` or `÷`
  Divide,
  /// `div`
  IntegerDivide,
  /// `mod`
  Modulo,
  /// `^`
  Power,
  /// `&`
  Concatenate,
  /// `and`
  And,
  /// `or`
  Or,
  /// `=`
  Equal,
  /// `≠`
  NotEqual,
  /// `<`
  Less,
  /// `>`
  Greater,
  /// `≤`
  LessEqual,
  /// `≥`
  GreaterEqual,
  /// `contains`
  Contains,
  /// `does not contain`
  DoesNotContain,
  /// `is in`
  IsIn,
  /// `is not in`
  IsNotIn,
  /// `starts with`
  StartsWith,
  /// `ends with`
  EndsWith,
}
impl BinaryOperator {
  /// Is the operator a comparison, producing a boolean?
  #[must_use]
  pub fn is_comparison(self) -> bool {
    !matches!(
      self,
      Self::Add
        | Self::Subtract
        | Self::Multiply
        | Self::Divide
        | Self::IntegerDivide
        | Self::Modulo
        | Self::Power
        | Self::Concatenate
        | Self::And
        | Self::Or
    )
  }
}
impl From<TokenKind> for BinaryOperator {
  fn from(kind: TokenKind) -> Self {
    match kind {
      TokenKind::Plus => Self::Add,
      TokenKind::Minus => Self::Subtract,
      TokenKind::Multiply => Self::Multiply,
      TokenKind::Divide => Self::Divide,
      TokenKind::Div => Self::IntegerDivide,
      TokenKind::Mod => Self::Modulo,
      TokenKind::Caret => Self::Power,
      TokenKind::And => Self::And,
      TokenKind::Or => Self::Or,
      TokenKind::Equal => Self::Equal,
      TokenKind::NotEqual => Self::NotEqual,
      TokenKind::Less => Self::Less,
      TokenKind::Greater => Self::Greater,
      TokenKind::LessEqual => Self::LessEqual,
      TokenKind::GreaterEqual => Self::GreaterEqual,
      TokenKind::Contains => Self::Contains,
      TokenKind::DoesNotContain => Self::DoesNotContain,
      TokenKind::IsIn => Self::IsIn,
      TokenKind::IsNotIn => Self::IsNotIn,
      TokenKind::StartsWith => Self::StartsWith,
      TokenKind::EndsWith => Self::EndsWith,
      _ => Self::Concatenate,
    }
  }
}
impl fmt::Display for BinaryOperator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let operator = match self {
      Self::Add => "+",
      Self::Subtract => "-",
      Self::Multiply => "*",
      Self::Divide => "/",
      Self::IntegerDivide => "div",
      Self::Modulo => "mod",
      Self::Power => "^",
      Self::Concatenate => "&",
      Self::And => "and",
      Self::Or => "or",
      Self::Equal => "=",
      Self::NotEqual => "≠",
      Self::Less => "<",
      Self::Greater => ">",
      Self::LessEqual => "≤",
      Self::GreaterEqual => "≥",
      Self::Contains => "contains",
      Self::DoesNotContain => "does not contain",
      Self::IsIn => "is in",
      Self::IsNotIn => "is not in",
      Self::StartsWith => "starts with",
      Self::EndsWith => "ends with",
    };

    write!(f, "{operator}")
  }
}

/// Operators with a single operand
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
  /// `-`
  Minus,
  /// `not` or `¬`
  Not,
}
impl fmt::Display for UnaryOperator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Minus => write!(f, "-"),
      Self::Not => write!(f, "not"),
    }
  }
}

macro_rules! impl_from_expression {
  ($($variant:ident),* $(,)?) => {
    $(
      impl From<$variant> for Expression {
        fn from(expression: $variant) -> Self {
          Self::$variant(expression)
        }
      }
    )*
  };
}
impl_from_expression!(
  Literal,
  Variable,
  Call,
  Command,
  Group,
  List,
  Record,
  Unary,
  Binary,
  Coercion,
  Index,
  Range,
  ObjectSpecifier,
  PropertyReference,
  Reference,
  Filter,
  Class,
  Invalid,
);
