use crate::{
  FoldingKind, FoldingRange, ParseError, TokenKind,
  ast::{AST, NodeKind, PrintConfig},
  folding_ranges,
};
use indoc::indoc;

fn parse(source: &str) -> AST {
  crate::parse(source.to_owned())
}
impl AST {
  fn is_ok(&self) -> bool {
    self.errors.is_empty()
  }

  fn is_err(&self) -> bool {
    !self.is_ok()
  }
}

fn parse_to_string(source: &str) -> String {
  crate::parse(source.to_owned()).to_string()
}

#[test]
fn space_at_end() {
  assert!(parse("22 + 44 ").is_ok());
  assert!(parse("22 + 44    ").is_ok());
  assert!(parse("22 + 44  \t  ").is_ok());
  assert!(parse("22 + 44\n\n\n").is_ok());
  assert!(parse("set x to 5\r\n\r\n").is_ok());
}

#[test]
fn empty_string() {
  assert!(parse("\n\n\n").is_ok());
  assert!(parse("    ").is_ok());
  assert!(parse("").is_ok());
  assert!(parse("  \n    \n   \n ").is_ok());
  assert!(parse("-- just a comment\n(* and another *)").is_ok());
}

#[test]
fn unterminated_string() {
  // the tokeniser is total, an unterminated string is still a string
  assert!(parse("\"abc").is_ok());
  assert!(parse("set x to \"abc").is_ok());

  let ast = parse_to_string("log \"abc");
  let expected = indoc! {"
    ├─ Log
    │  ╰─ Literal (\"abc)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn unknown_character() {
  assert!(parse("3 $ 4").is_err());
  assert!(parse("🤗").is_err());
  assert!(parse("@").is_err());
  assert!(parse("|unclosed").is_err());

  // Having unknown characters in strings are fine
  assert!(parse("\"$\"").is_ok());
  assert!(parse("\"🤗\"").is_ok());
  assert!(parse("|a 🤗 name|").is_ok());
}

#[test]
fn binary() {
  let ast = parse_to_string("4 + 23");
  let expected = indoc! {"
    ├─ Binary (+)
    │  ├─ Literal (4)
    │  ╰─ Literal (23)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("\"hello \" & \"world\"");
  let expected = indoc! {"
    ├─ Concatenation (&)
    │  ├─ Literal (\"hello \")
    │  ╰─ Literal (\"world\")
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("x is greater than 5");
  let expected = indoc! {"
    ├─ Binary (is greater than)
    │  ├─ Variable (x)
    │  ╰─ Literal (5)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("10 div 3 mod 2");
  let expected = indoc! {"
    ├─ Binary (mod)
    │  ├─ Binary (div)
    │  │  ├─ Literal (10)
    │  │  ╰─ Literal (3)
    │  ╰─ Literal (2)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn binary_precedence() {
  let ast = parse_to_string("1 + 2 * 3");
  let expected = indoc! {"
    ├─ Binary (+)
    │  ├─ Literal (1)
    │  ╰─ Binary (*)
    │     ├─ Literal (2)
    │     ╰─ Literal (3)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("(1 + 2) * 3");
  let expected = indoc! {"
    ├─ Binary (*)
    │  ├─ Group
    │  │  ╰─ Binary (+)
    │  │     ├─ Literal (1)
    │  │     ╰─ Literal (2)
    │  ╰─ Literal (3)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("x = 1 + 2");
  let expected = indoc! {"
    ├─ Binary (=)
    │  ├─ Variable (x)
    │  ╰─ Binary (+)
    │     ├─ Literal (1)
    │     ╰─ Literal (2)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn exponent_is_right_associative() {
  let ast = parse_to_string("2 ^ 3 ^ 2");
  let expected = indoc! {"
    ├─ Binary (^)
    │  ├─ Literal (2)
    │  ╰─ Binary (^)
    │     ├─ Literal (3)
    │     ╰─ Literal (2)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn subtraction_and_negative_numbers() {
  let ast = parse_to_string("x - 1");
  let expected = indoc! {"
    ├─ Binary (-)
    │  ├─ Variable (x)
    │  ╰─ Literal (1)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("set x to -1");
  let expected = indoc! {"
    ├─ Set
    │  ├─ Variable (x)
    │  ╰─ Literal (-1)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("-x");
  let expected = indoc! {"
    ├─ Unary (-)
    │  ╰─ Variable (x)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("not a or b");
  let expected = indoc! {"
    ├─ Binary (or)
    │  ├─ Unary (not)
    │  │  ╰─ Variable (a)
    │  ╰─ Variable (b)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn list_and_record() {
  let ast = parse_to_string("{1, 2, 3}");
  let expected = indoc! {"
    ├─ List
    │  ├─ Literal (1)
    │  ├─ Literal (2)
    │  ╰─ Literal (3)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("{a:1, b:2}");
  let expected = indoc! {"
    ├─ Record
    │  ├─ RecordEntry (a)
    │  │  ╰─ Literal (1)
    │  ╰─ RecordEntry (b)
    │     ╰─ Literal (2)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("{}");
  let expected = indoc! {"
    ├─ List
  "};
  assert_eq!(ast, expected);

  assert!(parse("{name: \"x\", age: 3}").is_ok());
  assert!(parse("{{1, 2}, {3}}").is_ok());
  assert!(parse("{1, 2").is_err());
}

#[test]
fn record_entries_need_labels() {
  let ast = parse("{a:1, 2}");
  assert!(matches!(ast.errors[..], [ParseError::MissingRecordLabel(_)]));

  let expected = indoc! {"
    ├─ Record
    │  ├─ RecordEntry (a)
    │  │  ╰─ Literal (1)
    │  ├─ Invalid
    │  ╰─ RecordEntry
    │     ╰─ Literal (2)
  "};
  assert_eq!(ast.to_string(), expected);
}

#[test]
fn missing_comma() {
  let ast = parse("{1 2}");
  assert!(matches!(ast.errors[..], [ParseError::MissingComma(_)]));
  assert_eq!(ast.root().nodes().next().map(|node| node.nodes().count()), Some(3));
}

#[test]
fn set_and_copy() {
  let ast = parse_to_string("set x to 5 + 3");
  let expected = indoc! {"
    ├─ Set
    │  ├─ Variable (x)
    │  ╰─ Binary (+)
    │     ├─ Literal (5)
    │     ╰─ Literal (3)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("copy the x to y");
  let expected = indoc! {"
    ├─ Copy
    │  ├─ Variable (x)
    │  ╰─ Variable (y)
  "};
  assert_eq!(ast, expected);

  assert!(parse("set x 5").is_err());
  assert!(parse("set to 5").is_err());
}

#[test]
fn one_line_if() {
  let ast = parse_to_string("if x then return y");
  let expected = indoc! {"
    ├─ OneLineIf
    │  ├─ Variable (x)
    │  ╰─ Return
    │     ╰─ Variable (y)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn if_blocks() {
  let source = indoc! {"
    if x > 1 then
      log \"big\"
    else if x < 0 then
      log \"negative\"
    else
      log \"small\"
    end if
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ If
    │  ├─ Binary (>)
    │  │  ├─ Variable (x)
    │  │  ╰─ Literal (1)
    │  ├─ Log
    │  │  ╰─ Literal (\"big\")
    │  ├─ ElseIf
    │  │  ├─ Binary (<)
    │  │  │  ├─ Variable (x)
    │  │  │  ╰─ Literal (0)
    │  │  ╰─ Log
    │  │     ╰─ Literal (\"negative\")
    │  ├─ Else
    │  │  ╰─ Log
    │  │     ╰─ Literal (\"small\")
    │  ╰─ End (if)
  "};
  assert_eq!(ast, expected);

  assert!(parse("if x then\nend").is_ok());
  assert!(parse("if x\nend if").is_err());
}

#[test]
fn tell() {
  let ast = parse_to_string("tell application \"Finder\" to activate");
  let expected = indoc! {"
    ├─ OneLineTell
    │  ├─ Index (application)
    │  │  ╰─ Literal (\"Finder\")
    │  ╰─ Command (activate)
  "};
  assert_eq!(ast, expected);

  let source = indoc! {"
    tell app \"Finder\"
      quit
    end tell
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ Tell
    │  ├─ Index (app)
    │  │  ╰─ Literal (\"Finder\")
    │  ├─ Command (quit)
    │  ╰─ End (tell)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn end_names_are_not_checked() {
  assert!(parse("tell me\nend repeat").is_ok());
  assert!(parse("repeat\nend").is_ok());
  assert!(parse("on run\nend something").is_ok());
}

#[test]
fn missing_end() {
  let ast = parse("tell me\n  beep");
  assert!(matches!(ast.errors[..], [ParseError::MissingEnd { .. }]));
  assert_eq!(ast.errors[0].title(), "Missing End");

  let expected = indoc! {"
    ├─ Tell
    │  ├─ Literal (me)
    │  ├─ Command (beep)
    │  ╰─ Invalid
  "};
  assert_eq!(ast.to_string(), expected);
}

#[test]
fn missing_tokens_leave_invalid_nodes() {
  let sources = [
    "(1 + 2",
    "{a:1, 2}",
    "{1 2}",
    "if x then\n  1",
    "set x 5",
    "{1, 2",
    "f(1",
    "repeat with i 1 to 3\nend",
  ];

  for source in sources {
    let ast = parse(source);
    assert!(ast.is_err(), "{source:?}");
    assert!(ast.root().descendants().any(|node| node.kind.is_invalid()), "{source:?}");
  }

  let ast = parse("set x 5");
  let root = ast.root();
  let set = root.nodes().next().unwrap();
  let missing = set.field("missing").and_then(|element| element.as_node()).unwrap();
  assert_eq!(missing.kind, NodeKind::Invalid);
  assert_eq!(missing.span, crate::Span::new(5, 5));

  // the missing closing bracket is at the end of the group
  let ast = parse("(1 + 2");
  let root = ast.root();
  let group = root.nodes().next().unwrap();
  let last = group.children.last().unwrap();
  assert_eq!(last.field, Some("missing"));
  assert_eq!(last.element.span(), crate::Span::new(6, 6));
}

#[test]
fn unexpected_end() {
  let ast = parse("end tell\nbeep");
  assert!(matches!(ast.errors[..], [ParseError::UnexpectedEnd(_)]));

  let expected = indoc! {"
    ├─ InvalidStatement (end tell)
    ├─ Command (beep)
  "};
  assert_eq!(ast.to_string(), expected);
}

#[test]
fn handler() {
  let source = indoc! {"
    on greet(name)
      display dialog \"Hello \" & name
    end greet
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ Handler (greet)
    │  ├─ Parameter
    │  │  ╰─ Variable (name)
    │  ├─ Command (display dialog)
    │  │  ╰─ Concatenation (&)
    │  │     ├─ Literal (\"Hello \")
    │  │     ╰─ Variable (name)
    │  ╰─ End (greet)
  "};
  assert_eq!(ast, expected);

  let source = indoc! {"
    to moveItem from source to destination given overwrite:flag
      return
    end moveItem
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ Handler (moveItem)
    │  ├─ Parameter (from)
    │  │  ╰─ Variable (source)
    │  ├─ Parameter (to)
    │  │  ╰─ Variable (destination)
    │  ├─ Parameter (overwrite)
    │  │  ╰─ Variable (flag)
    │  ├─ Return
    │  ╰─ End (moveItem)
  "};
  assert_eq!(ast, expected);

  assert!(parse("on run argv\nend run").is_ok());
  assert!(parse("on open of theFiles\nend open").is_ok());
  assert!(parse("on\nend").is_err());
}

#[test]
fn handler_call() {
  let ast = parse_to_string("greet(\"World\", 2)");
  let expected = indoc! {"
    ├─ Call (greet)
    │  ├─ Literal (\"World\")
    │  ╰─ Literal (2)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("my reset()");
  let expected = indoc! {"
    ├─ Reference
    │  ╰─ Call (reset)
  "};
  assert_eq!(ast, expected);

  assert!(parse("greet(1, 2").is_err());
}

#[test]
fn command_parameters() {
  let ast = parse_to_string("display dialog \"Hi\" with title \"T\" default answer \"\"");
  let expected = indoc! {"
    ├─ Command (display dialog)
    │  ├─ Literal (\"Hi\")
    │  ├─ Parameter (with title)
    │  │  ╰─ Literal (\"T\")
    │  ╰─ Parameter (default answer)
    │     ╰─ Literal (\"\")
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("do shell script \"ls\" with administrator privileges");
  let expected = indoc! {"
    ├─ Command (do shell script)
    │  ├─ Literal (\"ls\")
    │  ╰─ Parameter (with administrator privileges)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("count of items");
  let expected = indoc! {"
    ├─ Command (count)
    │  ╰─ Class (items)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn repeat_forms() {
  let source = indoc! {"
    repeat with i from 1 to 10 by 2
      log i
    end repeat
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ RepeatWith (i)
    │  ├─ Literal (1)
    │  ├─ Literal (10)
    │  ├─ Literal (2)
    │  ├─ Log
    │  │  ╰─ Variable (i)
    │  ╰─ End (repeat)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("repeat with x in {1, 2}\nend repeat");
  let expected = indoc! {"
    ├─ RepeatIn (x)
    │  ├─ List
    │  │  ├─ Literal (1)
    │  │  ╰─ Literal (2)
    │  ╰─ End (repeat)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("repeat 3 times\nbeep\nend repeat");
  let expected = indoc! {"
    ├─ RepeatTimes
    │  ├─ Literal (3)
    │  ├─ Command (beep)
    │  ╰─ End (repeat)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("repeat until done\nend");
  let expected = indoc! {"
    ├─ RepeatUntil
    │  ├─ Variable (done)
    │  ╰─ End
  "};
  assert_eq!(ast, expected);

  assert!(parse("repeat while x < 5\nset x to x + 1\nend repeat").is_ok());
  assert!(parse("repeat\nexit repeat\nend repeat").is_ok());
  assert!(parse("repeat forever\nend").is_ok());
  assert!(parse("repeat 3\nend repeat").is_err());
  assert!(parse("repeat with i 1 to 2\nend repeat").is_err());
}

#[test]
fn try_blocks() {
  let source = indoc! {"
    try
      error \"boom\" number 42
    on error msg number n
      log msg
    end try
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ Try
    │  ├─ Error
    │  │  ├─ Literal (\"boom\")
    │  │  ╰─ Parameter (number)
    │  │     ╰─ Literal (42)
    │  ├─ ErrorHandler (msg n)
    │  │  ╰─ Log
    │  │     ╰─ Variable (msg)
    │  ╰─ End (try)
  "};
  assert_eq!(ast, expected);

  assert!(parse("try\nbeep\nend try").is_ok());
  assert!(parse("try\non error number n\nend try").is_ok());
  assert!(parse("try\non error\nend").is_ok());
}

#[test]
fn considering_and_ignoring() {
  let ast = parse_to_string("ignoring case but considering hyphens\nend ignoring");
  let expected = indoc! {"
    ├─ Ignoring (case hyphens)
    │  ╰─ End (ignoring)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("considering case, white space and punctuation\nend considering");
  let expected = indoc! {"
    ├─ Considering (case white space punctuation)
    │  ╰─ End (considering)
  "};
  assert_eq!(ast, expected);

  assert!(parse("considering\nend considering").is_err());
}

#[test]
fn timeout_and_using_terms() {
  let ast = parse_to_string("with timeout of 10 seconds\nbeep\nend timeout");
  let expected = indoc! {"
    ├─ Timeout
    │  ├─ Literal (10)
    │  ├─ Command (beep)
    │  ╰─ End (timeout)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("using terms from application \"Mail\"\nend using terms from");
  let expected = indoc! {"
    ├─ UsingTerms
    │  ├─ Index (application)
    │  │  ╰─ Literal (\"Mail\")
    │  ╰─ End (using terms from)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn use_statements() {
  let source = indoc! {"
    use AppleScript version \"2.4\"
    use scripting additions
    use framework \"Foundation\"
    use F : application \"Finder\"
    use script \"Library\"
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ Use
    │  ├─ Literal (AppleScript)
    │  ╰─ Literal (\"2.4\")
    ├─ Use
    │  ╰─ Literal (scripting additions)
    ├─ Use
    │  ╰─ Index (framework)
    │     ╰─ Literal (\"Foundation\")
    ├─ Use (F)
    │  ╰─ Index (application)
    │     ╰─ Literal (\"Finder\")
    ├─ Use
    │  ╰─ Index (script)
    │     ╰─ Literal (\"Library\")
  "};
  assert_eq!(ast, expected);
}

#[test]
fn declarations() {
  let source = indoc! {"
    property counter : 0
    global a, b
    local c
  "};
  let ast = parse_to_string(source);
  let expected = indoc! {"
    ├─ Property (counter)
    │  ╰─ Literal (0)
    ├─ Global (a b)
    ├─ Local (c)
  "};
  assert_eq!(ast, expected);

  assert!(parse("prop x : 1").is_ok());
  assert!(parse("property x 1").is_err());
}

#[test]
fn other_statements() {
  assert!(parse("return").is_ok());
  assert!(parse("return x + 1").is_ok());
  assert!(parse("exit repeat").is_ok());
  assert!(parse("continue quit").is_ok());
  assert!(parse("log \"message\"").is_ok());
  assert!(parse("error").is_ok());
  assert!(parse("error number -128").is_ok());
}

#[test]
fn script_objects() {
  let source = indoc! {"
    script Counter
      property counter : 0
      on increment()
        set counter to counter + 1
      end increment
    end script
  "};
  let ast = parse(source);
  assert!(ast.is_ok());

  let root = ast.root();
  let script = root.nodes().next().unwrap();
  assert_eq!(script.kind, NodeKind::Script);
  assert_eq!(
    script.nodes().map(|node| node.kind).collect::<Vec<_>>(),
    [NodeKind::Property, NodeKind::Handler, NodeKind::End]
  );
}

#[test]
fn references() {
  let ast = parse_to_string("name of window 1 of application \"Finder\"");
  let expected = indoc! {"
    ├─ PropertyReference
    │  ├─ Variable (name)
    │  ╰─ Reference
    │     ├─ Index (window)
    │     │  ╰─ Literal (1)
    │     ╰─ Index (application)
    │        ╰─ Literal (\"Finder\")
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("x's name");
  let expected = indoc! {"
    ├─ PropertyReference
    │  ├─ Variable (x)
    │  ╰─ Variable (name)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("AppleScript's text item delimiters");
  let expected = indoc! {"
    ├─ PropertyReference
    │  ├─ Literal (AppleScript)
    │  ╰─ Variable (text item delimiters)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("words 2 thru 4 of s");
  let expected = indoc! {"
    ├─ Reference
    │  ├─ Range (words)
    │  │  ├─ Literal (2)
    │  │  ╰─ Literal (4)
    │  ╰─ Variable (s)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn object_specifiers() {
  let ast = parse_to_string("every file of folder \"Docs\" whose name ends with \".txt\"");
  let expected = indoc! {"
    ├─ Filter
    │  ├─ ObjectSpecifier (every file)
    │  │  ╰─ Index (folder)
    │  │     ╰─ Literal (\"Docs\")
    │  ╰─ Binary (ends with)
    │     ├─ Variable (name)
    │     ╰─ Literal (\".txt\")
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("first item of myList");
  let expected = indoc! {"
    ├─ ObjectSpecifier (first item)
    │  ╰─ Variable (myList)
  "};
  assert_eq!(ast, expected);

  assert!(parse("every").is_err());
  assert!(parse("set x to every").is_err());
}

#[test]
fn coercion() {
  let ast = parse_to_string("x as list of integer");
  let expected = indoc! {"
    ├─ Coercion (list of integer)
    │  ╰─ Variable (x)
  "};
  assert_eq!(ast, expected);

  let ast = parse_to_string("\"/tmp\" as POSIX file");
  let expected = indoc! {"
    ├─ Coercion (POSIX file)
    │  ╰─ Literal (\"/tmp\")
  "};
  assert_eq!(ast, expected);

  assert!(matches!(parse("x as").errors[..], [ParseError::ExpectedTypeSpecifier(_)]));
}

#[test]
fn keywords_ignore_case() {
  assert_eq!(parse_to_string("SET x TO 5"), parse_to_string("set x to 5"));

  let ast = parse_to_string("Tell Application \"Finder\" TO Activate");
  let expected = indoc! {"
    ├─ OneLineTell
    │  ├─ Index (Application)
    │  │  ╰─ Literal (\"Finder\")
    │  ╰─ Command (Activate)
  "};
  assert_eq!(ast, expected);
}

#[test]
fn keyword_prefixes_are_identifiers() {
  let ast = parse_to_string("ontology");
  let expected = indoc! {"
    ├─ Variable (ontology)
  "};
  assert_eq!(ast, expected);

  assert!(parse("set settings to tellme").is_ok());
}

#[test]
fn comments() {
  let source = indoc! {"
    -- a comment
    set x to 5 -- trailing
    (* block (* nested *) still *)
    #!/usr/bin/osascript
    log x
  "};
  let ast = parse(source);
  assert!(ast.is_ok());
  assert_eq!(ast.root_statements.len(), 2);

  // a comment in the middle of a statement doesn't end it
  assert!(parse("set x to (* value *) 5").is_ok());
}

#[test]
fn line_continuation() {
  let ast = parse_to_string("set x to 1 + ¬\n  2");
  let expected = indoc! {"
    ├─ Set
    │  ├─ Variable (x)
    │  ╰─ Binary (+)
    │     ├─ Literal (1)
    │     ╰─ Literal (2)
  "};
  assert_eq!(ast, expected);

  assert!(parse("set x to 1 +\n 2").is_err());
}

#[test]
fn classic_line_endings() {
  let ast = parse_to_string("tell me\r  beep\rend tell\r");
  let expected = indoc! {"
    ├─ Tell
    │  ├─ Literal (me)
    │  ├─ Command (beep)
    │  ╰─ End (tell)
  "};
  assert_eq!(ast, expected);

  assert!(parse("set x to 1 + ¬\r  2").is_ok());
  assert!(parse("set x to 1\rset y to 2").is_ok());
}

#[test]
fn unicode_operators() {
  let ast = parse_to_string("a ≠ b");
  let expected = indoc! {"
    ├─ Binary (≠)
    │  ├─ Variable (a)
    │  ╰─ Variable (b)
  "};
  assert_eq!(ast, expected);

  let root = parse("a /= b").root();
  let (field, token) = root.nodes().next().unwrap().tokens().next().unwrap();
  assert_eq!(field, Some("operator"));
  assert_eq!(token.kind, TokenKind::NotEqual);

  assert!(parse("if ¬ done then beep").is_ok());
  assert!(parse("x ≤ 1 and y ≥ 2").is_ok());
}

#[test]
fn errors_keep_going() {
  let ast = parse("log 1 2\nbeep");
  assert!(matches!(ast.errors[..], [ParseError::ExpectedEndOfLine(_)]));

  let expected = indoc! {"
    ├─ Log
    │  ╰─ Literal (1)
    ├─ InvalidStatement (2)
    ├─ Command (beep)
  "};
  assert_eq!(ast.to_string(), expected);

  let ast = parse("set x to\nbeep");
  assert!(matches!(ast.errors[..], [ParseError::ExpectedExpression(_)]));
  assert_eq!(ast.errors[0].message(), "expected expression but got end of line");

  let expected = indoc! {"
    ├─ Set
    │  ├─ Variable (x)
    │  ╰─ Invalid (to)
    ├─ Command (beep)
  "};
  assert_eq!(ast.to_string(), expected);
}

#[test]
fn deep_nesting() {
  let source = format!("set x to {}1{}", "(".repeat(100), ")".repeat(100));
  assert!(parse(&source).is_ok());

  let source = format!("set x to {}", "(".repeat(50_000));
  let ast = parse(&source);
  assert!(ast.errors.iter().any(|error| matches!(error, ParseError::NestedTooDeeply(_))));
  assert!(ast.root().descendants().any(|node| node.kind.is_invalid()));

  let source = format!("{}{}", "{".repeat(50_000), "}".repeat(50_000));
  assert!(parse(&source).is_err());

  let depth = crate::parser::MAX_DEPTH as usize + 10;
  let source = format!("{}beep\n{}", "tell me\n".repeat(depth), "end tell\n".repeat(depth));
  let ast = parse(&source);
  assert!(ast.errors.iter().any(|error| matches!(error, ParseError::NestedTooDeeply(_))));
}

#[test]
fn errors_have_messages() {
  let ast = parse("tell me");
  let error = &ast.errors[0];

  assert_eq!(error.title(), "Missing End");
  assert_eq!(error.suggestion().as_deref(), Some("add `end tell` after the block"));
  assert!(error.full_message().starts_with("Missing End\n"));
  assert_eq!(error.span(), crate::Span::new(0, 4));
}

#[test]
fn print_spans() {
  let ast = parse("beep");
  let printed = ast.pretty(PrintConfig { spans: true }).to_string();

  assert_eq!(printed, "├─ Command (beep) [0..4]\n");
}

#[test]
fn parse_into_reuses() {
  let mut ast = parse("set x to");
  assert!(ast.is_err());

  crate::parse_into("set x to 1".to_owned(), &mut ast);
  assert!(ast.is_ok());
  assert_eq!(ast.source, "set x to 1");
}

#[test]
fn folding() {
  let source = indoc! {"
    on run
      tell me
        beep
      end tell
    end run
    (* a
       comment *)
    set x to {1, ¬
      2}
  "};
  let ranges = folding_ranges(&parse(source));

  assert_eq!(
    ranges,
    [
      FoldingRange {
        start_line: 1,
        end_line: 5,
        kind: FoldingKind::Region
      },
      FoldingRange {
        start_line: 2,
        end_line: 4,
        kind: FoldingKind::Region
      },
      FoldingRange {
        start_line: 6,
        end_line: 7,
        kind: FoldingKind::Comment
      },
    ]
  );
}
