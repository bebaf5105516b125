use std::{cell::RefCell, io::Write, rc::Rc};

use tarn::{
    ast::Stmt,
    error::ErrorReporter,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{TokenKind, scan},
        parser::statement::parse_program,
        printer::render,
    },
    run,
};

/// An output sink that can be inspected after the interpreter is done with
/// its `Box<dyn Write>` half.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output should be valid UTF-8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_capture(src: &str) -> (String, ErrorReporter) {
    let buf = SharedBuf::default();
    let mut interpreter = Interpreter::with_output(Box::new(buf.clone()));
    let mut reporter = ErrorReporter::new();

    run(src, &mut interpreter, &mut reporter);
    (buf.contents(), reporter)
}

fn assert_prints(src: &str, expected: &[&str]) {
    let (output, reporter) = run_capture(src);
    assert!(!reporter.had_error() && !reporter.had_runtime_error(),
            "script failed: {:?}",
            reporter.diagnostics());
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
}

fn assert_runtime_error(src: &str, message: &str) {
    let (_, reporter) = run_capture(src);
    assert!(reporter.had_runtime_error(),
            "script succeeded but was expected to fail at runtime");
    assert_eq!(reporter.diagnostics().last().map(String::as_str), Some(message));
}

#[test]
fn numbers_scan_as_expected() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("123.45", &mut reporter);
    assert_eq!(tokens[0].kind, TokenKind::Number(123.45));

    // The trailing dot is not part of the number.
    let tokens = scan("123.", &mut reporter);
    assert_eq!(tokens[0].kind, TokenKind::Number(123.0));
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert!(!reporter.had_error());
}

#[test]
fn keywords_beat_identifiers() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("var variable orchid", &mut reporter);

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "variable");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn comments_are_skipped_and_lines_counted() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("// nothing here\nprint /* not\neven\nthis */ 1;", &mut reporter);

    assert!(!reporter.had_error());
    assert_eq!(tokens[0].kind, TokenKind::Print);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Number(1.0));
    assert_eq!(tokens[1].line, 4);
}

#[test]
fn unterminated_string_is_reported() {
    let mut reporter = ErrorReporter::new();
    scan("print \"no closing quote", &mut reporter);

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics(),
               &["Error on line 1: Unterminated string.".to_string()]);
}

#[test]
fn unterminated_block_comment_is_reported() {
    let mut reporter = ErrorReporter::new();
    scan("print 1; /* runs\nto the end", &mut reporter);

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics(),
               &["Error on line 2: Unterminated block comment.".to_string()]);
}

#[test]
fn nul_bytes_are_unexpected_characters() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("print 1;\0print 2;", &mut reporter);

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics().len(), 1);
    // Scanning resumes after the NUL and the stream still ends in exactly
    // one sentinel.
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Print).count(), 2);
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
}

#[test]
fn scanning_survives_multiple_bad_characters() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("var @ = 1;\n#", &mut reporter);

    assert_eq!(reporter.diagnostics().len(), 2);
    // The well-formed tokens around the bad characters still come through.
    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Equal);
}

#[test]
fn ternary_picks_a_branch() {
    assert_prints("print true ? 1 : 2;", &["1"]);
    assert_prints("print false ? 1 : 2;", &["2"]);
    assert_prints("print 1 == 1 ? \"expected\" : \"unexpected\";", &["expected"]);
    assert_prints("print 1 != 1 ? \"unexpected\" : \"expected\";", &["expected"]);
}

#[test]
fn nested_ternaries_resolve_innermost_first() {
    assert_prints("print 1 == 1 ? (2 == 2 ? \"expected\" : \"unexpected\") : \"unexpected\";",
                  &["expected"]);
    // The true branch nests without grouping.
    assert_prints(concat!("print 1 == 1",
                          " ? (2 == 2 ? 3 != 3 ? \"unexpected\" : \"expected\" : \"unexpected\")",
                          " : \"unexpected\";"),
                  &["expected"]);
}

#[test]
fn ternary_else_branch_nests_rightward() {
    assert_prints("print false ? 1 : true ? 2 : 3;", &["2"]);
    assert_prints("print false ? 1 : false ? 2 : 3;", &["3"]);
}

#[test]
fn grouped_ternary_composes_with_arithmetic() {
    assert_prints("print (false ? 1 : 2) + 10;", &["12"]);
}

#[test]
fn ternary_condition_must_be_boolean() {
    assert_runtime_error("print 1 ? 2 : 3;",
                         "Error on line 1: Expected boolean condition.");
    assert_runtime_error("print nil ? 2 : 3;",
                         "Error on line 1: Expected boolean condition.");
}

#[test]
fn nested_blocks_shadow_outer_bindings() {
    assert_prints(
                  r#"
        var a = "global a";
        var b = "global b";
        var c = "global c";
        {
            var a = "outer a";
            var b = "outer b";
            {
                var a = "inner a";
                print a;
                print b;
                print c;
            }
            print a;
            print b;
            print c;
        }
        print a;
        print b;
        print c;
    "#,
                  &["inner a", "outer b", "global c", "outer a", "outer b", "global c",
                    "global a", "global b", "global c"],
    );
}

#[test]
fn assignment_in_a_block_reaches_the_outer_binding() {
    assert_prints(
                  r#"
        var b = "global b";
        {
            b = "changed b";
        }
        print b;
    "#,
                  &["changed b"],
    );
}

#[test]
fn var_without_initializer_is_nil() {
    assert_prints("var x; print x;", &["nil"]);
}

#[test]
fn assignment_is_an_expression_and_binds_nearest() {
    assert_prints("var a = 1; print a = 2; print a;", &["2", "2"]);
    assert_prints("var a = 1; { a = 5; } print a;", &["5"]);
}

#[test]
fn assigning_to_an_undeclared_name_fails() {
    assert_runtime_error("ghost = 1;", "Error on line 1: Undefined variable 'ghost'.");
}

#[test]
fn reading_an_undeclared_name_fails() {
    assert_runtime_error("print ghost;", "Error on line 1: Undefined variable 'ghost'.");
}

#[test]
fn parser_recovers_at_statement_boundaries() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("var = 1;\nprint ok;\nvar 2 = 3;\nprint ok;", &mut reporter);
    let statements = parse_program(&tokens, &mut reporter);

    // Both malformed declarations are reported and both print statements
    // survive.
    assert_eq!(reporter.diagnostics().len(), 2);
    assert_eq!(statements.len(), 2);
}

#[test]
fn static_errors_suppress_execution() {
    let (output, reporter) = run_capture("print 1;\nvar = oops;");

    assert!(reporter.had_error());
    assert!(output.is_empty(), "nothing should run after a parse error: {output:?}");
}

#[test]
fn addition_adds_numbers_and_concatenates_strings() {
    assert_prints("print 1 + 2;", &["3"]);
    assert_prints("print \"foo\" + \"bar\";", &["foobar"]);
}

#[test]
fn mixed_addition_fails() {
    assert_runtime_error("print \"1\" + 2;",
                         "Error on line 1: Operands must be two numbers or two strings.");
}

#[test]
fn equality_does_not_cross_types() {
    assert_prints("print 1 == 1; print 1 == \"1\"; print nil == nil; print nil == false;",
                  &["true", "false", "true", "false"]);
    assert_prints("print 1 != 2;", &["true"]);
}

#[test]
fn comparisons_order_numbers() {
    assert_prints("print 1 < 2; print 2 <= 2; print 3 > 4; print 4 >= 4;",
                  &["true", "true", "false", "true"]);
}

#[test]
fn comparisons_require_numbers() {
    assert_runtime_error("print \"a\" < \"b\";",
                         "Error on line 1: Operands of '<' must be numbers.");
}

#[test]
fn bang_negates_truthiness() {
    // Only nil and false are falsy; zero and the empty string are truthy.
    assert_prints("print !nil; print !false; print !0; print !\"\";",
                  &["true", "true", "false", "false"]);
}

#[test]
fn unary_minus_requires_a_number() {
    assert_prints("print -3 + 5;", &["2"]);
    assert_runtime_error("print -\"muffin\";",
                         "Error on line 1: Operand of '-' must be a number.");
}

#[test]
fn whole_numbers_print_without_a_fraction() {
    assert_prints("print 4 / 2; print 2.5 + 0.25;", &["2", "2.75"]);
}

#[test]
fn runtime_errors_leave_the_session_usable() {
    let buf = SharedBuf::default();
    let mut interpreter = Interpreter::with_output(Box::new(buf.clone()));
    let mut reporter = ErrorReporter::new();

    run("var a = 1; { var a = 2; print missing; }", &mut interpreter, &mut reporter);
    assert!(reporter.had_runtime_error());

    // The failed block's scope was popped, so the global binding is intact.
    reporter.reset();
    run("print a;", &mut interpreter, &mut reporter);
    assert!(!reporter.had_runtime_error());
    assert_eq!(buf.contents(), "1\n");
}

#[test]
fn globals_persist_across_runs() {
    let buf = SharedBuf::default();
    let mut interpreter = Interpreter::with_output(Box::new(buf.clone()));
    let mut reporter = ErrorReporter::new();

    run("var count = 1;", &mut interpreter, &mut reporter);
    run("count = count + 1; print count;", &mut interpreter, &mut reporter);

    assert!(!reporter.had_error() && !reporter.had_runtime_error());
    assert_eq!(buf.contents(), "2\n");
}

#[test]
fn printer_parenthesizes_by_precedence() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("print 1 + 2 * 3;", &mut reporter);
    let statements = parse_program(&tokens, &mut reporter);

    let Some(Stmt::Print { expr }) = statements.first() else {
        panic!("expected a print statement");
    };
    assert_eq!(render(expr), "(1 + (2 * 3))");
}

#[test]
fn printer_renders_every_node_shape() {
    let mut reporter = ErrorReporter::new();
    let tokens = scan("x = !true ? \"yes\" : (nil);", &mut reporter);
    let statements = parse_program(&tokens, &mut reporter);

    let Some(Stmt::Expression { expr }) = statements.first() else {
        panic!("expected an expression statement");
    };
    assert_eq!(render(expr), "(x = ((!true) ? \"yes\" : (nil)))");
}

#[test]
fn rendered_expressions_evaluate_like_their_sources() {
    let source = "print 1 == 1 ? 2 + 3 * 4 : 5;";
    let mut reporter = ErrorReporter::new();
    let tokens = scan(source, &mut reporter);
    let statements = parse_program(&tokens, &mut reporter);

    let Some(Stmt::Print { expr }) = statements.first() else {
        panic!("expected a print statement");
    };

    // The rendered form is itself valid source and prints the same value.
    let (original, _) = run_capture(source);
    let (rerun, reporter) = run_capture(&format!("print {};", render(expr)));

    assert!(!reporter.had_error() && !reporter.had_runtime_error(),
            "rendered form failed: {:?}",
            reporter.diagnostics());
    assert_eq!(rerun, original);
    assert_eq!(rerun, "14\n");
}

#[test]
fn truncated_token_streams_report_end_of_input() {
    let mut reporter = ErrorReporter::new();
    let mut tokens = scan("print 1;", &mut reporter);
    // Drop the semicolon and the sentinel.
    tokens.truncate(2);

    let statements = parse_program(&tokens, &mut reporter);

    assert!(statements.is_empty());
    assert_eq!(reporter.diagnostics(),
               &["Error: Unexpected end of input.".to_string()]);
}

#[test]
fn missing_semicolon_is_a_parse_error() {
    let (_, reporter) = run_capture("print 1");

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics(),
               &["Error on line 1: Expected ';' after value, found end of input.".to_string()]);
}

#[test]
fn unclosed_block_is_a_parse_error() {
    let (_, reporter) = run_capture("{ print 1;");

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics(),
               &["Error on line 1: Expected '}' after block, found end of input.".to_string()]);
}

#[test]
fn invalid_assignment_target_is_reported() {
    let (_, reporter) = run_capture("1 + 2 = 3;");

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics(),
               &["Error on line 1: Invalid assignment target.".to_string()]);
}
