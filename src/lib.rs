//! # tarn
//!
//! tarn is a small, dynamically typed scripting language written in Rust.
//! It lexes, parses, and interprets programs with variables, lexical block
//! scope, string and number arithmetic, and a ternary conditional.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ErrorReporter,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::statement::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the interpreter.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches the tokens that introduced each node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or interpreting code, together with the reporter that collects them. Every
/// error carries the line number it occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, interpreter).
/// - Attaches line numbers and detailed messages for context.
/// - Collects diagnostics so a single run can report every error it found.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the variable environment to provide a complete
/// runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for scanning, parsing, and interpreting user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a piece of source code from text to effect.
///
/// The source is scanned and parsed in full, so every static error is
/// reported, then handed to the interpreter. When scanning or parsing raised
/// any error the program is not executed at all; a program that fails to
/// parse never runs partially. Runtime state lives in the interpreter, so
/// consecutive calls with the same interpreter share global variables.
///
/// Errors are not returned; they are recorded on the `reporter`, whose flags
/// distinguish static from runtime failures.
///
/// # Examples
/// ```
/// use tarn::{error::ErrorReporter, interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::with_output(Box::new(Vec::<u8>::new()));
/// let mut reporter = ErrorReporter::new();
///
/// run("var greeting = \"hello\"; print greeting;", &mut interpreter, &mut reporter);
/// assert!(!reporter.had_error());
///
/// // An undefined variable is a runtime error, not a static one.
/// run("print nowhere;", &mut interpreter, &mut reporter);
/// assert!(reporter.had_runtime_error());
/// ```
pub fn run(source: &str, interpreter: &mut Interpreter, reporter: &mut ErrorReporter) {
    let tokens = scan(source, reporter);
    let statements = parse_program(&tokens, reporter);

    if reporter.had_error() {
        return;
    }

    interpreter.interpret(&statements, reporter);
}
