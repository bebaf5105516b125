/// Binary operator productions.
///
/// One function per precedence level, each folding its operators
/// left-associatively over the next-tighter level.
pub mod binary;
/// Expression entry points.
///
/// Declares the parser result type and the lowest-binding expression
/// productions: assignment and the ternary conditional.
pub mod core;
/// Statement and program productions.
///
/// Parses the top-level declaration loop, variable declarations, `print`
/// statements, blocks, and expression statements, recovering from errors at
/// statement boundaries.
pub mod statement;
/// Unary and primary productions.
///
/// The tightest-binding levels: prefix `!`/`-`, literals, identifiers, and
/// parenthesized groupings.
pub mod unary;
/// Shared token-stream helpers.
///
/// `expect`/`consume` utilities over the peekable token stream, plus the
/// synchronization routine used for parse-error recovery.
pub mod utils;
