/// Lexical and parsing errors.
///
/// Defines all error types that can occur while scanning or parsing source
/// code: unexpected characters, unterminated literals and comments, missing
/// tokens, and malformed expressions. These errors are recoverable: the
/// scanner resumes at the next character and the parser synchronizes to the
/// next statement boundary, so several of them can be collected in one run.
pub mod parse_error;
/// The diagnostic sink shared by all pipeline stages.
///
/// The reporter records every formatted diagnostic and keeps the "had error"
/// flags that callers poll to decide whether a run failed.
pub mod reporter;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, operand type mismatches, and non-boolean ternary conditions.
/// The first runtime error aborts the remainder of the interpret call.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use reporter::ErrorReporter;
pub use runtime_error::RuntimeError;
