/// Evaluation of binary operator expressions.
pub mod binary;
/// The interpreter itself.
///
/// Holds the environment and output sink, executes statements, and
/// dispatches expression evaluation.
pub mod core;
/// Evaluation of unary operator expressions.
pub mod unary;
