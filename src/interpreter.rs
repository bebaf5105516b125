/// The variable store.
///
/// # Responsibilities
/// - Hold the stack of lexical scopes.
/// - Resolve lookups and assignments to the nearest binding.
pub mod environment;
/// The tree-walking evaluator.
///
/// # Responsibilities
/// - Execute statements and evaluate expressions.
/// - Surface runtime errors with the line they occurred on.
pub mod evaluator;
/// The lexer.
///
/// # Responsibilities
/// - Turn source text into a token stream.
/// - Track line numbers and report lexical errors.
pub mod lexer;
/// The parser.
///
/// # Responsibilities
/// - Turn the token stream into an abstract syntax tree.
/// - Recover from parse errors at statement boundaries.
pub mod parser;
/// The expression printer.
///
/// # Responsibilities
/// - Render expression trees as parenthesized source text.
pub mod printer;
/// Runtime values.
///
/// # Responsibilities
/// - Define the value type, its truthiness, and its display form.
pub mod value;
