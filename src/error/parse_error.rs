#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// The scanner met a character that starts no token.
    UnexpectedCharacter {
        /// The offending character as it appears in the source.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal was still open at the end of input.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block comment was still open at the end of input.
    UnterminatedBlockComment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    UnexpectedToken {
        /// Description of what the parser expected.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression could start at the current token.
    ExpectedExpression {
        /// Description of the token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left-hand side of `=` is not assignable.
    InvalidAssignmentTarget {
        /// The source line of the `=` token.
        line: usize,
    },
    /// The token stream ran out without its end-of-input sentinel. Streams
    /// produced by `scan` always carry the sentinel, whose line number gives
    /// end-of-input diagnostics a precise location; this variant covers
    /// hand-built streams that lack it and so claims no line.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unexpected character '{found}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string.")
            },
            Self::UnterminatedBlockComment { line } => {
                write!(f, "Error on line {line}: Unterminated block comment.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Expected expression, found {found}.")
            },
            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid assignment target.")
            },
            Self::UnexpectedEndOfInput => {
                write!(f, "Error: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
