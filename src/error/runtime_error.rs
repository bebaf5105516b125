#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that no scope defines.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to a non-numeric operand.
    OperandMustBeNumber {
        /// The lexeme of the operator.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator was applied to non-numeric operands.
    OperandsMustBeNumbers {
        /// The lexeme of the operator.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` was applied to operands that are neither two numbers nor two
    /// strings.
    InvalidAdditionOperands {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A ternary condition evaluated to something other than a boolean.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::OperandMustBeNumber { operator, line } => {
                write!(f, "Error on line {line}: Operand of '{operator}' must be a number.")
            },
            Self::OperandsMustBeNumbers { operator, line } => {
                write!(f, "Error on line {line}: Operands of '{operator}' must be numbers.")
            },
            Self::InvalidAdditionOperands { line } => {
                write!(f, "Error on line {line}: Operands must be two numbers or two strings.")
            },
            Self::ExpectedBoolean { line } => {
                write!(f, "Error on line {line}: Expected boolean condition.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
