use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
        value::Value,
    },
};

/// Evaluates a binary operator expression.
///
/// Both operands are evaluated before the operator is applied, left first.
///
/// # Errors
/// - [`RuntimeError::OperandsMustBeNumbers`] when an arithmetic or
///   comparison operator other than `+` receives a non-number operand.
/// - [`RuntimeError::InvalidAdditionOperands`] when `+` receives operands
///   that are not two numbers or two strings.
pub fn eval_binary(interpreter: &mut Interpreter,
                   left: &Expr,
                   operator: &Token,
                   right: &Expr)
                   -> EvalResult<Value> {
    let left = interpreter.evaluate(left)?;
    let right = interpreter.evaluate(right)?;

    match operator.kind {
        TokenKind::Plus => eval_addition(left, right, operator),
        TokenKind::Minus => {
            let (a, b) = number_operands(left, right, operator)?;
            Ok(Value::Number(a - b))
        },
        TokenKind::Star => {
            let (a, b) = number_operands(left, right, operator)?;
            Ok(Value::Number(a * b))
        },
        TokenKind::Slash => {
            let (a, b) = number_operands(left, right, operator)?;
            Ok(Value::Number(a / b))
        },
        TokenKind::Greater => {
            let (a, b) = number_operands(left, right, operator)?;
            Ok(Value::Bool(a > b))
        },
        TokenKind::GreaterEqual => {
            let (a, b) = number_operands(left, right, operator)?;
            Ok(Value::Bool(a >= b))
        },
        TokenKind::Less => {
            let (a, b) = number_operands(left, right, operator)?;
            Ok(Value::Bool(a < b))
        },
        TokenKind::LessEqual => {
            let (a, b) = number_operands(left, right, operator)?;
            Ok(Value::Bool(a <= b))
        },
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        _ => unreachable!("the parser only builds binary nodes for binary operators"),
    }
}

/// `+` adds two numbers or concatenates two strings; any other pairing is a
/// runtime error.
fn eval_addition(left: Value, right: Value, operator: &Token) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
        _ => Err(RuntimeError::InvalidAdditionOperands { line: operator.line }),
    }
}

fn number_operands(left: Value, right: Value, operator: &Token) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: operator.lexeme.clone(),
                                                       line:     operator.line, }),
    }
}
