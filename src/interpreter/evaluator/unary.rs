use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
        value::Value,
    },
};

/// Evaluates a unary operator expression.
///
/// `-` negates a number; `!` negates the truthiness of any value.
///
/// # Errors
/// Returns [`RuntimeError::OperandMustBeNumber`] when `-` is applied to a
/// non-number.
pub fn eval_unary(interpreter: &mut Interpreter,
                  operator: &Token,
                  operand: &Expr)
                  -> EvalResult<Value> {
    let value = interpreter.evaluate(operand)?;

    match operator.kind {
        TokenKind::Minus => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::OperandMustBeNumber { operator: operator.lexeme.clone(),
                                                         line:     operator.line, }),
        },
        TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
        _ => unreachable!("the parser only builds unary nodes for '!' and '-'"),
    }
}
