use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    error::{ErrorReporter, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// The result type of evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A tree-walking interpreter.
///
/// The interpreter owns the variable environment, so global bindings persist
/// across [`interpret`](Interpreter::interpret) calls. One interpreter
/// serves a whole session, REPL or file.
pub struct Interpreter {
    environment: Environment,
    out:         Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Interpreter { environment: Environment::new(),
                      out:         Box::new(std::io::stdout()), }
    }

    /// Creates an interpreter that prints to the given sink instead of
    /// standard output.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Interpreter { environment: Environment::new(),
                      out }
    }

    /// Executes the statements in order.
    ///
    /// Execution stops at the first runtime error, which is reported through
    /// the `reporter`. The environment keeps whatever bindings were made
    /// before the failure.
    pub fn interpret(&mut self, statements: &[Stmt], reporter: &mut ErrorReporter) {
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                reporter.runtime_error(&error);
                return;
            }
        }
    }

    fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
                Ok(())
            },
            Stmt::Print { expr } => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{value}").expect("output sink should accept writes");
                Ok(())
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(&name.lexeme, value);
                Ok(())
            },
            Stmt::Block { statements } => self.execute_block(statements),
        }
    }

    /// Executes a block in a fresh innermost scope.
    ///
    /// The scope is popped whether or not the block succeeds, so a runtime
    /// error inside a block leaves the enclosing environment intact.
    fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.environment.push_scope();
        let result = statements.iter().try_for_each(|statement| self.execute(statement));
        self.environment.pop_scope();
        result
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// Returns the [`RuntimeError`] raised by the first failing
    /// subexpression.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { inner } => self.evaluate(inner),
            Expr::Unary { operator, operand } => eval_unary(self, operator, operand),
            Expr::Binary { left, operator, right } => eval_binary(self, left, operator, right),
            Expr::Ternary { condition,
                            when_true,
                            when_false,
                            operator, } => {
                match self.evaluate(condition)? {
                    Value::Bool(true) => self.evaluate(when_true),
                    Value::Bool(false) => self.evaluate(when_false),
                    _ => Err(RuntimeError::ExpectedBoolean { line: operator.line }),
                }
            },
            Expr::Variable { name } => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
        }
    }
}
