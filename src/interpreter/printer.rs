use crate::ast::{Expr, LiteralValue};

/// Renders an expression tree as parenthesized source text.
///
/// Every compound node is wrapped in parentheses, so the output makes the
/// tree structure explicit and parses back to an equivalent tree. String
/// literals keep their quotes.
///
/// # Example
/// ```
/// use tarn::{
///     ast::{Expr, LiteralValue},
///     interpreter::printer::render,
/// };
///
/// let expr = Expr::Grouping { inner: Box::new(Expr::Literal { value: LiteralValue::Number(1.0) }), };
///
/// assert_eq!(render(&expr), "(1)");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value } => render_literal(value),
        Expr::Grouping { inner } => format!("({})", render(inner)),
        Expr::Unary { operator, operand } => {
            format!("({}{})", operator.lexeme, render(operand))
        },
        Expr::Binary { left, operator, right } => {
            format!("({} {} {})", render(left), operator.lexeme, render(right))
        },
        Expr::Ternary { condition,
                        when_true,
                        when_false,
                        .. } => {
            format!("({} ? {} : {})",
                    render(condition),
                    render(when_true),
                    render(when_false))
        },
        Expr::Variable { name } => name.lexeme.clone(),
        Expr::Assign { name, value } => format!("({} = {})", name.lexeme, render(value)),
    }
}

fn render_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Number(n) => format!("{n}"),
        LiteralValue::Str(s) => format!("\"{s}\""),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Nil => "nil".to_string(),
    }
}
