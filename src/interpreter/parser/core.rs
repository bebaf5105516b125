use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_equality,
            utils::{consume_if, expect},
        },
    },
};

/// Result type used by every parser production.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-binding level, assignment, and recursively descends through the
/// precedence ladder.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: The token stream.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative and its target is validated after the
/// fact: the left-hand side is parsed as an ordinary expression, and when an
/// `=` follows, that expression must have been a plain variable reference.
/// Everything else (`1 = 2`, `a + b = c`) is an invalid assignment target.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | ternary`
///
/// # Parameters
/// - `tokens`: The token stream.
///
/// # Returns
/// An [`Expr::Assign`] node, or the underlying expression when no `=`
/// follows.
///
/// # Errors
/// - `InvalidAssignmentTarget` when the left-hand side is not a variable.
/// - Propagates any errors from sub-expression parsing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_ternary(tokens)?;

    if let Some(equals) = consume_if(tokens, &TokenKind::Equal) {
        let value = parse_assignment(tokens)?;

        return match expr {
            Expr::Variable { name } => Ok(Expr::Assign { name,
                                                         value: Box::new(value) }),
            _ => Err(ParseError::InvalidAssignmentTarget { line: equals.line }),
        };
    }

    Ok(expr)
}

/// Parses a ternary conditional expression.
///
/// Grammar: `ternary := equality ("?" expression ":" expression)*`
///
/// Both branches recurse into the full expression production rather than
/// the ternary level, which makes the construct right-associative:
/// `a ? b : c ? d : e` groups as `a ? b : (c ? d : e)` without explicit
/// parentheses.
///
/// # Parameters
/// - `tokens`: The token stream.
///
/// # Returns
/// An [`Expr::Ternary`] node, or the equality expression when no `?`
/// follows.
fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_equality(tokens)?;

    while let Some(operator) = consume_if(tokens, &TokenKind::Question) {
        let when_true = parse_expression(tokens)?;
        expect(tokens, &TokenKind::Colon, "':' after ternary branch")?;
        let when_false = parse_expression(tokens)?;

        expr = Expr::Ternary { condition:  Box::new(expr),
                               when_true:  Box::new(when_true),
                               when_false: Box::new(when_false),
                               operator };
    }

    Ok(expr)
}
