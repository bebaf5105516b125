use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume_matching, expect},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `!` (logical not) and `-` (numeric
/// negation). Unary operators are right-associative, so `!-x` parses as
/// `!(-x)`. With no prefix operator present, parsing falls through to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("!" | "-") unary
///            | primary
/// ```
///
/// # Parameters
/// - `tokens`: The token stream.
///
/// # Returns
/// An [`Expr::Unary`] node or a primary expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(operator) = consume_matching(tokens, &[TokenKind::Bang, TokenKind::Minus]) {
        let operand = parse_unary(tokens)?;
        return Ok(Expr::Unary { operator,
                                operand: Box::new(operand) });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - the literals `true`, `false`, `nil`, numbers and strings,
/// - variable references,
/// - parenthesized groupings.
///
/// Grammar:
/// ```text
///     primary := "true" | "false" | "nil" | NUMBER | STRING
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: The token stream, positioned at the start of an expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// `ExpectedExpression` when the current token cannot start an expression;
/// the token is left in the stream for synchronization.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = match tokens.peek() {
        Some(token) => (*token).clone(),
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    match &token.kind {
        TokenKind::False => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(false) })
        },
        TokenKind::True => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Bool(true) })
        },
        TokenKind::Nil => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Nil })
        },
        TokenKind::Number(n) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Number(*n) })
        },
        TokenKind::Str(s) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Str(s.clone()) })
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable { name: token })
        },
        TokenKind::LeftParen => {
            tokens.next();
            let inner = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RightParen, "')' after expression")?;
            Ok(Expr::Grouping { inner: Box::new(inner) })
        },
        _ => Err(ParseError::ExpectedExpression { found: token.describe(),
                                                  line:  token.line, }),
    }
}
