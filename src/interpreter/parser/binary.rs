use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::consume_matching},
    },
};

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
///
/// # Parameters
/// - `tokens`: The token stream.
///
/// # Returns
/// An [`Expr::Binary`] tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_comparison(tokens)?;

    while let Some(operator) =
        consume_matching(tokens, &[TokenKind::EqualEqual, TokenKind::BangEqual])
    {
        let right = parse_comparison(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              operator,
                              right: Box::new(right) };
    }

    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles left-associative chains of `>`, `>=`, `<` and `<=`.
///
/// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
///
/// # Parameters
/// - `tokens`: The token stream.
///
/// # Returns
/// An [`Expr::Binary`] tree combining term-level nodes.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens)?;

    while let Some(operator) = consume_matching(tokens,
                                                &[TokenKind::Greater,
                                                  TokenKind::GreaterEqual,
                                                  TokenKind::Less,
                                                  TokenKind::LessEqual])
    {
        let right = parse_term(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              operator,
                              right: Box::new(right) };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;

    while let Some(operator) = consume_matching(tokens, &[TokenKind::Plus, TokenKind::Minus]) {
        let right = parse_factor(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              operator,
                              right: Box::new(right) };
    }

    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `factor := unary (("*" | "/") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;

    while let Some(operator) = consume_matching(tokens, &[TokenKind::Star, TokenKind::Slash]) {
        let right = parse_unary(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              operator,
                              right: Box::new(right) };
    }

    Ok(left)
}
