use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::{ErrorReporter, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume_if, expect, synchronize},
        },
    },
};

/// Parses a whole program: an ordered sequence of declarations.
///
/// Parsing never fails past this boundary. Each top-level declaration is
/// parsed independently; when one fails, the error is reported through the
/// `reporter`, the token stream is synchronized to the next statement
/// boundary, and parsing continues, so every independent error in the source
/// is reported in one run. Failed declarations contribute no statement.
///
/// # Parameters
/// - `tokens`: The scanned token stream, terminated by its end-of-input
///   sentinel.
/// - `reporter`: Sink for parse errors.
///
/// # Returns
/// The statements that parsed successfully, in source order.
///
/// # Example
/// ```
/// use tarn::{
///     error::ErrorReporter,
///     interpreter::{lexer::scan, parser::statement::parse_program},
/// };
///
/// let mut reporter = ErrorReporter::new();
/// let tokens = scan("var a = 1; print a;", &mut reporter);
/// let statements = parse_program(&tokens, &mut reporter);
///
/// assert!(!reporter.had_error());
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token], reporter: &mut ErrorReporter) -> Vec<Stmt> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while let Some(token) = iter.peek() {
        if token.kind == TokenKind::Eof {
            break;
        }

        match parse_declaration(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                reporter.parse_error(&error);
                synchronize(&mut iter);
            },
        }
    }

    statements
}

/// Parses a single declaration: a variable declaration or any statement.
///
/// Grammar: `declaration := var_declaration | statement`
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if consume_if(tokens, &TokenKind::Var).is_some() {
        return parse_var_declaration(tokens);
    }

    parse_statement(tokens)
}

/// Parses a variable declaration after its `var` keyword.
///
/// Grammar: `var_declaration := "var" IDENTIFIER ("=" expression)? ";"`
///
/// A declaration without an initializer binds the variable to `nil`.
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let name = expect(tokens, &TokenKind::Identifier, "a variable name after 'var'")?;

    let initializer = if consume_if(tokens, &TokenKind::Equal).is_some() {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect(tokens, &TokenKind::Semicolon, "';' after variable declaration")?;
    Ok(Stmt::Var { name, initializer })
}

/// Parses a single statement.
///
/// Grammar: `statement := print_statement | block | expression_statement`
///
/// Anything that is not a `print` statement or a block falls through to the
/// expression statement production.
fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if consume_if(tokens, &TokenKind::Print).is_some() {
        return parse_print_statement(tokens);
    }
    if consume_if(tokens, &TokenKind::LeftBrace).is_some() {
        return parse_block(tokens);
    }

    parse_expression_statement(tokens)
}

/// Parses a `print` statement after its keyword.
///
/// Grammar: `print_statement := "print" expression ";"`
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon, "';' after value")?;
    Ok(Stmt::Print { expr })
}

/// Parses an expression statement.
///
/// Grammar: `expression_statement := expression ";"`
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon, "';' after expression")?;
    Ok(Stmt::Expression { expr })
}

/// Parses a block after its opening brace.
///
/// Grammar: `block := "{" declaration* "}"`
///
/// Errors inside the block propagate to the top-level declaration loop;
/// synchronization happens there, not per block statement.
fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    while let Some(token) = tokens.peek() {
        match token.kind {
            TokenKind::RightBrace => {
                tokens.next();
                return Ok(Stmt::Block { statements });
            },
            TokenKind::Eof => {
                return Err(ParseError::UnexpectedToken { expected: "'}' after block".to_string(),
                                                         found:    token.describe(),
                                                         line:     token.line, });
            },
            _ => statements.push(parse_declaration(tokens)?),
        }
    }

    Err(ParseError::UnexpectedEndOfInput)
}
