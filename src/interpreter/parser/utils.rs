use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token when it has the required kind.
///
/// On a mismatch the offending token is left in the stream (so that
/// synchronization sees it) and a [`ParseError::UnexpectedToken`] naming
/// both the expectation and the actual token is returned.
///
/// # Parameters
/// - `tokens`: The token stream.
/// - `kind`: The required token kind.
/// - `expected`: Human-readable description of the expectation, e.g.
///   `"';' after value"`.
///
/// # Returns
/// The consumed token.
pub fn expect<'a, I>(tokens: &mut Peekable<I>, kind: &TokenKind, expected: &str) -> ParseResult<Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == *kind => {
            // The peek above matched, so the stream cannot be empty here.
            Ok(tokens.next().unwrap().clone())
        },
        Some(token) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                         found:    token.describe(),
                                                         line:     token.line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes and returns the next token when it has the given kind, without
/// an error otherwise.
pub fn consume_if<'a, I>(tokens: &mut Peekable<I>, kind: &TokenKind) -> Option<Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == *kind => Some(tokens.next().unwrap().clone()),
        _ => None,
    }
}

/// Consumes and returns the next token when its kind is any of `kinds`.
pub fn consume_matching<'a, I>(tokens: &mut Peekable<I>, kinds: &[TokenKind]) -> Option<Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if kinds.contains(&token.kind) => Some(tokens.next().unwrap().clone()),
        _ => None,
    }
}

/// Discards tokens until a probable statement boundary.
///
/// Called after a parse error so that one malformed statement does not take
/// the rest of the program with it. The routine stops just past a `;`, just
/// before a keyword that starts a new declaration or statement, or at end of
/// input. One token is always consumed first: the offending token is still
/// pending at every error site, and dropping it guarantees progress.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    let mut previous = tokens.next();

    loop {
        if matches!(previous, Some(token) if token.kind == TokenKind::Semicolon) {
            return;
        }

        match tokens.peek() {
            None => return,
            Some(token) => match token.kind {
                TokenKind::Eof
                | TokenKind::Class
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::Var
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => previous = tokens.next(),
            },
        }
    }
}
