use logos::{Lexer, Logos, Skip};

use crate::error::{ErrorReporter, ParseError};

/// Classifies a lexical error before it is turned into a [`ParseError`].
///
/// `Default` is what logos produces when no pattern matches at all; the
/// other variants come from the catch patterns for unclosed literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
    /// A string literal still open at end of input.
    UnterminatedString,
    /// A block comment still open at end of input.
    UnterminatedBlockComment,
}

/// The kind of a lexical token.
///
/// This enum defines every token the language recognizes: punctuation and
/// operators, literals, identifiers, and the reserved words. Whitespace and
/// comments are consumed and skipped during scanning; newlines bump the line
/// counter carried in [`LexerExtras`].
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,

    /// Numeric literal tokens, such as `42` or `3.25`. A dot not followed
    /// by a digit is not part of the number, so `123.` scans as `123`
    /// followed by `.`.
    #[regex(r"[0-9]+(\.[0-9]+)?", lex_number)]
    Number(f64),
    /// String literal tokens. No escape sequences are processed; the payload
    /// is the text between the quotes.
    #[regex(r#""[^"]*""#, lex_string)]
    Str(String),
    /// Identifier tokens; any `[A-Za-z_][A-Za-z0-9_]*` run that is not a
    /// reserved word. The name is the token's lexeme.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// End of input sentinel. Never produced by the lexer itself; [`scan`]
    /// appends it once after the last real token.
    Eof,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    LineComment,
    /// `/* Block comments. */` close at the first `*/`; nesting is not
    /// supported.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", lex_block_comment)]
    BlockComment,
    /// A block comment left open at end of input.
    #[regex(r"/\*([^*]|\*+[^*/])*\*?", lex_unterminated_block_comment, allow_greedy = true)]
    UnterminatedBlockComment,
    /// A string literal left open at end of input.
    #[regex(r#""[^"]*"#, lex_unterminated_string, allow_greedy = true)]
    UnterminatedString,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
    /// Newlines advance the line counter used in diagnostics.
    #[token("\n", lex_newline)]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A lexical token: its kind, the exact source text it was scanned from, and
/// the line it ended on. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including any literal payload.
    pub kind:   TokenKind,
    /// The exact source substring the token was scanned from. Empty for the
    /// synthesized end-of-input token.
    pub lexeme: String,
    /// The source line the token ended on, starting at 1.
    pub line:   usize,
}

impl Token {
    /// A human-readable description of the token for diagnostics: the lexeme
    /// in quotes, or `end of input` for the sentinel.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("'{}'", self.lexeme)
        }
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Scanning never fails outright: every lexical problem is reported through
/// the `reporter` and scanning resumes after the offending span, so a single
/// pass can surface multiple lexical errors. The returned stream is always
/// terminated by exactly one [`TokenKind::Eof`] token.
///
/// # Parameters
/// - `source`: The raw source text.
/// - `reporter`: Sink for lexical errors.
///
/// # Returns
/// The scanned tokens, ending with the end-of-input sentinel.
///
/// # Example
/// ```
/// use tarn::{error::ErrorReporter, interpreter::lexer::{scan, TokenKind}};
///
/// let mut reporter = ErrorReporter::new();
/// let tokens = scan("print 1;", &mut reporter);
///
/// assert!(!reporter.had_error());
/// assert_eq!(tokens.len(), 4); // print, 1, ;, end of input
/// assert_eq!(tokens[1].kind, TokenKind::Number(1.0));
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn scan(source: &str, reporter: &mut ErrorReporter) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme: lexer.slice().to_string(),
                                            line }),
            Err(error) => {
                let error = match error {
                    LexError::UnexpectedCharacter => {
                        ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                          line }
                    },
                    LexError::UnterminatedString => ParseError::UnterminatedString { line },
                    LexError::UnterminatedBlockComment => {
                        ParseError::UnterminatedBlockComment { line }
                    },
                };
                reporter.parse_error(&error);
            },
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        lexeme: String::new(),
                        line:   lexer.extras.line, });
    tokens
}

/// Parses a numeric literal from the current token slice.
fn lex_number(lex: &mut Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a string literal and counts the newlines it spans.
fn lex_string(lex: &mut Lexer<TokenKind>) -> String {
    let newlines = lex.slice().matches('\n').count();
    lex.extras.line += newlines;

    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Counts the newlines a block comment spans, then skips it.
fn lex_block_comment(lex: &mut Lexer<TokenKind>) -> Skip {
    let newlines = lex.slice().matches('\n').count();
    lex.extras.line += newlines;
    Skip
}

/// Advances the line counter for a newline, then skips it.
fn lex_newline(lex: &mut Lexer<TokenKind>) -> Skip {
    lex.extras.line += 1;
    Skip
}

/// A string literal ran to end of input without a closing quote. The
/// literal is discarded; its newlines still count for diagnostics.
fn lex_unterminated_string(lex: &mut Lexer<TokenKind>) -> Result<(), LexError> {
    let newlines = lex.slice().matches('\n').count();
    lex.extras.line += newlines;
    Err(LexError::UnterminatedString)
}

/// A block comment ran to end of input without a closing `*/`.
fn lex_unterminated_block_comment(lex: &mut Lexer<TokenKind>) -> Result<(), LexError> {
    let newlines = lex.slice().matches('\n').count();
    lex.extras.line += newlines;
    Err(LexError::UnterminatedBlockComment)
}
