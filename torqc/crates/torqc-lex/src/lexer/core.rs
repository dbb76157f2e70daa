//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the token dispatch and the
//! public `next_token`/`peek_token` contract.

use std::io::Read;

use torqc_util::{Handler, SourceResult, Span};
use tracing::{debug, trace};

use crate::chars::is_ident_start;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for the Torq scripting language.
///
/// Each call to [`next_token`](Self::next_token) or
/// [`peek_token`](Self::peek_token) is one complete scan from the current
/// cursor that produces exactly one token. Errors are ordinary
/// [`TokenKind::Error`] tokens; once the end of input is reached every
/// further call returns [`TokenKind::Eos`].
///
/// # Example
///
/// ```
/// use torqc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x >= 0x10\n");
/// assert_eq!(lexer.next_token().kind(), &TokenKind::Identifier("x".to_string()));
/// assert_eq!(lexer.peek_token().kind(), &TokenKind::GtEq);
/// assert_eq!(lexer.next_token().kind(), &TokenKind::GtEq);
/// assert_eq!(lexer.next_token().kind(), &TokenKind::Integer(16));
/// assert_eq!(lexer.next_token().kind(), &TokenKind::Endl);
/// assert!(lexer.next_token().is_eos());
/// ```
#[derive(Debug)]
pub struct Lexer {
    /// Character cursor, owner of the offset and column.
    pub(crate) cursor: Cursor,

    /// Current line (1-based). Not restored by `peek_token`.
    pub(crate) line: u32,

    /// Collector for errors reported by `next_token`.
    handler: Handler,

    /// Offset of the current token's first character.
    token_start: usize,

    /// Line where the current token starts.
    token_start_line: u32,

    /// Column where the current token starts.
    token_start_column: u32,
}

impl Lexer {
    /// Creates a new lexer over in-memory source text.
    pub fn new(source: &str) -> Self {
        Self::with_cursor(Cursor::new(source))
    }

    /// Creates a lexer by reading an open stream to its end.
    ///
    /// The stream is only read; it is never closed or reopened, so a
    /// caller passing `&mut File` keeps the handle.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`](torqc_util::SourceError::Io) if the
    /// stream cannot be read or is not valid UTF-8.
    pub fn from_reader<R: Read>(reader: R) -> SourceResult<Self> {
        let cursor = Cursor::from_reader(reader)?;
        debug!(chars = cursor.len(), "loaded source from reader");
        Ok(Self::with_cursor(cursor))
    }

    fn with_cursor(cursor: Cursor) -> Self {
        Self {
            cursor,
            line: 1,
            handler: Handler::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 0,
        }
    }

    /// Consumes and returns the next token.
    ///
    /// ERROR tokens are also reported to the lexer's [`Handler`].
    pub fn next_token(&mut self) -> Token {
        let token = self.read_token();
        trace!(kind = ?token.kind(), line = token.line(), column = token.column(), "token");
        if let Some(error) = token.error() {
            self.report(error, &token);
        }
        token
    }

    /// Returns the token [`next_token`](Self::next_token) would return,
    /// without consuming it.
    ///
    /// The cursor offset and column are restored afterwards. The line
    /// counter is not: peeking at a newline, or at a string that spans
    /// lines, advances [`line`](Self::line) for good. Errors seen while
    /// peeking are not reported.
    pub fn peek_token(&mut self) -> Token {
        let snapshot = self.cursor.snapshot();
        let token = self.read_token();
        self.cursor.restore(snapshot);
        token
    }

    /// Lexes the whole source, up to and including the EOS token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eos();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Scans one token from the current cursor.
    fn read_token(&mut self) -> Token {
        let first = self.cursor.advance();
        let first = self.skip_whitespace_and_comments(first);

        self.token_start = self.cursor.position().saturating_sub(1);
        self.token_start_line = self.line;
        self.token_start_column = self.cursor.column();

        let Some(c) = first else {
            return self.make_token(TokenKind::Eos);
        };

        match c {
            '(' => self.make_token(TokenKind::LParen),
            ')' => self.make_token(TokenKind::RParen),
            '[' => self.make_token(TokenKind::LBracket),
            ']' => self.make_token(TokenKind::RBracket),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '\n' => {
                let token = self.make_token(TokenKind::Endl);
                self.line += 1;
                token
            },
            '=' => self.lex_paired(TokenKind::Assign, TokenKind::Equals),
            '>' => self.lex_paired(TokenKind::Gt, TokenKind::GtEq),
            '<' => self.lex_paired(TokenKind::Lt, TokenKind::LtEq),
            '!' => self.lex_paired(TokenKind::Bang, TokenKind::NotEq),
            '0' if self.cursor.peek_char(1) == Some('x') => {
                self.cursor.advance();
                self.lex_integer(16)
            },
            '0' if self.cursor.peek_char(1) == Some('b') => {
                self.cursor.advance();
                self.lex_integer(2)
            },
            c if c.is_ascii_digit() => {
                self.cursor.rewind();
                self.lex_decimal()
            },
            '"' => self.lex_string(),
            c if is_ident_start(c) => self.lex_identifier(c),
            c => self.error_token(LexError::UnrecognizedCharacter(c)),
        }
    }

    /// Builds a token positioned at the start of the current token.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_start_line, self.token_start_column)
    }

    /// Builds an ERROR token positioned where the error was detected.
    pub(crate) fn error_token(&self, error: LexError) -> Token {
        Token::new(TokenKind::Error(error), self.line, self.cursor.column())
    }

    fn report(&self, error: &LexError, token: &Token) {
        debug!(%error, line = token.line(), column = token.column(), "lexical error");
        let end = self.cursor.position().min(self.cursor.len());
        let span = Span::new(self.token_start, end, token.line(), token.column());
        self.handler
            .build_error(span, error.to_string())
            .code(error.code())
            .emit(&self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the most recently consumed character.
    ///
    /// The column is never reset at the start of a line.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the number of characters consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the handler holding every error reported so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eos() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .into_iter()
            .map(Token::into_kind)
            .collect()
    }

    #[test]
    fn test_single_character_tokens_at_column_one() {
        let cases = [
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
            ("[", TokenKind::LBracket),
            ("]", TokenKind::RBracket),
            (",", TokenKind::Comma),
            (".", TokenKind::Dot),
            (";", TokenKind::Semicolon),
            ("=", TokenKind::Assign),
            (">", TokenKind::Gt),
            ("<", TokenKind::Lt),
            ("!", TokenKind::Bang),
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Star),
            ("/", TokenKind::Slash),
            ("%", TokenKind::Percent),
            ("\n", TokenKind::Endl),
        ];
        for (source, expected) in cases {
            let mut lexer = Lexer::new(source);
            let token = lexer.next_token();
            assert_eq!(token.kind(), &expected, "source {:?}", source);
            assert_eq!(token.line(), 1);
            assert_eq!(token.column(), 1);
            assert!(lexer.next_token().is_eos());
        }
    }

    #[test]
    fn test_basic_character_stream() {
        assert_eq!(
            kinds("( ) = . == > >= < <= ; + - * / % \n"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Assign,
                TokenKind::Dot,
                TokenKind::Equals,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Semicolon,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Endl,
                TokenKind::Eos,
            ]
        );
    }

    #[test]
    fn test_columns_follow_consumed_characters() {
        let tokens = Lexer::new("( )\n)").tokenize();
        let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 1), (1, 3), (1, 4), (2, 5), (2, 6)]);
    }

    #[test]
    fn test_endl_reports_line_before_increment() {
        let mut lexer = Lexer::new("\n\n");
        assert_eq!(lexer.next_token().line(), 1);
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.next_token().line(), 2);
        assert_eq!(lexer.line(), 3);
    }

    #[test]
    fn test_empty_source() {
        let mut lexer = Lexer::new("");
        let token = lexer.next_token();
        assert!(token.is_eos());
        assert_eq!(token.column(), 1);
    }

    #[test]
    fn test_eos_is_sticky_without_drift() {
        let mut lexer = Lexer::new("(");
        lexer.next_token();
        let first = lexer.next_token();
        assert!(first.is_eos());
        for _ in 0..10 {
            assert_eq!(lexer.next_token(), first);
            assert_eq!(lexer.peek_token(), first);
        }
        assert_eq!(lexer.column(), 2);
        assert_eq!(lexer.line(), 1);
    }

    #[test]
    fn test_unrecognized_character() {
        let mut lexer = Lexer::new("\u{AE}");
        let token = lexer.next_token();
        assert_eq!(token.error(), Some(&LexError::UnrecognizedCharacter('\u{AE}')));
        assert_eq!(token.column(), 1);
        assert!(lexer.next_token().is_eos());
    }

    #[test]
    fn test_carriage_return_is_unrecognized() {
        assert_eq!(
            kinds("(\r\n"),
            vec![
                TokenKind::LParen,
                TokenKind::Error(LexError::UnrecognizedCharacter('\r')),
                TokenKind::Endl,
                TokenKind::Eos,
            ]
        );
    }

    #[test]
    fn test_peek_then_next() {
        let mut lexer = Lexer::new("()");
        assert_eq!(lexer.peek_token().kind(), &TokenKind::LParen);
        assert_eq!(lexer.next_token().kind(), &TokenKind::LParen);
        assert_eq!(lexer.peek_token().kind(), &TokenKind::RParen);
        assert_eq!(lexer.next_token().kind(), &TokenKind::RParen);
        assert!(lexer.peek_token().is_eos());
        assert!(lexer.next_token().is_eos());
    }

    #[test]
    fn test_repeated_peek_is_stable() {
        let mut lexer = Lexer::new("  fred = 1");
        let first = lexer.peek_token();
        assert_eq!(lexer.peek_token(), first);
        assert_eq!(lexer.peek_token(), first);
        assert_eq!(lexer.position(), 0);
        assert_eq!(lexer.column(), 0);
        assert_eq!(lexer.next_token(), first);
    }

    #[test]
    fn test_peek_across_newline_advances_line() {
        let mut lexer = Lexer::new("(\n)");
        lexer.next_token();

        let peeked = lexer.peek_token();
        assert_eq!(peeked.kind(), &TokenKind::Endl);
        assert_eq!(peeked.line(), 1);
        assert_eq!(lexer.line(), 2);

        let consumed = lexer.next_token();
        assert_eq!(consumed.kind(), &TokenKind::Endl);
        assert_eq!(consumed.line(), 2);
        assert_eq!(lexer.next_token().line(), 3);
    }

    #[test]
    fn test_errors_reported_once_by_next_only() {
        let mut lexer = Lexer::new("$ @");
        lexer.peek_token();
        lexer.peek_token();
        assert!(!lexer.handler().has_errors());

        lexer.next_token();
        lexer.next_token();
        assert_eq!(lexer.handler().error_count(), 2);

        let diagnostics = lexer.handler().diagnostics();
        assert_eq!(diagnostics[0].message, "unrecognized character '$'");
        assert_eq!(diagnostics[0].code, Some(LexError::UnrecognizedCharacter('$').code()));
        assert_eq!(diagnostics[0].span, Span::new(0, 1, 1, 1));
        assert_eq!(diagnostics[1].span.column, 3);
    }

    #[test]
    fn test_iterator_stops_before_eos() {
        let tokens: Vec<TokenKind> = Lexer::new("a, b").map(Token::into_kind).collect();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Identifier("a".to_string()),
                TokenKind::Comma,
                TokenKind::Identifier("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_reader() {
        let mut lexer = Lexer::from_reader("()\n".as_bytes()).unwrap();
        assert_eq!(
            lexer.tokenize().len(),
            4,
            "LPAREN RPAREN ENDL EOS expected"
        );
    }
}
