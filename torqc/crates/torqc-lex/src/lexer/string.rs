//! String literal lexing.
//!
//! Two forms exist: single-line strings in `"..."`, and triple-quoted
//! strings in `"""..."""` that may span lines. Both decode the same
//! escapes.

use crate::chars::unescape;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes a string literal.
    ///
    /// Called with the opening `"` already consumed. A successful token is
    /// positioned at the opening delimiter.
    pub(crate) fn lex_string(&mut self) -> Token {
        match (self.cursor.peek_char(1), self.cursor.peek_char(2)) {
            (Some('"'), Some('"')) => {
                self.cursor.advance();
                self.cursor.advance();
                self.lex_multi_line_string()
            },
            (Some('"'), _) => {
                self.cursor.advance();
                self.make_token(TokenKind::String(String::new()))
            },
            _ => self.lex_single_line_string(),
        }
    }

    fn lex_single_line_string(&mut self) -> Token {
        let mut content = String::new();

        loop {
            match self.cursor.advance() {
                None => return self.error_token(LexError::UnterminatedString),
                Some('"') => return self.make_token(TokenKind::String(content)),
                Some('\\') => match self.lex_escape() {
                    Ok(c) => content.push(c),
                    Err(error) => return self.error_token(error),
                },
                Some('\n') => {
                    self.line += 1;
                    return self.error_token(LexError::UnterminatedString);
                },
                Some(c) => content.push(c),
            }
        }
    }

    fn lex_multi_line_string(&mut self) -> Token {
        let mut content = String::new();

        loop {
            match self.cursor.advance() {
                None => return self.error_token(LexError::UnclosedMultiLineString),
                Some('"')
                    if self.cursor.peek_char(1) == Some('"')
                        && self.cursor.peek_char(2) == Some('"') =>
                {
                    self.cursor.advance();
                    self.cursor.advance();
                    return self.make_token(TokenKind::String(content));
                },
                Some('\\') => match self.lex_escape() {
                    Ok(c) => content.push(c),
                    Err(LexError::UnterminatedString) => {
                        return self.error_token(LexError::UnclosedMultiLineString)
                    },
                    Err(error) => return self.error_token(error),
                },
                Some('\n') => {
                    self.line += 1;
                    content.push('\n');
                },
                Some(c) => content.push(c),
            }
        }
    }

    /// Decodes the character after a `\`.
    fn lex_escape(&mut self) -> Result<char, LexError> {
        match self.cursor.advance() {
            None => Err(LexError::UnterminatedString),
            Some(c) => unescape(c).ok_or(LexError::InvalidEscapeCharacter(c)),
        }
    }
}
