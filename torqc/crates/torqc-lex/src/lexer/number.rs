//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use crate::chars::is_digit_in_base;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes the digits of a hexadecimal or binary literal.
    ///
    /// Called with the `0x`/`0b` prefix already consumed. Underscores are
    /// separators and are dropped. The token is positioned at the `0`.
    ///
    /// # Number Formats
    ///
    /// - Hexadecimal: `0xFF`, `0xdead_beef`
    /// - Binary: `0b1010`, `0b0000_0011`
    pub(crate) fn lex_integer(&mut self, base: u32) -> Token {
        let mut digits = String::new();

        while let Some(c) = self.cursor.peek_char(1) {
            if is_digit_in_base(c, base) {
                self.cursor.advance();
                digits.push(c);
            } else if c == '_' {
                self.cursor.advance();
            } else {
                break;
            }
        }

        match i64::from_str_radix(&digits, base) {
            Ok(value) => self.make_token(TokenKind::Integer(value)),
            Err(_) => self.error_token(LexError::invalid_integer(base)),
        }
    }

    /// Lexes a decimal integer or float literal.
    ///
    /// Called with the first digit not yet consumed. A leading `0` has no
    /// octal meaning. At most one `.` joins the literal, and the digits of
    /// an exponent end it.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `0123`, `1_000`
    /// - Float: `3.14`, `5.`, `3e08`, `2.95E-09`, `4.5E+30`
    pub(crate) fn lex_decimal(&mut self) -> Token {
        let mut text = String::new();
        let mut is_float = false;

        while let Some(c) = self.cursor.peek_char(1) {
            match c {
                '0'..='9' => {
                    self.cursor.advance();
                    text.push(c);
                },
                '_' => {
                    self.cursor.advance();
                },
                '.' if !is_float => {
                    self.cursor.advance();
                    text.push('.');
                    is_float = true;
                },
                'e' | 'E' => {
                    self.cursor.advance();
                    text.push('e');
                    is_float = true;
                    if let Err(error) = self.lex_exponent(&mut text) {
                        return self.error_token(error);
                    }
                    break;
                },
                _ => break,
            }
        }

        if is_float {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => self.make_token(TokenKind::Float(value)),
                _ => self.error_token(LexError::InvalidFloatLiteral),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => self.make_token(TokenKind::Integer(value)),
                Err(_) => self.error_token(LexError::InvalidDecimalLiteral),
            }
        }
    }

    /// Lexes the optional sign and the digits after an exponent marker.
    ///
    /// A sign is only consumed when a digit follows it.
    fn lex_exponent(&mut self, text: &mut String) -> Result<(), LexError> {
        match self.cursor.peek_char(1) {
            Some(sign @ ('+' | '-')) => {
                if !self.cursor.peek_char(2).is_some_and(|c| c.is_ascii_digit()) {
                    return Err(LexError::IncompleteFloatLiteral);
                }
                self.cursor.advance();
                text.push(sign);
            },
            Some(c) if c.is_ascii_digit() => {},
            _ => return Err(LexError::IncompleteFloatLiteral),
        }

        while let Some(c) = self.cursor.peek_char(1).filter(char::is_ascii_digit) {
            self.cursor.advance();
            text.push(c);
        }
        Ok(())
    }
}
