//! Operator lexing.
//!
//! Single-character punctuation is mapped directly by the dispatcher.
//! This module handles the operators that have a paired `=` form.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes `=`, `>`, `<` or `!`, taking a following `=` if present.
    ///
    /// The paired form is reported at the column of its first character.
    pub(crate) fn lex_paired(&mut self, single: TokenKind, paired: TokenKind) -> Token {
        if self.cursor.peek_char(1) == Some('=') {
            self.cursor.advance();
            self.make_token(paired)
        } else {
            self.make_token(single)
        }
    }
}
