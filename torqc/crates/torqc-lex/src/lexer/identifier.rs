//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl Lexer {
    /// Lexes an identifier or keyword whose first character is consumed.
    ///
    /// Keywords are matched exactly; anything else is an identifier
    /// carrying its text.
    pub(crate) fn lex_identifier(&mut self, first: char) -> Token {
        let mut name = String::from(first);

        while let Some(c) = self.cursor.peek_char(1).filter(|&c| is_ident_continue(c)) {
            self.cursor.advance();
            name.push(c);
        }

        let kind = keyword_from_ident(&name).unwrap_or(TokenKind::Identifier(name));
        self.make_token(kind)
    }
}
