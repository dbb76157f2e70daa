//! Whitespace and comment skipping.
//!
//! Torq has line comments only: `#` through the end of the line.

use crate::chars::is_blank;
use crate::Lexer;

impl Lexer {
    /// Skips blanks and comments starting at an already-consumed character.
    ///
    /// Returns the first consumed character that is neither blank nor the
    /// start of a comment, or `None` at end of input. The newline ending a
    /// comment is consumed with it and does not advance the line counter.
    pub(crate) fn skip_whitespace_and_comments(
        &mut self,
        mut current: Option<char>,
    ) -> Option<char> {
        loop {
            match current {
                Some(c) if is_blank(c) => current = self.cursor.advance(),
                Some('#') => {
                    self.skip_line_comment();
                    current = self.cursor.advance();
                },
                _ => return current,
            }
        }
    }

    /// Skips the rest of a comment, including its newline if present.
    fn skip_line_comment(&mut self) {
        while !matches!(self.cursor.peek_char(1), None | Some('\n')) {
            self.cursor.advance();
        }
        if self.cursor.peek_char(1) == Some('\n') {
            self.cursor.advance();
        }
    }
}
