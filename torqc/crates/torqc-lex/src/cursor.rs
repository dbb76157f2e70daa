//! Character cursor for traversing source code.
//!
//! This module provides the [`Cursor`] struct, the lexer's character
//! source. The source is buffered once as a sequence of `char`s and the
//! cursor is an index into it, so saving and restoring a position for
//! lookahead is a copy of two integers.

use std::io::Read;

use torqc_util::SourceResult;

/// A cursor over buffered source text.
///
/// The cursor also owns the column counter: every consumed character
/// increments it, newlines included, and it is never reset at the start
/// of a line. Consuming past the last character takes one virtual EOF
/// sentinel (the column still increments once); after that, advancing is
/// a no-op that keeps returning `None`.
///
/// # Example
///
/// ```
/// use torqc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.peek_char(1), Some('a'));
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.column(), 1);
/// assert_eq!(cursor.advance(), Some('b'));
/// assert_eq!(cursor.advance(), None);
/// assert_eq!(cursor.column(), 3);
/// assert_eq!(cursor.advance(), None);
/// assert_eq!(cursor.column(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The buffered source text.
    chars: Vec<char>,

    /// Number of consumed characters, counting the EOF sentinel.
    ///
    /// Ranges over `0..=chars.len() + 1`.
    position: usize,

    /// Column of the most recently consumed character (0 before any).
    column: u32,
}

impl Cursor {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            column: 0,
        }
    }

    /// Creates a cursor by reading an open stream to its end.
    ///
    /// The stream is read from its current position. Ownership of the
    /// reader stays with the caller when a `&mut` reference is passed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`](torqc_util::SourceError::Io) if the
    /// stream cannot be read or is not valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use torqc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::from_reader("()\n".as_bytes()).unwrap();
    /// assert_eq!(cursor.len(), 3);
    /// ```
    pub fn from_reader<R: Read>(mut reader: R) -> SourceResult<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self::new(&source))
    }

    /// Consumes and returns the next character.
    ///
    /// Returns `None` once the source is exhausted. The first call at the
    /// end consumes the EOF sentinel and increments the column; later
    /// calls change nothing.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        if self.position > self.chars.len() {
            return None;
        }
        let c = self.chars.get(self.position).copied();
        self.position += 1;
        self.column += 1;
        c
    }

    /// Returns the character `offset` positions ahead without consuming.
    ///
    /// `offset = 1` is the next character [`advance`](Self::advance) would
    /// return. Returns `None` past the end of the source and for
    /// `offset = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use torqc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek_char(1), Some('a'));
    /// assert_eq!(cursor.peek_char(2), Some('b'));
    /// assert_eq!(cursor.peek_char(4), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        let index = (self.position + offset).checked_sub(1)?;
        self.chars.get(index).copied()
    }

    /// Steps back over the most recently consumed character.
    ///
    /// Restores both the offset and the column. Does nothing before the
    /// first character has been consumed.
    #[inline]
    pub fn rewind(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.column = self.column.saturating_sub(1);
        }
    }

    /// Returns true if no source characters remain to be consumed.
    ///
    /// The EOF sentinel may still be pending; [`advance`](Self::advance)
    /// will return `None` either way.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns the column of the most recently consumed character.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the number of characters consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of characters in the source.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Creates a snapshot of the offset and column.
    ///
    /// # Example
    ///
    /// ```
    /// use torqc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.position(), 0);
    /// assert_eq!(cursor.peek_char(1), Some('l'));
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Number of consumed characters.
    pub position: usize,
    /// Column counter.
    pub column: u32,
}
