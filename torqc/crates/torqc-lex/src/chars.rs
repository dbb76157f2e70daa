//! Character classification used by the token dispatcher and sub-scanners.
//!
//! Torq source is classified with ASCII rules only: identifiers, digits
//! and blanks never match non-ASCII characters, which therefore fall
//! through to the unrecognized-character error.

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use torqc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use torqc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('+'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// Only bases 2, 10 and 16 have literal syntax in Torq; any other base
/// accepts nothing.
///
/// # Example
///
/// ```
/// use torqc_lex::chars::is_digit_in_base;
///
/// assert!(is_digit_in_base('9', 10));
/// assert!(!is_digit_in_base('a', 10));
/// assert!(is_digit_in_base('f', 16));
/// assert!(is_digit_in_base('F', 16));
/// assert!(is_digit_in_base('1', 2));
/// assert!(!is_digit_in_base('2', 2));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Checks if a character is intra-line whitespace (space, tab, form feed).
///
/// Newlines are significant tokens and are not blank.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Decodes the character following a `\` in a string literal.
///
/// Returns `None` for an unsupported escape.
///
/// # Example
///
/// ```
/// use torqc_lex::chars::unescape;
///
/// assert_eq!(unescape('n'), Some('\n'));
/// assert_eq!(unescape('"'), Some('"'));
/// assert_eq!(unescape('q'), None);
/// ```
#[inline]
pub fn unescape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        '"' => Some('"'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}
