//! Lexical error taxonomy.
//!
//! A [`LexError`] never escapes the lexer as an `Err`: it travels inside
//! an ERROR token, and `next_token` additionally reports it to the
//! lexer's diagnostic handler.

use thiserror::Error;
use torqc_util::DiagnosticCode;

/// A lexical error detected while scanning a token.
///
/// The `Display` text is the diagnostic message carried by the ERROR
/// token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(char),

    /// An unsupported `\` escape inside a string literal.
    #[error("invalid escape character '\\{0}' in string literal")]
    InvalidEscapeCharacter(char),

    /// A single-line string broken by a raw newline or end of input.
    #[error("Unterminated string literal")]
    UnterminatedString,

    /// A triple-quoted string with no closing `"""`.
    #[error("unclosed multi-line string")]
    UnclosedMultiLineString,

    /// An exponent marker not followed by a digit or a signed digit.
    #[error("incomplete float literal")]
    IncompleteFloatLiteral,

    /// A `0x` literal with no digits or a value outside `i64`.
    #[error("Unable to convert hex literal to integer")]
    InvalidHexLiteral,

    /// A `0b` literal with no digits or a value outside `i64`.
    #[error("Unable to convert binary literal to integer")]
    InvalidBinaryLiteral,

    /// A decimal literal outside `i64`.
    #[error("Error converting decimal number literal")]
    InvalidDecimalLiteral,

    /// A float literal that does not parse to a finite `f64`.
    #[error("Error converting float number literal")]
    InvalidFloatLiteral,
}

impl LexError {
    /// Returns the diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnrecognizedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::InvalidEscapeCharacter(_) => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexError::UnterminatedString | LexError::UnclosedMultiLineString => {
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING
            },
            LexError::IncompleteFloatLiteral
            | LexError::InvalidHexLiteral
            | LexError::InvalidBinaryLiteral
            | LexError::InvalidDecimalLiteral
            | LexError::InvalidFloatLiteral => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }

    /// Returns the error for a failed conversion in the given base.
    pub(crate) fn invalid_integer(base: u32) -> Self {
        match base {
            16 => LexError::InvalidHexLiteral,
            2 => LexError::InvalidBinaryLiteral,
            _ => LexError::InvalidDecimalLiteral,
        }
    }
}
