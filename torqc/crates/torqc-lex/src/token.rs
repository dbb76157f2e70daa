//! Token definitions for the Torq language.
//!
//! A [`Token`] is an immutable record of one classified span of source:
//! its [`TokenKind`] and the line and column where it begins. Literal,
//! identifier and error kinds carry their value inside the variant, so a
//! payload can never be attached to the wrong kind.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::LexError;

/// The kind of a token, with its payload where the kind has one.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // === Grouping ===
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // === Separators ===
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,

    // === Assignment and comparison ===
    /// `=`
    Assign,
    /// `==`
    Equals,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `!`
    Bang,
    /// `!=`
    NotEq,

    // === Arithmetic ===
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    // === Literals ===
    /// Integer literal (decimal, `0x` hex or `0b` binary)
    Integer(i64),
    /// Floating-point literal
    Float(f64),
    /// String literal, escapes already decoded
    String(String),
    /// Identifier
    Identifier(String),

    // === Keywords ===
    /// `import`
    Import,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `end`
    End,
    /// `while`
    While,
    /// `for`
    For,
    /// `do`
    Do,
    /// `break`
    Break,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,
    /// `int`
    IntType,
    /// `float`
    FloatType,
    /// `string`
    StringType,
    /// `fn`
    Fn,

    // === Special ===
    /// End of line
    Endl,
    /// End of input
    Eos,
    /// Lexical error, with the diagnostic it carries
    Error(LexError),
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("import", TokenKind::Import),
        ("if", TokenKind::If),
        ("then", TokenKind::Then),
        ("else", TokenKind::Else),
        ("end", TokenKind::End),
        ("while", TokenKind::While),
        ("for", TokenKind::For),
        ("do", TokenKind::Do),
        ("break", TokenKind::Break),
        ("return", TokenKind::Return),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("int", TokenKind::IntType),
        ("float", TokenKind::FloatType),
        ("string", TokenKind::StringType),
        ("fn", TokenKind::Fn),
    ]
    .into_iter()
    .collect()
});

/// Looks up a reserved word.
///
/// Returns the keyword's kind on an exact, case-sensitive match.
///
/// # Example
///
/// ```
/// use torqc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("fred"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).cloned()
}

impl TokenKind {
    /// Returns true for reserved-word kinds.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Import
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Do
                | TokenKind::Break
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
                | TokenKind::IntType
                | TokenKind::FloatType
                | TokenKind::StringType
                | TokenKind::Fn
        )
    }

    /// Returns true for integer, float and string literals.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer(_) | TokenKind::Float(_) | TokenKind::String(_)
        )
    }

    /// Returns the source spelling of fixed tokens, or a description of
    /// the category for tokens that carry a value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Assign => "=",
            TokenKind::Equals => "==",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Bang => "!",
            TokenKind::NotEq => "!=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Integer(_) => "integer literal",
            TokenKind::Float(_) => "float literal",
            TokenKind::String(_) => "string literal",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Import => "import",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Do => "do",
            TokenKind::Break => "break",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::IntType => "int",
            TokenKind::FloatType => "float",
            TokenKind::StringType => "string",
            TokenKind::Fn => "fn",
            TokenKind::Endl => "end of line",
            TokenKind::Eos => "end of input",
            TokenKind::Error(_) => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(value) => write!(f, "{}", value),
            TokenKind::Float(value) => write!(f, "{:?}", value),
            TokenKind::String(text) => write!(f, "\"{}\"", text.escape_debug()),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Error(error) => write!(f, "error: {}", error),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// A token: its kind and the 1-based line and column where it begins.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    line: u32,
    column: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    /// Returns the token's kind.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token, returning its kind.
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the line where the token begins.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column where the token begins.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true for the end-of-input token.
    pub fn is_eos(&self) -> bool {
        self.kind == TokenKind::Eos
    }

    /// Returns true for an ERROR token.
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    /// Returns the error carried by an ERROR token.
    pub fn error(&self) -> Option<&LexError> {
        match &self.kind {
            TokenKind::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the text payload of a string or identifier token.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::String(text) | TokenKind::Identifier(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of an integer token.
    pub fn integer(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of a float token.
    pub fn float(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)
    }
}
