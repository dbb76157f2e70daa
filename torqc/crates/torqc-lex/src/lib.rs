//! torqc-lex - Lexical Analyzer for the Torq Scripting Language
//!
//! This crate turns Torq source text into a stream of tokens for the
//! parser. Every call produces exactly one token; lexical errors are
//! ordinary ERROR tokens, and the end of input is a sticky EOS token.
//!
//! # Example Usage
//!
//! ```
//! use torqc_lex::{Lexer, TokenKind};
//!
//! let source = "if x <= 0x1F then\n  return \"small\"\nend";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token().kind(), &TokenKind::If);
//! assert_eq!(lexer.peek_token().kind(), &TokenKind::Identifier("x".to_string()));
//!
//! // Or iterate through the rest, stopping before EOS
//! let rest: Vec<TokenKind> = lexer.map(|token| token.into_kind()).collect();
//! assert_eq!(rest.len(), 9);
//! assert_eq!(rest[2], TokenKind::Integer(31));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification and escape decoding
//! - [`error`] - Lexical error taxonomy
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `import`, `if`, `then`, `else`, `end`, `while`, `for`, `do`, `break`,
//! `return`, `true`, `false`, `int`, `float`, `string`, `fn`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0123`, `0xFF`, `0b1010`, `1_000`
//! - **Float**: `3.14`, `3e08`, `2.95E-09`
//! - **String**: `"hello\n"`, `"""multi\nline"""`
//!
//! ## Operators and Delimiters
//!
//! `( ) [ ] , . ; = == > >= < <= ! != + - * / %`
//!
//! ## Special
//!
//! - **ENDL**: a newline; lines are significant in Torq
//! - **EOS**: end of input
//! - **ERROR**: a lexical error with its message
//!
//! Comments run from `#` to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
