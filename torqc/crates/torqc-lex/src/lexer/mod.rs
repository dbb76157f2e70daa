//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the next/peek contract
//! - `comment` - Whitespace and comment skipping
//! - `operator` - Operators with a paired `=` form
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `identifier` - Identifier and keyword lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
