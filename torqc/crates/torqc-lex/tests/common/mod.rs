//! Shared helpers for the torqc-lex integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use torqc_lex::{Lexer, Token, TokenKind};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
///
/// Verbosity follows `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Path of a file under `tests/data`.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Every token kind up to and including EOS.
pub fn kinds(lexer: &mut Lexer) -> Vec<TokenKind> {
    lexer.tokenize().into_iter().map(Token::into_kind).collect()
}
