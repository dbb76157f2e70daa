//! torqc-util - Core Utilities and Foundation Types
//!
//! This crate provides the types shared by every phase of the torqc
//! toolchain: source locations, diagnostic codes, diagnostics and the
//! handler that collects them, and the error types raised when a source
//! cannot be loaded.
//!
//! # Module Structure
//!
//! - [`span`] - Source location tracking
//! - [`diagnostic`] - Error reporting infrastructure
//! - [`error`] - Infrastructure error types
//!
//! # Example
//!
//! ```
//! use torqc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(3, 4, 1, 4))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceError, SourceResult};
pub use span::Span;
