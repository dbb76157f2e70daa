//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use torqc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use torqc_util::Span;
///
/// let diag = DiagnosticBuilder::error("incomplete float literal")
///     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
///     .span(Span::new(0, 3, 1, 1))
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.to_string(), "error[E1003]: incomplete float literal at 1:1");
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the diagnostic without emitting it
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
