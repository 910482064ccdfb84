use std::fmt;

/// Byte range within the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// All errors produced by rrul.
///
/// Only parsing can fail; occurrence generation is total and expresses
/// unsatisfiable rules by returning fewer (possibly zero) dates.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum RuleError {
    Parse {
        message: String,
        span: Span,
        input: String,
        suggestion: Option<String>,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RuleError {}

impl RuleError {
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        input: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            span,
            input: input.into(),
            suggestion,
        }
    }

    /// The byte range of the offending fragment.
    pub fn span(&self) -> Span {
        match self {
            Self::Parse { span, .. } => *span,
        }
    }

    /// Format a rich error with underline and optional suggestion.
    pub fn display_rich(&self) -> String {
        match self {
            Self::Parse {
                message,
                span,
                input,
                suggestion,
            } => format_span_error("error", message, span, input, suggestion.as_deref()),
        }
    }
}

fn format_span_error(
    prefix: &str,
    message: &str,
    span: &Span,
    input: &str,
    suggestion: Option<&str>,
) -> String {
    let mut out = format!("{prefix}: {message}\n");
    out.push_str(&format!("  {input}\n"));
    let padding = " ".repeat(span.start + 2);
    let underline = "^".repeat((span.end - span.start).max(1));
    out.push_str(&padding);
    out.push_str(&underline);
    if let Some(sug) = suggestion {
        out.push_str(&format!(" try: \"{sug}\""));
    }
    out
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
