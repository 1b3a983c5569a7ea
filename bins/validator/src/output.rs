//! Verdict rendering.

use std::io::Write;

use rwa_core::TxError;
use serde::Serialize;

/// Machine-readable outcome of one validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether the change may be applied.
    pub accepted: bool,
    /// Rejection code, e.g. `INVALID_AMOUNT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    /// Human-readable rejection reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Verdict {
    /// An accepted verdict.
    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            accepted: true,
            code: None,
            message: None,
        }
    }

    /// A rejected verdict carrying `error`.
    #[must_use]
    pub fn rejected(error: &TxError) -> Self {
        Self {
            accepted: false,
            code: Some(error.error_code()),
            message: Some(error.to_string()),
        }
    }
}

impl From<Result<(), TxError>> for Verdict {
    fn from(outcome: Result<(), TxError>) -> Self {
        match outcome {
            Ok(()) => Self::accepted(),
            Err(error) => Self::rejected(&error),
        }
    }
}

/// Writes `verdict` as a single JSON document followed by a newline.
pub fn render(mut out: impl Write, verdict: &Verdict, pretty: bool) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, verdict)?;
    } else {
        serde_json::to_writer(&mut out, verdict)?;
    }
    writeln!(out).map_err(serde_json::Error::io)
}
