//! Errors surfaced by the widget settings store.
//!
//! Absent values never show up here; they resolve to per-field defaults.

use coinwidget_store::StoreError;
use thiserror::Error;

/// Result type for settings operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors produced while reading or writing a widget's settings.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The underlying preference store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A blob is present for the widget but is not a JSON object.
    #[error("malformed settings blob")]
    MalformedBlob {
        /// Widget whose blob failed to parse.
        widget_id: i32,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A stored field could not be parsed into its type.
    #[error("invalid settings value")]
    InvalidValue {
        /// Field name in the blob.
        key: &'static str,
        /// Raw stored text.
        value: String,
        /// Static reason for the failure.
        reason: &'static str,
    },
    /// A stored name does not match any known variant.
    #[error("unknown {kind} name")]
    UnknownVariant {
        /// Enumeration being looked up (`coin`, `exchange`).
        kind: &'static str,
        /// Raw stored text.
        value: String,
    },
}
