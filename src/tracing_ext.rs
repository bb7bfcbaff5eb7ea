//! Tracing integration for failure-rail.
//!
//! Emits one `tracing` event per failure with its code, message and info as
//! structured fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! failure-rail = { version = "0.1", features = ["tracing"] }
//! ```
use core::error::Error as StdError;

use crate::config::config;
use crate::types::FailureRecord;

/// Logs `err` as an `ERROR` event.
///
/// The user facing message is the event text. The event also carries
/// `code` (the configured unknown code when there is none), `info` and
/// `error` (the one-line rendering).
pub fn log_failure(err: &(dyn StdError + 'static)) {
    let record = FailureRecord::of(err);
    let code = record.code.as_deref().unwrap_or(config().unknown_code.error_code());

    tracing::error!(code, info = ?record.info, error = %record.error, "{}", record.message);
}

/// Extension trait logging the error side of a `Result`.
///
/// # Example
///
/// ```rust,ignore
/// use failure_rail::tracing_ext::TraceResultExt;
///
/// fn handler() -> Result<(), Failure> {
///     load_user(id).trace_err()?;
///     Ok(())
/// }
/// ```
pub trait TraceResultExt {
    /// Logs the error, if any, and returns `self` unchanged.
    fn trace_err(self) -> Self;
}

impl<T, E> TraceResultExt for Result<T, E>
where
    E: StdError + 'static,
{
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(err) = &self {
            log_failure(err);
        }
        self
    }
}
