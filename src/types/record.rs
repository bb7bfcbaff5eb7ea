//! Flat snapshot of a failure chain for structured logs.
use core::error::Error as StdError;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::inspect;
use crate::types::Frame;

/// Attributes of a chain, resolved once.
///
/// Info values are rendered with their `Debug` representation so the record
/// stays serializable whatever was attached.
///
/// # Examples
///
/// ```
/// use failure_rail::{new, with_info, Info, StringCode};
///
/// let err = new(StringCode::new("conflict"), (with_info(Info::new().with("id", 7)),));
/// let record = err.record();
///
/// assert_eq!(record.code.as_deref(), Some("conflict"));
/// assert_eq!(record.info[0]["id"], "7");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    /// One-line rendering of the chain.
    pub error: String,
    /// Identifier of the effective code.
    pub code: Option<String>,
    /// User facing message, the configured default when none was attached.
    pub message: String,
    /// One map per info link, outermost first.
    pub info: Vec<BTreeMap<String, String>>,
    /// Frames of the deepest call stack.
    pub call_stack: Vec<Frame>,
}

impl FailureRecord {
    /// Resolves the attributes of `err`.
    pub fn of(err: &(dyn StdError + 'static)) -> Self {
        Self {
            error: err.to_string(),
            code: inspect::code_of(err).map(|code| code.error_code().to_owned()),
            message: inspect::message_of(err),
            info: inspect::info_list_of(err)
                .iter()
                .map(|info| info.iter().map(|(k, v)| (k.to_owned(), format!("{v:?}"))).collect())
                .collect(),
            call_stack: inspect::call_stack_of(err)
                .map(|stack| stack.frames().to_vec())
                .unwrap_or_default(),
        }
    }
}
