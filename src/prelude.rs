//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use failure_rail::prelude::*;
//!
//! const NOT_FOUND: StringCode = StringCode::new("not_found");
//!
//! fn find(id: u32) -> FailureResult<String> {
//!     Err(new!(NOT_FOUND, message("No such item."), info!("id" => id)))
//! }
//!
//! let err = find(7).unwrap_err();
//! assert!(is(&err, &[&NOT_FOUND]));
//! assert_eq!(message_of(&err), "No such item.");
//! ```

// Macros
pub use crate::{custom, info, mark_unexpected, new, translate, unexpected, wrap};

// Core types
pub use crate::types::{AnyCode, Code, Failure, FailureResult, Info, StringCode};

// Wrappers
pub use crate::wrappers::{message, with_call_stack, with_code, with_info, without_code};

// Accessors
pub use crate::inspect::{call_stack_of, cause_of, code_of, info_list_of, is, message_of};

// Traits
pub use crate::traits::{ResultExt, Wrapper};
pub use crate::types::IntoFailure;
