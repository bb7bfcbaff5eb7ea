//! Error chains with codes, messages, info and call stacks.
//!
//! A [`Failure`] is a chain of links. Each link adds one attribute to the
//! error below it: a [`Code`] that classifies it, a user facing message, an
//! [`Info`] map for logs, or a [`CallStack`]. The chain is built with a small
//! set of constructors and read back with accessors that each apply a fixed
//! policy:
//!
//! - [`new`], [`translate`], [`wrap`], [`mark_unexpected`] and [`unexpected`]
//!   build chains and record where they were called from.
//! - [`code_of`], [`message_of`], [`info_list_of`], [`call_stack_of`] and
//!   [`cause_of`] read attributes back.
//! - [`is`] compares the effective code against a list of candidates.
//!
//! Any `std::error::Error + Send + Sync + 'static` can start a chain, and
//! failures stored as the `source()` of foreign errors are still found by the
//! accessors.
//!
//! # Examples
//!
//! ## Classifying and translating
//!
//! ```
//! use failure_rail::{code_of, is, message, new, translate, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("not_found");
//! const FORBIDDEN: StringCode = StringCode::new("forbidden");
//!
//! let err = new(NOT_FOUND, (message("No such document."),));
//! assert!(is(&err, &[&NOT_FOUND]));
//!
//! let err = translate(err, FORBIDDEN, ());
//! assert_eq!(code_of(&err).unwrap(), FORBIDDEN);
//! assert!(!is(&err, &[&NOT_FOUND]));
//! ```
//!
//! ## Wrapping foreign errors
//!
//! ```
//! use failure_rail::{info, message_of, ResultExt, StringCode};
//!
//! const IO: StringCode = StringCode::new("io");
//!
//! let result = std::fs::read_to_string("/definitely/missing")
//!     .translate(IO, (info!("path" => "/definitely/missing"),));
//!
//! let err = result.unwrap_err();
//! assert!(err.is(&[&IO]));
//! assert_eq!(message_of(&err), failure_rail::config::DEFAULT_MESSAGE);
//! ```
//!
//! ## Hiding codes
//!
//! ```
//! use failure_rail::{is_uncoded, mark_unexpected, new, StringCode};
//!
//! let err = mark_unexpected(new(StringCode::new("conflict"), ()), ());
//! assert!(is_uncoded(&err));
//! ```

/// Chain constructors
pub mod chain;
/// Process-wide settings
pub mod config;
/// Accessors reading attributes back from a chain
pub mod inspect;
/// Variadic constructor macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Wrapper traits and the `Result` extension trait
pub mod traits;
/// Failure, codes, info, call stacks and chain traversal
pub mod types;
/// Standard wrappers
pub mod wrappers;

/// Structured logging of failures (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{custom, mark_unexpected, new, translate, unexpected, wrap};
pub use inspect::{
    call_stack_of, cause_of, code_of, code_or_unknown, find_message, info_list_of, is,
    is_uncoded, message_of, record_of, report_of,
};
pub use traits::{ResultExt, Wrapper, Wrappers};
pub use types::{
    chain, AnyCode, BoxError, CallStack, Chain, Code, ErrorVec, Failure, FailureRecord,
    FailureResult, Frame, Info, InfoValue, IntoFailure, Link, LinkKind, ReportBuilder,
    ReportConfig, StringCode, UNKNOWN,
};
pub use wrappers::{
    message, with_call_stack, with_call_stack_skip, with_code, with_info, without_code,
    wrapper_fn, Message, WithCallStack, WithCode, WithInfo, WithoutCode, WrapperFn,
};
