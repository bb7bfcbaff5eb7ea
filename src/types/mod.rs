//! Failure chain types.
//!
//! This module holds the data model: codes, info maps, call stacks, the
//! [`Failure`] link itself, the [`Chain`] iterator that walks it, and the
//! report/record views built on top of the accessors.
//!
//! # Examples
//!
//! ```
//! use failure_rail::{new, translate, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("not_found");
//! const INVALID: StringCode = StringCode::new("invalid");
//!
//! let err = translate(new(NOT_FOUND, ()), INVALID, ());
//!
//! assert!(err.is(&[&INVALID]));
//! assert!(!err.is(&[&NOT_FOUND]));
//! assert_eq!(err.iter().filter(|link| link.code().is_some()).count(), 2);
//! ```
use smallvec::SmallVec;

pub mod call_stack;
pub mod chain_iter;
pub mod code;
pub mod failure;
pub mod info;
pub mod record;
pub mod report;

pub use call_stack::{CallStack, Frame};
pub use chain_iter::{chain, Chain, Link, LinkKind};
pub use code::{AnyCode, Code, StringCode, UNKNOWN};
pub use failure::{BoxError, Failure, IntoFailure};
pub use info::{Info, InfoValue};
pub use record::FailureRecord;
pub use report::{ReportBuilder, ReportConfig};

/// SmallVec-backed collection used for frames and collected infos.
///
/// Uses inline storage for a single element, which covers the common case
/// of one info link per chain without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias that fails with a [`Failure`].
pub type FailureResult<T> = Result<T, Failure>;
