//! Building failure chains.
//!
//! [`custom`] is the primitive: it applies a list of wrappers to a base
//! error. The other constructors are built on it and always finish with a
//! call stack captured at their caller:
//!
//! - [`new`] starts a chain from a bare code.
//! - [`translate`] gives an existing error a new code.
//! - [`wrap`] adds wrappers without changing the code.
//! - [`mark_unexpected`] hides every code the error already had.
//! - [`unexpected`] starts a chain from a plain message without any code.
//!
//! The absence of an error is `Ok`; see [`ResultExt`](crate::ResultExt) for
//! wrapping `Result`s without touching the success path.
//!
//! # Examples
//!
//! ```
//! use failure_rail::{code_of, message, new, translate, wrap, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("not_found");
//! const FORBIDDEN: StringCode = StringCode::new("forbidden");
//!
//! let err = new(NOT_FOUND, (message("No such user."),));
//! let err = wrap(translate(err, FORBIDDEN, ()), ());
//!
//! assert_eq!(code_of(&err).unwrap(), FORBIDDEN);
//! assert_eq!(err.message(), "No such user.");
//! ```
use std::borrow::Cow;

use crate::config::config;
use crate::traits::Wrappers;
use crate::types::{AnyCode, CallStack, Code, Failure, IntoFailure};

/// Applies `wrappers` to `err`; the first wrapper ends up outermost.
///
/// No call stack is added.
///
/// ```
/// use failure_rail::{custom, message, Failure};
///
/// let err = custom(Failure::msg("foo"), (message("aaa"), message("bbb")));
/// assert_eq!(err.to_string(), "aaa: bbb: foo");
/// ```
#[inline]
pub fn custom<W: Wrappers>(err: impl IntoFailure, wrappers: W) -> Failure {
    wrappers.wrap_all(err.into_failure())
}

/// Starts a chain classified by `code`.
#[track_caller]
pub fn new<C: Code, W: Wrappers>(code: C, wrappers: W) -> Failure {
    stacked(wrappers.wrap_all(Failure::coded(code)))
}

/// Gives `err` the new `code`, shadowing any code it already had.
#[track_caller]
pub fn translate<C: Code, W: Wrappers>(err: impl IntoFailure, code: C, wrappers: W) -> Failure {
    let coded = err.into_failure().with_code(AnyCode::new(code));
    stacked(wrappers.wrap_all(coded))
}

/// Adds wrappers and a call stack to `err` without changing its code.
#[track_caller]
pub fn wrap<W: Wrappers>(err: impl IntoFailure, wrappers: W) -> Failure {
    stacked(custom(err, wrappers))
}

/// Marks `err` as a failure that should not happen.
///
/// Every code `err` already had becomes unreachable to
/// [`code_of`](crate::code_of); a code attached through `wrappers` stays
/// visible.
#[track_caller]
pub fn mark_unexpected<W: Wrappers>(err: impl IntoFailure, wrappers: W) -> Failure {
    stacked(wrappers.wrap_all(err.into_failure().without_code()))
}

/// Starts a chain from a plain message, without any code.
#[track_caller]
pub fn unexpected<W: Wrappers>(msg: impl Into<Cow<'static, str>>, wrappers: W) -> Failure {
    stacked(wrappers.wrap_all(Failure::msg(msg)))
}

#[track_caller]
#[inline]
fn stacked(err: Failure) -> Failure {
    err.with_call_stack(CallStack::capture(config().call_stack_skip))
}
