//! Standard wrappers.
//!
//! Each wrapper attaches one attribute to a chain. They are plain values, so
//! a wrapper can be built once and reused for many failures.
//!
//! # Examples
//!
//! ```
//! use failure_rail::{custom, message, with_code, with_info, Failure, Info, StringCode};
//!
//! let err = custom(
//!     Failure::msg("connection reset"),
//!     (
//!         message("Please try again later."),
//!         with_code(StringCode::new("unavailable")),
//!         with_info(Info::new().with("host", "db-1")),
//!     ),
//! );
//!
//! assert_eq!(err.message(), "Please try again later.");
//! assert_eq!(err.to_string(), "Please try again later.: unavailable: connection reset");
//! ```
use std::borrow::Cow;
use std::fmt::{self, Debug};

use crate::traits::Wrapper;
use crate::types::{AnyCode, CallStack, Code, Failure, Info};

/// Attaches a code.
#[derive(Debug, Clone)]
pub struct WithCode(AnyCode);

/// Attaches `code`.
#[inline]
pub fn with_code<C: Code>(code: C) -> WithCode {
    WithCode(AnyCode::new(code))
}

impl From<AnyCode> for WithCode {
    #[inline]
    fn from(code: AnyCode) -> Self {
        Self(code)
    }
}

impl Wrapper for WithCode {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        err.with_code(self.0.clone())
    }
}

/// Attaches an info map.
#[derive(Debug, Clone)]
pub struct WithInfo(Info);

/// Attaches `info`.
#[inline]
pub fn with_info(info: Info) -> WithInfo {
    WithInfo(info)
}

impl Wrapper for WithInfo {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        err.with_info(self.0.clone())
    }
}

/// Attaches a user facing message.
#[derive(Debug, Clone)]
pub struct Message(Cow<'static, str>);

/// Attaches `message`.
#[inline]
pub fn message(message: impl Into<Cow<'static, str>>) -> Message {
    Message(message.into())
}

impl Wrapper for Message {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        err.with_message(self.0.clone())
    }
}

/// Attaches the call stack captured when the wrapper was built.
#[derive(Debug, Clone)]
pub struct WithCallStack(CallStack);

/// Captures the call stack of the caller.
#[track_caller]
#[inline]
pub fn with_call_stack() -> WithCallStack {
    with_call_stack_skip(0)
}

/// Captures the call stack of the caller, dropping `skip` more frames.
///
/// Helpers that build failures for their callers pass `1` to point the stack
/// at their own caller.
#[track_caller]
pub fn with_call_stack_skip(skip: usize) -> WithCallStack {
    WithCallStack(CallStack::capture(skip))
}

impl WithCallStack {
    /// The captured stack.
    #[inline]
    pub fn call_stack(&self) -> &CallStack {
        &self.0
    }
}

impl Wrapper for WithCallStack {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        err.with_call_stack(self.0.clone())
    }
}

/// Hides every code below it from [`code_of`](crate::code_of).
#[derive(Debug, Clone, Copy, Default)]
pub struct WithoutCode;

/// Hides every code below the new link.
#[inline]
pub fn without_code() -> WithoutCode {
    WithoutCode
}

impl Wrapper for WithoutCode {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        err.without_code()
    }
}

/// Adapts a closure into a [`Wrapper`].
#[derive(Clone)]
pub struct WrapperFn<F>(F);

/// Wraps with an arbitrary closure.
#[inline]
pub fn wrapper_fn<F>(f: F) -> WrapperFn<F>
where
    F: Fn(Failure) -> Failure,
{
    WrapperFn(f)
}

impl<F> Wrapper for WrapperFn<F>
where
    F: Fn(Failure) -> Failure,
{
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        (self.0)(err)
    }
}

impl<F> Debug for WrapperFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperFn").finish_non_exhaustive()
    }
}
