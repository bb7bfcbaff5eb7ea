//! Extension trait for wrapping the error side of a `Result`.
//!
//! `Ok` plays the role of "no error": every method leaves it untouched,
//! captures no call stack and reports no code.
//!
//! # Examples
//!
//! ```
//! use failure_rail::{message, Failure, ResultExt, StringCode};
//!
//! const CONFIG: StringCode = StringCode::new("config");
//!
//! fn load_config() -> Result<String, Failure> {
//!     std::fs::read_to_string("/definitely/missing.toml")
//!         .translate(CONFIG, (message("The configuration could not be read."),))
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.is(&[&CONFIG]));
//! ```
use core::error::Error as StdError;

use crate::chain;
use crate::inspect;
use crate::traits::Wrappers;
use crate::types::{AnyCode, Code, Failure};

/// Wrapping and inspection for `Result`s.
pub trait ResultExt<T, E> {
    /// See [`chain::custom`].
    fn custom<W: Wrappers>(self, wrappers: W) -> Result<T, Failure>;

    /// See [`chain::wrap`].
    fn wrap<W: Wrappers>(self, wrappers: W) -> Result<T, Failure>;

    /// Like [`wrap`](ResultExt::wrap), building the wrappers only on `Err`.
    fn wrap_with<W, F>(self, f: F) -> Result<T, Failure>
    where
        W: Wrappers,
        F: FnOnce() -> W;

    /// See [`chain::translate`].
    fn translate<C: Code, W: Wrappers>(self, code: C, wrappers: W) -> Result<T, Failure>;

    /// See [`chain::mark_unexpected`].
    fn mark_unexpected<W: Wrappers>(self, wrappers: W) -> Result<T, Failure>;

    /// Effective code of the error; `None` for `Ok`.
    fn code(&self) -> Option<AnyCode>;

    /// Whether the effective code is one of `codes`; `false` for `Ok`.
    fn is(&self, codes: &[&dyn Code]) -> bool;

    /// Whether there is no effective code; `true` for `Ok`.
    fn is_uncoded(&self) -> bool;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn custom<W: Wrappers>(self, wrappers: W) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(chain::custom(err, wrappers)),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap<W: Wrappers>(self, wrappers: W) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(chain::wrap(err, wrappers)),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_with<W, F>(self, f: F) -> Result<T, Failure>
    where
        W: Wrappers,
        F: FnOnce() -> W,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(chain::wrap(err, f())),
        }
    }

    #[track_caller]
    #[inline]
    fn translate<C: Code, W: Wrappers>(self, code: C, wrappers: W) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(chain::translate(err, code, wrappers)),
        }
    }

    #[track_caller]
    #[inline]
    fn mark_unexpected<W: Wrappers>(self, wrappers: W) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(chain::mark_unexpected(err, wrappers)),
        }
    }

    #[inline]
    fn code(&self) -> Option<AnyCode> {
        self.as_ref().err().and_then(|err| inspect::code_of(err))
    }

    #[inline]
    fn is(&self, codes: &[&dyn Code]) -> bool {
        self.as_ref().err().is_some_and(|err| inspect::is(err, codes))
    }

    #[inline]
    fn is_uncoded(&self) -> bool {
        self.as_ref().err().map_or(true, |err| inspect::is_uncoded(err))
    }
}
