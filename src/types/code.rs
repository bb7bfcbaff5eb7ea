//! Error codes used to classify failures.
//!
//! Any type implementing [`Code`] can classify a [`Failure`](crate::Failure).
//! Codes are stored type-erased as [`AnyCode`] and compared by both their
//! concrete type and their identifier, so two unrelated code types that
//! happen to share an identifier never match each other.
//!
//! # Examples
//!
//! ```
//! use failure_rail::{AnyCode, Code, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("not_found");
//!
//! let code = AnyCode::new(NOT_FOUND);
//! assert_eq!(code.error_code(), "not_found");
//! assert!(code.matches(&NOT_FOUND));
//! ```
use core::any::TypeId;
use core::fmt::{self, Debug, Display};
use std::borrow::Cow;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capability of a value to act as an error code.
///
/// The identifier returned by [`error_code`](Code::error_code) must be stable
/// for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use failure_rail::Code;
///
/// #[derive(Debug)]
/// enum DbCode {
///     Conflict,
///     Timeout,
/// }
///
/// impl Code for DbCode {
///     fn error_code(&self) -> &str {
///         match self {
///             DbCode::Conflict => "db.conflict",
///             DbCode::Timeout => "db.timeout",
///         }
///     }
/// }
///
/// assert_eq!(DbCode::Timeout.error_code(), "db.timeout");
/// ```
///
/// The type used for matching is always the implementing type and cannot be
/// overridden:
///
/// ```compile_fail
/// use failure_rail::{Code, StringCode};
/// use std::any::TypeId;
///
/// #[derive(Debug)]
/// struct Impostor;
///
/// impl Code for Impostor {
///     fn error_code(&self) -> &str {
///         "A"
///     }
///
///     fn code_type(&self) -> TypeId {
///         TypeId::of::<StringCode>()
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error code",
    label = "this type does not implement `Code`",
    note = "implement `Code::error_code` or use `StringCode`"
)]
pub trait Code: Debug + Send + Sync + 'static {
    /// Returns the stable identifier of this code.
    fn error_code(&self) -> &str;

    /// Concrete type of the code, used when comparing type-erased codes.
    ///
    /// Takes a token only this crate can name, so implementors cannot
    /// override it.
    #[doc(hidden)]
    fn code_type(&self, _: sealed::Token) -> TypeId {
        TypeId::of::<Self>()
    }
}

mod sealed {
    #[derive(Debug, Clone, Copy)]
    pub struct Token;
}

/// Stock string-backed [`Code`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringCode(Cow<'static, str>);

impl StringCode {
    /// Creates a code from a static identifier; usable in `const` items.
    #[inline]
    pub const fn new(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Creates a code from an owned identifier.
    #[inline]
    pub fn owned(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Returns the identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Code for StringCode {
    #[inline]
    fn error_code(&self) -> &str {
        &self.0
    }
}

impl Display for StringCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for StringCode {
    #[inline]
    fn from(code: &'static str) -> Self {
        Self::new(code)
    }
}

impl From<String> for StringCode {
    #[inline]
    fn from(code: String) -> Self {
        Self::owned(code)
    }
}

/// Fallback code for failures that carry no code.
pub const UNKNOWN: StringCode = StringCode::new("unknown");

/// Type-erased, cheaply clonable [`Code`].
#[derive(Clone)]
pub struct AnyCode(Arc<dyn Code>);

impl AnyCode {
    /// Erases the concrete type of `code`.
    #[inline]
    pub fn new<C: Code>(code: C) -> Self {
        Self(Arc::new(code))
    }

    /// Returns the identifier of the wrapped code.
    #[inline]
    pub fn error_code(&self) -> &str {
        self.0.error_code()
    }

    /// Borrows the wrapped code as a trait object.
    #[inline]
    pub fn as_dyn(&self) -> &dyn Code {
        &*self.0
    }

    /// Returns `true` when `other` has the same concrete type and identifier.
    pub fn matches(&self, other: &dyn Code) -> bool {
        self.0.code_type(sealed::Token) == other.code_type(sealed::Token)
            && self.0.error_code() == other.error_code()
    }

    /// Returns `true` when the wrapped code is of type `C`.
    #[inline]
    pub fn is<C: Code>(&self) -> bool {
        self.0.code_type(sealed::Token) == TypeId::of::<C>()
    }
}

impl<C: Code> From<C> for AnyCode {
    #[inline]
    fn from(code: C) -> Self {
        Self::new(code)
    }
}

impl PartialEq for AnyCode {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.as_dyn())
    }
}

impl Eq for AnyCode {}

impl<C: Code> PartialEq<C> for AnyCode {
    fn eq(&self, other: &C) -> bool {
        self.matches(other)
    }
}

impl Debug for AnyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl Display for AnyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_code())
    }
}
