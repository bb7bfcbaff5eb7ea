//! Variadic shorthands for the chain constructors.
//!
//! The functions in [`crate::chain`] take their wrappers as a tuple. These
//! macros accept the wrappers as trailing arguments instead:
//!
//! - [`macro@crate::custom`], [`macro@crate::new`], [`macro@crate::translate`],
//!   [`macro@crate::wrap`], [`macro@crate::mark_unexpected`] and
//!   [`macro@crate::unexpected`] mirror the functions of the same name.
//! - [`macro@crate::info`] builds a [`with_info`](crate::with_info) wrapper
//!   from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use failure_rail::{info, message, new, wrap, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("not_found");
//!
//! let user_id = 42;
//! let err = new!(NOT_FOUND, message("No such user."), info!("user_id" => user_id));
//! let err = wrap!(err, info!("attempt" => 2));
//!
//! assert!(err.is(&[&NOT_FOUND]));
//! assert_eq!(err.info_list().len(), 2);
//! ```

/// Builds a [`with_info`](crate::with_info) wrapper from `key => value` pairs.
///
/// ```
/// use failure_rail::{custom, info, Failure};
///
/// let err = custom!(Failure::msg("boom"), info!("a" => 1, "b" => "two"));
/// let infos = err.info_list();
///
/// assert_eq!(infos[0].get::<i32>("a"), Some(&1));
/// assert_eq!(infos[0].get::<&str>("b"), Some(&"two"));
/// ```
#[macro_export]
macro_rules! info {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::with_info($crate::Info::new()$(.with($key, $value))*)
    };
}

/// Variadic form of [`custom`](crate::custom()).
#[macro_export]
macro_rules! custom {
    ($err:expr $(, $wrapper:expr)* $(,)?) => {
        $crate::custom($err, ($($wrapper,)*))
    };
}

/// Variadic form of [`new`](crate::new()).
#[macro_export]
macro_rules! new {
    ($code:expr $(, $wrapper:expr)* $(,)?) => {
        $crate::new($code, ($($wrapper,)*))
    };
}

/// Variadic form of [`translate`](crate::translate()).
#[macro_export]
macro_rules! translate {
    ($err:expr, $code:expr $(, $wrapper:expr)* $(,)?) => {
        $crate::translate($err, $code, ($($wrapper,)*))
    };
}

/// Variadic form of [`wrap`](crate::wrap()).
#[macro_export]
macro_rules! wrap {
    ($err:expr $(, $wrapper:expr)* $(,)?) => {
        $crate::wrap($err, ($($wrapper,)*))
    };
}

/// Variadic form of [`mark_unexpected`](crate::mark_unexpected()).
#[macro_export]
macro_rules! mark_unexpected {
    ($err:expr $(, $wrapper:expr)* $(,)?) => {
        $crate::mark_unexpected($err, ($($wrapper,)*))
    };
}

/// Variadic form of [`unexpected`](crate::unexpected()).
#[macro_export]
macro_rules! unexpected {
    ($msg:expr $(, $wrapper:expr)* $(,)?) => {
        $crate::unexpected($msg, ($($wrapper,)*))
    };
}
