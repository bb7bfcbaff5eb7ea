//! Reading attributes back from a chain.
//!
//! Every accessor walks the chain with [`chain`](crate::chain()) and applies
//! its own policy. They accept any `&dyn Error`, so chains wrapped inside
//! foreign error types are inspected the same way as native ones. Accessors
//! never modify a chain; calling one twice yields the same result.
//!
//! | Accessor | Policy |
//! |---|---|
//! | [`code_of`] | outermost code, unless a "no code" link is met first |
//! | [`message_of`] | outermost message, else the configured default |
//! | [`info_list_of`] | every info map, outermost first, unmerged |
//! | [`call_stack_of`] | the deepest call stack |
//! | [`cause_of`] | the end of the `source()` chain |
use core::error::Error as StdError;

use crate::config::config;
use crate::types::{
    chain, AnyCode, CallStack, Code, ErrorVec, FailureRecord, Info, Link, ReportBuilder,
};

/// Effective code of `err`.
///
/// Returns the outermost code of the chain. A link built by
/// [`mark_unexpected`](crate::mark_unexpected) or
/// [`without_code`](crate::without_code) ends the search with `None`, as does
/// a chain without any code.
///
/// ```
/// use failure_rail::{code_of, mark_unexpected, new, StringCode};
///
/// const A: StringCode = StringCode::new("A");
///
/// assert_eq!(code_of(&new(A, ())).unwrap(), A);
/// assert!(code_of(&mark_unexpected(new(A, ()), ())).is_none());
/// assert!(code_of(&std::io::Error::other("eof")).is_none());
/// ```
pub fn code_of(err: &(dyn StdError + 'static)) -> Option<AnyCode> {
    for link in chain(err) {
        if link.hides_code() {
            return None;
        }
        if let Some(code) = link.code() {
            return Some(code.clone());
        }
    }
    None
}

/// Effective code of `err`, or the configured unknown code.
#[inline]
pub fn code_or_unknown(err: &(dyn StdError + 'static)) -> AnyCode {
    code_of(err).unwrap_or_else(|| config().unknown_code.clone())
}

/// Returns `true` if the effective code of `err` is one of `codes`.
///
/// An error without a code matches nothing, and an empty candidate list
/// matches nothing. Use [`is_uncoded`] to test for the absence of a code.
///
/// ```
/// use failure_rail::{is, new, translate, wrap, StringCode};
///
/// const A: StringCode = StringCode::new("A");
/// const B: StringCode = StringCode::new("B");
///
/// let err = wrap(translate(new(A, ()), B, ()), ());
///
/// assert!(is(&err, &[&B]));
/// assert!(is(&err, &[&A, &B]));
/// assert!(!is(&err, &[&A]));
/// assert!(!is(&err, &[]));
/// ```
pub fn is(err: &(dyn StdError + 'static), codes: &[&dyn Code]) -> bool {
    match code_of(err) {
        Some(code) => codes.iter().any(|candidate| code.matches(*candidate)),
        None => false,
    }
}

/// Returns `true` if `err` has no effective code.
#[inline]
pub fn is_uncoded(err: &(dyn StdError + 'static)) -> bool {
    code_of(err).is_none()
}

/// Outermost non-empty message of `err`.
pub fn find_message<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a str> {
    chain(err).filter_map(|link| link.message()).find(|message| !message.is_empty())
}

/// Outermost non-empty message of `err`, or the configured default message.
///
/// ```
/// use failure_rail::{config::DEFAULT_MESSAGE, message, message_of, new, wrap, StringCode};
///
/// let plain = new(StringCode::new("A"), ());
/// assert_eq!(message_of(&plain), DEFAULT_MESSAGE);
///
/// let err = wrap(new(StringCode::new("A"), (message("inner"),)), (message("outer"),));
/// assert_eq!(message_of(&err), "outer");
/// ```
pub fn message_of(err: &(dyn StdError + 'static)) -> String {
    match find_message(err) {
        Some(message) => message.to_owned(),
        None => config().default_message.clone().into_owned(),
    }
}

/// Every info map of `err`, outermost first.
///
/// Maps are not merged: a key present in several links shows up once per
/// link.
pub fn info_list_of<'a>(err: &'a (dyn StdError + 'static)) -> ErrorVec<&'a Info> {
    chain(err).filter_map(|link| link.info()).collect()
}

/// Call stack of the deepest link that carries one.
///
/// The deepest stack is the one captured closest to the original failure,
/// so outer [`wrap`](crate::wrap) calls never replace it.
pub fn call_stack_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a CallStack> {
    chain(err).filter_map(|link| link.call_stack()).last()
}

/// Follows [`Error::source`](core::error::Error::source) to its end.
///
/// Returns `err` itself when it has no source. Native links are followed
/// the same way, so the result is the root of the chain.
///
/// ```
/// use failure_rail::{cause_of, wrap};
/// use std::io;
///
/// let err = wrap(io::Error::other("disk full"), ());
/// let cause = cause_of(&err);
///
/// assert!(cause.downcast_ref::<io::Error>().is_some());
/// ```
pub fn cause_of<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    chain(err).last().map_or(err, Link::error)
}

/// Verbose report of `err`; see [`ReportBuilder`].
#[inline]
pub fn report_of<'a>(err: &'a (dyn StdError + 'static)) -> ReportBuilder<'a> {
    ReportBuilder::new(err)
}

/// Snapshot of the attributes of `err`; see [`FailureRecord`].
#[inline]
pub fn record_of(err: &(dyn StdError + 'static)) -> FailureRecord {
    FailureRecord::of(err)
}
