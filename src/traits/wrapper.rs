//! The wrapping capability.
//!
//! A [`Wrapper`] turns a failure into a new, outer failure. A [`Wrappers`]
//! value is an ordered list of wrappers, written in the order the links
//! should read from the outside in.
use std::sync::Arc;

use crate::types::Failure;

/// Decorates a failure with one attribute.
///
/// # Examples
///
/// ```
/// use failure_rail::{custom, Failure, Wrapper};
///
/// struct Retryable;
///
/// impl Wrapper for Retryable {
///     fn wrap_error(&self, err: Failure) -> Failure {
///         err.with_message("retryable")
///     }
/// }
///
/// let err = custom(Failure::msg("timeout"), (Retryable,));
/// assert_eq!(err.to_string(), "retryable: timeout");
/// ```
pub trait Wrapper {
    /// Returns a new failure wrapping `err`.
    fn wrap_error(&self, err: Failure) -> Failure;
}

impl<W: Wrapper + ?Sized> Wrapper for &W {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        (**self).wrap_error(err)
    }
}

impl<W: Wrapper + ?Sized> Wrapper for Box<W> {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        (**self).wrap_error(err)
    }
}

impl<W: Wrapper + ?Sized> Wrapper for Arc<W> {
    #[inline]
    fn wrap_error(&self, err: Failure) -> Failure {
        (**self).wrap_error(err)
    }
}

/// Ordered list of wrappers.
///
/// The last wrapper is applied first, so the first one ends up outermost:
/// `(message("aaa"), message("bbb"))` over `foo` renders `aaa: bbb: foo`.
/// Implemented for `()`, tuples of up to twelve wrappers, arrays, slices and
/// vectors.
pub trait Wrappers {
    /// Applies every wrapper to `err`.
    fn wrap_all(self, err: Failure) -> Failure;
}

impl Wrappers for () {
    #[inline]
    fn wrap_all(self, err: Failure) -> Failure {
        err
    }
}

macro_rules! impl_wrappers_for_tuple {
    ($($name:ident)+) => {
        impl<$($name: Wrapper),+> Wrappers for ($($name,)+) {
            #[allow(non_snake_case)]
            fn wrap_all(self, err: Failure) -> Failure {
                let ($($name,)+) = self;
                let layers = [$(&$name as &dyn Wrapper),+];
                layers.into_iter().rev().fold(err, |err, layer| layer.wrap_error(err))
            }
        }
    };
}

impl_wrappers_for_tuple!(A);
impl_wrappers_for_tuple!(A B);
impl_wrappers_for_tuple!(A B C);
impl_wrappers_for_tuple!(A B C D);
impl_wrappers_for_tuple!(A B C D E);
impl_wrappers_for_tuple!(A B C D E F);
impl_wrappers_for_tuple!(A B C D E F G);
impl_wrappers_for_tuple!(A B C D E F G H);
impl_wrappers_for_tuple!(A B C D E F G H I);
impl_wrappers_for_tuple!(A B C D E F G H I J);
impl_wrappers_for_tuple!(A B C D E F G H I J K);
impl_wrappers_for_tuple!(A B C D E F G H I J K L);

impl<W: Wrapper> Wrappers for &[W] {
    fn wrap_all(self, err: Failure) -> Failure {
        self.iter().rev().fold(err, |err, layer| layer.wrap_error(err))
    }
}

impl<W: Wrapper, const N: usize> Wrappers for [W; N] {
    #[inline]
    fn wrap_all(self, err: Failure) -> Failure {
        self.as_slice().wrap_all(err)
    }
}

impl<W: Wrapper> Wrappers for Vec<W> {
    #[inline]
    fn wrap_all(self, err: Failure) -> Failure {
        self.as_slice().wrap_all(err)
    }
}
