//! Traversal of failure chains.
//!
//! [`Chain`] walks from an error towards its root. Native links are followed
//! through their underlying failure; foreign errors are followed through
//! [`Error::source`](core::error::Error::source). Whenever a `source()`
//! yields a [`Failure`], the walk continues on the native chain again, so
//! failures wrapped inside foreign error types are still found.
//!
//! # Examples
//!
//! ```
//! use failure_rail::{chain, new, wrap, LinkKind, StringCode};
//!
//! const A: StringCode = StringCode::new("A");
//!
//! let err = wrap(new(A, ()), ());
//! let kinds: Vec<LinkKind> = chain(&err).map(|link| link.kind()).collect();
//!
//! assert_eq!(kinds, [LinkKind::CallStack, LinkKind::CallStack, LinkKind::Code]);
//! ```
use core::error::Error as StdError;
use core::fmt::{self, Debug};
use core::iter::FusedIterator;
use core::ptr;

use smallvec::SmallVec;

use crate::types::failure::{Failure, Node};
use crate::types::{AnyCode, CallStack, Info};

/// Walks the chain of `err`, starting with `err` itself.
#[inline]
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain::new(err)
}

/// Kind of a chain link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Root holding a plain message.
    Root,
    /// Link carrying a code.
    Code,
    /// Link carrying an info map.
    Info,
    /// Link carrying a call stack.
    CallStack,
    /// Link carrying a message.
    Message,
    /// Link hiding every code below it.
    WithoutCode,
    /// Error from outside this crate.
    Foreign,
}

/// One step of a [`Chain`].
#[derive(Clone, Copy)]
pub enum Link<'a> {
    /// A link built by this crate.
    Native(&'a Failure),
    /// Any other error.
    Foreign(&'a (dyn StdError + 'static)),
}

impl<'a> Link<'a> {
    fn native_node(self) -> Option<&'a Node> {
        match self {
            Link::Native(failure) => Some(failure.node()),
            Link::Foreign(_) => None,
        }
    }

    /// The error at this step.
    #[inline]
    pub fn error(self) -> &'a (dyn StdError + 'static) {
        match self {
            Link::Native(failure) => failure,
            Link::Foreign(err) => err,
        }
    }

    /// Kind of this link.
    pub fn kind(self) -> LinkKind {
        match self.native_node() {
            Some(Node::Root(_)) => LinkKind::Root,
            Some(Node::Coded { .. }) => LinkKind::Code,
            Some(Node::Info { .. }) => LinkKind::Info,
            Some(Node::CallStack { .. }) => LinkKind::CallStack,
            Some(Node::Message { .. }) => LinkKind::Message,
            Some(Node::WithoutCode { .. }) => LinkKind::WithoutCode,
            Some(Node::Foreign(_)) | None => LinkKind::Foreign,
        }
    }

    /// Code carried by this link.
    #[inline]
    pub fn code(self) -> Option<&'a AnyCode> {
        match self.native_node()? {
            Node::Coded { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns `true` if this link hides the codes below it.
    #[inline]
    pub fn hides_code(self) -> bool {
        matches!(self.native_node(), Some(Node::WithoutCode { .. }))
    }

    /// Info carried by this link.
    #[inline]
    pub fn info(self) -> Option<&'a Info> {
        match self.native_node()? {
            Node::Info { info, .. } => Some(info),
            _ => None,
        }
    }

    /// Call stack carried by this link.
    #[inline]
    pub fn call_stack(self) -> Option<&'a CallStack> {
        match self.native_node()? {
            Node::CallStack { stack, .. } => Some(stack),
            _ => None,
        }
    }

    /// User facing message carried by this link.
    ///
    /// The text of a plain root is not a message; read it through
    /// [`error`](Link::error) instead.
    #[inline]
    pub fn message(self) -> Option<&'a str> {
        match self.native_node()? {
            Node::Message { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns the error at this step if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: StdError + 'static>(self) -> Option<&'a T> {
        self.error().downcast_ref::<T>()
    }
}

impl Debug for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.native_node() {
            Some(Node::Root(message)) => write!(f, "Root({message:?})"),
            Some(Node::Coded { code, .. }) => write!(f, "Code({code:?})"),
            Some(Node::Info { info, .. }) => write!(f, "Info({info:?})"),
            Some(Node::CallStack { stack, .. }) => {
                write!(f, "CallStack({:?})", stack.head_function())
            }
            Some(Node::Message { message, .. }) => write!(f, "Message({message:?})"),
            Some(Node::WithoutCode { .. }) => f.write_str("WithoutCode"),
            Some(Node::Foreign(err)) => write!(f, "Foreign({err:?})"),
            None => write!(f, "Foreign({:?})", self.error()),
        }
    }
}

/// Lazy, forward-only iterator over the links of a chain.
///
/// Native chains cannot cycle. Foreign `source()` implementations can, so
/// foreign links already visited end the walk. Visited errors are keyed by
/// address and vtable, which keeps zero-sized errors apart by type.
pub struct Chain<'a> {
    next: Option<Link<'a>>,
    seen: SmallVec<[*const (dyn StdError + 'static); 4]>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `err`.
    pub fn new(err: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(Self::classify(err)), seen: SmallVec::new() }
    }

    /// Starts a walk at a native link.
    #[inline]
    pub fn from_failure(failure: &'a Failure) -> Self {
        Self { next: Some(Self::enter(failure)), seen: SmallVec::new() }
    }

    fn classify(err: &'a (dyn StdError + 'static)) -> Link<'a> {
        match err.downcast_ref::<Failure>() {
            Some(failure) => Self::enter(failure),
            None => Link::Foreign(err),
        }
    }

    fn enter(failure: &'a Failure) -> Link<'a> {
        match failure.node() {
            Node::Foreign(err) => Link::Foreign(&**err),
            _ => Link::Native(failure),
        }
    }

    fn successor(link: Link<'a>) -> Option<Link<'a>> {
        match link {
            Link::Native(failure) => failure.underlying().map(Self::enter),
            Link::Foreign(err) => err.source().map(Self::classify),
        }
    }

    fn first_visit(&mut self, link: Link<'a>) -> bool {
        let Link::Foreign(err) = link else {
            return true;
        };
        let key = ptr::from_ref(err);
        if self.seen.iter().any(|&seen| ptr::eq(seen, key)) {
            return false;
        }
        self.seen.push(key);
        true
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next.take()?;
        if !self.first_visit(link) {
            return None;
        }
        self.next = Self::successor(link);
        Some(link)
    }
}

impl FusedIterator for Chain<'_> {}
