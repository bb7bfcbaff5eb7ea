//! The failure chain.
//!
//! A [`Failure`] is one immutable link of a chain. Every link decorates the
//! failure it wraps with exactly one attribute (a code, an info map, a call
//! stack, a message or a "no code" marker), or is a root: a plain message,
//! a bare code, or a foreign error adapted into the chain. Wrapping always
//! builds a new outer link; links are shared behind `Arc` and never mutated.
//!
//! Failures are usually built through the functions in [`crate::chain`]
//! and read through the accessors in [`crate::inspect`].
use core::error::Error as StdError;
use std::borrow::Cow;
use std::sync::Arc;

use crate::inspect;
use crate::types::chain_iter::Chain;
use crate::types::report::ReportBuilder;
use crate::types::{AnyCode, CallStack, Code, ErrorVec, FailureRecord, Info};

mod traits;

pub use traits::IntoFailure;

/// Boxed foreign error accepted by the adapter link.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A link of a failure chain.
#[must_use]
#[derive(Clone)]
pub struct Failure {
    node: Arc<Node>,
}

pub(crate) enum Node {
    Root(Cow<'static, str>),
    Coded { code: AnyCode, underlying: Option<Failure> },
    Info { info: Info, underlying: Failure },
    CallStack { stack: CallStack, underlying: Failure },
    Message { message: Cow<'static, str>, underlying: Failure },
    WithoutCode { underlying: Failure },
    Foreign(BoxError),
}

impl Node {
    pub(crate) fn underlying(&self) -> Option<&Failure> {
        match self {
            Node::Coded { underlying, .. } => underlying.as_ref(),
            Node::Info { underlying, .. }
            | Node::CallStack { underlying, .. }
            | Node::Message { underlying, .. }
            | Node::WithoutCode { underlying } => Some(underlying),
            Node::Root(_) | Node::Foreign(_) => None,
        }
    }
}

impl Failure {
    #[inline]
    pub(crate) fn from_node(node: Node) -> Self {
        Self { node: Arc::new(node) }
    }

    #[inline]
    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    /// Creates a root failure holding only a message.
    #[inline]
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_node(Node::Root(message.into()))
    }

    /// Creates a root failure holding only a code.
    #[inline]
    pub fn coded<C: Code>(code: C) -> Self {
        Self::from_node(Node::Coded { code: AnyCode::new(code), underlying: None })
    }

    /// Adapts any error into a chain.
    ///
    /// An error that already is a `Failure` is returned as is instead of being
    /// wrapped a second time.
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(err))
    }

    /// Adapts a boxed error into a chain.
    pub fn from_boxed(err: BoxError) -> Self {
        match err.downcast::<Failure>() {
            Ok(failure) => *failure,
            Err(foreign) => Self::from_node(Node::Foreign(foreign)),
        }
    }

    /// Wraps `self` in a link carrying `code`.
    #[inline]
    pub fn with_code(self, code: AnyCode) -> Self {
        Self::from_node(Node::Coded { code, underlying: Some(self) })
    }

    /// Wraps `self` in a link carrying `info`.
    #[inline]
    pub fn with_info(self, info: Info) -> Self {
        Self::from_node(Node::Info { info, underlying: self })
    }

    /// Wraps `self` in a link carrying `stack`.
    #[inline]
    pub fn with_call_stack(self, stack: CallStack) -> Self {
        Self::from_node(Node::CallStack { stack, underlying: self })
    }

    /// Wraps `self` in a link carrying `message`.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_node(Node::Message { message: message.into(), underlying: self })
    }

    /// Wraps `self` in a link that hides every code below it.
    #[inline]
    pub fn without_code(self) -> Self {
        Self::from_node(Node::WithoutCode { underlying: self })
    }

    /// The failure this link decorates, if any.
    #[inline]
    pub fn underlying(&self) -> Option<&Failure> {
        self.node.underlying()
    }

    /// Returns the foreign error if this link adapts one.
    #[inline]
    pub fn as_foreign(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self.node() {
            Node::Foreign(err) => Some(&**err),
            _ => None,
        }
    }

    /// Returns `true` if `self` and `other` are the same link.
    #[inline]
    pub fn ptr_eq(&self, other: &Failure) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Walks the chain starting at this link.
    #[inline]
    pub fn iter(&self) -> Chain<'_> {
        Chain::from_failure(self)
    }

    /// See [`inspect::code_of`].
    #[inline]
    pub fn code(&self) -> Option<AnyCode> {
        inspect::code_of(self)
    }

    /// See [`inspect::message_of`].
    #[inline]
    pub fn message(&self) -> String {
        inspect::message_of(self)
    }

    /// See [`inspect::info_list_of`].
    #[inline]
    pub fn info_list(&self) -> ErrorVec<&Info> {
        inspect::info_list_of(self)
    }

    /// See [`inspect::call_stack_of`].
    #[inline]
    pub fn call_stack(&self) -> Option<&CallStack> {
        inspect::call_stack_of(self)
    }

    /// See [`inspect::cause_of`].
    #[inline]
    pub fn cause(&self) -> &(dyn StdError + 'static) {
        inspect::cause_of(self)
    }

    /// See [`inspect::is`].
    #[inline]
    pub fn is(&self, codes: &[&dyn Code]) -> bool {
        inspect::is(self, codes)
    }

    /// Returns a builder for the verbose, multi-line rendering.
    #[must_use]
    #[inline]
    pub fn report(&self) -> ReportBuilder<'_> {
        ReportBuilder::new(self)
    }

    /// Snapshot of the attributes of this chain.
    #[must_use]
    #[inline]
    pub fn record(&self) -> FailureRecord {
        FailureRecord::of(self)
    }
}
