use super::{Failure, Node};
use core::error::Error as StdError;
use core::fmt::{self, Debug, Display};

/// Conversion of any error into a [`Failure`] chain.
///
/// Implemented for every `Error + Send + Sync + 'static`, including
/// `Failure` itself, which converts without adding a link.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into a failure chain",
    label = "this type does not implement `std::error::Error + Send + Sync + 'static`",
    note = "use `Failure::msg` for plain messages or `Failure::from_boxed` for boxed errors"
)]
pub trait IntoFailure {
    /// Converts `self` into a chain.
    fn into_failure(self) -> Failure;
}

impl<E> IntoFailure for E
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::from_error(self)
    }
}

/// Writes non-empty fragments separated by `": "`.
struct Fragments<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    first: bool,
}

impl Fragments<'_, '_> {
    fn push(&mut self, fragment: impl Display) -> fmt::Result {
        if !self.first {
            self.f.write_str(": ")?;
        }
        self.first = false;
        write!(self.f, "{fragment}")
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.report(), f);
        }

        let mut out = Fragments { f, first: true };
        let mut pending = None;
        let mut current = Some(self);

        while let Some(link) = current {
            match link.node() {
                Node::CallStack { stack, .. } => {
                    if let Some(func) = pending.replace(stack.head_function()) {
                        out.push(func)?;
                    }
                }
                Node::Coded { code, .. } => match pending.take() {
                    Some(func) => out.push(format_args!("{func}({code})"))?,
                    None => out.push(code)?,
                },
                Node::Message { message, .. } | Node::Root(message) => {
                    if let Some(func) = pending.take() {
                        out.push(func)?;
                    }
                    if !message.is_empty() {
                        out.push(message)?;
                    }
                }
                Node::Foreign(err) => {
                    if let Some(func) = pending.take() {
                        out.push(func)?;
                    }
                    out.push(err)?;
                }
                Node::Info { .. } | Node::WithoutCode { .. } => {}
            }
            current = link.underlying();
        }

        if let Some(func) = pending {
            out.push(func)?;
        }
        Ok(())
    }
}

impl Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Adapter links are transparent: the foreign error stands in for them.
impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.node() {
            Node::Foreign(err) => err.source(),
            _ => self.underlying().map(|link| match link.node() {
                Node::Foreign(err) => &**err as &(dyn StdError + 'static),
                _ => link,
            }),
        }
    }
}
