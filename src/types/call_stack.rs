//! Call stacks captured when a failure is wrapped.
//!
//! A [`CallStack`] is captured once, at the wrapping call site, and never
//! changes afterwards. Frames are resolved through the `backtrace` crate;
//! leading frames that belong to `backtrace` itself or to this crate are
//! dropped so the first frame is the caller of the wrapping function. The
//! `#[track_caller]` location of the wrapping call is recorded as well, which
//! keeps the head of the stack meaningful even when symbols are unavailable.
use core::fmt::{self, Display};
use core::panic::Location;
use std::borrow::Cow;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ErrorVec;

const INTERNAL_PREFIXES: [&str; 2] = ["backtrace::", "failure_rail::"];

/// A single resolved stack frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    function: String,
    path: String,
    line: u32,
}

impl Frame {
    /// Creates a frame from its parts.
    pub fn new(function: impl Into<String>, path: impl Into<String>, line: u32) -> Self {
        Self { function: function.into(), path: path.into(), line }
    }

    /// Fully qualified function path, e.g. `app::db::open`.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Unqualified function name, e.g. `open`.
    ///
    /// Closures keep their enclosing function, e.g. `open::{{closure}}`.
    /// Paths inside generic arguments are kept whole, e.g.
    /// `parse<alloc::string::String>`.
    #[inline]
    pub fn func(&self) -> &str {
        &self.function[self.func_start()..]
    }

    /// Module path of the function, e.g. `app::db`.
    pub fn module(&self) -> &str {
        match self.func_start().checked_sub(2) {
            Some(end) => &self.function[..end],
            None => "",
        }
    }

    fn func_start(&self) -> usize {
        let mut last = None;
        let mut parent = None;
        for sep in separators(&self.function) {
            parent = last;
            last = Some(sep + 2);
        }
        let start = last.unwrap_or(0);
        match parent {
            Some(parent) if self.function[start..].starts_with("{{") => parent,
            _ => start,
        }
    }

    /// Full source path.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name of the source file.
    pub fn file(&self) -> &str {
        Path::new(&self.path).file_name().and_then(|name| name.to_str()).unwrap_or(&self.path)
    }

    /// Line number, `0` when unknown.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}:{}", self.function, self.path, self.line)
    }
}

/// Frozen call stack of a wrapping call.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct CallStack {
    #[cfg_attr(feature = "serde", serde(skip))]
    caller: &'static Location<'static>,
    frames: ErrorVec<Frame>,
}

impl CallStack {
    /// Captures the current stack, dropping `skip` frames after the caller.
    ///
    /// `skip` counts frames above the caller of the wrapping function, so
    /// helpers that wrap errors on behalf of their own callers can hide
    /// themselves.
    #[track_caller]
    pub fn capture(skip: usize) -> Self {
        let caller = Location::caller();
        let mut frames = ErrorVec::new();
        let mut leading = true;
        let mut to_skip = skip;

        backtrace::trace(|raw| {
            let mut resolved = ErrorVec::<Frame>::new();
            backtrace::resolve_frame(raw, |symbol| {
                let function = symbol.name().map(|name| format!("{name:#}")).unwrap_or_default();
                let path = symbol
                    .filename()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default();
                resolved.push(Frame::new(function, path, symbol.lineno().unwrap_or(0)));
            });

            for frame in resolved {
                if leading && is_internal(&frame.function) {
                    continue;
                }
                leading = false;
                if to_skip > 0 {
                    to_skip -= 1;
                    continue;
                }
                frames.push(frame);
            }
            true
        });

        Self { caller, frames }
    }

    /// Builds a stack from already resolved frames.
    #[track_caller]
    pub fn from_frames<I: IntoIterator<Item = Frame>>(frames: I) -> Self {
        Self { caller: Location::caller(), frames: frames.into_iter().collect() }
    }

    /// Source location of the wrapping call.
    #[inline]
    pub fn caller(&self) -> &'static Location<'static> {
        self.caller
    }

    /// Resolved frames, innermost (most recent) first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recent frame, if symbols could be resolved.
    #[inline]
    pub fn head(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Name used when rendering the failure on one line.
    ///
    /// Falls back to `file:line` of the wrapping call when no frame resolved
    /// to a function name.
    pub fn head_function(&self) -> Cow<'_, str> {
        match self.head().map(Frame::func) {
            Some(func) if !func.is_empty() => Cow::Borrowed(func),
            _ => Cow::Owned(format!("{}:{}", self.caller.file(), self.caller.line())),
        }
    }
}

impl Display for CallStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return write!(f, "{}:{}", self.caller.file(), self.caller.line());
        }
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(frame, f)?;
        }
        Ok(())
    }
}

/// Byte offsets of the `::` separators outside generic arguments.
fn separators(path: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    (0..bytes.len()).filter(move |&i| {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' => {
                return depth == 0
                    && bytes.get(i + 1) == Some(&b':')
                    && (i == 0 || bytes[i - 1] != b':');
            }
            _ => {}
        }
        false
    })
}

fn is_internal(function: &str) -> bool {
    let function = function.trim_start_matches('<');
    function.is_empty()
        || (INTERNAL_PREFIXES.iter().any(|prefix| function.starts_with(prefix))
            && !function.contains("::tests::"))
}
