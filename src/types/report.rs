//! Verbose, multi-line rendering of a failure chain.
//!
//! The one-line `Display` of a [`Failure`](crate::Failure) only shows the
//! chain of function names, codes and messages. A report adds the code,
//! the message, every info entry and the frames of the deepest call stack:
//!
//! ```text
//! load_user(not_found): open: no such file
//!     code: not_found
//!     message: The user does not exist.
//!     info:
//!         user_id = 42
//!     call stack:
//!         [app::load_user] src/app.rs:10
//!         [app::main] src/app.rs:20
//! ```
use core::error::Error as StdError;
use core::fmt::{self, Display};

use crate::inspect;

/// Sections and layout of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub indent: String,
    pub show_code: bool,
    pub show_message: bool,
    pub show_info: bool,
    pub show_call_stack: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            indent: "    ".into(),
            show_code: true,
            show_message: true,
            show_info: true,
            show_call_stack: true,
        }
    }
}

impl ReportConfig {
    /// Every section except the call stack.
    #[inline]
    pub fn compact() -> Self {
        Self { show_call_stack: false, ..Default::default() }
    }

    /// Only the one-line rendering.
    #[inline]
    pub fn summary() -> Self {
        Self {
            show_code: false,
            show_message: false,
            show_info: false,
            show_call_stack: false,
            ..Default::default()
        }
    }
}

/// Builder for customizing a report.
pub struct ReportBuilder<'a> {
    pub(crate) error: &'a (dyn StdError + 'static),
    pub(crate) config: ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(error: &'a (dyn StdError + 'static)) -> Self {
        Self { error, config: ReportConfig::default() }
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn show_message(mut self, show: bool) -> Self {
        self.config.show_message = show;
        self
    }

    pub fn show_info(mut self, show: bool) -> Self {
        self.config.show_info = show;
        self
    }

    pub fn show_call_stack(mut self, show: bool) -> Self {
        self.config.show_call_stack = show;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ReportConfig::compact();
        self
    }
}

impl Display for ReportBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.config.indent.as_str();
        write!(f, "{}", self.error)?;

        if self.config.show_code {
            if let Some(code) = inspect::code_of(self.error) {
                write!(f, "\n{indent}code: {code}")?;
            }
        }

        if self.config.show_message {
            if let Some(message) = inspect::find_message(self.error) {
                write!(f, "\n{indent}message: {message}")?;
            }
        }

        if self.config.show_info {
            let infos = inspect::info_list_of(self.error);
            if infos.iter().any(|info| !info.is_empty()) {
                write!(f, "\n{indent}info:")?;
                for (key, value) in infos.iter().flat_map(|info| info.iter()) {
                    write!(f, "\n{indent}{indent}{key} = {value:?}")?;
                }
            }
        }

        if self.config.show_call_stack {
            if let Some(stack) = inspect::call_stack_of(self.error) {
                write!(f, "\n{indent}call stack:")?;
                if stack.frames().is_empty() {
                    let caller = stack.caller();
                    write!(f, "\n{indent}{indent}{}:{}", caller.file(), caller.line())?;
                }
                for frame in stack.frames() {
                    write!(f, "\n{indent}{indent}{frame}")?;
                }
            }
        }

        Ok(())
    }
}
