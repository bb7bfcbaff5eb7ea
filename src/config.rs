//! Process-wide settings.
//!
//! Settings are initialised at most once, before the first failure is built
//! or inspected; afterwards they are read-only. Applications that want other
//! defaults call [`configure`] early in `main`.
//!
//! # Examples
//!
//! ```
//! use failure_rail::config::{config, DEFAULT_MESSAGE};
//!
//! assert_eq!(config().default_message, DEFAULT_MESSAGE);
//! ```
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::types::{AnyCode, UNKNOWN};

/// Message returned by [`message_of`](crate::message_of) when a chain has none.
pub const DEFAULT_MESSAGE: &str = "An internal error has occurred. Please contact the developer.";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Settings shared by every failure of the process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback for chains without a message.
    pub default_message: Cow<'static, str>,
    /// Fallback for [`code_or_unknown`](crate::code_or_unknown).
    pub unknown_code: AnyCode,
    /// Extra frames dropped from every stack captured by the constructors.
    pub call_stack_skip: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_message: Cow::Borrowed(DEFAULT_MESSAGE),
            unknown_code: AnyCode::new(UNKNOWN),
            call_stack_skip: 0,
        }
    }
}

/// Installs `config` for the rest of the process.
///
/// Fails, handing the value back, once settings have been installed or read.
pub fn configure(config: Config) -> Result<(), Config> {
    CONFIG.set(config)
}

/// Active settings; the defaults unless [`configure`] ran first.
#[inline]
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
