//! Core traits for building chains.
//!
//! - [`Wrapper`]: one decoration applied to a failure
//! - [`Wrappers`]: an ordered list of decorations
//! - [`ResultExt`]: wrapping and inspecting the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use failure_rail::traits::ResultExt;
//! use failure_rail::{message, StringCode};
//!
//! let ok: Result<u8, std::io::Error> = Ok(1);
//! let wrapped = ok.translate(StringCode::new("io"), (message("unused"),));
//!
//! assert_eq!(wrapped.unwrap(), 1);
//! ```

pub mod result_ext;
pub mod wrapper;

pub use result_ext::ResultExt;
pub use wrapper::{Wrapper, Wrappers};
