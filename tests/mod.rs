pub mod chain;
pub mod inspect;
pub mod interop;
pub mod traits;
pub mod types;

#[cfg(feature = "tracing")]
pub mod tracing_ext;
