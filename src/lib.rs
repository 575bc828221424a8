//! Request-scoped recursion guard for recursive view rendering.
//!
//! Templates that include one another can send a rendering pipeline into an
//! endless loop. This crate tracks every active (content, view) pair on a
//! per-request stack and aborts a render that re-enters a pair which is
//! still being rendered, instead of looping forever.

pub mod context;
pub mod error;
pub mod frame;
pub mod guard_options;
pub mod renderer;
pub(crate) mod stack;

pub type Result<T> = std::result::Result<T, error::Error>;
