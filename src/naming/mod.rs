//! Deterministic creative-name assembly
//!
//! Sanitization, date formatting, and the ordered name builder. Everything
//! here is pure and synchronous; warnings are advisory and never block
//! name construction.

pub mod builder;
pub mod date;
pub mod sanitize;

pub use builder::{build_name, BuiltName, NameRequest};
pub use date::format_date;
pub use sanitize::sanitize;
