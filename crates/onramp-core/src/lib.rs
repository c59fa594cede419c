//! # onramp-core
//!
//! Shared domain glue for the Solana onramp backend: the supported locales,
//! user-input sanitization, and display formatting for monetary values.
//!
//! Every other crate in the workspace sits on top of this one; it stays
//! dependency-light on purpose.

pub mod format;
pub mod locale;
pub mod sanitize;

pub use locale::Locale;
pub use sanitize::sanitize;
