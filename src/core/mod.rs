//! Core library components.
//!
//! Identity handling, per-value encryption, store resolution and
//! persistence. Nothing here prints; the CLI layer owns all output.

pub mod cipher;
pub mod constants;
pub mod env;
pub mod identity;
pub mod locator;
pub mod store;
pub mod types;
pub mod vault;
