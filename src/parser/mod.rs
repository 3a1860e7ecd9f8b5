//! Format spec parsing module
//!
//! This module is responsible for parsing format specification strings
//! into the [`FormatSpec`](crate::types::FormatSpec) descriptor.
//! The main entry point is the `parse_format_spec` function.

mod format;
mod state;

pub use format::parse_format_spec;
