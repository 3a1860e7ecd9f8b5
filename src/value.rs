//! Value-side formatting entry point
//!
//! A value formatted with a spec string either renders itself or falls
//! back to the parser. The fallback path validates the spec and then
//! reports rendering as unsupported; producing output from a parsed
//! descriptor is out of scope.

use crate::error::{Error, Result};
use crate::parser::parse_format_spec;

/// Implemented by values that can render themselves from a format spec
///
/// The default hook returns `None`, meaning the value has no rendering
/// of its own. Types that do render receive the raw spec text and are
/// free to interpret it however they like.
pub trait Formattable {
    /// Render the value according to `spec`, or `None` when the value
    /// has no rendering of its own
    fn render(&self, _spec: &str) -> Option<String> {
        None
    }
}

/// Format `value` according to `spec`
///
/// Values with their own rendering receive the raw spec text and their
/// result is returned as-is; the spec is never parsed on that path. For
/// everything else the spec is parsed up front, so a malformed spec
/// surfaces as a parse error before the missing renderer is reported.
pub fn format_value<T: Formattable>(value: &T, spec: &str) -> Result<String> {
    if let Some(rendered) = value.render(spec) {
        return Ok(rendered);
    }
    let parsed = parse_format_spec(spec)?;
    Err(Error::UnsupportedOperation(format!(
        "no renderer for values described by {:?}",
        parsed
    )))
}
