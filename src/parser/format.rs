use log::trace;

use crate::error::Result;
use crate::parser::state::{State, step};
use crate::types::FormatSpec;

/// Parse a format specification string
///
/// This is the main public API entry point of this module. It accepts a
/// spec string and returns the parsed [`FormatSpec`] descriptor, or a
/// parse error when unrecognized input survives past every section.
///
/// All sections are optional; an empty string yields the all-default
/// descriptor. Each call builds a fresh descriptor, so parsing the same
/// string twice yields identical results.
///
/// # Arguments
/// * `spec` - The format specification to parse
///
/// # Returns
/// * `Result<FormatSpec>` - The parsed descriptor, or an error
///
/// # Examples
/// ```
/// use format_spec::parse_format_spec;
///
/// let spec = parse_format_spec("*<10").unwrap();
/// assert_eq!(spec.fill, Some('*'));
/// assert_eq!(spec.width, Some(10));
/// ```
pub fn parse_format_spec(spec: &str) -> Result<FormatSpec> {
    let mut parsed = FormatSpec::default();
    let chars: Vec<char> = spec.chars().collect();

    let mut state = State::Fill;
    let mut pos = 0;
    while pos < chars.len() {
        let lookahead = chars.get(pos + 1).copied();
        let (next, consumed) = step(state, chars[pos], lookahead, &mut parsed)?;
        trace!(
            "format spec scan: {:?} -> {:?} at {} ({:?}), consumed: {}",
            state, next, pos, chars[pos], consumed
        );
        state = next;
        if consumed {
            pos += 1;
        }
    }

    Ok(parsed)
}
