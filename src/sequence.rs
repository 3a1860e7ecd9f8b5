//! Integer sequence helpers
//!
//! Emulates two host-language builtins at the crate boundary: numeric
//! range generation and an iterate-as-is coercion. Neither carries any
//! parsing logic; they exist so callers of the formatting entry points
//! have a complete host-style surface.

use log::debug;

use crate::error::{Error, Result};

/// A lazy, finite sequence of integers
///
/// Yields values from `start` up to but excluding `stop`, advancing by
/// `step`. The sequence is restarted by recreating it; iteration
/// consumes the instance state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    next: i64,
    stop: i64,
    step: i64,
}

impl Range {
    fn new(start: i64, stop: i64, step: i64) -> Self {
        Range {
            next: start,
            stop,
            step,
        }
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let exhausted = if self.step > 0 {
            self.next >= self.stop
        } else {
            self.next <= self.stop
        };
        if exhausted {
            return None;
        }
        let value = self.next;
        // Saturation still terminates: a saturated cursor can never be
        // strictly inside the bound again.
        self.next = self.next.saturating_add(self.step);
        Some(value)
    }
}

/// Build a [`Range`] from 1 to 3 numeric arguments
///
/// * one argument: `stop`, counting from 0 by 1
/// * two arguments: `start, stop`, counting by 1
/// * three arguments: `start, stop, step`
///
/// Any other argument count fails with an argument error, as does a
/// step of zero (the sequence could never terminate).
///
/// # Examples
/// ```
/// use format_spec::range;
///
/// let values: Vec<i64> = range(&[2, 5]).unwrap().collect();
/// assert_eq!(values, vec![2, 3, 4]);
/// ```
pub fn range(args: &[i64]) -> Result<Range> {
    match *args {
        [stop] => Ok(Range::new(0, stop, 1)),
        [start, stop] => Ok(Range::new(start, stop, 1)),
        [_, _, 0] => Err(Error::Argument(
            "range step must not be zero".to_string(),
        )),
        [start, stop, step] => Ok(Range::new(start, stop, step)),
        _ => Err(Error::Argument(format!(
            "range expected 1 to 3 arguments, got {}",
            args.len()
        ))),
    }
}

/// Identity adapter for callers that need "something iterable"
///
/// Returns the value untouched; non-iterable inputs are not adapted in
/// any way. Documented as a no-op so call sites read as intent.
pub fn ensure_iterable<T>(value: T) -> T {
    debug!("iterable coercion is a pass-through");
    value
}
