//! Scanner states and the transition function
//!
//! The grammar has a fixed section order with every section optional:
//!
//! ```text
//! spec := [fill align] [sign] ["#"] ["0"] [width] [grouping] ["." precision] [type]
//! ```
//!
//! Each state decides what to do with the current character and names
//! its follow state. A step that does not consume leaves the cursor in
//! place, so one character can fall past several absent sections before
//! a state accepts it.

use crate::error::{Error, Result};
use crate::types::{Align, FormatSpec, Grouping, Presentation, Sign};

/// Scanner position within the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Deciding whether the current character is a fill
    Fill,
    /// Consuming the alignment character
    Align,
    /// Optional sign
    Sign,
    /// Optional `#` flag
    Alternate,
    /// Optional zero-padding shorthand
    ZeroPad,
    /// Width digit run
    Width,
    /// Optional grouping separator
    Grouping,
    /// Optional `.` opening the precision section
    PrecisionDot,
    /// Precision digit run
    PrecisionDigits,
    /// Optional presentation type
    Type,
    /// Every section resolved; further input is an error
    Done,
}

/// Apply one character to the scanner.
///
/// Returns the follow state and whether `cur` was consumed. `lookahead`
/// is the character after `cur`, needed only by [`State::Fill`]: a fill
/// is recognized solely by the alignment character behind it.
pub(crate) fn step(
    state: State,
    cur: char,
    lookahead: Option<char>,
    out: &mut FormatSpec,
) -> Result<(State, bool)> {
    let next = match state {
        State::Fill => {
            if lookahead.is_some_and(|c| Align::from_char(c).is_some()) {
                out.fill = Some(cur);
                (State::Align, true)
            } else {
                (State::Sign, false)
            }
        }
        // Only reachable when the previous step saw an alignment
        // character ahead, so `from_char` always matches here.
        State::Align => {
            out.align = Align::from_char(cur);
            (State::Sign, true)
        }
        State::Sign => match Sign::from_char(cur) {
            Some(sign) => {
                out.sign = Some(sign);
                (State::Alternate, true)
            }
            None => (State::Alternate, false),
        },
        State::Alternate => {
            if cur == '#' {
                out.alternate = true;
                (State::ZeroPad, true)
            } else {
                (State::ZeroPad, false)
            }
        }
        State::ZeroPad => {
            if cur == '0' {
                // The shorthand never overrides an explicit fill or
                // align, but the zero itself is consumed regardless.
                out.align.get_or_insert(Align::AfterSign);
                out.fill.get_or_insert('0');
                (State::Width, true)
            } else {
                (State::Width, false)
            }
        }
        State::Width => match cur.to_digit(10) {
            Some(digit) => {
                out.width = Some(push_digit(out.width, digit, "width")?);
                (State::Width, true)
            }
            None => (State::Grouping, false),
        },
        State::Grouping => match Grouping::from_char(cur) {
            Some(grouping) => {
                out.grouping = Some(grouping);
                (State::PrecisionDot, true)
            }
            None => (State::PrecisionDot, false),
        },
        State::PrecisionDot => {
            if cur == '.' {
                (State::PrecisionDigits, true)
            } else {
                (State::Type, false)
            }
        }
        State::PrecisionDigits => match cur.to_digit(10) {
            Some(digit) => {
                out.precision = Some(push_digit(out.precision, digit, "precision")?);
                (State::PrecisionDigits, true)
            }
            None => (State::Type, false),
        },
        State::Type => match Presentation::from_char(cur) {
            Some(presentation) => {
                out.presentation = Some(presentation);
                (State::Done, true)
            }
            None => (State::Done, false),
        },
        State::Done => {
            return Err(Error::Parsing(format!(
                "unexpected trailing character {:?} in format spec",
                cur
            )));
        }
    };
    Ok(next)
}

/// Fold one decimal digit into an accumulating field.
///
/// A field that has not seen a digit yet starts from zero. Accumulation
/// is checked; a run that overflows the machine word is rejected rather
/// than wrapped.
fn push_digit(field: Option<usize>, digit: u32, name: &str) -> Result<usize> {
    field
        .unwrap_or(0)
        .checked_mul(10)
        .and_then(|value| value.checked_add(digit as usize))
        .ok_or_else(|| Error::Parsing(format!("{} in format spec is too large", name)))
}
