//! Type definitions for the format specification parser
//!
//! This module defines the descriptor produced by parsing a format spec
//! string, along with the enums for its closed-set fields.

/// Alignment of a value within a padded field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Left-aligned (`<`)
    Left,
    /// Right-aligned (`>`)
    Right,
    /// Centered (`^`)
    Center,
    /// Padding inserted between the sign and the digits (`=`)
    AfterSign,
}

impl Align {
    /// Map an alignment character to its variant
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            '=' => Some(Align::AfterSign),
            _ => None,
        }
    }

    /// The character this variant was parsed from
    pub fn as_char(self) -> char {
        match self {
            Align::Left => '<',
            Align::Right => '>',
            Align::Center => '^',
            Align::AfterSign => '=',
        }
    }
}

/// Sign display policy for numeric presentation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Sign only on negative values (`-`)
    Minus,
    /// Sign on both positive and negative values (`+`)
    Plus,
    /// Leading space on positive values (` `)
    Space,
}

impl Sign {
    /// Map a sign character to its variant
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Sign::Minus),
            '+' => Some(Sign::Plus),
            ' ' => Some(Sign::Space),
            _ => None,
        }
    }

    /// The character this variant was parsed from
    pub fn as_char(self) -> char {
        match self {
            Sign::Minus => '-',
            Sign::Plus => '+',
            Sign::Space => ' ',
        }
    }
}

/// Separator inserted between digit groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Underscore separator (`_`)
    Underscore,
    /// Comma separator (`,`)
    Comma,
}

impl Grouping {
    /// Map a grouping character to its variant
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '_' => Some(Grouping::Underscore),
            ',' => Some(Grouping::Comma),
            _ => None,
        }
    }

    /// The character this variant was parsed from
    pub fn as_char(self) -> char {
        match self {
            Grouping::Underscore => '_',
            Grouping::Comma => ',',
        }
    }
}

/// Presentation type selecting the target representation of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Binary integer (`b`)
    Binary,
    /// Character (`c`)
    Character,
    /// Decimal integer (`d`)
    Decimal,
    /// Scientific notation, lowercase exponent (`e`)
    ExpLower,
    /// Scientific notation, uppercase exponent (`E`)
    ExpUpper,
    /// Fixed-point (`f`)
    FixedLower,
    /// Fixed-point, uppercase special values (`F`)
    FixedUpper,
    /// General numeric (`g`)
    GeneralLower,
    /// General numeric, uppercase (`G`)
    GeneralUpper,
    /// Locale-aware number (`n`)
    Number,
    /// Octal integer (`o`)
    Octal,
    /// String (`s`)
    Str,
    /// Hexadecimal integer, lowercase digits (`x`)
    HexLower,
    /// Hexadecimal integer, uppercase digits (`X`)
    HexUpper,
    /// Percentage (`%`)
    Percent,
}

impl Presentation {
    /// Map a presentation type character to its variant
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Presentation::Binary),
            'c' => Some(Presentation::Character),
            'd' => Some(Presentation::Decimal),
            'e' => Some(Presentation::ExpLower),
            'E' => Some(Presentation::ExpUpper),
            'f' => Some(Presentation::FixedLower),
            'F' => Some(Presentation::FixedUpper),
            'g' => Some(Presentation::GeneralLower),
            'G' => Some(Presentation::GeneralUpper),
            'n' => Some(Presentation::Number),
            'o' => Some(Presentation::Octal),
            's' => Some(Presentation::Str),
            'x' => Some(Presentation::HexLower),
            'X' => Some(Presentation::HexUpper),
            '%' => Some(Presentation::Percent),
            _ => None,
        }
    }

    /// The character this variant was parsed from
    pub fn as_char(self) -> char {
        match self {
            Presentation::Binary => 'b',
            Presentation::Character => 'c',
            Presentation::Decimal => 'd',
            Presentation::ExpLower => 'e',
            Presentation::ExpUpper => 'E',
            Presentation::FixedLower => 'f',
            Presentation::FixedUpper => 'F',
            Presentation::GeneralLower => 'g',
            Presentation::GeneralUpper => 'G',
            Presentation::Number => 'n',
            Presentation::Octal => 'o',
            Presentation::Str => 's',
            Presentation::HexLower => 'x',
            Presentation::HexUpper => 'X',
            Presentation::Percent => '%',
        }
    }
}

/// A parsed format specification
///
/// Produced by [`parse_format_spec`](crate::parse_format_spec). Every
/// field is optional; an empty spec string parses to the all-default
/// descriptor. The descriptor is plain data and never mutated after the
/// parse returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatSpec {
    /// Character used to pad the value out to `width`
    pub fill: Option<char>,
    /// Placement of the value within the padded field
    pub align: Option<Align>,
    /// Sign display policy
    pub sign: Option<Sign>,
    /// Alternate form requested (`#`)
    pub alternate: bool,
    /// Minimum field width
    pub width: Option<usize>,
    /// Digit grouping separator
    pub grouping: Option<Grouping>,
    /// Number of digits (or characters) after the decimal point
    pub precision: Option<usize>,
    /// Target representation of the value
    pub presentation: Option<Presentation>,
}
