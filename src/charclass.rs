// charclass.rs - Character classes of the 8-bit range and the ordered
// sub-range schedules that rank canonical representatives.

use std::ops::RangeInclusive;

use bitflags::bitflags;

bitflags! {
    /// Classification of a code point in `U+0000..=U+00FF`.
    ///
    /// Every code point above `U+00FF` classifies as empty.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        /// `U+0000..=U+001F`
        const CONTROL = 1 << 0;
        /// `' '..='/'`, `':'..='@'`, `'['..='`'`, `'{'..='~'`
        const PUNCT = 1 << 1;
        /// `'0'..='9'`
        const DIGIT = 1 << 2;
        /// `'A'..='Z'`
        const UPPER = 1 << 3;
        /// `'a'..='z'`
        const LOWER = 1 << 4;
        /// `U+007F..=U+00FF`
        const HIGH = 1 << 5;

        const ALPHANUMERIC = Self::LOWER.bits() | Self::UPPER.bits() | Self::DIGIT.bits();
        const STANDARD = Self::ALPHANUMERIC.bits() | Self::PUNCT.bits();
        const EXTENDED = Self::STANDARD.bits() | Self::CONTROL.bits() | Self::HIGH.bits();
    }
}

impl CharClass {
    /// Classify a single code point.
    pub fn of(c: char) -> CharClass {
        match c {
            '\u{00}'..='\u{1F}' => CharClass::CONTROL,
            ' '..='/' | ':'..='@' | '['..='`' | '{'..='~' => CharClass::PUNCT,
            '0'..='9' => CharClass::DIGIT,
            'A'..='Z' => CharClass::UPPER,
            'a'..='z' => CharClass::LOWER,
            '\u{7F}'..='\u{FF}' => CharClass::HIGH,
            _ => CharClass::empty(),
        }
    }

    /// Returns `true` if `c` falls in any of the classes in `self`.
    #[inline]
    pub fn matches(self, c: char) -> bool {
        self.intersects(CharClass::of(c))
    }
}

/// An inclusive code point range, one pass of a [`RangeSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub begin: char,
    pub end: char,
}

impl CharRange {
    pub const CONTROL: CharRange = CharRange::new('\u{00}', '\u{1F}');
    pub const HIGH: CharRange = CharRange::new('\u{7F}', '\u{FF}');
    pub const SPACE_TO_SLASH: CharRange = CharRange::new(' ', '/');
    pub const COLON_TO_AT: CharRange = CharRange::new(':', '@');
    pub const BRACKET_TO_BACKTICK: CharRange = CharRange::new('[', '`');
    pub const BRACE_TO_TILDE: CharRange = CharRange::new('{', '~');
    pub const LOWER: CharRange = CharRange::new('a', 'z');
    pub const UPPER: CharRange = CharRange::new('A', 'Z');
    pub const DIGIT: CharRange = CharRange::new('0', '9');

    pub const fn new(begin: char, end: char) -> CharRange {
        CharRange { begin, end }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.begin <= c && c <= self.end
    }
}

impl From<RangeInclusive<char>> for CharRange {
    fn from(r: RangeInclusive<char>) -> Self {
        CharRange::new(*r.start(), *r.end())
    }
}

/// Ordered list of ranges applied one after another when choosing
/// canonical representatives.
///
/// Earlier ranges take priority: once a character has been settled as a
/// representative by an earlier pass, later passes leave its slot alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSchedule {
    ranges: Vec<CharRange>,
}

impl RangeSchedule {
    pub fn new<I, R>(ranges: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<CharRange>,
    {
        RangeSchedule {
            ranges: ranges.into_iter().map(Into::into).collect(),
        }
    }

    /// Lowercase letters, then uppercase letters, then digits.
    pub fn alphanumeric() -> Self {
        RangeSchedule::new([CharRange::LOWER, CharRange::UPPER, CharRange::DIGIT])
    }

    /// Printable ASCII, punctuation first so that letter and digit passes
    /// cannot displace a punctuation representative.
    pub fn standard() -> Self {
        RangeSchedule::new(Self::printable())
    }

    /// Control characters, then `U+007F..=U+00FF`, then the standard passes.
    pub fn extended() -> Self {
        let mut ranges = vec![CharRange::CONTROL, CharRange::HIGH];
        ranges.extend(Self::printable());
        RangeSchedule { ranges }
    }

    fn printable() -> [CharRange; 7] {
        [
            CharRange::SPACE_TO_SLASH,
            CharRange::COLON_TO_AT,
            CharRange::BRACKET_TO_BACKTICK,
            CharRange::BRACE_TO_TILDE,
            CharRange::LOWER,
            CharRange::UPPER,
            CharRange::DIGIT,
        ]
    }

    pub fn ranges(&self) -> &[CharRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
