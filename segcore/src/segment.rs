//! Seven-segment encoding
//!
//! Every glyph the calculator can show is a set of lit segments:
//!
//! ```text
//!      top
//!    +-----+
//!  tl|     |tr
//!    +-mid-+
//!  bl|     |br
//!    +-----+
//!     bottom
//! ```

use std::fmt;
use thiserror::Error;

/// One of the seven bars of a display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Top,
    Mid,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::Top,
        Segment::Mid,
        Segment::Bottom,
        Segment::TopLeft,
        Segment::TopRight,
        Segment::BottomLeft,
        Segment::BottomRight,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("no seven-segment glyph for {0:?}")]
    Unsupported(char),
    #[error("{0} is not a decimal digit")]
    NotADigit(u8),
}

/// On/off state of the seven segments of one display cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Every segment lit (the glyph `8`).
    pub const FULL: SegmentPattern = SegmentPattern(0b111_1111);

    /// Encode one of `0`-`9`, `-` or `E`.
    pub fn encode(ch: char) -> Result<Self, EncodeError> {
        Glyph::try_from(ch).map(Glyph::pattern)
    }

    fn without(self, off: &[Segment]) -> Self {
        let mask = off.iter().fold(0u8, |m, s| m | s.bit());
        SegmentPattern(self.0 & !mask)
    }

    fn only(on: &[Segment]) -> Self {
        SegmentPattern(on.iter().fold(0u8, |m, s| m | s.bit()))
    }

    pub fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    pub fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn lit(self) -> impl Iterator<Item = Segment> {
        Segment::ALL.into_iter().filter(move |s| self.is_lit(*s))
    }
}

impl fmt::Debug for SegmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.lit()).finish()
    }
}

/// A decimal digit. Always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit of an ASCII character, if it is one.
    pub fn from_ascii(b: u8) -> Option<Self> {
        b.is_ascii_digit().then(|| Digit(b - b'0'))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, EncodeError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(EncodeError::NotADigit(value))
        }
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

/// Segments left dark for each digit, indexed by value.
const DIGIT_OFF: [&[Segment]; 10] = {
    use Segment::*;
    [
        &[Mid],
        &[Top, Mid, Bottom, TopLeft, BottomLeft],
        &[TopLeft, BottomRight],
        &[TopLeft, BottomLeft],
        &[Top, Bottom, BottomLeft],
        &[TopRight, BottomLeft],
        &[TopRight],
        &[Mid, Bottom, TopLeft, BottomLeft],
        &[],
        &[Bottom, BottomLeft],
    ]
};

/// A character that has a seven-segment shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Digit(Digit),
    Minus,
    /// The overflow / divide-by-zero sentinel.
    E,
}

impl Glyph {
    pub fn pattern(self) -> SegmentPattern {
        use Segment::*;
        let all = SegmentPattern::FULL;
        match self {
            Glyph::Digit(d) => all.without(DIGIT_OFF[usize::from(d.0)]),
            Glyph::Minus => SegmentPattern::only(&[Mid]),
            Glyph::E => all.without(&[TopRight, BottomRight]),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glyph::Digit(d) => d.as_char(),
            Glyph::Minus => '-',
            Glyph::E => 'E',
        }
    }
}

impl TryFrom<char> for Glyph {
    type Error = EncodeError;

    fn try_from(ch: char) -> Result<Self, EncodeError> {
        match ch {
            '-' => Ok(Glyph::Minus),
            'E' => Ok(Glyph::E),
            other => u8::try_from(other)
                .ok()
                .and_then(Digit::from_ascii)
                .map(Glyph::Digit)
                .ok_or(EncodeError::Unsupported(other)),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
