//! Plain-text seven-segment renderer
//!
//! Draws each cell three characters wide and three lines tall:
//!
//! ```text
//!  _     _  _     _
//! | |  | _| _||_||_
//! |_|  ||_  _|  | _|
//! ```
//!
//! Used by the headless command line and handy in logs.

use std::fmt;

use crate::display::{DisplayRows, Row, SegmentSink, SLOT_COUNT};
use crate::segment::{Segment, SegmentPattern};

type Slots = [Option<SegmentPattern>; SLOT_COUNT];

/// A [`SegmentSink`] that keeps the last drawn slots of each row as text.
#[derive(Debug, Clone)]
pub struct TextDisplay {
    rows: [Slots; 3],
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self {
            rows: [[None; SLOT_COUNT]; 3],
        }
    }
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: &DisplayRows) -> Self {
        let mut display = Self::new();
        rows.full_update().apply(&mut display);
        display
    }

    fn index(row: Row) -> usize {
        match row {
            Row::Top => 0,
            Row::Mid => 1,
            Row::Bottom => 2,
        }
    }

    /// The three text lines of one row.
    pub fn row_lines(&self, row: Row) -> [String; 3] {
        render_slots(&self.rows[Self::index(row)])
    }
}

impl SegmentSink for TextDisplay {
    fn draw_row(&mut self, row: Row, slots: &Slots) {
        self.rows[Self::index(row)] = *slots;
    }
}

impl fmt::Display for TextDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Row::ALL {
            for line in self.row_lines(row) {
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

fn render_slots(slots: &Slots) -> [String; 3] {
    let mut lines = [String::new(), String::new(), String::new()];
    for slot in slots {
        let cell = slot.map(render_cell).unwrap_or([[' '; 3]; 3]);
        for (line, chars) in lines.iter_mut().zip(cell) {
            line.extend(chars);
        }
    }
    lines
}

fn render_cell(pattern: SegmentPattern) -> [[char; 3]; 3] {
    let on = |segment: Segment, ch: char| if pattern.is_lit(segment) { ch } else { ' ' };
    [
        [' ', on(Segment::Top, '_'), ' '],
        [
            on(Segment::TopLeft, '|'),
            on(Segment::Mid, '_'),
            on(Segment::TopRight, '|'),
        ],
        [
            on(Segment::BottomLeft, '|'),
            on(Segment::Bottom, '_'),
            on(Segment::BottomRight, '|'),
        ],
    ]
}
