//! The three display rows and the updates the engine emits for them
//!
//! Rows hold glyphs most significant first. A renderer right-aligns them
//! into a fixed number of cells with [`DisplayRow::slots`].

use crate::segment::{Glyph, SegmentPattern};

/// Cells per display row.
pub const SLOT_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Mid,
    Bottom,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Top, Row::Mid, Row::Bottom];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRow {
    glyphs: Vec<Glyph>,
}

impl DisplayRow {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(glyphs: impl IntoIterator<Item = Glyph>) -> Self {
        Self {
            glyphs: glyphs.into_iter().collect(),
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn patterns(&self) -> Vec<SegmentPattern> {
        self.glyphs.iter().map(|g| g.pattern()).collect()
    }

    /// Right-aligned cells; unused leading cells are `None`. Rows longer
    /// than the display keep their least significant glyphs.
    pub fn slots(&self) -> [Option<SegmentPattern>; SLOT_COUNT] {
        let mut slots = [None; SLOT_COUNT];
        for (slot, glyph) in slots.iter_mut().rev().zip(self.glyphs.iter().rev()) {
            *slot = Some(glyph.pattern());
        }
        slots
    }

    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.as_char()).collect()
    }
}

/// Everything currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRows {
    pub top: DisplayRow,
    pub mid: DisplayRow,
    pub bottom: DisplayRow,
}

impl DisplayRows {
    pub fn get(&self, row: Row) -> &DisplayRow {
        match row {
            Row::Top => &self.top,
            Row::Mid => &self.mid,
            Row::Bottom => &self.bottom,
        }
    }

    fn get_mut(&mut self, row: Row) -> &mut DisplayRow {
        match row {
            Row::Top => &mut self.top,
            Row::Mid => &mut self.mid,
            Row::Bottom => &mut self.bottom,
        }
    }

    pub fn apply(&mut self, update: &RenderUpdate) {
        for (row, content) in update.changes() {
            *self.get_mut(row) = content.clone();
        }
    }

    /// An update that redraws every row.
    pub fn full_update(&self) -> RenderUpdate {
        let mut update = RenderUpdate::none();
        for row in Row::ALL {
            update.set(row, self.get(row).clone());
        }
        update
    }
}

/// The rows that changed after one key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderUpdate {
    top: Option<DisplayRow>,
    mid: Option<DisplayRow>,
    bottom: Option<DisplayRow>,
}

impl RenderUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: Row, content: DisplayRow) {
        let slot = match row {
            Row::Top => &mut self.top,
            Row::Mid => &mut self.mid,
            Row::Bottom => &mut self.bottom,
        };
        *slot = Some(content);
    }

    pub fn with(mut self, row: Row, content: DisplayRow) -> Self {
        self.set(row, content);
        self
    }

    pub fn get(&self, row: Row) -> Option<&DisplayRow> {
        match row {
            Row::Top => self.top.as_ref(),
            Row::Mid => self.mid.as_ref(),
            Row::Bottom => self.bottom.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.mid.is_none() && self.bottom.is_none()
    }

    pub fn changes(&self) -> impl Iterator<Item = (Row, &DisplayRow)> {
        Row::ALL
            .into_iter()
            .filter_map(move |row| self.get(row).map(|content| (row, content)))
    }

    /// Forward each changed row to a renderer.
    pub fn apply<S: SegmentSink + ?Sized>(&self, sink: &mut S) {
        for (row, content) in self.changes() {
            sink.draw_row(row, &content.slots());
        }
    }
}

/// Something that can show a row of seven-segment cells.
pub trait SegmentSink {
    fn draw_row(&mut self, row: Row, slots: &[Option<SegmentPattern>; SLOT_COUNT]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Digit;

    fn row(text: &str) -> DisplayRow {
        DisplayRow::new(text.chars().map(|c| Glyph::try_from(c).unwrap()))
    }

    #[test]
    fn test_slots_right_aligned() {
        let slots = row("-42").slots();
        assert!(slots[..8].iter().all(Option::is_none));
        assert_eq!(slots[8], Some(Glyph::Minus.pattern()));
        assert_eq!(slots[9], Some(Glyph::Digit(Digit::ALL[4]).pattern()));
        assert_eq!(slots[10], Some(Glyph::Digit(Digit::ALL[2]).pattern()));
    }

    #[test]
    fn test_slots_overlong_keeps_tail() {
        let slots = row("123456789012").slots();
        assert_eq!(slots[0], Some(Glyph::Digit(Digit::ALL[2]).pattern()));
        assert_eq!(slots[10], Some(Glyph::Digit(Digit::ALL[2]).pattern()));
        assert!(slots.iter().all(Option::is_some));
    }

    #[test]
    fn test_empty_row_is_blank() {
        assert!(DisplayRow::empty().slots().iter().all(Option::is_none));
    }

    struct Recorder(Vec<(Row, usize)>);

    impl SegmentSink for Recorder {
        fn draw_row(&mut self, row: Row, slots: &[Option<SegmentPattern>; SLOT_COUNT]) {
            self.0.push((row, slots.iter().flatten().count()));
        }
    }

    #[test]
    fn test_update_reaches_sink_in_row_order() {
        let update = RenderUpdate::none()
            .with(Row::Bottom, row("10"))
            .with(Row::Top, row("7"));
        let mut sink = Recorder(Vec::new());
        update.apply(&mut sink);
        assert_eq!(sink.0, vec![(Row::Top, 1), (Row::Bottom, 2)]);
    }

    #[test]
    fn test_apply_update_to_rows() {
        let mut rows = DisplayRows::default();
        rows.apply(&RenderUpdate::none().with(Row::Mid, row("5")));
        assert_eq!(rows.mid.text(), "5");
        assert!(rows.top.is_empty());
        assert_eq!(rows.full_update().changes().count(), 3);
    }
}
