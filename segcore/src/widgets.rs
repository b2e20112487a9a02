//! Custom widgets: seven-segment display rows and keypad buttons

use egui::{pos2, vec2, Pos2, Rect, Response, Sense, Stroke, Ui, Widget};

use crate::display::{DisplayRow, Row, SLOT_COUNT};
use crate::segment::{Segment, SegmentPattern};
use crate::theme::{Palette, SegColors};

/// Gap kept free on every side of a cell, as a fraction of its width.
const CELL_MARGIN: f32 = 0.12;
/// Segment thickness, as a fraction of the cell width.
const STROKE_RATIO: f32 = 0.12;

/// End points of one segment inside a cell.
pub fn segment_line(segment: Segment, cell: Rect) -> [Pos2; 2] {
    let inset = cell.width() * CELL_MARGIN;
    let (left, right) = (cell.left() + inset, cell.right() - inset);
    let (top, bottom) = (cell.top() + inset, cell.bottom() - inset);
    let mid = cell.center().y;
    match segment {
        Segment::Top => [pos2(left, top), pos2(right, top)],
        Segment::Mid => [pos2(left, mid), pos2(right, mid)],
        Segment::Bottom => [pos2(left, bottom), pos2(right, bottom)],
        Segment::TopLeft => [pos2(left, top), pos2(left, mid)],
        Segment::TopRight => [pos2(right, top), pos2(right, mid)],
        Segment::BottomLeft => [pos2(left, mid), pos2(left, bottom)],
        Segment::BottomRight => [pos2(right, mid), pos2(right, bottom)],
    }
}

/// Cell rectangles of a row, left to right.
pub fn cell_rects(rect: Rect) -> impl Iterator<Item = Rect> {
    let width = rect.width() / SLOT_COUNT as f32;
    (0..SLOT_COUNT).map(move |i| {
        Rect::from_min_size(
            pos2(rect.left() + width * i as f32, rect.top()),
            vec2(width, rect.height()),
        )
    })
}

/// One row of the display: [`SLOT_COUNT`] cells, right-aligned digits.
pub struct SegmentDisplay<'a> {
    content: &'a DisplayRow,
    row: Row,
    palette: Palette,
    ghosts: bool,
    height: f32,
}

impl<'a> SegmentDisplay<'a> {
    pub fn new(content: &'a DisplayRow, row: Row) -> Self {
        Self {
            content,
            row,
            palette: Palette::default(),
            ghosts: false,
            height: 56.0,
        }
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Also draw unlit segments, faintly.
    pub fn ghosts(mut self, ghosts: bool) -> Self {
        self.ghosts = ghosts;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    fn paint_cell(&self, painter: &egui::Painter, cell: Rect, pattern: Option<SegmentPattern>) {
        let stroke_width = cell.width() * STROKE_RATIO;
        let ghost = Stroke::new(stroke_width, self.palette.ghost(self.row));
        let lit = Stroke::new(stroke_width, SegColors::BLACK);
        for segment in Segment::ALL {
            let on = pattern.is_some_and(|p| p.is_lit(segment));
            if on {
                painter.line_segment(segment_line(segment, cell), lit);
            } else if self.ghosts {
                painter.line_segment(segment_line(segment, cell), ghost);
            }
        }
    }
}

impl<'a> Widget for SegmentDisplay<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired = vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, self.palette.row_fill(self.row));
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, SegColors::BLACK));
            for (cell, pattern) in cell_rects(rect).zip(self.content.slots()) {
                self.paint_cell(painter, cell, pattern);
            }
        }

        response
    }
}

/// A keypad button: white with a 1px outline, inverted while held.
pub struct KeyButton<'a> {
    text: &'a str,
    size: egui::Vec2,
}

impl<'a> KeyButton<'a> {
    pub fn new(text: &'a str, size: egui::Vec2) -> Self {
        Self { text, size }
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let pressed = response.is_pointer_button_down_on();
            let (fill, text_color) = if pressed {
                (SegColors::BLACK, SegColors::WHITE)
            } else {
                (SegColors::WHITE, SegColors::BLACK)
            };
            painter.rect_filled(rect, 0.0, fill);
            let outline = if response.hovered() { 2.0 } else { 1.0 };
            painter.rect_stroke(rect, 0.0, Stroke::new(outline, SegColors::BLACK));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::TextStyle::Button.resolve(ui.style()),
                text_color,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_cover_row() {
        let rect = Rect::from_min_size(pos2(10.0, 0.0), vec2(220.0, 40.0));
        let cells: Vec<_> = cell_rects(rect).collect();
        assert_eq!(cells.len(), SLOT_COUNT);
        assert_eq!(cells[0].left(), 10.0);
        assert!((cells[SLOT_COUNT - 1].right() - 230.0).abs() < 1e-3);
    }

    #[test]
    fn test_segments_stay_inside_cell() {
        let cell = Rect::from_min_size(pos2(0.0, 0.0), vec2(20.0, 40.0));
        for segment in Segment::ALL {
            for p in segment_line(segment, cell) {
                assert!(cell.contains(p), "{segment:?} leaves the cell");
            }
        }
    }

    #[test]
    fn test_mid_is_centered() {
        let cell = Rect::from_min_size(pos2(0.0, 0.0), vec2(20.0, 40.0));
        let [a, b] = segment_line(Segment::Mid, cell);
        assert_eq!(a.y, 20.0);
        assert_eq!(b.y, 20.0);
        assert!(a.x < b.x);
    }
}
