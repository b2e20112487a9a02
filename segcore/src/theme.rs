//! Look of the calculator window
//!
//! Flat black outlines on white. The display rows get their own
//! background, either the classic tinted panels or plain white, and the
//! keys borrow those colours for hover and press.

use egui::{Color32, FontId, Rounding, Stroke, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

use crate::display::Row;

pub struct SegColors;

impl SegColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const LIGHT_GREEN: Color32 = Color32::from_rgb(144, 238, 144);
    pub const LIGHT_BLUE: Color32 = Color32::from_rgb(173, 216, 230);
    pub const LILAC: Color32 = Color32::from_rgb(0xDE, 0xAB, 0xEE);
}

/// Background scheme for the three display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Green, blue and lilac rows.
    #[default]
    Classic,
    /// White rows with a black outline.
    Mono,
}

impl Palette {
    pub fn row_fill(self, row: Row) -> Color32 {
        match (self, row) {
            (Palette::Mono, _) => SegColors::WHITE,
            (Palette::Classic, Row::Top) => SegColors::LIGHT_GREEN,
            (Palette::Classic, Row::Mid) => SegColors::LIGHT_BLUE,
            (Palette::Classic, Row::Bottom) => SegColors::LILAC,
        }
    }

    /// Colour for segments that are off, when they are drawn at all.
    pub fn ghost(self, row: Row) -> Color32 {
        let fill = self.row_fill(row);
        Color32::from_rgb(
            fill.r().saturating_sub(24),
            fill.g().saturating_sub(24),
            fill.b().saturating_sub(24),
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Palette::Classic => "classic",
            Palette::Mono => "mono",
        }
    }
}

/// Window styling for one [`Palette`]. Keys pick up the display row
/// colours while hovered and pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegTheme {
    pub palette: Palette,
    pub text_size: f32,
    pub key_size: f32,
}

impl SegTheme {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            text_size: 14.0,
            key_size: 22.0,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let ink = Stroke::new(1.0, SegColors::BLACK);
        let mut visuals = Visuals::light();
        visuals.panel_fill = SegColors::WHITE;
        visuals.window_fill = SegColors::WHITE;
        visuals.window_stroke = ink;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;
        visuals.selection.bg_fill = self.palette.row_fill(Row::Mid);
        visuals.selection.stroke = ink;

        let w = &mut visuals.widgets;
        let states = [
            (&mut w.noninteractive, SegColors::WHITE),
            (&mut w.inactive, SegColors::WHITE),
            (&mut w.hovered, self.palette.ghost(Row::Mid)),
            (&mut w.active, self.palette.ghost(Row::Bottom)),
            (&mut w.open, self.palette.row_fill(Row::Mid)),
        ];
        for (widget, fill) in states {
            widget.bg_fill = fill;
            widget.weak_bg_fill = fill;
            widget.bg_stroke = ink;
            widget.fg_stroke = ink;
            widget.rounding = Rounding::ZERO;
        }
        visuals
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = self.visuals();
        style.text_styles = [
            (TextStyle::Small, FontId::proportional(self.text_size - 3.0)),
            (TextStyle::Body, FontId::proportional(self.text_size)),
            (TextStyle::Button, FontId::proportional(self.key_size)),
            (TextStyle::Heading, FontId::proportional(self.text_size + 6.0)),
            (TextStyle::Monospace, FontId::monospace(self.text_size)),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(4.0, 4.0);
        ctx.set_style(style);
        tracing::debug!(palette = self.palette.label(), "theme applied");
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(SegColors::WHITE)
        .stroke(Stroke::new(1.0, SegColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rows_differ() {
        let fills: Vec<_> = Row::ALL.iter().map(|r| Palette::Classic.row_fill(*r)).collect();
        assert_ne!(fills[0], fills[1]);
        assert_ne!(fills[1], fills[2]);
        assert_eq!(fills[2], Color32::from_rgb(222, 171, 238));
    }

    #[test]
    fn test_ghost_is_darker_than_fill() {
        for row in Row::ALL {
            let fill = Palette::Mono.row_fill(row);
            let ghost = Palette::Mono.ghost(row);
            assert!(ghost.r() < fill.r());
        }
    }

    #[test]
    fn test_key_states_follow_palette() {
        let classic = SegTheme::new(Palette::Classic).visuals();
        assert_eq!(classic.widgets.inactive.bg_fill, SegColors::WHITE);
        assert_eq!(classic.widgets.hovered.bg_fill, Palette::Classic.ghost(Row::Mid));
        assert_eq!(classic.widgets.active.bg_fill, Palette::Classic.ghost(Row::Bottom));
        assert_eq!(classic.selection.bg_fill, SegColors::LIGHT_BLUE);

        let mono = SegTheme::new(Palette::Mono).visuals();
        assert_ne!(mono.widgets.hovered.bg_fill, classic.widgets.hovered.bg_fill);
        assert_eq!(mono.selection.bg_fill, SegColors::WHITE);
    }

    #[test]
    fn test_apply_sets_context_style() {
        let ctx = egui::Context::default();
        SegTheme::new(Palette::Classic).apply(&ctx);
        assert_eq!(ctx.style().visuals.selection.bg_fill, SegColors::LIGHT_BLUE);
        SegTheme::new(Palette::Mono).apply(&ctx);
        assert_eq!(ctx.style().visuals.widgets.open.bg_fill, SegColors::WHITE);
        assert_eq!(ctx.style().text_styles[&TextStyle::Button].size, 22.0);
    }
}
