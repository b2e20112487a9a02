//! Calculator window: three display rows above the keypad

use std::path::PathBuf;

use egui::Context;
use segcore::key::KEYPAD_COLUMNS;
use segcore::theme::{menu_bar, SegColors};
use segcore::widgets::{KeyButton, SegmentDisplay};
use segcore::{Calculator, Palette, Row, SegTheme, Settings, KEYPAD};

const ROW_HEIGHT: f32 = 64.0;
const BUTTON_HEIGHT: f32 = 52.0;

pub struct SegCalcApp {
    calc: Calculator,
    settings: Settings,
    settings_path: PathBuf,
    show_about: bool,
}

impl SegCalcApp {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            calc: Calculator::new(),
            settings,
            settings_path,
            show_about: false,
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let rows = self.calc.display();
        for row in Row::ALL {
            ui.add(
                SegmentDisplay::new(rows.get(row), row)
                    .palette(self.settings.palette)
                    .ghosts(self.settings.show_segment_ghosts)
                    .height(ROW_HEIGHT),
            );
        }
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let column = (ui.available_width() - spacing * (KEYPAD_COLUMNS - 1) as f32)
            / KEYPAD_COLUMNS as f32;

        for buttons in KEYPAD {
            ui.horizontal(|ui| {
                for button in buttons {
                    let width = column * button.span as f32 + spacing * (button.span - 1) as f32;
                    let size = egui::vec2(width, BUTTON_HEIGHT);
                    if ui.add(KeyButton::new(button.key.label(), size)).clicked() {
                        self.calc.handle_key(button.key);
                    }
                }
            });
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        menu_bar(ui, |ui| {
            ui.menu_button("view", |ui| {
                for palette in [Palette::Classic, Palette::Mono] {
                    if ui
                        .selectable_label(self.settings.palette == palette, palette.label())
                        .clicked()
                    {
                        self.settings.palette = palette;
                        SegTheme::new(palette).apply(ui.ctx());
                        self.settings.save(&self.settings_path);
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui
                    .checkbox(&mut self.settings.show_segment_ghosts, "unlit segments")
                    .changed()
                {
                    self.settings.save(&self.settings_path);
                }
            });
            ui.menu_button("help", |ui| {
                if ui.button("about").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
            });
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("integer arithmetic on seven-segment displays");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("C clears, +/- flips the sign of the bottom row.");
                ui.label("E means overflow or division by zero.");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for SegCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.render_menu(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SegColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
