//! segcalc - a calculator with seven-segment displays
//!
//! Opens the calculator window, or with `--keys` runs a key sequence
//! headless and prints the display as text.

mod app;

use std::process::ExitCode;

use app::SegCalcApp;
use clap::Parser;
use eframe::NativeOptions;
use segcore::{Calculator, Palette, SegTheme, Settings, TextDisplay};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "A calculator that shows its numbers on seven-segment displays")]
struct Cli {
    /// Press these keypad labels (whitespace separated, e.g. "7 + 3 Enter")
    /// and print the display instead of opening a window.
    #[arg(long, value_name = "LABELS")]
    keys: Option<String>,

    /// Use the black-and-white palette for this run.
    #[arg(long)]
    mono: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SEGCALC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_headless(labels: &str) -> ExitCode {
    let mut calc = Calculator::new();
    for label in labels.split_whitespace() {
        if let Err(e) = calc.press(label) {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    }
    print!("{}", TextDisplay::from_rows(calc.display()));
    ExitCode::SUCCESS
}

fn run_window(cli: &Cli) -> eframe::Result<()> {
    let settings_path = Settings::default_path();
    let mut settings = Settings::load(&settings_path);
    if cli.mono {
        settings.palette = Palette::Mono;
    }
    tracing::info!(palette = settings.palette.label(), "starting calculator");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 560.0])
            .with_title("calculator"),
        ..Default::default()
    };

    let theme = SegTheme::new(settings.palette);
    eframe::run_native(
        "segcalc",
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Box::new(SegCalcApp::new(settings, settings_path))
        }),
    )
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    if let Some(labels) = cli.keys.as_deref() {
        return run_headless(labels);
    }

    match run_window(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("calculator window failed: {e}");
            ExitCode::FAILURE
        }
    }
}
