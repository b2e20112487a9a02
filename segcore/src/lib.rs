//! segcore — engine and shared pieces of the seven-segment calculator
//!
//! The engine side (`segment`, `operand`, `key`, `engine`, `display`,
//! `text`) has no UI dependency and can be driven headless. `theme`,
//! `widgets` and `settings` serve the egui window.

pub mod display;
pub mod engine;
pub mod key;
pub mod operand;
pub mod segment;
pub mod settings;
pub mod text;
pub mod theme;
pub mod widgets;

pub use display::{DisplayRow, DisplayRows, RenderUpdate, Row, SegmentSink, SLOT_COUNT};
pub use engine::{calculate, Calculator, CalculatorState};
pub use key::{Key, KeyError, Operator, KEYPAD};
pub use operand::{Operand, Readout};
pub use segment::{Digit, EncodeError, Glyph, Segment, SegmentPattern};
pub use settings::Settings;
pub use text::TextDisplay;
pub use theme::{Palette, SegTheme};
