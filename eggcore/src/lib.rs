//! eggcore — shared UI plumbing for the egg timer

pub mod repaint;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::{EggColors, EggTheme};
