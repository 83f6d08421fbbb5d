//! Layout helpers and the timer's button

use egui::{Margin, Response, Sense, Stroke, TextStyle, Ui, Widget};

use crate::theme::EggColors;

/// Lay out `add_contents` with empty space around it.
pub fn inset<R>(ui: &mut Ui, margin: Margin, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::none()
        .inner_margin(margin)
        .show(ui, add_contents)
        .inner
}

/// 1px rounded outline around a single widget (the duration field).
pub fn bordered<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::none()
        .stroke(Stroke::new(1.0, EggColors::BORDER))
        .rounding(3.0)
        .inner_margin(Margin::symmetric(4.0, 6.0))
        .show(ui, add_contents)
        .inner
}

/// A full-width button: accent fill, white label, darker while hovered
/// or held.
pub struct EggButton<'a> {
    text: &'a str,
    height: f32,
}

impl<'a> EggButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, height: 40.0 }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl<'a> Widget for EggButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = egui::vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            let painter = ui.painter();
            painter.rect_filled(rect, visuals.rounding, visuals.bg_fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                TextStyle::Button.resolve(ui.style()),
                visuals.fg_stroke.color,
            );
        }

        response
    }
}
