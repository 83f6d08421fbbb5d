//! The timer window: drains ticks, lays out the egg, the duration field,
//! the progress bar and the start/stop button.

use std::sync::mpsc::Receiver;

use egui::{Align, CentralPanel, Context, Layout, Margin, Sense, Shape, Stroke, TextEdit, Ui};
use eggcore::repaint::RepaintController;
use eggcore::theme::EggColors;
use eggcore::widgets::{bordered, inset, EggButton};

use crate::config::TimerConfig;
use crate::egg::{egg_fill, egg_origin, egg_outline, EGG_REGION_HEIGHT};
use crate::session::{Session, REMAINING_MAX_LEN};
use crate::ticker::Tick;

/// Empty space under the button.
const TRAILING_SPACE: f32 = 25.0;

const BUTTON_HEIGHT: f32 = 40.0;

pub struct EggTimerApp {
    session: Session,
    ticks: Receiver<Tick>,
    repaint: RepaintController,
}

impl EggTimerApp {
    pub fn new(config: &TimerConfig, ticks: Receiver<Tick>) -> Self {
        Self {
            session: Session::new(config.boil_duration),
            ticks,
            repaint: RepaintController::with_interval(config.tick_interval),
        }
    }

    /// Feed every queued tick to the session.  Ticks that arrive while the
    /// timer isn't counting are consumed and dropped here.
    fn drain_ticks(&mut self) {
        let mut changed = false;
        for Tick(increment) in self.ticks.try_iter() {
            changed |= self.session.apply_tick(increment);
        }
        if changed {
            self.repaint.mark_needs_repaint();
        }
    }

    /// One frame.  Ticks are drained before any widget reads input so that
    /// stale ticks never count toward a boil started this frame.
    pub fn show(&mut self, ctx: &Context) {
        self.repaint.begin_frame(ctx);
        tracing::trace!(frame = self.repaint.frame(), reason = ?self.repaint.reason(), "frame");
        self.drain_ticks();

        CentralPanel::default()
            .frame(egui::Frame::none().fill(EggColors::WHITE))
            .show(ctx, |ui| {
                // Stack from the bottom so spare height collects above the egg.
                ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
                    ui.add_space(TRAILING_SPACE);
                    self.start_button(ui);
                    self.progress_bar(ui);
                    self.duration_field(ui);
                    self.egg(ui);
                });
            });

        self.repaint.set_continuous(self.session.is_counting());
        self.repaint.end_frame(ctx);
    }

    fn egg(&self, ui: &mut Ui) {
        let size = egui::vec2(ui.available_width(), EGG_REGION_HEIGHT);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        if ui.is_rect_visible(rect) {
            // Never let the egg's top leave the panel.
            let outline = egg_outline(egg_origin(rect.min, ui.max_rect().top()));
            let fill = egg_fill(self.session.progress());
            ui.painter().add(Shape::convex_polygon(outline, fill, Stroke::NONE));
        }
    }

    fn duration_field(&mut self, ui: &mut Ui) {
        let margin = Margin { left: 0.0, right: 10.0, top: 0.0, bottom: 40.0 };
        let session = &mut self.session;
        inset(ui, margin, |ui| {
            bordered(ui, |ui| {
                let mut text = session.remaining_text().to_owned();
                let response = ui.add(
                    TextEdit::singleline(&mut text)
                        .hint_text("Time in Secs")
                        .horizontal_align(Align::Center)
                        .char_limit(REMAINING_MAX_LEN)
                        .text_color(EggColors::BLACK)
                        .frame(false)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    session.edit_remaining(&text);
                }
            });
        });
    }

    fn progress_bar(&self, ui: &mut Ui) {
        ui.add(egui::ProgressBar::new(self.session.progress()).fill(EggColors::ACCENT));
    }

    fn start_button(&mut self, ui: &mut Ui) {
        let margin = Margin { left: 35.0, right: 35.0, top: 25.0, bottom: 25.0 };
        let label = self.session.button_label();
        let clicked = inset(ui, margin, |ui| ui.add(EggButton::new(label).height(BUTTON_HEIGHT)).clicked());
        if clicked {
            self.session.toggle();
        }
    }
}

impl eframe::App for EggTimerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
