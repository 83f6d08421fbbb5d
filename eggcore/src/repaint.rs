//! Repaint controller
//!
//! egui is an immediate-mode GUI: every frame rebuilds everything, and a
//! frame only runs when something asks for one.  The egg timer changes
//! state from a background tick stream, so it has to ask explicitly.
//!
//! `RepaintController` sits between the app and egui's repaint scheduler.
//! It tracks *why* a repaint is needed and coalesces requests:
//!
//! 1. **Input-driven** — user typed or clicked.  egui already repaints.
//! 2. **State change** — the app mutated its state outside of input (a tick
//!    advanced the timer).  One immediate repaint, no matter how many
//!    changes were marked during the frame.
//! 3. **Continuous** — the app is counting and needs frames at a steady
//!    cadence to drain its tick queue.  Repaint after the configured interval.
//! 4. **Idle** — nothing happened.  Do *not* repaint.
//!
//! Call `rc.mark_needs_repaint()` after a state change (the "invalidate").
//! Call `rc.set_continuous(true)` while a timer is running and
//! `rc.set_continuous(false)` when it stops.

use std::time::Duration;

/// Default interval between continuous repaints (25 Hz).
const DEFAULT_REPAINT_INTERVAL: Duration = Duration::from_millis(40);

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, key press, click).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
    /// Timed continuous repaint.
    Continuous,
}

/// What `end_frame` asked egui for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextRepaint {
    /// Nothing scheduled; egui wakes on the next input event.
    Idle,
    /// `request_repaint()` — paint again as soon as possible.
    Immediate,
    /// `request_repaint_after(interval)`.
    After(Duration),
}

/// Controls when the egui context should request repaints.
///
/// Drop this into your app struct and call [`begin_frame`] at the top of
/// `update()` and [`end_frame`] at the bottom.
///
/// [`begin_frame`]: RepaintController::begin_frame
/// [`end_frame`]: RepaintController::end_frame
#[derive(Debug)]
pub struct RepaintController {
    /// Whether continuous (timed) repainting is active.
    continuous: bool,
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
    /// Repaint interval when continuous is active.
    interval: Duration,
    /// Frame counter (0 = first frame).
    frame: u64,
    /// Why the current frame is being painted (set by begin_frame).
    reason: RepaintReason,
    /// What the last end_frame scheduled.
    scheduled: NextRepaint,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            continuous: false,
            needs_repaint: false,
            interval: DEFAULT_REPAINT_INTERVAL,
            frame: 0,
            reason: RepaintReason::Init,
            scheduled: NextRepaint::Idle,
        }
    }

    /// Create a controller whose continuous mode repaints every `interval`.
    /// The egg timer passes its tick interval here so that each frame
    /// drains roughly one tick.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::new()
        }
    }

    /// Enable or disable continuous (timed) repainting.
    pub fn set_continuous(&mut self, continuous: bool) {
        if continuous != self.continuous {
            tracing::debug!(continuous, "repaint mode changed");
        }
        self.continuous = continuous;
    }

    /// Returns whether continuous mode is active.
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Request a single repaint on the next opportunity.
    ///
    /// Marking several times in one frame still yields one repaint.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Returns why the current frame is being painted.
    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    /// What the previous `end_frame` scheduled.
    pub fn scheduled(&self) -> NextRepaint {
        self.scheduled
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the **start** of your `update()` method.
    ///
    /// Inspects the egui input to determine why this frame is running
    /// and sets the repaint reason accordingly.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else if self.continuous {
            RepaintReason::Continuous
        } else {
            // Woken by something egui knows about (resize, focus).
            RepaintReason::Input
        };

        self.needs_repaint = false;
    }

    /// Call at the **end** of your `update()` method.
    ///
    /// - One-shot request pending → immediate repaint.
    /// - Continuous mode → repaint after the configured interval.
    /// - Otherwise → no repaint.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        self.scheduled = if self.needs_repaint {
            ctx.request_repaint();
            NextRepaint::Immediate
        } else if self.continuous {
            ctx.request_repaint_after(self.interval);
            NextRepaint::After(self.interval)
        } else {
            NextRepaint::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ctx: &egui::Context, f: impl FnOnce(&egui::Context)) {
        let _ = ctx.run(egui::RawInput::default(), f);
    }

    #[test]
    fn test_first_frame_is_init() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        run_frame(&ctx, |ctx| {
            rc.begin_frame(ctx);
            rc.end_frame(ctx);
        });
        assert_eq!(rc.reason(), RepaintReason::Init);
        assert_eq!(rc.frame(), 1);
        assert_eq!(rc.scheduled(), NextRepaint::Idle);
    }

    #[test]
    fn test_marks_coalesce_into_one_immediate_repaint() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        run_frame(&ctx, |ctx| {
            rc.begin_frame(ctx);
            rc.mark_needs_repaint();
            rc.mark_needs_repaint();
            rc.mark_needs_repaint();
            rc.end_frame(ctx);
        });
        assert_eq!(rc.scheduled(), NextRepaint::Immediate);

        run_frame(&ctx, |ctx| {
            rc.begin_frame(ctx);
            rc.end_frame(ctx);
        });
        assert_eq!(rc.reason(), RepaintReason::StateChange);
        assert_eq!(rc.scheduled(), NextRepaint::Idle);
    }

    #[test]
    fn test_continuous_uses_interval() {
        let ctx = egui::Context::default();
        let interval = Duration::from_millis(40);
        let mut rc = RepaintController::with_interval(interval);
        rc.set_continuous(true);
        assert!(rc.is_continuous());

        for _ in 0..2 {
            run_frame(&ctx, |ctx| {
                rc.begin_frame(ctx);
                rc.end_frame(ctx);
            });
        }
        assert_eq!(rc.reason(), RepaintReason::Continuous);
        assert_eq!(rc.scheduled(), NextRepaint::After(interval));

        rc.set_continuous(false);
        run_frame(&ctx, |ctx| {
            rc.begin_frame(ctx);
            rc.end_frame(ctx);
        });
        assert_eq!(rc.scheduled(), NextRepaint::Idle);
    }
}
