//! The boil session: progress, the boiling flag and the duration field.

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not boiling, egg not done.
    Idle,
    /// Counting toward done.
    Boiling,
    /// Progress reached 1.  Stays here whatever the button says.
    Complete,
}

/// Max characters in the duration field.
pub const REMAINING_MAX_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct Session {
    progress: f32,
    boiling: bool,
    boil_duration: f32,
    remaining_text: String,
}

impl Session {
    pub fn new(boil_duration: f32) -> Self {
        Self {
            progress: 0.0,
            boiling: false,
            boil_duration,
            remaining_text: String::new(),
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_boiling(&self) -> bool {
        self.boiling
    }

    pub fn remaining_text(&self) -> &str {
        &self.remaining_text
    }

    pub fn phase(&self) -> Phase {
        if self.progress >= 1.0 {
            Phase::Complete
        } else if self.boiling {
            Phase::Boiling
        } else {
            Phase::Idle
        }
    }

    /// Whether ticks currently count.
    pub fn is_counting(&self) -> bool {
        self.phase() == Phase::Boiling
    }

    /// Start/stop button.  Progress is kept either way.
    pub fn toggle(&mut self) {
        self.boiling = !self.boiling;
        match self.phase() {
            Phase::Boiling => tracing::info!(progress = self.progress, "boiling"),
            Phase::Idle => tracing::info!(progress = self.progress, "stopped"),
            Phase::Complete => tracing::debug!(boiling = self.boiling, "toggled after completion"),
        }
    }

    /// Apply one tick.  Returns whether anything changed, in which case the
    /// view needs a repaint.
    ///
    /// The remaining time shown is the one *before* this tick advances
    /// progress, and it replaces whatever the user typed.
    pub fn apply_tick(&mut self, increment: f32) -> bool {
        if !self.is_counting() {
            return false;
        }

        self.remaining_text = remaining_label(self.progress, self.boil_duration);

        let next = self.progress + increment;
        // Snap the last tick onto 1 so f32 drift can't leave the egg a hair short.
        self.progress = if next >= 1.0 - increment * 0.5 { 1.0 } else { next.max(0.0) };

        if self.progress >= 1.0 {
            tracing::info!(duration = self.boil_duration, "egg is done");
        }
        true
    }

    /// User typed into the duration field.  Anything that isn't a digit or
    /// a dot is dropped, and the text is cut at the field's max length.
    pub fn edit_remaining(&mut self, text: &str) {
        self.remaining_text = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .take(REMAINING_MAX_LEN)
            .collect();
    }

    /// Label for the start/stop button.
    pub fn button_label(&self) -> &'static str {
        if self.is_boiling() {
            "stop"
        } else {
            "Start"
        }
    }
}

/// Seconds left at `progress`, rounded to a tenth and printed with two
/// decimals: 50 → "50.00".
pub fn remaining_label(progress: f32, boil_duration: f32) -> String {
    let remaining = f64::from((1.0 - progress) * boil_duration);
    format!("{:.2}", (remaining * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.004;

    #[test]
    fn test_new_session_is_idle() {
        let s = Session::new(100.0);
        assert_eq!(s.progress(), 0.0);
        assert!(!s.is_boiling());
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.remaining_text(), "");
        assert_eq!(s.button_label(), "Start");
    }

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(0.5, 100.0), "50.00");
        assert_eq!(remaining_label(0.0, 100.0), "100.00");
        assert_eq!(remaining_label(0.996, 100.0), "0.40");
        assert_eq!(remaining_label(0.123, 100.0), "87.70");
    }

    #[test]
    fn test_250_ticks_complete_the_egg() {
        let mut s = Session::new(100.0);
        s.toggle();
        assert_eq!(s.phase(), Phase::Boiling);
        for i in 0..250 {
            assert!(s.apply_tick(STEP), "tick {i} ignored");
        }
        assert!((s.progress() - 1.0).abs() < 1e-6);
        assert_eq!(s.phase(), Phase::Complete);
    }

    #[test]
    fn test_first_tick_shows_full_duration() {
        let mut s = Session::new(100.0);
        s.toggle();
        s.apply_tick(STEP);
        assert_eq!(s.remaining_text(), "100.00");
        assert!((s.progress() - STEP).abs() < 1e-6);
    }

    #[test]
    fn test_ticks_ignored_while_idle() {
        let mut s = Session::new(100.0);
        for _ in 0..10 {
            assert!(!s.apply_tick(STEP));
        }
        assert_eq!(s.progress(), 0.0);
        assert_eq!(s.remaining_text(), "");
    }

    #[test]
    fn test_ticks_ignored_after_completion() {
        let mut s = Session::new(100.0);
        s.toggle();
        for _ in 0..250 {
            s.apply_tick(STEP);
        }
        let text = s.remaining_text().to_string();
        let progress = s.progress();
        for _ in 0..10 {
            assert!(!s.apply_tick(STEP));
        }
        assert_eq!(s.progress(), progress);
        assert_eq!(s.remaining_text(), text);
        assert!(s.progress() <= 1.0);
    }

    #[test]
    fn test_toggle_keeps_progress() {
        let mut s = Session::new(100.0);
        s.toggle();
        for _ in 0..10 {
            s.apply_tick(STEP);
        }
        let progress = s.progress();

        s.toggle();
        assert!(!s.is_boiling());
        assert_eq!(s.button_label(), "Start");
        assert_eq!(s.progress(), progress);

        s.toggle();
        assert!(s.is_boiling());
        assert_eq!(s.button_label(), "stop");
        assert_eq!(s.progress(), progress);
    }

    #[test]
    fn test_button_never_says_finished() {
        let mut s = Session::new(100.0);
        s.toggle();
        for _ in 0..300 {
            s.apply_tick(STEP);
        }
        assert_eq!(s.phase(), Phase::Complete);
        assert_eq!(s.button_label(), "stop");
        s.toggle();
        assert_eq!(s.phase(), Phase::Complete);
        assert_eq!(s.button_label(), "Start");
    }

    #[test]
    fn test_tick_overwrites_user_edit() {
        let mut s = Session::new(100.0);
        s.edit_remaining("42");
        assert_eq!(s.remaining_text(), "42");
        s.toggle();
        for _ in 0..125 {
            s.apply_tick(STEP);
        }
        s.apply_tick(STEP);
        assert_eq!(s.remaining_text(), "50.00");
    }

    #[test]
    fn test_edit_drops_junk_and_clamps_length() {
        let mut s = Session::new(100.0);
        s.edit_remaining("1a2.b34567");
        assert_eq!(s.remaining_text(), "12.3");
        s.edit_remaining("");
        assert_eq!(s.remaining_text(), "");
        s.edit_remaining("soft");
        assert_eq!(s.remaining_text(), "");
    }
}
