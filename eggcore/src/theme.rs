//! Egg timer theme
//!
//! Light visuals, egui's built-in fonts, a handful of fixed colours.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The colours the timer draws with.
pub struct EggColors;

impl EggColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Raw egg shell; the egg fades from this toward pure red.
    pub const SHELL: Color32 = Color32::from_rgb(255, 239, 174);
    /// Text field outline and progress bar track.
    pub const BORDER: Color32 = Color32::from_rgb(204, 204, 204);
    /// Progress bar and button fill.
    pub const ACCENT: Color32 = Color32::from_rgb(63, 81, 181);
}

/// Theme configuration for the egg timer
pub struct EggTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_small: f32,
    pub item_spacing: f32,
    pub widget_rounding: f32,
}

impl Default for EggTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_button: 16.0,
            font_size_small: 12.0,
            item_spacing: 0.0,
            widget_rounding: 4.0,
        }
    }
}

impl EggTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    /// Build the style without installing it.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_body * 1.5, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.panel_fill = EggColors::WHITE;
        visuals.window_fill = EggColors::WHITE;
        // Progress bar track; the duration field draws no background.
        visuals.extreme_bg_color = EggColors::BORDER;
        visuals.selection.bg_fill = EggColors::ACCENT;
        visuals.selection.stroke = Stroke::new(1.0, EggColors::WHITE);

        let rounding = Rounding::same(self.widget_rounding);
        let flat = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::NONE;
            ws.rounding = rounding;
        };
        flat(&mut visuals.widgets.inactive, EggColors::ACCENT);
        flat(&mut visuals.widgets.hovered, EggColors::ACCENT.gamma_multiply(0.85));
        flat(&mut visuals.widgets.active, EggColors::ACCENT.gamma_multiply(0.7));
        // Button text sits on the accent fill.
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, EggColors::WHITE);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, EggColors::WHITE);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, EggColors::WHITE);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_uses_theme_sizes() {
        let theme = EggTheme::default();
        let style = theme.style();
        assert_eq!(style.text_styles[&TextStyle::Body].size, theme.font_size_body);
        assert_eq!(style.text_styles[&TextStyle::Button].size, theme.font_size_button);
        assert_eq!(style.visuals.widgets.inactive.bg_fill, EggColors::ACCENT);
    }

    #[test]
    fn test_progress_track_visible_on_panel() {
        let visuals = EggTheme::default().style().visuals;
        assert_ne!(visuals.extreme_bg_color, visuals.panel_fill);
        assert_eq!(visuals.extreme_bg_color, EggColors::BORDER);
    }

    #[test]
    fn test_shell_matches_uncooked_egg() {
        assert_eq!(EggColors::SHELL.r(), 255);
        assert_eq!(EggColors::SHELL.g(), 239);
        assert_eq!(EggColors::SHELL.b(), 174);
    }
}
