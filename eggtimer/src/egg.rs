//! Egg silhouette.
//!
//! Parametric egg curve, see <https://observablehq.com/@toja/egg-curve>:
//!
//! ```text
//! x = a·sin θ
//! y = −(√(b² − d²·sin²θ) + d·cos θ)·cos θ
//! ```
//!
//! θ = 0 is the top of the egg at y = −(b + d); θ = 180 the bottom at
//! y = b − d.  Screen y grows downward.

use egui::{Color32, Pos2, Vec2};

use eggcore::EggColors;

/// Where the egg sits inside its region.
pub const EGG_OFFSET: Vec2 = Vec2::new(200.0, 150.0);

/// Height reserved for the egg in the window.
pub const EGG_REGION_HEIGHT: f32 = 375.0;

/// Points on the outline: one per degree, 0 and 360 both included.
pub const OUTLINE_POINTS: usize = 361;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggShape {
    /// Half width.
    pub a: f64,
    /// Half height.
    pub b: f64,
    /// How much the wide end is pushed down.
    pub d: f64,
}

impl EggShape {
    pub const DEFAULT: Self = Self { a: 110.0, b: 150.0, d: 20.0 };

    /// Point at `deg` degrees, relative to the egg's origin.
    pub fn point(&self, deg: f64) -> Pos2 {
        let (sin_t, cos_t) = deg.to_radians().sin_cos();
        let x = self.a * sin_t;
        let y = -((self.b * self.b - self.d * self.d * sin_t * sin_t).sqrt() + self.d * cos_t) * cos_t;
        Pos2::new(x as f32, y as f32)
    }

    /// How far the outline reaches above its origin (the θ = 0 point).
    pub fn top_extent(&self) -> f32 {
        (self.b + self.d) as f32
    }

    /// Closed outline around `origin`; the last point repeats the first.
    pub fn outline(&self, origin: Pos2) -> Vec<Pos2> {
        (0..OUTLINE_POINTS)
            .map(|deg| origin + self.point(deg as f64).to_vec2())
            .collect()
    }
}

impl Default for EggShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Origin for the standard egg in a region whose top-left is `region_min`.
/// Pushed down when the region starts so high that the egg's top would
/// cross `top_limit`.
pub fn egg_origin(region_min: Pos2, top_limit: f32) -> Pos2 {
    let origin = region_min + EGG_OFFSET;
    let lowest_top = top_limit + EggShape::DEFAULT.top_extent();
    Pos2::new(origin.x, origin.y.max(lowest_top))
}

/// Outline of the standard egg, origin at `origin`.
pub fn egg_outline(origin: Pos2) -> Vec<Pos2> {
    EggShape::DEFAULT.outline(origin)
}

/// Shell colour at `progress`: red stays, green and blue fade out.
pub fn egg_fill(progress: f32) -> Color32 {
    let cooked = 1.0 - progress.clamp(0.0, 1.0);
    let fade = |channel: u8| (f32::from(channel) * cooked).round() as u8;
    Color32::from_rgba_unmultiplied(
        EggColors::SHELL.r(),
        fade(EggColors::SHELL.g()),
        fade(EggColors::SHELL.b()),
        255,
    )
}
