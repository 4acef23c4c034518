// extensions/dodge.rs
//
// Geometry for the button that runs away from the pointer.
// Pure math over an injected random source; the host moves the element.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::rng::RandomSource;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin, origin + size)
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// Tuning for the escaping button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeConfig {
    /// Minimum gap kept to the viewport edges.
    pub padding: f64,
    pub button_width: f64,
    pub button_height: f64,
    /// Pointer distance from the button centre that triggers a jump.
    pub proximity: f64,
    /// Random placements tried before settling for an overlapping one.
    pub max_attempts: u32,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            button_width: 120.0,
            button_height: 50.0,
            proximity: 50.0,
            max_attempts: 20,
        }
    }
}

impl DodgeConfig {
    pub fn button_size(&self) -> DVec2 {
        DVec2::new(self.button_width, self.button_height)
    }
}

/// Pick a new top-left corner for the button inside `viewport`, trying to
/// stay clear of `avoid`. Gives up after `max_attempts` and returns the
/// last candidate. A viewport too small for the button pins it at the
/// padding.
pub fn pick_position(
    config: &DodgeConfig,
    viewport: DVec2,
    avoid: Option<Rect>,
    rng: &mut impl RandomSource,
) -> DVec2 {
    let lo = DVec2::splat(config.padding);
    let hi = viewport - config.button_size() - lo;
    let span = (hi - lo).max(DVec2::ZERO);

    let attempts = config.max_attempts.max(1);
    let mut candidate = lo;
    for _ in 0..attempts {
        candidate = lo + DVec2::new(rng.next_f64() * span.x, rng.next_f64() * span.y);
        let Some(avoid) = avoid else {
            break;
        };
        if !Rect::from_origin_size(candidate, config.button_size()).overlaps(&avoid) {
            break;
        }
    }
    candidate
}

/// Whether the pointer is close enough to the button to make it flee.
pub fn within_reach(config: &DodgeConfig, pointer: DVec2, button: &Rect) -> bool {
    pointer.distance(button.center()) < config.proximity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::testing::{Constant, Sequence};
    use crate::core::rng::Rng;

    #[test]
    fn overlap_includes_touching_edges() {
        let a = Rect::new(DVec2::ZERO, DVec2::splat(10.0));
        let touching = Rect::new(DVec2::new(10.0, 0.0), DVec2::new(20.0, 10.0));
        let apart = Rect::new(DVec2::new(10.5, 0.0), DVec2::new(20.0, 10.0));
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn positions_stay_inside_padded_viewport() {
        let config = DodgeConfig::default();
        let viewport = DVec2::new(1024.0, 768.0);
        let mut rng = Rng::new(9);
        for _ in 0..500 {
            let p = pick_position(&config, viewport, None, &mut rng);
            assert!(p.x >= 20.0 && p.x <= 1024.0 - 120.0 - 20.0, "x {}", p.x);
            assert!(p.y >= 20.0 && p.y <= 768.0 - 50.0 - 20.0, "y {}", p.y);
        }
    }

    #[test]
    fn retries_until_clear_of_avoided_rect() {
        let config = DodgeConfig::default();
        let viewport = DVec2::new(1000.0, 1000.0);
        // First try lands at the top-left corner, second far away.
        let avoid = Rect::new(DVec2::ZERO, DVec2::splat(200.0));
        let mut rng = Sequence::new(&[0.0, 0.0, 0.9, 0.9]);
        let p = pick_position(&config, viewport, Some(avoid), &mut rng);
        assert!(!Rect::from_origin_size(p, config.button_size()).overlaps(&avoid));
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let config = DodgeConfig { max_attempts: 3, ..Default::default() };
        let viewport = DVec2::new(500.0, 500.0);
        let everything = Rect::new(DVec2::ZERO, viewport);
        let p = pick_position(&config, viewport, Some(everything), &mut Constant(0.5));
        assert_eq!(p, DVec2::new(20.0 + 0.5 * 340.0, 20.0 + 0.5 * 410.0));
    }

    #[test]
    fn tiny_viewport_pins_to_padding() {
        let config = DodgeConfig::default();
        let p = pick_position(&config, DVec2::new(100.0, 40.0), None, &mut Constant(0.7));
        assert_eq!(p, DVec2::splat(20.0));
    }

    #[test]
    fn reach_is_measured_from_centre() {
        let config = DodgeConfig::default();
        let button = Rect::from_origin_size(DVec2::new(100.0, 100.0), DVec2::new(120.0, 50.0));
        assert!(within_reach(&config, DVec2::new(160.0, 125.0), &button));
        assert!(within_reach(&config, DVec2::new(200.0, 125.0), &button));
        assert!(!within_reach(&config, DVec2::new(210.0, 125.0), &button));
    }
}
