//! Burst tuning. Every field has a default taken from the original
//! celebration, so a config file only lists what it overrides.

use serde::{Deserialize, Serialize};

use super::palette::{Color, DEFAULT_PALETTE};

/// Particles per burst when the host does not say otherwise.
pub const DEFAULT_COUNT: usize = 80;

/// Hard ceiling on particles per burst.
pub const MAX_COUNT: usize = u16::MAX as usize;

/// Map a host-supplied count onto `0..=MAX_COUNT`. Negative means none.
pub fn clamp_count(requested: i64) -> usize {
    requested.clamp(0, MAX_COUNT as i64) as usize
}

/// Physics and look of one burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Lower bound of the launch speed (units/frame).
    pub min_speed: f64,
    /// Upper bound of the launch speed (units/frame).
    pub max_speed: f64,
    /// Added to vertical velocity every frame. Positive is down.
    pub gravity: f64,
    /// Life lost per frame. 0.01 gives a ~100 frame burst.
    pub decay_per_frame: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Subtracted from the launch vy, tossing the burst slightly upward.
    pub upward_bias: f64,
    pub palette: Vec<Color>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            min_speed: 3.0,
            max_speed: 8.0,
            gravity: 0.15,
            decay_per_frame: 0.01,
            min_size: 15.0,
            max_size: 30.0,
            upward_bias: 2.0,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl BurstConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_speed_range(mut self, min: f64, max: f64) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_decay(mut self, decay_per_frame: f64) -> Self {
        self.decay_per_frame = decay_per_frame;
        self
    }

    pub fn with_size_range(mut self, min: f64, max: f64) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    pub fn with_upward_bias(mut self, bias: f64) -> Self {
        self.upward_bias = bias;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Replace unusable values with defaults instead of failing.
    ///
    /// Speeds and sizes must be finite and non-negative, gravity and bias
    /// finite, decay finite and positive (otherwise the burst would never
    /// end), and the palette non-empty. Inverted ranges are swapped.
    pub fn sanitized(self) -> Self {
        let fallback = Self::default();
        let mut min_speed = non_negative("min_speed", self.min_speed, fallback.min_speed);
        let mut max_speed = non_negative("max_speed", self.max_speed, fallback.max_speed);
        if min_speed > max_speed {
            std::mem::swap(&mut min_speed, &mut max_speed);
        }
        let mut min_size = non_negative("min_size", self.min_size, fallback.min_size);
        let mut max_size = non_negative("max_size", self.max_size, fallback.max_size);
        if min_size > max_size {
            std::mem::swap(&mut min_size, &mut max_size);
        }
        let decay_per_frame = if self.decay_per_frame.is_finite() && self.decay_per_frame > 0.0 {
            self.decay_per_frame
        } else {
            log::warn!(
                "burst config: decay_per_frame {} would never expire, using {}",
                self.decay_per_frame,
                fallback.decay_per_frame
            );
            fallback.decay_per_frame
        };
        let palette = if self.palette.is_empty() {
            log::warn!("burst config: empty palette, using default");
            fallback.palette
        } else {
            self.palette
        };

        Self {
            min_speed,
            max_speed,
            gravity: finite("gravity", self.gravity, fallback.gravity),
            decay_per_frame,
            min_size,
            max_size,
            upward_bias: finite("upward_bias", self.upward_bias, fallback.upward_bias),
            palette,
        }
    }
}

fn finite(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("burst config: {} = {} is not finite, using {}", name, value, fallback);
        fallback
    }
}

fn non_negative(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("burst config: {} = {} is invalid, using {}", name, value, fallback);
        fallback
    }
}
