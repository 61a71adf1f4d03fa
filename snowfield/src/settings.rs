use std::fmt;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::uniform;

const DEFAULT_AREA_PER_FLAKE: f64 = 8000.0;
const DEFAULT_POINTER_RADIUS: f64 = 100.0;
const DEFAULT_REPULSION: f64 = 3.0;
const DEFAULT_FADE_ZONE: f64 = 150.0;
const DEFAULT_MARGIN: f64 = 10.0;

/// Smallest accepted area per flake, one flake per square pixel.
pub const MIN_AREA_PER_FLAKE: f64 = 1.0;

/// Errors concerning invalid [`FieldSettings`].
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsError(pub String);

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid settings: {}", self.0)
    }
}

impl std::error::Error for SettingsError {}

/// A half-open range `[low, high)` that particle attributes are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub low: f64,
    pub high: f64,
}

impl Span {
    pub const fn new(low: f64, high: f64) -> Span {
        Span { low, high }
    }

    pub fn sample(&self, rng: &mut ChaCha8Rng) -> f64 {
        uniform(rng, self.low, self.high)
    }

    fn validate(&self, name: &str) -> Result<(), SettingsError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            Err(SettingsError(format!("{name} bounds must be finite")))
        } else if !(self.high - self.low).is_finite() {
            Err(SettingsError(format!("{name} range is too wide")))
        } else if self.low > self.high {
            Err(SettingsError(format!(
                "{name} low bound {} exceeds high bound {}",
                self.low, self.high
            )))
        } else {
            Ok(())
        }
    }
}

/// Tunable constants of the snowfall. The defaults reproduce the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Viewport area in square pixels per snowflake.
    pub area_per_flake: f64,
    /// Distance within which the pointer pushes snowflakes away.
    pub pointer_radius: f64,
    /// Impulse applied at zero distance from the pointer.
    pub repulsion: f64,
    /// Height of the band at the bottom of the surface where snowflakes fade out.
    pub fade_zone: f64,
    /// How far outside the surface a snowflake may travel before it is moved back.
    pub margin: f64,
    pub size: Span,
    pub speed: Span,
    pub opacity: Span,
    pub wind: Span,
}

impl Default for FieldSettings {
    fn default() -> Self {
        FieldSettings {
            area_per_flake: DEFAULT_AREA_PER_FLAKE,
            pointer_radius: DEFAULT_POINTER_RADIUS,
            repulsion: DEFAULT_REPULSION,
            fade_zone: DEFAULT_FADE_ZONE,
            margin: DEFAULT_MARGIN,
            size: Span::new(1.0, 5.0),
            speed: Span::new(0.5, 1.5),
            opacity: Span::new(0.4, 1.0),
            wind: Span::new(-0.25, 0.25),
        }
    }
}

impl FieldSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.area_per_flake.is_finite() && self.area_per_flake >= MIN_AREA_PER_FLAKE) {
            return Err(SettingsError(format!(
                "area_per_flake must be at least {MIN_AREA_PER_FLAKE}, got {}",
                self.area_per_flake
            )));
        }

        if !(self.fade_zone.is_finite() && self.fade_zone > 0.0) {
            return Err(SettingsError(format!(
                "fade_zone must be positive, got {}",
                self.fade_zone
            )));
        }

        for (name, value) in [
            ("pointer_radius", self.pointer_radius),
            ("repulsion", self.repulsion),
            ("margin", self.margin),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        self.size.validate("size")?;
        self.speed.validate("speed")?;
        self.opacity.validate("opacity")?;
        self.wind.validate("wind")?;

        Ok(())
    }
}
