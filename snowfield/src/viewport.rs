use serde::{Deserialize, Serialize};

/// Upper bound on the population of a single field.
pub const MAX_FLAKES: usize = 20_000;

/// Size of the drawable surface in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }

    /// Measures the surface from window geometry. When a boundary element is present the
    /// surface ends where that element begins.
    pub fn measure(inner_width: f64, inner_height: f64, boundary_top: Option<f64>) -> Viewport {
        Viewport {
            width: pixels(inner_width),
            height: pixels(boundary_top.unwrap_or(inner_height)),
        }
    }

    pub fn extent(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// Number of particles a field of this size holds, capped at [`MAX_FLAKES`].
    pub fn particle_capacity(&self, area_per_flake: f64) -> usize {
        if area_per_flake > 0.0 {
            ((self.area() / area_per_flake).floor() as usize).min(MAX_FLAKES)
        } else {
            0
        }
    }
}

// Float-to-int casts saturate: NaN and negatives land on zero.
fn pixels(value: f64) -> u32 {
    value.floor() as u32
}
