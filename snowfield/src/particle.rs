use rand_chacha::ChaCha8Rng;

use crate::{uniform, FieldSettings, Pointer, Surface, Viewport};

/// A single snowflake.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub wind: f64,
}

impl Particle {
    /// Creates a particle for the initial population, scattered over the visible surface.
    pub fn spawn(
        rng: &mut ChaCha8Rng,
        viewport: &Viewport,
        settings: &FieldSettings,
    ) -> Particle {
        let mut particle = Particle::default();
        particle.reset(rng, viewport, settings);
        particle.position.1 = uniform(rng, 0.0, viewport.height as f64);
        particle
    }

    /// Re-randomizes every attribute and places the particle above the surface.
    pub fn reset(&mut self, rng: &mut ChaCha8Rng, viewport: &Viewport, settings: &FieldSettings) {
        let (width, height) = viewport.extent();

        self.position = (uniform(rng, 0.0, width), uniform(rng, -height, 0.0));
        self.size = settings.size.sample(rng);
        self.speed = settings.speed.sample(rng);
        self.opacity = settings.opacity.sample(rng);
        self.wind = settings.wind.sample(rng);
        self.velocity = (0.0, self.speed);
    }

    pub fn update(
        &mut self,
        rng: &mut ChaCha8Rng,
        viewport: &Viewport,
        pointer: &Pointer,
        settings: &FieldSettings,
    ) {
        let (width, height) = viewport.extent();
        let margin = settings.margin;

        // Gravity and wind are assigned, never integrated.
        self.velocity = (self.wind, self.speed);

        if let Some((ix, iy)) =
            pointer.repulsion(self.position.0, self.position.1, settings.repulsion)
        {
            self.velocity.0 += ix;
            self.velocity.1 += iy;
        }

        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;

        // Only the position is renewed here, size and drift survive the trip back to the top.
        if self.position.1 > height + margin {
            self.position.1 = -margin;
            self.position.0 = uniform(rng, 0.0, width);
        }

        if self.position.0 > width + margin {
            self.position.0 = -margin;
        } else if self.position.0 < -margin {
            self.position.0 = width + margin;
        }
    }

    /// Opacity to draw with, ramping down to zero across the bottom `fade_zone` pixels.
    pub fn visible_opacity(&self, viewport: &Viewport, fade_zone: f64) -> f64 {
        let height = viewport.height as f64;
        let y = self.position.1;

        if y > height - fade_zone {
            let progress = (y - (height - fade_zone)) / fade_zone;
            self.opacity * (1.0 - progress)
        } else {
            self.opacity
        }
    }

    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        viewport: &Viewport,
        fade_zone: f64,
    ) -> Result<(), S::Error> {
        surface.fill_circle(
            self.position.0,
            self.position.1,
            self.size,
            self.visible_opacity(viewport, fade_zone),
        )
    }
}
