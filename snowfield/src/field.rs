use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{FieldSettings, Particle, Pointer, Surface, Viewport};

/// The snowfall simulation: a fixed population of particles falling across a viewport and
/// scattering away from the pointer.
pub struct Field {
    viewport: Viewport,
    pointer: Pointer,
    particles: Vec<Particle>,
    settings: FieldSettings,
    rng: ChaCha8Rng,
    frame: u64,
}

impl Field {
    /// Populates a field sized to `viewport`. The particle count is fixed from here on.
    pub fn new(viewport: Viewport, settings: FieldSettings, seed: u64) -> Field {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = (0..viewport.particle_capacity(settings.area_per_flake))
            .map(|_| Particle::spawn(&mut rng, &viewport, &settings))
            .collect();

        Field {
            viewport,
            pointer: Pointer::new(settings.pointer_radius),
            particles,
            settings,
            rng,
            frame: 0,
        }
    }

    /// Moves the bounds used by [`Field::tick`] and [`Field::draw`]. Particles are neither
    /// added nor removed, so density follows the new area.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, scroll_y: f64) {
        self.pointer.track(client_x, client_y, scroll_y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    /// Advances every particle by one frame.
    pub fn tick(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.update(&mut self.rng, &self.viewport, &self.pointer, &self.settings);
        }

        self.frame += 1;
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let (width, height) = self.viewport.extent();
        surface.clear(width, height)?;

        for particle in &self.particles {
            particle.draw(surface, &self.viewport, self.settings.fade_zone)?;
        }

        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, Recording};

    fn field(width: u32, height: u32, seed: u64) -> Field {
        Field::new(Viewport::new(width, height), FieldSettings::default(), seed)
    }

    #[test]
    fn count_follows_initial_area() {
        assert_eq!(field(1200, 800, 0).len(), 120);
        assert_eq!(field(1920, 1080, 0).len(), 259);
        assert!(field(50, 50, 0).is_empty());
    }

    #[test]
    fn count_survives_resize() {
        let mut field = field(1200, 800, 0);

        field.resize(Viewport::new(2400, 800));
        field.tick();
        assert_eq!(field.len(), 120);

        field.resize(Viewport::new(320, 200));
        field.tick();
        assert_eq!(field.len(), 120);
        assert_eq!(field.viewport(), Viewport::new(320, 200));
    }

    #[test]
    fn population_is_capped_for_unvalidated_density() {
        let settings = FieldSettings {
            area_per_flake: 1e-300,
            ..Default::default()
        };

        let field = Field::new(Viewport::new(1200, 800), settings, 0);

        assert_eq!(field.len(), crate::MAX_FLAKES);
    }

    #[test]
    fn same_seed_same_snow() {
        let mut a = field(800, 600, 42);
        let mut b = field(800, 600, 42);

        for _ in 0..200 {
            a.tick();
            b.tick();
        }

        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn different_seeds_differ() {
        let a = field(800, 600, 1);
        let b = field(800, 600, 2);

        assert_ne!(a.particles(), b.particles());
    }

    #[test]
    fn tick_counts_frames() {
        let mut field = field(400, 400, 0);

        for _ in 0..3 {
            field.tick();
        }

        assert_eq!(field.frame(), 3);
    }

    #[test]
    fn pointer_left_disables_repulsion() {
        let mut field = field(1200, 800, 9);
        field.pointer_moved(600.0, 100.0, 300.0);
        assert_eq!(field.pointer().location(), Some((600.0, 400.0)));

        field.pointer_left();
        assert_eq!(field.pointer().location(), None);

        let before = field.particles().to_vec();
        field.tick();

        for (old, new) in before.iter().zip(field.particles()) {
            assert_eq!(new.velocity, (old.wind, old.speed));
        }
    }

    #[test]
    fn draw_clears_then_fills_every_particle() {
        let field = field(1200, 800, 5);
        let mut recording = Recording::new();

        field.draw(&mut recording).unwrap();

        assert_eq!(
            recording.commands.first(),
            Some(&DrawCommand::Clear {
                width: 1200.0,
                height: 800.0
            })
        );
        assert_eq!(recording.circles().count(), 120);
    }

    #[test]
    fn draw_uses_resized_bounds() {
        let mut field = field(1200, 800, 5);
        field.resize(Viewport::new(600, 400));
        let mut recording = Recording::new();

        field.draw(&mut recording).unwrap();

        assert_eq!(
            recording.commands[0],
            DrawCommand::Clear {
                width: 600.0,
                height: 400.0
            }
        );
    }

    #[test]
    fn draw_does_not_mutate() {
        let field = field(640, 480, 12);
        let before = field.particles().to_vec();

        field.draw(&mut Recording::new()).unwrap();

        assert_eq!(field.particles(), before.as_slice());
    }
}
