use rand::Rng;
use tracing::{debug, info};

use crate::config::FieldConfig;
use crate::particle::{new_random_particle, Bounds, Particle};
use crate::surface::Surface;

/// A fixed-size collection of particles animated over one surface.
///
/// The field never schedules itself: a host calls [`ParticleField::tick`]
/// once per display frame and [`ParticleField::resize`] when the viewport
/// changes.
pub struct ParticleField<S, R> {
    config: FieldConfig,
    bounds: Bounds,
    particles: Vec<Particle>,
    surface: S,
    rng: R,
    frame: u64,
}

impl<S: Surface, R: Rng> ParticleField<S, R> {
    pub fn new(config: FieldConfig, bounds: Bounds, mut surface: S, mut rng: R) -> Self {
        surface.resize(bounds.width, bounds.height);
        let particles = (0..config.count)
            .map(|_| new_random_particle(bounds, &config, &mut rng))
            .collect();
        debug!(
            "initialized particle field: {} particles on {}x{}",
            config.count, bounds.width, bounds.height
        );
        Self {
            config,
            bounds,
            particles,
            surface,
            rng,
            frame: 0,
        }
    }

    /// Build a field only when there is something to draw on.
    pub fn mount(config: FieldConfig, bounds: Bounds, surface: Option<S>, rng: R) -> Option<Self> {
        match surface {
            Some(surface) => Some(Self::new(config, bounds, surface, rng)),
            None => {
                debug!("no drawing surface, particle field disabled");
                None
            }
        }
    }

    /// Adopt a new viewport size. Particles keep their positions; any that
    /// now sit outside wrap on their next update.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        self.surface.resize(width, height);
        debug!("resized particle field to {}x{}", width, height);
    }

    pub fn update(&mut self) {
        let bounds = self.bounds;
        for particle in self.particles.iter_mut() {
            particle.update(bounds, &self.config);
        }
    }

    pub fn draw(&mut self) {
        self.surface.clear();
        let color = self.config.color;
        for particle in &self.particles {
            self.surface
                .fill_circle(particle.x, particle.y, particle.size, color, particle.alpha);
        }
    }

    /// One display frame: update every particle, then redraw.
    pub fn tick(&mut self) {
        self.update();
        self.draw();
        self.frame += 1;
    }

    /// Re-randomise every particle in place.
    pub fn reset(&mut self) {
        let bounds = self.bounds;
        for particle in self.particles.iter_mut() {
            particle.reset(bounds, &self.config, &mut self.rng);
        }
        info!("reset {} particles", self.particles.len());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Frames ticked since construction.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
