use rand::Rng;

use crate::config::FieldConfig;

/// Size of the drawing surface every particle reads during an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub alpha: f32,
    /// Signed amount added to `alpha` every frame.
    pub fade: f32,
}

fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.gen::<f32>()
}

/// Re-entry at the opposite edge. Below zero lands on `extent`, past
/// `extent` lands on zero.
pub fn wrap(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

pub fn new_random_particle<R: Rng + ?Sized>(
    bounds: Bounds,
    config: &FieldConfig,
    rng: &mut R,
) -> Particle {
    let mut particle = Particle {
        x: 0.0,
        y: 0.0,
        vx: 0.0,
        vy: 0.0,
        size: 0.0,
        alpha: 0.0,
        fade: 0.0,
    };
    particle.reset(bounds, config, rng);
    particle
}

impl Particle {
    /// Re-randomise every attribute in place. The fade starts negative so
    /// a fresh particle dims first.
    pub fn reset<R: Rng + ?Sized>(&mut self, bounds: Bounds, config: &FieldConfig, rng: &mut R) {
        self.x = rng.gen::<f32>() * bounds.width;
        self.y = rng.gen::<f32>() * bounds.height;
        self.vx = (rng.gen::<f32>() - 0.5) * config.velocity_spread;
        self.vy = (rng.gen::<f32>() - 0.5) * config.velocity_spread;
        self.size = rand_range(rng, config.size_min, config.size_max);
        self.alpha = rand_range(rng, config.alpha_min, config.alpha_max);
        self.fade = -rand_range(rng, config.fade_min, config.fade_max);
    }

    /// Advance one frame.
    ///
    /// Alpha is not clamped: once it leaves `[fade_low, fade_high]` only the
    /// direction of `fade` flips, so it can overshoot by one frame's delta.
    pub fn update(&mut self, bounds: Bounds, config: &FieldConfig) {
        self.x += self.vx;
        self.y += self.vy;

        self.alpha += self.fade;
        if self.alpha <= config.fade_low || self.alpha >= config.fade_high {
            self.fade = -self.fade;
        }

        self.x = wrap(self.x, bounds.width);
        self.y = wrap(self.y, bounds.height);
    }
}
