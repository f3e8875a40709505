use particle_field::{Rgb, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Keeps the last frame's circles and counts calls.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub resizes: usize,
    pub clears: usize,
    pub circles: Vec<Circle>,
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        self.circles.push(Circle {
            x,
            y,
            radius,
            color,
            alpha,
        });
    }
}
