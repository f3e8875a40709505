use serde::{Deserialize, Serialize};

/// Floats written per circle into a [`RenderBuffer`]: x, y, radius, alpha.
pub const RENDER_STRIDE: usize = 4;

/// Fill hue shared by every particle. Alpha comes from the particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`
    pub fn packed(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// CSS colour string, e.g. `rgba(165, 180, 252, 0.5)`.
    pub fn css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// The rendering target a particle field draws onto.
///
/// Implementations are free to ignore draw failures; the background is
/// decorative.
pub trait Surface {
    /// Match the backing store to the new viewport size.
    fn resize(&mut self, width: f32, height: f32);

    /// Erase the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32);
}

/// A surface that records each circle into a flat `f32` buffer so a host
/// can draw them itself.
#[derive(Debug, Clone, Default)]
pub struct RenderBuffer {
    width: f32,
    height: f32,
    data: Vec<f32>,
}

impl RenderBuffer {
    pub fn with_capacity(circles: usize) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            data: Vec::with_capacity(circles * RENDER_STRIDE),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// Number of floats written, a multiple of [`RENDER_STRIDE`].
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn circles(&self) -> usize {
        self.data.len() / RENDER_STRIDE
    }
}

impl Surface for RenderBuffer {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, _color: Rgb, alpha: f32) {
        self.data.extend_from_slice(&[x, y, radius, alpha]);
    }
}
