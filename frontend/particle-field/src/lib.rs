//! Decorative particle background and voice input helper.
//!
//! The core ([`field::ParticleField`]) is host agnostic and driven by
//! explicit ticks. Two hosts are provided: the `particles_*` C-ABI exports
//! below, for a page that owns the animation loop and draws from the render
//! buffer, and the `web` feature, which wires everything to the DOM.

use std::cell::RefCell;
use std::thread_local;

use rand::SeedableRng;
use rand_hc::Hc128Rng;

pub mod config;
pub mod field;
pub mod particle;
pub mod surface;
pub mod voice;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use config::{FieldConfig, Settings, VoiceConfig};
pub use field::ParticleField;
pub use particle::{new_random_particle, Bounds, Particle};
pub use surface::{RenderBuffer, Rgb, Surface};

type ExportedField = ParticleField<RenderBuffer, Hc128Rng>;

thread_local! {
    static FIELD: RefCell<Option<ExportedField>> = RefCell::new(None);
}

fn with_field<F, R>(default: R, mut f: F) -> R
where
    F: FnMut(&mut ExportedField) -> R,
{
    FIELD.with(|cell| {
        let mut borrow = cell.borrow_mut();
        if let Some(field) = borrow.as_mut() {
            f(field)
        } else {
            default
        }
    })
}

#[no_mangle]
pub extern "C" fn particles_init(width: f32, height: f32, seed: u32) {
    let config = FieldConfig::default();
    let surface = RenderBuffer::with_capacity(config.count);
    let bounds = Bounds::new(width.max(1.0), height.max(1.0));
    let rng = Hc128Rng::seed_from_u64(u64::from(seed));
    FIELD.with(|cell| {
        *cell.borrow_mut() = Some(ParticleField::new(config, bounds, surface, rng));
    });
}

#[no_mangle]
pub extern "C" fn particles_resize(width: f32, height: f32) {
    with_field((), |field| field.resize(width.max(1.0), height.max(1.0)));
}

#[no_mangle]
pub extern "C" fn particles_tick() {
    with_field((), |field| field.tick());
}

#[no_mangle]
pub extern "C" fn particles_reset() {
    with_field((), |field| field.reset());
}

#[no_mangle]
pub extern "C" fn particles_count() -> u32 {
    with_field(0, |field| field.particles().len() as u32)
}

#[no_mangle]
pub extern "C" fn particles_render_ptr() -> *const f32 {
    with_field(std::ptr::null(), |field| field.surface().as_ptr())
}

#[no_mangle]
pub extern "C" fn particles_render_len() -> u32 {
    with_field(0, |field| field.surface().len() as u32)
}

#[no_mangle]
pub extern "C" fn particles_color() -> u32 {
    with_field(FieldConfig::default().color.packed(), |field| {
        field.config().color.packed()
    })
}
