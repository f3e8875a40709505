use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use rand::SeedableRng;
use rand_hc::Hc128Rng;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::{document, js_err};
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::particle::Bounds;
use crate::surface::{Rgb, Surface};

type CanvasField = ParticleField<CanvasSurface, Hc128Rng>;

/// A 2D canvas context the field draws onto.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err("requesting 2d context"))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("unexpected 2d context type: {:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
        })
    }

    /// Pin the canvas over the viewport, behind the content, transparent to
    /// pointer input.
    pub fn apply_overlay_style(&self) -> Result<()> {
        let style = self.canvas.style();
        for (name, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("z-index", "0"),
            ("pointer-events", "none"),
        ] {
            style
                .set_property(name, value)
                .map_err(js_err("styling canvas"))?;
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        self.ctx
            .set_fill_style(&JsValue::from_str(&color.css_rgba(alpha)));
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(f64::from(x), f64::from(y), f64::from(radius), 0.0, TAU);
        self.ctx.fill();
    }
}

fn viewport(window: &Window) -> Result<Bounds> {
    let width = window
        .inner_width()
        .map_err(js_err("reading innerWidth"))?
        .as_f64()
        .ok_or_else(|| anyhow!("innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(js_err("reading innerHeight"))?
        .as_f64()
        .ok_or_else(|| anyhow!("innerHeight is not a number"))?;
    Ok(Bounds::new(width as f32, height as f32))
}

fn find_canvas(id: &str) -> Result<Option<HtmlCanvasElement>> {
    let Some(element) = document()?.get_element_by_id(id) else {
        return Ok(None);
    };
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{} is not a canvas", id))?;
    Ok(Some(canvas))
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<()> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(js_err("requesting animation frame"))?;
    Ok(())
}

/// Mount the animator on the configured canvas and run it for the lifetime
/// of the page. A missing canvas leaves the page untouched.
pub fn start(config: &FieldConfig) -> Result<()> {
    let window = window().ok_or_else(|| anyhow!("no window"))?;
    let surface = match find_canvas(&config.canvas_id)? {
        Some(canvas) => {
            let surface = CanvasSurface::new(canvas)?;
            surface.apply_overlay_style()?;
            Some(surface)
        }
        None => None,
    };

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let bounds = viewport(&window)?;
    let Some(field) =
        CanvasField::mount(config.clone(), bounds, surface, Hc128Rng::seed_from_u64(seed))
    else {
        debug!("#{} not found, skipping particle background", config.canvas_id);
        return Ok(());
    };
    let field = Rc::new(RefCell::new(field));

    let on_resize = {
        let field = field.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            if let Ok(bounds) = viewport(&window) {
                field.borrow_mut().resize(bounds.width, bounds.height);
            }
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(js_err("listening for resize"))?;
    on_resize.forget();

    // The frame callback re-arms itself through this slot.
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let rearm = slot.clone();
    let frame_window = window.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        field.borrow_mut().tick();
        if let Some(callback) = rearm.borrow().as_ref() {
            let _ = request_frame(&frame_window, callback);
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(&window, callback)?;
    }
    Ok(())
}
