//! Browser glue, built for `wasm32` with the `web` feature.

use anyhow::{anyhow, Result};
use tracing::{debug, error};
use tracing_subscriber::filter::EnvFilter;
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document};

use crate::config::Settings;

mod canvas;
mod voice;

pub use canvas::CanvasSurface;

const SETTINGS_ATTRIBUTE: &str = "data-particle-settings";

/// Map a `JsValue` error into `anyhow` with a short description.
pub(crate) fn js_err(context: &'static str) -> impl FnOnce(JsValue) -> anyhow::Error {
    move |value| anyhow!("{}: {:?}", context, value)
}

pub(crate) fn document() -> Result<Document> {
    window()
        .ok_or_else(|| anyhow!("no window"))?
        .document()
        .ok_or_else(|| anyhow!("no document"))
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_env_filter(filter)
        .with_writer(MakeWebConsoleWriter::new())
        .try_init();
}

/// Settings come from a JSON attribute on the root element; anything
/// missing or malformed falls back to the defaults.
fn load_settings(document: &Document) -> (Settings, Option<anyhow::Error>) {
    let raw = document
        .document_element()
        .and_then(|root| root.get_attribute(SETTINGS_ATTRIBUTE));
    match raw {
        Some(json) => match Settings::from_json(&json) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
        None => (Settings::default(), None),
    }
}

fn run() -> Result<()> {
    let document = document()?;
    let (settings, settings_error) = load_settings(&document);
    init_logging(&settings.log_filter);
    if let Some(e) = settings_error {
        error!("Ignoring invalid {}: {:#}", SETTINGS_ATTRIBUTE, e);
    }

    if let Err(e) = canvas::start(&settings.field) {
        error!("Particle background disabled: {:#}", e);
    }

    if document.ready_state() == "loading" {
        let voice_settings = settings.voice.clone();
        let on_ready: Closure<dyn FnMut()> = Closure::once(move || {
            if let Err(e) = voice::start(&voice_settings) {
                error!("Voice input disabled: {:#}", e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .map_err(js_err("listening for DOMContentLoaded"))?;
        on_ready.forget();
    } else if let Err(e) = voice::start(&settings.voice) {
        error!("Voice input disabled: {:#}", e);
    }

    debug!("page behaviours started");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = run() {
        web_sys::console::error_1(&JsValue::from_str(&format!("{:#}", e)));
    }
}
