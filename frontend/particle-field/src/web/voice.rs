use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use js_sys::{Array, Function, Reflect};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, HtmlInputElement};

use super::{document, js_err};
use crate::config::VoiceConfig;
use crate::voice::{RecognitionEvent, VoiceInput, VoiceUi};

const RECOGNITION_CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

struct DomVoiceUi {
    button: HtmlElement,
    input: Option<HtmlInputElement>,
    indicator: Option<Element>,
    hidden_class: String,
}

impl VoiceUi for DomVoiceUi {
    fn show_listening(&self) {
        if let Some(indicator) = &self.indicator {
            let _ = indicator.class_list().remove_1(&self.hidden_class);
        }
    }

    fn hide_listening(&self) {
        if let Some(indicator) = &self.indicator {
            let _ = indicator.class_list().add_1(&self.hidden_class);
        }
    }

    fn set_transcript(&self, text: &str) {
        if let Some(input) = &self.input {
            input.set_value(text);
        }
    }

    fn hide_trigger(&self) {
        let _ = self.button.style().set_property("display", "none");
    }
}

fn recognition_constructor() -> Option<Function> {
    let window = window()?;
    RECOGNITION_CONSTRUCTORS.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .and_then(|ctor| ctor.dyn_into::<Function>().ok())
    })
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(js_err("configuring speech recognition"))?;
    Ok(())
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).ok()
}

fn length(list: &JsValue) -> u32 {
    get(list, "length")
        .and_then(|len| len.as_f64())
        .map(|len| len as u32)
        .unwrap_or(0)
}

/// `event.results` as segments of transcript alternatives.
fn read_results(event: &JsValue) -> Vec<Vec<String>> {
    let Some(results) = get(event, "results") else {
        return Vec::new();
    };
    (0..length(&results))
        .filter_map(|i| Reflect::get_u32(&results, i).ok())
        .map(|segment| {
            (0..length(&segment))
                .filter_map(|j| Reflect::get_u32(&segment, j).ok())
                .filter_map(|alternative| get(&alternative, "transcript")?.as_string())
                .collect()
        })
        .collect()
}

fn on_event<F>(recognition: &JsValue, key: &str, f: F) -> Result<()>
where
    F: FnMut(JsValue) + 'static,
{
    let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(JsValue)>);
    set(recognition, key, callback.as_ref())?;
    callback.forget();
    Ok(())
}

/// Wire the voice trigger to a recognition session. A page without the
/// trigger button is left alone.
pub fn start(config: &VoiceConfig) -> Result<()> {
    let document = document()?;
    let Some(button) = document.get_element_by_id(&config.button_id) else {
        debug!("#{} not found, skipping voice input", config.button_id);
        return Ok(());
    };
    let button = button
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow!("#{} is not an html element", config.button_id))?;
    let ui = DomVoiceUi {
        button: button.clone(),
        input: document
            .get_element_by_id(&config.input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
        indicator: document.get_element_by_id(&config.indicator_id),
        hidden_class: config.hidden_class.clone(),
    };

    let Some(constructor) = recognition_constructor() else {
        VoiceInput::unsupported(ui);
        return Ok(());
    };
    let recognition: JsValue = Reflect::construct(&constructor, &Array::new())
        .map_err(js_err("constructing speech recognition"))?;
    set(&recognition, "continuous", &JsValue::from_bool(config.continuous))?;
    set(
        &recognition,
        "interimResults",
        &JsValue::from_bool(config.interim_results),
    )?;
    set(&recognition, "lang", &JsValue::from_str(&config.language))?;

    let input = Rc::new(RefCell::new(VoiceInput::new(ui)));
    {
        let input = input.clone();
        on_event(&recognition, "onstart", move |_| {
            input.borrow_mut().handle(RecognitionEvent::Start);
        })?;
    }
    {
        let input = input.clone();
        on_event(&recognition, "onend", move |_| {
            input.borrow_mut().handle(RecognitionEvent::End);
        })?;
    }
    on_event(&recognition, "onresult", move |event| {
        input
            .borrow_mut()
            .handle(RecognitionEvent::Result(read_results(&event)));
    })?;

    let start_fn = get(&recognition, "start")
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| anyhow!("speech recognition has no start()"))?;
    let on_click = Closure::wrap(Box::new(move || {
        let _ = start_fn.call0(&recognition);
    }) as Box<dyn FnMut()>);
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_err("listening for clicks"))?;
    on_click.forget();
    Ok(())
}
