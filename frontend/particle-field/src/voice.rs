//! Voice-to-text input.
//!
//! The browser owns the recognition session; this module only maps its
//! lifecycle events onto the page.

use tracing::{debug, info};

/// Page elements the voice helper touches.
pub trait VoiceUi {
    fn show_listening(&self);
    fn hide_listening(&self);
    fn set_transcript(&self, text: &str);
    fn hide_trigger(&self);
}

/// Lifecycle events of one recognition session.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    Start,
    End,
    /// Segments, each holding its alternatives ordered by confidence.
    Result(Vec<Vec<String>>),
}

pub struct VoiceInput<U> {
    ui: U,
    listening: bool,
}

impl<U: VoiceUi> VoiceInput<U> {
    pub fn new(ui: U) -> Self {
        Self {
            ui,
            listening: false,
        }
    }

    /// The platform has no speech recognition: hide the trigger.
    pub fn unsupported(ui: U) {
        ui.hide_trigger();
        info!("Web Speech API not supported.");
    }

    pub fn handle(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Start => {
                self.listening = true;
                self.ui.show_listening();
            }
            RecognitionEvent::End => {
                self.listening = false;
                self.ui.hide_listening();
            }
            RecognitionEvent::Result(segments) => match first_transcript(&segments) {
                Some(transcript) => self.ui.set_transcript(transcript),
                None => debug!("recognition result carried no transcript"),
            },
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }
}

/// Best alternative of the first recognised segment.
pub fn first_transcript(segments: &[Vec<String>]) -> Option<&str> {
    segments.first()?.first().map(String::as_str)
}
