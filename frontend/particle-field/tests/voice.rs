use std::cell::RefCell;

use particle_field::voice::{first_transcript, RecognitionEvent, VoiceInput, VoiceUi};

#[derive(Default)]
struct FakeUi {
    calls: RefCell<Vec<String>>,
}

impl FakeUi {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VoiceUi for &FakeUi {
    fn show_listening(&self) {
        self.calls.borrow_mut().push("show".to_string());
    }

    fn hide_listening(&self) {
        self.calls.borrow_mut().push("hide".to_string());
    }

    fn set_transcript(&self, text: &str) {
        self.calls.borrow_mut().push(format!("text:{}", text));
    }

    fn hide_trigger(&self) {
        self.calls.borrow_mut().push("hide-trigger".to_string());
    }
}

fn segments(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|alts| alts.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn session_toggles_the_listening_indicator() {
    let ui = FakeUi::default();
    let mut input = VoiceInput::new(&ui);
    assert!(!input.is_listening());

    input.handle(RecognitionEvent::Start);
    assert!(input.is_listening());
    input.handle(RecognitionEvent::End);
    assert!(!input.is_listening());

    assert_eq!(ui.calls(), vec!["show", "hide"]);
}

#[test]
fn result_copies_the_first_alternative_of_the_first_segment() {
    let ui = FakeUi::default();
    let mut input = VoiceInput::new(&ui);
    input.handle(RecognitionEvent::Start);
    input.handle(RecognitionEvent::Result(segments(&[
        &["file a complaint", "file a compliant"],
        &["later segment"],
    ])));
    input.handle(RecognitionEvent::End);

    assert_eq!(ui.calls(), vec!["show", "text:file a complaint", "hide"]);
}

#[test]
fn empty_result_leaves_the_field_alone() {
    let ui = FakeUi::default();
    let mut input = VoiceInput::new(&ui);
    input.handle(RecognitionEvent::Result(Vec::new()));
    input.handle(RecognitionEvent::Result(segments(&[&[]])));
    assert!(ui.calls().is_empty());
}

#[test]
fn unsupported_platform_hides_the_trigger() {
    let ui = FakeUi::default();
    VoiceInput::unsupported(&ui);
    assert_eq!(ui.calls(), vec!["hide-trigger"]);
}

#[test]
fn first_transcript_picks_the_top_alternative() {
    assert_eq!(first_transcript(&segments(&[&["a", "b"]])), Some("a"));
    assert_eq!(first_transcript(&[]), None);
}
