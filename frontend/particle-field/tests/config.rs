use particle_field::config::MAX_PARTICLES;
use particle_field::{FieldConfig, Rgb, Settings, VoiceConfig};

#[test]
fn defaults_match_the_page() {
    let field = FieldConfig::default();
    assert_eq!(field.canvas_id, "bg-canvas");
    assert_eq!(field.count, 350);
    assert_eq!(field.fade_low, 0.1);
    assert_eq!(field.fade_high, 1.0);
    assert_eq!(field.color, Rgb::new(165, 180, 252));
    assert!(field.validate().is_ok());

    let voice = VoiceConfig::default();
    assert_eq!(voice.language, "en-IN");
    assert!(!voice.continuous);
    assert!(!voice.interim_results);
    assert_eq!(voice.button_id, "voice-btn");
}

#[test]
fn empty_document_gives_defaults() {
    let settings = Settings::from_json("{}").expect("empty settings parse");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let settings = Settings::from_json(
        r#"{
            "log_filter": "debug",
            "field": { "count": 120, "color": { "r": 255, "g": 255, "b": 255 } },
            "voice": { "language": "en-GB" }
        }"#,
    )
    .expect("settings parse");
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.field.count, 120);
    assert_eq!(settings.field.color, Rgb::new(255, 255, 255));
    assert_eq!(settings.field.fade_low, 0.1);
    assert_eq!(settings.voice.language, "en-GB");
    assert_eq!(settings.voice.input_id, "user-input");
}

#[test]
fn malformed_json_is_an_error() {
    let err = Settings::from_json("{ \"field\": ").unwrap_err();
    assert!(format!("{:#}", err).contains("deserializing particle settings"));
}

#[test]
fn too_many_particles_is_rejected() {
    let json = format!(r#"{{ "field": {{ "count": {} }} }}"#, MAX_PARTICLES + 1);
    let err = Settings::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"));
}

#[test]
fn inverted_ranges_are_rejected() {
    let bad = [
        FieldConfig {
            size_min: 3.0,
            size_max: 1.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            size_min: -1.0,
            size_max: 2.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            alpha_min: 0.9,
            alpha_max: 0.2,
            ..FieldConfig::default()
        },
        FieldConfig {
            fade_min: 0.03,
            fade_max: 0.01,
            ..FieldConfig::default()
        },
        FieldConfig {
            fade_low: 1.0,
            fade_high: 0.1,
            ..FieldConfig::default()
        },
        FieldConfig {
            velocity_spread: -1.0,
            ..FieldConfig::default()
        },
    ];
    for config in bad {
        assert!(config.validate().is_err(), "accepted {:?}", config);
    }
}

#[test]
fn color_formats_for_canvas() {
    let color = Rgb::new(165, 180, 252);
    assert_eq!(color.css_rgba(0.5), "rgba(165, 180, 252, 0.5)");
    assert_eq!(color.packed(), 0xA5B4FC);
}

#[test]
fn negative_particle_size_is_rejected() {
    let err = Settings::from_json(r#"{ "field": { "size_min": -0.5 } }"#).unwrap_err();
    assert!(err.to_string().contains("non-negative"), "{}", err);
}
