use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::surface::Rgb;

/// Hard cap on the number of particles a field may hold.
pub const MAX_PARTICLES: usize = 10_000;

/// Everything the page can tune, read from one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `EnvFilter` directive used by the console subscriber.
    pub log_filter: String,
    pub field: FieldConfig,
    pub voice: VoiceConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            field: FieldConfig::default(),
            voice: VoiceConfig::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).context("deserializing particle settings")?;
        settings.field.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Id of the canvas element the animator draws on.
    pub canvas_id: String,
    pub count: usize,
    /// Velocity components are drawn from `[-spread / 2, spread / 2)`.
    pub velocity_spread: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    /// Range of the per-frame fade magnitude.
    pub fade_min: f32,
    pub fade_max: f32,
    /// Alpha at or below this flips the fade direction.
    pub fade_low: f32,
    /// Alpha at or above this flips the fade direction.
    pub fade_high: f32,
    pub color: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: "bg-canvas".to_string(),
            count: 350,
            velocity_spread: 0.5,
            size_min: 0.5,
            size_max: 3.5,
            alpha_min: 0.2,
            alpha_max: 1.0,
            fade_min: 0.005,
            fade_max: 0.025,
            fade_low: 0.1,
            fade_high: 1.0,
            color: Rgb::new(165, 180, 252),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_PARTICLES {
            bail!(
                "particle count {} exceeds the maximum of {}",
                self.count,
                MAX_PARTICLES
            );
        }
        if !(self.velocity_spread >= 0.0) {
            bail!("velocity spread must be non-negative: {}", self.velocity_spread);
        }
        if !(self.size_min >= 0.0) {
            bail!("particle size must be non-negative: {}", self.size_min);
        }
        if !(self.size_min < self.size_max) {
            bail!(
                "invalid size range: {} .. {}",
                self.size_min,
                self.size_max
            );
        }
        if !(self.alpha_min <= self.alpha_max) {
            bail!(
                "invalid alpha range: {} .. {}",
                self.alpha_min,
                self.alpha_max
            );
        }
        if !(self.fade_min <= self.fade_max) {
            bail!(
                "invalid fade range: {} .. {}",
                self.fade_min,
                self.fade_max
            );
        }
        if !(self.fade_low < self.fade_high) {
            bail!(
                "fade thresholds must satisfy low < high: {} / {}",
                self.fade_low,
                self.fade_high
            );
        }
        Ok(())
    }
}

/// Element ids and recognition options for the voice input helper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub button_id: String,
    pub input_id: String,
    pub indicator_id: String,
    /// Class toggled on the indicator while not listening.
    pub hidden_class: String,
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            button_id: "voice-btn".to_string(),
            input_id: "user-input".to_string(),
            indicator_id: "listening-indicator".to_string(),
            hidden_class: "hidden".to_string(),
            language: "en-IN".to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}
