use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config rejected: {0}")]
    Invalid(String),
}

/// Page-wide settings. Every field has a default so a host page only needs
/// to provide the values it wants to change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub particles: ParticleConfig,
    pub upload: UploadConfig,
}

/// Tuning for the background animation. Distances are in CSS pixels and are
/// scaled by the device pixel ratio at draw time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub max_count: usize,
    pub area_per_particle: f64,
    pub link_distance: f64,
    /// Peak opacity of a connector between two coincident particles.
    pub link_alpha: f64,
    pub min_speed: f64,
    pub speed_range: f64,
    pub min_radius: f64,
    pub radius_range: f64,
    pub hue_base: f64,
    pub hue_range: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        ParticleConfig {
            max_count: 140,
            area_per_particle: 14000.0,
            link_distance: 130.0,
            link_alpha: 0.25,
            min_speed: 0.2,
            speed_range: 0.8,
            min_radius: 1.0,
            radius_range: 2.8,
            hue_base: 190.0,
            hue_range: 120.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Destination in E.164 digits, without the leading `+`.
    pub whatsapp_number: String,
    pub image_prefix: String,
    pub sent_feedback_ms: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            whatsapp_number: "556198574343".to_string(),
            image_prefix: "image/".to_string(),
            sent_feedback_ms: 3000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Overlay a partial JSON document on top of `self`.
    ///
    /// Keys present in `overrides` replace the current values; anything else
    /// is kept.
    pub fn merged_with(&self, overrides: &str) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self)?;
        let patch: serde_json::Value = serde_json::from_str(overrides)?;
        merge_json(&mut base, patch);
        let cfg: SiteConfig = serde_json::from_value(base)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if !(p.link_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "particles.link_distance must be positive, got {}",
                p.link_distance
            )));
        }
        if !(p.area_per_particle > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "particles.area_per_particle must be positive, got {}",
                p.area_per_particle
            )));
        }
        if self.upload.sent_feedback_ms > i32::MAX as u32 {
            return Err(ConfigError::Invalid(format!(
                "upload.sent_feedback_ms is too large for a browser timer, got {}",
                self.upload.sent_feedback_ms
            )));
        }
        let n = &self.upload.whatsapp_number;
        if n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::Invalid(format!(
                "upload.whatsapp_number must be digits only, got {n:?}"
            )));
        }
        Ok(())
    }
}

fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(b), serde_json::Value::Object(p)) => {
            for (k, v) in p {
                match b.get_mut(&k) {
                    Some(slot) => merge_json(slot, v),
                    None => {
                        b.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}
