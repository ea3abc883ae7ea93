//! Player preferences
//!
//! Audio levels only; everything gameplay-related lives in [`crate::Tuning`].

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background loop volume (0.0 - 1.0), quiet by default
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
    /// Size of the rotating voice pool for overlapping cues
    pub voices: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
            muted: false,
            voices: 4,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Effective sound effect gain
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Effective background loop gain
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.music_volume.clamp(0.0, 1.0)
        }
    }

    /// Voice pool size, never zero
    pub fn voice_count(&self) -> usize {
        self.voices.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volumes() {
        let settings = Settings::default();
        assert!((settings.effective_sfx_volume() - 0.8).abs() < 1e-6);
        assert!((settings.effective_music_volume() - 0.24).abs() < 1e-6);

        let muted = Settings {
            muted: true,
            ..Settings::default()
        };
        assert_eq!(muted.effective_sfx_volume(), 0.0);
        assert_eq!(muted.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let loud = Settings {
            master_volume: 3.0,
            sfx_volume: -1.0,
            music_volume: 2.0,
            ..Settings::default()
        };
        assert_eq!(loud.effective_sfx_volume(), 0.0);
        assert_eq!(loud.effective_music_volume(), 1.0);
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{ "muted": true, "voices": 0 }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.voice_count(), 1);
        assert!(Settings::from_json("42").is_err());
        assert!(Settings::from_json("{ not json").is_err());
    }
}
