//! Match settings and preferences
//!
//! Stored as JSON next to the binary (or wherever the caller points).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::flow::MatchMode;
use crate::sim::{Personality, SkillTier};

/// Points-to-win choices offered for tournament rounds
pub const POINTS_TO_WIN_CHOICES: [u32; 3] = [1, 3, 7];

/// Accepted range for the reaction-time multiplier
pub const REACTION_MULTIPLIER_RANGE: (f32, f32) = (0.1, 3.0);

/// Match settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Opponent ===
    /// Opponent personality (endless mode; tournament walks all three)
    pub personality: Personality,
    pub skill: SkillTier,
    /// Reaction multiplier for endless mode (1.0 = baseline)
    pub reaction_multiplier: f32,

    // === Match ===
    /// Tournament (three rounds) instead of endless
    pub tournament: bool,
    /// Points needed to take a tournament round
    pub points_to_win: u32,
    /// Cap on fixed steps per frame after a stall (`None` = catch up fully)
    pub max_catch_up_steps: Option<u32>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            personality: Personality::Calm,
            skill: SkillTier::Dumb,
            reaction_multiplier: 1.0,

            tournament: true,
            points_to_win: 3,
            max_catch_up_steps: Some(240),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.validate();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::info!("No settings at {} ({}), using defaults", path.display(), e),
        }
        Self::default()
    }

    /// Save settings as JSON
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match self.to_json() {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Clamp out-of-range values back into their valid ranges
    pub fn validate(&mut self) {
        let (lo, hi) = REACTION_MULTIPLIER_RANGE;
        if !(lo..=hi).contains(&self.reaction_multiplier) {
            log::warn!(
                "reaction_multiplier {} out of range, clamping",
                self.reaction_multiplier
            );
            self.reaction_multiplier = if self.reaction_multiplier.is_nan() {
                1.0
            } else {
                self.reaction_multiplier.clamp(lo, hi)
            };
        }
        if self.points_to_win == 0 {
            log::warn!("points_to_win must be at least 1");
            self.points_to_win = 1;
        }
        if self.max_catch_up_steps == Some(0) {
            log::warn!("max_catch_up_steps of 0 would freeze the match, removing cap");
            self.max_catch_up_steps = None;
        }
        self.master_volume = clamp_volume("master_volume", self.master_volume);
        self.sfx_volume = clamp_volume("sfx_volume", self.sfx_volume);
    }

    /// Match mode these settings describe
    pub fn match_mode(&self) -> MatchMode {
        if self.tournament {
            MatchMode::Tournament {
                skill: self.skill,
                points_to_win: self.points_to_win,
            }
        } else {
            MatchMode::Endless {
                personality: self.personality,
                skill: self.skill,
                reaction_multiplier: self.reaction_multiplier,
            }
        }
    }
}

fn clamp_volume(name: &str, vol: f32) -> f32 {
    if (0.0..=1.0).contains(&vol) {
        vol
    } else {
        log::warn!("{} {} out of range, clamping", name, vol);
        if vol.is_nan() {
            1.0
        } else {
            vol.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.tournament);
        assert!(POINTS_TO_WIN_CHOICES.contains(&settings.points_to_win));
        assert_eq!(settings.max_catch_up_steps, Some(240));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "personality": "Aggressive", "tournament": false }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.personality, Personality::Aggressive);
        assert!(!settings.tournament);
        assert_eq!(settings.skill, SkillTier::Dumb);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_null_cap_means_unbounded() {
        let settings = Settings::from_json(r#"{ "max_catch_up_steps": null }"#).unwrap();
        assert_eq!(settings.max_catch_up_steps, None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "skill": "Genius" }"#).is_err());
    }

    #[test]
    fn test_validate_clamps() {
        let mut settings = Settings {
            reaction_multiplier: 9.0,
            points_to_win: 0,
            max_catch_up_steps: Some(0),
            master_volume: -1.0,
            sfx_volume: 4.0,
            ..Default::default()
        };
        settings.validate();
        assert_eq!(settings.reaction_multiplier, 3.0);
        assert_eq!(settings.points_to_win, 1);
        assert_eq!(settings.max_catch_up_steps, None);
        assert_eq!(settings.master_volume, 0.0);
        assert_eq!(settings.sfx_volume, 1.0);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let name = format!("duel_pong_settings_{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let settings = Settings {
            personality: Personality::Strategic,
            skill: SkillTier::Smart,
            tournament: false,
            ..Default::default()
        };
        settings.save(&path);
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let loaded = Settings::load("/definitely/not/here/settings.json");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_match_mode() {
        let endless = Settings {
            tournament: false,
            personality: Personality::Aggressive,
            ..Default::default()
        };
        assert!(matches!(
            endless.match_mode(),
            MatchMode::Endless {
                personality: Personality::Aggressive,
                ..
            }
        ));
        assert!(matches!(
            Settings::default().match_mode(),
            MatchMode::Tournament {
                points_to_win: 3,
                ..
            }
        ));
    }
}
