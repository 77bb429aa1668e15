// SPDX-License-Identifier: GPL-3.0-only

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

pub const APP_ID: &str = "dev.anatomia.Anatomia";

const SETTINGS_FILE: &str = "settings.ron";

/// Tunable study parameters, persisted as ron in the platform data
/// directory. A missing or unreadable file falls back to the defaults,
/// which reproduce the stock scheduling policy exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudySettings {
    pub scheduler: SchedulerParams,
    pub session: SessionParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerParams {
    pub starting_ease: f64,
    pub ease_floor: f64,
    pub again_ease_penalty: f64,
    pub hard_ease_penalty: f64,
    pub easy_ease_bonus: f64,
    pub hard_multiplier: f64,
    pub good_multiplier: f64,
    pub easy_bonus: f64,
    /// How long an interval-0 card waits before resurfacing.
    pub relearn_delay_ms: i64,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            starting_ease: 2.5,
            ease_floor: 1.3,
            again_ease_penalty: 0.2,
            hard_ease_penalty: 0.15,
            easy_ease_bonus: 0.15,
            hard_multiplier: 1.2,
            good_multiplier: 2.5,
            easy_bonus: 1.3,
            relearn_delay_ms: 60_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Horizontal displacement a swipe must exceed to commit a grade.
    pub swipe_threshold_px: f32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 100.0,
        }
    }
}

impl StudySettings {
    /// Loads the settings for `app_id`, falling back to defaults when the
    /// file is absent or does not parse.
    pub fn load(app_id: &str) -> StudySettings {
        let Some(path) = Self::path(app_id) else {
            return StudySettings::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("ignoring malformed settings file {}: {err}", path.display());
                    StudySettings::default()
                }
            },
            Err(_) => StudySettings::default(),
        }
    }

    pub fn save(&self, app_id: &str) -> Result<(), anywho::Error> {
        let Some(path) = Self::path(app_id) else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, ron::to_string(self)?)?;
        Ok(())
    }

    fn path(app_id: &str) -> Option<PathBuf> {
        Some(dirs::data_dir()?.join(app_id).join(SETTINGS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_stock_policy() {
        let params = SchedulerParams::default();
        assert_eq!(params.starting_ease, 2.5);
        assert_eq!(params.ease_floor, 1.3);
        assert_eq!(params.good_multiplier, 2.5);
        assert_eq!(params.relearn_delay_ms, 60_000);
        assert_eq!(SessionParams::default().swipe_threshold_px, 100.0);
    }

    #[test]
    fn settings_round_trip_through_ron() {
        let mut settings = StudySettings::default();
        settings.session.swipe_threshold_px = 120.0;

        let encoded = ron::to_string(&settings).unwrap();
        let decoded: StudySettings = ron::from_str(&encoded).unwrap();
        assert_eq!(decoded, settings);
    }
}
