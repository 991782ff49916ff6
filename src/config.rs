//! Configuration file loading
//!
//! Settings are stored as JSON. The file is looked up at the path in
//! `SOLARSCOPE_CONFIG`, otherwise in the platform config directory:
//! - macOS: ~/Library/Application Support/solarscope/config.json
//! - Linux: ~/.config/solarscope/config.json
//! - Windows: %APPDATA%\solarscope\config\config.json

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::orbital::MotionConstants;
use crate::ui::Theme;

pub const CONFIG_ENV_VAR: &str = "SOLARSCOPE_CONFIG";
const CONFIG_FILE_NAME: &str = "config.json";
/// Upper bound on `star_count`; larger values fall back to the default.
pub const MAX_STAR_COUNT: u32 = 20_000;

/// Application settings resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    pub motion: MotionConstants,
    pub max_frame_delta_secs: f32,
    pub start_paused: bool,
    pub theme: Theme,
    pub camera_distance: f32,
    pub focus_transition_secs: f32,
    pub label_fade_secs: f32,
    pub star_count: u32,
    pub load_textures: bool,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            motion: MotionConstants::default(),
            max_frame_delta_secs: 0.25,
            start_paused: false,
            theme: Theme::Dark,
            camera_distance: 90.0,
            focus_transition_secs: 1.2,
            label_fade_secs: 0.25,
            star_count: 1500,
            load_textures: true,
        }
    }
}

impl SolarConfig {
    /// Parse a config document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let cfg: SolarConfig = serde_json::from_str(text).context("invalid config json")?;
        Ok(cfg.sanitized())
    }

    /// Read a config file.
    ///
    /// Returns Ok(None) if the file doesn't exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    pub fn read(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let cfg = Self::from_json(&text).with_context(|| format!("in {}", path.display()))?;
        Ok(Some(cfg))
    }

    /// Replace values that would break the frame loop with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = SolarConfig::default();
        self.motion = self.motion.sanitized();
        if !positive(self.max_frame_delta_secs) {
            self.max_frame_delta_secs = defaults.max_frame_delta_secs;
        }
        if !positive(self.camera_distance) {
            self.camera_distance = defaults.camera_distance;
        }
        if !self.focus_transition_secs.is_finite() || self.focus_transition_secs < 0.0 {
            self.focus_transition_secs = defaults.focus_transition_secs;
        }
        if !self.label_fade_secs.is_finite() || self.label_fade_secs < 0.0 {
            self.label_fade_secs = defaults.label_fade_secs;
        }
        if self.star_count > MAX_STAR_COUNT {
            self.star_count = defaults.star_count;
        }
        self
    }
}

pub(crate) fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Path the config is looked up at, if one can be resolved.
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_ENV_VAR))
}

/// An explicit override wins over the platform config directory.
fn resolve_config_path(env_override: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("", "", "solarscope").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load settings, falling back to defaults when the file is absent or broken.
pub fn load_or_default() -> SolarConfig {
    let Some(path) = config_path() else {
        warn!("Could not resolve a config directory; using default settings");
        return SolarConfig::default();
    };

    match SolarConfig::read(&path) {
        Ok(Some(cfg)) => {
            info!("Loaded settings from {}", path.display());
            cfg
        }
        Ok(None) => {
            debug!("No config at {}; using default settings", path.display());
            SolarConfig::default()
        }
        Err(err) => {
            warn!("Ignoring config: {:#}", err);
            SolarConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("solarscope-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let cfg = SolarConfig::from_json(r#"{ "start_paused": true, "theme": "light" }"#).unwrap();
        assert!(cfg.start_paused);
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.motion, MotionConstants::default());
        assert_eq!(cfg.star_count, 1500);
    }

    #[test]
    fn test_nested_motion_override() {
        let cfg = SolarConfig::from_json(r#"{ "motion": { "k_orbit": 0.5 } }"#).unwrap();
        assert_eq!(cfg.motion.k_orbit, 0.5);
        assert_eq!(cfg.motion.k_spin_base, MotionConstants::default().k_spin_base);
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let cfg = SolarConfig::from_json(
            r#"{ "max_frame_delta_secs": -1.0, "camera_distance": 0.0, "motion": { "k_orbit": -3.0 } }"#,
        )
        .unwrap();
        let defaults = SolarConfig::default();
        assert_eq!(cfg.max_frame_delta_secs, defaults.max_frame_delta_secs);
        assert_eq!(cfg.camera_distance, defaults.camera_distance);
        assert_eq!(cfg.motion.k_orbit, defaults.motion.k_orbit);
    }

    #[test]
    fn test_star_count_is_bounded() {
        let cfg = SolarConfig::from_json(r#"{ "star_count": 4000000000 }"#).unwrap();
        assert_eq!(cfg.star_count, SolarConfig::default().star_count);

        let cfg = SolarConfig::from_json(r#"{ "star_count": 20000 }"#).unwrap();
        assert_eq!(cfg.star_count, MAX_STAR_COUNT);

        let cfg = SolarConfig::from_json(r#"{ "star_count": 0 }"#).unwrap();
        assert_eq!(cfg.star_count, 0);
    }

    #[test]
    fn test_env_override_wins() {
        let explicit = temp_path("override.json");
        assert_eq!(
            resolve_config_path(Some(explicit.clone().into_os_string())),
            Some(explicit)
        );
    }

    #[test]
    fn test_platform_dir_without_override() {
        // ProjectDirs needs a home directory; without one there is no path at all.
        for env_override in [None, Some(OsString::new())] {
            if let Some(path) = resolve_config_path(env_override) {
                assert!(path.ends_with(CONFIG_FILE_NAME), "path = {}", path.display());
                assert!(path.to_string_lossy().contains("solarscope"));
            }
        }
    }

    #[test]
    fn test_config_path_reads_env_var() {
        let explicit = temp_path("from-env.json");
        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var(CONFIG_ENV_VAR, &explicit) };
        let resolved = config_path();
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(SolarConfig::from_json("{ not json").is_err());
        assert!(SolarConfig::from_json(r#"{ "theme": "sepia" }"#).is_err());
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let path = temp_path("missing.json");
        let _ = fs::remove_file(&path);
        assert!(SolarConfig::read(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_round_trips_through_disk() {
        let path = temp_path("written.json");
        let cfg = SolarConfig {
            star_count: 42,
            load_textures: false,
            ..SolarConfig::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();

        let loaded = SolarConfig::read(&path).unwrap().unwrap();
        assert_eq!(loaded, cfg);

        fs::remove_file(&path).unwrap();
    }
}
