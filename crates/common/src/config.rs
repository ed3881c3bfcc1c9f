//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FrameKitError, FrameKitResult};

/// Easing names accepted in `animation.easing`.
pub const EASING_NAMES: [&str; 4] = ["linear", "ease-in", "ease-out", "ease-in-out"];

/// Global framekit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameKitConfig {
    /// Defaults for simulated and live tweens.
    pub animation: AnimationDefaults,

    /// Defaults for the frame clock measurement.
    pub clock: ClockDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default tween parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationDefaults {
    /// Frame rate used when sampling a tween.
    pub fps: u32,

    /// Tween duration in seconds.
    pub duration_secs: f64,

    /// Easing name: `linear`, `ease-in`, `ease-out` or `ease-in-out`.
    pub easing: String,
}

/// Default frame clock measurement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockDefaults {
    /// Target tick rate (Hz).
    pub target_fps: u32,

    /// Number of frames to measure.
    pub frames: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "framekit_motion=trace,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for FrameKitConfig {
    fn default() -> Self {
        Self {
            animation: AnimationDefaults::default(),
            clock: ClockDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            fps: 60,
            duration_secs: 1.0,
            easing: "linear".to_string(),
        }
    }
}

impl Default for ClockDefaults {
    fn default() -> Self {
        Self {
            target_fps: 60,
            frames: 120,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl FrameKitConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> FrameKitResult<Self> {
        if !path.exists() {
            return Err(FrameKitError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> FrameKitResult<()> {
        self.save_to(&config_file_path())
    }

    /// Save config as pretty JSON to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> FrameKitResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values no frame loop can run with.
    pub fn validate(&self) -> FrameKitResult<()> {
        if self.animation.fps == 0 {
            return Err(FrameKitError::config("animation.fps must be positive"));
        }
        // Zero or negative durations are valid and complete on the first update.
        if !self.animation.duration_secs.is_finite() {
            return Err(FrameKitError::config(format!(
                "animation.duration_secs must be finite (got {})",
                self.animation.duration_secs
            )));
        }
        let easing = self
            .animation
            .easing
            .trim()
            .to_ascii_lowercase()
            .replace('_', "-");
        if !EASING_NAMES.contains(&easing.as_str()) {
            return Err(FrameKitError::config(format!(
                "animation.easing must be one of {} (got '{}')",
                EASING_NAMES.join(", "),
                self.animation.easing
            )));
        }
        if self.clock.target_fps == 0 {
            return Err(FrameKitError::config("clock.target_fps must be positive"));
        }
        Ok(())
    }

    /// The standard config file location.
    pub fn default_path() -> PathBuf {
        config_file_path()
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("framekit").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("framekit-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = FrameKitConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.animation.fps, 60);
        assert_eq!(config.animation.easing, "linear");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: FrameKitConfig =
            serde_json::from_str(r#"{"animation": {"fps": 30}}"#).unwrap();
        assert_eq!(config.animation.fps, 30);
        assert_eq!(config.animation.duration_secs, 1.0);
        assert_eq!(config.clock, ClockDefaults::default());
    }

    #[test]
    fn test_validate_rejects_zero_fps() {
        let mut config = FrameKitConfig::default();
        config.animation.fps = 0;
        assert!(matches!(
            config.validate(),
            Err(FrameKitError::Config { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_duration() {
        let mut config = FrameKitConfig::default();
        config.animation.duration_secs = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_easing_names() {
        let mut config = FrameKitConfig::default();
        config.animation.easing = "Ease_In_Out".to_string();
        assert!(config.validate().is_ok());

        config.animation.easing = "ease-in-outt".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FrameKitError::Config { .. }));
        assert!(err.to_string().contains("ease-in-outt"));
    }

    #[test]
    fn test_validate_accepts_non_positive_duration() {
        let mut config = FrameKitConfig::default();
        config.animation.duration_secs = -0.5;
        assert!(config.validate().is_ok());
        config.animation.duration_secs = 0.0;
        assert!(config.validate().is_ok());
        config.animation.duration_secs = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_from() {
        let path = scratch_path("roundtrip.json");
        let mut config = FrameKitConfig::default();
        config.animation.easing = "ease-in-out".to_string();
        config.clock.frames = 10;
        config.save_to(&path).unwrap();

        let loaded = FrameKitConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = scratch_path("does-not-exist.json");
        assert!(matches!(
            FrameKitConfig::load_from(&path),
            Err(FrameKitError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_load_from_invalid_json() {
        let path = scratch_path("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            FrameKitConfig::load_from(&path),
            Err(FrameKitError::Json(_))
        ));
        std::fs::remove_file(&path).ok();
    }
}
