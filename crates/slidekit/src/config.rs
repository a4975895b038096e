//! Transition configuration.
//!
//! Parameters are fixed once a controller is built. They can be assembled
//! with the `with_*` builders or loaded from YAML/JSON:
//!
//! ```yaml
//! direction: from_right
//! animation_duration: 0.35
//! on_screen_duration: 4.0
//! show_on_activate: true
//! hide_on_init: true
//! ```

use crate::geometry::SlideDirection;
use crate::result::{SlideError, SlideResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Timing and behaviour of a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Edge the panel slides in from
    pub direction: SlideDirection,
    /// Seconds per slide (in or out); zero or less jumps immediately
    pub animation_duration: f32,
    /// Seconds to hold on screen before auto-hiding; zero holds forever
    pub on_screen_duration: f32,
    /// Call `show()` the first time the controller is activated
    pub show_on_activate: bool,
    /// Snap the panel off-screen when the controller is built
    pub hide_on_init: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            direction: SlideDirection::FromTop,
            animation_duration: 0.5,
            on_screen_duration: 3.0,
            show_on_activate: false,
            hide_on_init: true,
        }
    }
}

impl TransitionConfig {
    /// Create a config with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide direction
    #[must_use]
    pub const fn with_direction(mut self, direction: SlideDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the slide duration in seconds
    #[must_use]
    pub const fn with_animation_duration(mut self, secs: f32) -> Self {
        self.animation_duration = secs;
        self
    }

    /// Set the hold duration in seconds (0 disables auto-hide)
    #[must_use]
    pub const fn with_on_screen_duration(mut self, secs: f32) -> Self {
        self.on_screen_duration = secs;
        self
    }

    /// Show automatically on first activation
    #[must_use]
    pub const fn with_show_on_activate(mut self, enabled: bool) -> Self {
        self.show_on_activate = enabled;
        self
    }

    /// Snap off-screen at construction
    #[must_use]
    pub const fn with_hide_on_init(mut self, enabled: bool) -> Self {
        self.hide_on_init = enabled;
        self
    }

    /// Whether a finished show is followed by an automatic hide.
    #[must_use]
    pub fn auto_hides(&self) -> bool {
        self.on_screen_duration > 0.0
    }

    /// Whether slides complete in the call that starts them.
    ///
    /// NaN counts as instant.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.animation_duration.is_nan() || self.animation_duration <= 0.0
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> SlideResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> SlideResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn load(path: &Path) -> SlideResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(SlideError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Render as YAML
    pub fn to_yaml_string(&self) -> SlideResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.direction, SlideDirection::FromTop);
        assert!((config.animation_duration - 0.5).abs() < f32::EPSILON);
        assert!((config.on_screen_duration - 3.0).abs() < f32::EPSILON);
        assert!(!config.show_on_activate);
        assert!(config.hide_on_init);
        assert!(config.auto_hides());
        assert!(!config.is_instant());
    }

    #[test]
    fn test_builders() {
        let config = TransitionConfig::new()
            .with_direction(SlideDirection::FromLeft)
            .with_animation_duration(0.25)
            .with_on_screen_duration(0.0)
            .with_show_on_activate(true)
            .with_hide_on_init(false);
        assert_eq!(config.direction, SlideDirection::FromLeft);
        assert!(!config.auto_hides());
        assert!(config.show_on_activate);
        assert!(!config.hide_on_init);
    }

    #[test]
    fn test_instant_durations() {
        assert!(TransitionConfig::new().with_animation_duration(0.0).is_instant());
        assert!(TransitionConfig::new().with_animation_duration(-1.0).is_instant());
        assert!(TransitionConfig::new()
            .with_animation_duration(f32::NAN)
            .is_instant());
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = TransitionConfig::from_yaml_str("direction: from_right\non_screen_duration: 0\n")
            .unwrap();
        assert_eq!(config.direction, SlideDirection::FromRight);
        assert!((config.animation_duration - 0.5).abs() < f32::EPSILON);
        assert!(!config.auto_hides());
    }

    #[test]
    fn test_json_parse() {
        let config =
            TransitionConfig::from_json_str(r#"{"direction":"from_bottom","animation_duration":1.5}"#)
                .unwrap();
        assert_eq!(config.direction, SlideDirection::FromBottom);
        assert!((config.animation_duration - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_yaml_rejects_unknown_direction() {
        let err = TransitionConfig::from_yaml_str("direction: diagonal\n").unwrap_err();
        assert!(matches!(err, SlideError::Yaml(_)));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toast.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "animation_duration: 0.2").unwrap();
        let config = TransitionConfig::load(&path).unwrap();
        assert!((config.animation_duration - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = TransitionConfig::load(Path::new("toast.toml")).unwrap_err();
        assert!(matches!(err, SlideError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let config = TransitionConfig::new().with_direction(SlideDirection::FromLeft);
        let yaml = config.to_yaml_string().unwrap();
        assert!(yaml.contains("from_left"));
        assert_eq!(TransitionConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
