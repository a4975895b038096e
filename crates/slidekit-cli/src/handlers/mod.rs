//! Command handlers - one module per subcommand
//!
//! Each handler resolves its inputs, calls into `slidekit`, and renders the
//! result. Rendering returns strings so it can be tested without a terminal.

pub mod check;
pub mod config;
pub mod simulate;

use crate::commands::{PanelArgs, TransitionArgs};
use crate::error::{CliError, CliResult};
use slidekit::{RectPanel, Size, TransitionConfig, Vec2};

pub use check::execute_check;
pub use config::execute_config;
pub use simulate::execute_simulate;

/// Load the config file (if any) and apply command-line overrides.
pub fn resolve_transition(args: &TransitionArgs) -> CliResult<TransitionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            tracing::info!(path = %path.display(), "loading transition config");
            TransitionConfig::load(path)?
        }
        None => TransitionConfig::default(),
    };

    if let Some(direction) = args.direction {
        config = config.with_direction(direction.into());
    }
    if let Some(secs) = args.animation_duration {
        config = config.with_animation_duration(secs);
    }
    if let Some(secs) = args.on_screen_duration {
        config = config.with_on_screen_duration(secs);
    }
    Ok(config)
}

/// Build the simulated panel.
pub fn build_panel(args: &PanelArgs) -> CliResult<RectPanel> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(args.width) || !valid(args.height) {
        return Err(CliError::invalid_argument(format!(
            "panel size must be positive, got {}x{}",
            args.width, args.height
        )));
    }
    if !args.x.is_finite() || !args.y.is_finite() {
        return Err(CliError::invalid_argument("panel anchor must be finite"));
    }

    let panel = RectPanel::new(Vec2::new(args.x, args.y), Size::new(args.width, args.height));
    Ok(if args.unframed { panel.unframed() } else { panel })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::DirectionArg;
    use slidekit::{Panel, SlideDirection};
    use std::io::Write;

    fn transition_args() -> TransitionArgs {
        TransitionArgs {
            config: None,
            direction: None,
            animation_duration: None,
            on_screen_duration: None,
        }
    }

    fn panel_args() -> PanelArgs {
        PanelArgs {
            width: 100.0,
            height: 20.0,
            x: 0.0,
            y: 0.0,
            unframed: false,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_transition(&transition_args()).unwrap();
        assert_eq!(config, TransitionConfig::default());
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toast.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "direction: from_bottom\nanimation_duration: 2.0").unwrap();

        let mut args = transition_args();
        args.config = Some(path);
        args.direction = Some(DirectionArg::FromRight);
        let config = resolve_transition(&args).unwrap();
        assert_eq!(config.direction, SlideDirection::FromRight);
        assert!((config.animation_duration - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_config_file() {
        let mut args = transition_args();
        args.config = Some("/nonexistent/toast.yaml".into());
        let err = resolve_transition(&args).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_build_panel() {
        let panel = build_panel(&panel_args()).unwrap();
        assert!(panel.has_enclosing_frame());
        let mut args = panel_args();
        args.unframed = true;
        assert!(!build_panel(&args).unwrap().has_enclosing_frame());
    }

    #[test]
    fn test_build_panel_rejects_bad_size() {
        let mut args = panel_args();
        args.width = 0.0;
        assert!(matches!(
            build_panel(&args).unwrap_err(),
            CliError::InvalidArgument { .. }
        ));
        args.width = f32::NAN;
        assert!(build_panel(&args).is_err());
    }
}
