//! Config command handler

use super::resolve_transition;
use crate::commands::ConfigArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use slidekit::TransitionConfig;

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let transition = resolve_transition(&args.transition)?;
    if config.verbosity.is_verbose() {
        match &args.transition.config {
            Some(path) => eprintln!("# resolved from {}", path.display()),
            None => eprintln!("# built-in defaults"),
        }
    }
    print!("{}", render_yaml(&transition)?);
    Ok(())
}

/// Render a resolved configuration as YAML
pub fn render_yaml(transition: &TransitionConfig) -> CliResult<String> {
    Ok(serde_yaml_ng::to_string(transition)?)
}
