//! Terminal styling for command output

use console::{style, StyledObject};
use slidekit::{Lifecycle, Verdict};

/// PASS/FAIL label for one event
#[must_use]
pub fn status_label(passed: bool) -> StyledObject<&'static str> {
    if passed {
        style("PASS").green()
    } else {
        style("FAIL").red().bold()
    }
}

/// Overall verdict, colored by outcome
#[must_use]
pub fn verdict_label(verdict: Verdict) -> StyledObject<String> {
    let text = verdict.to_string();
    match verdict {
        Verdict::Pass => style(text).green().bold(),
        Verdict::Fail => style(text).red().bold(),
        Verdict::NoEvents => style(text).yellow(),
    }
}

/// Lifecycle name padded to a fixed column
#[must_use]
pub fn lifecycle_label(lifecycle: Lifecycle) -> StyledObject<String> {
    let text = format!("{:<13}", lifecycle.to_string());
    match lifecycle {
        Lifecycle::ShowStart | Lifecycle::ShowComplete => style(text).cyan(),
        Lifecycle::HideStart | Lifecycle::HideComplete => style(text).magenta(),
    }
}

/// Section heading
#[must_use]
pub fn heading(text: &str) -> StyledObject<&str> {
    style(text).bold()
}
