//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    colors_enabled(|name| std::env::var(name).ok(), std::io::stdout().is_terminal())
}

/// Color decision from an environment lookup and the stdout TTY status.
///
/// Priority: NO_COLOR (https://no-color.org/), then CLICOLOR_FORCE,
/// then CLICOLOR=0, then the TTY check.
fn colors_enabled(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if env("NO_COLOR").is_some() {
        return false;
    }

    if env("CLICOLOR_FORCE").is_some_and(|val| val != "0") {
        return true;
    }

    if env("CLICOLOR").is_some_and(|val| val == "0") {
        return false;
    }

    is_tty
}
