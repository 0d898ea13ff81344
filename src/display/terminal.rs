//! TTY detection and color support logic

use std::io::IsTerminal;

/// Whether previews should be styled.
///
/// `NO_COLOR` wins over everything, then `CLICOLOR_FORCE` (non-zero),
/// then `CLICOLOR=0`; otherwise colors follow whether stdout is a TTY.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    match std::env::var("CLICOLOR_FORCE") {
        Ok(val) if val != "0" => return true,
        _ => {}
    }

    if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        return false;
    }

    std::io::stdout().is_terminal()
}
