//! System clipboard access.
//!
//! On Linux the copying process owns the selection, and the contents vanish
//! when it exits. The CLI therefore keeps serving the selection until another
//! program takes it over or [`SELECTION_HOLD`] runs out.

#[cfg(target_os = "linux")]
use std::time::{Duration, Instant};

use arboard::Clipboard;

use crate::error::CliError;

/// How long a Linux copy keeps the process alive to serve pastes.
#[cfg(target_os = "linux")]
pub const SELECTION_HOLD: Duration = Duration::from_secs(30);

fn clipboard_error(e: arboard::Error) -> CliError {
    CliError::Clipboard(e.to_string())
}

pub fn copy_text(text: &str) -> Result<(), CliError> {
    let mut clipboard = Clipboard::new().map_err(clipboard_error)?;
    set_text(&mut clipboard, text)?;
    tracing::debug!(bytes = text.len(), "Copied to clipboard");
    Ok(())
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), CliError> {
    use arboard::SetExtLinux;

    tracing::info!(
        "Clipboard is held for {}s; paste it before then",
        SELECTION_HOLD.as_secs()
    );
    clipboard
        .set()
        .wait_until(hold_deadline(Instant::now()))
        .text(text.to_owned())
        .map_err(clipboard_error)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), CliError> {
    clipboard.set_text(text.to_owned()).map_err(clipboard_error)
}

#[cfg(target_os = "linux")]
fn hold_deadline(now: Instant) -> Instant {
    now + SELECTION_HOLD
}

#[cfg(test)]
mod tests {
    #[cfg(target_os = "linux")]
    #[test]
    fn test_selection_is_held_past_exit() {
        use super::*;

        let now = Instant::now();
        let deadline = hold_deadline(now);
        assert!(deadline > now);
        assert_eq!(deadline - now, SELECTION_HOLD);
    }
}
