use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::GlobalFlags;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
    pub interactive: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    // Spinners draw on stderr so stdout stays parseable.
    let progress = std::io::stderr().is_terminal() && !flags.quiet;
    let interactive = std::io::stdin().is_terminal();

    let _ = UI_PREFS.set(UiPrefs {
        progress,
        interactive,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        progress: false,
        interactive: false,
    })
}
