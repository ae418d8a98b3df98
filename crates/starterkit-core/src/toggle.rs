//! The nav-bar light/dark toggle.

use crate::backend::{PreferenceBackend, Presentation};
use crate::theme::{Theme, ThemeStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleIcon::Sun => "☀",
            ToggleIcon::Moon => "☾",
        }
    }
}

/// What the toggle shows: the icon of the theme it switches *to*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    pub icon: ToggleIcon,
    pub label: &'static str,
}

impl ThemeToggle {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                icon: ToggleIcon::Sun,
                label: "Switch to light mode",
            },
            Theme::Light => Self {
                icon: ToggleIcon::Moon,
                label: "Switch to dark mode",
            },
        }
    }

    pub fn of<B, P>(store: &ThemeStore<B, P>) -> Self
    where
        B: PreferenceBackend,
        P: Presentation,
    {
        Self::for_theme(store.theme())
    }

    /// User clicked the toggle. Returns the newly active theme.
    pub fn activate<B, P>(store: &mut ThemeStore<B, P>) -> Theme
    where
        B: PreferenceBackend,
        P: Presentation,
    {
        store.toggle_theme();
        store.theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryBackend, RecordingPresentation};

    #[test]
    fn test_icon_shows_target_theme() {
        assert_eq!(ThemeToggle::for_theme(Theme::Dark).icon, ToggleIcon::Sun);
        assert_eq!(ThemeToggle::for_theme(Theme::Light).icon, ToggleIcon::Moon);
    }

    #[test]
    fn test_activate_flips_store() {
        let backend = MemoryBackend::new().prefers(true);
        let mut store = ThemeStore::new(backend.clone(), RecordingPresentation::default());
        store.initialize();
        assert_eq!(ThemeToggle::of(&store).label, "Switch to light mode");

        assert_eq!(ThemeToggle::activate(&mut store), Theme::Light);
        assert_eq!(ThemeToggle::of(&store).icon, ToggleIcon::Moon);
        assert_eq!(backend.slot().as_deref(), Some("light"));
    }
}
