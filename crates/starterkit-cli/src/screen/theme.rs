use std::fmt::Write;

use starterkit_core::backend::PreferenceBackend;
use starterkit_core::palette::PaletteSwitch;
use starterkit_core::toggle::ThemeToggle;
use starterkit_core::{Resolution, Theme, ThemeStore};

use crate::toast::Toast;

type Store<B> = ThemeStore<B, PaletteSwitch>;

pub fn show<B: PreferenceBackend>(store: &Store<B>) -> String {
    let toggle = ThemeToggle::of(store);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Theme:   {} ({})",
        store.theme(),
        describe(store.resolution())
    );
    let _ = writeln!(out, "Toggle:  {} {}", toggle.icon.glyph(), toggle.label);
    let _ = writeln!(out, "Palette:");
    for (name, color) in store.presentation().active().tokens() {
        let _ = writeln!(out, "  {name:<20} {color}");
    }
    out
}

pub fn toggle<B: PreferenceBackend>(store: &mut Store<B>) -> String {
    let theme = ThemeToggle::activate(store);
    format!("{}\n", Toast::success(format!("Switched to {theme} mode")))
}

pub fn set<B: PreferenceBackend>(store: &mut Store<B>, theme: Theme) -> String {
    let toast = if store.theme() == theme {
        Toast::info(format!("Already in {theme} mode"))
    } else {
        Toast::success(format!("Switched to {theme} mode"))
    };
    store.set_theme(theme);
    format!("{toast}\n")
}

fn describe(resolution: Option<Resolution>) -> &'static str {
    match resolution {
        Some(Resolution::Persisted) => "saved preference",
        Some(Resolution::System) => "system setting",
        Some(Resolution::Default) => "default",
        Some(Resolution::Explicit) => "set this session",
        None => "unresolved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starterkit_core::backend::MemoryBackend;

    fn store(backend: MemoryBackend) -> Store<MemoryBackend> {
        let mut store = ThemeStore::new(backend, PaletteSwitch::builtin());
        store.initialize();
        store
    }

    #[test]
    fn test_show_light_from_system() {
        let out = show(&store(MemoryBackend::new().prefers(false)));
        assert!(out.starts_with("Theme:   light (system setting)\n"));
        assert!(out.contains("☾ Switch to dark mode"));
        assert!(out.contains("background           #ffffff"));
    }

    #[test]
    fn test_show_dark_from_slot() {
        let out = show(&store(MemoryBackend::with_slot("dark")));
        assert!(out.contains("dark (saved preference)"));
        assert!(out.contains("☀ Switch to light mode"));
        assert!(out.contains("#0a0a0a"));
    }

    #[test]
    fn test_toggle_persists() {
        let backend = MemoryBackend::new();
        let mut s = store(backend.clone());
        assert_eq!(toggle(&mut s), "✓ Switched to dark mode\n");
        assert_eq!(backend.slot().as_deref(), Some("dark"));
        assert!(s.presentation().is_dark());
    }

    #[test]
    fn test_set_same_theme_is_info_but_still_written() {
        let backend = MemoryBackend::new();
        let mut s = store(backend.clone());
        assert_eq!(set(&mut s, Theme::Light), "ℹ Already in light mode\n");
        assert_eq!(backend.write_count(), 1);
    }
}
