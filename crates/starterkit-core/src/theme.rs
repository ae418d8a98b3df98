//! The persisted light/dark preference store.
//!
//! [`ThemeStore`] owns the active [`Theme`], resolves it once per session
//! (persisted slot first, then the system appearance signal, then light),
//! and pushes every change to the presentation layer and the durable slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::backend::{PreferenceBackend, Presentation};
use crate::error::StarterKitError;

/// The active visual palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Serialized form, as written to the durable slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Interpret a persisted value. Only the exact serialized forms count.
    pub fn from_slot(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for Theme {
    type Err = StarterKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(StarterKitError::InvalidTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How the current theme was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Read back from the durable slot.
    Persisted,
    /// Taken from the system appearance signal.
    System,
    /// Nothing was available; fell back to light.
    Default,
    /// Set by an explicit `set_theme` / `toggle_theme` call.
    Explicit,
}

/// Single authority for the active theme of one session.
pub struct ThemeStore<B, P> {
    backend: B,
    presentation: P,
    current: Theme,
    resolution: Option<Resolution>,
}

impl<B, P> ThemeStore<B, P>
where
    B: PreferenceBackend,
    P: Presentation,
{
    /// Create an unresolved store. Call [`initialize`](Self::initialize) before rendering.
    pub fn new(backend: B, presentation: P) -> Self {
        Self {
            backend,
            presentation,
            current: Theme::default(),
            resolution: None,
        }
    }

    /// Resolve the theme for this session and apply it.
    ///
    /// Only the first call does any work; later calls return the current
    /// theme untouched. Backend failures never escape: an unreadable slot is
    /// treated as empty and an unavailable signal as light.
    pub fn initialize(&mut self) -> Theme {
        if self.resolution.is_some() {
            return self.current;
        }

        let (theme, resolution) = match self.read_persisted() {
            Some(theme) => (theme, Resolution::Persisted),
            None => match self.query_system() {
                Some(true) => (Theme::Dark, Resolution::System),
                Some(false) => (Theme::Light, Resolution::System),
                None => (Theme::Light, Resolution::Default),
            },
        };

        self.current = theme;
        self.resolution = Some(resolution);
        self.propagate();
        tracing::debug!(%theme, ?resolution, "Theme resolved");
        theme
    }

    /// The active theme. Light until the store has been resolved.
    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current.is_dark()
    }

    /// How the current theme was chosen, or `None` before initialization.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn is_initialized(&self) -> bool {
        self.resolution.is_some()
    }

    /// Make `next` the active theme, apply it, and persist it.
    ///
    /// All three steps run on every call, including when `next` is already
    /// active. Calling this before `initialize` counts as resolving the store.
    pub fn set_theme(&mut self, next: Theme) {
        self.current = next;
        self.resolution = Some(Resolution::Explicit);
        self.propagate();
        self.persist();
        tracing::info!(theme = %next, "Theme changed");
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.current.toggled());
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    fn read_persisted(&self) -> Option<Theme> {
        match self.backend.read_slot() {
            Ok(Some(raw)) => {
                let theme = Theme::from_slot(&raw);
                if theme.is_none() {
                    tracing::warn!("Ignoring invalid persisted theme {raw:?}");
                }
                theme
            }
            Ok(None) => None,
            Err(e) => {
                report("read persisted theme", &e);
                None
            }
        }
    }

    fn query_system(&self) -> Option<bool> {
        match self.backend.prefers_dark() {
            Ok(dark) => Some(dark),
            Err(e) => {
                report("query system appearance", &e);
                None
            }
        }
    }

    fn propagate(&mut self) {
        if let Err(e) = self.presentation.apply_dark(self.current.is_dark()) {
            report("apply theme", &e);
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.backend.write_slot(self.current.as_str()) {
            report("persist theme", &e);
        }
    }
}

/// Log a swallowed backend failure. Missing capabilities are expected in
/// some environments and stay at debug level.
fn report(action: &str, err: &StarterKitError) {
    if err.is_unsupported() {
        tracing::debug!("Cannot {action}: {err}");
    } else {
        tracing::warn!("Failed to {action}: {err}");
    }
}
