//! Environment seam for the theme store.
//!
//! The store never touches the filesystem, the OS or a document directly.
//! It talks to a [`PreferenceBackend`] (durable slot + system appearance
//! signal) and a [`Presentation`] (the single "dark palette on/off" switch).

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopBackend;
pub use memory::{MemoryBackend, RecordingPresentation};

use crate::error::StarterKitError;

/// Fixed key of the durable slot.
pub const SLOT_KEY: &str = "theme";

/// Durable slot plus the ambient "prefers dark" signal.
pub trait PreferenceBackend {
    /// Read the raw slot value. `Ok(None)` when nothing has been stored yet.
    fn read_slot(&self) -> Result<Option<String>, StarterKitError>;

    /// Overwrite the slot. Must be durable by the time it returns.
    fn write_slot(&mut self, value: &str) -> Result<(), StarterKitError>;

    /// Whether the system-level appearance preference is dark.
    fn prefers_dark(&self) -> Result<bool, StarterKitError>;
}

/// Receiver of the active-theme signal.
pub trait Presentation {
    fn apply_dark(&mut self, dark: bool) -> Result<(), StarterKitError>;
}

impl<T: PreferenceBackend + ?Sized> PreferenceBackend for Box<T> {
    fn read_slot(&self) -> Result<Option<String>, StarterKitError> {
        (**self).read_slot()
    }

    fn write_slot(&mut self, value: &str) -> Result<(), StarterKitError> {
        (**self).write_slot(value)
    }

    fn prefers_dark(&self) -> Result<bool, StarterKitError> {
        (**self).prefers_dark()
    }
}

impl<T: Presentation + ?Sized> Presentation for &mut T {
    fn apply_dark(&mut self, dark: bool) -> Result<(), StarterKitError> {
        (**self).apply_dark(dark)
    }
}
