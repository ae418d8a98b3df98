pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod palette;
pub mod theme;
pub mod toggle;

pub use error::StarterKitError;
pub use theme::{Resolution, Theme, ThemeStore};
