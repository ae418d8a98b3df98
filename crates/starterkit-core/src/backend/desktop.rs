//! Filesystem + OS backend.
//!
//! The slot is a plain-text file named after [`SLOT_KEY`] inside the data
//! directory (`~/.local/share/starterkit/theme` or platform equivalent).
//! The file holds exactly `light` or `dark`; the content is handed to the
//! store verbatim, so a stray newline makes the slot invalid.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{PreferenceBackend, SLOT_KEY};
use crate::config::AppConfig;
use crate::error::StarterKitError;

#[derive(Debug, Clone)]
pub struct DesktopBackend {
    dir: PathBuf,
    follow_system: bool,
}

impl DesktopBackend {
    /// Backend storing its slot under `dir`, consulting the OS appearance.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            follow_system: true,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.data_dir()).follow_system(config.appearance.follow_system)
    }

    /// When disabled, the system signal is reported as unavailable.
    pub fn follow_system(mut self, follow: bool) -> Self {
        self.follow_system = follow;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self) -> PathBuf {
        self.dir.join(SLOT_KEY)
    }

    fn staging_path(&self) -> PathBuf {
        self.dir.join(format!("{SLOT_KEY}.tmp"))
    }
}

impl PreferenceBackend for DesktopBackend {
    fn read_slot(&self) -> Result<Option<String>, StarterKitError> {
        match fs::read_to_string(self.slot_path()) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Stage the value next to the slot, fsync it, then rename over the
    /// slot so a crash leaves either the old or the new value.
    fn write_slot(&mut self, value: &str) -> Result<(), StarterKitError> {
        fs::create_dir_all(&self.dir)?;
        let staging = self.staging_path();
        let result = stage(&staging, value).and_then(|()| fs::rename(&staging, self.slot_path()));
        if result.is_err() {
            let _ = fs::remove_file(&staging);
        }
        Ok(result?)
    }

    fn prefers_dark(&self) -> Result<bool, StarterKitError> {
        if !self.follow_system {
            return Err(StarterKitError::Unsupported("system appearance detection"));
        }
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Ok(true),
            Ok(dark_light::Mode::Light) => Ok(false),
            Ok(dark_light::Mode::Unspecified) => {
                Err(StarterKitError::Unsupported("system appearance detection"))
            }
            Err(e) => Err(StarterKitError::Appearance(e.to_string())),
        }
    }
}

fn stage(path: &Path, value: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let backend = DesktopBackend::new(dir.path().join("nested"));
        assert_eq!(backend.read_slot().unwrap(), None);
    }

    #[test]
    fn test_write_creates_dir_and_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DesktopBackend::new(dir.path().join("nested"));
        backend.write_slot("dark").unwrap();
        let raw = fs::read_to_string(backend.slot_path()).unwrap();
        assert_eq!(raw, "dark");
        assert_eq!(backend.read_slot().unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_slot_content_is_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SLOT_KEY), "dark \t\r\n\n").unwrap();
        let backend = DesktopBackend::new(dir.path());
        assert_eq!(backend.read_slot().unwrap().as_deref(), Some("dark \t\r\n\n"));
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DesktopBackend::new(dir.path());
        backend.write_slot("light").unwrap();
        backend.write_slot("dark").unwrap();
        assert_eq!(backend.read_slot().unwrap().as_deref(), Some("dark"));
        assert!(!backend.staging_path().exists());
    }

    #[test]
    fn test_failed_write_keeps_nothing_staged() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(SLOT_KEY)).unwrap();
        let mut backend = DesktopBackend::new(dir.path());
        assert!(backend.write_slot("dark").is_err());
        assert!(!backend.staging_path().exists());
        assert!(dir.path().join(SLOT_KEY).is_dir());
    }

    #[test]
    fn test_slot_is_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(SLOT_KEY)).unwrap();
        let backend = DesktopBackend::new(dir.path());
        let err = backend.read_slot().unwrap_err();
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_follow_system_disabled() {
        let backend = DesktopBackend::new("unused").follow_system(false);
        assert!(backend.prefers_dark().unwrap_err().is_unsupported());
    }
}
