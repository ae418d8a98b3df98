//! In-memory backend for tests and non-interactive contexts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{PreferenceBackend, Presentation};
use crate::error::StarterKitError;

/// A fake environment with a slot that outlives any single store.
///
/// Clones share the slot and the write counter, so building a second store
/// over [`session`](Self::session) behaves like a process restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
    prefers_dark: Option<bool>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryBackend {
    /// Empty slot, no system signal.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(value: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.slot.borrow_mut() = Some(value.into());
        backend
    }

    /// Report a system appearance signal.
    pub fn prefers(mut self, dark: bool) -> Self {
        self.prefers_dark = Some(dark);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// A new session over the same slot.
    pub fn session(&self) -> Self {
        self.clone()
    }

    pub fn slot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful writes across all sessions.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn read_slot(&self) -> Result<Option<String>, StarterKitError> {
        if self.fail_reads {
            return Err(StarterKitError::Storage("simulated read failure".into()));
        }
        Ok(self.slot())
    }

    fn write_slot(&mut self, value: &str) -> Result<(), StarterKitError> {
        if self.fail_writes {
            return Err(StarterKitError::Storage("simulated write failure".into()));
        }
        *self.slot.borrow_mut() = Some(value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn prefers_dark(&self) -> Result<bool, StarterKitError> {
        self.prefers_dark
            .ok_or(StarterKitError::Unsupported("system appearance signal"))
    }
}

/// Presentation fake that remembers every signal it received.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresentation {
    applied: Rc<RefCell<Vec<bool>>>,
    fail: bool,
}

impl RecordingPresentation {
    /// Records each signal, then reports it as not applied.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn applied(&self) -> Vec<bool> {
        self.applied.borrow().clone()
    }

    pub fn last(&self) -> Option<bool> {
        self.applied.borrow().last().copied()
    }
}

impl Presentation for RecordingPresentation {
    fn apply_dark(&mut self, dark: bool) -> Result<(), StarterKitError> {
        self.applied.borrow_mut().push(dark);
        if self.fail {
            return Err(StarterKitError::Presentation("simulated apply failure".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_shares_slot() {
        let mut a = MemoryBackend::new();
        let b = a.session();
        a.write_slot("dark").unwrap();
        assert_eq!(b.read_slot().unwrap().as_deref(), Some("dark"));
        assert_eq!(b.write_count(), 1);
    }

    #[test]
    fn test_missing_signal_is_unsupported() {
        let err = MemoryBackend::new().prefers_dark().unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_failures_are_not_unsupported() {
        let mut backend = MemoryBackend::new().failing_reads().failing_writes();
        assert!(!backend.read_slot().unwrap_err().is_unsupported());
        assert!(!backend.write_slot("light").unwrap_err().is_unsupported());
        assert_eq!(backend.write_count(), 0);
    }
}
