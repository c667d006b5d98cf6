//! Shared registry handle
//!
//! The registry's invariants rely on check-then-insert sequences that are
//! only sound when nobody else mutates in between. `SharedRegistry` puts the
//! whole registry behind a single mutex so a host with several threads can
//! still run each operation atomically.

use crate::core::registry::Registry;
use crate::domain::{ClinicError, Result};
use std::sync::{Arc, Mutex};

/// Cloneable, thread-safe handle to one [`Registry`]
///
/// # Examples
///
/// ```
/// use clinic::core::{Registry, SharedRegistry};
/// use clinic::domain::Patient;
///
/// # fn example() -> clinic::domain::Result<()> {
/// let shared = SharedRegistry::new(Registry::new());
/// shared.write(|r| r.register_patient(Patient::new("1", "Juan", "01/01/1990").unwrap()))??;
/// assert_eq!(shared.read(|r| r.list_patients().len())?, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Wraps a registry
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Runs a read-only operation while holding the lock
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::LockPoisoned`] if a previous holder panicked.
    pub fn read<T>(&self, f: impl FnOnce(&Registry) -> T) -> Result<T> {
        let guard = self.inner.lock().map_err(|_| ClinicError::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Runs a mutating operation while holding the lock
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::LockPoisoned`] if a previous holder panicked.
    pub fn write<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> Result<T> {
        let mut guard = self.inner.lock().map_err(|_| ClinicError::LockPoisoned)?;
        Ok(f(&mut guard))
    }
}
