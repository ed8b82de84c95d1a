//! # Registry State
//!
//! Shares the show registry between commands.
//!
//! ## Thread Safety
//! The registry is wrapped in `Arc<Mutex<T>>` because:
//! 1. Booking and cancellation on the same show must serialize
//! 2. The check and the commit of a booking must see the same seats
//! 3. Clones of the state may be handed to other threads
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry State Operations                            │
//! │                                                                         │
//! │  Command            Access                 Core call                    │
//! │  ───────            ──────                 ─────────                    │
//! │  Setup ───────────► with_registry_mut ───► AdminDesk::setup            │
//! │  View ────────────► with_registry ───────► ShowRegistry::report        │
//! │  Availability ────► with_registry ───────► ShowRegistry::available_seats│
//! │  Book ────────────► with_registry_mut ───► BoxOffice::book             │
//! │  Cancel ──────────► with_registry_mut ───► BoxOffice::cancel           │
//! │                                                                         │
//! │  NOTE: the lock is held for the whole core call, never across I/O.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use boxoffice_core::ShowRegistry;

/// Shared handle to the registry.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryState {
    registry: Arc<Mutex<ShowRegistry>>,
}

impl RegistryState {
    /// Creates state around an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the registry.
    ///
    /// ## Usage
    /// ```rust
    /// use boxoffice_cli::state::RegistryState;
    ///
    /// let state = RegistryState::new();
    /// assert_eq!(state.with_registry(|r| r.show_count()), 0);
    /// ```
    pub fn with_registry<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShowRegistry) -> R,
    {
        // Core operations are all-or-nothing, so a registry behind a
        // poisoned lock is still consistent.
        let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        f(&registry)
    }

    /// Executes a function with write access to the registry.
    pub fn with_registry_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShowRegistry) -> R,
    {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut registry)
    }
}
