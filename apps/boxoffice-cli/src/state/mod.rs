//! # State Module
//!
//! Manages shell state.
//!
//! ## State Types
//! The registry is mutable and shared; configuration is read-only after
//! startup. Each command takes only the state it uses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────┐                 ┌──────────────────┐              │
//! │  │  RegistryState   │                 │   ConfigState    │              │
//! │  │                  │                 │                  │              │
//! │  │  Arc<Mutex<      │                 │  output format   │              │
//! │  │   ShowRegistry   │                 │  banner          │              │
//! │  │  >>              │                 │                  │              │
//! │  └──────────────────┘                 └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • RegistryState: one lock around shows and the ticket index           │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod registry;

pub use config::{ConfigState, OutputFormat};
pub use registry::RegistryState;
