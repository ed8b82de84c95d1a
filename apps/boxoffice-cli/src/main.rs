//! # Box Office Shell Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        boxoffice                                        │
//! │                                                                         │
//! │  stdin ──► session ──► commands ──► boxoffice-core (registry)          │
//! │                 │                                                       │
//! │                 └──► render ──► stdout (text or JSON lines)             │
//! │                                                                         │
//! │  tracing ──► stderr                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state is in memory and is lost when the process exits.

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for testability
    boxoffice_cli::run()
}
