//! # Box Office Shell Library
//!
//! Line-oriented shell over `boxoffice-core`. The binary in `main.rs` only
//! calls [`run`]; everything else lives here so it can be driven from tests.
//!
//! ## Module Organization
//! ```text
//! boxoffice_cli/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── session.rs      ◄─── Read/parse/execute/render loop
//! ├── render.rs       ◄─── Text and JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── registry.rs ◄─── Shared show registry
//! │   └── config.rs   ◄─── Output format, banner
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing, dispatch, Outcome
//! │   ├── admin.rs    ◄─── Setup, View
//! │   └── buyer.rs    ◄─── Availability, Book, Cancel
//! └── error.rs        ◄─── Error type rendered by the shell
//! ```
//!
//! ## State Management
//! Two focused state types instead of one `AppState`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────────────────┐ ┌──────────────────────────────────┐  │
//! │  │    RegistryState             │ │    ConfigState                   │  │
//! │  │                              │ │                                  │  │
//! │  │  • Shows and their grids     │ │  • Output format (text / json)   │  │
//! │  │  • Active tickets            │ │  • Welcome banner on/off         │  │
//! │  └──────────────────────────────┘ └──────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so stdout carries only command output.

pub mod commands;
pub mod error;
pub mod render;
pub mod session;
pub mod state;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, RegistryState};

/// Runs the shell on stdin/stdout until EOF or `Exit`.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─────► tracing-subscriber, RUST_LOG, stderr      │
/// │  2. Load Configuration ─────► BOXOFFICE_OUTPUT, BOXOFFICE_BANNER        │
/// │  3. Initialize State ───────► empty RegistryState                       │
/// │  4. Run Session ────────────► one command per stdin line                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(output = %config.output, banner = config.banner, "Starting box office shell");

    let registry = RegistryState::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = session::run_session(stdin.lock(), &mut out, &registry, &config)
        .context("box office session failed on stdin/stdout")?;

    let (shows, tickets) = registry.with_registry(|r| (r.show_count(), r.ticket_count()));
    info!(
        commands = summary.commands,
        failures = summary.failures,
        shows,
        tickets,
        "Session ended"
    );

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every parsed command
/// - `RUST_LOG=boxoffice_cli=info` - Show bookings and cancellations
/// - Default: WARN
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
