//! # boxoffice-core: Pure Booking Logic
//!
//! This crate is the **heart** of the box office. It owns seat inventory and
//! the booking/cancellation rules, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Box Office Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    boxoffice-cli (shell)                        │   │
//! │  │    Setup ─ View ─ Availability ─ Book ─ Cancel                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ boxoffice-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   admin   │  │  booking  │  │ registry  │  │ validation│  │   │
//! │  │   │ AdminDesk │  │ BoxOffice │  │   Show    │  │  phone    │  │   │
//! │  │   │  setup    │  │ book      │  │ Registry  │  │  seats    │  │   │
//! │  │   │  view     │  │ cancel    │  │           │  │  grid     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO PRINTING                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Show, Seat, SeatLabel, Ticket, ShowReport)
//! - [`registry`] - The in-memory store shared by the operation components
//! - [`admin`] - Show setup and reporting
//! - [`booking`] - Availability, booking and cancellation
//! - [`validation`] - Input parsing rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use boxoffice_core::{AdminDesk, BoxOffice, ShowRegistry};
//! use chrono::Utc;
//!
//! let mut registry = ShowRegistry::new();
//! AdminDesk::new(&mut registry).setup(1, 3, 3, 2).unwrap();
//!
//! let mut office = BoxOffice::new(&mut registry);
//! let ticket = office.book(1, "98244587", "A1,A2,A3").unwrap();
//! assert_eq!(office.available_seats(1).unwrap().len(), 6);
//!
//! office.cancel(ticket.id, "98244587", Utc::now()).unwrap();
//! assert_eq!(office.available_seats(1).unwrap().len(), 9);
//! assert_eq!(registry.ticket_count(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod admin;
pub mod booking;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use admin::AdminDesk;
pub use booking::BoxOffice;
pub use error::{
    BookingError, BoxOfficeError, BoxOfficeResult, CancelError, SetupError, ValidationError,
};
pub use registry::ShowRegistry;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of rows in a show (one per letter).
pub const MAX_ROWS: u32 = 26;

/// Maximum number of seats in a row.
pub const MAX_SEATS_PER_ROW: u32 = 10;

/// Row letters, indexed by 0-based row.
pub const ROW_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
