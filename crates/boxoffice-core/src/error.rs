//! # Error Types
//!
//! Domain-specific error types for boxoffice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boxoffice-core errors (this file)                                     │
//! │  ├── BoxOfficeError   - What every operation returns                   │
//! │  │   ├── InvalidSetup(SetupError)                                      │
//! │  │   ├── NoSuchShow / NoSuchTicket                                     │
//! │  │   ├── Booking(BookingError)                                         │
//! │  │   └── CancelBooking(CancelError)                                    │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the shell renders                         │
//! │                                                                         │
//! │  Flow: ValidationError → BookingError → BoxOfficeError → CliError      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All variants are expected, recoverable conditions. A failed operation
//! never leaves partial state behind in the registry.

use thiserror::Error;

use crate::types::{ShowNumber, TicketId};

// =============================================================================
// Box Office Error
// =============================================================================

/// Errors returned by registry operations.
#[derive(Debug, Error)]
pub enum BoxOfficeError {
    /// Show creation constraints violated.
    #[error("Invalid setup: {0}")]
    InvalidSetup(#[from] SetupError),

    /// The referenced show number is not registered.
    #[error("Show {0} does not exist.")]
    NoSuchShow(ShowNumber),

    /// The referenced ticket number is not registered.
    #[error("Ticket {0} does not exist.")]
    NoSuchTicket(TicketId),

    /// A booking rule was violated.
    #[error("Booking rejected: {0}")]
    Booking(#[from] BookingError),

    /// A cancellation rule was violated.
    #[error("Cancellation rejected: {0}")]
    CancelBooking(#[from] CancelError),
}

// =============================================================================
// Setup Error
// =============================================================================

/// Reasons a show cannot be set up.
///
/// Checked in declaration order: seats per row, then rows, then uniqueness.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("Number of seats must be {max} or less.")]
    TooManySeatsPerRow { requested: u32, max: u32 },

    #[error("Number of rows must be {max} or less.")]
    TooManyRows { requested: u32, max: u32 },

    #[error("Show {0} already exists.")]
    ShowExists(ShowNumber),
}

// =============================================================================
// Booking Error
// =============================================================================

/// Reasons a booking request is refused.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(#[source] ValidationError),

    /// One active booking per phone number per show. The existing ticket is
    /// not returned; the buyer has to cancel it before booking again.
    #[error("Phone number: {0} already has an existing booking.")]
    AlreadyBooked(String),

    /// Covers occupied seats, labels outside the grid and unparseable labels.
    #[error("Seat: {0} is not available.")]
    SeatNotAvailable(String),
}

// =============================================================================
// Cancel Error
// =============================================================================

/// Reasons a cancellation is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CancelError {
    #[error("Phone number does not match the one in booking.")]
    PhoneMismatch,

    #[error("You cannot cancel your booking as it passed the window of: {window_minutes} minutes")]
    WindowPassed {
        window_minutes: u32,
        elapsed_minutes: i64,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the [`crate::validation`] helpers before any rule that
/// touches the registry runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. non-digit phone number, malformed seat label).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BoxOfficeError.
pub type BoxOfficeResult<T> = Result<T, BoxOfficeError>;

// =============================================================================
// Unit Tests
// =============================================================================
