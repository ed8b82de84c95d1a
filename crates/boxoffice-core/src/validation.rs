//! # Validation Module
//!
//! Input parsing and validation for the box office.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command shell                                                │
//! │  ├── Argument count, integer parsing                                   │
//! │  └── Ticket number format (parse_ticket_id)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Phone number format                                               │
//! │  ├── Seat label format, seat list splitting                            │
//! │  └── Grid limits                                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Registry rules (admin / booking)                             │
//! │  ├── Show uniqueness, seat availability                                │
//! │  └── One booking per phone, cancellation window                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxoffice_core::validation::{split_seat_labels, validate_phone_number};
//!
//! assert!(validate_phone_number("98244587").is_ok());
//! assert_eq!(split_seat_labels("A1,A2"), vec!["A1", "A2"]);
//! ```

use crate::error::{SetupError, ValidationError};
use crate::types::{SeatLabel, TicketId};
use crate::{MAX_ROWS, MAX_SEATS_PER_ROW, ROW_LETTERS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a buyer phone number.
///
/// ## Rules
/// - Must not be empty
/// - ASCII digits only (no `+`, spaces or dashes)
///
/// ## Example
/// ```rust
/// use boxoffice_core::validation::validate_phone_number;
///
/// assert!(validate_phone_number("98244587").is_ok());
/// assert!(validate_phone_number("").is_err());
/// assert!(validate_phone_number("+6598244587").is_err());
/// ```
pub fn validate_phone_number(phone_number: &str) -> ValidationResult<()> {
    if phone_number.is_empty() {
        return Err(ValidationError::Required {
            field: "phone number".to_string(),
        });
    }

    if !phone_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone number".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

/// Parses a seat label such as `A1` or `Z10`.
///
/// ## Rules
/// - Uppercase row letter `A`..=`Z`
/// - Followed by a column `1`..=`10` without sign or leading zero
///
/// Only the canonical spelling is accepted, so `a1` and `A01` are rejected
/// rather than aliased onto `A1`.
pub fn parse_seat_label(raw: &str) -> ValidationResult<SeatLabel> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "seat".to_string(),
        reason: reason.to_string(),
    };

    let mut chars = raw.chars();
    let row_letter = chars.next().ok_or_else(|| ValidationError::Required {
        field: "seat".to_string(),
    })?;

    let row = ROW_LETTERS
        .iter()
        .position(|&b| char::from(b) == row_letter)
        .ok_or_else(|| invalid("row must be a letter from A to Z"))?;

    let column = chars.as_str();
    if column.is_empty() || column.starts_with('0') || !column.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("column must be a number from 1 to 10"));
    }

    let column: u8 = column.parse().map_err(|_| ValidationError::OutOfRange {
        field: "seat column".to_string(),
        min: 1,
        max: i64::from(MAX_SEATS_PER_ROW),
    })?;

    SeatLabel::new(row as u8, column)
}

/// Splits a comma-separated seat list, trimming each entry.
///
/// Trailing empty entries are dropped (`"A1,A2,"` is two seats). Interior
/// ones are kept so that `"A1,,A2"` is reported as an unavailable seat. At
/// least one entry is always returned.
pub fn split_seat_labels(seats: &str) -> Vec<&str> {
    let mut labels: Vec<&str> = seats.split(',').map(str::trim).collect();
    while labels.len() > 1 && labels.last().is_some_and(|l| l.is_empty()) {
        labels.pop();
    }
    labels
}

/// Parses a ticket number.
///
/// ## Example
/// ```rust
/// use boxoffice_core::validation::parse_ticket_id;
///
/// assert!(parse_ticket_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(parse_ticket_id("not-a-uuid").is_err());
/// ```
pub fn parse_ticket_id(id: &str) -> ValidationResult<TicketId> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "ticket number".to_string(),
        });
    }

    TicketId::parse_str(id.trim()).map_err(|_| ValidationError::InvalidFormat {
        field: "ticket number".to_string(),
        reason: "must be a valid UUID".to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates show grid dimensions.
///
/// Seats per row are checked before rows, which decides the error reported
/// when both limits are exceeded.
pub fn validate_grid(rows: u32, seats_per_row: u32) -> Result<(), SetupError> {
    if seats_per_row > MAX_SEATS_PER_ROW {
        return Err(SetupError::TooManySeatsPerRow {
            requested: seats_per_row,
            max: MAX_SEATS_PER_ROW,
        });
    }

    if rows > MAX_ROWS {
        return Err(SetupError::TooManyRows {
            requested: rows,
            max: MAX_ROWS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
