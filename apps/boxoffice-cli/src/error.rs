//! # CLI Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Box Office Shell                   │
//! │                                                                         │
//! │  "Book 1 98244587 A2"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::parse ── bad arity / not a number ──► CliError(InvalidInput) │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::execute                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  BoxOfficeError::Booking(SeatNotAvailable) ──► CliError(BookingRejected)│
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render: "[BookingRejected] Seat: A2 is not available."                 │
//! │          {"error":{"code":"BOOKING_REJECTED","message":"..."}}          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No error ends the session; each one is rendered and the next line is read.

use boxoffice_core::{BoxOfficeError, ValidationError};
use serde::Serialize;

/// Error returned from shell commands.
///
/// ## Serialization
/// In JSON output mode the shell prints:
/// ```json
/// { "error": { "code": "NOT_FOUND", "message": "Show 3 does not exist." } }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for rendered failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed line: wrong argument count, not a number, bad ticket number
    InvalidInput,

    /// First word is not a known verb
    UnknownCommand,

    /// Show creation rejected
    InvalidSetup,

    /// Show or ticket does not exist
    NotFound,

    /// Booking rule violated
    BookingRejected,

    /// Cancellation rule violated
    CancellationRejected,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::InvalidInput, message)
    }

    /// The shell's reply to a wrong argument count.
    pub fn invalid_params(verb: &str) -> Self {
        CliError::invalid_input(format!("Invalid params for {} command", verb))
    }

    /// Creates an unknown command error.
    pub fn unknown_command() -> Self {
        CliError::new(ErrorCode::UnknownCommand, "Unknown command")
    }
}

/// Converts core errors to CLI errors.
///
/// The wrapped sub-error's message is used so the shell prints
/// "Seat: A2 is not available." rather than the outer "Booking rejected: …".
impl From<BoxOfficeError> for CliError {
    fn from(err: BoxOfficeError) -> Self {
        match err {
            BoxOfficeError::InvalidSetup(e) => CliError::new(ErrorCode::InvalidSetup, e.to_string()),
            BoxOfficeError::NoSuchShow(_) | BoxOfficeError::NoSuchTicket(_) => {
                CliError::new(ErrorCode::NotFound, err.to_string())
            }
            BoxOfficeError::Booking(e) => CliError::new(ErrorCode::BookingRejected, e.to_string()),
            BoxOfficeError::CancelBooking(e) => {
                CliError::new(ErrorCode::CancellationRejected, e.to_string())
            }
        }
    }
}

/// Converts input validation errors (e.g. a malformed ticket number).
impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::invalid_input(err.to_string())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::{BookingError, CancelError, SetupError, TicketId};

    #[test]
    fn test_booking_error_keeps_inner_message() {
        let err: CliError = BoxOfficeError::from(BookingError::SeatNotAvailable("A2".into())).into();
        assert_eq!(err.code, ErrorCode::BookingRejected);
        assert_eq!(err.message, "Seat: A2 is not available.");
        assert_eq!(err.to_string(), "[BookingRejected] Seat: A2 is not available.");
    }

    #[test]
    fn test_error_code_mapping() {
        let cases: Vec<(BoxOfficeError, ErrorCode)> = vec![
            (SetupError::ShowExists(1).into(), ErrorCode::InvalidSetup),
            (BoxOfficeError::NoSuchShow(1), ErrorCode::NotFound),
            (BoxOfficeError::NoSuchTicket(TicketId::nil()), ErrorCode::NotFound),
            (CancelError::PhoneMismatch.into(), ErrorCode::CancellationRejected),
        ];

        for (err, code) in cases {
            assert_eq!(CliError::from(err).code, code);
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = CliError::from(BoxOfficeError::NoSuchShow(7));
        assert_eq!(err.message, "Show 7 does not exist.");
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_string(&CliError::unknown_command()).unwrap();
        assert_eq!(json, r#"{"code":"UNKNOWN_COMMAND","message":"Unknown command"}"#);
    }
}
