//! # Buyer Commands
//!
//! `Availability`, `Book` and `Cancel`.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > Availability 1             → A1 A2 A3 B1 B2 B3 C1 C2 C3              │
//! │  > Book 1 98244587 A1,A2,A3   → Your ticket number is: <uuid>           │
//! │  > Availability 1             → B1 B2 B3 C1 C2 C3                       │
//! │  > Cancel <uuid> 98244587     → Booking cancelled for ticket number ... │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use boxoffice_core::{BoxOffice, ShowNumber, TicketId};
use chrono::Utc;
use tracing::{debug, info};

use super::Outcome;
use crate::error::CliError;
use crate::state::RegistryState;

/// Lists the vacant seats of a show.
pub fn availability(
    registry: &RegistryState,
    show_number: ShowNumber,
) -> Result<Outcome, CliError> {
    debug!(show_number, "availability command");

    let seats = registry.with_registry(|r| r.available_seats(show_number))?;
    Ok(Outcome::Availability { show_number, seats })
}

/// Books seats for a phone number.
///
/// ## Arguments
/// * `seats` - Comma-separated labels, e.g. `A1,A2,A3`
pub fn book(
    registry: &RegistryState,
    show_number: ShowNumber,
    phone_number: &str,
    seats: &str,
) -> Result<Outcome, CliError> {
    debug!(show_number, seats, "book command");

    let ticket = registry
        .with_registry_mut(|r| BoxOffice::new(r).book(show_number, phone_number, seats))?;

    info!(
        show_number,
        ticket_id = %ticket.id,
        seats = ticket.seats.len(),
        "Ticket booked"
    );
    Ok(Outcome::Booked { ticket })
}

/// Cancels a booking, measured against the current time.
pub fn cancel(
    registry: &RegistryState,
    ticket_id: TicketId,
    phone_number: &str,
) -> Result<Outcome, CliError> {
    debug!(%ticket_id, "cancel command");

    let now = Utc::now();
    let ticket = registry
        .with_registry_mut(|r| BoxOffice::new(r).cancel(ticket_id, phone_number, now))?;

    info!(
        show_number = ticket.show_number,
        %ticket_id,
        seats = ticket.seats.len(),
        "Ticket cancelled"
    );
    Ok(Outcome::Cancelled { ticket })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::admin;
    use crate::error::ErrorCode;

    fn registry_with_show() -> RegistryState {
        let registry = RegistryState::new();
        admin::setup(&registry, 1, 3, 3, 2).unwrap();
        registry
    }

    fn available(registry: &RegistryState) -> usize {
        match availability(registry, 1).unwrap() {
            Outcome::Availability { seats, .. } => seats.len(),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_book_and_cancel() {
        let registry = registry_with_show();
        assert_eq!(available(&registry), 9);

        let ticket = match book(&registry, 1, "98244587", "A1,A2,A3").unwrap() {
            Outcome::Booked { ticket } => ticket,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(ticket.seats.len(), 3);
        assert_eq!(available(&registry), 6);

        let outcome = cancel(&registry, ticket.id, "98244587").unwrap();
        assert!(matches!(outcome, Outcome::Cancelled { ticket: ref t } if t.id == ticket.id));
        assert_eq!(available(&registry), 9);
        assert_eq!(registry.with_registry(|r| r.ticket_count()), 0);
    }

    #[test]
    fn test_double_booking_rejected() {
        let registry = registry_with_show();
        book(&registry, 1, "111", "A2").unwrap();

        let err = book(&registry, 1, "222", "A2").unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingRejected);
        assert_eq!(err.message, "Seat: A2 is not available.");
        assert_eq!(registry.with_registry(|r| r.ticket_count()), 1);
    }

    #[test]
    fn test_cancel_wrong_phone() {
        let registry = registry_with_show();
        let Outcome::Booked { ticket } = book(&registry, 1, "111", "A1").unwrap() else {
            panic!("expected a booking");
        };

        let err = cancel(&registry, ticket.id, "999").unwrap_err();
        assert_eq!(err.code, ErrorCode::CancellationRejected);
        assert_eq!(err.message, "Phone number does not match the one in booking.");
    }

    #[test]
    fn test_availability_unknown_show() {
        let registry = RegistryState::new();
        let err = availability(&registry, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
