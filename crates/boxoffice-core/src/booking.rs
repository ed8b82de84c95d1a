//! # Box Office (Booking & Cancellation)
//!
//! Buyer-facing operations: availability, booking and cancellation.
//!
//! ## Ticket Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   (no ticket)                                    (ticket exists)        │
//! │   seats vacant ──── book(show, phone, "A1,A2") ──► seats occupied       │
//! │        ▲                                               │                │
//! │        │                                               │                │
//! │        └────────── cancel(id, phone, now) ◄────────────┘                │
//! │                    (within window)                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! `book` checks every requested seat against one availability snapshot and
//! only then commits. The whole call holds `&mut ShowRegistry`, so nothing
//! else can change the show between the check and the commit. A failed
//! booking or cancellation leaves no trace.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::error::{BookingError, BoxOfficeError, BoxOfficeResult, CancelError};
use crate::registry::ShowRegistry;
use crate::types::{SeatLabel, Show, ShowNumber, Ticket, TicketId};
use crate::validation::{parse_seat_label, split_seat_labels, validate_phone_number};

/// Buyer operations over a borrowed registry.
#[derive(Debug)]
pub struct BoxOffice<'r> {
    registry: &'r mut ShowRegistry,
}

impl<'r> BoxOffice<'r> {
    pub fn new(registry: &'r mut ShowRegistry) -> Self {
        BoxOffice { registry }
    }

    /// Vacant seats of a show, ordered row-major.
    pub fn available_seats(&self, show_number: ShowNumber) -> BoxOfficeResult<BTreeSet<SeatLabel>> {
        self.registry.available_seats(show_number)
    }

    /// Books seats for a buyer, stamped with the current time.
    ///
    /// See [`BoxOffice::book_at`].
    pub fn book(
        &mut self,
        show_number: ShowNumber,
        phone_number: &str,
        seats: &str,
    ) -> BoxOfficeResult<Ticket> {
        self.book_at(show_number, phone_number, seats, Utc::now())
    }

    /// Books a comma-separated list of seats (`"A1,A2,A3"`) for a buyer.
    ///
    /// ## Checks (in order)
    /// 1. Show exists → `NoSuchShow`
    /// 2. Phone number is all digits → `Booking(InvalidPhoneNumber)`
    /// 3. Phone number has no ticket for this show → `Booking(AlreadyBooked)`
    /// 4. Every label names a vacant seat → `Booking(SeatNotAvailable)`
    ///
    /// The first failing label is reported and nothing is reserved.
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::{AdminDesk, BoxOffice, ShowRegistry};
    ///
    /// let mut registry = ShowRegistry::new();
    /// AdminDesk::new(&mut registry).setup(1, 3, 3, 2).unwrap();
    ///
    /// let mut office = BoxOffice::new(&mut registry);
    /// let ticket = office.book(1, "98244587", "A1,A2,A3").unwrap();
    /// assert_eq!(ticket.seats.len(), 3);
    /// assert_eq!(office.available_seats(1).unwrap().len(), 6);
    /// ```
    pub fn book_at(
        &mut self,
        show_number: ShowNumber,
        phone_number: &str,
        seats: &str,
        booked_at: DateTime<Utc>,
    ) -> BoxOfficeResult<Ticket> {
        let show = self
            .registry
            .show(show_number)
            .ok_or(BoxOfficeError::NoSuchShow(show_number))?;

        validate_phone_number(phone_number).map_err(BookingError::InvalidPhoneNumber)?;

        if show.has_booked_before(phone_number) {
            return Err(BookingError::AlreadyBooked(phone_number.to_string()).into());
        }

        let claimed = claim_seats(show, seats)?;

        let ticket = Ticket::issue(show_number, phone_number, claimed, booked_at);
        if !self.registry.record_booking(ticket.clone()) {
            return Err(BoxOfficeError::NoSuchShow(show_number));
        }

        Ok(ticket)
    }

    /// Cancels a booking and returns the removed ticket.
    ///
    /// ## Checks (in order)
    /// 1. Ticket exists → `NoSuchTicket`
    /// 2. Phone number matches the ticket → `CancelBooking(PhoneMismatch)`
    /// 3. Whole minutes since booking ≤ the show's window →
    ///    `CancelBooking(WindowPassed)`
    ///
    /// ```text
    /// window = 2
    /// booked 12:00:00 ── 12:02:59 → elapsed 2 → OK
    ///                    12:03:00 → elapsed 3 → WindowPassed
    /// ```
    pub fn cancel(
        &mut self,
        ticket_id: TicketId,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> BoxOfficeResult<Ticket> {
        let (show, ticket) = self
            .registry
            .ticket(ticket_id)
            .ok_or(BoxOfficeError::NoSuchTicket(ticket_id))?;

        if ticket.phone_number != phone_number {
            return Err(CancelError::PhoneMismatch.into());
        }

        let window_minutes = show.cancellation_window_minutes();
        let elapsed_minutes = ticket.elapsed_minutes(now);
        if elapsed_minutes > i64::from(window_minutes) {
            return Err(CancelError::WindowPassed {
                window_minutes,
                elapsed_minutes,
            }
            .into());
        }

        self.registry
            .release_booking(ticket_id)
            .ok_or(BoxOfficeError::NoSuchTicket(ticket_id))
    }
}

/// Resolves the requested labels against one availability snapshot.
///
/// Every label is checked against the seats vacant before this request, so
/// a label listed twice names the same vacant seat and is reserved once.
fn claim_seats(show: &Show, seats: &str) -> Result<Vec<SeatLabel>, BookingError> {
    let available = show.available_seats();
    let mut claimed = Vec::new();

    for raw in split_seat_labels(seats) {
        let label = parse_seat_label(raw)
            .ok()
            .filter(|label| available.contains(label))
            .ok_or_else(|| BookingError::SeatNotAvailable(raw.to_string()))?;
        if !claimed.contains(&label) {
            claimed.push(label);
        }
    }

    Ok(claimed)
}

// =============================================================================
// Unit Tests
// =============================================================================
