//! # Domain Types
//!
//! Core domain types used throughout the box office.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Show       │   │      Seat       │   │     Ticket      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  number (u32)   │──►│  label          │   │  id (UUID)      │       │
//! │  │  seats (grid)   │   │  occupied       │   │  phone_number   │       │
//! │  │  tickets        │──────────────────────►  │  seats (labels) │       │
//! │  │  window (min)   │   └─────────────────┘   │  booked_at      │       │
//! │  └─────────────────┘                         │  show_number ◄──┼── back │
//! │                                              └─────────────────┘  ref  │
//! │  ┌─────────────────┐                                                    │
//! │  │   SeatLabel     │   "A1" .. "Z10", ordered row-major                │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A Show owns its seats and its tickets. A Ticket refers to seats by label
//! and to its Show by number, so there are no reference cycles; lookups go
//! through [`crate::registry::ShowRegistry`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validation::parse_seat_label;
use crate::ROW_LETTERS;

/// Externally supplied show identifier.
pub type ShowNumber = u32;

/// Ticket number (random UUID v4).
pub type TicketId = Uuid;

// =============================================================================
// Seat Label
// =============================================================================

/// A seat position: row letter plus 1-based column, e.g. `C7`.
///
/// Field order gives the derived `Ord` row-major ordering, so `A2 < A10 < B1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SeatLabel {
    row: u8,
    column: u8,
}

impl SeatLabel {
    /// Creates a label from a 0-based row index and a 1-based column.
    ///
    /// Bounds are checked against the absolute grid limits (26 × 10), not
    /// against any particular show.
    pub fn new(row: u8, column: u8) -> Result<Self, ValidationError> {
        if usize::from(row) >= ROW_LETTERS.len() {
            return Err(ValidationError::OutOfRange {
                field: "seat row".to_string(),
                min: 0,
                max: ROW_LETTERS.len() as i64 - 1,
            });
        }

        if column == 0 || u32::from(column) > crate::MAX_SEATS_PER_ROW {
            return Err(ValidationError::OutOfRange {
                field: "seat column".to_string(),
                min: 1,
                max: i64::from(crate::MAX_SEATS_PER_ROW),
            });
        }

        Ok(SeatLabel { row, column })
    }

    /// 0-based row index (`A` = 0).
    #[inline]
    pub const fn row_index(&self) -> u8 {
        self.row
    }

    /// Row letter, `A`..=`Z`.
    #[inline]
    pub fn row_letter(&self) -> char {
        char::from(ROW_LETTERS[usize::from(self.row)])
    }

    /// 1-based column number.
    #[inline]
    pub const fn column(&self) -> u8 {
        self.column
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column)
    }
}

impl FromStr for SeatLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_seat_label(s)
    }
}

impl From<SeatLabel> for String {
    fn from(label: SeatLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for SeatLabel {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_seat_label(&value)
    }
}

// =============================================================================
// Seat
// =============================================================================

/// One bookable unit in a show's grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub label: SeatLabel,
    pub occupied: bool,
}

impl Seat {
    /// Creates a vacant seat.
    pub fn vacant(label: SeatLabel) -> Self {
        Seat {
            label,
            occupied: false,
        }
    }

    #[inline]
    pub fn is_vacant(&self) -> bool {
        !self.occupied
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// A confirmed reservation of one or more seats under one phone number.
///
/// Tickets are never mutated after creation; cancellation removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket number shown to the buyer.
    pub id: TicketId,

    /// Buyer's phone number (digits only).
    pub phone_number: String,

    /// Reserved seats, in the order they were requested.
    pub seats: Vec<SeatLabel>,

    /// Wall-clock time of the booking.
    pub booked_at: DateTime<Utc>,

    /// Owning show (non-owning back-reference).
    pub show_number: ShowNumber,
}

impl Ticket {
    /// Creates a ticket with a fresh random id.
    pub fn issue(
        show_number: ShowNumber,
        phone_number: impl Into<String>,
        seats: Vec<SeatLabel>,
        booked_at: DateTime<Utc>,
    ) -> Self {
        Ticket {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            seats,
            booked_at,
            show_number,
        }
    }

    /// Whole minutes between booking and `now`, truncated toward zero.
    ///
    /// A `now` slightly before `booked_at` (clock adjustment) yields 0 or a
    /// negative number, both of which are inside any window.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.booked_at).num_minutes()
    }
}

// =============================================================================
// Show
// =============================================================================

/// A scheduled event with a fixed seating grid and a cancellation policy.
///
/// ## Invariants
/// - `seats.len() == rows * seats_per_row`, stored row-major
/// - `rows <= 26`, `seats_per_row <= 10`
/// - at most one ticket per phone number
/// - a seat is occupied iff exactly one ticket lists its label
#[derive(Debug, Clone)]
pub struct Show {
    pub(crate) number: ShowNumber,
    pub(crate) rows: u32,
    pub(crate) seats_per_row: u32,
    pub(crate) cancellation_window_minutes: u32,
    pub(crate) seats: Vec<Seat>,
    pub(crate) tickets: Vec<Ticket>,
}

impl Show {
    /// Builds a show with an all-vacant grid.
    ///
    /// Callers must have checked the grid limits already.
    pub(crate) fn new(
        number: ShowNumber,
        rows: u32,
        seats_per_row: u32,
        cancellation_window_minutes: u32,
    ) -> Self {
        let seats = (0..rows as u8)
            .flat_map(|row| (1..=seats_per_row as u8).map(move |column| SeatLabel { row, column }))
            .map(Seat::vacant)
            .collect();

        Show {
            number,
            rows,
            seats_per_row,
            cancellation_window_minutes,
            seats,
            tickets: Vec::new(),
        }
    }

    #[inline]
    pub fn number(&self) -> ShowNumber {
        self.number
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    #[inline]
    pub fn cancellation_window_minutes(&self) -> u32 {
        self.cancellation_window_minutes
    }

    /// All seats, row-major.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Active tickets in booking order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Looks up a seat by label. `None` if the label is outside this grid.
    pub fn seat(&self, label: SeatLabel) -> Option<&Seat> {
        self.seat_index(label).map(|i| &self.seats[i])
    }

    pub(crate) fn seat_mut(&mut self, label: SeatLabel) -> Option<&mut Seat> {
        self.seat_index(label).map(move |i| &mut self.seats[i])
    }

    fn seat_index(&self, label: SeatLabel) -> Option<usize> {
        let row = u32::from(label.row);
        let column = u32::from(label.column);
        if row >= self.rows || column > self.seats_per_row {
            return None;
        }
        Some((row * self.seats_per_row + column - 1) as usize)
    }

    /// Labels of every vacant seat, ordered row-major.
    pub fn available_seats(&self) -> BTreeSet<SeatLabel> {
        self.seats
            .iter()
            .filter(|s| s.is_vacant())
            .map(|s| s.label)
            .collect()
    }

    /// Checks if the phone number already holds a ticket for this show.
    pub fn has_booked_before(&self, phone_number: &str) -> bool {
        self.tickets.iter().any(|t| t.phone_number == phone_number)
    }

    pub fn ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }
}

// =============================================================================
// Show Report
// =============================================================================

/// Read-only snapshot of a show for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowReport {
    pub show_number: ShowNumber,
    pub cancellation_window_minutes: u32,
    pub rows: u32,
    pub seats_per_row: u32,
    pub total_seats: usize,
    pub available_seats: usize,
    pub tickets: Vec<Ticket>,
}

impl From<&Show> for ShowReport {
    fn from(show: &Show) -> Self {
        ShowReport {
            show_number: show.number,
            cancellation_window_minutes: show.cancellation_window_minutes,
            rows: show.rows,
            seats_per_row: show.seats_per_row,
            total_seats: show.seats.len(),
            available_seats: show.seats.iter().filter(|s| s.is_vacant()).count(),
            tickets: show.tickets.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn label(s: &str) -> SeatLabel {
        s.parse().unwrap()
    }

    #[test]
    fn test_seat_label_display_and_order() {
        assert_eq!(SeatLabel::new(0, 1).unwrap().to_string(), "A1");
        assert_eq!(SeatLabel::new(25, 10).unwrap().to_string(), "Z10");

        assert!(label("A2") < label("A10"));
        assert!(label("A10") < label("B1"));
    }

    #[test]
    fn test_seat_label_bounds() {
        assert!(SeatLabel::new(26, 1).is_err());
        assert!(SeatLabel::new(0, 0).is_err());
        assert!(SeatLabel::new(0, 11).is_err());
    }

    #[test]
    fn test_seat_label_serializes_as_string() {
        let json = serde_json::to_string(&label("C7")).unwrap();
        assert_eq!(json, "\"C7\"");

        let back: SeatLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label("C7"));
        assert!(serde_json::from_str::<SeatLabel>("\"c7\"").is_err());
    }

    #[test]
    fn test_show_grid_is_row_major_and_vacant() {
        let show = Show::new(1, 3, 4, 2);

        assert_eq!(show.seats().len(), 12);
        assert!(show.seats().iter().all(Seat::is_vacant));

        let labels: Vec<String> = show.seats().iter().take(5).map(|s| s.label.to_string()).collect();
        assert_eq!(labels, vec!["A1", "A2", "A3", "A4", "B1"]);
        assert_eq!(show.seats().last().unwrap().label, label("C4"));
    }

    #[test]
    fn test_show_seat_lookup_outside_grid() {
        let show = Show::new(1, 2, 2, 2);

        assert!(show.seat(label("B2")).is_some());
        assert!(show.seat(label("C1")).is_none());
        assert!(show.seat(label("A3")).is_none());
    }

    #[test]
    fn test_empty_grid() {
        let show = Show::new(9, 0, 10, 5);
        assert!(show.seats().is_empty());
        assert!(show.available_seats().is_empty());
    }

    #[test]
    fn test_ticket_elapsed_minutes_truncates() {
        let booked = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let ticket = Ticket::issue(1, "123", vec![label("A1")], booked);

        assert_eq!(ticket.elapsed_minutes(booked + Duration::seconds(119)), 1);
        assert_eq!(ticket.elapsed_minutes(booked + Duration::seconds(120)), 2);
        assert_eq!(ticket.elapsed_minutes(booked - Duration::seconds(30)), 0);
    }

    #[test]
    fn test_show_report_counts() {
        let mut show = Show::new(4, 2, 5, 3);
        show.seats[0].occupied = true;

        let report = ShowReport::from(&show);
        assert_eq!(report.show_number, 4);
        assert_eq!(report.total_seats, 10);
        assert_eq!(report.available_seats, 9);
        assert!(report.tickets.is_empty());
    }
}
