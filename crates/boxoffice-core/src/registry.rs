//! # Show Registry
//!
//! The single source of truth for shows and tickets.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShowRegistry                                     │
//! │                                                                         │
//! │  shows:   BTreeMap<ShowNumber, Show>                                   │
//! │             └── Show { seats: Vec<Seat>, tickets: Vec<Ticket> }        │
//! │                                          ▲                              │
//! │  tickets: HashMap<TicketId, ShowNumber> ─┘  (index, not a copy)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each ticket lives exactly once, inside its show. The global map only
//! records which show owns a ticket id, and the two are only ever changed
//! together by [`ShowRegistry::record_booking`] and
//! [`ShowRegistry::release_booking`].
//!
//! The registry is plain owned state. Operation components borrow it
//! ([`crate::admin::AdminDesk`], [`crate::booking::BoxOffice`]); callers
//! that need sharing wrap it themselves.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::types::{SeatLabel, Show, ShowNumber, ShowReport, Ticket, TicketId};

/// In-memory store of shows and the ticket index.
#[derive(Debug, Default)]
pub struct ShowRegistry {
    shows: BTreeMap<ShowNumber, Show>,
    tickets: HashMap<TicketId, ShowNumber>,
}

impl ShowRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, number: ShowNumber) -> Option<&Show> {
        self.shows.get(&number)
    }

    pub fn contains_show(&self, number: ShowNumber) -> bool {
        self.shows.contains_key(&number)
    }

    pub fn show_count(&self) -> usize {
        self.shows.len()
    }

    /// Number of active tickets across all shows.
    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    /// Vacant seats of a show, ordered row-major.
    pub fn available_seats(&self, number: ShowNumber) -> BoxOfficeResult<BTreeSet<SeatLabel>> {
        self.show(number)
            .map(Show::available_seats)
            .ok_or(BoxOfficeError::NoSuchShow(number))
    }

    /// Snapshot of a show and its bookings.
    pub fn report(&self, number: ShowNumber) -> BoxOfficeResult<ShowReport> {
        self.show(number)
            .map(ShowReport::from)
            .ok_or(BoxOfficeError::NoSuchShow(number))
    }

    /// Resolves a ticket together with its owning show.
    pub fn ticket(&self, id: TicketId) -> Option<(&Show, &Ticket)> {
        let show = self.shows.get(self.tickets.get(&id)?)?;
        let ticket = show.ticket(id)?;
        Some((show, ticket))
    }

    /// Inserts a freshly built show. The caller has checked uniqueness.
    pub(crate) fn insert_show(&mut self, show: Show) -> &Show {
        let number = show.number();
        self.shows.entry(number).or_insert(show)
    }

    /// Commits a validated booking: marks its seats occupied and files the
    /// ticket under its show and in the global index.
    ///
    /// Returns `false` (and changes nothing) if the ticket's show is missing.
    pub(crate) fn record_booking(&mut self, ticket: Ticket) -> bool {
        let Some(show) = self.shows.get_mut(&ticket.show_number) else {
            return false;
        };

        for label in &ticket.seats {
            if let Some(seat) = show.seat_mut(*label) {
                seat.occupied = true;
            }
        }

        self.tickets.insert(ticket.id, ticket.show_number);
        show.tickets.push(ticket);
        true
    }

    /// Removes a ticket from its show and from the index, vacating its
    /// seats. Labels no longer present in the grid are skipped.
    pub(crate) fn release_booking(&mut self, id: TicketId) -> Option<Ticket> {
        let show_number = self.tickets.remove(&id)?;
        let show = self.shows.get_mut(&show_number)?;

        let position = show.tickets.iter().position(|t| t.id == id)?;
        let ticket = show.tickets.remove(position);

        for label in &ticket.seats {
            if let Some(seat) = show.seat_mut(*label) {
                seat.occupied = false;
            }
        }

        Some(ticket)
    }
}
