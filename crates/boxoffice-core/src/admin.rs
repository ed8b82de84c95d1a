//! # Admin Desk
//!
//! Show creation and reporting.
//!
//! ## Setup Flow
//! ```text
//! setup(show, rows, seats, window)
//!      │
//!      ├── seats > 10?        → SetupError::TooManySeatsPerRow
//!      ├── rows > 26?         → SetupError::TooManyRows
//!      ├── show registered?   → SetupError::ShowExists
//!      │
//!      ▼
//! generate A1..A<seats>, B1.., … (all vacant) → insert → &Show
//! ```
//!
//! Every check runs before the registry is touched, so a failed setup
//! leaves it exactly as it was.

use crate::error::{BoxOfficeResult, SetupError};
use crate::registry::ShowRegistry;
use crate::types::{Show, ShowNumber, ShowReport};
use crate::validation::validate_grid;

/// Administrative operations over a borrowed registry.
#[derive(Debug)]
pub struct AdminDesk<'r> {
    registry: &'r mut ShowRegistry,
}

impl<'r> AdminDesk<'r> {
    pub fn new(registry: &'r mut ShowRegistry) -> Self {
        AdminDesk { registry }
    }

    /// Creates a new show.
    ///
    /// ## Arguments
    /// * `show_number` - Identifier, must not be registered yet
    /// * `rows` - Number of rows, at most 26
    /// * `seats_per_row` - Seats in each row, at most 10
    /// * `cancellation_window_minutes` - How long after booking a ticket may
    ///   still be cancelled
    ///
    /// ## Example
    /// ```rust
    /// use boxoffice_core::{AdminDesk, ShowRegistry};
    ///
    /// let mut registry = ShowRegistry::new();
    /// let mut admin = AdminDesk::new(&mut registry);
    /// let show = admin.setup(1, 3, 3, 2).unwrap();
    /// assert_eq!(show.seats().len(), 9);
    /// ```
    pub fn setup(
        &mut self,
        show_number: ShowNumber,
        rows: u32,
        seats_per_row: u32,
        cancellation_window_minutes: u32,
    ) -> BoxOfficeResult<&Show> {
        validate_grid(rows, seats_per_row)?;

        if self.registry.contains_show(show_number) {
            return Err(SetupError::ShowExists(show_number).into());
        }

        let show = Show::new(show_number, rows, seats_per_row, cancellation_window_minutes);
        Ok(self.registry.insert_show(show))
    }

    /// Returns a snapshot of a show and its bookings.
    ///
    /// Read-only callers can use [`ShowRegistry::report`] directly.
    pub fn view(&self, show_number: ShowNumber) -> BoxOfficeResult<ShowReport> {
        self.registry.report(show_number)
    }
}
