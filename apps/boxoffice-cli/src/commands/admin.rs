//! # Admin Commands
//!
//! `Setup` and `View`.

use boxoffice_core::{AdminDesk, ShowNumber};
use tracing::{debug, info};

use super::Outcome;
use crate::error::CliError;
use crate::state::RegistryState;

/// Creates a show.
///
/// ## Example
/// ```text
/// > Setup 1 5 10 2
/// Show 1 set up successfully
/// ```
pub fn setup(
    registry: &RegistryState,
    show_number: ShowNumber,
    rows: u32,
    seats_per_row: u32,
    cancellation_window_minutes: u32,
) -> Result<Outcome, CliError> {
    debug!(
        show_number,
        rows, seats_per_row, cancellation_window_minutes, "setup command"
    );

    let seats = registry.with_registry_mut(|r| {
        AdminDesk::new(r)
            .setup(show_number, rows, seats_per_row, cancellation_window_minutes)
            .map(|show| show.seats().len())
    })?;

    info!(show_number, seats, "Show set up");
    Ok(Outcome::ShowCreated { show_number })
}

/// Reports a show and all of its bookings.
pub fn view(registry: &RegistryState, show_number: ShowNumber) -> Result<Outcome, CliError> {
    debug!(show_number, "view command");

    let report = registry.with_registry(|r| r.report(show_number))?;
    Ok(Outcome::ShowDetails { report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_setup_then_view() {
        let registry = RegistryState::new();

        let outcome = setup(&registry, 1, 3, 3, 2).unwrap();
        assert_eq!(outcome, Outcome::ShowCreated { show_number: 1 });

        match view(&registry, 1).unwrap() {
            Outcome::ShowDetails { report } => {
                assert_eq!(report.total_seats, 9);
                assert_eq!(report.cancellation_window_minutes, 2);
                assert!(report.tickets.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_setup_rejected_leaves_no_show() {
        let registry = RegistryState::new();

        let err = setup(&registry, 1, 10, 11, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSetup);
        assert_eq!(err.message, "Number of seats must be 10 or less.");
        assert_eq!(registry.with_registry(|r| r.show_count()), 0);
    }

    #[test]
    fn test_view_missing_show() {
        let registry = RegistryState::new();
        let err = view(&registry, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
