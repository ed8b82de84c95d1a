//! # Rendering
//!
//! Turns command results into output lines.
//!
//! ## Text Layout
//! ```text
//! > View 1
//! Show number: 1
//! Cancellation window: 2 minutes
//! --------------------------------------------
//! Ticket number: 3f1c…
//! Buyer phone number: 98244587
//! Seats booked: A1 A2 A3
//! --------------------------------------------
//! ```
//!
//! JSON mode writes exactly one document per command on its own line.

use std::io::{self, Write};

use boxoffice_core::{SeatLabel, ShowReport};
use serde_json::json;

use crate::commands::Outcome;
use crate::error::CliError;
use crate::state::OutputFormat;

const TICKET_RULE: &str = "--------------------------------------------";
const SEAT_RULE: &str = "----------------------------------";

/// Writes one command result in the configured format.
pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    result: &Result<Outcome, CliError>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, result),
        OutputFormat::Json => render_json(out, result),
    }
}

fn render_json<W: Write>(out: &mut W, result: &Result<Outcome, CliError>) -> io::Result<()> {
    match result {
        Ok(outcome) => serde_json::to_writer(&mut *out, outcome)?,
        Err(err) => serde_json::to_writer(&mut *out, &json!({ "error": err }))?,
    }
    writeln!(out)
}

fn render_text<W: Write>(out: &mut W, result: &Result<Outcome, CliError>) -> io::Result<()> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => return writeln!(out, "{}", err),
    };

    match outcome {
        Outcome::ShowCreated { show_number } => {
            writeln!(out, "Show {} set up successfully", show_number)
        }
        Outcome::ShowDetails { report } => render_report(out, report),
        Outcome::Availability { seats, .. } => {
            writeln!(out, "Available seats:")?;
            writeln!(out, "{}", SEAT_RULE)?;
            writeln!(out, "{}", join_labels(seats))?;
            writeln!(out, "{}", SEAT_RULE)
        }
        Outcome::Booked { ticket } => writeln!(out, "Your ticket number is: {}", ticket.id),
        Outcome::Cancelled { ticket } => {
            writeln!(out, "Booking cancelled for ticket number: {}", ticket.id)
        }
        Outcome::Help { usage } => {
            writeln!(out, "Commands:")?;
            for line in usage {
                writeln!(out, "  {}", line)?;
            }
            Ok(())
        }
        Outcome::Goodbye => writeln!(out, "Goodbye."),
    }
}

fn render_report<W: Write>(out: &mut W, report: &ShowReport) -> io::Result<()> {
    writeln!(out, "Show number: {}", report.show_number)?;
    writeln!(
        out,
        "Cancellation window: {} minutes",
        report.cancellation_window_minutes
    )?;

    if report.tickets.is_empty() {
        writeln!(out, "No bookings yet.")?;
    }

    for ticket in &report.tickets {
        writeln!(out, "{}", TICKET_RULE)?;
        writeln!(out, "Ticket number: {}", ticket.id)?;
        writeln!(out, "Buyer phone number: {}", ticket.phone_number)?;
        writeln!(out, "Seats booked: {}", join_labels(&ticket.seats))?;
    }

    writeln!(out, "{}", TICKET_RULE)
}

fn join_labels<'a>(labels: impl IntoIterator<Item = &'a SeatLabel>) -> String {
    labels
        .into_iter()
        .map(SeatLabel::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::Ticket;
    use chrono::Utc;

    fn text(result: Result<Outcome, CliError>) -> String {
        let mut buf = Vec::new();
        render(&mut buf, OutputFormat::Text, &result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn labels(raw: &[&str]) -> Vec<SeatLabel> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_text_show_created() {
        let out = text(Ok(Outcome::ShowCreated { show_number: 4 }));
        assert_eq!(out, "Show 4 set up successfully\n");
    }

    #[test]
    fn test_text_availability() {
        let out = text(Ok(Outcome::Availability {
            show_number: 1,
            seats: labels(&["B1", "A10", "A2"]).into_iter().collect(),
        }));
        assert_eq!(
            out,
            format!("Available seats:\n{SEAT_RULE}\nA2 A10 B1\n{SEAT_RULE}\n")
        );
    }

    #[test]
    fn test_text_empty_report() {
        let report = ShowReport {
            show_number: 1,
            cancellation_window_minutes: 2,
            rows: 3,
            seats_per_row: 3,
            total_seats: 9,
            available_seats: 9,
            tickets: Vec::new(),
        };
        let out = text(Ok(Outcome::ShowDetails { report }));
        assert_eq!(
            out,
            format!("Show number: 1\nCancellation window: 2 minutes\nNo bookings yet.\n{TICKET_RULE}\n")
        );
    }

    #[test]
    fn test_text_report_lists_tickets() {
        let ticket = Ticket::issue(1, "98244587", labels(&["A1", "A2"]), Utc::now());
        let report = ShowReport {
            show_number: 1,
            cancellation_window_minutes: 2,
            rows: 1,
            seats_per_row: 3,
            total_seats: 3,
            available_seats: 1,
            tickets: vec![ticket.clone()],
        };

        let out = text(Ok(Outcome::ShowDetails { report }));
        assert!(out.contains(&format!("Ticket number: {}\n", ticket.id)));
        assert!(out.contains("Buyer phone number: 98244587\n"));
        assert!(out.contains("Seats booked: A1 A2\n"));
        assert!(!out.contains("No bookings yet."));
    }

    #[test]
    fn test_text_error() {
        let out = text(Err(CliError::unknown_command()));
        assert_eq!(out, "[UnknownCommand] Unknown command\n");
    }

    #[test]
    fn test_json_outcome_and_error() {
        let mut buf = Vec::new();
        render(
            &mut buf,
            OutputFormat::Json,
            &Ok(Outcome::ShowCreated { show_number: 2 }),
        )
        .unwrap();
        render(&mut buf, OutputFormat::Json, &Err(CliError::unknown_command())).unwrap();

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines[0], json!({ "kind": "showCreated", "showNumber": 2 }));
        assert_eq!(lines[1]["error"]["code"], "UNKNOWN_COMMAND");
    }
}
