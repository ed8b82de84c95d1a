//! # Session Loop
//!
//! Reads commands line by line until EOF or `Exit`.
//!
//! ```text
//! stdin line ──► Command::parse ──► commands::execute ──► render ──► stdout
//!                     │                    │
//!                     └──── CliError ──────┴──────────────► render ──► stdout
//! ```
//!
//! Errors from a command are rendered and the loop continues, including
//! lines that are not valid UTF-8. Only I/O failures on the input or output
//! streams end the session early.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::commands::{self, Command};
use crate::render::render;
use crate::state::{ConfigState, RegistryState};

pub const BANNER: &str = "Welcome to the show booking system, please enter your command.";

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub failures: usize,
}

/// Runs the command loop over arbitrary streams.
pub fn run_session<R, W>(
    mut input: R,
    output: &mut W,
    registry: &RegistryState,
    config: &ConfigState,
) -> io::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    if config.banner {
        writeln!(output, "{}", BANNER)?;
        output.flush()?;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Invalid UTF-8 becomes U+FFFD and fails to parse like any other typo
        let line = String::from_utf8_lossy(&buf);

        let command = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => Ok(command),
            Err(err) => {
                debug!(line = %line, error = %err, "Rejected input line");
                Err(err)
            }
        };

        let exit = matches!(command, Ok(Command::Exit));
        let result = command.and_then(|c| commands::execute(registry, c));

        summary.commands += 1;
        if result.is_err() {
            summary.failures += 1;
        }

        render(output, config.output, &result)?;
        output.flush()?;

        if exit {
            break;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OutputFormat;

    fn quiet() -> ConfigState {
        ConfigState {
            output: OutputFormat::Text,
            banner: false,
        }
    }

    fn run(input: &str, registry: &RegistryState, config: &ConfigState) -> (String, SessionSummary) {
        let mut out = Vec::new();
        let summary = run_session(input.as_bytes(), &mut out, registry, config).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    fn ticket_number(output: &str) -> String {
        output
            .lines()
            .find_map(|l| l.strip_prefix("Your ticket number is: "))
            .expect("no ticket number in output")
            .to_string()
    }

    #[test]
    fn test_banner_printed_first() {
        let registry = RegistryState::new();
        let (out, summary) = run("", &registry, &ConfigState::default());
        assert_eq!(out, format!("{}\n", BANNER));
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn test_book_then_cancel_round_trip() {
        let registry = RegistryState::new();
        let (out, _) = run(
            "Setup 1 3 3 2\nBook 1 98244587 A1,A2,A3\n",
            &registry,
            &quiet(),
        );
        assert!(out.starts_with("Show 1 set up successfully\n"));
        assert_eq!(
            registry.with_registry(|r| r.show(1).unwrap().available_seats().len()),
            6
        );

        let id = ticket_number(&out);
        let (out, summary) = run(&format!("Cancel {} 98244587\n", id), &registry, &quiet());

        assert_eq!(out, format!("Booking cancelled for ticket number: {}\n", id));
        assert_eq!(summary.failures, 0);
        registry.with_registry(|r| {
            assert_eq!(r.show(1).unwrap().available_seats().len(), 9);
            assert_eq!(r.ticket_count(), 0);
        });
    }

    #[test]
    fn test_invalid_setup_registers_nothing() {
        let registry = RegistryState::new();
        let (out, summary) = run("Setup 1 10 11 2\n", &registry, &quiet());

        assert_eq!(out, "[InvalidSetup] Number of seats must be 10 or less.\n");
        assert_eq!(summary.failures, 1);
        assert_eq!(registry.with_registry(|r| r.show_count()), 0);
    }

    #[test]
    fn test_same_seat_from_two_phones() {
        let registry = RegistryState::new();
        let (out, summary) = run(
            "Setup 1 3 3 2\nBook 1 111 A2\nBook 1 222 A2\n",
            &registry,
            &quiet(),
        );

        assert!(out.ends_with("[BookingRejected] Seat: A2 is not available.\n"));
        assert_eq!(summary.commands, 3);
        assert_eq!(summary.failures, 1);
        assert_eq!(registry.with_registry(|r| r.ticket_count()), 1);
    }

    #[test]
    fn test_errors_do_not_stop_the_session() {
        let registry = RegistryState::new();
        let (out, summary) = run(
            "Dance\n\nView 1\nSetup 1 2\nSetup 1 2 2 2\nView 1\n",
            &registry,
            &quiet(),
        );

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[UnknownCommand] Unknown command");
        assert_eq!(lines[1], "[NotFound] Show 1 does not exist.");
        assert_eq!(lines[2], "[InvalidInput] Invalid params for Setup command");
        assert_eq!(lines[3], "Show 1 set up successfully");
        assert_eq!(lines[4], "Show number: 1");
        assert_eq!(lines[6], "No bookings yet.");
        assert_eq!(summary.commands, 5);
        assert_eq!(summary.failures, 3);
    }

    #[test]
    fn test_exit_stops_reading() {
        let registry = RegistryState::new();
        let (out, summary) = run("Exit\nSetup 1 1 1 1\n", &registry, &quiet());

        assert_eq!(out, "Goodbye.\n");
        assert_eq!(summary.commands, 1);
        assert_eq!(registry.with_registry(|r| r.show_count()), 0);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let registry = RegistryState::new();
        let mut input = b"View \xff\xfe\n".to_vec();
        input.extend_from_slice(b"Setup 1 1 1 1\n");

        let mut out = Vec::new();
        let summary = run_session(input.as_slice(), &mut out, &registry, &quiet()).unwrap();
        let out = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("[InvalidInput] show number must be a non-negative integer"));
        assert_eq!(lines[1], "Show 1 set up successfully");
        assert_eq!(summary.failures, 1);
        assert_eq!(registry.with_registry(|r| r.show_count()), 1);
    }

    #[test]
    fn test_json_session() {
        let registry = RegistryState::new();
        let config = ConfigState {
            output: OutputFormat::Json,
            banner: false,
        };
        let (out, _) = run("Setup 1 1 2 5\nBook 1 42 A1\nAvailability 1\n", &registry, &config);

        let docs: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[1]["kind"], "booked");
        assert_eq!(docs[1]["ticket"]["phoneNumber"], "42");
        assert_eq!(docs[1]["ticket"]["seats"], serde_json::json!(["A1"]));
        assert_eq!(docs[2]["seats"], serde_json::json!(["A2"]));
    }
}
