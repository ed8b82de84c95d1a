//! # Commands Module
//!
//! The shell's command verbs.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing, dispatch, Outcome)
//! ├── admin.rs    ◄─── Setup, View
//! └── buyer.rs    ◄─── Availability, Book, Cancel
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "Book 1 98244587 A1,A2,A3"                                             │
//! │         │                                                               │
//! │         │ Command::parse (split on whitespace, check arity, parse ints) │
//! │         ▼                                                               │
//! │  Command::Book { show_number: 1, phone_number, seats }                  │
//! │         │                                                               │
//! │         │ execute(&RegistryState, command)                              │
//! │         ▼                                                               │
//! │  buyer::book ──► BoxOffice::book ──► Ticket                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Outcome::Booked { ticket } ──► render                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod buyer;

use std::collections::BTreeSet;

use boxoffice_core::validation::parse_ticket_id;
use boxoffice_core::{SeatLabel, ShowNumber, ShowReport, Ticket, TicketId};
use serde::Serialize;

use crate::error::CliError;
use crate::state::RegistryState;

/// Usage lines printed by `Help`.
pub const USAGE: &[&str] = &[
    "Setup <showNumber> <numRows> <numSeatsPerRow> <cancellationWindowMinutes>",
    "View <showNumber>",
    "Availability <showNumber>",
    "Book <showNumber> <phoneNumber> <seat,seat,...>",
    "Cancel <ticketNumber> <phoneNumber>",
    "Help",
    "Exit",
];

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Setup {
        show_number: ShowNumber,
        rows: u32,
        seats_per_row: u32,
        cancellation_window_minutes: u32,
    },
    View {
        show_number: ShowNumber,
    },
    Availability {
        show_number: ShowNumber,
    },
    Book {
        show_number: ShowNumber,
        phone_number: String,
        seats: String,
    },
    Cancel {
        ticket_id: TicketId,
        phone_number: String,
    },
    Help,
    Exit,
}

impl Command {
    /// Parses one input line.
    ///
    /// ## Returns
    /// - `Ok(None)` for a blank line
    /// - `Ok(Some(command))` for a well-formed command
    /// - `Err` for an unknown verb, wrong argument count or bad number
    pub fn parse(line: &str) -> Result<Option<Command>, CliError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            return Ok(None);
        };

        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(CliError::invalid_params(verb))
            }
        };

        let command = match verb {
            "Setup" => {
                arity(4)?;
                Command::Setup {
                    show_number: parse_number("show number", args[0])?,
                    rows: parse_number("number of rows", args[1])?,
                    seats_per_row: parse_number("number of seats", args[2])?,
                    cancellation_window_minutes: parse_number("cancellation window", args[3])?,
                }
            }
            "View" => {
                arity(1)?;
                Command::View {
                    show_number: parse_number("show number", args[0])?,
                }
            }
            "Availability" => {
                arity(1)?;
                Command::Availability {
                    show_number: parse_number("show number", args[0])?,
                }
            }
            "Book" => {
                arity(3)?;
                Command::Book {
                    show_number: parse_number("show number", args[0])?,
                    phone_number: args[1].to_string(),
                    seats: args[2].to_string(),
                }
            }
            "Cancel" => {
                arity(2)?;
                Command::Cancel {
                    ticket_id: parse_ticket_id(args[0])?,
                    phone_number: args[1].to_string(),
                }
            }
            "Help" => {
                arity(0)?;
                Command::Help
            }
            "Exit" => {
                arity(0)?;
                Command::Exit
            }
            _ => return Err(CliError::unknown_command()),
        };

        Ok(Some(command))
    }
}

fn parse_number(field: &str, raw: &str) -> Result<u32, CliError> {
    raw.parse().map_err(|_| {
        CliError::invalid_input(format!(
            "{} must be a non-negative integer, got '{}'",
            field, raw
        ))
    })
}

/// The value a successful command hands to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Outcome {
    ShowCreated {
        show_number: ShowNumber,
    },
    ShowDetails {
        report: ShowReport,
    },
    Availability {
        show_number: ShowNumber,
        seats: BTreeSet<SeatLabel>,
    },
    Booked {
        ticket: Ticket,
    },
    Cancelled {
        ticket: Ticket,
    },
    Help {
        usage: Vec<String>,
    },
    Goodbye,
}

/// Runs a parsed command against the registry.
pub fn execute(registry: &RegistryState, command: Command) -> Result<Outcome, CliError> {
    match command {
        Command::Setup {
            show_number,
            rows,
            seats_per_row,
            cancellation_window_minutes,
        } => admin::setup(
            registry,
            show_number,
            rows,
            seats_per_row,
            cancellation_window_minutes,
        ),
        Command::View { show_number } => admin::view(registry, show_number),
        Command::Availability { show_number } => buyer::availability(registry, show_number),
        Command::Book {
            show_number,
            phone_number,
            seats,
        } => buyer::book(registry, show_number, &phone_number, &seats),
        Command::Cancel {
            ticket_id,
            phone_number,
        } => buyer::cancel(registry, ticket_id, &phone_number),
        Command::Help => Ok(Outcome::Help {
            usage: USAGE.iter().map(|s| s.to_string()).collect(),
        }),
        Command::Exit => Ok(Outcome::Goodbye),
    }
}
