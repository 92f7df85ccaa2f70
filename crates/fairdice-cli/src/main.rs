//! Command-line front end for the provably-fair dice game.
//!
//! Parses die specifications from the command line, drives one
//! [`GameSession`] over an interactive terminal channel, and renders the
//! help screen with the pairwise win-probability table.

use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Select};
use fairdice_core::{Choice, DiceCatalog, GameSession, Interaction, SessionOutcome};
use prettytable::{Cell, Row, Table};
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

const RULES: &str = "\
Welcome to the Non-Transitive Dice Game!
This is not your typical dice game! Here, different dice have unique
values, and no single die is always the best. You and the computer will
each choose a die and roll to see who wins.
But there's a twist: every roll is provably fair! Before rolling, the
computer generates a secret number and shares a secure HMAC that covers
it. You pick your own number, and only then does the computer reveal its
secret key and value. This lets you verify that the game is 100% honest.
Below is a probability table showing how each die compares to the others.";

/// Provably-fair non-transitive dice game
#[derive(Parser)]
#[command(name = "fairdice", version)]
struct Args {
    /// Die specifications, e.g. 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7
    dice: Vec<String>,
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let args = Args::parse();
    let catalog = match DiceCatalog::parse(&args.dice) {
        Ok(catalog) => catalog,
        Err(report) => {
            for violation in report.errors() {
                eprintln!("Error: {violation}");
            }
            return ExitCode::FAILURE;
        }
    };
    info!(dice = catalog.len(), "catalog validated");

    let io = TerminalInteraction::new(catalog.clone());
    let mut session = GameSession::new(catalog, io);
    match session.run() {
        Ok(SessionOutcome::Finished(outcome)) => {
            info!(%outcome, "session finished");
            ExitCode::SUCCESS
        }
        // A user-initiated exit is a clean termination, not a failure.
        Ok(SessionOutcome::Cancelled) => ExitCode::SUCCESS,
        Err(err) => {
            error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Interactive channel backed by dialoguer menus.
///
/// Every menu carries synthetic `help` and `exit` entries: `help` shows
/// the rules and the probability table and re-prompts without consuming
/// the turn, `exit` cancels the session. Escape also cancels.
struct TerminalInteraction {
    catalog: DiceCatalog,
}

impl TerminalInteraction {
    fn new(catalog: DiceCatalog) -> Self {
        Self { catalog }
    }

    fn show_help(&self) {
        println!("{RULES}\n");
        println!("Probability of the win for the user:");

        let mut table = Table::new();
        let mut header = vec![Cell::new("User dice v")];
        header.extend(self.catalog.dice().iter().map(|die| Cell::new(&die.to_string())));
        table.set_titles(Row::new(header));

        for (i, row) in self.catalog.probability_matrix().iter().enumerate() {
            let mut cells = vec![Cell::new(&self.catalog.dice()[i].to_string())];
            cells.extend(row.iter().map(|cell| match cell {
                Some(p) => Cell::new(&format!("{p:.4}")),
                None => Cell::new("-"),
            }));
            table.add_row(Row::new(cells));
        }
        table.printstd();
    }
}

impl Interaction for TerminalInteraction {
    fn pick(&mut self, prompt: &str, labels: &[String]) -> Choice {
        let mut items = labels.to_vec();
        items.push("help".to_string());
        items.push("exit".to_string());

        loop {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact_opt();

            match selection {
                Ok(Some(index)) if index < labels.len() => return Choice::Picked(index),
                Ok(Some(index)) if items[index] == "help" => {
                    self.show_help();
                    println!("Please make a selection from the menu:");
                }
                // `exit`, escape, or a lost terminal all end the session.
                Ok(_) => return Choice::Cancelled,
                Err(err) => {
                    error!("prompt failed: {err}");
                    return Choice::Cancelled;
                }
            }
        }
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}
