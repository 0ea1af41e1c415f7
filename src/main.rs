//! Interactive CLI for the wirehack pipe-rotation puzzle
//!
//! Usage: cargo run -- [--sets N] [--rows N] [--cols N] [--seed N]
//!
//! Boards are shown during a short countdown for study, then rotations are
//! accepted as `set row col` lines until every set is solved.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wirehack::display::{display_board, display_session, BOLD, DIM, GREEN, RESET};
use wirehack::stats_file::{load_stats, save_stats};
use wirehack_engine::{
    new_session, rotate, start_session, validate_dimensions, GenConfig, RecordOutcome,
    RotateError, Session,
};

/// Solve rotatable pipe grids against the clock
#[derive(Parser, Debug)]
#[command(name = "wirehack")]
#[command(about = "Rotate pipe segments to route the circuit across every grid", long_about = None)]
struct Args {
    /// Number of independent puzzle sets
    #[arg(long, default_value_t = 1)]
    sets: usize,

    /// Rows per set
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Columns per set
    #[arg(long, default_value_t = 6)]
    cols: usize,

    /// Seconds to study the boards before the clock starts
    #[arg(long, default_value_t = 3)]
    countdown: u64,

    /// Random seed (omit for a fresh puzzle every run)
    #[arg(long)]
    seed: Option<u64>,

    /// Where completion times are kept
    #[arg(long, default_value = "wirehack-stats.json")]
    stats_file: PathBuf,
}

/// Parse one `set row col` input line
fn parse_move(input: &str) -> Option<(usize, usize, usize)> {
    let mut parts = input.split_whitespace();
    let set = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((set, row, col))
}

fn read_move(session: &Session) -> (usize, usize, usize) {
    loop {
        print!("{BOLD}set row col>{RESET} ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                std::process::exit(0);
            }
            Err(_) => {
                println!("Error reading input, try again.");
                continue;
            }
            Ok(_) => {}
        }

        let input = input.trim();
        if input == "q" || input == "quit" {
            println!("Goodbye!");
            std::process::exit(0);
        }

        match parse_move(input) {
            Some((set, row, col))
                if set < session.boards.len() && row < session.rows && col < session.cols =>
            {
                return (set, row, col)
            }
            Some(_) => println!(
                "Out of range. Sets 0-{}, rows 0-{}, cols 0-{}",
                session.boards.len() - 1,
                session.rows - 1,
                session.cols - 1
            ),
            None => println!("Enter three numbers: set row col (or 'q' to quit)"),
        }
    }
}

fn format_seconds(d: Duration) -> String {
    format!("{:.1}s", d.as_secs_f64())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Err(e) = validate_dimensions(args.sets, args.rows, args.cols) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = GenConfig::default();
    let mut session = new_session(args.sets, args.rows, args.cols, &config, &mut rng)?;

    println!("\n{BOLD}WIREHACK{RESET}  {} set(s), {}x{}", args.sets, args.rows, args.cols);
    println!("Route the circuit from {BOLD}>{RESET} to {BOLD}>{RESET} in every set.\n");
    display_session(&session);

    // Study period before the clock starts
    for remaining in (1..=args.countdown).rev() {
        print!("{DIM}starting in {remaining}...{RESET}\r");
        io::stdout().flush().unwrap();
        std::thread::sleep(Duration::from_secs(1));
    }
    println!("{BOLD}GO!                    {RESET}\n");
    start_session(&mut session);

    loop {
        let (set, row, col) = read_move(&session);
        match rotate(&mut session, set, row, col) {
            Ok(outcome) => {
                display_board(&session.boards[set]);
                if outcome.set_complete {
                    println!("{GREEN}Set {set} solved!{RESET}");
                }
                if let Some(elapsed) = outcome.puzzle_complete {
                    println!(
                        "\n{BOLD}ALL SETS SOLVED in {}{RESET}",
                        format_seconds(elapsed)
                    );
                    report_stats(&args, elapsed);
                    break;
                }
            }
            Err(RotateError::SetFinished) => println!("Set {set} is already solved."),
            // Session-level bounds are pre-checked by read_move
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

/// Record the completion time and print how it ranks against history.
/// Stats trouble is reported but never fails the run.
fn report_stats(args: &Args, elapsed: Duration) {
    let seconds = elapsed.as_secs_f64();

    let mut stats = match load_stats(&args.stats_file) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("warning: could not read {:?}: {e}", args.stats_file);
            return;
        }
    };

    match stats.record(args.sets, args.rows, args.cols, seconds) {
        RecordOutcome::FirstCompletion => {
            println!("First completion at this configuration.");
        }
        RecordOutcome::NewBest { previous } => {
            println!(
                "{GREEN}New best!{RESET} Previous best was {:.1}s",
                previous
            );
        }
        RecordOutcome::NotABest { best } => {
            println!("Best at this configuration: {best:.1}s");
        }
    }
    if let Some(entry) = stats.get(args.sets, args.rows, args.cols) {
        println!(
            "{} completion(s), average {:.1}s",
            entry.count,
            entry.average()
        );
    }

    if let Err(e) = save_stats(&args.stats_file, &stats) {
        eprintln!("warning: could not write {:?}: {e}", args.stats_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_accepts_three_numbers() {
        assert_eq!(parse_move("0 2 5"), Some((0, 2, 5)));
        assert_eq!(parse_move("  1   0   0 "), Some((1, 0, 0)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("1 2"), None);
        assert_eq!(parse_move("1 2 3 4"), None);
        assert_eq!(parse_move("a b c"), None);
    }
}
