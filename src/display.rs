//! Shared display utilities for rendering puzzle boards in the terminal
//!
//! Provides colorized, human-readable output for boards and sets. Connected
//! pipes render green, the rest dimmed; box-drawing glyphs match the pipe
//! shapes.

use wirehack_engine::{Board, PipeType, Session};

// ANSI color codes for pipe display
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub fn pipe_glyph(pipe: PipeType) -> char {
    match pipe {
        PipeType::LeftRight => '─',
        PipeType::TopBottom => '│',
        PipeType::TopRight => '└',
        PipeType::BottomRight => '┌',
        PipeType::BottomLeft => '┐',
        PipeType::TopLeft => '┘',
    }
}

pub fn display_pipe(pipe: PipeType, connected: bool) -> String {
    if connected {
        format!("{}{}{}", GREEN, pipe_glyph(pipe), RESET)
    } else {
        format!("{}{}{}", DIM, pipe_glyph(pipe), RESET)
    }
}

/// Display one board with its start inlet (top-left) and end outlet
/// (bottom-right) marked in the margins
pub fn display_board(board: &Board) {
    for row in 0..board.rows {
        let inlet = if row == 0 {
            format!("{YELLOW}>{RESET}")
        } else {
            " ".to_string()
        };
        let outlet = if row == board.rows - 1 {
            format!("{YELLOW}>{RESET}")
        } else {
            " ".to_string()
        };

        print!("  {inlet}");
        for col in 0..board.cols {
            let cell = board.cell(row, col);
            print!("{}", display_pipe(cell.pipe, cell.connected));
        }
        println!("{outlet}");
    }
}

/// Display every set in the session with headers and solved markers
pub fn display_session(session: &Session) {
    for (i, board) in session.boards.iter().enumerate() {
        let status = if board.in_progress {
            String::new()
        } else {
            format!("  {GREEN}solved{RESET}")
        };
        println!("{BOLD}SET {i}{RESET}{status}");
        display_board(board);
        println!();
    }
}
