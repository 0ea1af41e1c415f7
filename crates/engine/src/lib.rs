//! Wirehack Puzzle Engine
//!
//! Core engine for a pipe-rotation hacking puzzle: several independent grids
//! ("sets") of rotatable pipe segments are generated with a guaranteed
//! solution path, and the chain of segments connected to the fixed start
//! point is retraced incrementally after every rotation. State objects are
//! plain data; pure functions operate on them. Rendering, timers and audio
//! are the caller's concern and react to the outcomes returned here.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

// =============================================================================
// Section 1: Basic types and constants
// =============================================================================

/// Number of distinct pipe segment shapes
pub const PIPE_TYPES: usize = 6;

/// Probability of generating an elbow pipe where a straight pipe is valid
pub const DEFAULT_ELBOW_PROBABILITY: f64 = 0.7;

/// Probability that a pipe on the generated solution path is laid pre-aligned
pub const DEFAULT_ALIGNED_PROBABILITY: f64 = 0.35;

pub const MIN_SETS: usize = 1;
pub const MIN_ROWS: usize = 2;
pub const MIN_COLS: usize = 2;

/// Pipe segment shapes (order fixed: straights first, then elbows clockwise
/// from top-right)
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PipeType {
    LeftRight = 0,
    TopBottom = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    TopLeft = 5,
}

pub const ALL_PIPES: [PipeType; PIPE_TYPES] = [
    PipeType::LeftRight,
    PipeType::TopBottom,
    PipeType::TopRight,
    PipeType::BottomRight,
    PipeType::BottomLeft,
    PipeType::TopLeft,
];

pub const STRAIGHT_PIPES: [PipeType; 2] = [PipeType::LeftRight, PipeType::TopBottom];

pub const ELBOW_PIPES: [PipeType; 4] = [
    PipeType::TopRight,
    PipeType::BottomRight,
    PipeType::BottomLeft,
    PipeType::TopLeft,
];

/// Successor under a 90-degree clockwise rotation. The permutation has two
/// cycles: {LR, TB} and {TR, BR, BL, TL}.
const ROTATED: [PipeType; PIPE_TYPES] = [
    PipeType::TopBottom,
    PipeType::LeftRight,
    PipeType::BottomRight,
    PipeType::BottomLeft,
    PipeType::TopLeft,
    PipeType::TopRight,
];

// Open-edge tables: OPEN_LEFT[t] is true iff a pipe of type t connects to the
// left edge of its cell. Every type opens exactly two edges.
const OPEN_LEFT: [bool; PIPE_TYPES] = [true, false, false, false, true, true];
const OPEN_RIGHT: [bool; PIPE_TYPES] = [true, false, true, true, false, false];
const OPEN_UP: [bool; PIPE_TYPES] = [false, true, true, false, false, true];
const OPEN_DOWN: [bool; PIPE_TYPES] = [false, true, false, true, true, false];

impl PipeType {
    /// Convert from u8 index to PipeType
    pub fn from_index(idx: u8) -> Option<PipeType> {
        match idx {
            0 => Some(PipeType::LeftRight),
            1 => Some(PipeType::TopBottom),
            2 => Some(PipeType::TopRight),
            3 => Some(PipeType::BottomRight),
            4 => Some(PipeType::BottomLeft),
            5 => Some(PipeType::TopLeft),
            _ => None,
        }
    }

    /// The shape this pipe becomes after one 90-degree rotation
    pub fn rotated(self) -> PipeType {
        ROTATED[self as usize]
    }

    pub fn open_left(self) -> bool {
        OPEN_LEFT[self as usize]
    }

    pub fn open_right(self) -> bool {
        OPEN_RIGHT[self as usize]
    }

    pub fn open_up(self) -> bool {
        OPEN_UP[self as usize]
    }

    pub fn open_down(self) -> bool {
        OPEN_DOWN[self as usize]
    }

    /// True for the four elbow shapes (two adjacent open edges)
    pub fn is_elbow(self) -> bool {
        !matches!(self, PipeType::LeftRight | PipeType::TopBottom)
    }
}

// =============================================================================
// Section 2: Generation parameters
// =============================================================================

/// Tunable probabilities for board generation
#[derive(Copy, Clone, Debug)]
pub struct GenConfig {
    /// Chance that a cell becomes an elbow where a straight would also do
    pub elbow_probability: f64,
    /// Chance that a solution-path cell is laid as the exact shape the path
    /// needs, rather than a random shape of the same straight/elbow class
    pub aligned_probability: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            elbow_probability: DEFAULT_ELBOW_PROBABILITY,
            aligned_probability: DEFAULT_ALIGNED_PROBABILITY,
        }
    }
}

// =============================================================================
// Section 3: Board state
// =============================================================================

/// One grid cell: its current pipe shape and whether it is connected to the
/// start point
#[derive(Copy, Clone, Debug)]
pub struct Cell {
    pub pipe: PipeType,
    pub connected: bool,
}

/// One puzzle set. The start point is row 0, column 0, entered from the left
/// edge; the end point is the bottom-right cell, exited to the right.
///
/// `chain` is the ordered path of cells currently connected to the start,
/// start first, frontier last. Every cell on the chain has `connected` set
/// and no cell appears twice.
#[derive(Clone, Debug)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    /// Row-major grid of cells
    pub cells: Vec<Cell>,
    /// Ordered (row, col) path connected to the start
    pub chain: Vec<(usize, usize)>,
    /// False once this set has been solved
    pub in_progress: bool,
}

impl Board {
    /// Create a board with every cell unset (placeholder shape, disconnected)
    pub fn new(rows: usize, cols: usize) -> Board {
        debug_assert!(rows >= MIN_ROWS && cols >= MIN_COLS);
        Board {
            rows,
            cols,
            cells: vec![
                Cell {
                    pipe: PipeType::LeftRight, // placeholder until generated
                    connected: false,
                };
                rows * cols
            ],
            chain: Vec::new(),
            in_progress: true,
        }
    }

    /// Build a board from an explicit row-major list of shapes
    pub fn from_pipes(rows: usize, cols: usize, pipes: &[PipeType]) -> Board {
        assert_eq!(pipes.len(), rows * cols, "wrong number of pipes for grid");
        let mut board = Board::new(rows, cols);
        for (cell, &pipe) in board.cells.iter_mut().zip(pipes) {
            cell.pipe = pipe;
        }
        board
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row * self.cols + col]
    }

    /// True iff the end cell is connected and its right edge is open, i.e.
    /// the chain exits into the end point
    pub fn solved(&self) -> bool {
        let end = self.cell(self.rows - 1, self.cols - 1);
        end.connected && end.pipe.open_right()
    }
}

// =============================================================================
// Section 4: Board generation
// =============================================================================

/// Cursor heading while laying the solution path
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Heading {
    Right,
    Up,
    Down,
}

/// A uniformly random shape of the requested class
fn random_pipe(elbow: bool, rng: &mut impl Rng) -> PipeType {
    if elbow {
        ELBOW_PIPES[rng.random_range(0..ELBOW_PIPES.len())]
    } else {
        STRAIGHT_PIPES[rng.random_range(0..STRAIGHT_PIPES.len())]
    }
}

/// The elbow that takes a vertical run back toward the end column. Moving up
/// the cell is entered from below, moving down from above.
fn turn_back(heading: Heading) -> PipeType {
    match heading {
        Heading::Up => PipeType::BottomRight,
        Heading::Down => PipeType::TopRight,
        Heading::Right => unreachable!("no turn-back while advancing right"),
    }
}

/// Probability that a vertical detour at row `row` heads up rather than down.
/// Skewed so detours drift away from whichever boundary row is closer; the
/// exponent flattens the skew on wide boards. Only evaluated on interior rows.
fn skew_probability(row: usize, rows: usize, cols: usize) -> f64 {
    let x = row as f64 / (rows - 1) as f64;
    x.powf(6.0 * rows as f64 / cols as f64 - 2.0)
}

/// Lay the guaranteed solution path into `grid` (None = untouched cell).
///
/// A cursor walks from (0, 0) toward the last column, electing vertical
/// detours with probability `elbow_probability` and turning back at row
/// boundaries. Each path cell is laid either pre-aligned (the exact shape the
/// path needs) or as a random shape of the same straight/elbow class, so the
/// path always exists under rotation without being visible.
fn lay_solution(
    grid: &mut [Option<PipeType>],
    rows: usize,
    cols: usize,
    config: &GenConfig,
    rng: &mut impl Rng,
) {
    let mut j = 0usize; // cursor row
    let mut k = 0usize; // cursor column
    let mut heading = Heading::Right;

    while k < cols - 1 {
        let aligned = rng.random::<f64>() < config.aligned_probability;

        if (j == 0 && heading == Heading::Up) || (j == rows - 1 && heading == Heading::Down) {
            // Hit a boundary row mid-climb: forced turn back toward the end
            grid[j * cols + k] = Some(if aligned {
                turn_back(heading)
            } else {
                random_pipe(true, rng)
            });
            heading = Heading::Right;
        } else if rng.random::<f64>() > config.elbow_probability {
            // Keep the current heading with a straight segment
            let straight = match heading {
                Heading::Right => PipeType::LeftRight,
                Heading::Up | Heading::Down => PipeType::TopBottom,
            };
            grid[j * cols + k] = Some(if aligned {
                straight
            } else {
                random_pipe(false, rng)
            });
        } else if heading != Heading::Right {
            // Elbow elected while moving vertically: turn back to horizontal
            grid[j * cols + k] = Some(if aligned {
                turn_back(heading)
            } else {
                random_pipe(true, rng)
            });
            heading = Heading::Right;
        } else if j == 0 {
            // Elbow on the top row can only start a downward detour
            grid[j * cols + k] = Some(if aligned {
                PipeType::BottomLeft
            } else {
                random_pipe(true, rng)
            });
            heading = Heading::Down;
        } else if j == rows - 1 {
            // Elbow on the bottom row can only start an upward detour
            grid[j * cols + k] = Some(if aligned {
                PipeType::TopLeft
            } else {
                random_pipe(true, rng)
            });
            heading = Heading::Up;
        } else if rng.random::<f64>() < skew_probability(j, rows, cols) {
            grid[j * cols + k] = Some(if aligned {
                PipeType::TopLeft
            } else {
                random_pipe(true, rng)
            });
            heading = Heading::Up;
        } else {
            grid[j * cols + k] = Some(if aligned {
                PipeType::BottomLeft
            } else {
                random_pipe(true, rng)
            });
            heading = Heading::Down;
        }

        match heading {
            Heading::Right => k += 1,
            Heading::Up => j -= 1,
            Heading::Down => j += 1,
        }
    }

    // Terminal column: the cursor always arrives here moving right. Either
    // close straight into the end point, or drop a vertical run down to the
    // last row where the end point lives.
    if j == rows - 1 {
        grid[j * cols + k] = Some(if rng.random::<f64>() < config.aligned_probability {
            PipeType::LeftRight
        } else {
            random_pipe(false, rng)
        });
    } else {
        grid[j * cols + k] = Some(if rng.random::<f64>() < config.aligned_probability {
            PipeType::BottomLeft
        } else {
            random_pipe(true, rng)
        });
        for y in j + 1..rows - 1 {
            grid[y * cols + k] = Some(if rng.random::<f64>() < config.aligned_probability {
                PipeType::TopBottom
            } else {
                random_pipe(false, rng)
            });
        }
        grid[(rows - 1) * cols + k] = Some(if rng.random::<f64>() < config.aligned_probability {
            PipeType::TopRight
        } else {
            random_pipe(true, rng)
        });
    }
}

/// Fill every cell the solution path left untouched with a decoy, biased
/// toward elbows by `elbow_probability`
fn fill_decoys(grid: &mut [Option<PipeType>], config: &GenConfig, rng: &mut impl Rng) {
    for slot in grid.iter_mut() {
        if slot.is_none() {
            let elbow = rng.random::<f64>() < config.elbow_probability;
            *slot = Some(random_pipe(elbow, rng));
        }
    }
}

/// (Re)generate a board in place: lay a guaranteed solution path, fill the
/// rest with decoys, then run one connectivity pass to reject the degenerate
/// case where the laid shapes already close the circuit. Repeats until the
/// board comes out unsolved; no side effects beyond the board itself.
///
/// The connectivity state left behind is the real initial chain, ready for
/// first render.
pub fn generate_board(board: &mut Board, config: &GenConfig, rng: &mut impl Rng) {
    loop {
        let mut grid: Vec<Option<PipeType>> = vec![None; board.rows * board.cols];
        lay_solution(&mut grid, board.rows, board.cols, config, rng);
        fill_decoys(&mut grid, config, rng);

        for (cell, pipe) in board.cells.iter_mut().zip(&grid) {
            cell.pipe = pipe.expect("decoy fill assigns every cell");
            cell.connected = false;
        }
        board.chain.clear();

        let update = check_connections(board, 0, 0);
        if !update.solved {
            break;
        }
        // Pre-solved straight out of generation: throw it away and retry
    }
}

// =============================================================================
// Section 5: Connectivity tracking
// =============================================================================

/// Result of one connectivity pass after a single-cell mutation
#[derive(Clone, Debug)]
pub struct ConnectionUpdate {
    /// Cells whose `connected` flag flipped during this pass, in the order
    /// they flipped (disconnections first, then reconnections)
    pub changed: Vec<(usize, usize)>,
    /// True iff the chain now exits the end cell to the right
    pub solved: bool,
}

/// Recompute the chain after the pipe at (row, col) changed shape.
///
/// A rotation can only break the chain from the mutated cell forward, so the
/// chain suffix through that cell is popped and disconnected, then the
/// frontier is re-extended from the surviving tail (or re-seeded at the start
/// cell if nothing survived). Extension tries left, right, up, down in that
/// fixed order; since every shape opens exactly two edges and connected cells
/// are never re-entered, at most one simple path is traced per call.
pub fn check_connections(board: &mut Board, row: usize, col: usize) -> ConnectionUpdate {
    let mut changed = Vec::new();

    if board.cell(row, col).connected {
        // The mutated cell lies on the chain; everything from it onward is
        // now suspect. Cells before it are geometrically unaffected.
        loop {
            let (r, c) = board
                .chain
                .pop()
                .expect("connected cell must lie on the chain");
            board.cell_mut(r, c).connected = false;
            changed.push((r, c));
            if (r, c) == (row, col) {
                break;
            }
        }
    }

    let mut frontier = match board.chain.last() {
        Some(&tail) => Some(tail),
        None => {
            // Nothing is connected; the chain can only re-seed at the start
            // cell, whose left edge faces the fixed inlet
            if board.cell(0, 0).pipe.open_left() {
                board.cell_mut(0, 0).connected = true;
                board.chain.push((0, 0));
                changed.push((0, 0));
                Some((0, 0))
            } else {
                None
            }
        }
    };

    while let Some((y, x)) = frontier {
        let pipe = board.cell(y, x).pipe;
        let next = if pipe.open_left()
            && x > 0
            && board.cell(y, x - 1).pipe.open_right()
            && !board.cell(y, x - 1).connected
        {
            Some((y, x - 1))
        } else if pipe.open_right()
            && x + 1 < board.cols
            && board.cell(y, x + 1).pipe.open_left()
            && !board.cell(y, x + 1).connected
        {
            Some((y, x + 1))
        } else if pipe.open_up()
            && y > 0
            && board.cell(y - 1, x).pipe.open_down()
            && !board.cell(y - 1, x).connected
        {
            Some((y - 1, x))
        } else if pipe.open_down()
            && y + 1 < board.rows
            && board.cell(y + 1, x).pipe.open_up()
            && !board.cell(y + 1, x).connected
        {
            Some((y + 1, x))
        } else {
            None // dead end
        };

        if let Some((ny, nx)) = next {
            board.cell_mut(ny, nx).connected = true;
            board.chain.push((ny, nx));
            changed.push((ny, nx));
        }
        frontier = next;
    }

    ConnectionUpdate {
        solved: board.solved(),
        changed,
    }
}

// =============================================================================
// Section 6: Session (all sets, phase, timing)
// =============================================================================

/// Whole-puzzle phase. Rotations are only accepted while in progress.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Boards generated and visible; input is ignored until the countdown
    /// trigger fires
    Setup,
    InProgress,
    /// Every set solved
    Complete,
}

/// One play session over `sets` independent boards of equal dimensions
#[derive(Clone, Debug)]
pub struct Session {
    pub rows: usize,
    pub cols: usize,
    pub boards: Vec<Board>,
    pub phase: Phase,
    /// Number of sets solved so far
    pub completed: usize,
    /// Set when the session leaves setup
    pub started_at: Option<Instant>,
}

/// Rejected board dimensions
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DimensionError {
    TooFewSets,
    TooFewRows,
    TooFewColumns,
}

impl std::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionError::TooFewSets => {
                write!(f, "the number of sets must be at least {MIN_SETS}")
            }
            DimensionError::TooFewRows => {
                write!(f, "the number of rows must be at least {MIN_ROWS}")
            }
            DimensionError::TooFewColumns => {
                write!(f, "the number of columns must be at least {MIN_COLS}")
            }
        }
    }
}

impl std::error::Error for DimensionError {}

/// Why a rotation was rejected
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RotateError {
    /// The session is not in progress (still in setup, or already complete)
    WrongPhase,
    /// The addressed set is already solved
    SetFinished,
    /// Set index or cell coordinates outside the grid
    OutOfBounds,
}

impl std::fmt::Display for RotateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotateError::WrongPhase => write!(f, "the session is not accepting rotations"),
            RotateError::SetFinished => write!(f, "that set is already solved"),
            RotateError::OutOfBounds => write!(f, "set or cell address out of bounds"),
        }
    }
}

impl std::error::Error for RotateError {}

/// What a single accepted rotation did
#[derive(Clone, Debug)]
pub struct RotateOutcome {
    pub set: usize,
    /// Cells whose connected state changed, for re-rendering
    pub changed: Vec<(usize, usize)>,
    /// True iff this rotation solved the addressed set
    pub set_complete: bool,
    /// Elapsed session time, present iff this rotation solved the last
    /// outstanding set
    pub puzzle_complete: Option<Duration>,
}

/// Validate requested board dimensions before any generation happens
pub fn validate_dimensions(sets: usize, rows: usize, cols: usize) -> Result<(), DimensionError> {
    if sets < MIN_SETS {
        return Err(DimensionError::TooFewSets);
    }
    if rows < MIN_ROWS {
        return Err(DimensionError::TooFewRows);
    }
    if cols < MIN_COLS {
        return Err(DimensionError::TooFewColumns);
    }
    Ok(())
}

/// Create a session: validate dimensions, then generate every board. Each
/// board's generation (including its regeneration retries) settles fully
/// before the next board starts.
pub fn new_session(
    sets: usize,
    rows: usize,
    cols: usize,
    config: &GenConfig,
    rng: &mut impl Rng,
) -> Result<Session, DimensionError> {
    validate_dimensions(sets, rows, cols)?;

    let mut boards = Vec::with_capacity(sets);
    for _ in 0..sets {
        let mut board = Board::new(rows, cols);
        generate_board(&mut board, config, rng);
        boards.push(board);
    }

    Ok(Session {
        rows,
        cols,
        boards,
        phase: Phase::Setup,
        completed: 0,
        started_at: None,
    })
}

/// Flip the session from setup to in-progress and record the start time.
/// The setup countdown is the caller's trigger; calling this twice is a no-op.
pub fn start_session(session: &mut Session) {
    if session.phase == Phase::Setup {
        session.phase = Phase::InProgress;
        session.started_at = Some(Instant::now());
    }
}

/// Rotate one cell and retrace connectivity for its set.
///
/// Accepted only while the session is in progress and the addressed set is
/// unsolved. Solving the last outstanding set completes the session and the
/// outcome carries the elapsed time.
pub fn rotate(
    session: &mut Session,
    set: usize,
    row: usize,
    col: usize,
) -> Result<RotateOutcome, RotateError> {
    if session.phase != Phase::InProgress {
        return Err(RotateError::WrongPhase);
    }
    let started_at = session.started_at;
    let total_sets = session.boards.len();
    let board = session.boards.get_mut(set).ok_or(RotateError::OutOfBounds)?;
    if !board.in_progress {
        return Err(RotateError::SetFinished);
    }
    if row >= board.rows || col >= board.cols {
        return Err(RotateError::OutOfBounds);
    }

    let cell = board.cell_mut(row, col);
    cell.pipe = cell.pipe.rotated();
    let update = check_connections(board, row, col);

    let mut outcome = RotateOutcome {
        set,
        changed: update.changed,
        set_complete: false,
        puzzle_complete: None,
    };

    if update.solved {
        board.in_progress = false;
        session.completed += 1;
        outcome.set_complete = true;
        if session.completed == total_sets {
            session.phase = Phase::Complete;
            outcome.puzzle_complete = Some(started_at.map(|t| t.elapsed()).unwrap_or_default());
        }
    }

    Ok(outcome)
}

// =============================================================================
// Section 7: Timing statistics
// =============================================================================

/// Completion-time records for one board configuration
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub count: u64,
    /// Best completion time in seconds
    pub best: f64,
    /// Sum of all completion times in seconds
    pub total: f64,
}

impl TimeEntry {
    pub fn average(&self) -> f64 {
        self.total / self.count as f64
    }
}

/// How a recorded completion compares to history
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RecordOutcome {
    /// First completion on this configuration
    FirstCompletion,
    /// Beat the previous best
    NewBest { previous: f64 },
    /// Did not beat the standing best
    NotABest { best: f64 },
}

/// Historical best/average completion times keyed by board configuration
/// `(sets, rows, columns)`. Plain data; persistence is the caller's concern.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimeStats {
    pub entries: BTreeMap<String, TimeEntry>,
}

fn board_key(sets: usize, rows: usize, cols: usize) -> String {
    format!("{sets},{rows},{cols}")
}

impl TimeStats {
    /// Record a completion time and report how it ranks
    pub fn record(&mut self, sets: usize, rows: usize, cols: usize, seconds: f64) -> RecordOutcome {
        match self.entries.entry(board_key(sets, rows, cols)) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(TimeEntry {
                    count: 1,
                    best: seconds,
                    total: seconds,
                });
                RecordOutcome::FirstCompletion
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.count += 1;
                entry.total += seconds;
                if seconds < entry.best {
                    let previous = entry.best;
                    entry.best = seconds;
                    RecordOutcome::NewBest { previous }
                } else {
                    RecordOutcome::NotABest { best: entry.best }
                }
            }
        }
    }

    pub fn get(&self, sets: usize, rows: usize, cols: usize) -> Option<&TimeEntry> {
        self.entries.get(&board_key(sets, rows, cols))
    }
}

// =============================================================================
// Debug assertions for chain invariants
// =============================================================================

#[cfg(debug_assertions)]
pub fn assert_chain_invariants(board: &Board) {
    let mut on_chain = vec![false; board.rows * board.cols];
    for &(r, c) in &board.chain {
        assert!(r < board.rows && c < board.cols, "chain entry out of bounds");
        let idx = board.index(r, c);
        assert!(!on_chain[idx], "cell ({r},{c}) appears twice in the chain");
        on_chain[idx] = true;
    }

    if let Some(&(r, c)) = board.chain.first() {
        assert_eq!((r, c), (0, 0), "chain must start at the start cell");
        assert!(
            board.cell(0, 0).pipe.open_left(),
            "chain head must accept the left inlet"
        );
    }

    for pair in board.chain.windows(2) {
        let (ar, ac) = pair[0];
        let (br, bc) = pair[1];
        let a = board.cell(ar, ac).pipe;
        let b = board.cell(br, bc).pipe;
        let linked = if br == ar && bc + 1 == ac {
            a.open_left() && b.open_right()
        } else if br == ar && ac + 1 == bc {
            a.open_right() && b.open_left()
        } else if bc == ac && br + 1 == ar {
            a.open_up() && b.open_down()
        } else if bc == ac && ar + 1 == br {
            a.open_down() && b.open_up()
        } else {
            false
        };
        assert!(
            linked,
            "consecutive chain cells ({ar},{ac}) -> ({br},{bc}) are not joined by open edges"
        );
    }

    for row in 0..board.rows {
        for col in 0..board.cols {
            assert_eq!(
                board.cell(row, col).connected,
                on_chain[board.index(row, col)],
                "connected flag at ({row},{col}) disagrees with chain membership"
            );
        }
    }
}
