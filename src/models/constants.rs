pub const BOARD_ROWS: usize = 6;
pub const BOARD_COLUMNS: usize = 7;

pub const EMPTY_CELL: char = '_';
pub const PLAYER1_TOKEN: char = 'X';
pub const PLAYER2_TOKEN: char = 'O';

/// Length of a winning run.
pub const WINNING_RUN: usize = 4;

pub const NUM_AXES: usize = 4;

/// The four axes a winning run can lie along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalLeft,
    DiagonalRight,
}

impl Axis {
    pub const ALL: [Axis; NUM_AXES] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalLeft,
        Axis::DiagonalRight,
    ];

    /// Step vectors for this axis as (row delta, column delta) pairs,
    /// one per direction to walk from the placed cell.
    ///
    /// Vertical carries only the downward vector: every cell above a
    /// just-placed counter is still empty.
    pub fn directions(&self) -> &'static [(i32, i32)] {
        match self {
            Axis::Horizontal => &[(0, -1), (0, 1)],
            Axis::Vertical => &[(1, 0)],
            Axis::DiagonalLeft => &[(-1, -1), (1, 1)],
            Axis::DiagonalRight => &[(-1, 1), (1, -1)],
        }
    }
}
