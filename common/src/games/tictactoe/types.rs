use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Maps a point on the drawing surface (origin at the board's top-left
    /// corner) to the cell under it.
    pub fn from_point(x: f32, y: f32, cell_size: f32) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() || !cell_size.is_finite() {
            return None;
        }
        if cell_size <= 0.0 || x < 0.0 || y < 0.0 {
            return None;
        }

        let row = (y / cell_size).floor() as usize;
        let col = (x / cell_size).floor() as usize;
        let pos = Self::new(row, col);

        pos.is_on_board().then_some(pos)
    }
}

#[cfg(test)]
impl Position {
    pub(crate) fn is_corner(&self) -> bool {
        let edge = |i: usize| i == 0 || i == BOARD_SIZE - 1;
        edge(self.row) && edge(self.col)
    }

    pub(crate) fn is_center(&self) -> bool {
        self.row == BOARD_SIZE / 2 && self.col == BOARD_SIZE / 2
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line(pub [Position; 3]);

impl Line {
    pub fn cells(&self) -> &[Position; 3] {
        &self.0
    }

    pub fn start(&self) -> Position {
        self.0[0]
    }

    pub fn end(&self) -> Position {
        self.0[2]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub line: Line,
}

impl WinningLine {
    pub fn new(mark: Mark, line: Line) -> Self {
        Self { mark, line }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(mark) => write!(f, "{} won", mark),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
