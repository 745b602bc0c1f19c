use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Writes `mark` into an empty cell. Emptiness is the caller's
    /// responsibility; it is only asserted in debug builds.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_empty(pos), "cell {} is already marked", pos);
        self.cells[pos.row][pos.col] = mark;
    }

    /// Reverts a trial placement made during search.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(self)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == mark)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::LINES;
    use Mark::{Empty as E, O, X};

    fn winners_on(board: &Board) -> (bool, bool) {
        let mut x_wins = false;
        let mut o_wins = false;
        for line in LINES {
            let [a, b, c] = *line.cells();
            let mark = board.get(a);
            if mark == board.get(b) && mark == board.get(c) {
                match mark {
                    Mark::X => x_wins = true,
                    Mark::O => o_wins = true,
                    Mark::Empty => {}
                }
            }
        }
        (x_wins, o_wins)
    }

    fn visit_reachable(board: &mut Board, to_move: Mark, visit: &mut dyn FnMut(&Board)) {
        visit(board);
        if board.winner().is_some() || board.is_full() {
            return;
        }
        for pos in board.available_moves() {
            board.place(pos, to_move);
            visit_reachable(board, to_move.opponent().unwrap(), visit);
            board.clear(pos);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.is_empty(Position::new(1, 1)));
    }

    #[test]
    fn test_place_and_count() {
        let mut board = Board::new();
        board.place(Position::new(0, 2), X);
        board.place(Position::new(2, 0), O);

        assert!(!board.is_empty(Position::new(0, 2)));
        assert_eq!(board.get(Position::new(2, 0)), O);
        assert_eq!(board.mark_count(X), 1);
        assert_eq!(board.mark_count(O), 1);
        assert_eq!(board.mark_count(E), 7);
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [O, E, E]]);
        assert_eq!(
            board.available_moves(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_completing_a_row_wins() {
        let mut board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(board.winner(), None);

        board.place(Position::new(0, 2), X);
        assert_eq!(board.winner(), Some(X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::from_rows([[X, O, X], [E, O, E], [E, X, E]]);
        board.reset();
        let once = board;
        board.reset();
        assert_eq!(board, once);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [O, E, E]]);
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
    }

    #[test]
    fn test_reachable_boards_never_have_two_winners() {
        let mut checked = 0usize;
        for first in [X, O] {
            let mut board = Board::new();
            visit_reachable(&mut board, first, &mut |b: &Board| {
                let (x_wins, o_wins) = winners_on(b);
                assert!(!(x_wins && o_wins), "both marks win on\n{}", b);
                let diff = b.mark_count(X) as isize - b.mark_count(O) as isize;
                assert!(diff.abs() <= 1);
                checked += 1;
            });
        }
        assert!(checked > 5000);
    }
}
