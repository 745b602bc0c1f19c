use super::board::Board;
use super::types::{Line, Mark, Position, WinningLine};

const fn line(cells: [(usize, usize); 3]) -> Line {
    Line([
        Position::new(cells[0].0, cells[0].1),
        Position::new(cells[1].0, cells[1].1),
        Position::new(cells[2].0, cells[2].1),
    ])
}

/// Scan order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|winning| winning.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = *line.cells();
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            Some(WinningLine::new(mark, *line))
        } else {
            None
        }
    })
}
