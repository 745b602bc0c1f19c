use super::board::Board;
use super::types::{Mark, Position};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    /// Game-theoretic value for the bot: +10 forced win, -10 forced loss, 0 draw.
    pub score: i32,
    /// Positions visited by the search.
    pub nodes: u64,
}

struct Evaluation {
    score: i32,
    best: Option<Position>,
}

/// Picks the optimal move for `bot_mark` by exhaustive minimax over `board`.
///
/// The search places and removes trial marks on `board` itself, so the board
/// is borrowed mutably, but it is restored before returning. Returns `None`
/// when there is nothing to decide: no empty cell is left or a line is
/// already complete.
pub fn calculate_minimax_move(board: &mut Board, bot_mark: Mark) -> Option<ScoredMove> {
    bot_mark.opponent()?;
    if board.winner().is_some() {
        return None;
    }

    let mut nodes = 0;
    let evaluation = minimax(board, bot_mark, bot_mark, &mut nodes);

    evaluation.best.map(|position| ScoredMove {
        position,
        score: evaluation.score,
        nodes,
    })
}

/// Value of the position for `bot_mark` with `to_move` about to play.
pub fn evaluate(board: &mut Board, to_move: Mark, bot_mark: Mark) -> i32 {
    let mut nodes = 0;
    minimax(board, to_move, bot_mark, &mut nodes).score
}

fn terminal_score(board: &Board, bot_mark: Mark) -> Option<i32> {
    match board.winner() {
        Some(winner) if winner == bot_mark => Some(WIN_SCORE),
        Some(_) => Some(LOSS_SCORE),
        None if board.is_full() => Some(DRAW_SCORE),
        None => None,
    }
}

fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark, nodes: &mut u64) -> Evaluation {
    *nodes += 1;

    if let Some(score) = terminal_score(board, bot_mark) {
        return Evaluation { score, best: None };
    }

    let Some(next) = to_move.opponent() else {
        return Evaluation { score: DRAW_SCORE, best: None };
    };
    let is_maximizing = to_move == bot_mark;

    let mut best = None;
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in board.available_moves() {
        board.place(pos, to_move);
        let score = minimax(board, next, bot_mark, nodes).score;
        board.clear(pos);

        // strict comparison keeps the first extremal move in row-major order
        let improves = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = Some(pos);
        }
    }

    Evaluation {
        score: best_score,
        best,
    }
}
