mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    DRAW_SCORE, LOSS_SCORE, ScoredMove, WIN_SCORE, calculate_minimax_move, evaluate,
};
pub use error::{GameError, InvalidCallReason, InvalidMoveReason};
pub use game_state::{TicTacToeGameState, TurnOutcome};
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIZE, GameStatus, Line, Mark, Position, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line};
