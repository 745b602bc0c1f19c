use crate::log;
use super::board::Board;
use super::bot_controller::{ScoredMove, calculate_minimax_move};
use super::error::{GameError, InvalidCallReason, InvalidMoveReason};
use super::settings::TicTacToeSessionSettings;
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub human: Position,
    pub bot: Option<ScoredMove>,
    pub status: GameStatus,
}

/// One human-versus-bot game. The human always opens.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    bot_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        Self {
            board: Board::new(),
            human_mark: settings.human_mark(),
            bot_mark: settings.bot_mark(),
            current_mark: settings.human_mark(),
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = self.human_mark;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.winning_line = None;
    }

    pub fn attempt_move(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        self.ensure_in_progress()?;

        if self.current_mark != self.human_mark {
            return Err(InvalidCallReason::NotYourTurn.into());
        }

        if !pos.is_on_board() {
            return Err(InvalidMoveReason::OutOfBounds.into());
        }

        if !self.board.is_empty(pos) {
            return Err(InvalidMoveReason::Occupied.into());
        }

        self.apply_move(pos);
        Ok(self.status)
    }

    pub fn bot_move(&mut self) -> Result<ScoredMove, GameError> {
        self.ensure_in_progress()?;

        if self.current_mark != self.bot_mark {
            return Err(InvalidCallReason::NotYourTurn.into());
        }

        // in progress implies an empty cell and no completed line
        let chosen = calculate_minimax_move(&mut self.board, self.bot_mark)
            .ok_or(GameError::InvalidCall(InvalidCallReason::GameOver))?;

        log!(
            "Bot {} plays {} (score {}, {} positions searched)",
            self.bot_mark,
            chosen.position,
            chosen.score,
            chosen.nodes
        );

        self.apply_move(chosen.position);
        Ok(chosen)
    }

    /// Human move followed by the bot's reply when the game is still running.
    pub fn play_turn(&mut self, pos: Position) -> Result<TurnOutcome, GameError> {
        let status = self.attempt_move(pos)?;

        let bot = if status.is_over() {
            None
        } else {
            Some(self.bot_move()?)
        };

        Ok(TurnOutcome {
            human: pos,
            bot,
            status: self.status,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.human_mark
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(InvalidCallReason::GameOver.into());
        }
        Ok(())
    }

    fn apply_move(&mut self, pos: Position) {
        self.board.place(pos, self.current_mark);
        self.last_move = Some(pos);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        } else {
            log!("Game over: {}\n{}", self.status, self.board);
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == self.human_mark {
            self.bot_mark
        } else {
            self.human_mark
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winning) = check_win_with_line(&self.board) {
            self.status = GameStatus::Won(winning.mark);
            self.winning_line = Some(winning);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(TicTacToeSessionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::bot_controller::WIN_SCORE;

    fn play_human(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            state.attempt_move(Position::new(row, col)).unwrap();
            state.current_mark = state.human_mark;
        }
    }

    #[test]
    fn test_new_game_starts_with_human() {
        let state = TicTacToeGameState::default();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert!(state.is_human_turn());
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_human_move_passes_turn_to_bot() {
        let mut state = TicTacToeGameState::default();
        let status = state.attempt_move(Position::new(1, 1)).unwrap();

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.board().get(Position::new(1, 1)), Mark::X);
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_move() {
        let mut state = TicTacToeGameState::default();
        assert_eq!(
            state.attempt_move(Position::new(3, 0)),
            Err(GameError::InvalidMove(InvalidMoveReason::OutOfBounds))
        );
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_occupied_cell() {
        let mut state = TicTacToeGameState::default();
        state.play_turn(Position::new(0, 0)).unwrap();
        assert_eq!(
            state.attempt_move(Position::new(0, 0)),
            Err(GameError::InvalidMove(InvalidMoveReason::Occupied))
        );
    }

    #[test]
    fn test_human_cannot_move_out_of_turn() {
        let mut state = TicTacToeGameState::default();
        state.attempt_move(Position::new(0, 0)).unwrap();
        assert_eq!(
            state.attempt_move(Position::new(2, 2)),
            Err(GameError::InvalidCall(InvalidCallReason::NotYourTurn))
        );
    }

    #[test]
    fn test_turn_checked_before_bounds() {
        let mut state = TicTacToeGameState::default();
        state.attempt_move(Position::new(0, 0)).unwrap();
        assert_eq!(
            state.attempt_move(Position::new(3, 3)),
            Err(GameError::InvalidCall(InvalidCallReason::NotYourTurn))
        );
    }

    #[test]
    fn test_bot_cannot_move_out_of_turn() {
        let mut state = TicTacToeGameState::default();
        assert_eq!(
            state.bot_move(),
            Err(GameError::InvalidCall(InvalidCallReason::NotYourTurn))
        );
    }

    #[test]
    fn test_human_completes_row() {
        let mut state = TicTacToeGameState::default();
        play_human(&mut state, &[(0, 0), (0, 1)]);
        state.board.place(Position::new(1, 0), Mark::O);
        state.board.place(Position::new(1, 1), Mark::O);

        let status = state.attempt_move(Position::new(0, 2)).unwrap();

        assert_eq!(status, GameStatus::Won(Mark::X));
        assert_eq!(state.board().winner(), Some(Mark::X));
        let winning = state.winning_line().unwrap();
        assert_eq!(winning.line.start(), Position::new(0, 0));
        assert_eq!(winning.line.end(), Position::new(0, 2));
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut state = TicTacToeGameState::default();
        play_human(&mut state, &[(0, 0), (0, 1)]);
        state.attempt_move(Position::new(0, 2)).unwrap();

        assert_eq!(
            state.attempt_move(Position::new(2, 2)),
            Err(GameError::InvalidCall(InvalidCallReason::GameOver))
        );
        assert_eq!(
            state.bot_move(),
            Err(GameError::InvalidCall(InvalidCallReason::GameOver))
        );
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let mut state = TicTacToeGameState::default();
        play_human(&mut state, &[(0, 0), (0, 1)]);
        state.attempt_move(Position::new(0, 2)).unwrap();

        assert_eq!(
            state.attempt_move(Position::new(7, 7)),
            Err(GameError::InvalidCall(InvalidCallReason::GameOver))
        );
    }

    #[test]
    fn test_bot_finishes_winning_line() {
        let mut state = TicTacToeGameState::default();
        state.board = Board::from_rows([
            [Mark::O, Mark::O, Mark::Empty],
            [Mark::X, Mark::X, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::X],
        ]);
        state.current_mark = Mark::O;

        let chosen = state.bot_move().unwrap();

        assert_eq!(chosen.position, Position::new(0, 2));
        assert_eq!(chosen.score, WIN_SCORE);
        assert_eq!(state.status(), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_play_turn_gets_bot_reply() {
        let mut state = TicTacToeGameState::default();
        let outcome = state.play_turn(Position::new(1, 1)).unwrap();

        let bot = outcome.bot.unwrap();
        assert_eq!(outcome.human, Position::new(1, 1));
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(state.board().get(bot.position), Mark::O);
        assert!(bot.position.is_corner());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_full_game_never_won_by_human() {
        let mut state = TicTacToeGameState::default();
        while state.status() == GameStatus::InProgress {
            let pos = state.board().available_moves()[0];
            state.play_turn(pos).unwrap();
        }
        assert_ne!(state.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_draw_status() {
        let mut state = TicTacToeGameState::default();
        state.board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::Empty],
        ]);

        let status = state.attempt_move(Position::new(2, 2)).unwrap();

        assert!(state.board().is_full());
        assert_eq!(state.board().winner(), None);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_reset_twice_equals_reset_once() {
        let mut state = TicTacToeGameState::default();
        state.play_turn(Position::new(0, 0)).unwrap();

        state.reset();
        let once = (*state.board(), state.status(), state.current_mark());
        state.reset();

        assert_eq!((*state.board(), state.status(), state.current_mark()), once);
        assert_eq!(state.board(), &Board::new());
        assert!(state.is_human_turn());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_human_playing_o_opens() {
        let settings = TicTacToeSessionSettings::new(Mark::O).unwrap();
        let mut state = TicTacToeGameState::new(settings);
        assert!(state.is_human_turn());

        let outcome = state.play_turn(Position::new(0, 0)).unwrap();
        assert_eq!(state.board().get(Position::new(0, 0)), Mark::O);
        assert_eq!(state.board().get(outcome.bot.unwrap().position), Mark::X);
    }
}
