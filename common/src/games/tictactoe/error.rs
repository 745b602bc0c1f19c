use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMoveReason {
    #[error("position is out of bounds")]
    OutOfBounds,
    #[error("cell is already marked")]
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCallReason {
    #[error("game is already over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[source] InvalidMoveReason),
    #[error("invalid call: {0}")]
    InvalidCall(#[source] InvalidCallReason),
}

impl From<InvalidMoveReason> for GameError {
    fn from(reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove(reason)
    }
}

impl From<InvalidCallReason> for GameError {
    fn from(reason: InvalidCallReason) -> Self {
        GameError::InvalidCall(reason)
    }
}
