use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid cell index")]
    InvalidIndex,
    #[error("Board has no cells")]
    EmptyBoard,
    #[error("Board already solved, no new presses are accepted")]
    AlreadySolved,
    #[error("Board too wide for first-row enumeration")]
    BoardTooWide,
}

pub type Result<T> = core::result::Result<T, GameError>;
