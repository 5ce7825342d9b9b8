//! Error types for the arcade shell.

use thiserror::Error;

/// Result type for arcade operations.
pub type ArcadeResult<T> = Result<T, ArcadeError>;

/// Errors reported back to the player. None of them end the session.
#[derive(Debug, Error)]
pub enum ArcadeError {
    /// The command is not known in the current context.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// No game has that id.
    #[error("unknown game: {0}")]
    UnknownGame(String),

    /// A game command arrived with no game open.
    #[error("no game open (try `games` or `open <game>`)")]
    NoActiveGame,

    /// A command argument could not be used.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Round engine error.
    #[error("{0}")]
    Game(#[from] mg_core::GameError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::GameError;

    #[test]
    fn game_errors_pass_through() {
        let err: ArcadeError = GameError::InvalidInput("\"x\" is not a number".to_string()).into();
        assert_eq!(err.to_string(), "invalid input: \"x\" is not a number");
    }

    #[test]
    fn messages() {
        assert_eq!(
            ArcadeError::UnknownGame("chess".to_string()).to_string(),
            "unknown game: chess"
        );
        assert!(ArcadeError::NoActiveGame.to_string().starts_with("no game open"));
    }
}
