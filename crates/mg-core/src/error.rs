//! Error types shared by the round engines.

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors a round engine can report to its caller.
///
/// Actions invoked in a phase that does not accept them are not errors; they
/// come back as [`Step::Ignored`](crate::Step::Ignored).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Player input could not be interpreted (e.g. a non-numeric guess).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An external data source (word bank, champion catalog) failed to load.
    #[error("{collaborator} unavailable: {reason}")]
    CollaboratorUnavailable {
        /// Which collaborator failed.
        collaborator: &'static str,
        /// Why it failed.
        reason: String,
    },

    /// The requested word category does not exist in the word bank.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The requested word category has no words to draw from.
    #[error("category \"{0}\" has no words")]
    EmptyCategory(String),

    /// The requested champion id is not in the catalog.
    #[error("unknown champion: {0}")]
    UnknownChampion(String),

    /// The catalog is too small to draw an enemy team.
    #[error("not enough champions: need {needed}, have {available}")]
    NotEnoughChampions {
        /// Champions required outside the player's team.
        needed: usize,
        /// Champions actually available.
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_message_names_source() {
        let err = GameError::CollaboratorUnavailable {
            collaborator: "word bank",
            reason: "file not found".to_string(),
        };
        assert_eq!(err.to_string(), "word bank unavailable: file not found");
    }

    #[test]
    fn not_enough_champions_message() {
        let err = GameError::NotEnoughChampions {
            needed: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "not enough champions: need 3, have 1");
    }
}
