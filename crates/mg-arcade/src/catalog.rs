//! The games on offer.

/// One of the five minigames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    /// Guess the word letter by letter.
    Hangman,
    /// Draft champions and out-pull the enemy.
    TugOfWar,
    /// Cross the glass bridge.
    Bridge,
    /// Find the secret number.
    Guessing,
    /// Rock, paper, scissors.
    Rps,
}

impl GameKind {
    /// Every game, in menu order.
    pub const ALL: [GameKind; 5] = [
        GameKind::Hangman,
        GameKind::TugOfWar,
        GameKind::Bridge,
        GameKind::Guessing,
        GameKind::Rps,
    ];

    /// Command id used to open the game.
    pub fn id(self) -> &'static str {
        match self {
            Self::Hangman => "hangman",
            Self::TugOfWar => "tug-of-war",
            Self::Bridge => "bridge",
            Self::Guessing => "guessing",
            Self::Rps => "rps",
        }
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Hangman => "Hangman",
            Self::TugOfWar => "Tug of War",
            Self::Bridge => "Glass Bridge",
            Self::Guessing => "Guessing",
            Self::Rps => "Rock Paper Scissors",
        }
    }

    /// One-line pitch for the menu.
    pub fn description(self) -> &'static str {
        match self {
            Self::Hangman => "Guess the word before it is too late!",
            Self::TugOfWar => "Pick three champions and test your strength.",
            Self::Bridge => "Cross the bridge without stepping on weak glass.",
            Self::Guessing => "Try to guess the secret number.",
            Self::Rps => "Rock, paper, scissors. Who wins?",
        }
    }

    /// Parse an id or a common alias, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hangman" | "forca" => Some(Self::Hangman),
            "tug-of-war" | "tug" | "tugofwar" => Some(Self::TugOfWar),
            "bridge" | "glass-bridge" => Some(Self::Bridge),
            "guessing" | "number" => Some(Self::Guessing),
            "rps" | "rock-paper-scissors" | "jokenpo" => Some(Self::Rps),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::parse(kind.id()), Some(kind));
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(GameKind::parse("TUG"), Some(GameKind::TugOfWar));
        assert_eq!(GameKind::parse("jokenpo"), Some(GameKind::Rps));
        assert_eq!(GameKind::parse("chess"), None);
    }
}
