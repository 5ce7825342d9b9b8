//! Rock-paper-scissors against a uniformly random opponent.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use mg_core::{Outcome, RandomSource, SessionScore, Step};

/// A throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Hand {
    /// All throws, in draw order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// The throw this one beats.
    pub fn beats(self) -> Hand {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }

    /// Parse a throw by name or initial, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Some(Self::Rock),
            "paper" | "p" => Some(Self::Paper),
            "scissors" | "s" => Some(Self::Scissors),
            _ => None,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

/// Outcome for `player` facing `computer`.
pub fn judge(player: Hand, computer: Hand) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

/// A resolved throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsRound {
    /// What the player threw.
    pub player: Hand,
    /// What the computer threw.
    pub computer: Hand,
    /// How it ended for the player.
    pub outcome: Outcome,
}

impl std::fmt::Display for RpsRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Outcome::Draw => write!(f, "Draw! Both chose {}.", self.player),
            Outcome::Win => write!(f, "You win! {} beats {}.", self.player, self.computer),
            Outcome::Loss => write!(f, "You lose! {} beats {}.", self.computer, self.player),
        }
    }
}

/// Lifecycle of a rock-paper-scissors round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpsPhase {
    /// Waiting for the player's throw.
    Idle,
    /// Both hands shown.
    Resolved(RpsRound),
}

/// Rock-paper-scissors round engine.
pub struct RpsEngine<R> {
    rng: R,
    phase: RpsPhase,
}

impl<R: RandomSource> RpsEngine<R> {
    /// Create an idle engine.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            phase: RpsPhase::Idle,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RpsPhase {
        self.phase
    }

    /// The resolved round, if any.
    pub fn result(&self) -> Option<RpsRound> {
        match self.phase {
            RpsPhase::Resolved(round) => Some(round),
            RpsPhase::Idle => None,
        }
    }

    /// Throw `player` against a uniformly drawn computer hand.
    ///
    /// Only accepted while idle; call [`reset`](Self::reset) to play again.
    pub fn play(&mut self, player: Hand, score: &mut SessionScore) -> Step {
        if self.phase != RpsPhase::Idle {
            debug!(%player, "throw ignored, round already resolved");
            return Step::Ignored;
        }
        let computer = Hand::ALL[self.rng.index(Hand::ALL.len())];
        let outcome = judge(player, computer);
        self.phase = RpsPhase::Resolved(RpsRound {
            player,
            computer,
            outcome,
        });
        score.record(outcome);
        info!(%player, %computer, %outcome, "rps round resolved");
        Step::Finished(outcome)
    }

    /// Clear the result and wait for the next throw.
    pub fn reset(&mut self) {
        self.phase = RpsPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::ScriptedSource;

    #[test]
    fn truth_table() {
        use Hand::*;
        let expected = [
            (Rock, Rock, Outcome::Draw),
            (Rock, Paper, Outcome::Loss),
            (Rock, Scissors, Outcome::Win),
            (Paper, Rock, Outcome::Win),
            (Paper, Paper, Outcome::Draw),
            (Paper, Scissors, Outcome::Loss),
            (Scissors, Rock, Outcome::Loss),
            (Scissors, Paper, Outcome::Win),
            (Scissors, Scissors, Outcome::Draw),
        ];
        for (player, computer, outcome) in expected {
            assert_eq!(judge(player, computer), outcome, "{player} vs {computer}");
        }
        let count = |o: Outcome| expected.iter().filter(|e| e.2 == o).count();
        assert_eq!(count(Outcome::Win), 3);
        assert_eq!(count(Outcome::Loss), 3);
        assert_eq!(count(Outcome::Draw), 3);
    }

    #[test]
    fn engine_matches_judge_for_every_pairing() {
        for (i, computer) in Hand::ALL.into_iter().enumerate() {
            for player in Hand::ALL {
                let mut engine = RpsEngine::new(ScriptedSource::new(vec![i]));
                let mut score = SessionScore::new();
                let step = engine.play(player, &mut score);
                let round = engine.result().unwrap();
                assert_eq!(round.computer, computer);
                assert_eq!(step, Step::Finished(judge(player, computer)));
            }
        }
    }

    #[test]
    fn draw_leaves_score() {
        let mut engine = RpsEngine::new(ScriptedSource::new(vec![0]));
        let mut score = SessionScore::new();
        assert_eq!(engine.play(Hand::Rock, &mut score), Step::Finished(Outcome::Draw));
        assert_eq!(score, SessionScore::new());
    }

    #[test]
    fn win_and_loss_update_score() {
        let mut engine = RpsEngine::new(ScriptedSource::new(vec![2, 1]));
        let mut score = SessionScore::new();
        engine.play(Hand::Rock, &mut score); // vs scissors
        engine.reset();
        engine.play(Hand::Rock, &mut score); // vs paper
        assert_eq!(score.wins(), 1);
        assert_eq!(score.losses(), 1);
    }

    #[test]
    fn resolved_round_ignores_throws() {
        let mut engine = RpsEngine::new(ScriptedSource::new(vec![2]));
        let mut score = SessionScore::new();
        engine.play(Hand::Rock, &mut score);
        assert_eq!(engine.play(Hand::Paper, &mut score), Step::Ignored);
        assert_eq!(score.wins(), 1);
        engine.reset();
        assert_eq!(engine.phase(), RpsPhase::Idle);
        assert!(engine.result().is_none());
    }

    #[test]
    fn messages() {
        let round = RpsRound {
            player: Hand::Paper,
            computer: Hand::Rock,
            outcome: Outcome::Win,
        };
        assert_eq!(round.to_string(), "You win! paper beats rock.");
        let round = RpsRound {
            player: Hand::Paper,
            computer: Hand::Scissors,
            outcome: Outcome::Loss,
        };
        assert_eq!(round.to_string(), "You lose! scissors beats paper.");
    }

    #[test]
    fn parse_hands() {
        assert_eq!(Hand::parse("Rock"), Some(Hand::Rock));
        assert_eq!(Hand::parse("s"), Some(Hand::Scissors));
        assert_eq!(Hand::parse("lizard"), None);
    }
}
