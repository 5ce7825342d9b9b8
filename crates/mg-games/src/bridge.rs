//! The glass bridge: cross by picking the safe pane at every step.
//!
//! A secret path of left/right panes is drawn when a game starts and stays
//! fixed until the game ends. A wrong pick costs a life and sends the player
//! back to the first step of the same path, so surviving is a matter of
//! remembering which panes held.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use mg_core::{
    Outcome, PendingTransition, RandomSource, SessionScore, Step, Ticket, TicketIssuer,
};

use crate::config::BridgeConfig;

/// One of the two panes at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The left pane.
    Left,
    /// The right pane.
    Right,
}

impl Side {
    /// Both sides, in draw order.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Parse `left`/`l` or `right`/`r`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Bridge length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 3 steps.
    Trial,
    /// 5 steps.
    #[default]
    Easy,
    /// 10 steps.
    Medium,
    /// 15 steps.
    Hard,
}

impl Difficulty {
    /// Every difficulty from shortest to longest.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Trial,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Number of steps on the bridge.
    pub fn steps(self) -> u32 {
        match self {
            Self::Trial => 3,
            Self::Easy => 5,
            Self::Medium => 10,
            Self::Hard => 15,
        }
    }

    /// The difficulty with exactly `steps` steps.
    pub fn from_steps(steps: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.steps() == steps)
    }

    /// Parse a step count or a name (`trial`, `easy`, `medium`, `hard`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Ok(steps) = s.parse::<u32>() {
            return Self::from_steps(steps);
        }
        match s.as_str() {
            "trial" => Some(Self::Trial),
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trial => "Trial",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        write!(f, "{name} ({})", self.steps())
    }
}

/// Lifecycle of a bridge game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgePhase {
    /// Choosing a difficulty.
    Idle,
    /// On the bridge.
    Playing,
    /// Reached the far side.
    Won,
    /// Out of lives.
    Lost,
}

/// A step taken on the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footstep {
    /// The pane stepped on.
    pub side: Side,
    /// Whether it held.
    pub safe: bool,
}

/// A pending fall: once settled, a life is spent and the attempt restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fall;

/// Result of stepping onto a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeStep {
    /// Not accepted now (wrong phase or a fall is still showing).
    Ignored,
    /// The pane held; on to the next step.
    Advanced,
    /// The pane broke with lives to spare. Settle the fall after its delay.
    Fell(PendingTransition<Fall>),
    /// The game ended.
    Finished(Outcome),
}

/// Glass bridge round engine.
pub struct BridgeEngine<R> {
    rng: R,
    config: BridgeConfig,
    phase: BridgePhase,
    difficulty: Difficulty,
    round: u32,
    lives: u32,
    path: Vec<Side>,
    history: Vec<Footstep>,
    tickets: TicketIssuer,
    awaiting: Option<Ticket>,
}

impl<R: RandomSource> BridgeEngine<R> {
    /// Create an idle engine at the default difficulty.
    pub fn new(rng: R, config: BridgeConfig) -> Self {
        let lives = config.lives;
        Self {
            rng,
            config,
            phase: BridgePhase::Idle,
            difficulty: Difficulty::default(),
            round: 1,
            lives,
            path: Vec::new(),
            history: Vec::new(),
            tickets: TicketIssuer::new(),
            awaiting: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> BridgePhase {
        self.phase
    }

    /// Selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The step being attempted, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Lives left.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Steps taken on the current attempt.
    pub fn history(&self) -> &[Footstep] {
        &self.history
    }

    /// The safe side of every step. Empty before the first start.
    pub fn secret_path(&self) -> &[Side] {
        &self.path
    }

    /// Returns true while a fall is showing and input is blocked.
    pub fn awaiting_fall(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Steps still ahead of the player, counting the current one.
    pub fn steps_remaining(&self) -> u32 {
        match self.phase {
            BridgePhase::Playing => self.difficulty.steps() - self.round + 1,
            _ => 0,
        }
    }

    /// Pick the bridge length. Only accepted while idle.
    pub fn configure(&mut self, difficulty: Difficulty) -> Step {
        if self.phase != BridgePhase::Idle {
            debug!(phase = ?self.phase, "difficulty change ignored");
            return Step::Ignored;
        }
        self.difficulty = difficulty;
        Step::Continued
    }

    /// Draw a fresh secret path and step onto the bridge with full lives.
    ///
    /// Ignored while a game is already in progress.
    pub fn start(&mut self) -> Step {
        if self.phase == BridgePhase::Playing {
            return Step::Ignored;
        }
        let steps = self.difficulty.steps() as usize;
        self.path = (0..steps)
            .map(|_| Side::ALL[self.rng.index(Side::ALL.len())])
            .collect();
        self.lives = self.config.lives;
        self.round = 1;
        self.history.clear();
        self.awaiting = None;
        self.phase = BridgePhase::Playing;
        debug!(steps, "bridge game started");
        Step::Continued
    }

    /// Step onto a pane.
    pub fn choose(&mut self, side: Side, score: &mut SessionScore) -> BridgeStep {
        if self.phase != BridgePhase::Playing || self.awaiting.is_some() {
            debug!(%side, phase = ?self.phase, "step ignored");
            return BridgeStep::Ignored;
        }
        let safe = self.path[(self.round - 1) as usize] == side;
        self.history.push(Footstep { side, safe });

        if safe {
            if self.round == self.difficulty.steps() {
                self.phase = BridgePhase::Won;
                score.record(Outcome::Win);
                info!(lives = self.lives, "bridge crossed");
                return BridgeStep::Finished(Outcome::Win);
            }
            self.round += 1;
            return BridgeStep::Advanced;
        }

        if self.lives > 1 {
            let ticket = self.tickets.issue();
            self.awaiting = Some(ticket);
            debug!(%ticket, round = self.round, "pane broke");
            return BridgeStep::Fell(PendingTransition::new(
                ticket,
                Fall,
                self.config.fall_delay,
            ));
        }

        self.lives = 0;
        self.phase = BridgePhase::Lost;
        score.record(Outcome::Loss);
        info!(round = self.round, "bridge lost");
        BridgeStep::Finished(Outcome::Loss)
    }

    /// Apply a fall once its delay has elapsed: one life spent, back to the
    /// first step, same secret path.
    ///
    /// Ignored if the fall is stale (the game was quit or restarted since).
    pub fn settle(&mut self, pending: &PendingTransition<Fall>) -> Step {
        if !pending.matches(self.awaiting) {
            debug!(ticket = %pending.ticket, "stale fall discarded");
            return Step::Ignored;
        }
        self.awaiting = None;
        self.lives -= 1;
        self.round = 1;
        self.history.clear();
        Step::Continued
    }

    /// Abandon the game and return to difficulty selection. The score is
    /// untouched and any pending fall is discarded.
    pub fn quit(&mut self) -> Step {
        if self.phase == BridgePhase::Idle {
            return Step::Ignored;
        }
        self.phase = BridgePhase::Idle;
        self.awaiting = None;
        self.round = 1;
        self.lives = self.config.lives;
        self.history.clear();
        self.path.clear();
        Step::Continued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scripted(path: &[usize], difficulty: Difficulty) -> BridgeEngine<ScriptedSource> {
        let mut engine = BridgeEngine::new(ScriptedSource::new(path.to_vec()), BridgeConfig::default());
        engine.configure(difficulty);
        engine.start();
        engine
    }

    fn fall(engine: &mut BridgeEngine<ScriptedSource>, side: Side, score: &mut SessionScore) {
        match engine.choose(side, score) {
            BridgeStep::Fell(pending) => {
                assert_eq!(engine.settle(&pending), Step::Continued);
            }
            other => panic!("expected a fall, got {other:?}"),
        }
    }

    #[test]
    fn side_parse_and_display() {
        assert_eq!(Side::parse("L"), Some(Side::Left));
        assert_eq!(Side::parse(" right "), Some(Side::Right));
        assert_eq!(Side::parse("up"), None);
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn difficulty_steps_and_parse() {
        let steps: Vec<_> = Difficulty::ALL.iter().map(|d| d.steps()).collect();
        assert_eq!(steps, vec![3, 5, 10, 15]);
        assert_eq!(Difficulty::parse("10"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("7"), None);
        assert_eq!(Difficulty::Easy.to_string(), "Easy (5)");
    }

    #[test]
    fn three_step_scenario() {
        let mut engine = scripted(&[0, 1, 0], Difficulty::Trial);
        let mut score = SessionScore::new();
        assert_eq!(engine.secret_path(), [Side::Left, Side::Right, Side::Left]);

        assert_eq!(engine.choose(Side::Left, &mut score), BridgeStep::Advanced);
        assert_eq!(engine.choose(Side::Right, &mut score), BridgeStep::Advanced);
        assert_eq!(
            engine.choose(Side::Left, &mut score),
            BridgeStep::Finished(Outcome::Win)
        );
        assert_eq!(engine.phase(), BridgePhase::Won);
        assert_eq!(engine.round(), 3);
        assert_eq!(score.wins(), 1);
        assert!(engine.history().iter().all(|s| s.safe));
    }

    #[test]
    fn lives_run_out_on_third_fall() {
        let mut engine = scripted(&[0], Difficulty::Easy);
        let mut score = SessionScore::new();
        assert_eq!(engine.lives(), 3);

        fall(&mut engine, Side::Right, &mut score);
        assert_eq!(engine.lives(), 2);
        fall(&mut engine, Side::Right, &mut score);
        assert_eq!(engine.lives(), 1);

        assert_eq!(
            engine.choose(Side::Right, &mut score),
            BridgeStep::Finished(Outcome::Loss)
        );
        assert_eq!(engine.lives(), 0);
        assert_eq!(engine.phase(), BridgePhase::Lost);
        assert_eq!(score.losses(), 1);
    }

    #[test]
    fn fall_keeps_path_and_resets_position() {
        let mut engine = scripted(&[0, 1, 1, 0, 1], Difficulty::Easy);
        let mut score = SessionScore::new();
        let path = engine.secret_path().to_vec();

        engine.choose(Side::Left, &mut score);
        engine.choose(Side::Right, &mut score);
        assert_eq!(engine.round(), 3);

        let BridgeStep::Fell(pending) = engine.choose(Side::Left, &mut score) else {
            panic!("expected a fall");
        };
        // Until settled, the fall is on screen: lives and history unchanged.
        assert_eq!(engine.lives(), 3);
        assert_eq!(engine.history().len(), 3);
        assert!(!engine.history()[2].safe);

        engine.settle(&pending);
        assert_eq!(engine.round(), 1);
        assert!(engine.history().is_empty());
        assert_eq!(engine.secret_path(), path.as_slice());
    }

    #[test]
    fn input_blocked_while_falling() {
        let mut engine = scripted(&[0], Difficulty::Trial);
        let mut score = SessionScore::new();
        let BridgeStep::Fell(pending) = engine.choose(Side::Right, &mut score) else {
            panic!("expected a fall");
        };
        assert!(engine.awaiting_fall());
        assert_eq!(engine.choose(Side::Left, &mut score), BridgeStep::Ignored);
        engine.settle(&pending);
        assert!(!engine.awaiting_fall());
        assert_eq!(engine.choose(Side::Left, &mut score), BridgeStep::Advanced);
    }

    #[test]
    fn quit_discards_pending_fall() {
        let mut engine = scripted(&[0], Difficulty::Trial);
        let mut score = SessionScore::new();
        let BridgeStep::Fell(pending) = engine.choose(Side::Right, &mut score) else {
            panic!("expected a fall");
        };
        assert_eq!(engine.quit(), Step::Continued);
        assert_eq!(engine.settle(&pending), Step::Ignored);
        assert_eq!(engine.phase(), BridgePhase::Idle);
        assert_eq!(engine.lives(), 3);
        assert_eq!(score, SessionScore::new());
    }

    #[test]
    fn stale_fall_ignored_after_restart() {
        let mut engine = scripted(&[0], Difficulty::Trial);
        let mut score = SessionScore::new();
        let BridgeStep::Fell(old) = engine.choose(Side::Right, &mut score) else {
            panic!("expected a fall");
        };
        engine.quit();
        engine.start();
        let BridgeStep::Fell(new) = engine.choose(Side::Right, &mut score) else {
            panic!("expected a fall");
        };
        assert_eq!(engine.settle(&old), Step::Ignored);
        assert_eq!(engine.lives(), 3);
        assert_eq!(engine.settle(&new), Step::Continued);
        assert_eq!(engine.lives(), 2);
        // Settling twice does nothing.
        assert_eq!(engine.settle(&new), Step::Ignored);
    }

    #[test]
    fn configure_only_while_idle() {
        let mut engine = scripted(&[0], Difficulty::Trial);
        assert_eq!(engine.configure(Difficulty::Hard), Step::Ignored);
        assert_eq!(engine.difficulty(), Difficulty::Trial);
        engine.quit();
        assert_eq!(engine.configure(Difficulty::Hard), Step::Continued);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn terminal_phase_ignores_steps() {
        let mut engine = scripted(&[0], Difficulty::Trial);
        let mut score = SessionScore::new();
        for _ in 0..3 {
            engine.choose(Side::Left, &mut score);
        }
        assert_eq!(engine.phase(), BridgePhase::Won);
        assert_eq!(engine.choose(Side::Left, &mut score), BridgeStep::Ignored);
        assert_eq!(engine.start(), Step::Continued);
        assert_eq!(engine.phase(), BridgePhase::Playing);
    }

    #[test]
    fn quit_does_not_touch_score() {
        let mut engine = scripted(&[0], Difficulty::Trial);
        let mut score = SessionScore::new();
        engine.choose(Side::Left, &mut score);
        engine.quit();
        assert_eq!(score, SessionScore::new());
        assert!(engine.secret_path().is_empty());
        assert_eq!(engine.quit(), Step::Ignored);
    }

    #[test]
    fn steps_remaining_counts_down() {
        let mut engine = scripted(&[0], Difficulty::Easy);
        let mut score = SessionScore::new();
        assert_eq!(engine.steps_remaining(), 5);
        engine.choose(Side::Left, &mut score);
        assert_eq!(engine.steps_remaining(), 4);
    }

    #[test]
    fn correct_walk_wins_every_difficulty() {
        for (seed, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let mut engine = BridgeEngine::new(StdRng::seed_from_u64(seed as u64), BridgeConfig::default());
            let mut score = SessionScore::new();
            engine.configure(difficulty);
            engine.start();
            let path = engine.secret_path().to_vec();
            assert_eq!(path.len() as u32, difficulty.steps());

            // Fall once on the first step, then walk the remembered path.
            let wrong = match path[0] {
                Side::Left => Side::Right,
                Side::Right => Side::Left,
            };
            let BridgeStep::Fell(pending) = engine.choose(wrong, &mut score) else {
                panic!("expected a fall");
            };
            engine.settle(&pending);
            assert_eq!(engine.secret_path(), path.as_slice());

            let mut choices = 0;
            for side in &path {
                choices += 1;
                if let BridgeStep::Finished(outcome) = engine.choose(*side, &mut score) {
                    assert_eq!(outcome, Outcome::Win);
                }
            }
            assert_eq!(choices, difficulty.steps());
            assert_eq!(engine.phase(), BridgePhase::Won);
            assert_eq!(engine.lives(), 2);
        }
    }

    #[test]
    fn path_draws_both_sides() {
        let mut engine = BridgeEngine::new(StdRng::seed_from_u64(11), BridgeConfig::default());
        engine.configure(Difficulty::Hard);
        let mut lefts = 0;
        for _ in 0..40 {
            engine.start();
            lefts += engine.secret_path().iter().filter(|s| **s == Side::Left).count();
            engine.quit();
        }
        // 600 draws; a fair coin lands well inside this band.
        assert!((200..400).contains(&lefts), "lefts = {lefts}");
    }
}
