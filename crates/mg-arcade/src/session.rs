//! Arcade session: one score, five engines, one command line.
//!
//! `Arcade::process` reads a line of player input, handles the global
//! commands itself and forwards everything else to whichever game is open.
//! Delayed transitions come back as a [`Timer`] on the [`Reply`]; the caller
//! waits out its delay and passes it to [`Arcade::fire`].

use std::fmt::Write as _;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use mg_core::{PendingTransition, SessionScore, Step};
use mg_games::{
    BattleClock, BridgeEngine, BridgePhase, BridgeStep, Difficulty, Fall, GuessingEngine,
    GuessingPhase, Hand, HangmanEngine, HangmanPhase, Mode, RpsEngine, RpsPhase, Side,
    TugOfWarEngine, TugPhase,
};

use crate::catalog::GameKind;
use crate::config::ArcadeConfig;
use crate::error::{ArcadeError, ArcadeResult};

const IGNORED: &str = "Nothing happens.";

/// A delayed transition waiting to be fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    /// A bridge fall; firing it spends a life.
    BridgeFall(PendingTransition<Fall>),
    /// A tug-of-war battle; firing it compares forces.
    Battle(PendingTransition<BattleClock>),
}

impl Timer {
    /// How long to wait before firing.
    pub fn delay(&self) -> Duration {
        match self {
            Self::BridgeFall(pending) => pending.delay,
            Self::Battle(pending) => pending.delay,
        }
    }
}

/// Response to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the player.
    pub text: String,
    /// A transition to fire once its delay has elapsed.
    pub timer: Option<Timer>,
}

impl Reply {
    /// A reply with a pending timer.
    pub fn with_timer(text: impl Into<String>, timer: Timer) -> Self {
        Self {
            text: text.into(),
            timer: Some(timer),
        }
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self { text, timer: None }
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        text.to_string().into()
    }
}

/// An interactive arcade session.
pub struct Arcade {
    config: ArcadeConfig,
    score: SessionScore,
    active: Option<GameKind>,
    hangman: HangmanEngine<StdRng>,
    bridge: BridgeEngine<StdRng>,
    guessing: GuessingEngine<StdRng>,
    rps: RpsEngine<StdRng>,
    tug_of_war: TugOfWarEngine<StdRng>,
}

impl Arcade {
    /// Create a session. Collaborators are loaded when their game is first
    /// opened.
    pub fn new(config: ArcadeConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(seed, "arcade session created");
        let mut master = StdRng::seed_from_u64(seed);

        Self {
            hangman: HangmanEngine::new(StdRng::from_rng(&mut master), config.hangman.clone()),
            bridge: BridgeEngine::new(StdRng::from_rng(&mut master), config.bridge.clone()),
            guessing: GuessingEngine::new(StdRng::from_rng(&mut master)),
            rps: RpsEngine::new(StdRng::from_rng(&mut master)),
            tug_of_war: TugOfWarEngine::new(
                StdRng::from_rng(&mut master),
                config.tug_of_war.clone(),
            ),
            config,
            score: SessionScore::new(),
            active: None,
        }
    }

    /// The session score.
    pub fn score(&self) -> &SessionScore {
        &self.score
    }

    /// The open game, if any.
    pub fn active(&self) -> Option<GameKind> {
        self.active
    }

    /// The hangman engine.
    pub fn hangman(&self) -> &HangmanEngine<StdRng> {
        &self.hangman
    }

    /// The glass bridge engine.
    pub fn bridge(&self) -> &BridgeEngine<StdRng> {
        &self.bridge
    }

    /// The number guessing engine.
    pub fn guessing(&self) -> &GuessingEngine<StdRng> {
        &self.guessing
    }

    /// The rock-paper-scissors engine.
    pub fn rps(&self) -> &RpsEngine<StdRng> {
        &self.rps
    }

    /// The tug-of-war engine.
    pub fn tug_of_war(&self) -> &TugOfWarEngine<StdRng> {
        &self.tug_of_war
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> ArcadeResult<Reply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new().into());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "games" => Ok(self.do_games().into()),
            "open" => self.do_open(rest).map(Reply::from),
            "score" => Ok(self.do_score().into()),
            "reset" => Ok(self.reset_session().into()),
            "help" => Ok(self.do_help(rest).into()),
            "quit" | "exit" => Ok("Goodbye!".into()),
            "status" => {
                let game = self.active.ok_or(ArcadeError::NoActiveGame)?;
                Ok(self.status(game).into())
            }
            _ if rest.is_empty() && GameKind::parse(&cmd).is_some() => {
                self.do_open(&cmd).map(Reply::from)
            }
            _ => {
                let game = self.active.ok_or(ArcadeError::NoActiveGame)?;
                match game {
                    GameKind::Hangman => self.hangman_command(&cmd, rest).map(Reply::from),
                    GameKind::Bridge => self.bridge_command(&cmd, rest),
                    GameKind::Guessing => self.guessing_command(&cmd, trimmed, rest).map(Reply::from),
                    GameKind::Rps => self.rps_command(&cmd, rest).map(Reply::from),
                    GameKind::TugOfWar => self.tug_command(&cmd, rest),
                }
            }
        }
    }

    /// Apply a delayed transition whose delay has elapsed.
    ///
    /// Stale timers (the round was quit or reset in the meantime) are
    /// discarded and reported as such.
    pub fn fire(&mut self, timer: Timer) -> ArcadeResult<String> {
        match timer {
            Timer::BridgeFall(pending) => {
                if self.bridge.settle(&pending) == Step::Ignored {
                    return Ok("(the fall no longer applies)".to_string());
                }
                Ok(format!(
                    "You lost a life. Lives: {}. Back to step 1 of the same bridge.\n{}",
                    self.bridge.lives(),
                    self.bridge_status()
                ))
            }
            Timer::Battle(pending) => {
                match self.tug_of_war.settle(&pending, &mut self.score) {
                    Step::Ignored => Ok("(the battle was called off)".to_string()),
                    _ => Ok(self.tug_status()),
                }
            }
        }
    }

    /// Zero the score and send every game back to its idle or selection
    /// phase. Pending timers are discarded.
    pub fn reset_session(&mut self) -> String {
        self.score.reset();
        self.hangman.return_to_selection();
        self.bridge.quit();
        self.guessing.back();
        self.rps.reset();
        self.tug_of_war.reset();
        info!("session reset");
        format!("Session reset. Score: {}", self.score)
    }

    fn do_games(&self) -> String {
        let mut out = String::from("Games:\n");
        for kind in GameKind::ALL {
            let _ = writeln!(out, "  {:<12} {:<20} {}", kind.id(), kind.title(), kind.description());
        }
        out.push_str("Open one with `open <game>`.");
        out
    }

    fn do_open(&mut self, rest: &str) -> ArcadeResult<String> {
        if rest.is_empty() {
            return Err(ArcadeError::InvalidChoice("usage: open <game>".to_string()));
        }
        let kind = GameKind::parse(rest).ok_or_else(|| ArcadeError::UnknownGame(rest.to_string()))?;
        self.active = Some(kind);
        debug!(game = kind.id(), "game opened");

        match kind {
            GameKind::Hangman => self.hangman.load_categories(&self.config.words)?,
            GameKind::TugOfWar => self.tug_of_war.load_catalog(&self.config.champions)?,
            _ => {}
        }
        Ok(format!("== {} ==\n{}", kind.title(), self.status(kind)))
    }

    fn do_score(&self) -> String {
        format!(
            "Score: {} ({} decided rounds)",
            self.score,
            self.score.decided()
        )
    }

    fn status(&self, kind: GameKind) -> String {
        match kind {
            GameKind::Hangman => self.hangman_status(),
            GameKind::Bridge => self.bridge_status(),
            GameKind::Guessing => self.guessing_status(),
            GameKind::Rps => self.rps_status(),
            GameKind::TugOfWar => self.tug_status(),
        }
    }

    // --- Hangman ---

    fn hangman_command(&mut self, cmd: &str, rest: &str) -> ArcadeResult<String> {
        let step = match cmd {
            "categories" => return Ok(self.hangman_categories()),
            "pick" => {
                if rest.is_empty() {
                    return Err(ArcadeError::InvalidChoice(
                        "usage: pick <category>".to_string(),
                    ));
                }
                self.hangman.select_category(rest)?
            }
            "random" => self.hangman.start_random()?,
            "again" => self.hangman.restart_same_category()?,
            "back" => self.hangman.return_to_selection(),
            "guess" => self.hangman_guess(rest)?,
            _ if cmd.chars().count() == 1 => self.hangman_guess(cmd)?,
            _ => return Err(ArcadeError::UnknownCommand(cmd.to_string())),
        };
        Ok(match step {
            Step::Ignored => IGNORED.to_string(),
            _ => self.hangman_status(),
        })
    }

    fn hangman_guess(&mut self, rest: &str) -> ArcadeResult<Step> {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(self.hangman.guess_letter(letter, &mut self.score)),
            _ => Err(ArcadeError::InvalidChoice(
                "guess one letter at a time".to_string(),
            )),
        }
    }

    fn hangman_categories(&self) -> String {
        let categories = self.hangman.categories();
        if categories.is_empty() {
            return "No categories loaded.".to_string();
        }
        format!("Categories: {}", categories.join(", "))
    }

    fn hangman_status(&self) -> String {
        let phase = self.hangman.phase();
        let round = match (phase, self.hangman.round()) {
            (HangmanPhase::Loading, _) => {
                return "Loading the word bank... (reopen the game to retry)".to_string();
            }
            (HangmanPhase::Selecting, _) | (_, None) => {
                return format!(
                    "{}\nPick one with `pick <category>` or `random`.",
                    self.hangman_categories()
                );
            }
            (_, Some(round)) => round,
        };

        let masked: Vec<String> = self
            .hangman
            .masked_word()
            .chars()
            .map(String::from)
            .collect();
        let mut out = format!(
            "Category: {}\nWord: {}\nMistakes: {}/{}",
            round.category(),
            masked.join(" "),
            round.mistakes(),
            self.hangman.max_mistakes()
        );
        if !round.letters_wrong().is_empty() {
            let wrong: String = round.letters_wrong().iter().collect();
            let _ = write!(out, "  Wrong: {wrong}");
        }
        match phase {
            HangmanPhase::Won => {
                let _ = write!(out, "\nYou won! The word was \"{}\".", round.word());
            }
            HangmanPhase::Lost => {
                let _ = write!(out, "\nYou lost! The word was \"{}\".", round.word());
            }
            _ => {}
        }
        out
    }

    // --- Bridge ---

    fn bridge_command(&mut self, cmd: &str, rest: &str) -> ArcadeResult<Reply> {
        let step = match cmd {
            "difficulty" => {
                let difficulty = Difficulty::parse(rest).ok_or_else(|| {
                    ArcadeError::InvalidChoice(format!(
                        "difficulty must be one of {}",
                        difficulty_list()
                    ))
                })?;
                self.bridge.configure(difficulty)
            }
            "start" => self.bridge.start(),
            "back" => self.bridge.quit(),
            _ => {
                let side = Side::parse(cmd).ok_or_else(|| ArcadeError::UnknownCommand(cmd.to_string()))?;
                return Ok(self.bridge_step(side));
            }
        };
        Ok(match step {
            Step::Ignored => IGNORED.to_string(),
            _ => self.bridge_status(),
        }
        .into())
    }

    fn bridge_step(&mut self, side: Side) -> Reply {
        match self.bridge.choose(side, &mut self.score) {
            BridgeStep::Ignored => IGNORED.into(),
            BridgeStep::Advanced => {
                format!("The {side} pane holds.\n{}", self.bridge_status()).into()
            }
            BridgeStep::Fell(pending) => Reply::with_timer(
                format!("The {side} pane shatters! You fall..."),
                Timer::BridgeFall(pending),
            ),
            BridgeStep::Finished(_) => self.bridge_status().into(),
        }
    }

    fn bridge_status(&self) -> String {
        let bridge = &self.bridge;
        let steps = bridge.difficulty().steps();
        match bridge.phase() {
            BridgePhase::Idle => format!(
                "Difficulty: {}. Choose with `difficulty <{}>`, then `start`.",
                bridge.difficulty(),
                difficulty_list()
            ),
            BridgePhase::Playing => {
                let mut out = format!(
                    "Step {} of {steps}. Lives: {}. Choose `left` or `right`.",
                    bridge.round(),
                    bridge.lives()
                );
                if bridge.awaiting_fall() {
                    out.push_str(" (falling...)");
                }
                out
            }
            BridgePhase::Won => format!(
                "You crossed all {steps} steps with {} lives left!",
                bridge.lives()
            ),
            BridgePhase::Lost => {
                let path: Vec<String> = bridge.secret_path().iter().map(Side::to_string).collect();
                format!(
                    "Out of lives on step {}. The safe path was: {}",
                    bridge.round(),
                    path.join(", ")
                )
            }
        }
    }

    // --- Guessing ---

    fn guessing_command(&mut self, cmd: &str, line: &str, rest: &str) -> ArcadeResult<String> {
        match cmd {
            "back" => {
                self.guessing.back();
                return Ok(self.guessing_status());
            }
            "start" => return self.guessing_start(rest),
            "guess" => return self.guessing_guess(rest),
            _ => {}
        }
        if Mode::parse(cmd).is_some() && rest.is_empty() {
            return self.guessing_start(cmd);
        }
        if self.guessing.phase() == GuessingPhase::Playing {
            return self.guessing_guess(line);
        }
        Err(ArcadeError::UnknownCommand(cmd.to_string()))
    }

    fn guessing_start(&mut self, rest: &str) -> ArcadeResult<String> {
        let mode = Mode::parse(rest)
            .ok_or_else(|| ArcadeError::InvalidChoice("mode must be `easy` or `hard`".to_string()))?;
        self.guessing.start(mode);
        Ok(self.guessing_status())
    }

    fn guessing_guess(&mut self, input: &str) -> ArcadeResult<String> {
        let feedback = self.guessing.guess(input, &mut self.score)?;
        let text = feedback.to_string();
        Ok(if text.is_empty() { IGNORED.to_string() } else { text })
    }

    fn guessing_status(&self) -> String {
        match (self.guessing.phase(), self.guessing.mode()) {
            (GuessingPhase::Playing, Some(mode)) => {
                let (low, high) = mode.range();
                format!(
                    "{mode}: guess a number from {low} to {high}. Attempts: {}",
                    self.guessing.attempts()
                )
            }
            (GuessingPhase::Won, Some(mode)) => format!(
                "{mode}: solved in {} attempts. `easy`, `hard` or `back`.",
                self.guessing.attempts()
            ),
            _ => format!(
                "Modes: easy = {}, hard = {}. Start with `easy` or `hard`.",
                Mode::Easy,
                Mode::Hard
            ),
        }
    }

    // --- Rock paper scissors ---

    fn rps_command(&mut self, cmd: &str, rest: &str) -> ArcadeResult<String> {
        let hand = match cmd {
            "again" | "back" => {
                self.rps.reset();
                return Ok(self.rps_status());
            }
            "throw" => Hand::parse(rest).ok_or_else(|| {
                ArcadeError::InvalidChoice("throw rock, paper or scissors".to_string())
            })?,
            _ => Hand::parse(cmd).ok_or_else(|| ArcadeError::UnknownCommand(cmd.to_string()))?,
        };
        if self.rps.phase() != RpsPhase::Idle {
            self.rps.reset();
        }
        self.rps.play(hand, &mut self.score);
        Ok(self.rps_status())
    }

    fn rps_status(&self) -> String {
        match self.rps.result() {
            Some(round) => format!(
                "You: {}  Computer: {}\n{round}",
                round.player, round.computer
            ),
            None => "Throw `rock`, `paper` or `scissors`.".to_string(),
        }
    }

    // --- Tug of war ---

    fn tug_command(&mut self, cmd: &str, rest: &str) -> ArcadeResult<Reply> {
        match cmd {
            "roster" | "search" => Ok(self.tug_roster(rest).into()),
            "pick" => {
                if rest.is_empty() {
                    return Err(ArcadeError::InvalidChoice(
                        "usage: pick <champion>".to_string(),
                    ));
                }
                let id = self
                    .tug_of_war
                    .catalog()
                    .and_then(|c| c.resolve(rest))
                    .unwrap_or(rest)
                    .to_string();
                let text = match self.tug_of_war.toggle_champion(&id)? {
                    Step::Ignored => IGNORED.to_string(),
                    _ => self.tug_status(),
                };
                Ok(text.into())
            }
            "battle" => match self.tug_of_war.battle()? {
                Some(pending) => {
                    let enemy = self.tug_of_war.enemy_team().join(", ");
                    Ok(Reply::with_timer(
                        format!("Battle! The enemy fields {enemy}. Pulling..."),
                        Timer::Battle(pending),
                    ))
                }
                None => Ok("Pick exactly 3 champions before battling.".into()),
            },
            "again" | "back" => {
                self.tug_of_war.reset();
                Ok(self.tug_status().into())
            }
            _ => Err(ArcadeError::UnknownCommand(cmd.to_string())),
        }
    }

    fn tug_roster(&self, term: &str) -> String {
        let champions = self.tug_of_war.search(term);
        if champions.is_empty() {
            return "No champions found.".to_string();
        }
        let mut out = String::new();
        for c in champions {
            let picked = if self.tug_of_war.my_team().contains(&c.id) {
                "*"
            } else {
                " "
            };
            let _ = writeln!(
                out,
                "{picked} {:<12} ATK {:>2}  DEF {:>2}  MAG {:>2}  force {:>2}",
                c.name,
                c.attack,
                c.defense,
                c.magic,
                c.force()
            );
        }
        out.trim_end().to_string()
    }

    fn tug_status(&self) -> String {
        let tug = &self.tug_of_war;
        let team = |ids: &[String]| {
            if ids.is_empty() {
                "(none)".to_string()
            } else {
                ids.join(", ")
            }
        };
        match tug.phase() {
            TugPhase::Loading => "Loading the champion roster... (reopen the game to retry)".to_string(),
            TugPhase::Drafting => format!(
                "Your team ({}/3): {} (force {})\n`pick <champion>` to add or remove, `battle` when ready.",
                tug.my_team().len(),
                team(tug.my_team()),
                tug.force(tug.my_team())
            ),
            TugPhase::Battling => format!(
                "Battling: {} vs {}...",
                team(tug.my_team()),
                team(tug.enemy_team())
            ),
            TugPhase::Resolved => {
                let mut out = format!(
                    "Your team: {}\nEnemy team: {}",
                    team(tug.my_team()),
                    team(tug.enemy_team())
                );
                if let Some(report) = tug.report() {
                    let _ = write!(out, "\n{report}");
                }
                out.push_str("\n`again` to draft a new team.");
                out
            }
        }
    }

    // --- Help ---

    fn do_help(&self, topic: &str) -> String {
        let kind = GameKind::parse(topic).or(if topic.is_empty() { self.active } else { None });
        match kind {
            Some(GameKind::Hangman) => "\
Hangman Commands:
  categories                    List word categories
  pick <category>               Start a round in a category
  random                        Start a round in a random category
  <letter> | guess <letter>     Guess a letter (accents are ignored)
  again                         New word, same category
  back                          Back to category selection"
                .to_string(),
            Some(GameKind::Bridge) => format!(
                "\
Glass Bridge Commands:
  difficulty <{}>  Set the bridge length (before starting)
  start                         Step onto the bridge
  left | right                  Pick a pane
  back                          Quit to difficulty selection",
                difficulty_list()
            ),
            Some(GameKind::Guessing) => "\
Guessing Commands:
  easy | hard                   Start a round (0-10 or 1-100)
  <number> | guess <number>     Make a guess
  back                          Back to mode selection"
                .to_string(),
            Some(GameKind::Rps) => "\
Rock Paper Scissors Commands:
  rock | paper | scissors       Throw a hand
  again                         Clear the last result"
                .to_string(),
            Some(GameKind::TugOfWar) => "\
Tug of War Commands:
  roster                        List champions
  search <term>                 Find champions by name
  pick <champion>               Add or remove a champion (3 max)
  battle                        Fight a random enemy team
  again                         Draft a new team"
                .to_string(),
            None => "\
Arcade Commands:
  games                         List games
  open <game>                   Open a game (or just type its id)
  status                        Show the open game
  score                         Show wins and losses
  reset                         Zero the score and restart every game
  help [game]                   Show help (hangman, bridge, guessing, rps, tug-of-war)
  quit                          Exit"
                .to_string(),
        }
    }
}

fn difficulty_list() -> String {
    let names: Vec<String> = Difficulty::ALL
        .iter()
        .map(|d| d.steps().to_string())
        .collect();
    names.join("|")
}
