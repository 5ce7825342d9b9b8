//! Tug-of-war: draft three champions and pull against a random enemy team.
//!
//! Whoever brings more total force wins. The enemy is drawn from the rest of
//! the catalog only after the player's team is locked in, and the result is
//! held back until the battle animation has run.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use mg_core::{
    GameError, GameResult, Outcome, PendingTransition, RandomSource, SessionScore, Step, Ticket,
    TicketIssuer,
};

use crate::champions::{Champion, ChampionCatalog, ChampionSource};
use crate::config::TugOfWarConfig;

/// Champions on a full team.
pub const TEAM_SIZE: usize = 3;

/// Lifecycle of a tug-of-war round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TugPhase {
    /// Waiting for the champion catalog.
    Loading,
    /// Picking the player's team.
    Drafting,
    /// Teams locked in; the result is pending.
    Battling,
    /// Forces compared.
    Resolved,
}

/// A pending battle: once settled, forces are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleClock;

/// The result of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// How it ended for the player.
    pub outcome: Outcome,
    /// Total force of the player's team.
    pub my_force: u64,
    /// Total force of the enemy team.
    pub enemy_force: u64,
}

impl std::fmt::Display for BattleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = match self.outcome {
            Outcome::Win => "Victory!",
            Outcome::Loss => "Defeat!",
            Outcome::Draw => "Draw!",
        };
        write!(f, "{verdict} {} vs {}", self.my_force, self.enemy_force)
    }
}

/// Tug-of-war round engine.
pub struct TugOfWarEngine<R> {
    rng: R,
    config: TugOfWarConfig,
    catalog: Option<ChampionCatalog>,
    phase: TugPhase,
    my_team: Vec<String>,
    enemy_team: Vec<String>,
    report: Option<BattleReport>,
    tickets: TicketIssuer,
    awaiting: Option<Ticket>,
}

impl<R: RandomSource> TugOfWarEngine<R> {
    /// Create an engine waiting for its catalog.
    pub fn new(rng: R, config: TugOfWarConfig) -> Self {
        Self {
            rng,
            config,
            catalog: None,
            phase: TugPhase::Loading,
            my_team: Vec::new(),
            enemy_team: Vec::new(),
            report: None,
            tickets: TicketIssuer::new(),
            awaiting: None,
        }
    }

    /// Create an engine that is already drafting from `catalog`.
    pub fn with_catalog(rng: R, config: TugOfWarConfig, catalog: ChampionCatalog) -> Self {
        let mut engine = Self::new(rng, config);
        engine.catalog = Some(catalog);
        engine.phase = TugPhase::Drafting;
        engine
    }

    /// Load the catalog once. On failure the engine stays in [`TugPhase::Loading`].
    pub fn load_catalog(&mut self, source: &ChampionSource) -> GameResult<()> {
        if self.catalog.is_some() {
            return Ok(());
        }
        match source.load() {
            Ok(catalog) => {
                debug!(champions = catalog.len(), "champion catalog loaded");
                self.catalog = Some(catalog);
                self.phase = TugPhase::Drafting;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "champion catalog failed to load");
                Err(e)
            }
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TugPhase {
        self.phase
    }

    /// The loaded catalog, if any.
    pub fn catalog(&self) -> Option<&ChampionCatalog> {
        self.catalog.as_ref()
    }

    /// The player's picks, in pick order.
    pub fn my_team(&self) -> &[String] {
        &self.my_team
    }

    /// The drawn enemy team. Empty while drafting.
    pub fn enemy_team(&self) -> &[String] {
        &self.enemy_team
    }

    /// The battle result once resolved.
    pub fn report(&self) -> Option<BattleReport> {
        self.report
    }

    /// Returns true while the battle result is pending.
    pub fn awaiting_battle(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Champions whose name contains `term`. Empty while loading.
    pub fn search(&self, term: &str) -> Vec<&Champion> {
        self.catalog
            .as_ref()
            .map(|c| c.search(term))
            .unwrap_or_default()
    }

    /// Summed attack, defense and magic of `team`. Unknown ids count as zero.
    pub fn force(&self, team: &[String]) -> u64 {
        let Some(catalog) = self.catalog.as_ref() else {
            return 0;
        };
        team.iter()
            .filter_map(|id| catalog.get(id))
            .map(Champion::force)
            .sum()
    }

    /// Add `id` to the team, or take it out if already picked.
    ///
    /// Adding to a full team is ignored, as is anything outside drafting.
    pub fn toggle_champion(&mut self, id: &str) -> GameResult<Step> {
        if self.phase != TugPhase::Drafting {
            debug!(id, phase = ?self.phase, "pick ignored");
            return Ok(Step::Ignored);
        }
        let catalog = self.catalog.as_ref().ok_or_else(|| GameError::UnknownChampion(id.to_string()))?;
        if !catalog.contains(id) {
            return Err(GameError::UnknownChampion(id.to_string()));
        }
        if let Some(pos) = self.my_team.iter().position(|picked| picked == id) {
            self.my_team.remove(pos);
            return Ok(Step::Continued);
        }
        if self.my_team.len() >= TEAM_SIZE {
            debug!(id, "team full");
            return Ok(Step::Ignored);
        }
        self.my_team.push(id.to_string());
        Ok(Step::Continued)
    }

    /// Lock in the team and draw the enemy from the rest of the catalog.
    ///
    /// Returns `None` if not drafting or the team is not full. Settle the
    /// returned transition after its delay to resolve the battle.
    pub fn battle(&mut self) -> GameResult<Option<PendingTransition<BattleClock>>> {
        if self.phase != TugPhase::Drafting || self.my_team.len() != TEAM_SIZE {
            debug!(phase = ?self.phase, picked = self.my_team.len(), "battle ignored");
            return Ok(None);
        }
        let Some(catalog) = self.catalog.as_ref() else {
            return Ok(None);
        };
        let pool: Vec<&str> = catalog
            .ids()
            .into_iter()
            .filter(|id| !self.my_team.iter().any(|picked| picked == id))
            .collect();
        if pool.len() < TEAM_SIZE {
            return Err(GameError::NotEnoughChampions {
                needed: TEAM_SIZE,
                available: pool.len(),
            });
        }
        self.enemy_team = self
            .rng
            .sample(pool.len(), TEAM_SIZE)
            .into_iter()
            .map(|i| pool[i].to_string())
            .collect();

        let ticket = self.tickets.issue();
        self.awaiting = Some(ticket);
        self.phase = TugPhase::Battling;
        debug!(%ticket, enemy = ?self.enemy_team, "battle started");
        Ok(Some(PendingTransition::new(
            ticket,
            BattleClock,
            self.config.battle_delay,
        )))
    }

    /// Compare forces once the battle delay has elapsed.
    ///
    /// Ignored if the battle is stale (the round was reset since).
    pub fn settle(&mut self, pending: &PendingTransition<BattleClock>, score: &mut SessionScore) -> Step {
        if !pending.matches(self.awaiting) {
            debug!(ticket = %pending.ticket, "stale battle discarded");
            return Step::Ignored;
        }
        self.awaiting = None;
        let my_force = self.force(&self.my_team);
        let enemy_force = self.force(&self.enemy_team);
        let outcome = match my_force.cmp(&enemy_force) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        self.report = Some(BattleReport {
            outcome,
            my_force,
            enemy_force,
        });
        self.phase = TugPhase::Resolved;
        score.record(outcome);
        info!(my_force, enemy_force, %outcome, "battle resolved");
        Step::Finished(outcome)
    }

    /// Clear both teams and the result. Any pending battle is discarded.
    pub fn reset(&mut self) {
        self.my_team.clear();
        self.enemy_team.clear();
        self.report = None;
        self.awaiting = None;
        self.phase = if self.catalog.is_some() {
            TugPhase::Drafting
        } else {
            TugPhase::Loading
        };
    }
}
