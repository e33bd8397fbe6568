//! Engine façade
//!
//! [`Engine`] owns the configuration, the random source and an optional
//! persistence collaborator, and exposes the operations a UI drives: new
//! game, simulate week, transfer, train, recruit. The world itself stays
//! with the caller and is passed in by reference.
//!
//! ```rust
//! use agent_core::config::EngineConfig;
//! use agent_core::engine::Engine;
//! use agent_core::models::Difficulty;
//!
//! let mut engine = Engine::with_seed(EngineConfig::testing(), 7);
//! let mut world = engine.initialize_new_game("Ana", Difficulty::Normal);
//! let summary = engine.simulate_week(&mut world).unwrap();
//! assert_eq!(summary.week, 2);
//! ```

#[cfg(test)]
mod scenario_tests;

use tracing::{debug, info, warn};

use crate::career::{self, RecruitOutcome, TrainingIntensity, TrainingOutcome};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::generation::generate_world;
use crate::market::{self, TransferOutcome};
use crate::models::{Attribute, Difficulty, PlayerId};
use crate::random::GameRng;
use crate::save::SaveStore;
use crate::season::{self, WeekSummary};
use crate::state::WorldState;

pub struct Engine {
    config: EngineConfig,
    rng: GameRng,
    store: Option<Box<dyn SaveStore>>,
}

impl Engine {
    /// Engine with an entropy-seeded random source
    pub fn new(config: EngineConfig) -> Self {
        Self { config, rng: GameRng::from_entropy(), store: None }
    }

    /// Replayable engine: same seed, same world, same seasons
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self { config, rng: GameRng::seeded(seed), store: None }
    }

    pub fn with_store(mut self, store: Box<dyn SaveStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> Option<&dyn SaveStore> {
        self.store.as_deref()
    }

    /// Generate a fresh world and hand it to the store
    pub fn initialize_new_game(&mut self, agent_name: &str, difficulty: Difficulty) -> WorldState {
        let world = generate_world(agent_name, difficulty, &self.config, &mut self.rng);
        info!(
            agent = agent_name,
            %difficulty,
            clubs = world.clubs.len(),
            players = world.players.len(),
            "New game initialized"
        );
        self.persist(&world);
        world
    }

    /// Last stored world; `None` on first run or without a store
    pub fn load_game(&self) -> Option<WorldState> {
        let world = self.store.as_ref()?.load();
        if world.is_none() {
            debug!("No saved game to load");
        }
        world
    }

    /// Explicit save; `false` without a store or on store failure
    pub fn save_game(&mut self, world: &WorldState) -> bool {
        match self.store.as_mut() {
            Some(store) => store.save(world),
            None => false,
        }
    }

    /// Advance one week.
    ///
    /// The pass runs on a working copy; on error the caller's world and the
    /// random source are exactly as they were before the call.
    pub fn simulate_week(&mut self, world: &mut WorldState) -> Result<WeekSummary> {
        let mut working = world.clone();
        let rng_checkpoint = self.rng.clone();

        match season::run_week(&mut working, &self.config, &mut self.rng) {
            Ok(summary) => {
                *world = working;
                self.autosave(world);
                Ok(summary)
            }
            Err(e) => {
                self.rng = rng_checkpoint;
                warn!(error = %e, week = world.week, season = world.season, "Week pass aborted");
                Err(e)
            }
        }
    }

    pub fn transfer_player(
        &mut self,
        world: &mut WorldState,
        player_id: PlayerId,
        target_club: &str,
        fee: f64,
    ) -> TransferOutcome {
        let outcome = market::transfer_player(world, player_id, target_club, fee, &self.config, &mut self.rng);
        if outcome.success {
            self.autosave(world);
        }
        outcome
    }

    pub fn train_player(
        &mut self,
        world: &mut WorldState,
        player_id: PlayerId,
        attribute: Attribute,
        intensity: TrainingIntensity,
    ) -> TrainingOutcome {
        let outcome = career::train_player(world, player_id, attribute, intensity, &self.config.economy);
        if outcome.success {
            self.autosave(world);
        }
        outcome
    }

    pub fn recruit_player(&mut self, world: &mut WorldState, player_id: PlayerId) -> RecruitOutcome {
        let outcome = career::recruit_player(world, player_id, &mut self.rng);
        if outcome.success {
            self.autosave(world);
        }
        outcome
    }

    pub fn mark_notification_read(&mut self, world: &mut WorldState, id: u64) -> bool {
        let changed = world.notifications.mark_read(id);
        if changed {
            self.autosave(world);
        }
        changed
    }

    pub fn mark_all_notifications_read(&mut self, world: &mut WorldState) {
        world.notifications.mark_all_read();
        self.autosave(world);
    }

    fn autosave(&mut self, world: &WorldState) {
        if world.settings.auto_save {
            self.persist(world);
        }
    }

    fn persist(&mut self, world: &WorldState) {
        if let Some(store) = self.store.as_mut() {
            if !store.save(world) {
                warn!(week = world.week, season = world.season, "Save failed");
            }
        }
    }
}
