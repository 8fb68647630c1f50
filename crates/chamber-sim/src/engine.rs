//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player, settings, score
//! and upgrades. It processes player commands, runs all systems in a fixed
//! order and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chamber_core::commands::{Movement, PlayerCommand};
use chamber_core::constants::*;
use chamber_core::enums::GamePhase;
use chamber_core::events::GameEvent;
use chamber_core::player::Player;
use chamber_core::settings::{SettingKey, Settings};
use chamber_core::state::{GameStateSnapshot, HudView, PlayerView};
use chamber_core::types::{Camera, Position, SimTime};
use chamber_progression::maps::{MapData, MapRotation};
use chamber_progression::upgrades::{Purchase, UpgradeBook, UpgradeError};

use crate::systems;
use crate::systems::power_ups::{ActivePowerUps, EffectiveStats};
use crate::systems::waves::{WaveOutcome, WaveState};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Maps played in order.
    pub maps: MapRotation,
    /// Viewport size in world units (width, height).
    pub viewport: (f64, f64),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            maps: MapRotation::builtin(),
            viewport: (VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        }
    }
}

/// Absolute "ready-at" timestamps in simulation seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldowns {
    pub shoot_ready_at: f64,
    pub reload_ready_at: f64,
    pub shield_ready_at: f64,
    /// Shield is up while `now < shield_end`.
    pub shield_end: f64,
}

/// What happened during a tick that the caller must react to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub player_died: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    player: Player,
    movement: Movement,
    settings: Settings,
    upgrades: UpgradeBook,
    score: u32,
    maps: MapRotation,
    waves: WaveState,
    active_power_ups: ActivePowerUps,
    cooldowns: Cooldowns,
    effective: EffectiveStats,
    camera: Camera,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let settings = Settings::default();
        let player = Player::new(settings.max_ammo());
        let mut camera = Camera::new(config.viewport.0, config.viewport.1);
        systems::camera::snap(&mut camera, player.position);
        let effective = systems::power_ups::effective_stats(&ActivePowerUps::default(), &settings, 0.0);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player,
            movement: Movement::default(),
            settings,
            upgrades: UpgradeBook::default(),
            score: 0,
            maps: config.maps,
            waves: WaveState::default(),
            active_power_ups: ActivePowerUps::default(),
            cooldowns: Cooldowns::default(),
            effective,
            camera,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, then advance the simulation by one tick if
    /// the session is active. Paused and idle engines do not advance time.
    pub fn tick(&mut self) -> TickReport {
        self.events.clear();
        self.process_commands();

        let mut report = TickReport::default();
        if self.phase == GamePhase::Active {
            let now = self.time.now();
            report.player_died = self.run_systems(now);
            self.time.advance(self.settings.tick_duration());
            if report.player_died {
                self.phase = GamePhase::Idle;
            }
        }
        report
    }

    /// Begin a fresh session on the current map. Score, settings and
    /// upgrades carry over; everything else is reset.
    pub fn start_game(&mut self) {
        self.world.clear();
        self.command_queue.clear();
        self.player.reset(self.settings.max_ammo());
        self.movement = Movement::default();
        self.active_power_ups.clear();
        self.cooldowns = Cooldowns::default();
        self.waves.reset(self.time.now());
        systems::camera::snap(&mut self.camera, self.player.position);
        self.phase = GamePhase::Active;
        tracing::info!(
            map = %self.maps.current().name,
            waves = self.maps.current().wave_count(),
            score = self.score,
            "Session started"
        );
    }

    /// Discard in-flight entities and return to idle.
    pub fn abandon_session(&mut self) {
        if self.phase != GamePhase::Idle {
            tracing::info!(score = self.score, wave = self.waves.wave, "Session abandoned");
        }
        self.world.clear();
        self.command_queue.clear();
        self.movement = Movement::default();
        self.phase = GamePhase::Idle;
    }

    /// Build a read-only snapshot for the renderer. Events are those of the
    /// most recent tick.
    pub fn snapshot(&self) -> GameStateSnapshot {
        let now = self.time.now();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.maps.current(),
            self.camera,
            self.player_view(now),
            self.hud_view(now),
            self.events.clone(),
        )
    }

    /// Buy an upgrade with score. Settings changes reach the live player.
    pub fn purchase_upgrade(&mut self, index: usize) -> Result<Purchase, UpgradeError> {
        let purchase = self
            .upgrades
            .purchase(index, &mut self.score, &mut self.settings)?;
        self.sync_player_stats();
        tracing::debug!(
            index,
            cost = purchase.cost,
            level = purchase.new_level,
            coins_left = self.score,
            "Upgrade purchased"
        );
        Ok(purchase)
    }

    /// Step a tunable within its range.
    pub fn adjust_setting(&mut self, key: SettingKey, direction: i32) {
        self.settings.adjust(key, direction);
        self.sync_player_stats();
        tracing::debug!(key = key.as_str(), value = self.settings.get(key), "Setting adjusted");
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Direct settings access. The live player is re-synced on the next tick.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn upgrades(&self) -> &UpgradeBook {
        &self.upgrades
    }

    /// Score doubles as the upgrade currency.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn current_map(&self) -> &MapData {
        self.maps.current()
    }

    pub fn wave_state(&self) -> WaveState {
        self.waves
    }

    pub fn active_power_ups(&self) -> &ActivePowerUps {
        &self.active_power_ups
    }

    pub fn cooldowns(&self) -> Cooldowns {
        self.cooldowns
    }

    /// Events produced by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn shield_active(&self) -> bool {
        self.time.now() < self.cooldowns.shield_end
    }

    /// Start a session with a wave already marked active, so no wave spawns
    /// until the test's own enemies are gone.
    #[cfg(test)]
    pub fn begin_test_session(&mut self) {
        self.start_game();
        self.waves.active = true;
    }

    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: Position) -> hecs::Entity {
        let speed = self.settings.enemy_speed;
        world_setup::spawn_enemy(&mut self.world, &mut self.rng, position, speed)
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub fn active_power_ups_mut(&mut self) -> &mut ActivePowerUps {
        &mut self.active_power_ups
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let now = self.time.now();
        match command {
            PlayerCommand::SetMovement { movement } => {
                self.movement = movement;
            }
            PlayerCommand::Fire { target } => {
                if self.phase == GamePhase::Active {
                    self.fire(target, now);
                }
            }
            PlayerCommand::Reload => {
                if self.phase != GamePhase::Idle
                    && now >= self.cooldowns.reload_ready_at
                    && self.player.ammo < self.player.max_ammo
                {
                    self.player.ammo = self.player.max_ammo;
                    self.cooldowns.reload_ready_at = now + RELOAD_TIME;
                    tracing::debug!(ammo = self.player.ammo, "Reloaded");
                }
            }
            PlayerCommand::TogglePause => {
                self.phase = match self.phase {
                    GamePhase::Active => GamePhase::Paused,
                    GamePhase::Paused => GamePhase::Active,
                    GamePhase::Idle => GamePhase::Idle,
                };
                tracing::info!(phase = ?self.phase, "Pause toggled");
            }
            PlayerCommand::ActivateShield => {
                if self.phase != GamePhase::Idle && now >= self.cooldowns.shield_ready_at {
                    self.cooldowns.shield_end = now + self.settings.shield_duration;
                    self.cooldowns.shield_ready_at = now + self.settings.shield_cooldown;
                    tracing::debug!(until = self.cooldowns.shield_end, "Shield raised");
                }
            }
            PlayerCommand::SpawnExtraEnemies { count } => {
                if self.phase != GamePhase::Idle {
                    world_setup::spawn_enemy_ring(
                        &mut self.world,
                        &mut self.rng,
                        self.player.position,
                        count,
                        self.settings.enemy_speed,
                    );
                    tracing::debug!(count, "Extra enemies spawned");
                }
            }
        }
    }

    /// Fire one bullet from the player toward `target`. Requires both the
    /// shot and reload cooldowns to have elapsed, ammo, and a non-zero aim.
    fn fire(&mut self, target: Position, now: f64) {
        if now < self.cooldowns.shoot_ready_at
            || now < self.cooldowns.reload_ready_at
            || self.player.ammo == 0
        {
            return;
        }
        let dx = target.x - self.player.position.x;
        let dy = target.y - self.player.position.y;
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            return;
        }

        self.player.ammo -= 1;
        world_setup::spawn_bullet(&mut self.world, self.player.position, dx / length, dy / length);
        let stats = systems::power_ups::effective_stats(&self.active_power_ups, &self.settings, now);
        self.cooldowns.shoot_ready_at = now + stats.shoot_delay;
    }

    /// Mirror settings that live on the player record.
    fn sync_player_stats(&mut self) {
        self.player.set_max_ammo(self.settings.max_ammo());
    }

    /// Run all systems in order. Returns true if the player died this tick.
    fn run_systems(&mut self, now: f64) -> bool {
        // 1. Power-up expiry and effective stats
        self.sync_player_stats();
        self.effective = systems::power_ups::run(
            &mut self.active_power_ups,
            &self.settings,
            &mut self.cooldowns.shield_end,
            now,
        );
        // 2. Player movement
        systems::movement::run(
            &mut self.player,
            self.movement,
            self.effective.speed,
            &self.maps.current().obstacles,
        );
        // 3. Camera follow
        systems::camera::run(&mut self.camera, self.player.position);
        // 4. Enemies: steering, death countdown, player contact
        let shield_active = now < self.cooldowns.shield_end;
        systems::enemies::run(
            &mut self.world,
            &mut self.rng,
            &mut self.player,
            self.settings.enemy_speed,
            shield_active,
            &mut self.events,
        );
        // 5. Bullets and loot
        let unlocked = self.upgrades.unlocked_power_ups();
        systems::bullets::run(
            &mut self.world,
            &mut self.rng,
            self.settings.bullet_speed,
            &mut self.score,
            &unlocked,
            now,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. World power-ups
        systems::world_power_ups::run(
            &mut self.world,
            self.player.position,
            &mut self.active_power_ups,
            now,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 7. Pickups
        systems::pickups::run(
            &mut self.world,
            &mut self.player,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 8. Particles and popups
        systems::effects::run(&mut self.world, &mut self.despawn_buffer);
        // 9. Player death
        let died = self.player.is_dead();
        if died {
            self.player.hp = self.player.max_hp;
            self.events.push(GameEvent::PlayerDied);
            tracing::info!(score = self.score, wave = self.waves.wave, "Player died");
        }
        // 10. Dead-enemy cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 11. Wave progression
        let endless = self.maps.is_endless();
        let outcome = systems::waves::run(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            self.maps.current(),
            endless,
            &self.settings,
            self.player.position,
            now,
            &mut self.events,
        );
        if outcome == WaveOutcome::MapComplete {
            self.complete_map();
        }
        died
    }

    /// Move to the next map in the rotation and restart the session there.
    fn complete_map(&mut self) {
        let finished = self.maps.current().name.clone();
        tracing::info!(map = %finished, score = self.score, "Map completed");
        self.events.push(GameEvent::MapCompleted { map: finished });
        self.maps.advance();
        self.start_game();
    }

    fn player_view(&self, now: f64) -> PlayerView {
        let shield = if now < self.cooldowns.shield_end {
            let duration = self.settings.shield_duration.max(f64::EPSILON);
            ((self.cooldowns.shield_end - now) / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        PlayerView {
            position: self.player.position,
            hp: self.player.hp,
            max_hp: self.player.max_hp,
            ammo: self.player.ammo,
            max_ammo: self.player.max_ammo,
            shield,
        }
    }

    fn hud_view(&self, now: f64) -> HudView {
        let reload_progress = (now < self.cooldowns.reload_ready_at)
            .then(|| 1.0 - (self.cooldowns.reload_ready_at - now) / RELOAD_TIME);
        HudView {
            score: self.score,
            wave: self.waves.wave,
            waves_total: self.maps.current().wave_count(),
            reload_progress,
            shield_cooldown_secs: (self.cooldowns.shield_ready_at - now).max(0.0),
            active_power_ups: self.active_power_ups.remaining(now),
            paused: self.phase == GamePhase::Paused,
        }
    }
}
