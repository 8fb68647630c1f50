//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use chamber_core::components::*;
use chamber_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use chamber_core::enums::GamePhase;
use chamber_core::events::GameEvent;
use chamber_core::state::*;
use chamber_core::types::{Camera, Position, SimTime};
use chamber_progression::maps::MapData;

/// Build a complete GameStateSnapshot from the current world state.
/// Player and HUD views come from engine-owned state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    map: &MapData,
    camera: Camera,
    player: PlayerView,
    hud: HudView,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        map_name: map.name.clone(),
        world_width: WORLD_WIDTH,
        world_height: WORLD_HEIGHT,
        camera,
        obstacles: map.obstacles.clone(),
        player,
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        pickups: build_pickups(world),
        power_ups: build_power_ups(world, time.now()),
        particles: build_particles(world),
        popups: build_popups(world),
        hud,
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(_, (pos, enemy))| EnemyView {
            position: *pos,
            alive: enemy.alive,
            death_progress: if enemy.alive || enemy.death_duration == 0 {
                0.0
            } else {
                (f64::from(enemy.death_time) / f64::from(enemy.death_duration)).min(1.0)
            },
            color: enemy.color,
        })
        .collect()
}

fn build_bullets(world: &World) -> Vec<Position> {
    world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(_, (pos, _))| *pos)
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Position, &Pickup)>()
        .iter()
        .map(|(_, (pos, pickup))| PickupView {
            position: *pos,
            kind: pickup.kind,
            size: pickup.size,
        })
        .collect()
}

fn build_power_ups(world: &World, now: f64) -> Vec<PowerUpView> {
    world
        .query::<(&Position, &PowerUp)>()
        .iter()
        .map(|(_, (pos, power_up))| PowerUpView {
            position: *pos,
            kind: power_up.kind,
            remaining_secs: (power_up.created_at + power_up.lifespan - now).max(0.0),
        })
        .collect()
}

/// Particle size shrinks with remaining life.
fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            position: *pos,
            color: particle.color,
            size: particle.size * f64::from(particle.life) / f64::from(particle.max_life.max(1)),
        })
        .collect()
}

fn build_popups(world: &World) -> Vec<PopupView> {
    world
        .query::<(&Position, &Popup)>()
        .iter()
        .map(|(_, (pos, popup))| PopupView {
            position: *pos,
            text: popup.text.clone(),
            color: popup.color,
            alpha: (f64::from(popup.life) / f64::from(chamber_core::constants::POPUP_LIFE)).min(1.0),
        })
        .collect()
}
