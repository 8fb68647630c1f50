//! Flocking-lite enemy steering.
//!
//! Each tick an enemy blends a chase force toward its target with a
//! separation force away from alive neighbors inside its avoid radius,
//! then moves `speed` units along the normalized blend. O(n²) across
//! enemies, fine at tens of enemies.

use glam::DVec2;

use chamber_core::types::Position;

/// Weight of the unit vector toward the target.
pub const CHASE_WEIGHT: f64 = 0.7;

/// Weight of each neighbor's unit push.
pub const NEIGHBOR_WEIGHT: f64 = 0.5;

/// Scale applied to the summed separation before blending with chase.
pub const SEPARATION_BLEND: f64 = 0.3;

/// Input to the steering model for a single enemy.
pub struct SteeringContext {
    pub position: Position,
    pub target: Position,
    pub speed: f64,
    pub avoid_radius: f64,
}

/// Unit vector toward the target scaled by `CHASE_WEIGHT`. Zero when the
/// enemy already sits on the target.
pub fn chase(position: Position, target: Position) -> DVec2 {
    let delta = target.to_vec() - position.to_vec();
    let dist = delta.length();
    if dist == 0.0 {
        return DVec2::ZERO;
    }
    delta / dist * CHASE_WEIGHT
}

/// Sum of weighted unit pushes away from every neighbor strictly inside
/// `avoid_radius`. Coincident neighbors contribute nothing, having no
/// defined direction.
pub fn separation(position: Position, neighbors: &[Position], avoid_radius: f64) -> DVec2 {
    let here = position.to_vec();
    neighbors.iter().fold(DVec2::ZERO, |acc, other| {
        let away = here - other.to_vec();
        let dist = away.length();
        if dist > 0.0 && dist < avoid_radius {
            acc + away / dist * NEIGHBOR_WEIGHT
        } else {
            acc
        }
    })
}

/// Displacement for this tick. `neighbors` must hold the positions of the
/// *other alive* enemies. Returns zero when the blended force cancels out.
pub fn steer(ctx: &SteeringContext, neighbors: &[Position]) -> DVec2 {
    let total = chase(ctx.position, ctx.target)
        + separation(ctx.position, neighbors, ctx.avoid_radius) * SEPARATION_BLEND;
    let len = total.length();
    if len > 0.0 {
        total / len * ctx.speed
    } else {
        DVec2::ZERO
    }
}
