//! Cosmetic particles and floating popups.

use hecs::{Entity, World};

use chamber_core::components::{Particle, Popup};
use chamber_core::constants::PARTICLE_GRAVITY;
use chamber_core::types::Position;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, particle)) in world.query_mut::<(&mut Position, &mut Particle)>() {
        pos.x += particle.vx;
        pos.y += particle.vy;
        particle.vy += PARTICLE_GRAVITY;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, popup)) in world.query_mut::<(&mut Position, &mut Popup)>() {
        pos.y += popup.vy;
        popup.life = popup.life.saturating_sub(1);
        if popup.life == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamber_core::constants::{FOAM, POPUP_LIFE};

    use crate::world_setup;

    #[test]
    fn particles_fall_and_fade() {
        let mut world = World::new();
        let p = world.spawn((
            Position::new(0.0, 0.0),
            Particle {
                vx: 1.0,
                vy: 0.0,
                life: 2,
                max_life: 2,
                color: FOAM,
                size: 3.0,
            },
        ));
        let mut buffer = Vec::new();

        run(&mut world, &mut buffer);
        assert_eq!(*world.get::<&Position>(p).unwrap(), Position::new(1.0, 0.0));
        run(&mut world, &mut buffer);
        assert!(!world.contains(p));
    }

    #[test]
    fn popups_rise_for_their_lifetime() {
        let mut world = World::new();
        let popup = world_setup::spawn_popup(&mut world, Position::new(0.0, 100.0), "+10", FOAM);
        let mut buffer = Vec::new();

        for _ in 0..POPUP_LIFE - 1 {
            run(&mut world, &mut buffer);
        }
        let y = world.get::<&Position>(popup).unwrap().y;
        assert!(y < 92.0);
        run(&mut world, &mut buffer);
        assert!(!world.contains(popup));
    }
}
