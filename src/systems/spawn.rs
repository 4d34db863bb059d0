//! World population at initialization.
//!
//! Spawns the asteroid field once per simulation session, sampling each
//! attribute independently from the inclusive ranges in
//! [`SimConfig`](crate::resources::simconfig::SimConfig).

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::debug;

use crate::components::asteroid::Asteroid;
use crate::components::position::Position;
use crate::components::velocity::Velocity;
use crate::resources::idregistry::AsteroidIdRegistry;
use crate::resources::simconfig::SimConfig;

/// Sample a random f64 in the range [min, max].
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
fn random_f64_range(rng: &mut Rng, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range < f64::EPSILON {
        return min;
    }
    min + rng.f64() * range
}

/// Spawn `config.asteroid_count` asteroids with randomized attributes.
///
/// Ids are issued through the [`AsteroidIdRegistry`] resource, which must
/// already be inserted. Purity is clamped into (0, 1] regardless of the
/// configured range.
pub fn spawn_asteroids(world: &mut World, config: &SimConfig, rng: &mut Rng) {
    for _ in 0..config.asteroid_count {
        let id = world
            .resource_mut::<AsteroidIdRegistry>()
            .issue(rng);

        let position = Position::new(
            random_f64_range(rng, config.pos_min, config.pos_max),
            random_f64_range(rng, config.pos_min, config.pos_max),
            random_f64_range(rng, config.pos_min, config.pos_max),
        );
        let velocity = Velocity::new(
            random_f64_range(rng, config.vel_min, config.vel_max),
            random_f64_range(rng, config.vel_min, config.vel_max),
            random_f64_range(rng, config.vel_min, config.vel_max),
        );
        let raw_mass = random_f64_range(rng, config.mass_min, config.mass_max).max(0.0);
        let purity = random_f64_range(rng, config.purity_min, config.purity_max)
            .clamp(f64::EPSILON, 1.0);

        debug!("Spawned asteroid id='{id}' mass={raw_mass:.1} purity={purity:.2}");
        world.spawn((Asteroid::new(id, raw_mass, purity), position, velocity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_world() -> World {
        let mut world = World::new();
        world.insert_resource(AsteroidIdRegistry::new());
        world
    }

    #[test]
    fn test_spawn_count_matches_config() {
        let mut world = test_world();
        let config = SimConfig::new();
        let mut rng = Rng::with_seed(11);
        spawn_asteroids(&mut world, &config, &mut rng);

        let mut query = world.query::<&Asteroid>();
        assert_eq!(query.iter(&world).count(), 5);
        assert_eq!(world.resource::<AsteroidIdRegistry>().len(), 5);
    }

    #[test]
    fn test_attributes_within_ranges() {
        let mut world = test_world();
        let mut config = SimConfig::new();
        config.asteroid_count = 50;
        let mut rng = Rng::with_seed(23);
        spawn_asteroids(&mut world, &config, &mut rng);

        let mut query = world.query::<(&Asteroid, &Position, &Velocity)>();
        for (asteroid, position, velocity) in query.iter(&world) {
            assert!(asteroid.raw_mass() >= config.mass_min);
            assert!(asteroid.raw_mass() <= config.mass_max);
            assert!(asteroid.purity() > 0.0 && asteroid.purity() <= 1.0);
            for axis in 0..3 {
                assert!(position.0[axis] >= config.pos_min && position.0[axis] <= config.pos_max);
                assert!(velocity.0[axis] >= config.vel_min && velocity.0[axis] <= config.vel_max);
            }
        }
    }

    #[test]
    fn test_degenerate_range_collapses_to_min() {
        let mut world = test_world();
        let mut config = SimConfig::new();
        config.mass_min = 500.0;
        config.mass_max = 500.0;
        let mut rng = Rng::with_seed(3);
        spawn_asteroids(&mut world, &config, &mut rng);

        let mut query = world.query::<&Asteroid>();
        for asteroid in query.iter(&world) {
            assert_eq!(asteroid.raw_mass(), 500.0);
        }
    }
}
