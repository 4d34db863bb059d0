//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, applying `time_scale` to the provided delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled nominal tick delta in seconds. The function applies
/// the current `time_scale` and writes both `elapsed` and `delta`. The
/// caller is responsible for only invoking it while the lifecycle permits
/// advancement.
pub fn update_world_time(world: &mut World, dt: f64) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale();
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_accumulates_scaled_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.5);
        update_world_time(&mut world, 0.25);
        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 0.75).abs() < 1e-12);
        assert!((wt.delta - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_time_scale_applies_on_next_update() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 1.0);
        world
            .resource_mut::<WorldTime>()
            .set_time_scale(3.0)
            .unwrap();
        update_world_time(&mut world, 1.0);
        let wt = world.resource::<WorldTime>();
        // first second unscaled, second second scaled by 3; nothing retroactive
        assert!((wt.elapsed - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_scale_freezes_elapsed() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world
            .resource_mut::<WorldTime>()
            .set_time_scale(0.0)
            .unwrap();
        update_world_time(&mut world, 1.0);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.elapsed, 0.0);
        assert_eq!(wt.delta, 0.0);
    }
}
