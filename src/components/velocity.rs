use bevy_ecs::prelude::Component;
use nalgebra::Vector3;

/// Constant linear velocity in world units per second.
///
/// There is no acceleration model; the value only changes if reassigned
/// externally.
#[derive(Component, Clone, Copy, Debug)]
pub struct Velocity(pub Vector3<f64>);

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Velocity(Vector3::new(x, y, z))
    }
}
