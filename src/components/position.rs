use bevy_ecs::prelude::Component;
use nalgebra::Vector3;

#[derive(Component, Clone, Copy, Debug)]
pub struct Position(pub Vector3<f64>);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Position(Vector3::new(x, y, z))
    }
}
