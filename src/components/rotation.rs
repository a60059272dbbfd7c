use bevy_ecs::prelude::Component;

/// Rotation angle in degrees, counter-clockwise on screen.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn radians(&self) -> f32 {
        self.degrees.to_radians()
    }
}
