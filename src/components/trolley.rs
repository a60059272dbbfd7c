//! The trolley.
//!
//! The trolley is an entity with [`Trolley`], a
//! [`MapPosition`](super::mapposition::MapPosition) holding its centre and a
//! [`Rotation`](super::rotation::Rotation) holding its current bank angle. Its
//! x never changes; the fork scrolls past it instead.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Trolley {
    /// Body size in pixels.
    pub size: Vector2,
    /// Height of the main track; the trolley returns here when a fork clears.
    pub rest_y: f32,
}

impl Trolley {
    pub fn new(width: f32, height: f32, rest_y: f32) -> Self {
        Trolley {
            size: Vector2 {
                x: width,
                y: height,
            },
            rest_y,
        }
    }
}
