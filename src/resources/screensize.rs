//! Screen size resource.
//!
//! Stores the visible area in pixels and the landmarks derived from it: the
//! main track runs across the middle, forks appear at the right edge and the
//! trolley sits in the horizontal centre.

use bevy_ecs::prelude::Resource;

use crate::resources::gameconfig::GameConfig;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn from_config(config: &GameConfig) -> Self {
        let (width, height) = config.window_size();
        ScreenSize {
            w: i32::try_from(width).unwrap_or(i32::MAX),
            h: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Height of the main horizontal track line.
    pub fn track_y(&self) -> f32 {
        (self.h / 2) as f32
    }

    /// Where new forks start.
    pub fn right_edge(&self) -> f32 {
        self.w as f32
    }

    /// A fork is gone once it lies entirely left of this.
    pub fn left_edge(&self) -> f32 {
        0.0
    }

    /// Horizontal position of the trolley.
    pub fn center_x(&self) -> f32 {
        (self.w / 2) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmarks() {
        let screen = ScreenSize { w: 800, h: 600 };
        assert_eq!(screen.track_y(), 300.0);
        assert_eq!(screen.right_edge(), 800.0);
        assert_eq!(screen.center_x(), 400.0);
        assert_eq!(screen.left_edge(), 0.0);
    }
}
