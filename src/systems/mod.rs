//! Game systems.
//!
//! Submodules overview
//! - [`decision`] – apply the player's branch choice to the active fork
//! - [`forkgen`] – build a new fork with random people counts
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`motion`] – scroll the fork, advance the transition, move the trolley
//! - [`render`] – compose and draw the frame using Raylib
//! - [`scheduler`] – spawn a fork once the cooldown has elapsed

pub mod decision;
pub mod forkgen;
pub mod input;
pub mod motion;
pub mod render;
pub mod scheduler;
