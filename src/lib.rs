//! Trolley Fork library.
//!
//! A trolley runs along a horizontal track while forks scroll in from the
//! right. Each fork has a random number of people on each of its two
//! branches; the player picks one before the fork passes and the people on it
//! are added to the "sacrificed" score.
//!
//! This module exposes the ECS components, resources, systems, and events
//! for use in integration tests and by the binary.

pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod systems;
