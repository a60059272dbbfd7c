//! ECS components for entities.
//!
//! Submodules overview:
//! - [`mapposition`] – screen-space centre of an entity
//! - [`rotation`] – rotation angle in degrees
//! - [`trolley`] – the trolley's body size and rest height

pub mod mapposition;
pub mod rotation;
pub mod trolley;
