//! ECS resources made available to systems.
//!
//! This module groups the long-lived simulation state injected into the ECS
//! world. Each submodule documents the semantics of its resource(s).
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `fork` – the single active fork and its decision state machine
//! - `forkrng` – random source for people counts
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `scheduler` – idle-frame cooldown between forks
//! - `score` – sacrificed total, decisions and abstentions
//! - `screensize` – visible area and the landmarks derived from it
pub mod debugmode;
pub mod fork;
pub mod forkrng;
pub mod gameconfig;
pub mod input;
pub mod scheduler;
pub mod score;
pub mod screensize;
