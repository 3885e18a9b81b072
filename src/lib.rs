//! Simulation core of a fixed-screen arcade shooter: a player ship firing up
//! into a descending fleet of enemies, wave after wave.
//!
//! Everything here is pure simulation.  Drawing and device input live in the
//! binary, which talks to the core through `input::Command` and
//! `entities::Snapshot`.

pub mod collision;
pub mod config;
pub mod entities;
pub mod fleet;
pub mod game;
pub mod input;
pub mod projectiles;
pub mod ship;
