//! Core game logic module for Snake
//!
//! This module contains the whole game state machine without any I/O or
//! rendering dependencies. Hosts drive it with [`GameEngine::tick`] from a
//! [`Scheduler`](crate::clock::Scheduler) and feed player input through
//! [`GameEngine::apply`]; the renderer only ever sees [`Snapshot`]s.

pub mod action;
pub mod config;
pub mod controller;
pub mod engine;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GameConfig, Variant};
pub use controller::CommandResult;
pub use engine::{CollisionType, GameEngine, TickOutcome, TickResult};
pub use snapshot::{Background, Snapshot};
pub use state::{Food, GameState, Phase, Position, Segment, Snake, Tint};
