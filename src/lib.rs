//! Variant Snake - grid snake with two self-collision rulesets
//!
//! This library provides:
//! - Core game state machine (game module): ticks, collisions, scoring, modes
//! - Clock abstraction the engine asks for rate changes (clock module)
//! - Terminal input, rendering and session stats (input, render, metrics)
//! - The interactive game loop (modes module)

pub mod clock;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
