//! # MC Connect Four
//!
//! A Connect Four move engine that scores each legal column by flat
//! Monte-Carlo rollouts: uniform-random self-play from the position after
//! the move, tallied from the mover's side. No search tree is kept.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, terminal detection, state
//! - [`ai`] — Random playouts, move evaluator, agents and arena
//! - [`wire`] — Match payload adapters and the move response
//! - [`server`] — HTTP endpoint serving move requests
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod server;
pub mod wire;
