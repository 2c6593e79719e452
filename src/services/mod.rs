//! Game services
//!
//! This module contains the turn-orchestration loop and the player
//! move-selection logic.

pub mod game;
pub mod player;
