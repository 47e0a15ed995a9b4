//! Descent - Terminal Lunar Lander
//!
//! This module exposes the flight model for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod game;
pub mod input;

// UI is exposed for the binary; it only reads game state and draws
pub mod ui;
