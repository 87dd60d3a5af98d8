//! CLI infrastructure for the tactician binary
//!
//! This module provides the command-line interface for playing against the
//! engine, analyzing positions, and verifying the engine's play.

pub mod commands;
pub mod output;
