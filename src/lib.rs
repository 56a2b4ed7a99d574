//! Quantum Christmas tree: decorations sampled from a fixed quantum circuit.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
