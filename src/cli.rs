use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Engine used when no Q# source is available.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Local state-vector engine
    #[default]
    Titan,
    /// Qiskit Aer through Python (needs `--features qiskit`)
    Aer,
}

#[derive(Debug, Default, Parser)]
#[command(
    name = "qtree",
    about = "Draw a Christmas tree decorated by quantum measurements",
    version
)]
pub struct TreeCli {
    /// Tree height in rows (default: 12)
    #[arg(long = "height", value_name = "N")]
    pub height: Option<usize>,

    /// Q# source defining QuantumDecoration.CreateQuantumDecoration (default: tree.qs)
    #[arg(long = "source", value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Fallback engine when the Q# source is absent
    #[arg(long = "backend", value_enum, value_name = "BACKEND")]
    pub backend: Option<BackendKind>,

    /// Path to config (TOML); default: ~/.quantum-tree/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable ANSI colours (NO_COLOR is honoured too)
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,
}
