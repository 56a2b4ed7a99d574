/// qtree — draw a Christmas tree decorated by quantum measurements.
use clap::Parser; // trait import enables TreeCli::parse()
use colored::Colorize;

use quantum_tree::cli::TreeCli;
use quantum_tree::commands::tree::run_tree;
use quantum_tree::config::TreeConfig;

fn run() -> anyhow::Result<()> {
    let args = TreeCli::parse();
    let cfg = TreeConfig::load(&args)?;
    if !cfg.color {
        colored::control::set_override(false);
    }
    run_tree(&cfg)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "err:".red().bold(), e);
        std::process::exit(1);
    }
}
