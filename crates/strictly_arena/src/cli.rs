//! Command-line interface for strictly_arena.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{GameMode, Tier};

/// Strictly Arena - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Play tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Print the default configuration as TOML
    DefaultConfig,
}

/// Options for `play`.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Path to the arena config file
    #[arg(short, long, default_value = "arena.toml")]
    pub config: PathBuf,

    /// Game mode (pvp or pvc)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Computer difficulty (easy, medium or hard)
    #[arg(short, long)]
    pub tier: Option<Tier>,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl PlayArgs {
    /// The flags that replace config file values.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            tier: self.tier,
            ai_delay_ms: self.delay_ms,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::try_parse_from([
            "strictly_arena",
            "play",
            "--mode",
            "pvc",
            "--tier",
            "hard",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.mode, Some(GameMode::HumanVsComputer));
        assert_eq!(overrides.tier, Some(Tier::ExhaustiveSearch));
        assert_eq!(overrides.ai_delay_ms, Some(0));
        assert_eq!(overrides.seed, None);
        assert_eq!(args.config, PathBuf::from("arena.toml"));
    }

    #[test]
    fn test_bad_tier_is_rejected() {
        assert!(Cli::try_parse_from(["strictly_arena", "play", "--tier", "godlike"]).is_err());
    }

    #[test]
    fn test_default_config_subcommand() {
        let cli = Cli::try_parse_from(["strictly_arena", "default-config"]).unwrap();
        assert!(matches!(cli.command, Command::DefaultConfig));
    }
}
