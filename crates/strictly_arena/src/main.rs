//! Strictly Arena - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_arena::cli::{Cli, Command as CliCommand, PlayArgs};
use strictly_arena::{ArenaConfig, ChannelSink, Command, HELP, presenter, run_session};
use strictly_tictactoe::GameController;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        CliCommand::Play(args) => play(args).await,
        CliCommand::DefaultConfig => {
            print!("{}", ArenaConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Logs go to a file when one is given so they do not interleave with the board.
fn init_tracing(args: &PlayArgs) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match &args.log_file {
        Some(path) => {
            let log_file = std::fs::File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
async fn play(args: PlayArgs) -> Result<()> {
    init_tracing(&args)?;

    let config = ArenaConfig::load_or_default(&args.config)?.with_overrides(args.overrides())?;
    info!(?config, "Starting Strictly Arena");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let render = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            println!("{}\n", presenter::render(&event));
        }
    });

    let input = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Help) => println!("{}\n", HELP),
                Ok(command) => {
                    let quit = command == Command::Quit;
                    if command_tx.send(command).is_err() || quit {
                        break;
                    }
                }
                Err(e) => println!("{}\n", e),
            }
        }
        debug!("Input closed");
    });

    println!("{}\n", HELP);
    let mut controller = GameController::new(
        *config.mode(),
        *config.tier(),
        *config.seed(),
        ChannelSink::new(event_tx),
    );
    let end = run_session(&mut controller, command_rx, config.ai_delay()).await;
    info!(%end, scores = ?controller.scores(), "Session finished");

    // Dropping the controller closes the event channel and lets the
    // renderer drain what is left.
    drop(controller);
    render.await?;
    input.abort();
    Ok(())
}
