//! Async driver that owns the controller for one terminal session.
//!
//! Commands arrive over a channel. When the controller schedules a computer
//! turn the driver arms a deadline `delay` in the future; commands that
//! arrive first are handled first, and a reset or mode change retires the
//! turn so the deadline fires into nothing.

use crate::command::Command;
use std::time::Duration;
use strictly_tictactoe::{ComputerTurn, EventSink, GameController, GameEvent};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// Forwards controller events to the presentation task.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelSink {
    /// Wraps the sending half of an event channel.
    pub fn new(tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

/// Why [`run_session`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SessionEnd {
    /// The player typed quit.
    Quit,
    /// The command channel closed.
    Disconnected,
}

/// Applies one command to the controller.
///
/// Returns false for [`Command::Quit`]. [`Command::Help`] is a presentation
/// concern and changes nothing here.
pub fn dispatch<S: EventSink>(controller: &mut GameController<S>, command: Command) -> bool {
    match command {
        Command::Move(index) => {
            // Rejections are no-ops; the controller logs them.
            let _ = controller.request_move(index);
        }
        Command::Reset => controller.reset(),
        Command::NewGame => controller.new_game(),
        Command::SetMode(mode) => controller.set_mode(mode),
        Command::SetDifficulty(tier) => controller.set_difficulty(tier),
        Command::ClearHistory => controller.clear_history(),
        Command::ResetScores => controller.reset_scores(),
        Command::Help => {}
        Command::Quit => return false,
    }
    true
}

/// Runs until quit or until the command channel closes.
///
/// Publishes the full picture first so a fresh presenter has something to
/// draw.
#[instrument(skip(controller, commands))]
pub async fn run_session<S: EventSink>(
    controller: &mut GameController<S>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    delay: Duration,
) -> SessionEnd {
    info!("Session started");
    controller.publish();
    let mut armed: Option<(ComputerTurn, Instant)> = None;

    loop {
        armed = match (armed, controller.pending_computer_turn()) {
            (Some((turn, deadline)), Some(pending)) if turn == pending => Some((turn, deadline)),
            (_, Some(pending)) => {
                debug!(?delay, "Arming computer move");
                Some((pending, Instant::now() + delay))
            }
            (_, None) => None,
        };
        let deadline = armed.map(|(_, deadline)| deadline);

        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => {
                    debug!(?command, "Command received");
                    if !dispatch(controller, command) {
                        info!("Session ended by player");
                        return SessionEnd::Quit;
                    }
                }
                None => {
                    info!("Command channel closed");
                    return SessionEnd::Disconnected;
                }
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some((turn, _)) = armed.take() {
                    controller.play_computer_move(turn);
                }
            }
        }
    }
}
