//! Typed terminal commands.

use derive_more::{Display, Error};
use std::str::FromStr;
use strictly_tictactoe::{GameMode, Position, Tier};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the side to move at a board index.
    ///
    /// Indices outside 0-8 are passed through so the controller can reject them.
    Move(usize),
    /// Start over, keeping scores and history.
    Reset,
    /// Same as reset.
    NewGame,
    /// Switch mode; starts a fresh game.
    SetMode(GameMode),
    /// Switch the computer tier.
    SetDifficulty(Tier),
    /// Forget finished games.
    ClearHistory,
    /// Zero the scores.
    ResetScores,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing matched.
    #[display("Unknown command: {} (type 'help')", _0)]
    Unknown(#[error(not(source))] String),

    /// The command needs a different argument.
    #[display("Usage: {}", _0)]
    Usage(#[error(not(source))] &'static str),
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  0-8 or a cell name      place your mark (e.g. 4, center, top-left)
  reset | new             start a new game (scores are kept)
  mode pvp|pvc            two players, or play X against the computer
  difficulty easy|medium|hard
  clear                   clear game history
  scores reset            zero the scoreboard
  help                    show this list
  quit                    leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let lower = line.to_lowercase();
        let mut words = lower.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Usage("type a cell number or 'help'"));
        };
        let arg = words.next();

        let command = match (head, arg) {
            ("reset", None) => Command::Reset,
            ("new", None) => Command::NewGame,
            ("clear", None) => Command::ClearHistory,
            ("scores", Some("reset")) => Command::ResetScores,
            ("scores", _) => return Err(CommandError::Usage("scores reset")),
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            ("mode", Some(mode)) => Command::SetMode(
                mode.parse()
                    .map_err(|_| CommandError::Usage("mode pvp|pvc"))?,
            ),
            ("mode", None) => return Err(CommandError::Usage("mode pvp|pvc")),
            ("difficulty" | "tier", Some(tier)) => Command::SetDifficulty(
                tier.parse()
                    .map_err(|_| CommandError::Usage("difficulty easy|medium|hard"))?,
            ),
            ("difficulty" | "tier", None) => {
                return Err(CommandError::Usage("difficulty easy|medium|hard"));
            }
            _ => {
                if let Ok(index) = line.parse::<usize>() {
                    Command::Move(index)
                } else if let Some(position) = Position::from_label_or_number(line) {
                    Command::Move(position.to_index())
                } else {
                    return Err(CommandError::Unknown(line.to_string()));
                }
            }
        };

        if words.next().is_some() {
            return Err(CommandError::Unknown(line.to_string()));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_and_labels() {
        assert_eq!("4".parse(), Ok(Command::Move(4)));
        assert_eq!(" center ".parse(), Ok(Command::Move(4)));
        assert_eq!("Top-Left".parse(), Ok(Command::Move(0)));
        assert_eq!("bottom right".parse(), Ok(Command::Move(8)));
    }

    #[test]
    fn test_out_of_range_index_is_passed_through() {
        assert_eq!("12".parse(), Ok(Command::Move(12)));
    }

    #[test]
    fn test_keywords() {
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("NEW".parse(), Ok(Command::NewGame));
        assert_eq!("clear".parse(), Ok(Command::ClearHistory));
        assert_eq!("scores reset".parse(), Ok(Command::ResetScores));
        assert_eq!("help".parse(), Ok(Command::Help));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_mode_and_difficulty() {
        assert_eq!("mode pvc".parse(), Ok(Command::SetMode(GameMode::HumanVsComputer)));
        assert_eq!("difficulty hard".parse(), Ok(Command::SetDifficulty(Tier::ExhaustiveSearch)));
        assert_eq!("tier easy".parse(), Ok(Command::SetDifficulty(Tier::Random)));
        assert_eq!(
            "mode solo".parse::<Command>(),
            Err(CommandError::Usage("mode pvp|pvc"))
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!("dance".parse::<Command>(), Err(CommandError::Unknown(_))));
        assert!(matches!("reset now".parse::<Command>(), Err(CommandError::Unknown(_))));
        assert!("".parse::<Command>().is_err());
    }
}
