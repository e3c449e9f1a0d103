//! Terminal front end for strictly_tictactoe.
//!
//! - [`config`]: TOML settings with command-line overrides
//! - [`command`]: typed player input
//! - [`session`]: the async driver that owns the controller and plays the
//!   computer's moves after a delay
//! - [`presenter`]: text rendering of game events

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod config;
pub mod presenter;
pub mod session;

pub use command::{Command, CommandError, HELP};
pub use config::{ArenaConfig, ConfigError, Overrides};
pub use session::{ChannelSink, SessionEnd, dispatch, run_session};
