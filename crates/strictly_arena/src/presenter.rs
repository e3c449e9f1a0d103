//! Text rendering of game events.

use strictly_tictactoe::{GameEvent, HistoryRecord, ScoreTally, WinningLine};

/// How many finished games the history view lists.
pub const HISTORY_SHOWN: usize = 5;

/// Renders one event as the text shown to the player.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::StateChanged {
            board,
            to_move,
            active,
        } => {
            let mut out = board.display();
            if *active {
                out.push_str(&format!("\n{} to move", to_move));
            }
            out
        }
        GameEvent::GameEnded { outcome, line } => match line {
            Some(line) => format!("{} ({})", outcome, render_line(line)),
            None => outcome.to_string(),
        },
        GameEvent::ScoresChanged(scores) => render_scores(scores),
        GameEvent::HistoryChanged(history) => render_history(history),
        GameEvent::ComputerThinking { side } => format!("Computer ({}) is thinking...", side),
    }
}

fn render_line(line: &WinningLine) -> String {
    line.positions()
        .iter()
        .map(|pos| pos.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line scoreboard.
pub fn render_scores(scores: &ScoreTally) -> String {
    format!(
        "Score  X: {}  O: {}  Ties: {}",
        scores.x_wins(),
        scores.o_wins(),
        scores.ties()
    )
}

/// Most recent games first, at most [`HISTORY_SHOWN`] of them.
pub fn render_history(history: &[HistoryRecord]) -> String {
    if history.is_empty() {
        return "History: no finished games".to_string();
    }
    let mut out = String::from("History:");
    for (i, record) in history.iter().take(HISTORY_SHOWN).enumerate() {
        out.push_str(&format!(
            "\n  {}. {} at {}",
            i + 1,
            record.summary(),
            record.finished_at().format("%H:%M:%S")
        ));
    }
    if history.len() > HISTORY_SHOWN {
        out.push_str(&format!("\n  ... {} more", history.len() - HISTORY_SHOWN));
    }
    out
}
