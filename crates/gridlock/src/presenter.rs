//! Interactive terminal front end.
//!
//! Reads commands line by line, renders the board after every change and
//! schedules computer moves with a display delay. Scheduled moves come back
//! over a channel and are tagged with the session serial and generation, so
//! anything computed before a restart or a trip to the menu is dropped.

use crate::config::GameConfig;
use anyhow::Result;
use gridlock_tictactoe::{Control, GameMode, GameSession, Outcome, Position, ScheduledMove};
use std::io::Write;
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at this index (0-8).
    Move(usize),
    /// Start the same game over.
    Restart,
    /// Leave this game and pick a new mode.
    Menu,
    /// Exit the program.
    Quit,
    /// Show the command list.
    Help,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses a line typed during a game.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "restart" => Input::Restart,
            "m" | "menu" => Input::Menu,
            "h" | "help" | "?" => Input::Help,
            _ => match Position::from_label_or_number(trimmed) {
                Some(pos) => Input::Move(pos.to_index()),
                None => Input::Unknown(trimmed.to_string()),
            },
        }
    }
}

/// Parses a mode menu choice: its number (1-3) or its name.
pub fn parse_mode_choice(line: &str) -> Option<GameMode> {
    let trimmed = line.trim();
    if let Ok(num) = trimmed.parse::<usize>() {
        return num.checked_sub(1).and_then(|i| GameMode::iter().nth(i));
    }
    trimmed.parse().ok()
}

const HELP: &str = "Type 1-9 or a square name (e.g. 'center') to move, \
'r' to restart, 'm' for the mode menu, 'q' to quit.";

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Presentation state around an optional session.
struct Presenter {
    config: GameConfig,
    session: Option<GameSession>,
    /// Bumped whenever a session is abandoned.
    serial: u64,
    /// `(serial, generation)` of the computer move in flight.
    pending: Option<(u64, u64)>,
    tx: mpsc::UnboundedSender<(u64, ScheduledMove)>,
}

impl Presenter {
    fn start_session<W: Write>(&mut self, mode: GameMode, out: &mut W) -> Result<()> {
        let mut session = GameSession::new(mode, self.config.difficulties())
            .with_human_seat(*self.config.human_seat());
        if let Some(seed) = *self.config.seed() {
            session = session.with_seed(seed.wrapping_add(self.serial));
        }
        writeln!(out, "New game: {}", mode.label())?;
        self.session = Some(session);
        self.render(out)?;
        self.schedule_if_due(out)
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let view = session.view();
        writeln!(out, "\n{}\n", view.board.display())?;
        let status = match view.outcome {
            Outcome::InProgress => {
                let who = match session.controller_of(view.turn) {
                    Control::Human => "you".to_string(),
                    Control::Ai(difficulty) => format!("computer, {difficulty}"),
                };
                format!("Player {} to move ({who})", view.turn)
            }
            outcome => format!("{outcome}! 'r' to restart, 'm' for menu, 'q' to quit."),
        };
        writeln!(out, "{status}")?;
        Ok(())
    }

    fn show_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\nChoose a mode:")?;
        for (i, mode) in GameMode::iter().enumerate() {
            writeln!(out, "  {}) {}", i + 1, mode.label())?;
        }
        Ok(())
    }

    /// Asks the session for a computer move unless one is already in flight.
    fn schedule_if_due<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if self.pending == Some((self.serial, session.generation())) {
            return Ok(());
        }
        let Some(scheduled) = session.trigger_ai_if_due() else {
            return Ok(());
        };

        writeln!(out, "Player {} is thinking...", scheduled.seat())?;
        let serial = self.serial;
        self.pending = Some((serial, scheduled.generation()));

        let tx = self.tx.clone();
        let delay = Duration::from_millis(*self.config.ai_delay_ms());
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send((serial, scheduled)).is_err() {
                debug!("Front end closed before computer move arrived");
            }
        });
        Ok(())
    }

    #[instrument(skip(self, out), fields(index = scheduled.index()))]
    fn handle_scheduled<W: Write>(
        &mut self,
        serial: u64,
        scheduled: ScheduledMove,
        out: &mut W,
    ) -> Result<()> {
        if self.pending == Some((serial, scheduled.generation())) {
            self.pending = None;
        }
        if serial != self.serial {
            debug!(serial, "Discarding move for abandoned session");
            return Ok(());
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        if session.apply_scheduled(scheduled) {
            let label = Position::from_index(scheduled.index()).map_or("?", |p| p.label());
            writeln!(out, "Player {} played {}", scheduled.seat(), label)?;
            self.render(out)?;
        }
        self.schedule_if_due(out)
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        if self.session.is_none() {
            if Input::parse(line) == Input::Quit {
                return Ok(Flow::Quit);
            }
            match parse_mode_choice(line) {
                Some(mode) => self.start_session(mode, out)?,
                None => self.show_menu(out)?,
            }
            return Ok(Flow::Continue);
        }

        match Input::parse(line) {
            Input::Move(index) => {
                let applied = self
                    .session
                    .as_mut()
                    .is_some_and(|session| session.request_move(index));
                if applied {
                    self.render(out)?;
                    self.schedule_if_due(out)?;
                } else {
                    writeln!(out, "Can't play there right now.")?;
                }
            }
            Input::Restart => {
                if let Some(session) = self.session.as_mut() {
                    session.restart();
                }
                writeln!(out, "Game restarted.")?;
                self.render(out)?;
                self.schedule_if_due(out)?;
            }
            Input::Menu => {
                if let Some(session) = self.session.take() {
                    session.abandon();
                }
                self.serial += 1;
                self.show_menu(out)?;
            }
            Input::Quit => return Ok(Flow::Quit),
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Unknown(text) => writeln!(out, "Unrecognized input {text:?}. {HELP}")?,
        }
        Ok(Flow::Continue)
    }
}

/// Runs the interactive loop until the player quits, or until input ends and
/// no computer move is still on its way.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub async fn run<R, W>(config: GameConfig, input: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mode = *config.mode();
    let mut presenter = Presenter {
        config,
        session: None,
        serial: 0,
        pending: None,
        tx,
    };

    writeln!(out, "{HELP}")?;
    presenter.start_session(mode, &mut out)?;

    let mut lines = input.lines();
    let mut input_open = true;
    loop {
        if !input_open && presenter.pending.is_none() {
            info!("Input closed and nothing pending, leaving");
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => match line? {
                Some(line) => {
                    if presenter.handle_line(&line, &mut out)? == Flow::Quit {
                        info!("Player quit");
                        break;
                    }
                }
                None => input_open = false,
            },
            Some((serial, scheduled)) = rx.recv() => {
                presenter.handle_scheduled(serial, scheduled, &mut out)?;
            }
            else => break,
        }
        out.flush()?;
    }

    if let Some(session) = presenter.session.take() {
        session.abandon();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse(" R "), Input::Restart);
        assert_eq!(Input::parse("menu"), Input::Menu);
        assert_eq!(Input::parse("?"), Input::Help);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(Input::parse("5"), Input::Move(4));
        assert_eq!(Input::parse("top right"), Input::Move(2));
        assert_eq!(Input::parse("0"), Input::Unknown("0".to_string()));
        assert_eq!(Input::parse("hello"), Input::Unknown("hello".to_string()));
    }

    #[test]
    fn test_parse_mode_choice() {
        assert_eq!(parse_mode_choice("1"), Some(GameMode::HumanVsHuman));
        assert_eq!(parse_mode_choice("3"), Some(GameMode::AiVsAi));
        assert_eq!(parse_mode_choice("human_vs_ai"), Some(GameMode::HumanVsAi));
        assert_eq!(parse_mode_choice("4"), None);
    }
}
