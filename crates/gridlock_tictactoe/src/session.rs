//! Game session: turn order, seat control and AI triggering.
//!
//! A session owns its board outright. Front ends read [`GameView`]
//! snapshots and drive the session through human requests and
//! generation-tagged [`ScheduledMove`]s produced for computer seats.

use crate::engine::{Difficulty, select_move};
use crate::outcome::Outcome;
use crate::rules::evaluate;
use crate::types::{BOARD_SIZE, Board, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Which seats are computer-controlled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    /// Both seats are people sharing one screen.
    HumanVsHuman,
    /// One person plays the computer.
    #[default]
    HumanVsAi,
    /// The computer plays itself.
    AiVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }
}

/// Per-seat difficulty. Only consulted for computer-controlled seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_new::new)]
pub struct Difficulties {
    /// Difficulty used when X is computer-controlled.
    pub x: Difficulty,
    /// Difficulty used when O is computer-controlled.
    pub o: Difficulty,
}

impl Difficulties {
    /// Same difficulty for both seats.
    pub fn uniform(difficulty: Difficulty) -> Self {
        Self::new(difficulty, difficulty)
    }

    /// Difficulty assigned to `seat`.
    pub fn for_player(&self, seat: Player) -> Difficulty {
        match seat {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Moves arrive through [`GameSession::request_move`].
    Human,
    /// Moves come from the engine at this difficulty.
    Ai(Difficulty),
}

/// Read-only snapshot handed to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The board.
    pub board: Board,
    /// Player to move (meaningless once the outcome is terminal).
    pub turn: Player,
    /// Current outcome.
    pub outcome: Outcome,
}

/// An engine decision waiting to be applied.
///
/// Tagged with the session generation it was computed for, so a move that
/// outlives a restart is discarded instead of landing on the new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMove {
    generation: u64,
    seat: Player,
    index: usize,
}

impl ScheduledMove {
    /// Generation the move was computed for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seat the move is for.
    pub fn seat(&self) -> Player {
        self.seat
    }

    /// Square to play (0-8).
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A single play-through, restartable in place.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Player,
    outcome: Outcome,
    mode: GameMode,
    difficulties: Difficulties,
    /// Seat the person takes in [`GameMode::HumanVsAi`].
    human_seat: Player,
    generation: u64,
    rng: StdRng,
}

impl GameSession {
    /// Creates a new session with X to move on an empty board.
    #[instrument]
    pub fn new(mode: GameMode, difficulties: Difficulties) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::InProgress,
            mode,
            difficulties,
            human_seat: Player::X,
            generation: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeds the random source so random tiers replay identically.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Chooses the seat the person takes in [`GameMode::HumanVsAi`].
    pub fn with_human_seat(mut self, seat: Player) -> Self {
        self.human_seat = seat;
        self
    }

    /// Returns a snapshot of board, turn and outcome.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
        }
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the per-seat difficulties.
    pub fn difficulties(&self) -> Difficulties {
        self.difficulties
    }

    /// Returns the seat a person takes in [`GameMode::HumanVsAi`].
    pub fn human_seat(&self) -> Player {
        self.human_seat
    }

    /// Returns the current generation; bumped by every restart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true once the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Who controls `seat` under the current mode.
    pub fn controller_of(&self, seat: Player) -> Control {
        let ai = Control::Ai(self.difficulties.for_player(seat));
        match self.mode {
            GameMode::HumanVsHuman => Control::Human,
            GameMode::AiVsAi => ai,
            GameMode::HumanVsAi if seat == self.human_seat => Control::Human,
            GameMode::HumanVsAi => ai,
        }
    }

    /// Applies a human-originated move.
    ///
    /// Ignored (returns `false`) when the game is over, the seat to move is
    /// computer-controlled, or the square is taken. An out-of-range index is
    /// a caller bug and trips a debug assertion.
    #[instrument(skip(self), fields(generation = self.generation, turn = %self.turn))]
    pub fn request_move(&mut self, index: usize) -> bool {
        debug_assert!(index < BOARD_SIZE, "move index {index} outside the board");

        if self.controller_of(self.turn) != Control::Human {
            debug!("Ignoring human request for computer seat");
            return false;
        }
        self.apply(index)
    }

    /// Computes the engine move if a computer seat is due to play.
    ///
    /// Returns `None` when the game is over or a person is to move. The move
    /// is not applied; pass it to [`GameSession::apply_scheduled`], possibly
    /// after a display delay.
    #[instrument(skip(self), fields(generation = self.generation, turn = %self.turn))]
    pub fn trigger_ai_if_due(&mut self) -> Option<ScheduledMove> {
        if self.is_finished() {
            return None;
        }
        let Control::Ai(difficulty) = self.controller_of(self.turn) else {
            return None;
        };

        match select_move(difficulty, self.turn, &self.board, &mut self.rng) {
            Ok(index) => Some(ScheduledMove {
                generation: self.generation,
                seat: self.turn,
                index,
            }),
            Err(e) => {
                error!(error = %e, "Engine invoked on an unfinished game without moves");
                None
            }
        }
    }

    /// Applies an engine move produced by [`GameSession::trigger_ai_if_due`].
    ///
    /// Moves from an earlier generation, for a seat that is not to move, or
    /// for a seat that is not computer-controlled are discarded.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn apply_scheduled(&mut self, scheduled: ScheduledMove) -> bool {
        if scheduled.generation != self.generation {
            debug!(
                stale_generation = scheduled.generation,
                "Discarding move from previous session generation"
            );
            return false;
        }
        if scheduled.seat != self.turn || !matches!(self.controller_of(self.turn), Control::Ai(_))
        {
            warn!(seat = %scheduled.seat, turn = %self.turn, "Discarding move for wrong seat");
            return false;
        }
        self.apply(scheduled.index)
    }

    /// Triggers and applies the due engine move with no delay.
    ///
    /// Returns `true` if a move was played.
    pub fn play_ai_turn(&mut self) -> bool {
        match self.trigger_ai_if_due() {
            Some(scheduled) => self.apply_scheduled(scheduled),
            None => false,
        }
    }

    /// Resets board, turn and outcome; keeps mode, difficulties and seats.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.outcome = Outcome::InProgress;
        self.generation += 1;
        info!(new_generation = self.generation, "Session restarted");
    }

    /// Discards the session (back to mode selection).
    #[instrument(skip(self), fields(mode = %self.mode, generation = self.generation))]
    pub fn abandon(self) {
        info!("Session abandoned");
    }

    /// Shared move path for both human and engine moves.
    fn apply(&mut self, index: usize) -> bool {
        if self.is_finished() {
            debug!(index, "Ignoring move after game end");
            return false;
        }

        let board = match self.board.place(index, self.turn) {
            Ok(board) => board,
            Err(e) => {
                debug!(index, error = %e, "Ignoring move");
                return false;
            }
        };

        let mover = self.turn;
        self.board = board;
        self.turn = mover.opponent();
        self.outcome = evaluate(&self.board);

        info!(index, player = %mover, outcome = %self.outcome, "Move applied");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hvh() -> GameSession {
        GameSession::new(GameMode::HumanVsHuman, Difficulties::default())
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = hvh();
        let view = session.view();
        assert_eq!(view.board, Board::new());
        assert_eq!(view.turn, Player::X);
        assert_eq!(view.outcome, Outcome::InProgress);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = hvh();
        assert!(session.request_move(4));
        assert_eq!(session.view().turn, Player::O);
        assert!(session.request_move(0));
        assert_eq!(session.view().turn, Player::X);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut session = hvh();
        session.request_move(4);
        let before = session.view();
        assert!(!session.request_move(4));
        assert_eq!(session.view(), before);
    }

    #[test]
    fn test_controller_by_mode() {
        let d = Difficulties::new(Difficulty::Random, Difficulty::Heuristic);

        let hva = GameSession::new(GameMode::HumanVsAi, d);
        assert_eq!(hva.controller_of(Player::X), Control::Human);
        assert_eq!(hva.controller_of(Player::O), Control::Ai(Difficulty::Heuristic));

        let hva = hva.with_human_seat(Player::O);
        assert_eq!(hva.controller_of(Player::X), Control::Ai(Difficulty::Random));
        assert_eq!(hva.controller_of(Player::O), Control::Human);

        let ava = GameSession::new(GameMode::AiVsAi, d);
        assert_eq!(ava.controller_of(Player::X), Control::Ai(Difficulty::Random));

        assert_eq!(hvh().controller_of(Player::O), Control::Human);
    }

    #[test]
    fn test_no_trigger_for_human_turn() {
        let mut session = GameSession::new(GameMode::HumanVsAi, Difficulties::default());
        assert_eq!(session.trigger_ai_if_due(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the board")]
    fn test_out_of_range_asserts_in_debug() {
        let mut session = hvh();
        session.request_move(9);
    }
}
