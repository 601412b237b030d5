//! Batch computer-vs-computer games.

use gridlock_tictactoe::{Difficulties, GameMode, GameSession, Outcome, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None if outcome.is_terminal() => self.draws += 1,
            None => debug!("Recorded unfinished game"),
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games back to back in one session, restarting between them.
///
/// With a seed the whole batch is reproducible.
#[instrument]
pub fn run(games: u32, difficulties: Difficulties, seed: Option<u64>) -> Tally {
    let mut session = GameSession::new(GameMode::AiVsAi, difficulties);
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    let mut tally = Tally::default();
    for game in 0..games {
        if game > 0 {
            session.restart();
        }
        while session.play_ai_turn() {}
        let outcome = session.view().outcome;
        debug!(game, %outcome, "Game finished");
        tally.record(outcome);
    }

    info!(%tally, "Simulation complete");
    session.abandon();
    tally
}
