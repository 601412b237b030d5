//! Tests for session flow: turns, AI triggering, restarts and stale moves.

use gridlock_tictactoe::{
    Board, Difficulties, Difficulty, GameMode, GameSession, Outcome, Player, Square,
};

fn hvh() -> GameSession {
    GameSession::new(GameMode::HumanVsHuman, Difficulties::default())
}

fn play(session: &mut GameSession, moves: &[usize]) {
    for &index in moves {
        assert!(session.request_move(index), "move {index} rejected");
    }
}

#[test]
fn test_second_player_main_diagonal_win() {
    let mut session = hvh();
    play(&mut session, &[1, 0, 2, 4, 3, 8]);

    let view = session.view();
    assert_eq!(view.outcome, Outcome::Won(Player::O));
    assert!(session.is_finished());
}

#[test]
fn test_alternating_fill_is_draw() {
    let mut session = hvh();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let view = session.view();
    assert_eq!(view.outcome, Outcome::Draw);
    assert_eq!(view.board, "XOX/XOO/OXX".parse::<Board>().unwrap());
}

#[test]
fn test_view_is_idempotent() {
    let mut session = hvh();
    play(&mut session, &[4, 0]);
    assert_eq!(session.view(), session.view());
}

#[test]
fn test_occupied_request_leaves_state_unchanged() {
    let mut session = hvh();
    play(&mut session, &[4]);
    let before = session.view();

    assert!(!session.request_move(4));
    assert_eq!(session.view(), before);
    assert_eq!(before.board.get(4), Ok(Square::Occupied(Player::X)));
}

#[test]
fn test_moves_after_game_end_are_ignored() {
    let mut session = hvh();
    play(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(session.view().outcome, Outcome::Won(Player::X));

    let before = session.view();
    assert!(!session.request_move(8));
    assert_eq!(session.view(), before);
}

#[test]
fn test_human_vs_ai_flow() {
    let mut session = GameSession::new(
        GameMode::HumanVsAi,
        Difficulties::uniform(Difficulty::ExhaustiveSearch),
    );

    // Human (X) to move: nothing for the engine to do.
    assert_eq!(session.trigger_ai_if_due(), None);
    assert!(session.request_move(0));

    // Engine (O) to move: a human request is refused.
    let before = session.view();
    assert!(!session.request_move(1));
    assert_eq!(session.view(), before);

    let scheduled = session.trigger_ai_if_due().expect("engine should be due");
    assert_eq!(scheduled.seat(), Player::O);
    assert_eq!(scheduled.generation(), 0);
    // The only non-losing reply to a corner opening is the center.
    assert_eq!(scheduled.index(), 4);

    assert!(session.apply_scheduled(scheduled));
    assert_eq!(session.view().turn, Player::X);
}

#[test]
fn test_scheduled_move_applies_once() {
    let mut session = GameSession::new(GameMode::AiVsAi, Difficulties::default());
    let scheduled = session.trigger_ai_if_due().unwrap();

    assert!(session.apply_scheduled(scheduled));
    assert!(!session.apply_scheduled(scheduled));
    assert_eq!(session.view().board.occupied_count(), 1);
}

#[test]
fn test_stale_move_discarded_after_restart() {
    let mut session =
        GameSession::new(GameMode::AiVsAi, Difficulties::uniform(Difficulty::Random)).with_seed(9);
    let stale = session.trigger_ai_if_due().unwrap();

    session.restart();
    assert_eq!(session.generation(), 1);
    assert!(!session.apply_scheduled(stale));
    assert_eq!(session.view().board, Board::new());

    let fresh = session.trigger_ai_if_due().unwrap();
    assert_eq!(fresh.generation(), 1);
    assert!(session.apply_scheduled(fresh));
}

#[test]
fn test_restart_keeps_configuration() {
    let difficulties = Difficulties::new(Difficulty::Heuristic, Difficulty::Random);
    let mut session =
        GameSession::new(GameMode::HumanVsAi, difficulties).with_human_seat(Player::O);
    while session.play_ai_turn() || session.request_move_first_empty() {}
    assert!(session.is_finished());

    session.restart();
    let view = session.view();
    assert_eq!(view.board, Board::new());
    assert_eq!(view.turn, Player::X);
    assert_eq!(view.outcome, Outcome::InProgress);
    assert_eq!(session.mode(), GameMode::HumanVsAi);
    assert_eq!(session.difficulties(), difficulties);
    assert_eq!(session.human_seat(), Player::O);
}

#[test]
fn test_exhaustive_self_play_draws() {
    let mut session = GameSession::new(
        GameMode::AiVsAi,
        Difficulties::uniform(Difficulty::ExhaustiveSearch),
    );
    let mut plies = 0;
    while session.play_ai_turn() {
        plies += 1;
    }
    assert_eq!(plies, 9);
    assert_eq!(session.view().outcome, Outcome::Draw);
    assert_eq!(session.trigger_ai_if_due(), None);
}

#[test]
fn test_exhaustive_never_loses_to_random() {
    for seed in 0..20 {
        let mut session = GameSession::new(
            GameMode::AiVsAi,
            Difficulties::new(Difficulty::Random, Difficulty::ExhaustiveSearch),
        )
        .with_seed(seed);
        while session.play_ai_turn() {}
        assert_ne!(session.view().outcome, Outcome::Won(Player::X), "seed {seed}");
    }
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let run = |seed| {
        let mut session =
            GameSession::new(GameMode::AiVsAi, Difficulties::uniform(Difficulty::Random))
                .with_seed(seed);
        while session.play_ai_turn() {}
        session.view()
    };
    assert_eq!(run(1234), run(1234));
}

#[test]
fn test_abandon_consumes_session() {
    let session = hvh();
    session.abandon();
}

/// Test helper: human plays the lowest empty square.
trait FirstEmpty {
    fn request_move_first_empty(&mut self) -> bool;
}

impl FirstEmpty for GameSession {
    fn request_move_first_empty(&mut self) -> bool {
        let board = self.view().board;
        match (0..9).find(|&i| board.is_empty(i)) {
            Some(index) => self.request_move(index),
            None => false,
        }
    }
}

#[test]
fn test_view_serializes_for_front_ends() {
    let mut session = hvh();
    play(&mut session, &[4]);

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["turn"], "o");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "x");
}
