//! Scenario tests for the game engine.

use std::cell::RefCell;
use std::rc::Rc;

use tally_toe_core::{
    BLUE_SCORE_KEY, Cell, GameEngine, GameState, IgnoreReason, MemoryStore, Outcome, Player,
    Position, RED_SCORE_KEY, ScoreStore, Selection,
};

/// Presenter that keeps every snapshot it receives.
fn recorder() -> (Rc<RefCell<Vec<GameState>>>, impl FnMut(&GameState)) {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    (frames, move |state: &GameState| {
        sink.borrow_mut().push(state.clone())
    })
}

fn play<S: ScoreStore, P: tally_toe_core::Presenter>(
    engine: &mut GameEngine<S, P>,
    moves: &[usize],
) {
    for &index in moves {
        assert!(
            engine.cell_selected(index).is_accepted(),
            "move {} should be accepted",
            index
        );
    }
}

#[test]
fn test_blue_wins_column_scenario() {
    let mut store = MemoryStore::new();
    let mut engine = GameEngine::initialize(&mut store, |_: &GameState| {});

    play(&mut engine, &[0, 1, 3, 4]);
    assert_eq!(engine.state().outcome(), Outcome::InProgress);
    assert_eq!(
        engine.cell_selected(6),
        Selection::Accepted(Outcome::BlueWins)
    );

    let board = engine.state().board();
    assert_eq!(board.get(Position::TopLeft), Cell::Blue);
    assert_eq!(board.get(Position::MiddleLeft), Cell::Blue);
    assert_eq!(board.get(Position::BottomLeft), Cell::Blue);
    assert_eq!(engine.state().scores().blue(), 1);
    assert_eq!(engine.state().scores().red(), 0);

    drop(engine);
    assert_eq!(store.peek(BLUE_SCORE_KEY), Some("1"));
    assert_eq!(store.peek(RED_SCORE_KEY), None);
}

#[test]
fn test_red_wins_row_scenario() {
    let mut engine = GameEngine::initialize(
        MemoryStore::with_entries([(RED_SCORE_KEY, "4")]),
        |_: &GameState| {},
    );
    // Blue: 0, 1, 8  Red: 3, 4, 5
    play(&mut engine, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(engine.state().outcome(), Outcome::RedWins);
    assert_eq!(engine.state().scores().red(), 5);

    let (store, _) = engine.into_parts();
    assert_eq!(store.peek(RED_SCORE_KEY), Some("5"));
    assert_eq!(store.peek(BLUE_SCORE_KEY), None);
}

#[test]
fn test_draw_scenario_leaves_scores() {
    let store = MemoryStore::with_entries([(BLUE_SCORE_KEY, "2"), (RED_SCORE_KEY, "3")]);
    let mut engine = GameEngine::initialize(store.clone(), |_: &GameState| {});

    // Final board: X O X / X O O / O X X
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.state().outcome(), Outcome::Draw);
    assert_eq!(engine.state().scores().blue(), 2);
    assert_eq!(engine.state().scores().red(), 3);

    let (after, _) = engine.into_parts();
    assert_eq!(after, store, "draw must not write to the store");
}

#[test]
fn test_occupied_cell_is_noop() {
    let (frames, presenter) = recorder();
    let mut engine = GameEngine::initialize(MemoryStore::new(), presenter);

    engine.cell_selected(4);
    let before = engine.snapshot();
    assert_eq!(
        engine.cell_selected(4),
        Selection::Ignored(IgnoreReason::Occupied(Position::Center))
    );
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.state().turn(), Player::Red);
    // initialize + one accepted move
    assert_eq!(frames.borrow().len(), 2);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut engine = GameEngine::initialize(MemoryStore::new(), |_: &GameState| {});
    play(&mut engine, &[0, 1, 3, 4, 6]);
    let before = engine.snapshot();

    assert_eq!(
        engine.cell_selected(2),
        Selection::Ignored(IgnoreReason::GameOver)
    );
    assert_eq!(
        engine.cell_selected(0),
        Selection::Ignored(IgnoreReason::GameOver)
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_out_of_range_is_noop() {
    let (frames, presenter) = recorder();
    let mut engine = GameEngine::initialize(MemoryStore::new(), presenter);
    assert!(!engine.cell_selected(9).is_accepted());
    assert!(!engine.cell_selected(usize::MAX).is_accepted());
    assert_eq!(engine.state(), &GameState::default());
    assert_eq!(frames.borrow().len(), 1);
}

#[test]
fn test_reset_is_idempotent_and_keeps_scores() {
    let (frames, presenter) = recorder();
    let mut engine = GameEngine::initialize(MemoryStore::new(), presenter);
    play(&mut engine, &[0, 1, 3, 4, 6]);

    engine.reset();
    let once = engine.snapshot();
    engine.reset();
    assert_eq!(engine.state(), &once);

    assert_eq!(once.turn(), Player::Blue);
    assert_eq!(once.outcome(), Outcome::InProgress);
    assert!(once.board().cells().iter().all(|c| c.is_empty()));
    assert_eq!(once.scores().blue(), 1);

    // initialize + 5 moves + 2 resets
    assert_eq!(frames.borrow().len(), 8);
    assert_eq!(frames.borrow().last(), Some(&once));
}

#[test]
fn test_presenter_sees_initial_state() {
    let (frames, presenter) = recorder();
    let _engine = GameEngine::initialize(
        MemoryStore::with_entries([(BLUE_SCORE_KEY, "9")]),
        presenter,
    );
    let frames = frames.borrow();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].scores().blue(), 9);
    assert_eq!(frames[0].status_line(), "Next player: Blue");
}

#[test]
fn test_score_persists_across_sessions() {
    let mut store = MemoryStore::new();

    {
        let mut engine = GameEngine::initialize(&mut store, |_: &GameState| {});
        play(&mut engine, &[0, 1, 3, 4, 6]);
        engine.reset();
        play(&mut engine, &[2, 0, 5, 1, 8]);
        assert_eq!(engine.state().scores().blue(), 2);
    }
    assert_eq!(store.get(BLUE_SCORE_KEY).unwrap().as_deref(), Some("2"));

    let engine = GameEngine::initialize(&mut store, |_: &GameState| {});
    assert_eq!(engine.state().scores().blue(), 2);
    assert_eq!(engine.state().scores().red(), 0);
}

#[test]
fn test_corrupt_scores_default_to_zero() {
    let store = MemoryStore::with_entries([(BLUE_SCORE_KEY, "lots"), (RED_SCORE_KEY, "")]);
    let mut engine = GameEngine::initialize(store, |_: &GameState| {});
    assert_eq!(engine.state().scores().blue(), 0);
    assert_eq!(engine.state().scores().red(), 0);

    play(&mut engine, &[0, 1, 3, 4, 6]);
    let (store, _) = engine.into_parts();
    assert_eq!(store.peek(BLUE_SCORE_KEY), Some("1"));
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::initialize(MemoryStore::new(), |_: &GameState| {});
    engine.select(Position::Center);
    let json = serde_json::to_value(engine.state()).expect("serialize");
    assert_eq!(json["turn"], "Red");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["cells"][4], "Blue");
    assert_eq!(json["scores"]["blue"], 0);
}

#[test]
fn test_scores_with_trailing_text_keep_leading_digits() {
    let store = MemoryStore::with_entries([(BLUE_SCORE_KEY, "12abc"), (RED_SCORE_KEY, "3.7")]);
    let mut engine = GameEngine::initialize(store, |_: &GameState| {});
    assert_eq!(engine.state().scores().blue(), 12);
    assert_eq!(engine.state().scores().red(), 3);

    play(&mut engine, &[0, 1, 3, 4, 6]);
    let (store, _) = engine.into_parts();
    assert_eq!(store.peek(BLUE_SCORE_KEY), Some("13"));
    assert_eq!(store.peek(RED_SCORE_KEY), Some("3.7"));
}

/// Store whose backend is unreachable: every read and write fails.
#[derive(Debug, Default)]
struct OfflineStore {
    reads: usize,
    writes: usize,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("score store offline")]
struct StoreOffline;

impl ScoreStore for OfflineStore {
    type Error = StoreOffline;

    fn get(&mut self, _key: &str) -> Result<Option<String>, StoreOffline> {
        self.reads += 1;
        Err(StoreOffline)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreOffline> {
        self.writes += 1;
        Err(StoreOffline)
    }
}

#[test]
fn test_unreadable_store_starts_at_zero() {
    let (frames, presenter) = recorder();
    let engine = GameEngine::initialize(OfflineStore::default(), presenter);
    assert_eq!(engine.state().scores().blue(), 0);
    assert_eq!(engine.state().scores().red(), 0);
    assert_eq!(frames.borrow().len(), 1);

    let (store, _) = engine.into_parts();
    assert_eq!(store.reads, 2);
}

#[test]
fn test_failed_score_write_keeps_in_memory_win() {
    let mut engine = GameEngine::initialize(OfflineStore::default(), |_: &GameState| {});
    play(&mut engine, &[0, 1, 3, 4]);
    assert_eq!(
        engine.cell_selected(6),
        Selection::Accepted(Outcome::BlueWins)
    );
    assert_eq!(engine.state().scores().blue(), 1);
    assert_eq!(engine.state().scores().red(), 0);

    // The next game still counts on top of the unsaved win.
    engine.reset();
    assert_eq!(engine.state().scores().blue(), 1);
    play(&mut engine, &[2, 0, 5, 1, 8]);
    assert_eq!(engine.state().scores().blue(), 2);

    let (store, _) = engine.into_parts();
    assert_eq!(store.writes, 2);
}
