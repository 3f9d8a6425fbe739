//! Session integration tests.
//!
//! These drive complete games through the public API and check the board
//! invariants after every operation.

use std::time::Duration;

use set_engine::cards::{Card, Deck};
use set_engine::core::{CardId, GameMode, MissPolicy, SessionConfig};
use set_engine::rules::board_has_set;
use set_engine::session::{
    GameEvent, Phase, SelectOutcome, Session, TextPresenter, MSG_NOT_A_SET, MSG_NO_MORE_SETS,
    MSG_SET_FOUND,
};

fn full_config(seed: u64) -> SessionConfig {
    SessionConfig::default().with_mode(GameMode::Full).with_seed(seed)
}

fn select_all(session: &mut Session, ids: [CardId; 3]) -> SelectOutcome {
    session.toggle_select(ids[0]).unwrap();
    session.toggle_select(ids[1]).unwrap();
    session.toggle_select(ids[2]).unwrap()
}

/// A seed whose opening board is exactly twelve cards.
fn session_with_exact_board() -> Session {
    (0..)
        .map(|seed| Session::new(full_config(seed)))
        .find(|s| s.board().len() == 12)
        .unwrap()
}

/// Nine cards: six that can never form a set plus one set of threes.
fn capped_deck() -> Deck {
    let v = |n: u8, s: u8, c: u8, f: u8| Card::from_values([Some(n), Some(s), Some(c), Some(f)]);
    Deck::from_cards(vec![
        v(0, 0, 0, 0),
        v(0, 0, 0, 1),
        v(0, 0, 1, 0),
        v(0, 1, 0, 0),
        v(0, 1, 1, 1),
        v(0, 0, 1, 1),
        v(2, 0, 0, 0),
        v(2, 1, 1, 1),
        v(2, 2, 2, 2),
    ])
}

fn capped_session() -> Session {
    let config = full_config(1).with_target_board_size(9);
    Session::from_deck(config, GameMode::Full, capped_deck())
}

// =============================================================================
// Dealing
// =============================================================================

/// Same seed, same game.
#[test]
fn test_seeded_sessions_match() {
    let a = Session::new(full_config(77));
    let b = Session::new(full_config(77));
    assert_eq!(a.board(), b.board());
    assert_eq!(a.deck_remaining(), b.deck_remaining());
}

/// Every mode opens with at least its target size and a set on the board.
#[test]
fn test_opening_board_all_modes() {
    for mode in GameMode::ALL {
        for seed in 0..10 {
            let session = Session::new(SessionConfig::default().with_mode(mode).with_seed(seed));
            assert!(session.board().len() >= mode.target_board_size(), "mode {}", mode);
            assert!(board_has_set(session.board()), "mode {}", mode);
            assert!(!session.is_game_over());
        }
    }
}

#[test]
fn test_deal_more_refused() {
    let mut session = capped_session();
    // All nine cards are already on the board.
    assert_eq!(session.deck_remaining(), 0);
    assert!(!session.deal_more());
    assert_eq!(session.board().len(), 9);
}

// =============================================================================
// Matching
// =============================================================================

/// On a target-size board matched cards are replaced in place.
#[test]
fn test_set_replaced_in_place() {
    let mut session = session_with_exact_board();
    let before: Vec<CardId> = session.board().iter().map(|s| s.id).collect();
    let deck_before = session.deck_remaining();
    let set = session.hint().unwrap();

    assert_eq!(select_all(&mut session, set), SelectOutcome::SetFound);

    let after: Vec<CardId> = session.board().iter().map(|s| s.id).collect();
    for (pos, old) in before.iter().enumerate() {
        if set.contains(old) {
            assert!(!before.contains(&after[pos]), "slot {} kept a stale card", pos);
        } else {
            assert_eq!(after[pos], *old);
        }
    }
    let extra = session.board().len() - 12;
    assert_eq!(deck_before - session.deck_remaining(), 3 + extra);
    assert!(board_has_set(session.board()));
}

/// Above the target size matched cards are removed, not replaced.
#[test]
fn test_set_removed_from_oversized_board() {
    let mut session = session_with_exact_board();
    assert!(session.deal_more());
    assert_eq!(session.board().len(), 15);
    let deck_before = session.deck_remaining();
    let set = session.hint().unwrap();
    let survivors: Vec<CardId> = session
        .board()
        .iter()
        .map(|s| s.id)
        .filter(|id| !set.contains(id))
        .collect();

    assert_eq!(select_all(&mut session, set), SelectOutcome::SetFound);

    let after: Vec<CardId> = session.board().iter().map(|s| s.id).collect();
    assert_eq!(&after[..12], survivors.as_slice());
    assert_eq!(deck_before - session.deck_remaining(), after.len() - 12);
}

#[test]
fn test_miss_leaves_board_untouched() {
    let mut session = Session::new(full_config(3));
    let board = session.board().to_vec();
    let ids: Vec<CardId> = board.iter().map(|s| s.id).collect();

    // Find a non-set triple among the first cards.
    let mut triple = None;
    'outer: for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            for k in (j + 1)..ids.len() {
                if !set_engine::is_valid_set(&board[i].card, &board[j].card, &board[k].card) {
                    triple = Some([ids[i], ids[j], ids[k]]);
                    break 'outer;
                }
            }
        }
    }

    assert_eq!(select_all(&mut session, triple.unwrap()), SelectOutcome::NotASet);
    assert_eq!(session.board(), board.as_slice());
    assert!(session.selection().is_empty());
    assert_eq!(session.sets_found(), 0);
}

/// Under the retain policy a fourth click is ignored.
#[test]
fn test_retain_policy_ignores_fourth() {
    let config = full_config(3).with_miss_policy(MissPolicy::Retain);
    let mut session = Session::new(config);
    let board = session.board().to_vec();

    let n = board.len();
    let triple = (0..n)
        .flat_map(|i| ((i + 1)..n).flat_map(move |j| ((j + 1)..n).map(move |k| [i, j, k])))
        .find(|&[i, j, k]| !set_engine::is_valid_set(&board[i].card, &board[j].card, &board[k].card))
        .unwrap();
    let ids = triple.map(|i| board[i].id);
    let fourth = board.iter().map(|s| s.id).find(|id| !ids.contains(id)).unwrap();

    assert_eq!(select_all(&mut session, ids), SelectOutcome::NotASet);
    assert_eq!(session.toggle_select(fourth), Ok(SelectOutcome::Ignored));
    assert_eq!(session.selection(), &ids);
    assert_eq!(session.phase(), Phase::Playing { selected: 3 });
}

/// Playing every hint finishes the deck with the counts balanced.
#[test]
fn test_play_full_game() {
    for seed in 0..5 {
        let mut session = Session::new(full_config(seed));
        let mut guard = 0;
        while let Some(set) = session.hint() {
            assert_eq!(select_all(&mut session, set), SelectOutcome::SetFound);
            assert!(session.is_game_over() || board_has_set(session.board()));
            assert_eq!(
                session.deck_remaining() + session.board().len() + 3 * session.sets_found() as usize,
                81
            );
            guard += 1;
            assert!(guard <= 27);
        }
        assert!(session.is_game_over());
        assert_eq!(session.deck_remaining(), 0);
        assert!(!board_has_set(session.board()));
    }
}

// =============================================================================
// Game over
// =============================================================================

#[test]
fn test_last_set_ends_game() {
    let mut session = capped_session();
    assert_eq!(session.board().len(), 9);
    let set = session.hint().unwrap();
    // The only set is the three cards with number three.
    for id in set {
        assert_eq!(session.card(id).unwrap().number(), Some(3));
    }

    assert_eq!(select_all(&mut session, set), SelectOutcome::SetFound);
    assert_eq!(session.board().len(), 6);
    assert!(session.is_game_over());
    assert_eq!(session.phase(), Phase::GameOver);
    assert!(matches!(
        session.history().last().map(|r| &r.event),
        Some(GameEvent::GameOver)
    ));
}

#[test]
fn test_selection_rejected_after_game_over() {
    let mut session = capped_session();
    let set = session.hint().unwrap();
    select_all(&mut session, set);
    let board = session.board().to_vec();

    let id = board[0].id;
    assert_eq!(session.toggle_select(id), Ok(SelectOutcome::Rejected));
    assert_eq!(session.status(), Some(MSG_NO_MORE_SETS));
    assert!(session.selection().is_empty());
    assert_eq!(session.board(), board.as_slice());

    // Stale ids are rejected too rather than reported unknown.
    assert_eq!(session.toggle_select(CardId(500)), Ok(SelectOutcome::Rejected));
}

#[test]
fn test_tick_stops_at_game_over() {
    let mut session = capped_session();
    session.advance_time(Duration::from_millis(2500));
    assert_eq!(session.elapsed(), Duration::from_secs(2));

    let set = session.hint().unwrap();
    select_all(&mut session, set);
    session.advance_time(Duration::from_secs(10));
    assert_eq!(session.elapsed(), Duration::from_secs(2));
}

#[test]
fn test_new_game_after_game_over() {
    let mut session = capped_session();
    let set = session.hint().unwrap();
    select_all(&mut session, set);
    assert!(session.is_game_over());

    session.new_game(GameMode::Full);
    assert!(!session.is_game_over());
    assert_eq!(session.sets_found(), 0);
    assert_eq!(session.elapsed(), Duration::ZERO);
    assert!(board_has_set(session.board()));

    session.advance_time(Duration::from_secs(1));
    assert_eq!(session.elapsed(), Duration::from_secs(1));
}

// =============================================================================
// Notifications and presentation
// =============================================================================

/// The most recent notification wins and lasts its full delay.
#[test]
fn test_latest_notification_wins() {
    let mut session = capped_session();
    let cap: Vec<CardId> = session
        .board()
        .iter()
        .filter(|s| s.card.number() == Some(1))
        .map(|s| s.id)
        .collect();

    select_all(&mut session, [cap[0], cap[1], cap[2]]);
    assert_eq!(session.status(), Some(MSG_NOT_A_SET));

    session.advance_time(Duration::from_millis(600));
    let set = session.hint().unwrap();
    select_all(&mut session, set);
    assert_eq!(session.status(), Some(MSG_SET_FOUND));

    session.advance_time(Duration::from_millis(600));
    assert_eq!(session.status(), Some(MSG_SET_FOUND));
    session.advance_time(Duration::from_millis(400));
    assert_eq!(session.status(), None);
}

#[test]
fn test_custom_notification_delay() {
    let config = full_config(3).with_notification_delay(Duration::from_millis(250));
    let mut session = Session::new(config);
    let set = session.hint().unwrap();
    select_all(&mut session, set);

    session.advance_time(Duration::from_millis(249));
    assert!(session.status().is_some());
    session.advance_time(Duration::from_millis(1));
    assert!(session.status().is_none());
}

#[test]
fn test_present_replays_events() {
    let mut session = capped_session();
    let mut presenter = TextPresenter::new();

    session.present(&mut presenter);
    assert_eq!(presenter.frames.len(), 1);
    assert!(presenter.messages.is_empty());
    assert!(presenter.last_frame().unwrap().contains("0 cards left in deck"));

    let set = session.hint().unwrap();
    select_all(&mut session, set);
    session.present(&mut presenter);

    assert_eq!(presenter.messages, vec![MSG_SET_FOUND.to_string()]);
    assert_eq!(presenter.notification.as_deref(), Some(MSG_SET_FOUND));
    assert!(presenter.game_over_shown);
    assert_eq!(presenter.last_frame().unwrap().lines().count(), 6 + 2);

    session.advance_time(Duration::from_secs(1));
    session.present(&mut presenter);
    assert_eq!(presenter.notification, None);
    // Already replayed events are not shown twice.
    assert_eq!(presenter.messages.len(), 1);
}
