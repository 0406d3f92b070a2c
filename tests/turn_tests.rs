// Copyright (C) 2020-2026 Andy Kurnia.

use feudbot::alphabet::SWEDISH_ALPHABET;
use feudbot::board::{Board, Dim};
use feudbot::error::{Returns, ServiceError};
use feudbot::game_state::{GamePlayer, GameState, Rack, RackTile};
use feudbot::moves::{Candidate, ResolvedMove};
use feudbot::turn::{SubmitOutcome, Submitter, TurnOutcome, play_turn};
use feudbot::wire::MoveUpdate;

// Scripted submitter: hands out the queued outcomes in order and records
// every move it was asked to submit.
struct ScriptedSubmitter {
    outcomes: Vec<SubmitOutcome>,
    submitted: Vec<ResolvedMove>,
    passed: bool,
}

impl ScriptedSubmitter {
    fn new(outcomes: Vec<SubmitOutcome>) -> Self {
        Self {
            outcomes,
            submitted: Vec::new(),
            passed: false,
        }
    }
}

impl Submitter for ScriptedSubmitter {
    fn submit(
        &mut self,
        _state: &GameState,
        resolved: &ResolvedMove,
    ) -> Returns<SubmitOutcome> {
        self.submitted.push(resolved.clone());
        Ok(self.outcomes.remove(0))
    }

    fn pass(&mut self, _state: &GameState) -> Returns<()> {
        self.passed = true;
        Ok(())
    }
}

fn rejection() -> SubmitOutcome {
    SubmitOutcome::Rejected(ServiceError {
        error_type: "illegal_word".to_string(),
        message: "not in the dictionary".to_string(),
    })
}

fn acceptance(points: i32) -> SubmitOutcome {
    SubmitOutcome::Accepted(MoveUpdate {
        points,
        new_tiles: vec!["E".to_string()],
        updated: 5.0,
    })
}

fn candidate(label: &str, word: &str, score: i32) -> Candidate {
    Candidate {
        label: label.to_string(),
        word: word.to_string(),
        score,
    }
}

fn state_with_rack(rack: Rack) -> GameState {
    GameState {
        game_id: 7,
        ruleset: 4,
        board: Board::new(Dim::STANDARD),
        players: vec![
            GamePlayer {
                id: 1,
                username: "alfa".to_string(),
                position: 0,
                score: 0,
                rack: Some(rack),
            },
            GamePlayer {
                id: 2,
                username: "bertil".to_string(),
                position: 1,
                score: 0,
                rack: None,
            },
        ],
        turn: 0,
        my_player: 0,
        is_running: true,
        move_count: 0,
        last_move: None,
        updated: 1.0,
    }
}

fn letters(s: &str) -> Rack {
    s.chars().map(RackTile::Letter).collect()
}

#[test]
fn first_accepted_candidate_ends_the_turn() {
    let state = state_with_rack(letters("KATTSOL"));
    let candidates = vec![
        candidate("8H", "KATT", 24),
        candidate("H8", "SOL", 9),
    ];
    let mut submitter = ScriptedSubmitter::new(vec![acceptance(24)]);
    let outcome = play_turn(&SWEDISH_ALPHABET, &state, &candidates, &mut submitter).unwrap();

    assert_eq!(submitter.submitted.len(), 1);
    assert_eq!(submitter.submitted[0].word, "KATT");
    assert!(!submitter.passed);
    match outcome {
        TurnOutcome::Done(next) => {
            assert_eq!(next.me().score, 24);
            assert_eq!(next.board.get(7, 7), Some('K'));
            assert_eq!(next.move_count, 1);
        }
        TurnOutcome::Passed => panic!("expected a played turn"),
    }
}

#[test]
fn rejected_candidates_fall_through_to_the_next() {
    let state = state_with_rack(letters("KATTSOL"));
    let candidates = vec![
        candidate("8H", "KATT", 24),
        candidate("H8", "SOL", 9),
    ];
    let mut submitter = ScriptedSubmitter::new(vec![rejection(), acceptance(9)]);
    let outcome = play_turn(&SWEDISH_ALPHABET, &state, &candidates, &mut submitter).unwrap();

    assert_eq!(submitter.submitted.len(), 2);
    assert_eq!(submitter.submitted[1].word, "SOL");
    assert!(matches!(outcome, TurnOutcome::Done(_)));
}

#[test]
fn unresolvable_candidates_are_skipped_without_a_submission() {
    let state = state_with_rack(letters("BILSOL"));
    // the first label runs off the board, the second letter is not Swedish.
    let candidates = vec![
        candidate("8N", "BIL", 20),
        candidate("8H", "WAD", 15),
        candidate("H8", "SOL", 9),
    ];
    let mut submitter = ScriptedSubmitter::new(vec![acceptance(9)]);
    let outcome = play_turn(&SWEDISH_ALPHABET, &state, &candidates, &mut submitter).unwrap();

    assert_eq!(submitter.submitted.len(), 1);
    assert_eq!(submitter.submitted[0].word, "SOL");
    assert!(matches!(outcome, TurnOutcome::Done(_)));
}

#[test]
fn exhausted_candidates_pass_the_turn() {
    let state = state_with_rack(letters("KATT"));
    let candidates = vec![candidate("8H", "KATT", 24)];
    let mut submitter = ScriptedSubmitter::new(vec![rejection()]);
    let outcome = play_turn(&SWEDISH_ALPHABET, &state, &candidates, &mut submitter).unwrap();

    assert!(submitter.passed);
    assert!(matches!(outcome, TurnOutcome::Passed));
}

#[test]
fn empty_candidate_list_passes_immediately() {
    let state = state_with_rack(letters("KATT"));
    let mut submitter = ScriptedSubmitter::new(vec![]);
    let outcome = play_turn(&SWEDISH_ALPHABET, &state, &[], &mut submitter).unwrap();

    assert!(submitter.submitted.is_empty());
    assert!(submitter.passed);
    assert!(matches!(outcome, TurnOutcome::Passed));
}

#[test]
fn acceptance_with_an_inconsistent_rack_is_fatal() {
    // the service accepted a word using a tile the local rack never held.
    let state = state_with_rack(letters("AAAA"));
    let candidates = vec![candidate("8H", "KATT", 24)];
    let mut submitter = ScriptedSubmitter::new(vec![acceptance(24)]);
    let err = play_turn(&SWEDISH_ALPHABET, &state, &candidates, &mut submitter).unwrap_err();

    assert!(
        err.downcast_ref::<feudbot::error::RackInconsistency>()
            .is_some()
    );
}

#[test]
fn oracle_lowercase_resolves_to_a_blank_submission() {
    let state = state_with_rack(vec![
        RackTile::Blank,
        RackTile::Letter('L'),
    ]);
    let candidates = vec![candidate("8H", "öL", 4)];
    let mut submitter = ScriptedSubmitter::new(vec![acceptance(4)]);
    play_turn(&SWEDISH_ALPHABET, &state, &candidates, &mut submitter).unwrap();

    let placements = &submitter.submitted[0].placements;
    assert!(placements[0].is_blank);
    assert_eq!(placements[0].letter, 'Ö');
    assert!(!placements[1].is_blank);
}
