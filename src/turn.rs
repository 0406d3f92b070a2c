// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, game_state, moves, wire};
use tracing::{debug, info, warn};

// The external submission collaborator: commits a resolved move or passes
// the turn. Rejections are data, not transport failures.
pub enum SubmitOutcome {
    Accepted(wire::MoveUpdate),
    Rejected(error::ServiceError),
}

pub trait Submitter {
    fn submit(
        &mut self,
        state: &game_state::GameState,
        resolved: &moves::ResolvedMove,
    ) -> error::Returns<SubmitOutcome>;

    fn pass(&mut self, state: &game_state::GameState) -> error::Returns<()>;
}

#[derive(Debug)]
pub enum TurnOutcome {
    Done(game_state::GameState),
    Passed,
}

// Drives one turn: tries the ranked candidates strictly in order, one
// submission at a time, and passes when the list is exhausted. Resolution
// failures and service rejections are expected and advance to the next
// candidate; a rack inconsistency after acceptance is fatal.
pub fn play_turn(
    alphabet: &alphabet::Alphabet,
    state: &game_state::GameState,
    candidates: &[moves::Candidate],
    submitter: &mut dyn Submitter,
) -> error::Returns<TurnOutcome> {
    for candidate in candidates {
        info!(
            label = %candidate.label,
            word = %candidate.word,
            score = candidate.score,
            "trying candidate"
        );
        let resolved = match moves::resolve(
            alphabet,
            &state.board,
            candidate,
            moves::CaseConvention::Oracle,
        ) {
            Ok(resolved) => resolved,
            Err(err) => {
                debug!(word = %candidate.word, %err, "candidate does not fit the board");
                continue;
            }
        };
        match submitter.submit(state, &resolved)? {
            SubmitOutcome::Accepted(update) => {
                info!(word = %resolved.word, points = update.points, "move accepted");
                return Ok(TurnOutcome::Done(state.with_play(&resolved, &update)?));
            }
            SubmitOutcome::Rejected(rejection) => {
                warn!(word = %resolved.word, %rejection, "service rejected move");
            }
        }
    }
    info!("no playable candidate, passing");
    submitter.pass(state)?;
    Ok(TurnOutcome::Passed)
}
