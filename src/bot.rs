// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, config, error, game_state, gcg, oracle, session, turn};
use tracing::{debug, info, warn};

// Polls the service and plays every game where it is our turn, one at a
// time. One cycle: fetch status, evaluate updated games, accept configured
// invitations, sleep.
pub struct Bot {
    session: session::Session,
    log: gcg::TurnLog,
    oracle: oracle::Oracle,
    config: config::Config,
    // highest service timestamp already handled.
    last_updated: f64,
}

impl Bot {
    pub fn new(config: config::Config) -> error::Returns<Bot> {
        let session = session::Session::login(&config.username, &config.password)?;
        Ok(Bot {
            log: gcg::TurnLog::new(&config.games_dir),
            oracle: oracle::Oracle::new(&config.oracle),
            session,
            config,
            last_updated: 0.0,
        })
    }

    pub fn run(&mut self) -> error::Returns<()> {
        loop {
            if let Err(err) = self.poll_once() {
                warn!(%err, "polling cycle failed");
            }
            std::thread::sleep(std::time::Duration::from_secs(self.config.poll_seconds));
        }
    }

    // A game failing to evaluate does not stop the cycle.
    pub fn poll_once(&mut self) -> error::Returns<()> {
        info!("checking for updates");
        let status = self.session.status()?;
        let mut watermark = self.last_updated;
        for game_status in &status.games {
            if game_status.updated > self.last_updated {
                info!(game_id = game_status.id, "game updated");
                if let Err(err) = self.evaluate(game_status.id) {
                    warn!(game_id = game_status.id, %err, "failed to evaluate game");
                }
                watermark = watermark.max(game_status.updated);
            }
        }
        for invite in &status.invites_received {
            if self.config.accept_rulesets.contains(&invite.ruleset) {
                info!(
                    invite_id = invite.id,
                    ruleset = invite.ruleset,
                    "accepting invitation"
                );
                self.session.accept_invitation(invite.id)?;
            } else {
                debug!(
                    invite_id = invite.id,
                    ruleset = invite.ruleset,
                    "ignoring invitation"
                );
            }
        }
        self.last_updated = watermark;
        Ok(())
    }

    fn evaluate(&mut self, game_id: u64) -> error::Returns<()> {
        let game = self.session.game(game_id)?;
        let Some(alphabet) = alphabet::alphabet_for_ruleset(game.ruleset) else {
            return_error!(format!(
                "game {} has unsupported ruleset {}",
                game.id, game.ruleset
            ));
        };
        let state = game_state::GameState::from_wire(alphabet, &game, self.session.user_id)?;
        debug!(game_id, "board\n{}", state.board);
        if !state.is_running {
            info!(game_id, "game is over");
            if let Some(last) = &state.last_move {
                self.log.append_move(&state, last)?;
            }
            return Ok(());
        }
        match &state.last_move {
            // a game with no moves yet gets its header block.
            None => self.log.write_header(&state)?,
            Some(last) => self.log.append_move(&state, last)?,
        }
        if state.is_my_turn() {
            self.log.append_incomplete(&state)?;
            let candidates = self.oracle.suggest(&self.log.path(game_id))?;
            match turn::play_turn(alphabet, &state, &candidates, &mut self.session)? {
                turn::TurnOutcome::Done(next) => {
                    info!(game_id, score = next.me().score, "turn played");
                }
                turn::TurnOutcome::Passed => info!(game_id, "turn passed"),
            }
            // the definitive log line reflects the service's view of the move.
            let refreshed = self.session.game(game_id)?;
            let state =
                game_state::GameState::from_wire(alphabet, &refreshed, self.session.user_id)?;
            if let Some(last) = &state.last_move {
                self.log.append_move(&state, last)?;
            }
        }
        Ok(())
    }
}
