// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, game_state, moves, turn, wire};
use rand::Rng;
use tracing::debug;

// The service is sharded across numbered hosts; any of them will do.
fn random_host() -> String {
    format!("game{:02}.wordfeud.com", rand::rng().random_range(0..6))
}

// Cookie-authenticated session against the game service. All calls block;
// the engine itself performs no I/O.
pub struct Session {
    client: reqwest::blocking::Client,
    base_url: String,
    username: String,
    password: String,
    pub user_id: u64,
}

impl Session {
    pub fn login(username: &str, password: &str) -> error::Returns<Session> {
        let client = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .build()?;
        let mut session = Session {
            client,
            base_url: format!("http://{}/wf/", random_host()),
            username: username.to_string(),
            password: password.to_string(),
            user_id: 0,
        };
        session.relogin()?;
        Ok(session)
    }

    fn relogin(&mut self) -> error::Returns<()> {
        let body = serde_json::json!({
            "username": self.username,
            "password": self.password,
        });
        let content = self.post_once("user/login/", body.to_string())?;
        let user: wire::UserData = serde_json::from_value(content)?;
        debug!(user_id = user.id, username = %user.username, "logged in");
        self.user_id = user.id;
        Ok(())
    }

    fn post_once(&self, action: &str, body: String) -> error::Returns<serde_json::Value> {
        let url = format!("{}{}", self.base_url, action);
        debug!(%url, "post");
        let envelope: wire::Envelope = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()?
            .json()?;
        Ok(envelope.into_content()?)
    }

    // An expired cookie surfaces as a login_required error; log in again and
    // retry once.
    fn post(&mut self, action: &str, body: String) -> error::Returns<serde_json::Value> {
        match self.post_once(action, body.clone()) {
            Err(err) => match err.downcast::<error::ServiceError>() {
                Ok(service_err) if service_err.error_type == "login_required" => {
                    debug!("session expired, logging in again");
                    self.relogin()?;
                    self.post_once(action, body)
                }
                Ok(service_err) => Err(service_err),
                Err(err) => Err(err),
            },
            ok => ok,
        }
    }

    pub fn status(&mut self) -> error::Returns<wire::Status> {
        let content = self.post("user/status/", String::new())?;
        Ok(serde_json::from_value(content)?)
    }

    pub fn game(&mut self, game_id: u64) -> error::Returns<wire::Game> {
        let content = self.post(&format!("game/{game_id}/"), String::new())?;
        let response: wire::GameResponse = serde_json::from_value(content)?;
        Ok(response.game)
    }

    pub fn accept_invitation(&mut self, invite_id: u64) -> error::Returns<()> {
        self.post(&format!("invite/{invite_id}/accept/"), String::new())?;
        Ok(())
    }
}

impl turn::Submitter for Session {
    fn submit(
        &mut self,
        state: &game_state::GameState,
        resolved: &moves::ResolvedMove,
    ) -> error::Returns<turn::SubmitOutcome> {
        let request = wire::MoveRequest {
            ruleset: state.ruleset,
            words: vec![resolved.word.clone()],
            tiles: resolved
                .placements
                .iter()
                .map(|p| wire::Tile(p.x, p.y, p.letter.to_string(), p.is_blank))
                .collect(),
        };
        let action = format!("game/{}/move/", state.game_id);
        match self.post(&action, serde_json::to_string(&request)?) {
            Ok(content) => Ok(turn::SubmitOutcome::Accepted(serde_json::from_value(
                content,
            )?)),
            Err(err) => match err.downcast::<error::ServiceError>() {
                Ok(rejection) => Ok(turn::SubmitOutcome::Rejected(*rejection)),
                Err(err) => Err(err),
            },
        }
    }

    fn pass(&mut self, state: &game_state::GameState) -> error::Returns<()> {
        self.post(&format!("game/{}/pass/", state.game_id), String::new())?;
        Ok(())
    }
}
