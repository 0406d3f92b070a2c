// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// The service encodes a tile as a heterogeneous array: [x, y, "LETTER",
// is_blank]. Letters are single uppercase characters but arrive as strings
// (the Swedish set is not all ASCII).
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Tile(pub i8, pub i8, pub String, pub bool);

impl Tile {
    #[inline(always)]
    pub fn x(&self) -> i8 {
        self.0
    }

    #[inline(always)]
    pub fn y(&self) -> i8 {
        self.1
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.3
    }

    pub fn letter(&self) -> error::Returns<char> {
        let mut chars = self.2.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(letter),
            _ => Err(error::new(format!("tile letter {:?} is not one character", self.2)).into()),
        }
    }
}

// Request payload for committing a move.
#[derive(serde::Serialize, Debug)]
pub struct MoveRequest {
    pub ruleset: u8,
    pub words: Vec<String>,
    #[serde(rename = "move")]
    pub tiles: Vec<Tile>,
}

// What the service reports back for an accepted move (and inside last_move).
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct MoveUpdate {
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub new_tiles: Vec<String>,
    #[serde(default)]
    pub updated: f64,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct LastMove {
    #[serde(default)]
    pub move_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default, rename = "move")]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub main_word: Option<String>,
    #[serde(default)]
    pub points: Option<i32>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Player {
    pub id: u64,
    pub username: String,
    pub position: u8,
    #[serde(default)]
    pub score: i32,
    // None for opponents; a blank or hidden slot is "".
    #[serde(default)]
    pub rack: Option<Vec<String>>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Game {
    pub id: u64,
    #[serde(default)]
    pub updated: f64,
    pub current_player: u8,
    #[serde(default)]
    pub move_count: u32,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub is_running: bool,
    #[serde(default)]
    pub last_move: Option<LastMove>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub bag_count: u32,
    #[serde(default)]
    pub pass_count: u32,
    pub ruleset: u8,
}

// game/<id>/ wraps the game object one level down.
#[derive(serde::Deserialize, Debug)]
pub struct GameResponse {
    pub game: Game,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct GameStatus {
    pub id: u64,
    #[serde(default)]
    pub updated: f64,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Invite {
    pub id: u64,
    #[serde(default)]
    pub ruleset: u8,
}

#[derive(serde::Deserialize, Debug, Default)]
pub struct Status {
    #[serde(default)]
    pub games: Vec<GameStatus>,
    #[serde(default)]
    pub invites_received: Vec<Invite>,
}

#[derive(serde::Deserialize, Debug)]
pub struct UserData {
    pub id: u64,
    pub username: String,
}

// Every response is wrapped in {"status": ..., "content": ...}.
#[derive(serde::Deserialize, Debug)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub content: serde_json::Value,
}

impl Envelope {
    pub fn into_content(self) -> Result<serde_json::Value, error::ServiceError> {
        if self.status == "success" {
            Ok(self.content)
        } else {
            Err(error::ServiceError {
                error_type: self
                    .content
                    .get("type")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                message: self
                    .content
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("")
                    .to_string(),
            })
        }
    }
}
