// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;
use std::path::Path;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    #[serde(default = "default_games_dir")]
    pub games_dir: String,
    #[serde(default = "default_oracle")]
    pub oracle: String,
    // invitations for these rulesets are accepted automatically.
    #[serde(default = "default_rulesets")]
    pub accept_rulesets: Vec<u8>,
    #[serde(default = "default_poll_seconds")]
    pub poll_seconds: u64,
}

fn default_games_dir() -> String {
    "games".to_string()
}

fn default_oracle() -> String {
    "./a.out".to_string()
}

fn default_rulesets() -> Vec<u8> {
    vec![4, 8]
}

fn default_poll_seconds() -> u64 {
    30
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> error::Returns<Config> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
