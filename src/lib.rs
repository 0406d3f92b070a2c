// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod board;
pub mod bot;
pub mod config;
pub mod game_state;
pub mod gcg;
pub mod moves;
pub mod notation;
pub mod oracle;
pub mod session;
pub mod turn;
pub mod wire;
