// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, error, moves, wire};

// A rack slot. The wire encodes both a blank tile and a hidden slot as "",
// and both render as the wildcard placeholder in the turn log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RackTile {
    Letter(char),
    Blank,
}

pub type Rack = Vec<RackTile>;

pub fn rack_from_wire(raw: &[String]) -> Rack {
    raw.iter()
        .map(|slot| match slot.chars().next() {
            Some(c) => RackTile::Letter(alphabet::canonical_upper(c)),
            None => RackTile::Blank,
        })
        .collect()
}

pub fn fmt_rack(rack: &Rack) -> String {
    rack.iter()
        .map(|tile| match tile {
            RackTile::Letter(c) => *c,
            RackTile::Blank => alphabet::BLANK_LABEL,
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct GamePlayer {
    pub id: u64,
    pub username: String,
    pub position: u8,
    pub score: i32,
    // None for opponents, whose racks the service hides.
    pub rack: Option<Rack>,
}

// Immutable snapshot of one game. A successful play builds a new value; a
// previously returned snapshot is never mutated.
#[derive(Clone, Debug)]
pub struct GameState {
    pub game_id: u64,
    pub ruleset: u8,
    pub board: board::Board,
    pub players: Vec<GamePlayer>,
    pub turn: u8,
    pub my_player: usize,
    pub is_running: bool,
    pub move_count: u32,
    pub last_move: Option<wire::LastMove>,
    pub updated: f64,
}

impl GameState {
    pub fn from_wire(
        alphabet: &alphabet::Alphabet,
        game: &wire::Game,
        my_id: u64,
    ) -> error::Returns<Self> {
        let board = board::Board::from_wire(alphabet, board::Dim::STANDARD, &game.tiles)?;
        let players = game
            .players
            .iter()
            .map(|p| GamePlayer {
                id: p.id,
                username: p.username.clone(),
                position: p.position,
                score: p.score,
                rack: p.rack.as_deref().map(rack_from_wire),
            })
            .collect::<Vec<_>>();
        let Some(my_player) = players.iter().position(|p| p.id == my_id) else {
            return_error!(format!("player {} is not in game {}", my_id, game.id));
        };
        Ok(Self {
            game_id: game.id,
            ruleset: game.ruleset,
            board,
            players,
            turn: game.current_player,
            my_player,
            is_running: game.is_running,
            move_count: game.move_count,
            last_move: game.last_move.clone(),
            updated: game.updated,
        })
    }

    #[inline(always)]
    pub fn me(&self) -> &GamePlayer {
        &self.players[self.my_player]
    }

    pub fn player_by_id(&self, id: u64) -> Option<&GamePlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    #[inline(always)]
    pub fn is_my_turn(&self) -> bool {
        self.me().position == self.turn
    }

    // Builds the snapshot after an accepted play: each placed tile removed
    // from the rack exactly once (by letter value, or one Blank per wildcard
    // placement), drawn tiles appended, score credited, placements committed
    // to the board. A removal target missing from the rack means the local
    // model has diverged from the service and is fatal.
    pub fn with_play(
        &self,
        resolved: &moves::ResolvedMove,
        update: &wire::MoveUpdate,
    ) -> error::Returns<GameState> {
        let Some(rack) = self.me().rack.as_ref() else {
            return_error!(format!("own rack unknown in game {}", self.game_id));
        };
        let mut rack = rack.clone();
        for placement in &resolved.placements {
            let want = if placement.is_blank {
                RackTile::Blank
            } else {
                RackTile::Letter(placement.letter)
            };
            let pos = rack
                .iter()
                .rposition(|&tile| tile == want)
                .ok_or(error::RackInconsistency {
                    tile: match want {
                        RackTile::Letter(c) => c,
                        RackTile::Blank => alphabet::BLANK_LABEL,
                    },
                })?;
            rack.swap_remove(pos);
        }
        for drawn in &update.new_tiles {
            rack.push(match drawn.chars().next() {
                Some(c) => RackTile::Letter(alphabet::canonical_upper(c)),
                None => RackTile::Blank,
            });
        }
        let mut board = self.board.clone();
        for placement in &resolved.placements {
            board.set(placement.x, placement.y, placement.letter)?;
        }
        let mut players = self.players.clone();
        let me = &mut players[self.my_player];
        me.score += update.points;
        me.rack = Some(rack);
        Ok(GameState {
            game_id: self.game_id,
            ruleset: self.ruleset,
            board,
            players,
            turn: self.turn,
            my_player: self.my_player,
            is_running: self.is_running,
            move_count: self.move_count + 1,
            last_move: self.last_move.clone(),
            updated: update.updated,
        })
    }
}
