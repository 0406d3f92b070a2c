// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, game_state, notation, wire};
use std::io::Write;
use std::path::PathBuf;

// Append-only GCG turn log, one file per game. The byte format matches the
// existing readers: single-space separators, one record per line, trailing
// newline.
pub struct TurnLog {
    dir: PathBuf,
}

impl TurnLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, game_id: u64) -> PathBuf {
        self.dir.join(format!("{game_id}.gcg"))
    }

    // Header block for a fresh game: player slots, title, racks, id.
    pub fn write_header(&self, state: &game_state::GameState) -> error::Returns<()> {
        std::fs::create_dir_all(&self.dir)?;
        let mut f = std::fs::File::create(self.path(state.game_id))?;
        let mut players: Vec<&game_state::GamePlayer> = state.players.iter().collect();
        players.sort_by_key(|p| p.position);
        for player in &players {
            writeln!(
                f,
                "#player{} {} {}",
                player.position + 1,
                player.username,
                player.username
            )?;
        }
        writeln!(f, "#title Game {}", state.game_id)?;
        for player in &players {
            writeln!(
                f,
                "#rack{} {}",
                player.position + 1,
                player.rack.as_ref().map(game_state::fmt_rack).unwrap_or_default()
            )?;
        }
        writeln!(f, "#id Wordfeud {}", state.game_id)?;
        Ok(())
    }

    // One line per completed action. Move types other than pass and move
    // (resigns, swaps) leave no record, as before.
    pub fn append_move(
        &self,
        state: &game_state::GameState,
        last: &wire::LastMove,
    ) -> error::Returns<()> {
        let Some(player) = last.user_id.and_then(|id| state.player_by_id(id)) else {
            return Ok(());
        };
        match last.move_type.as_deref() {
            Some("pass") => {
                let rack = player
                    .rack
                    .as_ref()
                    .map(game_state::fmt_rack)
                    .unwrap_or_default();
                self.append_line(
                    state.game_id,
                    &format!(">{}: {} - +0 {}", player.username, rack, player.score),
                )
            }
            Some("move") => {
                let Some(main_word) = last.main_word.as_deref() else {
                    return Ok(());
                };
                let Some(first) = last.tiles.first() else {
                    return Ok(());
                };
                let axis = if last.tiles.iter().all(|t| t.x() == first.x()) {
                    notation::Axis::Down
                } else {
                    notation::Axis::Across
                };
                let (mut x0, mut y0) = (first.x(), first.y());
                let mut rack = String::with_capacity(last.tiles.len());
                for tile in &last.tiles {
                    match axis {
                        notation::Axis::Across => x0 = x0.min(tile.x()),
                        notation::Axis::Down => y0 = y0.min(tile.y()),
                    }
                    rack.push(if tile.is_blank() {
                        alphabet::BLANK_LABEL
                    } else {
                        tile.letter()?
                    });
                }
                let (x0, y0) = notation::normalize_anchor(
                    x0,
                    y0,
                    axis,
                    main_word.chars().count(),
                    last.tiles.len(),
                );
                let place = notation::format_label(x0, y0, axis);
                self.append_line(
                    state.game_id,
                    &format!(
                        ">{}: {} {} {} {} {}",
                        player.username,
                        rack,
                        place,
                        main_word,
                        last.points.unwrap_or(0),
                        player.score
                    ),
                )
            }
            _ => Ok(()),
        }
    }

    // Provisional marker for a turn in progress; the definitive result line
    // appended afterwards supersedes it.
    pub fn append_incomplete(&self, state: &game_state::GameState) -> error::Returns<()> {
        let Some(rack) = state.me().rack.as_ref() else {
            return_error!(format!("own rack unknown in game {}", state.game_id));
        };
        self.append_line(
            state.game_id,
            &format!("#incomplete {}", game_state::fmt_rack(rack)),
        )
    }

    fn append_line(&self, game_id: u64, line: &str) -> error::Returns<()> {
        std::fs::create_dir_all(&self.dir)?;
        let mut f = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path(game_id))?;
        writeln!(f, "{line}")?;
        Ok(())
    }
}
