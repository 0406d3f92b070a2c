// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, wire};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    pub const STANDARD: Dim = Dim { rows: 15, cols: 15 };

    #[inline(always)]
    pub fn contains(&self, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && x < self.cols && y < self.rows
    }
}

// Sparse board: a coordinate is present iff a tile has been permanently
// committed there. Down plays are coordinate swaps at the call site; there is
// no transposed view.
#[derive(Clone, Debug)]
pub struct Board {
    dim: Dim,
    tiles: HashMap<(i8, i8), char>,
}

impl Board {
    pub fn new(dim: Dim) -> Self {
        Self {
            dim,
            tiles: HashMap::new(),
        }
    }

    // Builds the board from the service's tile list, tallying letters
    // against the alphabet's frequencies. Blank-played tiles consume the
    // blank supply, not the letter's.
    pub fn from_wire(
        alphabet: &alphabet::Alphabet,
        dim: Dim,
        tiles: &[wire::Tile],
    ) -> error::Returns<Board> {
        let mut board = Board::new(dim);
        let mut used: HashMap<char, u8> = HashMap::new();
        for tile in tiles {
            let letter = tile.letter()?;
            let tallied = if tile.is_blank() {
                alphabet::BLANK_LABEL
            } else {
                letter
            };
            let Some(supply) = alphabet.tile_for(tallied) else {
                return_error!(format!(
                    "board tile {:?} at ({}, {}) is not in the alphabet",
                    letter,
                    tile.x(),
                    tile.y()
                ));
            };
            let count = used.entry(tallied).or_insert(0);
            *count += 1;
            if *count > supply.freq() {
                return_error!(format!(
                    "too many tile {:?} on board (set contains only {})",
                    tallied,
                    supply.freq()
                ));
            }
            board.set(tile.x(), tile.y(), letter)?;
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, x: i8, y: i8) -> Option<char> {
        self.tiles.get(&(x, y)).copied()
    }

    // Committed tiles are never overwritten.
    pub fn set(&mut self, x: i8, y: i8, letter: char) -> error::Returns<()> {
        if !self.dim.contains(x, y) {
            return_error!(format!("({x}, {y}) is outside the board"));
        }
        if self.tiles.insert((x, y), letter).is_some() {
            return_error!(format!("({x}, {y}) already holds a tile"));
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.dim.cols {
            write!(f, " {}", ((c as u8) + 0x61) as char)?;
        }
        writeln!(f)?;
        write!(f, "  +")?;
        for _ in 1..self.dim.cols {
            write!(f, "--")?;
        }
        writeln!(f, "-+")?;
        for r in 0..self.dim.rows {
            write!(f, "{:2}|", r + 1)?;
            for c in 0..self.dim.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(c, r).unwrap_or(' '))?;
            }
            writeln!(f, "|{}", r + 1)?;
        }
        write!(f, "  +")?;
        for _ in 1..self.dim.cols {
            write!(f, "--")?;
        }
        writeln!(f, "-+")?;
        write!(f, "  ")?;
        for c in 0..self.dim.cols {
            write!(f, " {}", ((c as u8) + 0x61) as char)?;
        }
        writeln!(f)
    }
}
