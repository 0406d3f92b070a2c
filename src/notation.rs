// Copyright (C) 2020-2026 Andy Kurnia.

use super::error::InvalidCandidate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Across,
    Down,
}

impl Axis {
    #[inline(always)]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Axis::Across => (1, 0),
            Axis::Down => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedLabel {
    pub axis: Axis,
    pub x: i8,
    pub y: i8,
}

// Placement labels pack an anchor and an axis: digits first is an across
// play ("8H" = row 8, column H), letters first is a down play ("H8"). Rows
// are 1-based decimal, columns alphabet-indexed from A=0; column runs longer
// than one letter are reserved for boards wider than 26 columns.
pub fn parse_label(label: &str) -> Result<ParsedLabel, InvalidCandidate> {
    let malformed = || InvalidCandidate::MalformedLabel(label.to_string());
    let first = label.chars().next().ok_or_else(malformed)?;
    if first.is_ascii_digit() {
        let pivot = label
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(malformed)?;
        let (row_part, col_part) = label.split_at(pivot);
        Ok(ParsedLabel {
            axis: Axis::Across,
            x: parse_columns(col_part).ok_or_else(malformed)?,
            y: parse_row(row_part).ok_or_else(malformed)?,
        })
    } else if first.is_ascii_alphabetic() {
        let pivot = label
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(malformed)?;
        let (col_part, row_part) = label.split_at(pivot);
        Ok(ParsedLabel {
            axis: Axis::Down,
            x: parse_columns(col_part).ok_or_else(malformed)?,
            y: parse_row(row_part).ok_or_else(malformed)?,
        })
    } else {
        Err(malformed())
    }
}

fn parse_columns(s: &str) -> Option<i8> {
    if s.is_empty() {
        return None;
    }
    let mut acc = 0i32;
    for c in s.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        acc = acc * 26 + ((c.to_ascii_uppercase() as u8) - b'A') as i32 + 1;
        if acc > (i8::MAX as i32) + 1 {
            return None;
        }
    }
    Some((acc - 1) as i8)
}

fn parse_row(s: &str) -> Option<i8> {
    match s.parse::<i32>() {
        Ok(row) if row >= 1 && row <= (i8::MAX as i32) + 1 => Some((row - 1) as i8),
        _ => None,
    }
}

// Inverse of parse_label, for rendering turn-log notation.
pub fn format_label(x: i8, y: i8, axis: Axis) -> String {
    let letters = column_letters(x);
    match axis {
        Axis::Across => format!("{}{}", y as i16 + 1, letters),
        Axis::Down => format!("{}{}", letters, y as i16 + 1),
    }
}

fn column_letters(x: i8) -> String {
    let mut v = x as i16 + 1;
    let mut letters = [0u8; 2];
    let mut n = 0;
    while v > 0 {
        v -= 1;
        letters[n] = b'A' + (v % 26) as u8;
        n += 1;
        v /= 26;
    }
    letters[..n].iter().rev().map(|&b| b as char).collect()
}

// The reported anchor may be the first newly placed tile rather than the
// first cell of the word, when leading letters were already on the board.
// Walk back along the placement axis over those played-through cells.
pub fn normalize_anchor(
    x: i8,
    y: i8,
    axis: Axis,
    full_word_len: usize,
    placed_tiles: usize,
) -> (i8, i8) {
    let back = full_word_len.saturating_sub(placed_tiles) as i8;
    let (dx, dy) = axis.delta();
    (x - dx * back, y - dy * back)
}
