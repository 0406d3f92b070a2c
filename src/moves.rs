// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, error, notation};

// "reuse the board's letter at this cell".
pub const PLAY_THROUGH: char = '.';

// One ranked oracle suggestion: placement label, word, declared score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub word: String,
    pub score: i32,
}

// Parses one oracle output line. None means the suggestion list has ended:
// an empty line, a dash-prefixed keyword, the oracle's "nonmove" marker, or
// a line too short to carry a label and a word.
pub fn parse_suggestion(line: &str) -> Option<Candidate> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('-') || line.starts_with("nonmove") {
        return None;
    }
    let mut fields = line.split_whitespace();
    let label = fields.next()?;
    let word = fields.next()?;
    let score = fields.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    Some(Candidate {
        label: label.to_string(),
        word: word.to_string(),
        score,
    })
}

// Which letter case marks a wildcard tile. The oracle prints blanks in
// lowercase; the submission side is the swap_case image of that, so there a
// wildcard is the uppercase one. One rule for every cell of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseConvention {
    Oracle,
    Submission,
}

impl CaseConvention {
    #[inline(always)]
    pub fn is_wildcard(self, c: char) -> bool {
        match self {
            CaseConvention::Oracle => c.is_lowercase(),
            CaseConvention::Submission => c.is_uppercase(),
        }
    }
}

// The unit submitted to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    pub x: i8,
    pub y: i8,
    pub letter: char,
    pub is_blank: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMove {
    // one record per newly placed tile, in board order along the axis.
    pub placements: Vec<TilePlacement>,
    // the full word as committed, board letters included, all uppercase.
    pub word: String,
}

// Lays a candidate onto the board: walks one cell per word character along
// the label's axis, validates cells the board already holds, and emits a
// placement record for each empty cell. Fails whole; no partial records.
pub fn resolve(
    alphabet: &alphabet::Alphabet,
    board: &board::Board,
    candidate: &Candidate,
    convention: CaseConvention,
) -> Result<ResolvedMove, error::InvalidCandidate> {
    let anchor = notation::parse_label(&candidate.label)?;
    let (dx, dy) = anchor.axis.delta();
    let (mut x, mut y) = (anchor.x, anchor.y);
    let mut placements = Vec::new();
    let mut word = String::with_capacity(candidate.word.len());
    for c in candidate.word.chars() {
        if !board.dim().contains(x, y) {
            return Err(error::InvalidCandidate::OffBoard { x, y });
        }
        match board.get(x, y) {
            Some(board_letter) => {
                if c != PLAY_THROUGH && alphabet::canonical_upper(c) != board_letter {
                    return Err(error::InvalidCandidate::TileMismatch {
                        x,
                        y,
                        board: board_letter,
                        candidate: c,
                    });
                }
                word.push(board_letter);
            }
            None => {
                if c == PLAY_THROUGH {
                    return Err(error::InvalidCandidate::SentinelOnEmpty { x, y });
                }
                let letter = alphabet::canonical_upper(c);
                if !alphabet.contains(letter) {
                    return Err(error::InvalidCandidate::UnknownLetter(c));
                }
                placements.push(TilePlacement {
                    x,
                    y,
                    letter,
                    is_blank: convention.is_wildcard(c),
                });
                word.push(letter);
            }
        }
        x += dx;
        y += dy;
    }
    Ok(ResolvedMove { placements, word })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SWEDISH_ALPHABET;
    use crate::board::{Board, Dim};
    use crate::error::InvalidCandidate;

    fn candidate(label: &str, word: &str) -> Candidate {
        Candidate {
            label: label.to_string(),
            word: word.to_string(),
            score: 0,
        }
    }

    #[test]
    fn parses_suggestion_lines() {
        assert_eq!(
            parse_suggestion(" 8H kAtt 24 "),
            Some(Candidate {
                label: "8H".to_string(),
                word: "kAtt".to_string(),
                score: 24,
            })
        );
        // declared score is optional.
        assert_eq!(parse_suggestion("8H katt").map(|c| c.score), Some(0));
        assert_eq!(parse_suggestion(""), None);
        assert_eq!(parse_suggestion("nonmove pass"), None);
        assert_eq!(parse_suggestion("-end"), None);
        assert_eq!(parse_suggestion("8H"), None);
    }

    #[test]
    fn cat_at_8h_goes_across_with_no_blanks() {
        let board = Board::new(Dim::STANDARD);
        let resolved = resolve(
            &SWEDISH_ALPHABET,
            &board,
            &candidate("8H", "cat"),
            CaseConvention::Submission,
        )
        .unwrap();
        assert_eq!(resolved.word, "CAT");
        assert_eq!(
            resolved.placements,
            vec![
                TilePlacement {
                    x: 7,
                    y: 7,
                    letter: 'C',
                    is_blank: false
                },
                TilePlacement {
                    x: 8,
                    y: 7,
                    letter: 'A',
                    is_blank: false
                },
                TilePlacement {
                    x: 9,
                    y: 7,
                    letter: 'T',
                    is_blank: false
                },
            ]
        );
    }

    #[test]
    fn letter_first_label_goes_down() {
        let board = Board::new(Dim::STANDARD);
        let resolved = resolve(
            &SWEDISH_ALPHABET,
            &board,
            &candidate("H8", "SOL"),
            CaseConvention::Oracle,
        )
        .unwrap();
        let coords: Vec<(i8, i8)> = resolved.placements.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(coords, vec![(7, 7), (7, 8), (7, 9)]);
    }

    #[test]
    fn oracle_lowercase_marks_a_wildcard() {
        let board = Board::new(Dim::STANDARD);
        let resolved = resolve(
            &SWEDISH_ALPHABET,
            &board,
            &candidate("8H", "öL"),
            CaseConvention::Oracle,
        )
        .unwrap();
        assert_eq!(resolved.word, "ÖL");
        assert!(resolved.placements[0].is_blank);
        assert_eq!(resolved.placements[0].letter, 'Ö');
        assert!(!resolved.placements[1].is_blank);
    }

    #[test]
    fn play_through_cells_emit_no_records() {
        let mut board = Board::new(Dim::STANDARD);
        board.set(7, 7, 'K').unwrap();
        let resolved = resolve(
            &SWEDISH_ALPHABET,
            &board,
            &candidate("8H", ".AT"),
            CaseConvention::Oracle,
        )
        .unwrap();
        assert_eq!(resolved.word, "KAT");
        assert_eq!(resolved.placements.len(), 2);
        assert_eq!(
            resolved.placements.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            vec![(8, 7), (9, 7)]
        );
    }

    #[test]
    fn explicit_letter_over_board_tile_must_match() {
        let mut board = Board::new(Dim::STANDARD);
        board.set(7, 7, 'Å').unwrap();
        // case-insensitive agreement is fine, including the accented letters.
        assert!(
            resolve(
                &SWEDISH_ALPHABET,
                &board,
                &candidate("8H", "åL"),
                CaseConvention::Oracle,
            )
            .is_ok()
        );
        assert!(matches!(
            resolve(
                &SWEDISH_ALPHABET,
                &board,
                &candidate("8H", "BAT"),
                CaseConvention::Oracle,
            ),
            Err(InvalidCandidate::TileMismatch {
                x: 7,
                y: 7,
                board: 'Å',
                candidate: 'B'
            })
        ));
    }

    #[test]
    fn sentinel_over_empty_cell_is_invalid() {
        let board = Board::new(Dim::STANDARD);
        assert!(matches!(
            resolve(
                &SWEDISH_ALPHABET,
                &board,
                &candidate("8H", ".AT"),
                CaseConvention::Oracle,
            ),
            Err(InvalidCandidate::SentinelOnEmpty { x: 7, y: 7 })
        ));
    }

    #[test]
    fn running_off_the_board_is_invalid() {
        let board = Board::new(Dim::STANDARD);
        assert!(matches!(
            resolve(
                &SWEDISH_ALPHABET,
                &board,
                &candidate("8N", "BIL"),
                CaseConvention::Oracle,
            ),
            Err(InvalidCandidate::OffBoard { x: 15, y: 7 })
        ));
    }

    #[test]
    fn letters_outside_the_alphabet_are_invalid() {
        let board = Board::new(Dim::STANDARD);
        assert!(matches!(
            resolve(
                &SWEDISH_ALPHABET,
                &board,
                &candidate("8H", "WAD"),
                CaseConvention::Oracle,
            ),
            Err(InvalidCandidate::UnknownLetter('W'))
        ));
    }
}
