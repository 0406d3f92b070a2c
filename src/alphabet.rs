// Copyright (C) 2020-2026 Andy Kurnia.

pub struct Tile {
    label: char,
    freq: u8,
    score: i8,
}

impl Tile {
    #[inline(always)]
    pub fn label(&self) -> char {
        self.label
    }

    #[inline(always)]
    pub fn freq(&self) -> u8 {
        self.freq
    }

    #[inline(always)]
    pub fn score(&self) -> i8 {
        self.score
    }
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile],
    num_tiles: u16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

pub const BLANK_LABEL: char = '?';

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.num_tiles,
        }
    }

    #[inline(always)]
    pub fn tile_for(&self, label: char) -> Option<&'a Tile> {
        match self {
            Alphabet::Static(x) => x.tiles.iter().find(|tile| tile.label == label),
        }
    }

    #[inline(always)]
    pub fn contains(&self, label: char) -> bool {
        self.tile_for(label).is_some()
    }
}

// Case pairs the stock folding must not be trusted with.
static CASE_OVERRIDES: &[(char, char)] = &[
    ('å', 'Å'),
    ('Å', 'å'),
    ('ä', 'Ä'),
    ('Ä', 'ä'),
    ('ö', 'Ö'),
    ('Ö', 'ö'),
];

// Maps a character between the oracle's letter case and the submission
// format's. The override table wins; otherwise the generic swap applies when
// it is a single character, and anything else passes through unchanged.
pub fn swap_case(c: char) -> char {
    for &(from, to) in CASE_OVERRIDES {
        if c == from {
            return to;
        }
    }
    if c.is_uppercase() {
        let mut folded = c.to_lowercase();
        match (folded.next(), folded.next()) {
            (Some(swapped), None) => swapped,
            _ => c,
        }
    } else if c.is_lowercase() {
        let mut folded = c.to_uppercase();
        match (folded.next(), folded.next()) {
            (Some(swapped), None) => swapped,
            _ => c,
        }
    } else {
        c
    }
}

// Uppercase canonical form, as stored on the board and submitted.
pub fn canonical_upper(c: char) -> char {
    if c.is_lowercase() { swap_case(c) } else { c }
}

// Swedish Wordfeud tile set. 100 tiles.
pub static SWEDISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        Tile {
            label: BLANK_LABEL,
            freq: 2,
            score: 0,
        },
        Tile {
            label: 'A',
            freq: 8,
            score: 1,
        },
        Tile {
            label: 'B',
            freq: 2,
            score: 4,
        },
        Tile {
            label: 'C',
            freq: 1,
            score: 10,
        },
        Tile {
            label: 'D',
            freq: 5,
            score: 1,
        },
        Tile {
            label: 'E',
            freq: 7,
            score: 1,
        },
        Tile {
            label: 'F',
            freq: 2,
            score: 3,
        },
        Tile {
            label: 'G',
            freq: 3,
            score: 2,
        },
        Tile {
            label: 'H',
            freq: 2,
            score: 2,
        },
        Tile {
            label: 'I',
            freq: 5,
            score: 1,
        },
        Tile {
            label: 'J',
            freq: 1,
            score: 7,
        },
        Tile {
            label: 'K',
            freq: 3,
            score: 2,
        },
        Tile {
            label: 'L',
            freq: 5,
            score: 1,
        },
        Tile {
            label: 'M',
            freq: 3,
            score: 2,
        },
        Tile {
            label: 'N',
            freq: 6,
            score: 1,
        },
        Tile {
            label: 'O',
            freq: 5,
            score: 2,
        },
        Tile {
            label: 'P',
            freq: 2,
            score: 4,
        },
        Tile {
            label: 'R',
            freq: 8,
            score: 1,
        },
        Tile {
            label: 'S',
            freq: 8,
            score: 1,
        },
        Tile {
            label: 'T',
            freq: 8,
            score: 1,
        },
        Tile {
            label: 'U',
            freq: 3,
            score: 4,
        },
        Tile {
            label: 'V',
            freq: 2,
            score: 3,
        },
        Tile {
            label: 'X',
            freq: 1,
            score: 8,
        },
        Tile {
            label: 'Y',
            freq: 1,
            score: 7,
        },
        Tile {
            label: 'Z',
            freq: 1,
            score: 8,
        },
        Tile {
            label: 'Å',
            freq: 2,
            score: 4,
        },
        Tile {
            label: 'Ä',
            freq: 2,
            score: 3,
        },
        Tile {
            label: 'Ö',
            freq: 2,
            score: 4,
        },
    ],
    num_tiles: 100,
});

// The service's Swedish ruleset ids.
pub fn alphabet_for_ruleset(ruleset: u8) -> Option<&'static Alphabet<'static>> {
    match ruleset {
        4 | 8 => Some(&SWEDISH_ALPHABET),
        _ => None,
    }
}
