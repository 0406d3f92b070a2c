// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// An oracle candidate that cannot be laid onto the current board.
// Recoverable: the caller moves on to the next suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidCandidate {
    MalformedLabel(String),
    OffBoard { x: i8, y: i8 },
    TileMismatch { x: i8, y: i8, board: char, candidate: char },
    SentinelOnEmpty { x: i8, y: i8 },
    UnknownLetter(char),
}

impl std::fmt::Display for InvalidCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidCandidate::MalformedLabel(label) => {
                write!(f, "malformed placement label {label:?}")
            }
            InvalidCandidate::OffBoard { x, y } => {
                write!(f, "placement runs off the board at ({x}, {y})")
            }
            InvalidCandidate::TileMismatch {
                x,
                y,
                board,
                candidate,
            } => write!(
                f,
                "board has {board} at ({x}, {y}) but candidate wants {candidate}"
            ),
            InvalidCandidate::SentinelOnEmpty { x, y } => {
                write!(f, "candidate plays through empty cell ({x}, {y})")
            }
            InvalidCandidate::UnknownLetter(c) => {
                write!(f, "letter {c:?} is not in the alphabet")
            }
        }
    }
}

impl std::error::Error for InvalidCandidate {}

// The remote service answered with status "error".
#[derive(Debug, Clone)]
pub struct ServiceError {
    pub error_type: String,
    pub message: String,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.error_type)
        } else {
            write!(f, "{}: {}", self.error_type, self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

// A placement consumed a tile the tracked rack does not hold. This means the
// local board/rack model has desynchronized from the service's authoritative
// state, so the turn must not proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RackInconsistency {
    pub tile: char,
}

impl std::fmt::Display for RackInconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rack does not hold {:?}", self.tile)
    }
}

impl std::error::Error for RackInconsistency {}
