// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, moves};
use std::path::{Path, PathBuf};
use tracing::debug;

// The external move-suggestion oracle: a solver binary that reads the game's
// turn log and prints ranked suggestion lines on stdout.
pub struct Oracle {
    program: PathBuf,
}

impl Oracle {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn suggest(&self, gcg_path: &Path) -> error::Returns<Vec<moves::Candidate>> {
        debug!(program = %self.program.display(), gcg = %gcg_path.display(), "running oracle");
        let output = std::process::Command::new(&self.program)
            .arg(gcg_path)
            .output()?;
        if !output.status.success() {
            return_error!(format!(
                "oracle {} exited with {}",
                self.program.display(),
                output.status
            ));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut candidates = Vec::new();
        for line in stdout.lines() {
            match moves::parse_suggestion(line) {
                Some(candidate) => candidates.push(candidate),
                None => break,
            }
        }
        debug!(count = candidates.len(), "oracle suggestions");
        Ok(candidates)
    }
}
