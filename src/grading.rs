//! Grade book
//!
//! Score -> letter grading with a running class list. The list is the only
//! shared mutable state in the service, so every mutation goes through a mutex.
//!
//! Letter thresholds (score >= threshold): A 80, B 70, C 55, D 40, F 0.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Score must be between 0 and 100")]
    ScoreOutOfRange(f64),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("No grades to save")]
    NoGrades,

    #[error("Failed to save: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to save: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        };
        f.write_str(s)
    }
}

/// Descending (threshold, letter) pairs.
#[derive(Debug, Clone)]
pub struct GradeScale {
    thresholds: Vec<(f64, Letter)>,
}

impl GradeScale {
    pub fn new(mut thresholds: Vec<(f64, Letter)>) -> Self {
        thresholds.sort_by(|a, b| b.0.total_cmp(&a.0));
        Self { thresholds }
    }

    pub fn grade_for(&self, score: f64) -> Letter {
        self.thresholds
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, letter)| *letter)
            .unwrap_or(Letter::F)
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::new(vec![
            (80.0, Letter::A),
            (70.0, Letter::B),
            (55.0, Letter::C),
            (40.0, Letter::D),
            (0.0, Letter::F),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub name: String,
    pub score: f64,
    pub grade: Letter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSummary {
    pub average: Option<f64>,
    pub grades: Vec<GradeEntry>,
}

impl GradeSummary {
    /// Average to two decimals, or "N/A" for an empty book.
    pub fn average_label(&self) -> String {
        self.average
            .map(|avg| format!("{:.2}", avg))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[derive(Debug, Default)]
pub struct GradeBook {
    scale: GradeScale,
    entries: Mutex<Vec<GradeEntry>>,
}

impl GradeBook {
    pub fn new(scale: GradeScale) -> Self {
        Self {
            scale,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Grade and record a score, returning the updated summary.
    pub fn add(&self, name: &str, score: f64) -> Result<GradeSummary, GradeError> {
        if !(0.0..=100.0).contains(&score) {
            return Err(GradeError::ScoreOutOfRange(score));
        }
        if name.is_empty() {
            return Err(GradeError::EmptyName);
        }

        let grade = self.scale.grade_for(score);
        let mut entries = self.lock();
        entries.push(GradeEntry {
            name: name.to_string(),
            score,
            grade,
        });
        tracing::debug!("Recorded {} for {} ({} entries)", grade, name, entries.len());
        Ok(summarize(&entries))
    }

    pub fn summary(&self) -> GradeSummary {
        summarize(&self.lock())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Write `name,score,grade` rows with a header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize, GradeError> {
        let entries = self.lock().clone();
        if entries.is_empty() {
            return Err(GradeError::NoGrades);
        }

        let mut wtr = csv::Writer::from_writer(writer);
        for entry in &entries {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(entries.len())
    }

    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<usize, GradeError> {
        if self.is_empty() {
            return Err(GradeError::NoGrades);
        }
        let file = std::fs::File::create(path.as_ref())?;
        let written = self.write_csv(file)?;
        tracing::info!("Saved {} grades to {}", written, path.as_ref().display());
        Ok(written)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GradeEntry>> {
        // Entries are only pushed or cleared whole; a poisoned list is still valid.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn summarize(entries: &[GradeEntry]) -> GradeSummary {
    let average = if entries.is_empty() {
        None
    } else {
        Some(entries.iter().map(|e| e.score).sum::<f64>() / entries.len() as f64)
    };
    GradeSummary {
        average,
        grades: entries.to_vec(),
    }
}
