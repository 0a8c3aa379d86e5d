//! Curated lesson notes, one module per subject.
//!
//! Each module exposes a `NOTES` table of (topic, HTML template) pairs and a
//! `placeholder` builder for syllabus topics that have no authored body yet.
//! Templates live under `content/<subject>/` and are embedded at compile time.

pub mod biology;
pub mod chemistry;
pub mod english;
pub mod mathematics;
pub mod physics;

/// Substitution slot for the exam body inside a template.
pub const EXAM_SLOT: &str = "{exam}";

/// Fill the exam slot of a note template.
pub fn render(template: &str, exam: &str) -> String {
    template.replace(EXAM_SLOT, exam)
}
