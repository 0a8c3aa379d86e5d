//! Exam-prep lesson note generator
//!
//! Resolves an (exam body, subject, topic) request into a validated lesson note
//! of at least `MIN_WORDS` words:
//! - `syllabus/`: Syllabus Catalog (JAMB, WAEC, NECO topic lists)
//! - `validation`: Topic Validator
//! - `lesson/`: per-subject content providers and curated notes
//! - `enforcer`: Length Enforcer (random supplementary sections)
//! - `resolver`: orchestration and caller-facing error categories
//! - `grading`: score -> letter grade book with CSV export
//! - `api_server`: Axum HTTP surface (feature `api`)

pub mod syllabus;
pub mod validation;
pub mod lesson;
pub mod enforcer;
pub mod resolver;
pub mod grading;
pub mod config;
pub mod api_server;

// Re-export commonly used types
pub use syllabus::{CatalogEntry, CatalogError, SyllabusCatalog};
pub use validation::{validate, Field, ValidationError};
pub use lesson::{ContentProvider, CuratedNotes, LessonBody, ProviderRegistry, Subject};
pub use enforcer::{word_count, LengthEnforcer, MIN_WORDS};
pub use resolver::{ErrorCategory, LessonError, LessonNote, LessonResolver, LessonResult};
pub use grading::{GradeBook, GradeScale, Letter};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
