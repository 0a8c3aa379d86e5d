//! Lesson Resolution Orchestrator
//!
//! Single request/response cycle for a lesson note:
//!
//! ```text
//! START -> VALIDATING -> DISPATCHING -> ENFORCING -> DONE
//!               |
//!               +-> REJECTED
//! ```
//!
//! Validation failures are user errors; a validated subject with no registered
//! provider is a configuration fault and is reported separately. Resolution is
//! synchronous and CPU-only, so the resolver is shared freely across requests.

use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::enforcer::{word_count, LengthEnforcer};
use crate::lesson::{ProviderRegistry, Subject};
use crate::syllabus::SyllabusCatalog;
use crate::validation::{validate, ValidationError};

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LessonError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no content provider registered for subject '{subject}'")]
    InternalDispatchFault { subject: String },
}

/// Caller-facing error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCategory {
    MissingParameter,
    UnknownExam,
    UnknownSubject,
    UnknownTopic,
    InternalDispatchFault,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::MissingParameter => "MissingParameter",
            ErrorCategory::UnknownExam => "UnknownExam",
            ErrorCategory::UnknownSubject => "UnknownSubject",
            ErrorCategory::UnknownTopic => "UnknownTopic",
            ErrorCategory::InternalDispatchFault => "InternalDispatchFault",
        }
    }

    /// True for faults on our side rather than in the request.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCategory::InternalDispatchFault)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::Validation(ValidationError::MissingParameter { .. }) => {
                ErrorCategory::MissingParameter
            }
            LessonError::Validation(ValidationError::UnknownExam { .. }) => ErrorCategory::UnknownExam,
            LessonError::Validation(ValidationError::UnknownSubject { .. }) => {
                ErrorCategory::UnknownSubject
            }
            LessonError::Validation(ValidationError::UnknownTopic { .. }) => ErrorCategory::UnknownTopic,
            LessonError::InternalDispatchFault { .. } => ErrorCategory::InternalDispatchFault,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// A resolved lesson note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonNote {
    pub exam: String,
    pub subject: String,
    pub topic: String,
    pub note: String,
    pub word_count: usize,
    /// False when the note is the placeholder for a topic without authored notes.
    pub curated: bool,
}

/// Wire-level outcome of `resolve_lesson`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LessonResult {
    Note(LessonNote),
    Error {
        error_category: ErrorCategory,
        message: String,
    },
}

impl LessonResult {
    pub fn is_note(&self) -> bool {
        matches!(self, LessonResult::Note(_))
    }

    pub fn error_category(&self) -> Option<ErrorCategory> {
        match self {
            LessonResult::Note(_) => None,
            LessonResult::Error { error_category, .. } => Some(*error_category),
        }
    }
}

impl From<Result<LessonNote, LessonError>> for LessonResult {
    fn from(result: Result<LessonNote, LessonError>) -> Self {
        match result {
            Ok(note) => LessonResult::Note(note),
            Err(e) => LessonResult::Error {
                error_category: e.category(),
                message: e.to_string(),
            },
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

pub struct LessonResolver {
    catalog: Arc<SyllabusCatalog>,
    providers: Arc<ProviderRegistry>,
    enforcer: LengthEnforcer,
    pad_placeholders: bool,
}

impl LessonResolver {
    pub fn new(
        catalog: Arc<SyllabusCatalog>,
        providers: Arc<ProviderRegistry>,
        enforcer: LengthEnforcer,
    ) -> Self {
        Self {
            catalog,
            providers,
            enforcer,
            pad_placeholders: false,
        }
    }

    /// Also pad placeholder bodies to the minimum length (off by default).
    pub fn with_placeholder_padding(mut self, enabled: bool) -> Self {
        self.pad_placeholders = enabled;
        self
    }

    pub fn catalog(&self) -> &SyllabusCatalog {
        &self.catalog
    }

    pub fn min_words(&self) -> usize {
        self.enforcer.min_words()
    }

    /// Catalog subjects (across all exams) that no provider serves.
    pub fn unregistered_subjects(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for exam in self.catalog.exams() {
            for subject in self.catalog.subjects(exam) {
                let served = Subject::from_name(subject)
                    .and_then(|s| self.providers.get(s))
                    .is_some();
                if !served && !missing.iter().any(|m| m == subject) {
                    missing.push(subject.to_string());
                }
            }
        }
        missing
    }

    /// Resolve a lesson using the thread-local RNG for padding.
    pub fn resolve(&self, exam: &str, subject: &str, topic: &str) -> Result<LessonNote, LessonError> {
        self.resolve_with_rng(exam, subject, topic, &mut rand::thread_rng())
    }

    /// Resolve a lesson with an explicit randomness source for padding.
    pub fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        exam: &str,
        subject: &str,
        topic: &str,
        rng: &mut R,
    ) -> Result<LessonNote, LessonError> {
        tracing::debug!("Validating {} / {} / {}", exam, subject, topic);
        if let Err(e) = validate(&self.catalog, exam, subject, topic) {
            tracing::warn!("Rejected lesson request: {}", e);
            return Err(e.into());
        }

        tracing::debug!("Dispatching to {} provider", subject);
        let body = Subject::from_name(subject)
            .and_then(|s| self.providers.get(s))
            .and_then(|provider| provider.generate(exam, topic))
            .ok_or_else(|| {
                tracing::error!(
                    "Subject '{}' passed validation for {} but has no content provider",
                    subject,
                    exam
                );
                LessonError::InternalDispatchFault {
                    subject: subject.to_string(),
                }
            })?;

        let curated = body.is_curated();
        let note = if curated || self.pad_placeholders {
            tracing::debug!("Enforcing minimum of {} words", self.enforcer.min_words());
            self.enforcer.ensure_minimum(body.into_text(), topic, exam, rng)
        } else {
            body.into_text()
        };

        Ok(LessonNote {
            exam: exam.to_string(),
            subject: subject.to_string(),
            topic: topic.to_string(),
            word_count: word_count(&note),
            note,
            curated,
        })
    }

    /// Resolve into the wire-level result shape.
    pub fn resolve_lesson(&self, exam: &str, subject: &str, topic: &str) -> LessonResult {
        self.resolve(exam, subject, topic).into()
    }
}
