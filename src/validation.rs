//! Topic Validator
//!
//! Checks a requested (exam, subject, topic) triple against the catalog.
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. exam and subject non-empty
//! 2. exam known
//! 3. subject known under exam
//! 4. topic non-empty
//! 5. topic listed for (exam, subject)

use std::fmt;
use thiserror::Error;

use crate::syllabus::SyllabusCatalog;

/// Request field named by a `MissingParameter` failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Exam,
    Subject,
    Topic,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Exam => "exam",
            Field::Subject => "subject",
            Field::Topic => "topic",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("parameter '{field}' is required")]
    MissingParameter { field: Field },

    #[error("exam body '{exam}' not found")]
    UnknownExam { exam: String },

    #[error("subject '{subject}' not found for {exam}")]
    UnknownSubject { exam: String, subject: String },

    #[error("topic '{topic}' not found in {exam} {subject} syllabus")]
    UnknownTopic {
        exam: String,
        subject: String,
        topic: String,
    },
}

/// Validate a lesson request against the catalog.
pub fn validate(
    catalog: &SyllabusCatalog,
    exam: &str,
    subject: &str,
    topic: &str,
) -> Result<(), ValidationError> {
    if exam.is_empty() {
        return Err(ValidationError::MissingParameter { field: Field::Exam });
    }
    if subject.is_empty() {
        return Err(ValidationError::MissingParameter { field: Field::Subject });
    }

    if !catalog.has_exam(exam) {
        return Err(ValidationError::UnknownExam {
            exam: exam.to_string(),
        });
    }

    if !catalog.exists(exam, subject) {
        return Err(ValidationError::UnknownSubject {
            exam: exam.to_string(),
            subject: subject.to_string(),
        });
    }

    if topic.is_empty() {
        return Err(ValidationError::MissingParameter { field: Field::Topic });
    }

    if !catalog.contains_topic(exam, subject, topic) {
        return Err(ValidationError::UnknownTopic {
            exam: exam.to_string(),
            subject: subject.to_string(),
            topic: topic.to_string(),
        });
    }

    Ok(())
}
