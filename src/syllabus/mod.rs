//! Syllabus Catalog
//!
//! Read-only mapping of exam body -> subject -> ordered topic list.
//! Built once at startup (either from the embedded tables in `builtin` or from
//! a JSON file) and shared behind an `Arc` for the life of the process.
//!
//! Lookups are O(1) via hash indexes; the ordered vectors are kept for display.

pub mod builtin;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no syllabus for subject '{subject}' under exam '{exam}'")]
    NotFound { exam: String, subject: String },

    #[error("topic '{topic}' listed twice for {exam} {subject}")]
    DuplicateTopic { exam: String, subject: String, topic: String },

    #[error("subject '{subject}' listed twice for {exam}")]
    DuplicateSubject { exam: String, subject: String },

    #[error("failed to read syllabus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid syllabus JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One (exam, subject, topics) row, also the on-disk JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub exam: String,
    pub subject: String,
    pub topics: Vec<String>,
}

#[derive(Debug)]
struct SubjectSyllabus {
    name: String,
    topics: Vec<String>,
    topic_set: FxHashSet<String>,
}

#[derive(Debug)]
struct ExamSyllabus {
    name: String,
    subjects: Vec<SubjectSyllabus>,
    subject_index: FxHashMap<String, usize>,
}

/// Immutable exam/subject/topic reference data.
#[derive(Debug)]
pub struct SyllabusCatalog {
    exams: Vec<ExamSyllabus>,
    exam_index: FxHashMap<String, usize>,
}

impl SyllabusCatalog {
    /// Catalog compiled from the embedded JAMB/WAEC/NECO tables.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = builtin::SYLLABUS.iter().map(|(exam, subject, topics)| CatalogEntry {
            exam: exam.to_string(),
            subject: subject.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        });

        Self::from_entries(entries)
    }

    /// Build a catalog from rows, preserving row and topic order.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = SyllabusCatalog {
            exams: Vec::new(),
            exam_index: FxHashMap::default(),
        };

        for entry in entries {
            let exam_idx = match catalog.exam_index.get(&entry.exam) {
                Some(&idx) => idx,
                None => {
                    catalog.exams.push(ExamSyllabus {
                        name: entry.exam.clone(),
                        subjects: Vec::new(),
                        subject_index: FxHashMap::default(),
                    });
                    let idx = catalog.exams.len() - 1;
                    catalog.exam_index.insert(entry.exam.clone(), idx);
                    idx
                }
            };
            let exam = &mut catalog.exams[exam_idx];

            if exam.subject_index.contains_key(&entry.subject) {
                return Err(CatalogError::DuplicateSubject {
                    exam: entry.exam,
                    subject: entry.subject,
                });
            }

            let mut topic_set = FxHashSet::default();
            for topic in &entry.topics {
                if !topic_set.insert(topic.clone()) {
                    return Err(CatalogError::DuplicateTopic {
                        exam: entry.exam,
                        subject: entry.subject,
                        topic: topic.clone(),
                    });
                }
            }

            exam.subject_index.insert(entry.subject.clone(), exam.subjects.len());
            exam.subjects.push(SubjectSyllabus {
                name: entry.subject,
                topics: entry.topics,
                topic_set,
            });
        }

        Ok(catalog)
    }

    /// Parse a JSON array of `CatalogEntry` records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Whether the exam body is known at all.
    pub fn has_exam(&self, exam: &str) -> bool {
        self.exam_index.contains_key(exam)
    }

    /// Whether `subject` is offered under `exam`.
    pub fn exists(&self, exam: &str, subject: &str) -> bool {
        self.subject(exam, subject).is_some()
    }

    /// Ordered topics for (exam, subject).
    pub fn topics_for(&self, exam: &str, subject: &str) -> Result<&[String], CatalogError> {
        self.subject(exam, subject)
            .map(|s| s.topics.as_slice())
            .ok_or_else(|| CatalogError::NotFound {
                exam: exam.to_string(),
                subject: subject.to_string(),
            })
    }

    pub fn contains_topic(&self, exam: &str, subject: &str, topic: &str) -> bool {
        self.subject(exam, subject)
            .map(|s| s.topic_set.contains(topic))
            .unwrap_or(false)
    }

    /// Exam bodies in catalog order.
    pub fn exams(&self) -> impl Iterator<Item = &str> {
        self.exams.iter().map(|e| e.name.as_str())
    }

    /// Subjects of an exam in catalog order (empty when the exam is unknown).
    pub fn subjects(&self, exam: &str) -> Vec<&str> {
        self.exam_index
            .get(exam)
            .map(|&idx| self.exams[idx].subjects.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Every row of the catalog, in order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.exams
            .iter()
            .flat_map(|exam| {
                exam.subjects.iter().map(move |s| CatalogEntry {
                    exam: exam.name.clone(),
                    subject: s.name.clone(),
                    topics: s.topics.clone(),
                })
            })
            .collect()
    }

    fn subject(&self, exam: &str, subject: &str) -> Option<&SubjectSyllabus> {
        let exam = &self.exams[*self.exam_index.get(exam)?];
        exam.subject_index.get(subject).map(|&idx| &exam.subjects[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(exam: &str, subject: &str, topics: &[&str]) -> CatalogEntry {
        CatalogEntry {
            exam: exam.to_string(),
            subject: subject.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_consistent() {
        let catalog = SyllabusCatalog::builtin().unwrap();
        assert_eq!(catalog.exams().collect::<Vec<_>>(), vec!["JAMB", "WAEC", "NECO"]);
        for exam in ["JAMB", "WAEC", "NECO"] {
            assert_eq!(
                catalog.subjects(exam),
                vec!["Mathematics", "English", "Physics", "Chemistry", "Biology"]
            );
        }
    }

    #[test]
    fn test_lookups() {
        let catalog = SyllabusCatalog::builtin().unwrap();
        assert!(catalog.has_exam("JAMB"));
        assert!(!catalog.has_exam("XYZ"));
        assert!(catalog.exists("WAEC", "Physics"));
        assert!(!catalog.exists("WAEC", "Geography"));
        assert!(catalog.contains_topic("JAMB", "Mathematics", "Number bases"));
        assert!(!catalog.contains_topic("JAMB", "Mathematics", "Algebra"));
        assert!(!catalog.contains_topic("XYZ", "Mathematics", "Algebra"));
    }

    #[test]
    fn test_topics_for_preserves_order() {
        let catalog = SyllabusCatalog::builtin().unwrap();
        let topics = catalog.topics_for("WAEC", "Mathematics").unwrap();
        assert_eq!(topics.first().map(String::as_str), Some("Algebra"));
        assert_eq!(topics.last().map(String::as_str), Some("Financial mathematics"));
        assert_eq!(topics.len(), 10);
    }

    #[test]
    fn test_topics_for_missing_pair() {
        let catalog = SyllabusCatalog::builtin().unwrap();
        match catalog.topics_for("NECO", "Geography") {
            Err(CatalogError::NotFound { exam, subject }) => {
                assert_eq!(exam, "NECO");
                assert_eq!(subject, "Geography");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let result = SyllabusCatalog::from_entries(vec![entry("T", "Maths", &["Sets", "Sets"])]);
        assert!(matches!(result, Err(CatalogError::DuplicateTopic { .. })));
    }

    #[test]
    fn test_duplicate_subject_rejected() {
        let result = SyllabusCatalog::from_entries(vec![
            entry("T", "Maths", &["Sets"]),
            entry("T", "Maths", &["Logic"]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateSubject { .. })));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"exam": "MOCK", "subject": "Mathematics", "topics": ["Sets", "Logic"]},
            {"exam": "MOCK", "subject": "Geography", "topics": ["Maps"]}
        ]"#;
        let catalog = SyllabusCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.subjects("MOCK"), vec!["Mathematics", "Geography"]);
        assert!(catalog.contains_topic("MOCK", "Geography", "Maps"));
        assert_eq!(catalog.entries().len(), 2);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(matches!(
            SyllabusCatalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
