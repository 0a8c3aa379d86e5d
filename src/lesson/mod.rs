//! Subject Content Providers
//!
//! Maps a subject to the component that produces a lesson body for a topic.
//! The subject set is closed (`Subject`), and each subject is served by a
//! `ContentProvider` registered in a `ProviderRegistry`.
//!
//! Providers distinguish authored notes (`LessonBody::Curated`) from the
//! fallback body for topics that have none (`LessonBody::Placeholder`), so the
//! resolver can decide whether the Length Enforcer applies.

pub mod notes;

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Subject
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Mathematics,
    English,
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::English,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    /// Exact-name lookup, matching the catalog's subject spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::English => "English",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Lesson body
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonBody {
    /// Authored notes with the exam slot filled in.
    Curated(String),
    /// Short fallback for a syllabus topic without authored notes.
    Placeholder(String),
}

impl LessonBody {
    pub fn text(&self) -> &str {
        match self {
            LessonBody::Curated(text) | LessonBody::Placeholder(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            LessonBody::Curated(text) | LessonBody::Placeholder(text) => text,
        }
    }

    pub fn is_curated(&self) -> bool {
        matches!(self, LessonBody::Curated(_))
    }
}

// ============================================================================
// Providers
// ============================================================================

/// Produces lesson bodies for one subject.
pub trait ContentProvider: Send + Sync {
    fn subject(&self) -> Subject;

    /// Body for `topic`, templated on `exam`.
    ///
    /// `None` means the provider cannot serve this request at all; the
    /// resolver reports it as a dispatch fault.
    fn generate(&self, exam: &str, topic: &str) -> Option<LessonBody>;
}

/// Provider backed by a static table of authored templates.
pub struct CuratedNotes {
    subject: Subject,
    notes: FxHashMap<&'static str, &'static str>,
    placeholder: fn(&str, &str) -> String,
}

impl CuratedNotes {
    pub fn new(
        subject: Subject,
        table: &'static [(&'static str, &'static str)],
        placeholder: fn(&str, &str) -> String,
    ) -> Self {
        Self {
            subject,
            notes: table.iter().copied().collect(),
            placeholder,
        }
    }

    /// Provider over the embedded notes for `subject`.
    pub fn builtin(subject: Subject) -> Self {
        match subject {
            Subject::Mathematics => {
                Self::new(subject, notes::mathematics::NOTES, notes::mathematics::placeholder)
            }
            Subject::English => Self::new(subject, notes::english::NOTES, notes::english::placeholder),
            Subject::Physics => Self::new(subject, notes::physics::NOTES, notes::physics::placeholder),
            Subject::Chemistry => {
                Self::new(subject, notes::chemistry::NOTES, notes::chemistry::placeholder)
            }
            Subject::Biology => Self::new(subject, notes::biology::NOTES, notes::biology::placeholder),
        }
    }

    /// Topics with authored notes.
    pub fn curated_topics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.notes.keys().copied()
    }
}

impl ContentProvider for CuratedNotes {
    fn subject(&self) -> Subject {
        self.subject
    }

    fn generate(&self, exam: &str, topic: &str) -> Option<LessonBody> {
        let body = match self.notes.get(topic) {
            Some(template) => LessonBody::Curated(notes::render(template, exam)),
            None => LessonBody::Placeholder((self.placeholder)(topic, exam)),
        };
        Some(body)
    }
}

/// Subject -> provider table, built once at startup.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: FxHashMap<Subject, Arc<dyn ContentProvider>>,
}

impl ProviderRegistry {
    /// Registry with no providers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the embedded notes for all five subjects.
    pub fn builtin() -> Self {
        Subject::ALL.into_iter().fold(Self::empty(), |registry, subject| {
            registry.with_provider(Arc::new(CuratedNotes::builtin(subject)))
        })
    }

    /// Register (or replace) the provider for its subject.
    pub fn with_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.providers.insert(provider.subject(), provider);
        self
    }

    pub fn get(&self, subject: Subject) -> Option<&dyn ContentProvider> {
        self.providers.get(&subject).map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
