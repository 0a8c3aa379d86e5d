//! Length Enforcer
//!
//! Guarantees a lesson body reaches a minimum word count by appending
//! supplementary sections drawn uniformly at random (with replacement) from a
//! fixed pool. Words are whitespace-separated runs, so HTML markup counts.
//!
//! Every pool section renders to at least one word regardless of topic/exam,
//! which bounds the loop at `min_words` iterations.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Default minimum length for a resolved lesson.
pub const MIN_WORDS: usize = 500;

const TOPIC_SLOT: &str = "{topic}";
const EXAM_SLOT: &str = "{exam}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnforcerError {
    #[error("supplementary section pool is empty")]
    EmptyPool,

    #[error("supplementary section {index} renders no words")]
    BlankSection { index: usize },
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A supplementary section template with `{topic}` and `{exam}` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supplement {
    pub template: &'static str,
}

impl Supplement {
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Rendered section, always starting on a fresh paragraph so its first
    /// word never merges with the last word of the body.
    pub fn render(&self, topic: &str, exam: &str) -> String {
        let filled = self.template.replace(TOPIC_SLOT, topic).replace(EXAM_SLOT, exam);
        format!("\n\n{}", filled.trim_start())
    }
}

// ============================================================================
// Built-in supplementary sections
// ============================================================================

pub static SUPPLEMENTS: &[Supplement] = &[
    Supplement::new(
        r#"<div class="lesson-section supplementary">
    <h2>Detailed Explanation</h2>
    <p>This section provides an in-depth analysis of {topic} as required by the {exam} syllabus.
    Start from the definitions, restate each one in your own words, then connect them to the
    worked examples above so that every rule has a concrete case attached to it.</p>
</div>"#,
    ),
    Supplement::new(
        r#"<div class="lesson-section supplementary">
    <h2>Practical Applications</h2>
    <ul>
        <li>Real-world situations where {topic} explains what you observe</li>
        <li>Industrial and professional uses of the ideas in this note</li>
        <li>Everyday examples you can quote in an {exam} essay answer</li>
    </ul>
</div>"#,
    ),
    Supplement::new(
        r#"<div class="lesson-section supplementary">
    <h2>Common Mistakes in {topic}</h2>
    <ol>
        <li>Memorising a formula or rule without the conditions under which it holds</li>
        <li>Mixing up closely related terms; write each definition out side by side</li>
        <li>Skipping units, labels or working, which costs method marks in {exam} papers</li>
    </ol>
</div>"#,
    ),
    Supplement::new(
        r#"<div class="lesson-section supplementary">
    <h2>Advanced Concepts</h2>
    <p>Once the basics of {topic} are secure, look at how the topic links to neighbouring
    syllabus areas, which extended principles build on it, and where current research or
    technology still relies on it.</p>
</div>"#,
    ),
    Supplement::new(
        r#"<div class="lesson-section supplementary">
    <h2>{exam} Exam Focus</h2>
    <ul>
        <li>Frequently tested aspects of {topic} in recent papers</li>
        <li>Marking scheme considerations: show working and state final answers clearly</li>
        <li>Time management: attempt short objective items first, then structured questions</li>
    </ul>
</div>"#,
    ),
    Supplement::new(
        r#"<div class="lesson-section supplementary">
    <h2>Revision Checklist</h2>
    <ul>
        <li>Can you define every key term in {topic} without looking at your notes?</li>
        <li>Can you solve one past {exam} question on this topic within the time allowed?</li>
        <li>Can you explain the topic to a classmate in under two minutes?</li>
    </ul>
</div>"#,
    ),
];

// ============================================================================
// Enforcer
// ============================================================================

#[derive(Debug, Clone)]
pub struct LengthEnforcer {
    min_words: usize,
    pool: &'static [Supplement],
}

impl LengthEnforcer {
    /// Enforcer over the built-in pool.
    pub fn new(min_words: usize) -> Self {
        Self {
            min_words,
            pool: SUPPLEMENTS,
        }
    }

    /// Enforcer over a custom pool. Rejects pools that could fail to terminate.
    pub fn with_pool(min_words: usize, pool: &'static [Supplement]) -> Result<Self, EnforcerError> {
        if pool.is_empty() {
            return Err(EnforcerError::EmptyPool);
        }
        if let Some(index) = pool.iter().position(|s| word_count(&s.render("", "")) == 0) {
            return Err(EnforcerError::BlankSection { index });
        }
        Ok(Self { min_words, pool })
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    /// Whether `body` already meets the threshold.
    pub fn is_sufficient(&self, body: &str) -> bool {
        word_count(body) >= self.min_words
    }

    /// Pad `body` with random supplementary sections until it reaches
    /// `min_words`. A body that is already long enough comes back untouched.
    pub fn ensure_minimum<R: Rng + ?Sized>(
        &self,
        body: String,
        topic: &str,
        exam: &str,
        rng: &mut R,
    ) -> String {
        let mut count = word_count(&body);
        if count >= self.min_words {
            return body;
        }

        let mut body = body;
        let mut appended = 0usize;
        while count < self.min_words {
            let Some(section) = self.pool.choose(rng) else {
                break;
            };
            let rendered = section.render(topic, exam);
            count += word_count(&rendered);
            body.push_str(&rendered);
            appended += 1;
        }

        tracing::debug!(
            "Padded '{}' ({}) with {} supplementary sections to {} words",
            topic,
            exam,
            appended,
            count
        );
        body
    }
}

impl Default for LengthEnforcer {
    fn default() -> Self {
        Self::new(MIN_WORDS)
    }
}
