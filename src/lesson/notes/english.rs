//! English language lesson notes.
//!
//! Comprehension, summary, lexis, oral and the written-paper formats.

/// (topic, template) pairs; `{exam}` marks the exam-name slot.
pub static NOTES: &[(&str, &str)] = &[
    ("Reading comprehension", include_str!("../../../content/english/reading_comprehension.html")),
    ("Summary writing", include_str!("../../../content/english/summary_writing.html")),
    ("Lexis and structure", include_str!("../../../content/english/lexis_and_structure.html")),
    ("Essay writing", include_str!("../../../content/english/essay_writing.html")),
    ("Oral English", include_str!("../../../content/english/oral_english.html")),
    ("Literature analysis", include_str!("../../../content/english/literature_analysis.html")),
    ("Report writing", include_str!("../../../content/english/report_writing.html")),
    ("Formal letter writing", include_str!("../../../content/english/formal_letter_writing.html")),
];

/// Fallback body for syllabus topics without authored notes.
pub fn placeholder(topic: &str, exam: &str) -> String {
    format!(
        r#"<div class="lesson-container">
    <h1 class="lesson-title">{topic} - English ({exam})</h1>
    <div class="lesson-content">
        <p>Comprehensive English notes for {topic} are currently being developed.</p>
        <p>Please check back soon or select another English topic.</p>
    </div>
</div>
"#
    )
}
