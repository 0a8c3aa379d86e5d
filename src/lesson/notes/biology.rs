//! Biology lesson notes.

/// (topic, template) pairs; `{exam}` marks the exam-name slot.
pub static NOTES: &[(&str, &str)] = &[
    ("Cell Biology", include_str!("../../../content/biology/cell_biology.html")),
    ("Genetics", include_str!("../../../content/biology/genetics.html")),
    ("Ecology", include_str!("../../../content/biology/ecology.html")),
    ("Human Physiology", include_str!("../../../content/biology/human_physiology.html")),
    ("Plant Biology", include_str!("../../../content/biology/plant_biology.html")),
    ("Reproduction", include_str!("../../../content/biology/reproduction.html")),
    ("Evolution", include_str!("../../../content/biology/evolution.html")),
    ("Health and Disease", include_str!("../../../content/biology/health_and_disease.html")),
];

/// Fallback body for syllabus topics without authored notes.
pub fn placeholder(topic: &str, exam: &str) -> String {
    format!(
        r#"<div class="lesson-container">
    <h1 class="lesson-title">{topic} - Biology ({exam})</h1>
    <div class="lesson-content">
        <p>Comprehensive biology notes for {topic} are currently being developed.</p>
        <p>Please check back soon or select another biology topic.</p>
    </div>
</div>
"#
    )
}
