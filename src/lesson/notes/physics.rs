//! Physics lesson notes.

/// (topic, template) pairs; `{exam}` marks the exam-name slot.
pub static NOTES: &[(&str, &str)] = &[
    ("Measurements and units", include_str!("../../../content/physics/measurements_and_units.html")),
    ("Motion", include_str!("../../../content/physics/motion.html")),
    ("Forces", include_str!("../../../content/physics/forces.html")),
    ("Energy", include_str!("../../../content/physics/energy.html")),
    ("Waves", include_str!("../../../content/physics/waves.html")),
    ("Electricity", include_str!("../../../content/physics/electricity.html")),
    ("Magnetism", include_str!("../../../content/physics/magnetism.html")),
    ("Modern Physics", include_str!("../../../content/physics/modern_physics.html")),
];

/// Fallback body for syllabus topics without authored notes.
pub fn placeholder(topic: &str, exam: &str) -> String {
    format!(
        r#"<div class="lesson-container">
    <h1 class="lesson-title">{topic} - Physics ({exam})</h1>
    <div class="lesson-content">
        <p>Comprehensive lesson notes for {topic} are currently being developed.</p>
        <p>Please check back soon or select another physics topic.</p>
    </div>
</div>
"#
    )
}
