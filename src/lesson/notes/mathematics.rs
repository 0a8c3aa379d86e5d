//! Mathematics lesson notes.

/// (topic, template) pairs; `{exam}` marks the exam-name slot.
pub static NOTES: &[(&str, &str)] = &[
    ("Number bases", include_str!("../../../content/mathematics/number_bases.html")),
    ("Algebra", include_str!("../../../content/mathematics/algebra.html")),
    ("Geometry", include_str!("../../../content/mathematics/geometry.html")),
    ("Trigonometry", include_str!("../../../content/mathematics/trigonometry.html")),
    ("Calculus", include_str!("../../../content/mathematics/calculus.html")),
    ("Statistics", include_str!("../../../content/mathematics/statistics.html")),
    ("Vectors", include_str!("../../../content/mathematics/vectors.html")),
    ("Coordinate geometry", include_str!("../../../content/mathematics/coordinate_geometry.html")),
    ("Financial mathematics", include_str!("../../../content/mathematics/financial_mathematics.html")),
];

/// Fallback body for syllabus topics without authored notes.
pub fn placeholder(topic: &str, exam: &str) -> String {
    format!(
        r#"<div class="lesson-container">
    <h1 class="lesson-title">{topic} - Mathematics ({exam})</h1>
    <div class="lesson-content">
        <p>Detailed lesson notes for {topic} are currently being developed.</p>
        <p>Please check back later or try another topic.</p>
    </div>
</div>
"#
    )
}
