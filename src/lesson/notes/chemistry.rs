//! Chemistry lesson notes.
//!
//! Note keys follow the authored headings ("Atomic Structure"), which do not
//! always match the syllabus spelling; unmatched syllabus topics fall back to
//! the placeholder.

/// (topic, template) pairs; `{exam}` marks the exam-name slot.
pub static NOTES: &[(&str, &str)] = &[
    ("Atomic Structure", include_str!("../../../content/chemistry/atomic_structure.html")),
    ("Chemical Bonding", include_str!("../../../content/chemistry/chemical_bonding.html")),
    ("Stoichiometry", include_str!("../../../content/chemistry/stoichiometry.html")),
    ("States of Matter", include_str!("../../../content/chemistry/states_of_matter.html")),
    ("Acids, bases and salts", include_str!("../../../content/chemistry/acids_bases_and_salts.html")),
    ("Redox reactions", include_str!("../../../content/chemistry/redox_reactions.html")),
    ("Organic chemistry", include_str!("../../../content/chemistry/organic_chemistry.html")),
    ("Environmental chemistry", include_str!("../../../content/chemistry/environmental_chemistry.html")),
    ("Industrial chemistry", include_str!("../../../content/chemistry/industrial_chemistry.html")),
];

/// Fallback body for syllabus topics without authored notes.
pub fn placeholder(topic: &str, exam: &str) -> String {
    format!(
        r#"<div class="lesson-container">
    <h1 class="lesson-title">{topic} - Chemistry ({exam})</h1>
    <div class="lesson-content">
        <p>Comprehensive chemistry notes for {topic} are currently being developed.</p>
        <p>Please check back soon or select another chemistry topic.</p>
    </div>
</div>
"#
    )
}
