//! Built-in syllabus tables
//!
//! Topic lists for the three national examination bodies (JAMB, WAEC, NECO),
//! one block per exam, subjects in display order.

/// (exam, subject, topics) rows of the default catalog.
pub static SYLLABUS: &[(&str, &str, &[&str])] = &[
    // ========================================================================
    // JAMB
    // ========================================================================
    ("JAMB", "Mathematics", &[
        "Number bases", "Fractions, decimals, and approximations",
        "Indices and logarithms", "Sets", "Polynomials",
        "Variation", "Inequalities", "Progression",
        "Binary operations", "Matrices and determinants",
        "Coordinate geometry", "Differentiation", "Integration",
    ]),
    ("JAMB", "English", &[
        "Synonyms and antonyms", "Sentence interpretation",
        "Reading comprehension", "Lexis and structure",
        "Summary writing", "Essay writing",
        "Oral English", "Grammatical accuracy",
    ]),
    ("JAMB", "Physics", &[
        "Measurements and units", "Motion", "Forces",
        "Work, energy, and power", "Waves",
        "Electricity and magnetism", "Modern physics",
        "Thermodynamics", "Optics", "Fluid mechanics",
    ]),
    ("JAMB", "Chemistry", &[
        "Atomic structure", "Chemical bonding",
        "Stoichiometry", "States of matter",
        "Energy changes", "Acids, bases and salts",
        "Redox reactions", "Organic chemistry",
        "Environmental chemistry", "Industrial chemistry",
    ]),
    ("JAMB", "Biology", &[
        "Cell biology", "Genetics",
        "Ecology", "Evolution",
        "Plant and animal physiology",
        "Reproduction", "Classification",
        "Health and diseases", "Biotechnology",
    ]),

    // ========================================================================
    // WAEC
    // ========================================================================
    ("WAEC", "Mathematics", &[
        "Algebra", "Geometry", "Trigonometry",
        "Calculus", "Statistics",
        "Vectors", "Coordinate geometry",
        "Probability", "Logic", "Financial mathematics",
    ]),
    ("WAEC", "English", &[
        "Comprehension", "Summary",
        "Lexis and structure", "Oral English",
        "Essay writing", "Literature analysis",
        "Report writing", "Formal letter writing",
    ]),
    ("WAEC", "Physics", &[
        "Physical quantities and units", "Kinematics",
        "Dynamics", "Heat and thermodynamics",
        "Light and optics", "Electricity",
        "Magnetism", "Atomic and nuclear physics",
        "Waves and sound", "Modern physics",
    ]),
    ("WAEC", "Chemistry", &[
        "Atomic structure", "Periodic table",
        "Chemical reactions", "Stoichiometry",
        "States of matter", "Chemical energetics",
        "Acids, bases and salts", "Organic chemistry",
        "Environmental pollution", "Chemistry in industry",
    ]),
    ("WAEC", "Biology", &[
        "Classification of organisms", "Cell structure",
        "Photosynthesis", "Respiration",
        "Reproduction", "Genetics",
        "Ecology", "Evolution",
        "Human health", "Plant and animal nutrition",
    ]),

    // ========================================================================
    // NECO
    // ========================================================================
    ("NECO", "Mathematics", &[
        "Algebraic expressions", "Quadratic equations",
        "Geometry theorems", "Trigonometric identities",
        "Calculus", "Statistics",
        "Probability", "Vectors",
        "Matrices", "Logic",
    ]),
    ("NECO", "English", &[
        "Reading comprehension", "Summary writing",
        "Vocabulary development", "Oral English",
        "Essay writing", "Grammar",
        "Punctuation", "Literary devices",
    ]),
    ("NECO", "Physics", &[
        "Measurement", "Motion",
        "Force and energy", "Waves",
        "Electricity", "Magnetism",
        "Thermal physics", "Modern physics",
        "Astrophysics", "Solid state physics",
    ]),
    ("NECO", "Chemistry", &[
        "Atomic structure", "Chemical bonding",
        "Stoichiometry", "Redox reactions",
        "Chemical kinetics", "Organic chemistry",
        "Analytical chemistry", "Industrial chemistry",
        "Environmental chemistry", "Nuclear chemistry",
    ]),
    ("NECO", "Biology", &[
        "Cell biology", "Genetics",
        "Ecology", "Evolution",
        "Plant and animal physiology",
        "Reproduction", "Classification",
        "Health and diseases", "Biotechnology",
    ]),
];
