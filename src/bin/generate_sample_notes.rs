//! Generate Sample Lesson Notes
//!
//! Resolves every topic in the syllabus catalog, writes each note to
//! `<OUTPUT_DIR>/<exam>/<subject>/<topic>.html` and prints curated/placeholder
//! coverage per exam and subject.
//! Run with: cargo run --bin generate_sample_notes [OUTPUT_DIR]

use lesson_generator_rust::{LessonResolver, ServerConfig, SyllabusCatalog, ProviderRegistry, LengthEnforcer};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_OUTPUT_DIR: &str = "reports/notes";

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

fn main() -> anyhow::Result<()> {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let config = ServerConfig::from_env();
    let catalog = match &config.syllabus_path {
        Some(path) => SyllabusCatalog::from_path(path)?,
        None => SyllabusCatalog::builtin()?,
    };

    let resolver = LessonResolver::new(
        Arc::new(catalog),
        Arc::new(ProviderRegistry::builtin()),
        LengthEnforcer::new(config.min_words),
    )
    .with_placeholder_padding(config.pad_placeholders);

    println!("Writing lesson notes to {}", output_dir.display());
    println!("{:<6} {:<12} {:>8} {:>12} {:>8}", "Exam", "Subject", "Curated", "Placeholder", "Failed");

    let mut total_curated = 0;
    let mut total_placeholder = 0;

    for entry in resolver.catalog().entries() {
        let dir = output_dir.join(slug(&entry.exam)).join(slug(&entry.subject));
        fs::create_dir_all(&dir)?;

        let (mut curated, mut placeholder, mut failed) = (0, 0, 0);
        for topic in &entry.topics {
            match resolver.resolve(&entry.exam, &entry.subject, topic) {
                Ok(note) => {
                    if note.curated {
                        curated += 1;
                    } else {
                        placeholder += 1;
                    }
                    fs::write(dir.join(format!("{}.html", slug(topic))), &note.note)?;
                }
                Err(e) => {
                    failed += 1;
                    eprintln!("  {} / {} / {}: {}", entry.exam, entry.subject, topic, e);
                }
            }
        }

        println!(
            "{:<6} {:<12} {:>8} {:>12} {:>8}",
            entry.exam, entry.subject, curated, placeholder, failed
        );
        total_curated += curated;
        total_placeholder += placeholder;
    }

    println!();
    println!("✓ {} curated notes, {} placeholders", total_curated, total_placeholder);

    Ok(())
}
