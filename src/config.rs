//! Server configuration from environment variables.
//!
//! | Variable           | Default      |
//! |--------------------|--------------|
//! | `PORT`             | 5000         |
//! | `STATIC_DIR`       | `static`     |
//! | `SYLLABUS_PATH`    | (built-in)   |
//! | `MIN_WORDS`        | 500          |
//! | `PAD_PLACEHOLDERS` | false        |
//! | `GRADES_CSV_PATH`  | `grades.csv` |

use std::path::PathBuf;
use std::str::FromStr;

use crate::enforcer::MIN_WORDS;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    /// JSON catalog replacing the built-in syllabus.
    pub syllabus_path: Option<PathBuf>,
    pub min_words: usize,
    pub pad_placeholders: bool,
    pub grades_csv_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            syllabus_path: None,
            min_words: MIN_WORDS,
            pad_placeholders: false,
            grades_csv_path: PathBuf::from("grades.csv"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            static_dir: non_empty("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            syllabus_path: non_empty("SYLLABUS_PATH").map(PathBuf::from),
            min_words: parse_or(&lookup, "MIN_WORDS", defaults.min_words),
            pad_placeholders: lookup("PAD_PLACEHOLDERS")
                .map(|v| parse_flag("PAD_PLACEHOLDERS", &v, defaults.pad_placeholders))
                .unwrap_or(defaults.pad_placeholders),
            grades_csv_path: non_empty("GRADES_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.grades_csv_path),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_flag(key: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }
    }
}
