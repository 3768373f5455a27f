//! Academic profile snapshot and attribute canonicalization.
//!
//! A purchase freezes the buyer's academic attributes at creation time so
//! entitlement scope does not silently change when the user later edits
//! their profile. Content items and profiles come from different upstream
//! vocabularies ("B.Tech" vs "BTech", "1st Year" vs "First Year"), so both
//! sides are mapped to a shared canonical form before comparison.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four academic attributes carried on profiles, purchases, and
/// content requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademicField {
    University,
    Degree,
    Year,
    Semester,
}

impl std::fmt::Display for AcademicField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AcademicField::University => "university",
            AcademicField::Degree => "degree",
            AcademicField::Year => "year",
            AcademicField::Semester => "semester",
        };
        write!(f, "{}", s)
    }
}

/// A user's academic attributes, frozen onto a purchase at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicProfile {
    pub university: String,
    pub degree: String,
    pub year: String,
    pub semester: String,
}

impl AcademicProfile {
    /// Returns the raw value for a field.
    pub fn field(&self, field: AcademicField) -> &str {
        match field {
            AcademicField::University => &self.university,
            AcademicField::Degree => &self.degree,
            AcademicField::Year => &self.year,
            AcademicField::Semester => &self.semester,
        }
    }

    /// True when every attribute is non-blank. Purchase creation requires
    /// a complete profile so the snapshot is meaningful.
    pub fn is_complete(&self) -> bool {
        [&self.university, &self.degree, &self.year, &self.semester]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

static UNIVERSITY_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ggsipu", "ggsipu"),
        ("ip university", "ggsipu"),
        ("guru gobind singh indraprastha university", "ggsipu"),
        ("du", "du"),
        ("delhi university", "du"),
        ("university of delhi", "du"),
        ("aktu", "aktu"),
        ("dr apj abdul kalam technical university", "aktu"),
        ("uptu", "aktu"),
    ])
});

static DEGREE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("btech", "btech"),
        ("b tech", "btech"),
        ("bachelor of technology", "btech"),
        ("be", "btech"),
        ("bca", "bca"),
        ("bachelor of computer applications", "bca"),
        ("bsc", "bsc"),
        ("b sc", "bsc"),
        ("bachelor of science", "bsc"),
        ("bcom", "bcom"),
        ("b com", "bcom"),
        ("bachelor of commerce", "bcom"),
    ])
});

static ORDINAL_WORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("first", "1"),
        ("second", "2"),
        ("third", "3"),
        ("fourth", "4"),
        ("fifth", "5"),
        ("sixth", "6"),
        ("seventh", "7"),
        ("eighth", "8"),
    ])
});

/// Maps an attribute value to its canonical comparison form.
///
/// Lowercases, strips punctuation, collapses whitespace, then applies the
/// field's alias table. Year/semester values reduce to their leading
/// number ("3rd Year" and "Third" both canonicalize to "3").
pub fn canonicalize(field: AcademicField, raw: &str) -> String {
    let cleaned = raw
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>();
    let normalized = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    match field {
        AcademicField::University => UNIVERSITY_ALIASES
            .get(normalized.as_str())
            .map(|s| s.to_string())
            .unwrap_or(normalized),
        AcademicField::Degree => DEGREE_ALIASES
            .get(normalized.as_str())
            .map(|s| s.to_string())
            .unwrap_or(normalized),
        AcademicField::Year | AcademicField::Semester => {
            for token in normalized.split(' ') {
                let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
                if !digits.is_empty() {
                    return digits.trim_start_matches('0').to_string();
                }
                if let Some(n) = ORDINAL_WORDS.get(token) {
                    return n.to_string();
                }
            }
            normalized
        }
    }
}

/// True when two raw values denote the same canonical attribute.
pub fn matches(field: AcademicField, a: &str, b: &str) -> bool {
    canonicalize(field, a) == canonicalize(field, b)
}
