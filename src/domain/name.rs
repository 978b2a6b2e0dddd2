use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Gender, NameSlug, TypeConstraintError, sanitize_text};

/// Canonical catalog entry for a single baby name.
///
/// Every page works against this one shape; views that need less simply
/// ignore the fields they do not render.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NameRecord {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub meaning: String,
    pub gender: Gender,
    pub origin: String,
    pub religion: Option<String>,
    pub language: Option<String>,
    /// Higher is more popular. Absent when no ranking data exists.
    pub popularity: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewNameRecord {
    pub name: String,
    pub slug: String,
    pub meaning: String,
    pub gender: Gender,
    pub origin: String,
    pub religion: Option<String>,
    pub language: Option<String>,
    pub popularity: Option<i32>,
}

impl NewNameRecord {
    /// Normalizes raw input: trims labels, drops empty optionals, sanitizes
    /// the free-text meaning and derives the URL slug from the display name.
    pub fn new(
        name: String,
        meaning: String,
        gender: Gender,
        origin: String,
        religion: Option<String>,
        language: Option<String>,
        popularity: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let slug = NameSlug::from_display_name(&name)?;

        Ok(Self {
            name,
            slug: slug.into_inner(),
            meaning: sanitize_text(&meaning),
            gender,
            origin: origin.trim().to_string(),
            religion: religion
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            language: language
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            popularity,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateNameRecord {
    pub name: String,
    pub slug: String,
    pub meaning: String,
    pub gender: Gender,
    pub origin: String,
    pub religion: Option<String>,
    pub language: Option<String>,
    pub popularity: Option<i32>,
}

impl UpdateNameRecord {
    /// Same normalization rules as [`NewNameRecord::new`]; the slug follows
    /// the (possibly corrected) display name.
    pub fn new(
        name: String,
        meaning: String,
        gender: Gender,
        origin: String,
        religion: Option<String>,
        language: Option<String>,
        popularity: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        let record = NewNameRecord::new(
            name, meaning, gender, origin, religion, language, popularity,
        )?;
        Ok(Self {
            name: record.name,
            slug: record.slug,
            meaning: record.meaning,
            gender: record.gender,
            origin: record.origin,
            religion: record.religion,
            language: record.language,
            popularity: record.popularity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_normalizes_fields() {
        let record = NewNameRecord::new(
            "  Amara ".to_string(),
            "grace, mercy".to_string(),
            Gender::Girl,
            " Igbo ".to_string(),
            Some("  ".to_string()),
            Some("Igbo".to_string()),
            Some(70),
        )
        .unwrap();

        assert_eq!(record.name, "Amara");
        assert_eq!(record.slug, "amara");
        assert_eq!(record.origin, "Igbo");
        assert_eq!(record.religion, None);
        assert_eq!(record.language, Some("Igbo".to_string()));
        assert_eq!(record.popularity, Some(70));
    }

    #[test]
    fn new_record_rejects_blank_name() {
        let result = NewNameRecord::new(
            "   ".to_string(),
            String::new(),
            Gender::Boy,
            String::new(),
            None,
            None,
            None,
        );
        assert!(result.is_err());
    }
}
