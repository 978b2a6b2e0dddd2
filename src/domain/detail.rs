//! Collections owned by a single [`crate::domain::name::NameRecord`]:
//! spelling variations, personality traits, famous bearers, FAQs and the
//! per-name SEO metadata. No row is ever shared across names.

use serde::{Deserialize, Serialize};

use crate::domain::types::sanitize_text;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamousBearer {
    pub id: i32,
    pub name_id: i32,
    pub full_name: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewFamousBearer {
    pub full_name: String,
    pub description: String,
}

impl NewFamousBearer {
    #[must_use]
    pub fn new(full_name: String, description: String) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            description: sanitize_text(&description),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameFaq {
    pub id: i32,
    pub name_id: i32,
    pub question: String,
    pub answer: String,
    /// Display order on the detail page, ascending.
    pub position: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewNameFaq {
    pub question: String,
    pub answer: String,
    pub position: i32,
}

impl NewNameFaq {
    #[must_use]
    pub fn new(question: String, answer: String, position: i32) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: sanitize_text(&answer),
            position,
        }
    }
}

/// Search-engine fields edited on the admin page, one row per name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoMeta {
    pub name_id: i32,
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl SeoMeta {
    #[must_use]
    pub fn new(name_id: i32, title: String, description: String, keywords: String) -> Self {
        Self {
            name_id,
            title: title.trim().to_string(),
            description: sanitize_text(&description),
            keywords: keywords.trim().to_string(),
        }
    }
}
