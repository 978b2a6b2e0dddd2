//! Admin forms for creating and editing name records and their owned
//! collections.
//!
//! Unlike the public browse form, admin input is strict: a gender outside
//! the enumeration is a form error, not a silent default.

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::detail::{NewFamousBearer, NewNameFaq, SeoMeta};
use crate::domain::name::{NewNameRecord, UpdateNameRecord};
use crate::domain::types::Gender;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct SaveNameForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub meaning: String,
    pub gender: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub popularity: String,
}

impl SaveNameForm {
    fn gender(&self) -> Result<Gender, FormError> {
        self.gender.parse().map_err(|_| FormError::InvalidGender)
    }

    fn popularity(&self) -> Result<Option<i32>, FormError> {
        let raw = self.popularity.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<i32>()
            .map(Some)
            .map_err(|_| FormError::InvalidPopularity)
    }

    fn optional(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn to_new_record(&self) -> Result<NewNameRecord, FormError> {
        NewNameRecord::new(
            self.name.clone(),
            self.meaning.clone(),
            self.gender()?,
            self.origin.clone(),
            Self::optional(&self.religion),
            Self::optional(&self.language),
            self.popularity()?,
        )
        .map_err(|_| FormError::InvalidName)
    }

    pub fn to_update_record(&self) -> Result<UpdateNameRecord, FormError> {
        UpdateNameRecord::new(
            self.name.clone(),
            self.meaning.clone(),
            self.gender()?,
            self.origin.clone(),
            Self::optional(&self.religion),
            Self::optional(&self.language),
            self.popularity()?,
        )
        .map_err(|_| FormError::InvalidName)
    }
}

/// Textarea-backed editors for the owned collections: one entry per line,
/// famous bearers as `Full Name | description`.
#[derive(Debug, Default, Deserialize)]
pub struct SaveDetailsForm {
    #[serde(default)]
    pub variations: String,
    #[serde(default)]
    pub traits: String,
    #[serde(default)]
    pub bearers: String,
}

fn lines(text: &str) -> Vec<String> {
    let mut entries = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect::<Vec<String>>();
    entries.dedup();
    entries
}

impl SaveDetailsForm {
    pub fn variations(&self) -> Vec<String> {
        lines(&self.variations)
    }

    pub fn traits(&self) -> Vec<String> {
        lines(&self.traits)
    }

    pub fn bearers(&self) -> Vec<NewFamousBearer> {
        lines(&self.bearers)
            .into_iter()
            .map(|line| match line.split_once('|') {
                Some((full_name, description)) => {
                    NewFamousBearer::new(full_name.to_string(), description.to_string())
                }
                None => NewFamousBearer::new(line, String::new()),
            })
            .filter(|bearer| !bearer.full_name.is_empty())
            .collect()
    }
}

/// FAQ editor: one `Question? | Answer` per line; display order follows
/// line order.
#[derive(Debug, Default, Deserialize)]
pub struct SaveFaqsForm {
    #[serde(default)]
    pub faqs: String,
}

impl SaveFaqsForm {
    pub fn faqs(&self) -> Vec<NewNameFaq> {
        lines(&self.faqs)
            .into_iter()
            .filter_map(|line| {
                let (question, answer) = line.split_once('|')?;
                let question = question.trim();
                if question.is_empty() {
                    return None;
                }
                Some((question.to_string(), answer.trim().to_string()))
            })
            .enumerate()
            .map(|(position, (question, answer))| {
                NewNameFaq::new(question, answer, position as i32)
            })
            .collect()
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SaveSeoForm {
    #[serde(default)]
    #[validate(length(max = 160))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
}

impl SaveSeoForm {
    pub fn to_seo_meta(&self, name_id: i32) -> SeoMeta {
        SeoMeta::new(
            name_id,
            self.title.clone(),
            self.description.clone(),
            self.keywords.clone(),
        )
    }
}

/// Bulk CSV import with the columns
/// `name,meaning,gender,origin,religion,language,popularity`.
#[derive(MultipartForm)]
pub struct UploadNamesForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

#[derive(Debug, Deserialize)]
struct CsvNameRow {
    name: String,
    #[serde(default)]
    meaning: String,
    gender: String,
    #[serde(default)]
    origin: String,
    #[serde(default)]
    religion: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    popularity: Option<i32>,
}

impl UploadNamesForm {
    pub fn parse(&mut self) -> Result<Vec<NewNameRecord>, FormError> {
        let mut reader = csv::Reader::from_path(self.csv.file.path())
            .map_err(|e| FormError::Csv(e.to_string()))?;

        let mut records = Vec::new();
        for row in reader.deserialize::<CsvNameRow>() {
            let row = row.map_err(|e| FormError::Csv(e.to_string()))?;
            let gender: Gender = row.gender.parse().map_err(|_| FormError::InvalidGender)?;
            let record = NewNameRecord::new(
                row.name,
                row.meaning,
                gender,
                row.origin,
                SaveNameForm::optional(&row.religion),
                SaveNameForm::optional(&row.language),
                row.popularity,
            )
            .map_err(|_| FormError::InvalidName)?;
            records.push(record);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> SaveNameForm {
        SaveNameForm {
            name: "Amara".to_string(),
            meaning: "Grace".to_string(),
            gender: "girl".to_string(),
            origin: "Igbo".to_string(),
            religion: String::new(),
            language: "Igbo".to_string(),
            popularity: "70".to_string(),
        }
    }

    #[test]
    fn save_form_to_new_record() {
        let record = sample_form().to_new_record().unwrap();
        assert_eq!(record.name, "Amara");
        assert_eq!(record.gender, Gender::Girl);
        assert_eq!(record.religion, None);
        assert_eq!(record.popularity, Some(70));
    }

    #[test]
    fn save_form_rejects_unknown_gender() {
        let mut form = sample_form();
        form.gender = "other".to_string();
        assert!(matches!(
            form.to_new_record(),
            Err(FormError::InvalidGender)
        ));
    }

    #[test]
    fn save_form_rejects_bad_popularity() {
        let mut form = sample_form();
        form.popularity = "very".to_string();
        assert!(matches!(
            form.to_new_record(),
            Err(FormError::InvalidPopularity)
        ));
    }

    #[test]
    fn details_form_parses_textareas() {
        let form = SaveDetailsForm {
            variations: "  Amara \n\nAmarah\n".to_string(),
            traits: "kind\nkind\ncreative".to_string(),
            bearers: "Amara Walker | Actress\nJust A Name".to_string(),
        };

        assert_eq!(form.variations(), vec!["Amara", "Amarah"]);
        assert_eq!(form.traits(), vec!["kind", "creative"]);

        let bearers = form.bearers();
        assert_eq!(bearers.len(), 2);
        assert_eq!(bearers[0].full_name, "Amara Walker");
        assert_eq!(bearers[0].description, "Actress");
        assert_eq!(bearers[1].full_name, "Just A Name");
        assert_eq!(bearers[1].description, "");
    }

    #[test]
    fn faqs_form_numbers_positions_in_line_order() {
        let form = SaveFaqsForm {
            faqs: "Is it popular? | Yes.\nno separator line\nWhat does it mean? | Grace."
                .to_string(),
        };

        let faqs = form.faqs();
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "Is it popular?");
        assert_eq!(faqs[0].position, 0);
        assert_eq!(faqs[1].question, "What does it mean?");
        assert_eq!(faqs[1].position, 1);
    }
}
