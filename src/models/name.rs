use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

use crate::domain::name::{
    NameRecord as DomainNameRecord, NewNameRecord as DomainNewNameRecord,
    UpdateNameRecord as DomainUpdateNameRecord,
};
use crate::domain::types::{Gender, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::names)]
/// Diesel model for [`crate::domain::name::NameRecord`].
pub struct Name {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub meaning: String,
    pub gender: String,
    pub origin: String,
    pub religion: Option<String>,
    pub language: Option<String>,
    pub popularity: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::names)]
/// Insertable form of [`Name`].
pub struct NewName<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub meaning: &'a str,
    pub gender: &'a str,
    pub origin: &'a str,
    pub religion: Option<&'a str>,
    pub language: Option<&'a str>,
    pub popularity: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::names)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Name`] record.
pub struct UpdateName<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub meaning: &'a str,
    pub gender: &'a str,
    pub origin: &'a str,
    pub religion: Option<&'a str>,
    pub language: Option<&'a str>,
    pub popularity: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Name> for DomainNameRecord {
    type Error = TypeConstraintError;

    fn try_from(name: Name) -> Result<Self, Self::Error> {
        let gender: Gender = name.gender.parse()?;
        Ok(Self {
            id: name.id,
            name: name.name,
            slug: name.slug,
            meaning: name.meaning,
            gender,
            origin: name.origin,
            religion: name.religion,
            language: name.language,
            popularity: name.popularity,
            created_at: name.created_at,
            updated_at: name.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewNameRecord> for NewName<'a> {
    fn from(record: &'a DomainNewNameRecord) -> Self {
        Self {
            name: record.name.as_str(),
            slug: record.slug.as_str(),
            meaning: record.meaning.as_str(),
            gender: record.gender.as_str(),
            origin: record.origin.as_str(),
            religion: record.religion.as_deref(),
            language: record.language.as_deref(),
            popularity: record.popularity,
        }
    }
}

impl<'a> From<&'a DomainUpdateNameRecord> for UpdateName<'a> {
    fn from(record: &'a DomainUpdateNameRecord) -> Self {
        Self {
            name: record.name.as_str(),
            slug: record.slug.as_str(),
            meaning: record.meaning.as_str(),
            gender: record.gender.as_str(),
            origin: record.origin.as_str(),
            religion: record.religion.as_deref(),
            language: record.language.as_deref(),
            popularity: record.popularity,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_domain_new() -> DomainNewNameRecord {
        DomainNewNameRecord::new(
            "Amara".to_string(),
            "Grace".to_string(),
            Gender::Girl,
            "Igbo".to_string(),
            None,
            Some("Igbo".to_string()),
            Some(70),
        )
        .unwrap()
    }

    #[test]
    fn from_domain_new_creates_newname() {
        let domain = sample_domain_new();
        let new: NewName = (&domain).into();
        assert_eq!(new.name, domain.name);
        assert_eq!(new.slug, "amara");
        assert_eq!(new.gender, "girl");
        assert_eq!(new.religion, None);
        assert_eq!(new.language, domain.language.as_deref());
        assert_eq!(new.popularity, Some(70));
    }

    #[test]
    fn name_try_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_name = Name {
            id: 1,
            name: "Aiden".to_string(),
            slug: "aiden".to_string(),
            meaning: "little fire".to_string(),
            gender: "boy".to_string(),
            origin: "Irish".to_string(),
            religion: None,
            language: Some("Irish".to_string()),
            popularity: Some(85),
            created_at: now,
            updated_at: now,
        };
        let domain = DomainNameRecord::try_from(db_name).unwrap();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.gender, Gender::Boy);
        assert_eq!(domain.popularity, Some(85));
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn corrupt_gender_fails_conversion() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_name = Name {
            id: 1,
            name: "X".to_string(),
            slug: "x".to_string(),
            meaning: String::new(),
            gender: "other".to_string(),
            origin: String::new(),
            religion: None,
            language: None,
            popularity: None,
            created_at: now,
            updated_at: now,
        };
        assert!(DomainNameRecord::try_from(db_name).is_err());
    }
}
