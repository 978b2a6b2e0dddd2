//! Diesel models for the collections owned by a name record.

use diesel::prelude::*;
use serde::Serialize;

use crate::domain::detail::{
    FamousBearer as DomainFamousBearer, NameFaq as DomainNameFaq, NewFamousBearer, NewNameFaq,
    SeoMeta as DomainSeoMeta,
};
use crate::models::name::Name;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Serialize)]
#[diesel(table_name = crate::schema::name_variations)]
#[diesel(belongs_to(Name, foreign_key = name_id))]
pub struct NameVariation {
    pub id: i32,
    pub name_id: i32,
    pub variant: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::name_variations)]
pub struct NewNameVariation<'a> {
    pub name_id: i32,
    pub variant: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Serialize)]
#[diesel(table_name = crate::schema::name_traits)]
#[diesel(belongs_to(Name, foreign_key = name_id))]
pub struct NameTrait {
    pub id: i32,
    pub name_id: i32,
    pub label: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::name_traits)]
pub struct NewNameTrait<'a> {
    pub name_id: i32,
    pub label: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Serialize)]
#[diesel(table_name = crate::schema::famous_bearers)]
#[diesel(belongs_to(Name, foreign_key = name_id))]
pub struct FamousBearer {
    pub id: i32,
    pub name_id: i32,
    pub full_name: String,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::famous_bearers)]
pub struct NewFamousBearerRow<'a> {
    pub name_id: i32,
    pub full_name: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Serialize)]
#[diesel(table_name = crate::schema::name_faqs)]
#[diesel(belongs_to(Name, foreign_key = name_id))]
pub struct NameFaq {
    pub id: i32,
    pub name_id: i32,
    pub question: String,
    pub answer: String,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::name_faqs)]
pub struct NewNameFaqRow<'a> {
    pub name_id: i32,
    pub question: &'a str,
    pub answer: &'a str,
    pub position: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable, AsChangeset, Serialize)]
#[diesel(table_name = crate::schema::seo_meta)]
#[diesel(primary_key(name_id))]
pub struct SeoMeta {
    pub name_id: i32,
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl From<FamousBearer> for DomainFamousBearer {
    fn from(bearer: FamousBearer) -> Self {
        Self {
            id: bearer.id,
            name_id: bearer.name_id,
            full_name: bearer.full_name,
            description: bearer.description,
        }
    }
}

impl From<NameFaq> for DomainNameFaq {
    fn from(faq: NameFaq) -> Self {
        Self {
            id: faq.id,
            name_id: faq.name_id,
            question: faq.question,
            answer: faq.answer,
            position: faq.position,
        }
    }
}

impl From<SeoMeta> for DomainSeoMeta {
    fn from(meta: SeoMeta) -> Self {
        Self {
            name_id: meta.name_id,
            title: meta.title,
            description: meta.description,
            keywords: meta.keywords,
        }
    }
}

impl SeoMeta {
    pub fn from_domain(meta: &DomainSeoMeta) -> Self {
        Self {
            name_id: meta.name_id,
            title: meta.title.clone(),
            description: meta.description.clone(),
            keywords: meta.keywords.clone(),
        }
    }
}

impl<'a> NewFamousBearerRow<'a> {
    pub fn from_domain(name_id: i32, bearer: &'a NewFamousBearer) -> Self {
        Self {
            name_id,
            full_name: bearer.full_name.as_str(),
            description: bearer.description.as_str(),
        }
    }
}

impl<'a> NewNameFaqRow<'a> {
    pub fn from_domain(name_id: i32, faq: &'a NewNameFaq) -> Self {
        Self {
            name_id,
            question: faq.question.as_str(),
            answer: faq.answer.as_str(),
            position: faq.position,
        }
    }
}
