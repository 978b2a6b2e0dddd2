//! DTOs shaped for the name detail and admin edit templates.

use crate::domain::detail::{FamousBearer, NameFaq, SeoMeta};
use crate::domain::name::NameRecord;

/// Aggregated data required to render the name detail page.
#[derive(Debug)]
pub struct NameProfileData {
    pub record: NameRecord,
    pub variations: Vec<String>,
    pub traits: Vec<String>,
    pub famous_bearers: Vec<FamousBearer>,
    pub faqs: Vec<NameFaq>,
    pub seo: Option<SeoMeta>,
}
