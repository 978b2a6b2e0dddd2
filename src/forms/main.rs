//! The public browse form: every field of the index page query string.
//!
//! Parsing is total by design. Whatever arrives in the query string, the
//! visitor gets a page back: unknown genders and sort keys fall back to
//! defaults, a non-numeric page becomes page 1, blank search terms are
//! treated as absent. Repeated keys (`origin=`×N) require deserializing the
//! raw query string with `serde_html_form` instead of `web::Query`.

use serde::Deserialize;

use crate::query::{DEFAULT_PER_PAGE, GenderFilter, QueryParams, SortKey};

#[derive(Debug, Default, Deserialize)]
pub struct BrowseForm {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub origin: Vec<String>,
    #[serde(default)]
    pub religion: Vec<String>,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl BrowseForm {
    /// Parses the raw query string, falling back to the default form when
    /// the string cannot be deserialized at all.
    pub fn from_query_string(query: &str) -> Self {
        serde_html_form::from_str(query).unwrap_or_default()
    }

    /// Lossy conversion into pipeline parameters.
    pub fn into_query(self) -> QueryParams {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1);

        let search = self
            .q
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let clean = |labels: Vec<String>| -> Vec<String> {
            labels
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        let mut params = QueryParams::new()
            .gender(GenderFilter::parse(self.gender.as_deref()))
            .origins(clean(self.origin))
            .religions(clean(self.religion))
            .languages(clean(self.language))
            .sort(SortKey::parse(self.sort.as_deref()))
            .paginate(page, DEFAULT_PER_PAGE);
        if let Some(search) = search {
            params = params.search(search);
        }
        params
    }
}
