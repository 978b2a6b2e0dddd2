use serde::Serialize;

use crate::domain::name::NameRecord;
use crate::pagination::Paginated;

/// Distinct label values available to the filter dropdowns.
#[derive(Debug, Default, Serialize)]
pub struct CatalogFacets {
    pub origins: Vec<String>,
    pub religions: Vec<String>,
    pub languages: Vec<String>,
}

/// Everything the index template needs to render a grid plus a pager.
pub struct CatalogPageData {
    pub names: Paginated<NameRecord>,
    pub facets: CatalogFacets,
    /// Search query echoed back into the search box when present.
    pub search_query: Option<String>,
    /// Canonical sort value echoed into the sort selector.
    pub sort: &'static str,
}
