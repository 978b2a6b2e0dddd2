//! The name query pipeline: filter, sort and paginate an already-loaded
//! snapshot of [`NameRecord`]s.
//!
//! Every browsing surface (index page, admin table, JSON API) funnels through
//! [`query`], which always runs Filter → Sort → Paginate in that order so the
//! reported totals reflect the whole matching set, not the current page. The
//! pipeline is pure: it performs no I/O, holds no state and contains no
//! randomness, so identical inputs always produce identical output.

use serde::Serialize;

use crate::domain::name::NameRecord;
use crate::domain::types::Gender;

/// Gender restriction applied by the filter.
///
/// Parsing is lossy on purpose: absent, empty, `"all"` and unrecognized
/// labels all mean "no restriction". Matching nothing on a typo would leave
/// the visitor staring at an empty grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenderFilter {
    #[default]
    Any,
    Only(Gender),
}

impl GenderFilter {
    /// Lossy parse used at the HTTP boundary.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => GenderFilter::Any,
            Some(raw) => match raw.parse::<Gender>() {
                Ok(gender) => GenderFilter::Only(gender),
                Err(_) => GenderFilter::Any,
            },
        }
    }

    fn matches(self, gender: Gender) -> bool {
        match self {
            GenderFilter::Any => true,
            GenderFilter::Only(wanted) => wanted == gender,
        }
    }
}

/// Sort order for the result set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PopularityDesc,
    PopularityAsc,
}

impl SortKey {
    /// Lossy parse used at the HTTP boundary; unknown values fall back to
    /// the alphabetical default.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("alphabetical-asc") => SortKey::NameAsc,
            Some("alphabetical-desc") => SortKey::NameDesc,
            Some("popularity-desc") => SortKey::PopularityDesc,
            Some("popularity-asc") => SortKey::PopularityAsc,
            _ => SortKey::NameAsc,
        }
    }

    /// Canonical query-string value, echoed back into pager links.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "alphabetical-asc",
            SortKey::NameDesc => "alphabetical-desc",
            SortKey::PopularityDesc => "popularity-desc",
            SortKey::PopularityAsc => "popularity-asc",
        }
    }
}

/// Default page size shared by the browsing surfaces.
pub const DEFAULT_PER_PAGE: usize = 12;

/// Parameters accepted by the pipeline. All dimensions are optional; an
/// absent or empty dimension restricts nothing.
#[derive(Clone, Debug)]
pub struct QueryParams {
    pub search: Option<String>,
    pub gender: GenderFilter,
    pub origins: Vec<String>,
    pub religions: Vec<String>,
    pub languages: Vec<String>,
    pub sort: SortKey,
    pub page: usize,
    pub per_page: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: None,
            gender: GenderFilter::Any,
            origins: Vec::new(),
            religions: Vec::new(),
            languages: Vec::new(),
            sort: SortKey::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    pub fn gender(mut self, gender: GenderFilter) -> Self {
        self.gender = gender;
        self
    }

    pub fn origins(mut self, origins: Vec<String>) -> Self {
        self.origins = origins;
        self
    }

    pub fn religions(mut self, religions: Vec<String>) -> Self {
        self.religions = religions;
        self
    }

    pub fn languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }
}

/// One page of results plus the counters the pager needs.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

fn label_matches(selected: &[String], value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    // A record missing the field can never satisfy an active dimension.
    match value {
        Some(value) => selected
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(value.trim())),
        None => false,
    }
}

/// Applies all active dimensions as AND-combined predicates, preserving the
/// relative order of surviving records.
pub fn filter(records: &[NameRecord], params: &QueryParams) -> Vec<NameRecord> {
    let needle = params
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    records
        .iter()
        .filter(|record| params.gender.matches(record.gender))
        .filter(|record| label_matches(&params.origins, Some(&record.origin)))
        .filter(|record| label_matches(&params.religions, record.religion.as_deref()))
        .filter(|record| label_matches(&params.languages, record.language.as_deref()))
        .filter(|record| match &needle {
            Some(needle) => record.name.to_lowercase().contains(needle),
            None => true,
        })
        .cloned()
        .collect()
}

/// Stable sort by the selected key.
///
/// Alphabetical order compares Unicode-lowercased names so case differences
/// collate together. Records without a popularity score compare lowest, so
/// they sink to the end of a descending popularity sort.
pub fn sort(mut records: Vec<NameRecord>, key: SortKey) -> Vec<NameRecord> {
    match key {
        SortKey::NameAsc => {
            records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::NameDesc => {
            records.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        SortKey::PopularityAsc => {
            // Option<i32> orders None first, which is exactly "missing is
            // lowest".
            records.sort_by(|a, b| a.popularity.cmp(&b.popularity));
        }
        SortKey::PopularityDesc => {
            records.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        }
    }
    records
}

/// Slices one page out of the full result set.
///
/// `page` and `per_page` are clamped to at least 1; a page past the end
/// yields empty `items` rather than an error so UI callers never have to
/// handle a pagination failure.
pub fn paginate<T>(records: Vec<T>, page: usize, per_page: usize) -> PagedResult<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total = records.len();
    let total_pages = total.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let items = if start >= total {
        Vec::new()
    } else {
        records
            .into_iter()
            .skip(start)
            .take(per_page)
            .collect::<Vec<T>>()
    };

    PagedResult {
        items,
        total,
        page,
        total_pages,
    }
}

/// The query façade: Filter → Sort → Paginate over a store snapshot.
pub fn query(records: &[NameRecord], params: &QueryParams) -> PagedResult<NameRecord> {
    let filtered = filter(records, params);
    let sorted = sort(filtered, params.sort);
    paginate(sorted, params.page, params.per_page)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::types::Gender;

    fn record(id: i32, name: &str, gender: Gender, popularity: Option<i32>) -> NameRecord {
        NameRecord {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            meaning: String::new(),
            gender,
            origin: "Latin".to_string(),
            religion: Some("Christian".to_string()),
            language: Some("English".to_string()),
            popularity,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn sample() -> Vec<NameRecord> {
        vec![
            record(1, "Amara", Gender::Girl, Some(70)),
            record(2, "Aiden", Gender::Boy, Some(85)),
            record(3, "Ava", Gender::Girl, Some(90)),
        ]
    }

    #[test]
    fn girl_by_popularity_first_page() {
        let params = QueryParams::new()
            .gender(GenderFilter::Only(Gender::Girl))
            .sort(SortKey::PopularityDesc)
            .paginate(1, 1);
        let result = query(&sample(), &params);

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Ava");
        assert_eq!(result.total, 2);
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn empty_store_is_not_an_error() {
        let result = query(&[], &QueryParams::new());
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let params = QueryParams::new().search("am");
        let result = query(&sample(), &params);

        let names: Vec<&str> = result.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Amara"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let params = QueryParams::new()
            .gender(GenderFilter::Only(Gender::Girl))
            .search("a");
        let once = filter(&sample(), &params);
        let twice = filter(&once, &params);
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_dimensions_intersect() {
        let mut records = sample();
        records.push({
            let mut r = record(4, "Bodhi", Gender::Boy, None);
            r.origin = "Sanskrit".to_string();
            r
        });

        let by_gender = filter(
            &records,
            &QueryParams::new().gender(GenderFilter::Only(Gender::Boy)),
        );
        let by_origin = filter(
            &records,
            &QueryParams::new().origins(vec!["Sanskrit".to_string()]),
        );
        let by_both = filter(
            &records,
            &QueryParams::new()
                .gender(GenderFilter::Only(Gender::Boy))
                .origins(vec!["Sanskrit".to_string()]),
        );

        let ids = |rs: &[NameRecord]| rs.iter().map(|r| r.id).collect::<Vec<i32>>();
        let intersection: Vec<i32> = ids(&by_gender)
            .into_iter()
            .filter(|id| ids(&by_origin).contains(id))
            .collect();
        assert_eq!(ids(&by_both), intersection);
    }

    #[test]
    fn missing_label_is_excluded_by_active_dimension() {
        let mut no_religion = record(4, "Zen", Gender::Unisex, None);
        no_religion.religion = None;
        let records = vec![no_religion.clone(), record(5, "Mary", Gender::Girl, None)];

        let result = filter(
            &records,
            &QueryParams::new().religions(vec!["Christian".to_string()]),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Mary");

        // Inactive dimension keeps the record in.
        let unfiltered = filter(&records, &QueryParams::new());
        assert_eq!(unfiltered.len(), 2);
    }

    #[test]
    fn label_comparison_ignores_case() {
        let result = filter(&sample(), &QueryParams::new().origins(vec!["latin".to_string()]));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn unknown_gender_value_is_unconstrained() {
        assert_eq!(GenderFilter::parse(Some("dragon")), GenderFilter::Any);
        assert_eq!(GenderFilter::parse(Some("all")), GenderFilter::Any);
        assert_eq!(GenderFilter::parse(None), GenderFilter::Any);
        assert_eq!(
            GenderFilter::parse(Some("girl")),
            GenderFilter::Only(Gender::Girl)
        );
    }

    #[test]
    fn unknown_sort_value_falls_back_to_default() {
        assert_eq!(SortKey::parse(Some("rainbow")), SortKey::NameAsc);
        assert_eq!(SortKey::parse(Some("popularity-asc")), SortKey::PopularityAsc);
        assert_eq!(SortKey::parse(None), SortKey::NameAsc);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let records = vec![
            record(1, "Ava", Gender::Girl, Some(50)),
            record(2, "Ava", Gender::Girl, Some(50)),
            record(3, "Ava", Gender::Girl, Some(50)),
        ];

        let by_name = sort(records.clone(), SortKey::NameAsc);
        assert_eq!(by_name.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 2, 3]);

        let by_popularity = sort(records, SortKey::PopularityDesc);
        assert_eq!(
            by_popularity.iter().map(|r| r.id).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn missing_popularity_sorts_lowest() {
        let records = vec![
            record(1, "NoScore", Gender::Boy, None),
            record(2, "Low", Gender::Boy, Some(10)),
            record(3, "High", Gender::Boy, Some(99)),
        ];

        let desc = sort(records.clone(), SortKey::PopularityDesc);
        assert_eq!(desc.last().unwrap().id, 1);

        let asc = sort(records, SortKey::PopularityAsc);
        assert_eq!(asc.first().unwrap().id, 1);
    }

    #[test]
    fn alphabetical_sort_ignores_case() {
        let records = vec![
            record(1, "aiden", Gender::Boy, None),
            record(2, "Ava", Gender::Girl, None),
            record(3, "AMARA", Gender::Girl, None),
        ];
        let sorted = sort(records, SortKey::NameAsc);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["aiden", "AMARA", "Ava"]);
    }

    #[test]
    fn pages_cover_the_whole_set_exactly_once() {
        let records: Vec<NameRecord> = (1..=23)
            .map(|i| record(i, &format!("Name{i:02}"), Gender::Unisex, Some(i)))
            .collect();
        let sorted = sort(filter(&records, &QueryParams::new()), SortKey::NameAsc);

        let per_page = 5;
        let first = paginate(sorted.clone(), 1, per_page);
        assert_eq!(first.total, 23);
        assert_eq!(first.total_pages, 5);

        let mut collected = Vec::new();
        for page in 1..=first.total_pages {
            let result = paginate(sorted.clone(), page, per_page);
            collected.extend(result.items);
        }
        assert_eq!(collected, sorted);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let result = paginate(sample(), 7, 2);
        assert!(result.items.is_empty());
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn zero_page_and_limit_are_clamped() {
        let zero_page = paginate(sample(), 0, 2);
        let first_page = paginate(sample(), 1, 2);
        assert_eq!(zero_page.items, first_page.items);
        assert_eq!(zero_page.page, 1);

        let zero_limit = paginate(sample(), 1, 0);
        assert_eq!(zero_limit.items.len(), 1);
        assert_eq!(zero_limit.total_pages, 3);
    }

    #[test]
    fn total_reflects_the_filtered_set_regardless_of_page() {
        let params = QueryParams::new()
            .gender(GenderFilter::Only(Gender::Girl))
            .paginate(2, 1);
        let result = query(&sample(), &params);
        assert_eq!(result.total, 2);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn query_is_deterministic() {
        let params = QueryParams::new().sort(SortKey::PopularityDesc);
        let records = sample();
        assert_eq!(query(&records, &params), query(&records, &params));
    }

    #[test]
    fn paged_result_serializes_the_api_payload() {
        let result = query(&sample(), &QueryParams::new().paginate(1, 2));
        let payload = serde_json::to_value(&result).unwrap();

        assert_eq!(payload["total"], 3);
        assert_eq!(payload["page"], 1);
        assert_eq!(payload["total_pages"], 2);
        let items = payload["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Aiden");
        assert_eq!(items[0]["gender"], "boy");
    }

    #[test]
    fn query_does_not_mutate_its_input() {
        let records = sample();
        let before = records.clone();
        let _ = query(&records, &QueryParams::new().search("a"));
        assert_eq!(records, before);
    }
}
