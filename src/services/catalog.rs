//! Public catalog browsing: the store snapshot fed through the query
//! pipeline, plus the facet lists for the filter dropdowns.

use crate::dto::main::{CatalogFacets, CatalogPageData};
use crate::pagination::Paginated;
use crate::query::{self, PagedResult, QueryParams};
use crate::repository::NameReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads the data for the index page: one pipeline pass over the full
/// snapshot plus the distinct facet labels.
pub fn browse_names<R>(repo: &R, params: QueryParams) -> ServiceResult<CatalogPageData>
where
    R: NameReader + ?Sized,
{
    let snapshot = repo.list_names().map_err(ServiceError::from)?;
    let result = query::query(&snapshot, &params);

    let facets = CatalogFacets {
        origins: repo.list_origins().map_err(ServiceError::from)?,
        religions: repo.list_religions().map_err(ServiceError::from)?,
        languages: repo.list_languages().map_err(ServiceError::from)?,
    };

    Ok(CatalogPageData {
        names: Paginated::from(result),
        facets,
        search_query: params.search,
        sort: params.sort.as_str(),
    })
}

/// Same pipeline, returned raw for the JSON API.
pub fn list_names<R>(
    repo: &R,
    params: QueryParams,
) -> ServiceResult<PagedResult<crate::domain::name::NameRecord>>
where
    R: NameReader + ?Sized,
{
    let snapshot = repo.list_names().map_err(ServiceError::from)?;
    Ok(query::query(&snapshot, &params))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::domain::name::NameRecord;
    use crate::domain::types::Gender;
    use crate::query::GenderFilter;
    use crate::repository::mock::MockRepository;

    fn record(id: i32, name: &str, gender: Gender, popularity: Option<i32>) -> NameRecord {
        NameRecord {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            meaning: String::new(),
            gender,
            origin: "Latin".to_string(),
            religion: None,
            language: None,
            popularity,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn browse_names_filters_and_collects_facets() {
        let mut repo = MockRepository::new();
        repo.expect_list_names().returning(|| {
            Ok(vec![
                record(1, "Liam", Gender::Boy, Some(1)),
                record(2, "Ava", Gender::Girl, Some(2)),
            ])
        });
        repo.expect_list_origins()
            .returning(|| Ok(vec!["Latin".to_string()]));
        repo.expect_list_religions().returning(|| Ok(vec![]));
        repo.expect_list_languages().returning(|| Ok(vec![]));

        let params = QueryParams::default().gender(GenderFilter::Only(Gender::Girl));
        let data = browse_names(&repo, params).unwrap();

        assert_eq!(data.names.total, 1);
        assert_eq!(data.names.items[0].name, "Ava");
        assert_eq!(data.facets.origins, vec!["Latin".to_string()]);
    }

    #[test]
    fn list_names_propagates_repository_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_names().returning(|| {
            Err(crate::repository::errors::RepositoryError::NotFound)
        });

        let result = list_names(&repo, QueryParams::default());

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
