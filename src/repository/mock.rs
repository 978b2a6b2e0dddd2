//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::detail::{FamousBearer, NameFaq, NewFamousBearer, NewNameFaq, SeoMeta};
use crate::domain::name::{NameRecord, NewNameRecord, UpdateNameRecord};
use crate::repository::errors::RepositoryResult;
use crate::repository::{NameDetailReader, NameDetailWriter, NameReader, NameWriter};

mock! {
    pub Repository {}

    impl NameReader for Repository {
        fn get_name_by_id(&self, id: i32) -> RepositoryResult<Option<NameRecord>>;
        fn get_name_by_slug(&self, slug: &str) -> RepositoryResult<Option<NameRecord>>;
        fn list_names(&self) -> RepositoryResult<Vec<NameRecord>>;
        fn list_origins(&self) -> RepositoryResult<Vec<String>>;
        fn list_religions(&self) -> RepositoryResult<Vec<String>>;
        fn list_languages(&self) -> RepositoryResult<Vec<String>>;
    }

    impl NameWriter for Repository {
        fn create_names(&self, new_names: &[NewNameRecord]) -> RepositoryResult<usize>;
        fn update_name(
            &self,
            name_id: i32,
            updates: &UpdateNameRecord,
        ) -> RepositoryResult<NameRecord>;
        fn delete_name(&self, name_id: i32) -> RepositoryResult<()>;
    }

    impl NameDetailReader for Repository {
        fn list_variations(&self, name_id: i32) -> RepositoryResult<Vec<String>>;
        fn list_traits(&self, name_id: i32) -> RepositoryResult<Vec<String>>;
        fn list_famous_bearers(&self, name_id: i32) -> RepositoryResult<Vec<FamousBearer>>;
        fn list_faqs(&self, name_id: i32) -> RepositoryResult<Vec<NameFaq>>;
        fn get_seo_meta(&self, name_id: i32) -> RepositoryResult<Option<SeoMeta>>;
    }

    impl NameDetailWriter for Repository {
        fn replace_variations(&self, name_id: i32, variants: &[String]) -> RepositoryResult<usize>;
        fn replace_traits(&self, name_id: i32, labels: &[String]) -> RepositoryResult<usize>;
        fn replace_famous_bearers(
            &self,
            name_id: i32,
            bearers: &[NewFamousBearer],
        ) -> RepositoryResult<usize>;
        fn replace_faqs(&self, name_id: i32, faqs: &[NewNameFaq]) -> RepositoryResult<usize>;
        fn upsert_seo_meta(&self, meta: &SeoMeta) -> RepositoryResult<SeoMeta>;
    }
}
