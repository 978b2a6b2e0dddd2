//! Persistence traits for the name catalog.
//!
//! The browsing pipeline in [`crate::query`] works on an already-loaded
//! snapshot, so readers here only load, slice by id/slug and report the
//! distinct facet labels used by the filter dropdowns; filtering, sorting
//! and pagination stay out of SQL.

use crate::db::DbPool;
use crate::domain::detail::{FamousBearer, NameFaq, NewFamousBearer, NewNameFaq, SeoMeta};
use crate::domain::name::{NameRecord, NewNameRecord, UpdateNameRecord};
use crate::repository::errors::RepositoryResult;

pub mod detail;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod name;

pub trait NameReader {
    fn get_name_by_id(&self, id: i32) -> RepositoryResult<Option<NameRecord>>;
    fn get_name_by_slug(&self, slug: &str) -> RepositoryResult<Option<NameRecord>>;
    /// Full catalog snapshot in insertion order, the input to the query
    /// pipeline.
    fn list_names(&self) -> RepositoryResult<Vec<NameRecord>>;
    fn list_origins(&self) -> RepositoryResult<Vec<String>>;
    fn list_religions(&self) -> RepositoryResult<Vec<String>>;
    fn list_languages(&self) -> RepositoryResult<Vec<String>>;
}

pub trait NameWriter {
    fn create_names(&self, new_names: &[NewNameRecord]) -> RepositoryResult<usize>;
    fn update_name(&self, name_id: i32, updates: &UpdateNameRecord) -> RepositoryResult<NameRecord>;
    fn delete_name(&self, name_id: i32) -> RepositoryResult<()>;
}

pub trait NameDetailReader {
    fn list_variations(&self, name_id: i32) -> RepositoryResult<Vec<String>>;
    fn list_traits(&self, name_id: i32) -> RepositoryResult<Vec<String>>;
    fn list_famous_bearers(&self, name_id: i32) -> RepositoryResult<Vec<FamousBearer>>;
    fn list_faqs(&self, name_id: i32) -> RepositoryResult<Vec<NameFaq>>;
    fn get_seo_meta(&self, name_id: i32) -> RepositoryResult<Option<SeoMeta>>;
}

pub trait NameDetailWriter {
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

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
