//! Repository implementation for catalog name records.

use diesel::prelude::*;

use crate::domain::name::{NameRecord, NewNameRecord, UpdateNameRecord};
use crate::models::name::{Name as DbName, NewName as DbNewName, UpdateName as DbUpdateName};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, NameReader, NameWriter};

fn into_domain(db_names: Vec<DbName>) -> RepositoryResult<Vec<NameRecord>> {
    db_names
        .into_iter()
        .map(|db_name| NameRecord::try_from(db_name).map_err(RepositoryError::from))
        .collect()
}

impl NameReader for DieselRepository {
    fn get_name_by_id(&self, id: i32) -> RepositoryResult<Option<NameRecord>> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let db_name = names::table.find(id).first::<DbName>(&mut conn).optional()?;

        match db_name {
            Some(db_name) => Ok(Some(
                NameRecord::try_from(db_name).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn get_name_by_slug(&self, slug: &str) -> RepositoryResult<Option<NameRecord>> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let db_name = names::table
            .filter(names::slug.eq(slug))
            .first::<DbName>(&mut conn)
            .optional()?;

        match db_name {
            Some(db_name) => Ok(Some(
                NameRecord::try_from(db_name).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_names(&self) -> RepositoryResult<Vec<NameRecord>> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let db_names = names::table
            .order(names::id.asc())
            .load::<DbName>(&mut conn)?;

        into_domain(db_names)
    }

    fn list_origins(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let origins = names::table
            .select(names::origin)
            .distinct()
            .order(names::origin.asc())
            .load::<String>(&mut conn)?;

        Ok(origins.into_iter().filter(|s| !s.is_empty()).collect())
    }

    fn list_religions(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let religions = names::table
            .select(names::religion)
            .distinct()
            .order(names::religion.asc())
            .load::<Option<String>>(&mut conn)?;

        Ok(religions.into_iter().flatten().collect())
    }

    fn list_languages(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let languages = names::table
            .select(names::language)
            .distinct()
            .order(names::language.asc())
            .load::<Option<String>>(&mut conn)?;

        Ok(languages.into_iter().flatten().collect())
    }
}

impl NameWriter for DieselRepository {
    fn create_names(&self, new_names: &[NewNameRecord]) -> RepositoryResult<usize> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewName> = new_names.iter().map(Into::into).collect();
        let affected = diesel::insert_into(names::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_name(
        &self,
        name_id: i32,
        updates: &UpdateNameRecord,
    ) -> RepositoryResult<NameRecord> {
        use crate::schema::names;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateName = updates.into();

        let updated = diesel::update(names::table.find(name_id))
            .set(&db_updates)
            .get_result::<DbName>(&mut conn)?;

        NameRecord::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_name(&self, name_id: i32) -> RepositoryResult<()> {
        use crate::schema::{famous_bearers, name_faqs, name_traits, name_variations, names, seo_meta};

        let mut conn = self.conn()?;

        // Owned collections go first; SQLite foreign keys are enforced by the
        // pool's PRAGMA but cascades are kept explicit here.
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(name_variations::table.filter(name_variations::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::delete(name_traits::table.filter(name_traits::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::delete(famous_bearers::table.filter(famous_bearers::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::delete(name_faqs::table.filter(name_faqs::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::delete(seo_meta::table.filter(seo_meta::name_id.eq(name_id))).execute(conn)?;
            diesel::delete(names::table.find(name_id)).execute(conn)?;
            Ok(())
        })?;

        Ok(())
    }
}
