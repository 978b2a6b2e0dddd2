//! Repository implementation for the collections owned by a name record.
//!
//! The admin forms submit whole collections at a time, so writers follow a
//! delete-then-insert pattern inside one transaction, the same shape as any
//! other "replace the set" operation in the app.

use diesel::prelude::*;

use crate::domain::detail::{FamousBearer, NameFaq, NewFamousBearer, NewNameFaq, SeoMeta};
use crate::models::detail::{
    FamousBearer as DbFamousBearer, NameFaq as DbNameFaq, NewFamousBearerRow, NewNameFaqRow,
    NewNameTrait, NewNameVariation, SeoMeta as DbSeoMeta,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, NameDetailReader, NameDetailWriter};

impl NameDetailReader for DieselRepository {
    fn list_variations(&self, name_id: i32) -> RepositoryResult<Vec<String>> {
        use crate::schema::name_variations;

        let mut conn = self.conn()?;
        let variants = name_variations::table
            .filter(name_variations::name_id.eq(name_id))
            .order(name_variations::id.asc())
            .select(name_variations::variant)
            .load::<String>(&mut conn)?;

        Ok(variants)
    }

    fn list_traits(&self, name_id: i32) -> RepositoryResult<Vec<String>> {
        use crate::schema::name_traits;

        let mut conn = self.conn()?;
        let labels = name_traits::table
            .filter(name_traits::name_id.eq(name_id))
            .order(name_traits::id.asc())
            .select(name_traits::label)
            .load::<String>(&mut conn)?;

        Ok(labels)
    }

    fn list_famous_bearers(&self, name_id: i32) -> RepositoryResult<Vec<FamousBearer>> {
        use crate::schema::famous_bearers;

        let mut conn = self.conn()?;
        let bearers = famous_bearers::table
            .filter(famous_bearers::name_id.eq(name_id))
            .order(famous_bearers::id.asc())
            .load::<DbFamousBearer>(&mut conn)?;

        Ok(bearers.into_iter().map(Into::into).collect())
    }

    fn list_faqs(&self, name_id: i32) -> RepositoryResult<Vec<NameFaq>> {
        use crate::schema::name_faqs;

        let mut conn = self.conn()?;
        let faqs = name_faqs::table
            .filter(name_faqs::name_id.eq(name_id))
            .order(name_faqs::position.asc())
            .load::<DbNameFaq>(&mut conn)?;

        Ok(faqs.into_iter().map(Into::into).collect())
    }

    fn get_seo_meta(&self, name_id: i32) -> RepositoryResult<Option<SeoMeta>> {
        use crate::schema::seo_meta;

        let mut conn = self.conn()?;
        let meta = seo_meta::table
            .find(name_id)
            .first::<DbSeoMeta>(&mut conn)
            .optional()?;

        Ok(meta.map(Into::into))
    }
}

impl NameDetailWriter for DieselRepository {
    fn replace_variations(&self, name_id: i32, variants: &[String]) -> RepositoryResult<usize> {
        use crate::schema::name_variations;

        let mut conn = self.conn()?;
        let rows = variants
            .iter()
            .map(|variant| NewNameVariation {
                name_id,
                variant: variant.as_str(),
            })
            .collect::<Vec<_>>();

        let inserted = conn.transaction::<usize, diesel::result::Error, _>(move |conn| {
            diesel::delete(name_variations::table.filter(name_variations::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::insert_into(name_variations::table)
                .values(rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn replace_traits(&self, name_id: i32, labels: &[String]) -> RepositoryResult<usize> {
        use crate::schema::name_traits;

        let mut conn = self.conn()?;
        let rows = labels
            .iter()
            .map(|label| NewNameTrait {
                name_id,
                label: label.as_str(),
            })
            .collect::<Vec<_>>();

        let inserted = conn.transaction::<usize, diesel::result::Error, _>(move |conn| {
            diesel::delete(name_traits::table.filter(name_traits::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::insert_into(name_traits::table)
                .values(rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn replace_famous_bearers(
        &self,
        name_id: i32,
        bearers: &[NewFamousBearer],
    ) -> RepositoryResult<usize> {
        use crate::schema::famous_bearers;

        let mut conn = self.conn()?;
        let rows = bearers
            .iter()
            .map(|bearer| NewFamousBearerRow::from_domain(name_id, bearer))
            .collect::<Vec<_>>();

        let inserted = conn.transaction::<usize, diesel::result::Error, _>(move |conn| {
            diesel::delete(famous_bearers::table.filter(famous_bearers::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::insert_into(famous_bearers::table)
                .values(rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn replace_faqs(&self, name_id: i32, faqs: &[NewNameFaq]) -> RepositoryResult<usize> {
        use crate::schema::name_faqs;

        let mut conn = self.conn()?;
        let rows = faqs
            .iter()
            .map(|faq| NewNameFaqRow::from_domain(name_id, faq))
            .collect::<Vec<_>>();

        let inserted = conn.transaction::<usize, diesel::result::Error, _>(move |conn| {
            diesel::delete(name_faqs::table.filter(name_faqs::name_id.eq(name_id)))
                .execute(conn)?;
            diesel::insert_into(name_faqs::table)
                .values(rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn upsert_seo_meta(&self, meta: &SeoMeta) -> RepositoryResult<SeoMeta> {
        use crate::schema::seo_meta;

        let mut conn = self.conn()?;
        let row = DbSeoMeta::from_domain(meta);

        let stored = diesel::insert_into(seo_meta::table)
            .values(&row)
            .on_conflict(seo_meta::name_id)
            .do_update()
            .set(&row)
            .get_result::<DbSeoMeta>(&mut conn)?;

        Ok(stored.into())
    }
}
