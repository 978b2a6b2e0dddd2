//! Detail page loading for a single catalog name.

use crate::dto::name::NameProfileData;
use crate::repository::{NameDetailReader, NameReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads a name record with all of its owned collections.
pub fn load_name_profile<R>(repo: &R, slug: &str) -> ServiceResult<NameProfileData>
where
    R: NameReader + NameDetailReader + ?Sized,
{
    let record = repo
        .get_name_by_slug(slug)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let variations = repo.list_variations(record.id).map_err(ServiceError::from)?;
    let traits = repo.list_traits(record.id).map_err(ServiceError::from)?;
    let famous_bearers = repo
        .list_famous_bearers(record.id)
        .map_err(ServiceError::from)?;
    let faqs = repo.list_faqs(record.id).map_err(ServiceError::from)?;
    let seo = repo.get_seo_meta(record.id).map_err(ServiceError::from)?;

    Ok(NameProfileData {
        record,
        variations,
        traits,
        famous_bearers,
        faqs,
        seo,
    })
}
