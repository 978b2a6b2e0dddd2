//! Admin data-entry services. Every operation checks the admin role before
//! touching the repository.

use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::name::NameRecord;
use crate::forms::name::{SaveDetailsForm, SaveFaqsForm, SaveNameForm, SaveSeoForm, UploadNamesForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{NameDetailWriter, NameReader, NameWriter};
use crate::services::{ServiceError, ServiceResult};

fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.roles.iter().any(|role| role == SERVICE_ADMIN_ROLE) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Validates the add-name form and persists a new record.
pub fn add_name<R>(repo: &R, user: &AuthenticatedUser, form: &SaveNameForm) -> ServiceResult<()>
where
    R: NameWriter + ?Sized,
{
    ensure_admin(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("invalid name form".to_string()));
    }

    let new_record = form.to_new_record()?;
    repo.create_names(&[new_record]).map_err(|err| {
        log::error!("Failed to add a name: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Applies edits from the admin form to an existing record.
pub fn save_name<R>(
    repo: &R,
    user: &AuthenticatedUser,
    name_id: i32,
    form: &SaveNameForm,
) -> ServiceResult<NameRecord>
where
    R: NameWriter + ?Sized,
{
    ensure_admin(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("invalid name form".to_string()));
    }

    let updates = form.to_update_record()?;
    repo.update_name(name_id, &updates).map_err(|err| {
        log::error!("Failed to update name {name_id}: {err}");
        ServiceError::from(err)
    })
}

/// Removes a record and all of its owned collections.
pub fn delete_name<R>(repo: &R, user: &AuthenticatedUser, name_id: i32) -> ServiceResult<()>
where
    R: NameWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.delete_name(name_id).map_err(|err| {
        log::error!("Failed to delete name {name_id}: {err}");
        ServiceError::from(err)
    })
}

/// Parses the uploaded CSV file and creates records in bulk.
pub fn upload_names<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &mut UploadNamesForm,
) -> ServiceResult<usize>
where
    R: NameWriter + ?Sized,
{
    ensure_admin(user)?;

    let records = form.parse().map_err(|err| {
        log::error!("Failed to parse names csv: {err}");
        ServiceError::from(err)
    })?;

    repo.create_names(&records).map_err(|err| {
        log::error!("Failed to add names: {err}");
        ServiceError::from(err)
    })
}

/// Replaces variations, traits and famous bearers from the textarea editors.
pub fn save_details<R>(
    repo: &R,
    user: &AuthenticatedUser,
    name_id: i32,
    form: &SaveDetailsForm,
) -> ServiceResult<()>
where
    R: NameReader + NameDetailWriter + ?Sized,
{
    ensure_admin(user)?;

    if repo.get_name_by_id(name_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.replace_variations(name_id, &form.variations())?;
    repo.replace_traits(name_id, &form.traits())?;
    repo.replace_famous_bearers(name_id, &form.bearers())?;

    Ok(())
}

/// Replaces the FAQ list for a record.
pub fn save_faqs<R>(
    repo: &R,
    user: &AuthenticatedUser,
    name_id: i32,
    form: &SaveFaqsForm,
) -> ServiceResult<()>
where
    R: NameReader + NameDetailWriter + ?Sized,
{
    ensure_admin(user)?;

    if repo.get_name_by_id(name_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.replace_faqs(name_id, &form.faqs())?;
    Ok(())
}

/// Stores the SEO fields for a record.
pub fn save_seo<R>(
    repo: &R,
    user: &AuthenticatedUser,
    name_id: i32,
    form: &SaveSeoForm,
) -> ServiceResult<()>
where
    R: NameReader + NameDetailWriter + ?Sized,
{
    ensure_admin(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("invalid seo form".to_string()));
    }

    if repo.get_name_by_id(name_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.upsert_seo_meta(&form.to_seo_meta(name_id))?;
    Ok(())
}
