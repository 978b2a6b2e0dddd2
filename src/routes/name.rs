use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::name as name_service;
use crate::services::ServiceError;

#[get("/name/{slug}")]
pub async fn show_name(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let slug = slug.into_inner();

    let profile = match name_service::load_name_profile(repo.get_ref(), &slug) {
        Ok(profile) => profile,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Name not found.").send();
            return redirect("/");
        }
        Err(e) => {
            error!("Failed to load name {slug}: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "name");
    context.insert("record", &profile.record);
    context.insert("variations", &profile.variations);
    context.insert("traits", &profile.traits);
    context.insert("famous_bearers", &profile.famous_bearers);
    context.insert("faqs", &profile.faqs);
    context.insert("seo", &profile.seo);

    render_template(&tera, "name/show.html", &context)
}
