//! Admin data-entry handlers, registered under the `/admin` scope behind
//! [`crate::middleware::RedirectUnauthorized`].

use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::SERVICE_ADMIN_ROLE;
use crate::forms::main::BrowseForm;
use crate::forms::name::{
    SaveDetailsForm, SaveFaqsForm, SaveNameForm, SaveSeoForm, UploadNamesForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, NameReader};
use crate::routes::{base_context, ensure_role, redirect, render_template};
use crate::services::{ServiceError, admin as admin_service, catalog, name as name_service};

/// Flash-and-redirect handling shared by the mutation handlers.
fn after_mutation(result: Result<&str, ServiceError>, back: &str) -> HttpResponse {
    match result {
        Ok(message) => {
            FlashMessage::success(message.to_string()).send();
            redirect(back)
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Name not found.").send();
            redirect("/admin")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(back)
        }
        Err(e) => {
            error!("Admin operation failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("")]
pub async fn show_admin(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let form = BrowseForm::from_query_string(req.query_string());
    let data = match catalog::browse_names(repo.get_ref(), form.into_query()) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to list names: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "admin");
    context.insert("current_user", &user);
    context.insert("names", &data.names);
    context.insert("search_query", &data.search_query);

    render_template(&tera, "admin/index.html", &context)
}

#[post("/name/add")]
pub async fn add_name(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveNameForm>,
) -> impl Responder {
    let result = admin_service::add_name(repo.get_ref(), &user, &form).map(|()| "Name added.");
    after_mutation(result, "/admin")
}

#[get("/name/{name_id}")]
pub async fn edit_name(
    name_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let name_id = name_id.into_inner();
    let record = match repo.get_ref().get_name_by_id(name_id) {
        Ok(Some(record)) => record,
        Ok(None) => {
            FlashMessage::error("Name not found.").send();
            return redirect("/admin");
        }
        Err(e) => {
            error!("Failed to load name {name_id}: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let profile = match name_service::load_name_profile(repo.get_ref(), &record.slug) {
        Ok(profile) => profile,
        Err(e) => {
            error!("Failed to load name profile {name_id}: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "admin");
    context.insert("current_user", &user);
    context.insert("record", &profile.record);
    context.insert("variations", &profile.variations.join("\n"));
    context.insert("traits", &profile.traits.join("\n"));
    context.insert(
        "bearers",
        &profile
            .famous_bearers
            .iter()
            .map(|b| format!("{} | {}", b.full_name, b.description))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    context.insert(
        "faqs",
        &profile
            .faqs
            .iter()
            .map(|f| format!("{} | {}", f.question, f.answer))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    context.insert("seo", &profile.seo);

    render_template(&tera, "admin/edit.html", &context)
}

#[post("/name/{name_id}")]
pub async fn save_name(
    name_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveNameForm>,
) -> impl Responder {
    let name_id = name_id.into_inner();
    let back = format!("/admin/name/{name_id}");
    let result = admin_service::save_name(repo.get_ref(), &user, name_id, &form)
        .map(|_| "Name saved.");
    after_mutation(result, &back)
}

#[post("/name/{name_id}/delete")]
pub async fn delete_name(
    name_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = admin_service::delete_name(repo.get_ref(), &user, name_id.into_inner())
        .map(|()| "Name deleted.");
    after_mutation(result, "/admin")
}

#[post("/name/{name_id}/details")]
pub async fn save_details(
    name_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveDetailsForm>,
) -> impl Responder {
    let name_id = name_id.into_inner();
    let back = format!("/admin/name/{name_id}");
    let result = admin_service::save_details(repo.get_ref(), &user, name_id, &form)
        .map(|()| "Details saved.");
    after_mutation(result, &back)
}

#[post("/name/{name_id}/faqs")]
pub async fn save_faqs(
    name_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveFaqsForm>,
) -> impl Responder {
    let name_id = name_id.into_inner();
    let back = format!("/admin/name/{name_id}");
    let result =
        admin_service::save_faqs(repo.get_ref(), &user, name_id, &form).map(|()| "FAQs saved.");
    after_mutation(result, &back)
}

#[post("/name/{name_id}/seo")]
pub async fn save_seo(
    name_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveSeoForm>,
) -> impl Responder {
    let name_id = name_id.into_inner();
    let back = format!("/admin/name/{name_id}");
    let result =
        admin_service::save_seo(repo.get_ref(), &user, name_id, &form).map(|()| "SEO saved.");
    after_mutation(result, &back)
}

#[post("/names/upload")]
pub async fn upload_names(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadNamesForm>,
) -> impl Responder {
    match admin_service::upload_names(repo.get_ref(), &user, &mut form) {
        Ok(count) => {
            FlashMessage::success(format!("{count} names imported.")).send();
            redirect("/admin")
        }
        Err(e) => after_mutation(Err(e), "/admin"),
    }
}
