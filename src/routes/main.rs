use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::forms::main::BrowseForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::catalog;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = BrowseForm::from_query_string(req.query_string());
    let selected_gender = form.gender.clone().unwrap_or_default();
    let selected_origins = form.origin.clone();
    let selected_religions = form.religion.clone();
    let selected_languages = form.language.clone();

    let data = match catalog::browse_names(repo.get_ref(), form.into_query()) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to browse names: {e}");
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "index");
    context.insert("names", &data.names);
    context.insert("facets", &data.facets);
    context.insert("search_query", &data.search_query);
    context.insert("sort", &data.sort);
    context.insert("selected_gender", &selected_gender);
    context.insert("selected_origins", &selected_origins);
    context.insert("selected_religions", &selected_religions);
    context.insert("selected_languages", &selected_languages);

    render_template(&tera, "main/index.html", &context)
}
