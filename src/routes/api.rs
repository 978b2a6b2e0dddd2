use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;

use crate::forms::main::BrowseForm;
use crate::repository::DieselRepository;
use crate::services::catalog;

/// JSON catalog endpoint. Accepts the same query parameters as the
/// index page and returns the paged pipeline result.
#[get("/v1/names")]
pub async fn api_v1_names(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = BrowseForm::from_query_string(req.query_string());
    match catalog::list_names(repo.get_ref(), form.into_query()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            error!("Failed to list names: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
