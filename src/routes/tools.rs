//! Novelty tool pages. Each page recomputes its score from the query
//! parameters, so results are linkable and always deterministic.

use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::tools::PairForm;
use crate::routes::{base_context, render_template};
use crate::services::tools;

#[get("/tools/love-calculator")]
pub async fn love_calculator(
    params: web::Query<PairForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "tools");
    context.insert("first", &params.first);
    context.insert("second", &params.second);
    if let Some((first, second)) = params.names() {
        context.insert("score", &tools::love_score(first, second));
    }
    render_template(&tera, "tools/love.html", &context)
}

#[get("/tools/name-combiner")]
pub async fn name_combiner(
    params: web::Query<PairForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "tools");
    context.insert("first", &params.first);
    context.insert("second", &params.second);
    if let Some((first, second)) = params.names() {
        context.insert("suggestions", &tools::combine_names(first, second));
    }
    render_template(&tera, "tools/combiner.html", &context)
}

#[get("/tools/name-matcher")]
pub async fn name_matcher(
    params: web::Query<PairForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "tools");
    context.insert("first", &params.first);
    context.insert("second", &params.second);
    if let Some((name, sibling)) = params.names() {
        context.insert("score", &tools::match_score(name, sibling));
    }
    render_template(&tera, "tools/matcher.html", &context)
}

#[get("/tools/compatibility")]
pub async fn compatibility(
    params: web::Query<PairForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "tools");
    context.insert("first", &params.first);
    context.insert("second", &params.second);
    if let Some((first, second)) = params.names() {
        context.insert("score", &tools::compatibility_score(first, second));
    }
    render_template(&tera, "tools/compatibility.html", &context)
}
