#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod schema;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

pub const SERVICE_ADMIN_ROLE: &str = "names_admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: crate::models::config::ServerConfig) -> std::io::Result<()> {
    use crate::db::establish_connection_pool;
    use crate::middleware::RedirectUnauthorized;
    use crate::repository::DieselRepository;
    use crate::routes::admin::{
        add_name, delete_name, edit_name, save_details, save_faqs, save_name, save_seo,
        show_admin, upload_names,
    };
    use crate::routes::api::api_v1_names;
    use crate::routes::auth::{login, logout, show_login};
    use crate::routes::main::show_index;
    use crate::routes::name::show_name;
    use crate::routes::tools::{compatibility, love_calculator, name_combiner, name_matcher};

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_web::middleware::Compress::default())
            .wrap(actix_web::middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_names))
            .service(
                web::scope("/admin")
                    .wrap(RedirectUnauthorized)
                    .service(show_admin)
                    .service(add_name)
                    .service(edit_name)
                    .service(save_name)
                    .service(delete_name)
                    .service(save_details)
                    .service(save_faqs)
                    .service(save_seo)
                    .service(upload_names),
            )
            .service(show_index)
            .service(show_name)
            .service(show_login)
            .service(login)
            .service(logout)
            .service(love_calculator)
            .service(name_combiner)
            .service(name_matcher)
            .service(compatibility)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
