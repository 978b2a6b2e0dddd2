use config::{Config, Environment, File};
use dotenvy::dotenv;

use namegrove::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config: ServerConfig = Config::builder()
        .add_source(File::with_name("namegrove").required(false))
        .add_source(Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    namegrove::run(server_config).await
}
