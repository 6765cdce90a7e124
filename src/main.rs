mod config;
mod errors;
mod handlers;
mod models;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use crate::config::Config;
use crate::store::MetadataStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    // Shared by every worker; dropped when the server stops.
    let store = web::Data::new(MetadataStore::new());

    info!("Starting server at {}:{}", config.host, config.port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(store.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host.as_str(), config.port))?.run().await
}
