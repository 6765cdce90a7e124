pub mod file;
pub mod health;
pub mod user;

use actix_web::web;
use crate::errors::AppError;

/// Registers the `/api` route table and the JSON extractor error mapping.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("", web::post().to(user::create_user))
                    .route("/{wallet_address}", web::get().to(user::get_user))
                    .route("/{wallet_address}/stats", web::get().to(user::get_user_stats)),
            )
            .service(
                web::scope("/files")
                    .route("", web::post().to(file::create_file))
                    .route("/user/{wallet_address}", web::get().to(file::get_user_files))
                    .route("/shared/{wallet_address}", web::get().to(file::get_shared_files))
                    .route("/{file_id}", web::get().to(file::get_file_by_id))
                    .route("/{file_id}", web::delete().to(file::delete_file))
                    .route("/{file_id}/share", web::post().to(file::share_file)),
            ),
    );
}
