use actix_web::{web, HttpResponse};
use log::info;
use crate::models::user::CreateUserRequest;
use crate::store::MetadataStore;
use crate::utils::validation::validate_payload;

pub async fn create_user(
    store: web::Data<MetadataStore>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&request.0)?;

    let user = store.upsert_user(&request.wallet_address)?;
    info!("User {} ready", user.wallet_address);

    Ok(HttpResponse::Created().json(user))
}

pub async fn get_user(
    store: web::Data<MetadataStore>,
    wallet_address: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let user = store.get_user(&wallet_address)?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn get_user_stats(
    store: web::Data<MetadataStore>,
    wallet_address: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let stats = store.compute_user_stats(&wallet_address)?;
    Ok(HttpResponse::Ok().json(stats))
}
