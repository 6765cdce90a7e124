use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use chrono::Utc;
use log::info;
use crate::errors::AppError;
use crate::models::file::{CreateFileRequest, FileResponse};
use crate::models::share::{ShareFileRequest, ShareResponse};
use crate::store::MetadataStore;
use crate::utils::validation::validate_payload;

pub async fn create_file(
    store: web::Data<MetadataStore>,
    request: web::Json<CreateFileRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&request.0)?;

    let file = store.create_file(request.into_inner())?;
    info!("Registered file {} ({} bytes) for {}", file.id, file.size, file.owner);

    Ok(HttpResponse::Created().json(FileResponse::from(file)))
}

pub async fn get_user_files(
    store: web::Data<MetadataStore>,
    wallet_address: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let files: Vec<FileResponse> = store
        .list_files_by_owner(&wallet_address)?
        .into_iter()
        .map(FileResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(files))
}

pub async fn get_file_by_id(
    store: web::Data<MetadataStore>,
    file_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let file = store.get_file_by_id(&file_id)?;
    Ok(HttpResponse::Ok().json(FileResponse::from(file)))
}

pub async fn delete_file(
    store: web::Data<MetadataStore>,
    file_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.delete_file_by_id(&file_id)? {
        return Err(AppError::NotFound("File not found".to_string()).into());
    }

    info!("Deleted file {}", file_id);
    Ok(HttpResponse::Ok().json(json!({
        "message": "File deleted successfully",
    })))
}

/// Acknowledges a share without recording it anywhere.
pub async fn share_file(
    store: web::Data<MetadataStore>,
    file_id: web::Path<String>,
    request: web::Json<ShareFileRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&request.0)?;

    let file = store.get_file_by_id(&file_id)?;
    let request = request.into_inner();

    Ok(HttpResponse::Created().json(ShareResponse {
        id: Uuid::new_v4().to_string(),
        file_id: file.id,
        recipient_address: request.recipient_address,
        access_level: request.access_level.unwrap_or_else(|| "read".to_string()),
        shared_at: Utc::now(),
        expires_at: request.expires_at,
    }))
}

pub async fn get_shared_files(_wallet_address: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(Vec::<FileResponse>::new())
}
