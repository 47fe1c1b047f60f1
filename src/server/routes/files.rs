//! File registry endpoints
//!
//! - `POST   /api/upload`               multipart field `file`
//! - `GET    /api/files`                JSON array of filenames
//! - `GET    /api/download/{filename}`  raw bytes as an attachment
//! - `DELETE /api/files/{filename}`

use crate::server::state::AppState;
use crate::utils::error::{FileDropError, Result};
use actix_multipart::{Field, Multipart};
use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{HttpResponse, web};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// Upload response body
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

/// Delete response body
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Configure file routes
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/upload", web::post().to(upload_file))
            .route("/files", web::get().to(list_files))
            .route("/files/{filename}", web::delete().to(delete_file))
            .route("/download/{filename}", web::get().to(download_file)),
    );
}

/// Store the first `file` part of a multipart form under its original name
/// POST /api/upload
pub async fn upload_file(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| FileDropError::multipart(format!("Invalid multipart data: {}", e)))?;

        let filename = field.content_disposition().and_then(upload_filename);

        match filename {
            Some(filename) if field.name() == Some(UPLOAD_FIELD) && upload.is_none() => {
                let content = read_field(&mut field).await?;
                upload = Some((filename, content));
            }
            // plain form fields and extra files are drained and ignored
            _ => {
                read_field(&mut field).await?;
            }
        }
    }

    let (filename, content) =
        upload.ok_or_else(|| FileDropError::missing_input("No file part in upload"))?;

    let stored = state.registry.upload(&filename, &content).await?;
    info!(filename = %stored.filename, size = content.len(), "File uploaded");

    Ok(HttpResponse::Ok().json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        filename: stored.filename,
    }))
}

/// List every stored filename
/// GET /api/files
pub async fn list_files(state: web::Data<AppState>) -> Result<HttpResponse> {
    let files = state.registry.list().await?;
    Ok(HttpResponse::Ok().json(files))
}

/// Send a stored file as an attachment under its original name
/// GET /api/download/{filename}
pub async fn download_file(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let filename = path.into_inner();
    let file = state.registry.download(&filename).await?;

    let extension = Path::new(&file.filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let content_type = actix_files::file_extension_to_mime(extension);

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(attachment(&file.filename))
        .body(file.content))
}

/// Remove a stored file
/// DELETE /api/files/{filename}
pub async fn delete_file(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let filename = path.into_inner();
    state.registry.delete(&filename).await?;
    info!(filename = %filename, "File deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: "File deleted successfully".to_string(),
    }))
}

/// Name of a multipart file part, from `filename=` or else RFC 5987 `filename*=`
fn upload_filename(cd: &ContentDisposition) -> Option<String> {
    if let Some(name) = cd.get_filename() {
        return Some(name.to_string());
    }

    cd.get_filename_ext()
        .map(|ext| String::from_utf8_lossy(&ext.value).into_owned())
}

/// `Content-Disposition: attachment` naming the original file
///
/// `filename=` only carries printable ASCII; anything else is replaced with
/// `_` there and the exact name goes into a percent-encoded `filename*`.
pub fn attachment(filename: &str) -> ContentDisposition {
    let plain = filename.bytes().all(|b| matches!(b, 0x20..=0x7e));

    let fallback = if plain {
        filename.to_string()
    } else {
        filename
            .chars()
            .map(|c| if matches!(c, ' '..='~') { c } else { '_' })
            .collect()
    };
    let mut parameters = vec![DispositionParam::Filename(fallback)];

    if !plain {
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext(String::from("UTF-8")),
            language_tag: None,
            value: filename.as_bytes().to_vec(),
        }));
    }

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

async fn read_field(field: &mut Field) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes = chunk
            .map_err(|e| FileDropError::multipart(format!("Error reading file chunk: {}", e)))?;
        data.extend_from_slice(&bytes);
    }
    Ok(data)
}
