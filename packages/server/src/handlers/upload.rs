use axum::Json;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use tracing::{info, instrument, warn};

use crate::error::{AppError, ErrorBody};
use crate::models::upload::{BatchUploadResponse, UploadResponse};
use crate::state::AppState;
use crate::utils::object_key::{allowed_extension, batch_upload_key, single_upload_key};

pub fn upload_body_limit(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    AppError::Validation(format!("Multipart error: {e}"))
}

/// `ext` includes the leading dot.
fn content_type_for(ext: &str) -> String {
    mime_guess::from_ext(ext.trim_start_matches('.'))
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Upload",
    operation_id = "uploadImage",
    summary = "Upload one image",
    description = "Stores the `file` multipart field in object storage and returns its public URL. \
        Only .jpg, .jpeg, .png, .gif and .webp files are accepted (case-insensitive).",
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 200, description = "Stored", body = UploadResponse),
        (status = 400, description = "Missing file or unsupported type (VALIDATION_ERROR)", body = ErrorBody),
        (status = 503, description = "Object storage not configured (STORAGE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        file = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::Validation("No file uploaded in field 'file'".into()))?;
    let ext = allowed_extension(&file_name).ok_or_else(|| {
        AppError::Validation("Only jpg, jpeg, png, gif and webp images are supported".into())
    })?;
    let store = state
        .object_store
        .as_ref()
        .ok_or(AppError::StorageUnavailable)?;

    let key = single_upload_key(&ext);
    let url = store
        .put_public(&key, &data, &content_type_for(&ext))
        .await?;
    info!(key = %key, size = data.len(), "Uploaded image");

    Ok(Json(UploadResponse {
        message: "Upload succeeded",
        url,
    }))
}

#[utoipa::path(
    post,
    path = "/api/upload/batch",
    tag = "Upload",
    operation_id = "uploadImages",
    summary = "Upload several images",
    description = "Stores every `files` multipart field. Files with an unsupported type, unreadable \
        content or a failed upload are skipped; only successful URLs are returned.",
    request_body(content_type = "multipart/form-data", description = "Images in repeated `files` fields"),
    responses(
        (status = 200, description = "Upload finished", body = BatchUploadResponse),
        (status = 400, description = "No files (VALIDATION_ERROR)", body = ErrorBody),
        (status = 503, description = "Object storage not configured (STORAGE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BatchUploadResponse>, AppError> {
    // Unreadable parts keep their slot so later files keep their index.
    let mut files: Vec<(String, Option<Bytes>)> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("files") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(data) => files.push((file_name, Some(data))),
            Err(e) => {
                warn!(file_name = %file_name, error = %e, "Skipping unreadable file");
                files.push((file_name, None));
            }
        }
    }

    if files.is_empty() {
        return Err(AppError::Validation(
            "No files uploaded in field 'files'".into(),
        ));
    }
    let store = state
        .object_store
        .as_ref()
        .ok_or(AppError::StorageUnavailable)?;

    let mut urls = Vec::with_capacity(files.len());
    for (index, (file_name, data)) in files.into_iter().enumerate() {
        let Some(ext) = allowed_extension(&file_name) else {
            warn!(file_name = %file_name, "Skipping file with unsupported type");
            continue;
        };
        let Some(data) = data else {
            continue;
        };

        let key = batch_upload_key(index, &ext);
        match store.put_public(&key, &data, &content_type_for(&ext)).await {
            Ok(url) => urls.push(url),
            Err(e) => warn!(key = %key, error = %e, "Skipping file after failed upload"),
        }
    }
    info!(count = urls.len(), "Batch upload finished");

    Ok(Json(BatchUploadResponse {
        message: "Upload completed",
        count: urls.len(),
        urls,
    }))
}
