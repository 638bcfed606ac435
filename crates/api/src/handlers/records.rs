//! Generic record CRUD handlers.
//!
//! Every resource (projects, work history, certifications) is served by the
//! same five handlers, instantiated per record type. The handler state is
//! the repository for that record type.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use portfolio_core::records::{decode_record, ensure_id_matches, Record};
use portfolio_core::storage::{RecordRepository, RepositoryError};

use crate::handlers::AppError;

/// Repository handle used as the state of a resource's routes.
pub type Repository<R> = Arc<dyn RecordRepository<R>>;

/// List every record of a type (GET /{resource}).
pub async fn list_records<R: Record>(
    State(repo): State<Repository<R>>,
) -> Result<Json<Vec<R>>, AppError> {
    let records = repo.list().await?;

    tracing::debug!(entity = R::ENTITY_TYPE, count = records.len(), "Listed records");

    Ok(Json(records))
}

/// Get a single record by ID (GET /{resource}/{id}).
pub async fn get_record<R: Record>(
    State(repo): State<Repository<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>, AppError> {
    let record = repo
        .get(&id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: R::ENTITY_TYPE,
            id: id.clone(),
        })?;

    Ok(Json(record))
}

/// Create a record (POST /{resource}).
///
/// Writes unconditionally: a record with the same ID is replaced.
pub async fn create_record<R: Record>(
    State(repo): State<Repository<R>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let record: R = decode_record(&body)?;

    repo.put(&record).await?;

    tracing::info!(entity = R::ENTITY_TYPE, id = %record.id(), "Created record");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a record by ID (PUT /{resource}/{id}).
///
/// The body's `id` must match the URL. A record that did not exist is created.
pub async fn replace_record<R: Record>(
    State(repo): State<Repository<R>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<R>, AppError> {
    let record: R = decode_record(&body)?;
    ensure_id_matches(&id, &record)?;

    repo.put(&record).await?;

    tracing::info!(entity = R::ENTITY_TYPE, id = %id, "Replaced record");

    Ok(Json(record))
}

/// Delete a record by ID (DELETE /{resource}/{id}).
///
/// Succeeds whether or not the record existed.
pub async fn delete_record<R: Record>(
    State(repo): State<Repository<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    repo.delete(&id).await?;

    tracing::info!(entity = R::ENTITY_TYPE, id = %id, "Deleted record");

    Ok(StatusCode::NO_CONTENT)
}
