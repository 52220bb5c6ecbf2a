//! Admin editing API — explicit create/read/update/delete per entity, with
//! field validation before every write.

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::content::validation::{summarize, FieldError};
use crate::errors::{ApiJson, AppError};
use crate::models::profile::Profile;
use crate::state::AppState;
use crate::store::{ContentStore, Record};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring matched against the entity's search fields.
    pub q: Option<String>,
}

/// Rejects admin requests without the configured bearer token.
/// A deployment without `ADMIN_TOKEN` lets every request through.
pub async fn require_admin<S: ContentStore>(
    State(state): State<AppState<S>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.config.admin_token.as_deref() {
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if provided != Some(expected) {
            warn!("Rejected admin request to {}", request.uri().path());
            return Err(AppError::Unauthorized);
        }
    }
    Ok(next.run(request).await)
}

/// Field validation plus existence of every referenced record.
async fn check_write<S: ContentStore, R: Record>(store: &S, record: &R) -> Result<(), AppError> {
    let mut errors = record.validate();
    for (field, table, id) in record.references() {
        if !store.exists(table, id).await? {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("No record {id} in {table}"),
            });
        }
    }
    if errors.is_empty() {
        return Ok(());
    }
    info!("Rejected {} write: {}", R::TABLE, summarize(&errors));
    Err(AppError::Validation(errors))
}

fn not_found<R: Record>(id: i64) -> AppError {
    AppError::NotFound(format!("No {} record with id {id}", R::TABLE))
}

/// Keeps records whose search fields contain `term`, ignoring case.
pub fn search<R: Record>(rows: Vec<R>, term: &str) -> Vec<R> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            row.search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Collections
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/admin/{collection}
pub async fn handle_list<S: ContentStore, R: Record>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<R>>, AppError> {
    let rows: Vec<R> = state.store.list().await?;
    let mut rows = match params.q.as_deref() {
        Some(term) => search(rows, term),
        None => rows,
    };
    rows.sort_by(|a, b| a.display_cmp(b));
    Ok(Json(rows))
}

/// GET /api/v1/admin/{collection}/:id
pub async fn handle_get<S: ContentStore, R: Record>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<R>, AppError> {
    let row = state.store.get::<R>(id).await?.ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row))
}

/// POST /api/v1/admin/{collection}
pub async fn handle_create<S: ContentStore, R: Record>(
    State(state): State<AppState<S>>,
    ApiJson(record): ApiJson<R>,
) -> Result<(StatusCode, Json<R>), AppError> {
    check_write(state.store.as_ref(), &record).await?;
    let created = state.store.insert(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/admin/{collection}/:id
pub async fn handle_update<S: ContentStore, R: Record>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    ApiJson(mut record): ApiJson<R>,
) -> Result<Json<R>, AppError> {
    record.set_id(id);
    check_write(state.store.as_ref(), &record).await?;
    let updated = state
        .store
        .update(record)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/admin/{collection}/:id
pub async fn handle_delete<S: ContentStore, R: Record>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete::<R>(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<R>(id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile (single row)
// ────────────────────────────────────────────────────────────────────────────

async fn current_profile<S: ContentStore>(store: &S) -> Result<Option<Profile>, AppError> {
    let rows: Vec<Profile> = store.list().await?;
    Ok(rows.into_iter().min_by_key(|p| p.id))
}

/// GET /api/v1/admin/profile
pub async fn handle_get_profile<S: ContentStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Profile>, AppError> {
    current_profile(state.store.as_ref())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No profile configured".to_string()))
}

/// PUT /api/v1/admin/profile — creates the profile or replaces the existing one.
pub async fn handle_put_profile<S: ContentStore>(
    State(state): State<AppState<S>>,
    ApiJson(mut profile): ApiJson<Profile>,
) -> Result<Json<Profile>, AppError> {
    check_write(state.store.as_ref(), &profile).await?;
    let saved = match current_profile(state.store.as_ref()).await? {
        Some(existing) => {
            profile.set_id(existing.id);
            state
                .store
                .update(profile)
                .await?
                .ok_or_else(|| not_found::<Profile>(existing.id))?
        }
        None => state.store.insert(profile).await?,
    };
    Ok(Json(saved))
}

/// DELETE /api/v1/admin/profile
pub async fn handle_delete_profile<S: ContentStore>(
    State(state): State<AppState<S>>,
) -> Result<StatusCode, AppError> {
    let existing = current_profile(state.store.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("No profile configured".to_string()))?;
    state.store.delete::<Profile>(existing.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
