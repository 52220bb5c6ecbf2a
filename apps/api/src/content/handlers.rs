use axum::{extract::State, Json};

use crate::content::aggregator::{build_resume_view, ResumeView};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::ContentStore;

/// GET /api/v1/resume
pub async fn handle_get_resume<S: ContentStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<ResumeView>, AppError> {
    let view = build_resume_view(state.store.as_ref()).await?;
    Ok(Json(view))
}
