use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::auth::AuthRecruiter;
use crate::companies;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::jobs::filters::{JobFilter, PublicJobQuery};
use crate::jobs::payload::{JobInput, JobPatch};
use crate::jobs::serializers::{JobPublicView, JobView};
use crate::models::company::CompanyRow;
use crate::state::AppState;
use crate::store::CompanyScope;

async fn my_company(state: &AppState, recruiter: &AuthRecruiter) -> Result<CompanyRow, AppError> {
    state
        .store
        .company_for_recruiter(recruiter.id)
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))
}

fn job_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Job {id} not found"))
}

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
) -> Result<Json<Vec<JobView>>, AppError> {
    let Some(company) = state.store.company_for_recruiter(recruiter.id).await? else {
        return Ok(Json(Vec::new()));
    };
    let rows = state.store.list_jobs(CompanyScope::of(&company)).await?;
    Ok(Json(JobView::list(rows, &company)))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    AppJson(input): AppJson<JobInput>,
) -> Result<(StatusCode, Json<JobView>), AppError> {
    let job = input.validate()?;
    let company = state
        .store
        .company_for_recruiter(recruiter.id)
        .await?
        .ok_or_else(|| AppError::validation("You must create a company first"))?;

    let row = state.store.insert_job(CompanyScope::of(&company), &job).await?;
    Ok((StatusCode::CREATED, Json(JobView::new(row, &company))))
}

/// GET /api/jobs/:id
pub async fn get_job(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(id): Path<Uuid>,
) -> Result<Json<JobView>, AppError> {
    let company = my_company(&state, &recruiter).await?;
    let row = state
        .store
        .get_job(CompanyScope::of(&company), id)
        .await?
        .ok_or_else(|| job_not_found(id))?;
    Ok(Json(JobView::new(row, &company)))
}

/// PUT|PATCH /api/jobs/:id
pub async fn update_job(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(id): Path<Uuid>,
    AppJson(patch): AppJson<JobPatch>,
) -> Result<Json<JobView>, AppError> {
    let changes = patch.validate()?;
    let company = my_company(&state, &recruiter).await?;
    let row = state
        .store
        .update_job(CompanyScope::of(&company), id, &changes)
        .await?
        .ok_or_else(|| job_not_found(id))?;
    Ok(Json(JobView::new(row, &company)))
}

/// DELETE /api/jobs/:id
pub async fn delete_job(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let company = my_company(&state, &recruiter).await?;
    if !state.store.delete_job(CompanyScope::of(&company), id).await? {
        return Err(job_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/jobs/public?company=<slug>&...
pub async fn public_jobs(
    State(state): State<AppState>,
    Query(query): Query<PublicJobQuery>,
) -> Result<Json<Vec<JobPublicView>>, AppError> {
    let company = companies::public_company(&state, query.company.as_deref()).await?;
    let filter = JobFilter::from_query(&query);
    let rows = state
        .store
        .search_jobs(CompanyScope::of(&company), &filter)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| JobPublicView::new(row, &company, state.asset_base_url()))
            .collect(),
    ))
}
