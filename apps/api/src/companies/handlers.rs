use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::AuthRecruiter;
use crate::companies::lifecycle;
use crate::companies::payload::CompanyPayload;
use crate::companies::serializers::{CompanyPublicView, CompanyView};
use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::state::AppState;

async fn owned_company(
    state: &AppState,
    recruiter: &AuthRecruiter,
    slug: &str,
) -> Result<CompanyRow, AppError> {
    state
        .store
        .recruiter_company_by_slug(recruiter.id, slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Company '{slug}' not found")))
}

/// GET /api/companies
pub async fn list_companies(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
) -> Result<Json<Vec<CompanyView>>, AppError> {
    let companies = state.store.companies_for_recruiter(recruiter.id).await?;
    Ok(Json(
        companies
            .iter()
            .map(|c| CompanyView::new(c, state.asset_base_url()))
            .collect(),
    ))
}

/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    payload: CompanyPayload,
) -> Result<(StatusCode, Json<CompanyView>), AppError> {
    let update = payload.validate()?;
    let company = lifecycle::create_company(&state, recruiter.id, update).await?;
    Ok((
        StatusCode::CREATED,
        Json(CompanyView::new(&company, state.asset_base_url())),
    ))
}

/// GET /api/companies/:slug
pub async fn get_company(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(slug): Path<String>,
) -> Result<Json<CompanyView>, AppError> {
    let company = owned_company(&state, &recruiter, &slug).await?;
    Ok(Json(CompanyView::new(&company, state.asset_base_url())))
}

/// PUT|PATCH /api/companies/:slug
pub async fn update_company(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(slug): Path<String>,
    payload: CompanyPayload,
) -> Result<Json<CompanyView>, AppError> {
    let update = payload.validate()?;
    let company = owned_company(&state, &recruiter, &slug).await?;
    let updated = lifecycle::apply_update(&state, &company, update).await?;
    Ok(Json(CompanyView::new(&updated, state.asset_base_url())))
}

/// DELETE /api/companies/:slug
pub async fn delete_company(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    let company = owned_company(&state, &recruiter, &slug).await?;
    if !lifecycle::delete_company(&state, &company).await? {
        return Err(AppError::not_found(format!("Company '{slug}' not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/companies/me
pub async fn get_my_company(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
) -> Result<Json<CompanyView>, AppError> {
    let company = state
        .store
        .company_for_recruiter(recruiter.id)
        .await?
        .ok_or_else(|| AppError::not_found("No company found. Please create one first."))?;
    Ok(Json(CompanyView::new(&company, state.asset_base_url())))
}

/// POST /api/companies/me
pub async fn create_my_company(
    state: State<AppState>,
    recruiter: AuthRecruiter,
    payload: CompanyPayload,
) -> Result<(StatusCode, Json<CompanyView>), AppError> {
    create_company(state, recruiter, payload).await
}

/// PUT|PATCH /api/companies/me
///
/// Creates the company on first use, then applies the update.
pub async fn upsert_my_company(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    payload: CompanyPayload,
) -> Result<Json<CompanyView>, AppError> {
    let update = payload.validate()?;
    let company = lifecycle::ensure_company(
        &state,
        recruiter.id,
        &recruiter.username,
        update.changes.name.as_deref(),
    )
    .await?;
    let updated = lifecycle::apply_update(&state, &company, update).await?;
    Ok(Json(CompanyView::new(&updated, state.asset_base_url())))
}

/// GET /api/companies/:slug/public
pub async fn public_company(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CompanyPublicView>, AppError> {
    let company = state
        .store
        .company_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))?;
    Ok(Json(CompanyPublicView::new(&company, state.asset_base_url())))
}
