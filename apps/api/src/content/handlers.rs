use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthRecruiter;
use crate::companies;
use crate::content::payload::{ReorderRequest, SectionInput, SectionPatch};
use crate::content::reorder_sections;
use crate::content::serializers::{SectionPublicView, SectionView};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::company::CompanyRow;
use crate::state::AppState;
use crate::store::CompanyScope;

#[derive(Debug, Deserialize)]
pub struct PublicSectionQuery {
    pub company: Option<String>,
}

async fn my_company(state: &AppState, recruiter: &AuthRecruiter) -> Result<CompanyRow, AppError> {
    state
        .store
        .company_for_recruiter(recruiter.id)
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))
}

fn section_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Content section {id} not found"))
}

/// GET /api/content
pub async fn list_sections(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
) -> Result<Json<Vec<SectionView>>, AppError> {
    // No company yet means nothing to show, not an error
    let Some(company) = state.store.company_for_recruiter(recruiter.id).await? else {
        return Ok(Json(Vec::new()));
    };
    let rows = state.store.list_sections(CompanyScope::of(&company)).await?;
    Ok(Json(SectionView::list(rows, &company)))
}

/// POST /api/content
pub async fn create_section(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    AppJson(input): AppJson<SectionInput>,
) -> Result<(StatusCode, Json<SectionView>), AppError> {
    let section = input.validate()?;
    let company = state
        .store
        .company_for_recruiter(recruiter.id)
        .await?
        .ok_or_else(|| AppError::validation("You must create a company first"))?;

    let row = state
        .store
        .insert_section(CompanyScope::of(&company), &section)
        .await?;
    Ok((StatusCode::CREATED, Json(SectionView::new(row, &company))))
}

/// GET /api/content/:id
pub async fn get_section(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(id): Path<Uuid>,
) -> Result<Json<SectionView>, AppError> {
    let company = my_company(&state, &recruiter).await?;
    let row = state
        .store
        .get_section(CompanyScope::of(&company), id)
        .await?
        .ok_or_else(|| section_not_found(id))?;
    Ok(Json(SectionView::new(row, &company)))
}

/// PUT|PATCH /api/content/:id
pub async fn update_section(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(id): Path<Uuid>,
    AppJson(patch): AppJson<SectionPatch>,
) -> Result<Json<SectionView>, AppError> {
    let changes = patch.validate()?;
    let company = my_company(&state, &recruiter).await?;
    let row = state
        .store
        .update_section(CompanyScope::of(&company), id, &changes)
        .await?
        .ok_or_else(|| section_not_found(id))?;
    Ok(Json(SectionView::new(row, &company)))
}

/// DELETE /api/content/:id
pub async fn delete_section(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let company = my_company(&state, &recruiter).await?;
    if !state
        .store
        .delete_section(CompanyScope::of(&company), id)
        .await?
    {
        return Err(section_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/content/reorder
pub async fn reorder(
    State(state): State<AppState>,
    recruiter: AuthRecruiter,
    AppJson(request): AppJson<ReorderRequest>,
) -> Result<Json<Vec<SectionView>>, AppError> {
    if request.section_ids.is_empty() {
        return Err(AppError::validation("section_ids is required"));
    }
    let company = my_company(&state, &recruiter).await?;

    let rows = reorder_sections(
        state.store.as_ref(),
        CompanyScope::of(&company),
        &request.section_ids,
    )
    .await?;
    Ok(Json(SectionView::list(rows, &company)))
}

/// GET /api/content/public?company=<slug>
pub async fn public_sections(
    State(state): State<AppState>,
    Query(query): Query<PublicSectionQuery>,
) -> Result<Json<Vec<SectionPublicView>>, AppError> {
    let company = companies::public_company(&state, query.company.as_deref()).await?;
    let rows = state
        .store
        .list_active_sections(CompanyScope::of(&company))
        .await?;
    Ok(Json(rows.into_iter().map(SectionPublicView::from).collect()))
}
