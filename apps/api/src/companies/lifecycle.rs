//! Company creation, updates with asset replacement, and deletion.

use tracing::info;
use uuid::Uuid;

use crate::assets::{asset_key, delete_best_effort, AssetKind};
use crate::companies::payload::{CompanyUpdate, Upload};
use crate::companies::slug::unique_slug;
use crate::errors::AppError;
use crate::models::company::{CompanyRow, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};
use crate::state::AppState;
use crate::store::{CompanyChanges, NewCompany};

/// Creates the recruiter's company. A recruiter owns at most one, so this
/// fails when one already exists. `update.changes.name` is required.
pub async fn create_company(
    state: &AppState,
    recruiter_id: Uuid,
    update: CompanyUpdate,
) -> Result<CompanyRow, AppError> {
    if state.store.company_for_recruiter(recruiter_id).await?.is_some() {
        return Err(AppError::validation(
            "You already have a company. Use PUT to update it.",
        ));
    }
    let name = update
        .changes
        .name
        .clone()
        .ok_or_else(|| AppError::validation("Company name is required"))?;

    let company = insert_named(
        state,
        recruiter_id,
        &name,
        NewCompanyTheme::from_changes(&update.changes),
    )
    .await?;

    if update.has_uploads() {
        let files_only = CompanyUpdate {
            changes: CompanyChanges::default(),
            logo: update.logo,
            banner: update.banner,
        };
        return apply_update(state, &company, files_only).await;
    }
    Ok(company)
}

/// The recruiter's company, created with `name` (or "{username}'s Company")
/// when they have none yet.
pub async fn ensure_company(
    state: &AppState,
    recruiter_id: Uuid,
    username: &str,
    name: Option<&str>,
) -> Result<CompanyRow, AppError> {
    if let Some(company) = state.store.company_for_recruiter(recruiter_id).await? {
        return Ok(company);
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => format!("{username}'s Company"),
    };
    insert_named(state, recruiter_id, &name, NewCompanyTheme::default()).await
}

/// Applies a validated update. New files are stored before the row changes;
/// the files they replace are removed afterwards, best-effort.
pub async fn apply_update(
    state: &AppState,
    company: &CompanyRow,
    update: CompanyUpdate,
) -> Result<CompanyRow, AppError> {
    let mut changes = update.changes;
    if let Some(upload) = update.logo {
        changes.logo_key = Some(store_upload(state, AssetKind::Logo, upload).await?);
    }
    if let Some(upload) = update.banner {
        changes.banner_key = Some(store_upload(state, AssetKind::Banner, upload).await?);
    }

    let updated = match state
        .store
        .update_company(company.recruiter_id, company.id, &changes)
        .await
    {
        Ok(Some(row)) => row,
        outcome => {
            // The row was not written, so the fresh uploads are orphans
            for key in [&changes.logo_key, &changes.banner_key].into_iter().flatten() {
                delete_best_effort(state.assets.as_ref(), key).await;
            }
            return match outcome {
                Err(e) => Err(e.into()),
                _ => Err(AppError::not_found("Company not found")),
            };
        }
    };

    let superseded = [
        (&company.logo_key, &changes.logo_key),
        (&company.banner_key, &changes.banner_key),
    ];
    for (old, new) in superseded {
        if let (Some(old), Some(new)) = (old, new) {
            if old != new {
                delete_best_effort(state.assets.as_ref(), old).await;
            }
        }
    }

    Ok(updated)
}

/// Deletes the company with its sections and jobs, then its stored files.
pub async fn delete_company(state: &AppState, company: &CompanyRow) -> Result<bool, AppError> {
    let deleted = state
        .store
        .delete_company(company.recruiter_id, company.id)
        .await?;
    if deleted {
        for key in company.asset_keys() {
            delete_best_effort(state.assets.as_ref(), key).await;
        }
        info!("Deleted company {} ({})", company.slug, company.id);
    }
    Ok(deleted)
}

#[derive(Default)]
struct NewCompanyTheme {
    primary_color: Option<String>,
    secondary_color: Option<String>,
    culture_video_url: Option<String>,
}

impl NewCompanyTheme {
    fn from_changes(changes: &CompanyChanges) -> Self {
        Self {
            primary_color: changes.primary_color.clone(),
            secondary_color: changes.secondary_color.clone(),
            culture_video_url: changes.culture_video_url.clone().flatten(),
        }
    }
}

async fn insert_named(
    state: &AppState,
    recruiter_id: Uuid,
    name: &str,
    theme: NewCompanyTheme,
) -> Result<CompanyRow, AppError> {
    let slug = unique_slug(state.store.as_ref(), name).await?;
    let company = state
        .store
        .insert_company(&NewCompany {
            slug,
            name: name.to_string(),
            recruiter_id,
            primary_color: theme
                .primary_color
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: theme
                .secondary_color
                .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
            culture_video_url: theme.culture_video_url,
        })
        .await?;

    info!("Created company {} for recruiter {recruiter_id}", company.slug);
    Ok(company)
}

async fn store_upload(
    state: &AppState,
    kind: AssetKind,
    upload: Upload,
) -> Result<String, AppError> {
    let key = asset_key(kind, &upload.filename);
    state
        .assets
        .put(&key, upload.data, &upload.content_type)
        .await?;
    Ok(key)
}
