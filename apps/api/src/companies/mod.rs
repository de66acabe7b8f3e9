// Company profile: slug allocation, brand theme, logo/banner assets,
// recruiter-scoped CRUD and the public careers-page view.

pub mod handlers;
pub mod lifecycle;
pub mod payload;
pub mod serializers;
pub mod slug;

use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::state::AppState;

/// Resolves the `?company=<slug>` parameter of the public listings.
pub async fn public_company(
    state: &AppState,
    slug: Option<&str>,
) -> Result<CompanyRow, AppError> {
    let slug = slug
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("Company slug is required"))?;
    state
        .store
        .company_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))
}
