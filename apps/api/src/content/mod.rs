//! Editable careers-page sections: recruiter CRUD, bulk reordering and the
//! public, active-only listing.

pub mod handlers;
pub mod payload;
pub mod serializers;

use tracing::debug;
use uuid::Uuid;

use crate::models::content::ContentSectionRow;
use crate::store::{CareersStore, CompanyScope, StoreResult};

/// Gives each listed section its 0-based position as order. Ids outside the
/// scope are ignored, and sections not listed keep their current order.
/// Returns every section of the company in display order.
///
/// Rows are updated one at a time, so a failure part-way leaves the earlier
/// positions applied.
pub async fn reorder_sections(
    store: &dyn CareersStore,
    scope: CompanyScope,
    section_ids: &[Uuid],
) -> StoreResult<Vec<ContentSectionRow>> {
    for (position, id) in section_ids.iter().enumerate() {
        let order = i32::try_from(position).unwrap_or(i32::MAX);
        if !store.set_section_order(scope, *id, order).await? {
            debug!("Reorder skipped section {id}: not in company {}", scope.company_id());
        }
    }
    store.list_sections(scope).await
}
