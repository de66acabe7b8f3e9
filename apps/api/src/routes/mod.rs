pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::companies::handlers as companies;
use crate::content::handlers as content;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::api_root))
        .nest("/api/companies", company_routes())
        .nest("/api/content", content_routes())
        .nest("/api/jobs", job_routes())
        .with_state(state)
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/me",
            get(companies::get_my_company)
                .post(companies::create_my_company)
                .put(companies::upsert_my_company)
                .patch(companies::upsert_my_company),
        )
        .route(
            "/:slug",
            get(companies::get_company)
                .put(companies::update_company)
                .patch(companies::update_company)
                .delete(companies::delete_company),
        )
        .route("/:slug/public", get(companies::public_company))
}

fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list_sections).post(content::create_section))
        .route("/reorder", post(content::reorder))
        .route("/public", get(content::public_sections))
        .route(
            "/:id",
            get(content::get_section)
                .put(content::update_section)
                .patch(content::update_section)
                .delete(content::delete_section),
        )
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs).post(jobs::create_job))
        .route("/public", get(jobs::public_jobs))
        .route(
            "/:id",
            get(jobs::get_job)
                .put(jobs::update_job)
                .patch(jobs::update_job)
                .delete(jobs::delete_job),
        )
}
