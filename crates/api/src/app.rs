use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use portfolio_core::records::Record;
use portfolio_core::storage::RecordRepository;

use crate::{
    handlers::records::{create_record, delete_record, get_record, list_records, replace_record},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // One CORS policy for every route
    let cors = CorsLayer::new()
        .allow_origin(state.cors_origin.clone())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(record_routes("/projects", state.projects))
        .merge(record_routes("/workhistory", state.work_history))
        .merge(record_routes("/certifications", state.certifications))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// The five CRUD routes for one record type, mounted at `prefix`.
fn record_routes<R: Record>(prefix: &str, repo: Arc<dyn RecordRepository<R>>) -> Router {
    Router::new()
        .route(prefix, get(list_records::<R>).post(create_record::<R>))
        .route(
            &format!("{prefix}/{{id}}"),
            get(get_record::<R>)
                .put(replace_record::<R>)
                .delete(delete_record::<R>),
        )
        .with_state(repo)
}
