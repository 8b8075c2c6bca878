//! HTTP exposure for the dashboard data layer
//!
//! A thin axum surface the page-rendering layer consumes. Handlers only
//! translate between HTTP and the services; all semantics live in
//! [`QueryService`](crate::queries::QueryService) and
//! [`MutationService`](crate::mutations::MutationService).

pub mod handlers;

use crate::mutations::MutationService;
use crate::queries::QueryService;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub queries: QueryService,
    pub mutations: MutationService,
}

/// Build the dashboard router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard/revenue", get(handlers::revenue))
        .route("/dashboard/latest-invoices", get(handlers::latest_invoices))
        .route("/dashboard/cards", get(handlers::card_data))
        .route(
            "/invoices",
            get(handlers::list_invoices).post(handlers::create_invoice),
        )
        .route(
            "/invoices/{id}",
            get(handlers::get_invoice)
                .put(handlers::update_invoice)
                .delete(handlers::delete_invoice),
        )
        .route("/customers", get(handlers::list_customers))
        .route("/customers/table", get(handlers::customer_table))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Install the default tracing subscriber (`RUST_LOG` aware)
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
