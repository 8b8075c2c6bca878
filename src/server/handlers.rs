//! Dashboard HTTP handlers

use super::AppState;
use crate::core::error::{FacturierError, StoreError};
use crate::core::model::{FormData, Revenue};
use crate::core::pagination::{ITEMS_PER_PAGE, PaginatedResponse, PaginationMeta};
use crate::core::views::{
    CardSummary, CustomerField, CustomersTableRow, InvoiceForm, InvoicesTableRow, LatestInvoiceRow,
};
use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use serde::Deserialize;

/// Search and pagination parameters of the invoices table
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    pub query: String,
    pub page: usize,
}

impl ListParams {
    /// Page number, clamped to at least 1
    fn page(&self) -> usize {
        self.page.max(1)
    }
}

/// Search parameter of the customers table
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SearchParams {
    pub query: String,
}

pub async fn revenue(
    State(state): State<AppState>,
) -> Result<Json<Vec<Revenue>>, FacturierError> {
    Ok(Json(state.queries.fetch_revenue().await?))
}

pub async fn latest_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<LatestInvoiceRow>>, FacturierError> {
    Ok(Json(state.queries.fetch_latest_invoices().await?))
}

pub async fn card_data(
    State(state): State<AppState>,
) -> Result<Json<CardSummary>, FacturierError> {
    Ok(Json(state.queries.fetch_card_data().await?))
}

pub async fn list_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<InvoicesTableRow>>, FacturierError> {
    let page = params.page();
    let data = state
        .queries
        .fetch_filtered_invoices(&params.query, page)
        .await?;
    let total_pages = state.queries.fetch_invoices_pages(&params.query).await?;

    Ok(Json(PaginatedResponse {
        data,
        pagination: PaginationMeta::new(page, ITEMS_PER_PAGE, total_pages),
    }))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceForm>, FacturierError> {
    match state.queries.fetch_invoice_by_id(&id).await? {
        Some(invoice) => Ok(Json(invoice)),
        None => Err(StoreError::RecordNotFound {
            entity: "invoice",
            id,
        }
        .into()),
    }
}

/// Create from a form post, then send the caller where the framework
/// redirect points
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> Result<Redirect, FacturierError> {
    state.mutations.create_invoice(&form).await?;
    Ok(Redirect::to(state.mutations.invoices_path()))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<FormData>,
) -> Result<Redirect, FacturierError> {
    state.mutations.update_invoice(&id, &form).await?;
    Ok(Redirect::to(state.mutations.invoices_path()))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, FacturierError> {
    state.mutations.delete_invoice(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerField>>, FacturierError> {
    Ok(Json(state.queries.fetch_customers().await?))
}

pub async fn customer_table(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CustomersTableRow>>, FacturierError> {
    Ok(Json(
        state.queries.fetch_filtered_customers(&params.query).await?,
    ))
}
