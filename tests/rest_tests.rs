//! HTTP round-trips through the dashboard router.
//!
//! Full-stack checks: urlencoded form → handler → service → store → JSON
//! response, including redirect-after-post, validation payloads and error
//! status mapping.

use axum::http::StatusCode;
use axum_test::TestServer;
use facturier::prelude::*;
use std::sync::Arc;

fn make_server() -> TestServer {
    let store = InMemoryStore::seeded();
    let state = AppState {
        queries: QueryService::new(store.clone()),
        mutations: MutationService::new(store, Arc::new(NoopHooks)),
    };
    TestServer::new(router(state))
}

// ==============================================================
// Dashboard reads
// ==============================================================

#[tokio::test]
async fn test_rest_cards() {
    let server = make_server();

    let response = server.get("/dashboard/cards").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["number_of_customers"], 6);
    assert_eq!(body["number_of_invoices"], 13);
    assert!(body["total_paid_invoices"].as_str().unwrap().starts_with('$'));
    assert!(body["total_pending_invoices"].as_str().unwrap().starts_with('$'));
}

#[tokio::test]
async fn test_rest_revenue() {
    let server = make_server();

    let response = server.get("/dashboard/revenue").await;
    response.assert_status(StatusCode::OK);

    let body: Vec<Revenue> = response.json();
    assert_eq!(body.len(), 12);
    assert_eq!(body[0].month, "Jan");
}

#[tokio::test]
async fn test_rest_latest_invoices() {
    let server = make_server();

    let response = server.get("/dashboard/latest-invoices").await;
    response.assert_status(StatusCode::OK);

    let body: Vec<LatestInvoiceRow> = response.json();
    assert_eq!(body.len(), 5);
    assert!(body[0].amount.starts_with('$'));
}

// ==============================================================
// Invoices table
// ==============================================================

#[tokio::test]
async fn test_rest_list_invoices_paginated() {
    let server = make_server();

    let response = server
        .get("/invoices")
        .add_query_param("query", "")
        .add_query_param("page", "1")
        .await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 6);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["pagination"]["has_next"], true);
    assert_eq!(body["pagination"]["has_prev"], false);
}

#[tokio::test]
async fn test_rest_list_invoices_filtered() {
    let server = make_server();

    let response = server
        .get("/invoices")
        .add_query_param("query", "Evil Rabbit")
        .await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["name"], "Evil Rabbit");
    }
}

#[tokio::test]
async fn test_rest_get_invoice() {
    let server = make_server();

    let response = server.get("/invoices/0").await;
    response.assert_status(StatusCode::OK);

    let body: InvoiceForm = response.json();
    assert_eq!(body.id.to_string(), "0");
    assert_eq!(body.amount, 157.95);
    assert_eq!(body.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn test_rest_get_invoice_not_found() {
    let server = make_server();

    let response = server.get("/invoices/999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "RECORD_NOT_FOUND");
}

#[tokio::test]
async fn test_rest_get_invoice_garbage_id_not_found() {
    let server = make_server();

    let response = server.get("/invoices/not-an-id").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// Mutations
// ==============================================================

#[tokio::test]
async fn test_rest_create_redirects_to_invoice_list() {
    let server = make_server();

    let response = server
        .post("/invoices")
        .form(&[
            ("customer_id", "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa"),
            ("amount", "42.50"),
            ("status", "pending"),
        ])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard/invoices");

    // Seed ids run 0-12, so the new record lands under id 13
    let fetched = server.get("/invoices/13").await;
    fetched.assert_status(StatusCode::OK);
    let body: InvoiceForm = fetched.json();
    assert_eq!(body.amount, 42.5);
}

#[tokio::test]
async fn test_rest_create_invalid_form_is_422_with_field_details() {
    let server = make_server();

    let response = server
        .post("/invoices")
        .form(&[
            ("customer_id", "c1"),
            ("amount", "10"),
            ("status", "archived"),
        ])
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["fields"][0]["field"], "status");

    // Nothing was appended
    let missing = server.get("/invoices/13").await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_update_redirects_and_applies() {
    let server = make_server();

    let response = server
        .put("/invoices/2")
        .form(&[
            ("customer_id", "3958dc9e-712f-4377-85e9-fec4b6a6442a"),
            ("amount", "99.99"),
            ("status", "paid"),
        ])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let body: InvoiceForm = server.get("/invoices/2").await.json();
    assert_eq!(body.amount, 99.99);
    assert_eq!(body.status, InvoiceStatus::Paid);
}

#[tokio::test]
async fn test_rest_update_unknown_id_is_404() {
    let server = make_server();

    let response = server
        .put("/invoices/999")
        .form(&[
            ("customer_id", "c1"),
            ("amount", "10"),
            ("status", "paid"),
        ])
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_delete_then_get_is_404() {
    let server = make_server();

    let response = server.delete("/invoices/0").await;
    response.assert_status(StatusCode::NO_CONTENT);

    let gone = server.get("/invoices/0").await;
    gone.assert_status(StatusCode::NOT_FOUND);

    // Neighboring ids are unaffected
    let neighbor = server.get("/invoices/1").await;
    neighbor.assert_status(StatusCode::OK);
}

// ==============================================================
// Customers
// ==============================================================

#[tokio::test]
async fn test_rest_customers_sorted_by_name() {
    let server = make_server();

    let response = server.get("/customers").await;
    response.assert_status(StatusCode::OK);

    let body: Vec<CustomerField> = response.json();
    assert_eq!(body.len(), 6);
    let names: Vec<&str> = body.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_rest_customer_table_filtered() {
    let server = make_server();

    let response = server
        .get("/customers/table")
        .add_query_param("query", "delba")
        .await;
    response.assert_status(StatusCode::OK);

    let body: Vec<CustomersTableRow> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].name, "Delba de Oliveira");
    assert_eq!(body[0].total_invoices, 2);
    assert!(body[0].total_paid.starts_with('$'));
}
