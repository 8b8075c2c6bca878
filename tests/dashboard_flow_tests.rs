//! End-to-end flows over the public service API.
//!
//! These tests exercise the query and mutation services together against a
//! live store, covering the contract the dashboard depends on: ordering and
//! pagination of the invoice table, cents/dollars round-trips through the
//! form cycle, and the effects of mutations on subsequent reads.

use facturier::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn services() -> (InMemoryStore, QueryService, MutationService) {
    let store = InMemoryStore::seeded();
    let queries = QueryService::new(store.clone());
    let mutations = MutationService::new(store.clone(), Arc::new(NoopHooks));
    (store, queries, mutations)
}

fn form(customer_id: &str, amount: &str, status: &str) -> FormData {
    FormData::from_pairs([
        ("customer_id", customer_id),
        ("amount", amount),
        ("status", status),
    ])
}

// ==============================================================
// Latest invoices
// ==============================================================

#[tokio::test]
async fn test_latest_invoices_never_older_than_an_omitted_row() {
    let (store, queries, _) = services();

    let latest = queries.fetch_latest_invoices().await.unwrap();
    assert!(latest.len() <= 5);

    // Resolve each returned row back to its stored date
    let invoices = store.invoices().unwrap();
    let date_of = |id: &InvoiceId| {
        invoices
            .iter()
            .find(|(stored, _)| stored == id)
            .map(|(_, invoice)| invoice.date)
            .unwrap()
    };

    // Dates descend within the result
    let dates: Vec<NaiveDate> = latest.iter().map(|row| date_of(&row.id)).collect();
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));

    // No omitted invoice is newer than the oldest returned one
    let included: HashSet<String> = latest.iter().map(|row| row.id.to_string()).collect();
    let oldest_included = *dates.last().unwrap();
    for (id, invoice) in &invoices {
        if !included.contains(&id.to_string()) {
            assert!(invoice.date <= oldest_included);
        }
    }
}

// ==============================================================
// Pagination sweep
// ==============================================================

#[tokio::test]
async fn test_concatenated_pages_reproduce_the_filtered_set() {
    let (store, queries, _) = services();
    let query = "paid";

    let pages = queries.fetch_invoices_pages(query).await.unwrap();
    let mut swept: Vec<InvoicesTableRow> = Vec::new();
    for page in 1..=pages {
        let rows = queries.fetch_filtered_invoices(query, page).await.unwrap();
        assert!(rows.len() <= 6);
        swept.extend(rows);
    }

    // No duplicates
    let ids: HashSet<String> = swept.iter().map(|row| row.id.to_string()).collect();
    assert_eq!(ids.len(), swept.len());

    // No omissions: every stored paid invoice shows up
    let expected = store
        .invoices()
        .unwrap()
        .iter()
        .filter(|(_, invoice)| invoice.status == InvoiceStatus::Paid)
        .count();
    assert_eq!(swept.len(), expected);

    // And the sweep stays date-descending across page boundaries
    assert!(swept.windows(2).all(|pair| pair[0].date >= pair[1].date));
}

#[tokio::test]
async fn test_page_count_matches_sweep() {
    let (_, queries, _) = services();

    for query in ["", "pending", "2023", "no-such-thing"] {
        let pages = queries.fetch_invoices_pages(query).await.unwrap();
        let mut total = 0;
        for page in 1..=pages {
            total += queries
                .fetch_filtered_invoices(query, page)
                .await
                .unwrap()
                .len();
        }
        assert_eq!(pages, total.div_ceil(6), "query {query:?}");

        // The page after the last one is empty
        let beyond = queries
            .fetch_filtered_invoices(query, pages + 1)
            .await
            .unwrap();
        assert!(beyond.is_empty());
    }
}

// ==============================================================
// Form round-trips
// ==============================================================

#[tokio::test]
async fn test_create_then_fetch_round_trips_dollars() {
    let (_, queries, mutations) = services();

    let id = mutations
        .create_invoice(&form("c1", "42.50", "pending"))
        .await
        .unwrap();

    let fetched = queries
        .fetch_invoice_by_id(&id.to_string())
        .await
        .unwrap()
        .expect("created invoice should resolve");
    assert_eq!(fetched.customer_id, "c1");
    assert_eq!(fetched.amount, 42.5);
    assert_eq!(fetched.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn test_update_changes_only_the_schema_fields() {
    let (store, queries, mutations) = services();

    let (id, before) = store.invoices().unwrap().into_iter().next().unwrap();
    mutations
        .update_invoice(&id.to_string(), &form("c9", "12.34", "paid"))
        .await
        .unwrap();

    let after = store.invoice(id).unwrap().unwrap();
    assert_eq!(after.date, before.date);
    assert_eq!(after.customer_id, "c9");
    assert_eq!(after.amount.cents(), 1234);
    assert_eq!(after.status, InvoiceStatus::Paid);

    let fetched = queries
        .fetch_invoice_by_id(&id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.amount, 12.34);
}

// ==============================================================
// Deletion
// ==============================================================

#[tokio::test]
async fn test_deleted_invoice_disappears_from_every_view() {
    let (store, queries, mutations) = services();

    let (id, _) = store.invoices().unwrap().into_iter().next().unwrap();
    mutations.delete_invoice(&id.to_string()).await.unwrap();

    let pages = queries.fetch_invoices_pages("").await.unwrap();
    for page in 1..=pages {
        for row in queries.fetch_filtered_invoices("", page).await.unwrap() {
            assert_ne!(row.id, id);
        }
    }
    for row in queries.fetch_latest_invoices().await.unwrap() {
        assert_ne!(row.id, id);
    }
    assert!(
        queries
            .fetch_invoice_by_id(&id.to_string())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_leaves_other_ids_resolving_to_the_same_records() {
    let (store, queries, mutations) = services();

    let invoices = store.invoices().unwrap();
    let deleted_id = invoices[1].0;
    let survivors: Vec<(InvoiceId, Invoice)> = invoices
        .into_iter()
        .filter(|(id, _)| *id != deleted_id)
        .collect();

    mutations.delete_invoice(&deleted_id.to_string()).await.unwrap();

    for (id, invoice) in survivors {
        let fetched = queries
            .fetch_invoice_by_id(&id.to_string())
            .await
            .unwrap()
            .expect("surviving id should still resolve");
        assert_eq!(fetched.customer_id, invoice.customer_id);
        assert_eq!(fetched.amount, invoice.amount.to_dollars());
    }
}

// ==============================================================
// Aggregates stay consistent under mutation
// ==============================================================

#[tokio::test]
async fn test_card_data_tracks_mutations() {
    let (_, queries, mutations) = services();

    let before = queries.fetch_card_data().await.unwrap();
    mutations
        .create_invoice(&form("c1", "10", "paid"))
        .await
        .unwrap();
    let after = queries.fetch_card_data().await.unwrap();

    assert_eq!(after.number_of_invoices, before.number_of_invoices + 1);
    assert_eq!(after.number_of_customers, before.number_of_customers);
}

#[tokio::test]
async fn test_customer_table_counts_follow_invoice_churn() {
    let (store, queries, mutations) = services();

    let customer = store.customers().unwrap().into_iter().next().unwrap();
    let count_for = |rows: Vec<CustomersTableRow>| {
        rows.into_iter()
            .find(|row| row.id == customer.id)
            .map(|row| row.total_invoices)
            .unwrap_or(0)
    };

    let before = count_for(queries.fetch_filtered_customers("").await.unwrap());
    mutations
        .create_invoice(&form(&customer.id, "5", "pending"))
        .await
        .unwrap();
    let after = count_for(queries.fetch_filtered_customers("").await.unwrap());

    assert_eq!(after, before + 1);
}
