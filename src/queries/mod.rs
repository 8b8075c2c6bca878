//! Read-only query service
//!
//! Derives the dashboard's views (lists, pages, aggregates, lookups) from
//! snapshot reads of the record collections. Every operation is
//! all-or-nothing: an internal fault is logged and replaced by the
//! operation's fixed [`FetchError`] message, and no partial result ever
//! escapes.
//!
//! An optional artificial delay (demo scaffolding, see
//! [`DashboardConfig::fetch_delay_ms`]) runs before each derivation; by
//! default it is a no-op.

use crate::config::DashboardConfig;
use crate::core::error::FetchError;
use crate::core::model::{Customer, Invoice, InvoiceId, InvoiceStatus, Revenue, User};
use crate::core::money::Money;
use crate::core::pagination::{self, ITEMS_PER_PAGE};
use crate::core::views::{
    CardSummary, CustomerField, CustomersTableRow, InvoiceForm, InvoicesTableRow, LatestInvoiceRow,
};
use crate::storage::InMemoryStore;
use anyhow::Result;
use std::collections::HashMap;

/// How many rows the latest-invoices card shows
const LATEST_INVOICES_LIMIT: usize = 5;

/// Read-only derivations over the record collections
#[derive(Clone)]
pub struct QueryService {
    store: InMemoryStore,
    config: DashboardConfig,
}

impl QueryService {
    /// Create a query service with default configuration (no delay)
    pub fn new(store: InMemoryStore) -> Self {
        Self::with_config(store, DashboardConfig::default())
    }

    /// Create a query service with explicit configuration
    pub fn with_config(store: InMemoryStore, config: DashboardConfig) -> Self {
        Self { store, config }
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.config.fetch_delay() {
            tokio::time::sleep(delay).await;
        }
    }

    /// The static revenue series, unmodified
    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, FetchError> {
        self.simulate_latency().await;
        self.store
            .revenue()
            .map_err(|e| fetch_failed(FetchError::Revenue, e))
    }

    /// The five most recent invoices, joined to their customers, amounts
    /// currency-formatted
    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoiceRow>, FetchError> {
        self.simulate_latency().await;
        self.latest_invoices()
            .map_err(|e| fetch_failed(FetchError::LatestInvoices, e))
    }

    /// Counts and paid/pending totals backing the dashboard cards
    pub async fn fetch_card_data(&self) -> Result<CardSummary, FetchError> {
        self.simulate_latency().await;
        self.card_data()
            .map_err(|e| fetch_failed(FetchError::CardData, e))
    }

    /// One page (size 6) of the invoices table matching `query`.
    ///
    /// `query` is matched case-sensitively as a substring of the joined
    /// customer name or email, the stringified cents amount, the ISO date or
    /// the status; any single match keeps the row. Rows are ordered most
    /// recent first. `page` starts at 1.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: usize,
    ) -> Result<Vec<InvoicesTableRow>, FetchError> {
        self.simulate_latency().await;
        self.filtered_invoices(query, page)
            .map_err(|e| fetch_failed(FetchError::Invoices, e))
    }

    /// Number of pages the invoices table needs for `query`
    pub async fn fetch_invoices_pages(&self, query: &str) -> Result<usize, FetchError> {
        self.simulate_latency().await;
        self.invoice_pages(query)
            .map_err(|e| fetch_failed(FetchError::InvoicePages, e))
    }

    /// One invoice as edit-form data, amount in decimal dollars.
    ///
    /// `None` when no record exists under `id` (including id strings that
    /// were never issued and do not parse).
    pub async fn fetch_invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>, FetchError> {
        self.simulate_latency().await;
        self.invoice_by_id(id)
            .map_err(|e| fetch_failed(FetchError::Invoice, e))
    }

    /// All customers, name ascending, projected to id + name
    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>, FetchError> {
        self.simulate_latency().await;
        self.customer_fields()
            .map_err(|e| fetch_failed(FetchError::Customers, e))
    }

    /// The customers table: customers matching `query` by name or email,
    /// name ascending, with per-customer invoice aggregates
    pub async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomersTableRow>, FetchError> {
        self.simulate_latency().await;
        self.customer_table(query)
            .map_err(|e| fetch_failed(FetchError::CustomerTable, e))
    }

    /// Exact-match user lookup by email, read by the sign-in flow
    pub async fn fetch_user(&self, email: &str) -> Result<Option<User>, FetchError> {
        self.simulate_latency().await;
        self.user_by_email(email)
            .map_err(|e| fetch_failed(FetchError::User, e))
    }

    // === Derivations ===

    fn latest_invoices(&self) -> Result<Vec<LatestInvoiceRow>> {
        let mut invoices = self.store.invoices()?;
        let customers = self.store.customers()?;
        let by_id = customer_index(&customers);

        invoices.sort_by(|a, b| b.1.date.cmp(&a.1.date));

        Ok(invoices
            .into_iter()
            .take(LATEST_INVOICES_LIMIT)
            .map(|(id, invoice)| {
                let (name, email, image_url) = joined_customer(&by_id, &invoice.customer_id);
                LatestInvoiceRow {
                    id,
                    name,
                    image_url,
                    email,
                    amount: invoice.amount.to_string(),
                }
            })
            .collect())
    }

    fn card_data(&self) -> Result<CardSummary> {
        let invoices = self.store.invoices()?;
        let customers = self.store.customers()?;

        let paid: Money = invoices
            .iter()
            .filter(|(_, invoice)| invoice.status == InvoiceStatus::Paid)
            .map(|(_, invoice)| invoice.amount)
            .sum();
        let pending: Money = invoices
            .iter()
            .filter(|(_, invoice)| invoice.status == InvoiceStatus::Pending)
            .map(|(_, invoice)| invoice.amount)
            .sum();

        Ok(CardSummary {
            number_of_customers: customers.len(),
            number_of_invoices: invoices.len(),
            total_paid_invoices: paid.to_string(),
            total_pending_invoices: pending.to_string(),
        })
    }

    fn filtered_invoices(&self, query: &str, page: usize) -> Result<Vec<InvoicesTableRow>> {
        let offset = page.saturating_sub(1) * ITEMS_PER_PAGE;
        let mut invoices = self.store.invoices()?;
        let customers = self.store.customers()?;
        let by_id = customer_index(&customers);

        invoices.sort_by(|a, b| b.1.date.cmp(&a.1.date));

        Ok(invoices
            .into_iter()
            .map(|(id, invoice)| {
                let (name, email, image_url) = joined_customer(&by_id, &invoice.customer_id);
                (id, invoice, name, email, image_url)
            })
            .filter(|(_, invoice, name, email, _)| row_matches(query, name, email, invoice))
            .skip(offset)
            .take(ITEMS_PER_PAGE)
            .map(|(id, invoice, name, email, image_url)| InvoicesTableRow {
                id,
                date: invoice.date,
                amount: invoice.amount,
                status: invoice.status,
                customer_id: invoice.customer_id,
                name,
                email,
                image_url,
            })
            .collect())
    }

    fn invoice_pages(&self, query: &str) -> Result<usize> {
        let invoices = self.store.invoices()?;
        let customers = self.store.customers()?;
        let by_id = customer_index(&customers);

        let matches = invoices
            .iter()
            .filter(|(_, invoice)| {
                let (name, email, _) = joined_customer(&by_id, &invoice.customer_id);
                row_matches(query, &name, &email, invoice)
            })
            .count();

        Ok(pagination::total_pages(matches))
    }

    fn invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>> {
        let Ok(id) = id.parse::<InvoiceId>() else {
            return Ok(None);
        };

        Ok(self.store.invoice(id)?.map(|invoice| InvoiceForm {
            id,
            customer_id: invoice.customer_id,
            // Convert amount from cents to dollars
            amount: invoice.amount.to_dollars(),
            status: invoice.status,
        }))
    }

    fn customer_fields(&self) -> Result<Vec<CustomerField>> {
        let mut customers = self.store.customers()?;
        customers.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(customers
            .into_iter()
            .map(|customer| CustomerField {
                id: customer.id,
                name: customer.name,
            })
            .collect())
    }

    fn customer_table(&self, query: &str) -> Result<Vec<CustomersTableRow>> {
        let customers = self.store.customers()?;
        let invoices = self.store.invoices()?;

        let mut rows: Vec<CustomersTableRow> = customers
            .into_iter()
            .filter(|customer| customer.name.contains(query) || customer.email.contains(query))
            .map(|customer| {
                let mine: Vec<&Invoice> = invoices
                    .iter()
                    .filter(|(_, invoice)| invoice.customer_id == customer.id)
                    .map(|(_, invoice)| invoice)
                    .collect();

                let total_pending: Money = mine
                    .iter()
                    .filter(|invoice| invoice.status == InvoiceStatus::Pending)
                    .map(|invoice| invoice.amount)
                    .sum();
                let total_paid: Money = mine
                    .iter()
                    .filter(|invoice| invoice.status == InvoiceStatus::Paid)
                    .map(|invoice| invoice.amount)
                    .sum();

                CustomersTableRow {
                    id: customer.id,
                    name: customer.name,
                    email: customer.email,
                    image_url: customer.image_url,
                    total_invoices: mine.len(),
                    total_pending: total_pending.to_string(),
                    total_paid: total_paid.to_string(),
                }
            })
            .collect();

        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.store.users()?.into_iter().find(|u| u.email == email))
    }
}

/// Log the underlying cause and surface only the fixed message
fn fetch_failed(op: FetchError, cause: anyhow::Error) -> FetchError {
    tracing::error!(error = %cause, operation = %op, "Database error");
    op
}

fn customer_index(customers: &[Customer]) -> HashMap<&str, &Customer> {
    customers
        .iter()
        .map(|customer| (customer.id.as_str(), customer))
        .collect()
}

/// Joined customer fields; a lookup miss yields empty strings, never drops
/// the row
fn joined_customer(
    index: &HashMap<&str, &Customer>,
    customer_id: &str,
) -> (String, String, String) {
    match index.get(customer_id) {
        Some(customer) => (
            customer.name.clone(),
            customer.email.clone(),
            customer.image_url.clone(),
        ),
        None => (String::new(), String::new(), String::new()),
    }
}

/// The invoices-table filter predicate: case-sensitive substring match over
/// each searchable field, any hit keeps the row
fn row_matches(query: &str, name: &str, email: &str, invoice: &Invoice) -> bool {
    name.contains(query)
        || email.contains(query)
        || invoice.amount.cents().to_string().contains(query)
        || invoice.date.to_string().contains(query)
        || invoice.status.as_str().contains(query)
}
