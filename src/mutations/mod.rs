//! Mutation service
//!
//! Validates form input, computes derived fields and applies invoice
//! create/update/delete to the store, then signals the hosting framework
//! through [`SiteHooks`]: create and update revalidate the invoices path and
//! redirect the caller there, delete only revalidates.
//!
//! Validation runs before any write; on failure the store is untouched and
//! the caller receives one error per offending field. A mutation that names
//! an id no record exists under fails with `RecordNotFound` instead of
//! touching a neighbor.

use crate::config::DashboardConfig;
use crate::core::error::{FacturierError, StoreError};
use crate::core::events::SiteHooks;
use crate::core::model::{FormData, Invoice, InvoiceId};
use crate::core::money::Money;
use crate::core::validation::parse_invoice;
use crate::storage::InMemoryStore;
use chrono::Utc;
use std::sync::Arc;

/// Form-driven invoice mutations
#[derive(Clone)]
pub struct MutationService {
    store: InMemoryStore,
    hooks: Arc<dyn SiteHooks>,
    invoices_path: String,
}

impl MutationService {
    /// Create a mutation service with default configuration
    pub fn new(store: InMemoryStore, hooks: Arc<dyn SiteHooks>) -> Self {
        Self::with_config(store, hooks, &DashboardConfig::default())
    }

    /// Create a mutation service with explicit configuration
    pub fn with_config(
        store: InMemoryStore,
        hooks: Arc<dyn SiteHooks>,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            store,
            hooks,
            invoices_path: config.invoices_path.clone(),
        }
    }

    /// The path invalidated and redirected to after mutations
    pub fn invoices_path(&self) -> &str {
        &self.invoices_path
    }

    /// Validate the form, file a new invoice dated today (UTC), then
    /// revalidate and redirect
    pub async fn create_invoice(&self, form: &FormData) -> Result<InvoiceId, FacturierError> {
        let draft = parse_invoice(form)?;
        let invoice = Invoice {
            customer_id: draft.customer_id,
            amount: Money::from_dollars(draft.amount),
            status: draft.status,
            date: Utc::now().date_naive(),
        };

        let id = self.store.insert_invoice(invoice).map_err(store_fault)?;
        tracing::debug!(invoice_id = %id, "Invoice created");

        self.hooks.revalidate_path(&self.invoices_path).await;
        self.hooks.redirect(&self.invoices_path).await;
        Ok(id)
    }

    /// Validate the form, replace customer_id/amount/status of the invoice
    /// under `id` (its date is untouched), then revalidate and redirect
    pub async fn update_invoice(&self, id: &str, form: &FormData) -> Result<(), FacturierError> {
        let draft = parse_invoice(form)?;
        let invoice_id = parse_id(id)?;

        let updated = self
            .store
            .update_invoice(
                invoice_id,
                draft.customer_id,
                Money::from_dollars(draft.amount),
                draft.status,
            )
            .map_err(store_fault)?;
        if updated.is_none() {
            return Err(not_found(id));
        }
        tracing::debug!(invoice_id = %invoice_id, "Invoice updated");

        self.hooks.revalidate_path(&self.invoices_path).await;
        self.hooks.redirect(&self.invoices_path).await;
        Ok(())
    }

    /// Remove the invoice under `id`, then revalidate (no redirect)
    pub async fn delete_invoice(&self, id: &str) -> Result<(), FacturierError> {
        let invoice_id = parse_id(id)?;

        let removed = self.store.remove_invoice(invoice_id).map_err(store_fault)?;
        if removed.is_none() {
            return Err(not_found(id));
        }
        tracing::debug!(invoice_id = %invoice_id, "Invoice deleted");

        self.hooks.revalidate_path(&self.invoices_path).await;
        Ok(())
    }
}

/// An id string that does not parse was never issued, so it is a miss
fn parse_id(id: &str) -> Result<InvoiceId, FacturierError> {
    id.parse().map_err(|_| not_found(id))
}

fn not_found(id: &str) -> FacturierError {
    StoreError::RecordNotFound {
        entity: "invoice",
        id: id.to_string(),
    }
    .into()
}

fn store_fault(cause: anyhow::Error) -> FacturierError {
    tracing::error!(error = %cause, "Store fault during mutation");
    StoreError::LockPoisoned {
        message: cause.to_string(),
    }
    .into()
}
