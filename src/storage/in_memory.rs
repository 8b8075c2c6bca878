//! In-memory record store
//!
//! All four collections live behind a single `RwLock`, so a mutation is
//! atomic with respect to readers and reads serve snapshot copies. Invoices
//! are keyed by a stable sequential [`InvoiceId`] in an insertion-ordered
//! map; ids are never reused within a process, and removing a record leaves
//! every other id untouched.

use crate::core::model::{Customer, Invoice, InvoiceId, InvoiceStatus, Revenue, User};
use crate::core::money::Money;
use crate::storage::seed;
use anyhow::{Result, anyhow};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Tables {
    invoices: IndexMap<InvoiceId, Invoice>,
    next_invoice: u64,
    customers: Vec<Customer>,
    revenue: Vec<Revenue>,
    users: Vec<User>,
}

/// Thread-safe in-memory store for all record collections
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a store with no records at all
    pub fn empty() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
        }
    }

    /// Create a store populated with the static demo seed data
    pub fn seeded() -> Self {
        Self::with_records(
            seed::customers(),
            seed::invoices(),
            seed::revenue(),
            seed::users(),
        )
    }

    /// Create a store from explicit collections.
    ///
    /// Invoices are filed in the given order and receive ids 0, 1, 2, …
    pub fn with_records(
        customers: Vec<Customer>,
        invoices: Vec<Invoice>,
        revenue: Vec<Revenue>,
        users: Vec<User>,
    ) -> Self {
        let mut tables = Tables {
            customers,
            revenue,
            users,
            ..Tables::default()
        };
        for invoice in invoices {
            let id = InvoiceId::from_raw(tables.next_invoice);
            tables.next_invoice += 1;
            tables.invoices.insert(id, invoice);
        }
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    // === Invoice mutations (single-writer API) ===

    /// File a new invoice at the end of the collection, allocating its id
    pub fn insert_invoice(&self, invoice: Invoice) -> Result<InvoiceId> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = InvoiceId::from_raw(tables.next_invoice);
        tables.next_invoice += 1;
        tables.invoices.insert(id, invoice);

        Ok(id)
    }

    /// Replace customer_id/amount/status of the invoice under `id`.
    ///
    /// The record's `date` is left untouched. Returns the updated record, or
    /// `None` when no record exists under `id`.
    pub fn update_invoice(
        &self,
        id: InvoiceId,
        customer_id: String,
        amount: Money,
        status: InvoiceStatus,
    ) -> Result<Option<Invoice>> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(tables.invoices.get_mut(&id).map(|invoice| {
            invoice.customer_id = customer_id;
            invoice.amount = amount;
            invoice.status = status;
            invoice.clone()
        }))
    }

    /// Remove the invoice under `id`, preserving the order of the rest.
    ///
    /// Returns the removed record, or `None` when no record exists.
    pub fn remove_invoice(&self, id: InvoiceId) -> Result<Option<Invoice>> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // shift_remove keeps insertion order intact
        Ok(tables.invoices.shift_remove(&id))
    }

    // === Snapshot reads ===

    /// Get one invoice by id
    pub fn invoice(&self, id: InvoiceId) -> Result<Option<Invoice>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.invoices.get(&id).cloned())
    }

    /// All invoices with their ids, in insertion order
    pub fn invoices(&self) -> Result<Vec<(InvoiceId, Invoice)>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables
            .invoices
            .iter()
            .map(|(id, invoice)| (*id, invoice.clone()))
            .collect())
    }

    /// All customers, in seed order
    pub fn customers(&self) -> Result<Vec<Customer>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.customers.clone())
    }

    /// The static revenue series, in seed order
    pub fn revenue(&self) -> Result<Vec<Revenue>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.revenue.clone())
    }

    /// All user records
    pub fn users(&self) -> Result<Vec<User>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.users.clone())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::empty()
    }
}
