//! # Facturier
//!
//! Data-access and mutation layer for an invoice/customer dashboard demo.
//!
//! ## Features
//!
//! - **In-Memory Store**: all record collections behind one lock, snapshot
//!   reads, stable sequential invoice ids that survive deletes
//! - **Query Service**: revenue, latest invoices, card aggregates, filtered
//!   and paginated invoice tables, customer tables, form lookups
//! - **Mutation Service**: validated create/update/delete over form input,
//!   with per-field validation errors and no partial writes
//! - **Framework Hooks**: cache-invalidation and redirect signals as an
//!   injectable capability, broadcast-bus or no-op
//! - **HTTP Exposure**: a thin axum router over both services
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use facturier::prelude::*;
//! use std::sync::Arc;
//!
//! let store = InMemoryStore::seeded();
//! let bus = EventBus::default();
//!
//! let queries = QueryService::new(store.clone());
//! let mutations = MutationService::new(store, Arc::new(bus));
//!
//! // Read a dashboard view
//! let latest = queries.fetch_latest_invoices().await?;
//!
//! // Apply a form submission
//! let form = FormData::from_pairs([
//!     ("customer_id", "c1"),
//!     ("amount", "42.50"),
//!     ("status", "pending"),
//! ]);
//! let id = mutations.create_invoice(&form).await?;
//! ```

pub mod config;
pub mod core;
pub mod mutations;
pub mod queries;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{FacturierError, FacturierResult, FetchError, StoreError, ValidationError},
        events::{EventBus, NoopHooks, SiteEvent, SiteHooks},
        model::{
            Customer, FormData, Invoice, InvoiceDraft, InvoiceId, InvoiceStatus, Revenue, User,
        },
        money::Money,
        views::{
            CardSummary, CustomerField, CustomersTableRow, InvoiceForm, InvoicesTableRow,
            LatestInvoiceRow,
        },
    };

    // === Services ===
    pub use crate::mutations::MutationService;
    pub use crate::queries::QueryService;

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::DashboardConfig;

    // === Server ===
    pub use crate::server::{AppState, router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
