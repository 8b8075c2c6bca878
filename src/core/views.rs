//! Derived view types
//!
//! Computed per request by the query service, never stored. Each row type
//! matches one dashboard surface: the latest-invoices card list, the
//! paginated invoices table, the customers table, the summary cards and the
//! edit form.

use crate::core::model::{InvoiceId, InvoiceStatus};
use crate::core::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the latest-invoices list: top-5 by date, amount pre-formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestInvoiceRow {
    pub id: InvoiceId,
    pub name: String,
    pub image_url: String,
    pub email: String,
    /// Currency-formatted amount, e.g. `$1,234.56`
    pub amount: String,
}

/// One row of the paginated invoices table: invoice joined to its customer.
///
/// A missing customer joins as empty-string fields rather than dropping the
/// row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicesTableRow {
    pub id: InvoiceId,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub status: InvoiceStatus,
}

/// One row of the customers table, with per-customer invoice aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomersTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: usize,
    /// Currency-formatted sum of this customer's pending invoices
    pub total_pending: String,
    /// Currency-formatted sum of this customer's paid invoices
    pub total_paid: String,
}

/// Aggregates backing the dashboard summary cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub number_of_customers: usize,
    pub number_of_invoices: usize,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// An invoice as loaded into the edit form, amount in decimal dollars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub id: InvoiceId,
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Customer projected to the fields the invoice form's select needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}
