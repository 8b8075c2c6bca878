//! Record types held by the store
//!
//! All collections are plain records populated once from static seed data.
//! Invoices are the only records that are ever mutated; customers, revenue
//! and users are read-only reference data.

use crate::core::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Stable identifier for an invoice.
///
/// Allocated sequentially by the store at creation time and never reused
/// within a process. Unlike an array index, it survives inserts and deletes
/// of other records. Rendered and parsed as a string at the API boundary,
/// so callers keep exchanging plain string ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvoiceId(u64);

impl InvoiceId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InvoiceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl Serialize for InvoiceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InvoiceId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// The wire representation, exactly `"pending"` or `"paid"`
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// Parse the wire representation; anything else is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice record as stored.
///
/// `amount` is an integer number of cents, never fractional. The stable id
/// is not a field: it is the key the store files the record under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer_id: String,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Validated invoice fields from a form submission.
///
/// `amount` is still in dollars here; the mutation layer converts to cents
/// when it writes the record.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// A customer record. `id` is unique across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// One month of the static revenue series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}

/// A user record, read by the hosting application's sign-in lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Form-encoded key/value input, as submitted by the rendering layer.
///
/// Deserializes transparently from a urlencoded body, so it plugs straight
/// into `axum::extract::Form`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Build form data from key/value pairs (test and demo convenience)
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a field value, `None` when the field was not submitted
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}
