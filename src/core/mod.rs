//! Core types: records, money, views, errors, validation, events

pub mod error;
pub mod events;
pub mod model;
pub mod money;
pub mod pagination;
pub mod validation;
pub mod views;

pub use error::{
    ConfigError, ErrorResponse, FacturierError, FacturierResult, FetchError,
    FieldValidationError, StoreError, ValidationError,
};
pub use events::{EventBus, NoopHooks, SiteEvent, SiteHooks};
pub use model::{Customer, FormData, Invoice, InvoiceDraft, InvoiceId, InvoiceStatus, Revenue, User};
pub use money::Money;
pub use views::{
    CardSummary, CustomerField, CustomersTableRow, InvoiceForm, InvoicesTableRow, LatestInvoiceRow,
};
