//! Typed error handling for the facturier crate
//!
//! Two error kinds carry the caller-facing contract and must never be
//! collapsed into one another:
//!
//! - [`FetchError`]: a query derivation failed; the caller sees only a fixed
//!   per-operation message, the original cause goes to the log.
//! - [`ValidationError`]: a mutation's form input failed schema checks; the
//!   caller gets one machine-readable entry per offending field and no write
//!   has happened.
//!
//! [`StoreError`] and [`ConfigError`] round out the hierarchy for store
//! faults (missing record, poisoned lock) and configuration loading.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the facturier crate
#[derive(Debug)]
pub enum FacturierError {
    /// Query derivation failures
    Fetch(FetchError),

    /// Mutation input validation failures
    Validation(ValidationError),

    /// Store-level failures
    Store(StoreError),

    /// Configuration loading failures
    Config(ConfigError),
}

impl fmt::Display for FacturierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacturierError::Fetch(e) => write!(f, "{}", e),
            FacturierError::Validation(e) => write!(f, "{}", e),
            FacturierError::Store(e) => write!(f, "{}", e),
            FacturierError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FacturierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FacturierError::Fetch(e) => Some(e),
            FacturierError::Validation(e) => Some(e),
            FacturierError::Store(e) => Some(e),
            FacturierError::Config(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl FacturierError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FacturierError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FacturierError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FacturierError::Store(e) => e.status_code(),
            FacturierError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FacturierError::Fetch(_) => "FETCH_FAILED",
            FacturierError::Validation(_) => "VALIDATION_ERROR",
            FacturierError::Store(e) => e.error_code(),
            FacturierError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            FacturierError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            FacturierError::Store(StoreError::RecordNotFound { entity, id }) => {
                Some(serde_json::json!({
                    "entity": entity,
                    "id": id,
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for FacturierError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// A query derivation failed.
///
/// One variant per read operation. The display string is the operation's
/// fixed caller-facing message; the underlying cause is logged where the
/// failure is caught and is never attached here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    Revenue,
    LatestInvoices,
    CardData,
    Invoices,
    InvoicePages,
    Invoice,
    Customers,
    CustomerTable,
    User,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FetchError::Revenue => "Failed to fetch revenue data.",
            FetchError::LatestInvoices => "Failed to fetch the latest invoices.",
            FetchError::CardData => "Failed to fetch card data.",
            FetchError::Invoices => "Failed to fetch invoices.",
            FetchError::InvoicePages => "Failed to fetch total number of invoices.",
            FetchError::Invoice => "Failed to fetch invoice.",
            FetchError::Customers => "Failed to fetch all customers.",
            FetchError::CustomerTable => "Failed to fetch customer table.",
            FetchError::User => "Failed to fetch user.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for FacturierError {
    fn from(err: FetchError) -> Self {
        FacturierError::Fetch(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to mutation input validation
#[derive(Debug)]
pub enum ValidationError {
    /// One entry per offending field, in schema order
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    /// The offending fields, in schema order
    pub fn fields(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
        }
    }

    /// Whether a given field is among the offending ones
    pub fn names_field(&self, field: &str) -> bool {
        self.fields().iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for FacturierError {
    fn from(err: ValidationError) -> Self {
        FacturierError::Validation(err)
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors related to the in-memory store
#[derive(Debug)]
pub enum StoreError {
    /// No record exists under the given id.
    ///
    /// Also the outcome for an id string that does not parse: an id that was
    /// never issued cannot name a record.
    RecordNotFound {
        entity: &'static str,
        id: String,
    },

    /// A store lock was poisoned by a panicking writer
    LockPoisoned {
        message: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::RecordNotFound { entity, id } => {
                write!(f, "{} with id '{}' not found", entity, id)
            }
            StoreError::LockPoisoned { message } => {
                write!(f, "Store lock poisoned: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::LockPoisoned { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            StoreError::LockPoisoned { .. } => "STORE_POISONED",
        }
    }
}

impl From<StoreError> for FacturierError {
    fn from(err: StoreError) -> Self {
        FacturierError::Store(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration content
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    IoError {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for FacturierError {
    fn from(err: ConfigError) -> Self {
        FacturierError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for FacturierError {
    fn from(err: serde_yaml::Error) -> Self {
        FacturierError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for FacturierError {
    fn from(err: std::io::Error) -> Self {
        FacturierError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for facturier operations
pub type FacturierResult<T> = Result<T, FacturierError>;

// =============================================================================
// Tests
// =============================================================================
