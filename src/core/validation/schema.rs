//! Invoice form schema
//!
//! Create and update share one schema over (customer_id, amount, status).
//! Every offending field is collected before reporting, so the form layer
//! can render all inline messages in one pass.

use super::validators::{not_negative, number, one_of, required};
use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::model::{FormData, InvoiceDraft, InvoiceStatus};

/// Allowed wire values for the status field
const STATUS_VALUES: &[&str] = &["pending", "paid"];

/// Validate a form submission against the invoice schema.
///
/// On success returns the validated draft (amount still in dollars). On
/// failure returns one [`FieldValidationError`] per offending field, in
/// schema order, and guarantees nothing was written anywhere.
pub fn parse_invoice(form: &FormData) -> Result<InvoiceDraft, ValidationError> {
    let customer_id = form.get("customer_id");
    let amount = form.get("amount");
    let status = form.get("status");

    let mut errors = Vec::new();
    let mut check = |field: &str, result: Result<(), String>| {
        if let Err(message) = result {
            errors.push(FieldValidationError {
                field: field.to_string(),
                message,
            });
        }
    };

    check("customer_id", required()(customer_id));
    check(
        "amount",
        required()(amount)
            .and_then(|()| number()(amount))
            .and_then(|()| not_negative()(amount)),
    );
    check(
        "status",
        required()(status).and_then(|()| one_of(STATUS_VALUES)(status)),
    );

    if !errors.is_empty() {
        return Err(ValidationError::FieldErrors(errors));
    }

    // The fallbacks below cannot fire: each field just passed its validators.
    let amount = amount.and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0);
    let status = status
        .and_then(InvoiceStatus::parse)
        .unwrap_or(InvoiceStatus::Pending);

    Ok(InvoiceDraft {
        customer_id: customer_id.unwrap_or_default().to_string(),
        amount,
        status,
    })
}
