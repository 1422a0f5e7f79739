//! Field validation for order intake

use kernel::error::validation::ValidationError;

use crate::domain::entity::order::OrderLine;

/// An order with no lines is accepted; the storage layer and the reads
/// handle it like any other order.
pub fn validate_lines(lines: &[OrderLine]) -> Result<(), ValidationError> {
    for (index, line) in lines.iter().enumerate() {
        if line.quantity < 1 {
            return Err(ValidationError::new(
                format!("products[{index}].quantity"),
                "must be at least 1",
            ));
        }
        if !line.price.is_finite() {
            return Err(ValidationError::new(
                format!("products[{index}].price"),
                "must be a number",
            ));
        }
    }
    Ok(())
}

/// The submitted total is stored verbatim rather than recomputed from the
/// lines. Any cross-check against line prices belongs here.
pub fn validate_total_amount(total_amount: f64) -> Result<(), ValidationError> {
    if !total_amount.is_finite() {
        return Err(ValidationError::new("totalAmount", "must be a number"));
    }
    Ok(())
}
