//! Field validation for product writes
//!
//! Validation lives here rather than in the DTO layer so that every path
//! into the repository goes through the same checks. Failures name the
//! offending field.

use kernel::error::validation::ValidationError;

/// Validated input for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub description: Option<String>,
}

/// Partial update; absent fields keep their stored value.
///
/// `description` cannot be cleared through a patch, only replaced.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub description: Option<String>,
}

pub fn validate_new_product(input: &NewProduct) -> Result<(), ValidationError> {
    validate_name(&input.name)?;
    validate_price(input.price)?;
    validate_stock(input.stock)?;
    Ok(())
}

pub fn validate_patch(patch: &ProductPatch) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    if let Some(stock) = patch.stock {
        validate_stock(stock)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name", "cannot be empty"));
    }
    Ok(())
}

// Only finiteness is checked; a negative price is the operator's business.
fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::new("price", "must be a number"));
    }
    Ok(())
}

fn validate_stock(stock: i64) -> Result<(), ValidationError> {
    if stock < 0 {
        return Err(ValidationError::new("stock", "cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            price: 9.99,
            stock: 3,
            description: None,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_new_product(&valid_input()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let input = NewProduct {
            name: "   ".to_string(),
            ..valid_input()
        };
        assert_eq!(validate_new_product(&input).unwrap_err().field, "name");
    }

    #[test]
    fn test_negative_price_accepted() {
        let input = NewProduct {
            price: -5.0,
            ..valid_input()
        };
        assert!(validate_new_product(&input).is_ok());
    }

    #[test]
    fn test_nan_price_rejected() {
        let input = NewProduct {
            price: f64::NAN,
            ..valid_input()
        };
        assert!(validate_new_product(&input).is_err());
    }

    #[test]
    fn test_negative_stock_rejected() {
        let input = NewProduct {
            stock: -5,
            ..valid_input()
        };
        assert_eq!(validate_new_product(&input).unwrap_err().field, "stock");
    }

    #[test]
    fn test_empty_patch_is_valid() {
        assert!(validate_patch(&ProductPatch::default()).is_ok());
    }

    #[test]
    fn test_patch_checks_present_fields_only() {
        let patch = ProductPatch {
            price: Some(f64::NAN),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_err());

        let patch = ProductPatch {
            stock: Some(0),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_ok());
    }
}
