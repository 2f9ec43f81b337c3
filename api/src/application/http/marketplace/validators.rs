use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Whole number with up to two decimal places.
static RATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,8}(\.\d{1,2})?$").unwrap());

/// Listing fields arrive as multipart text parts, so everything is optional
/// at the parsing layer and `required` enforcement happens here.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate, Default)]
pub struct CreateListingValidator {
    #[validate(
        required(message = "crop_name is required"),
        length(min = 1, max = 100, message = "crop_name must be between 1 and 100 characters")
    )]
    pub crop_name: Option<String>,

    pub category: Option<String>,

    #[validate(
        required(message = "quantity is required"),
        length(min = 1, max = 50, message = "quantity must be between 1 and 50 characters")
    )]
    pub quantity: Option<String>,

    #[validate(
        required(message = "rate is required"),
        regex(
            path = *RATE_FORMAT,
            message = "rate must be a number with at most two decimal places"
        )
    )]
    pub rate: Option<String>,

    #[validate(
        required(message = "location is required"),
        length(min = 1, max = 100, message = "location must be between 1 and 100 characters")
    )]
    pub location: Option<String>,

    #[validate(
        required(message = "contact_number is required"),
        length(min = 7, max = 20, message = "contact_number must be between 7 and 20 characters")
    )]
    pub contact_number: Option<String>,

    pub optional_contact: Option<String>,

    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate, Default)]
pub struct UpdateListingValidator {
    #[validate(length(min = 1, max = 100, message = "crop_name must be between 1 and 100 characters"))]
    pub crop_name: Option<String>,

    pub category: Option<String>,

    #[validate(length(min = 1, max = 50, message = "quantity must be between 1 and 50 characters"))]
    pub quantity: Option<String>,

    #[validate(regex(
        path = *RATE_FORMAT,
        message = "rate must be a number with at most two decimal places"
    ))]
    pub rate: Option<String>,

    #[validate(length(min = 1, max = 100, message = "location must be between 1 and 100 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 7, max = 20, message = "contact_number must be between 7 and 20 characters"))]
    pub contact_number: Option<String>,

    pub optional_contact: Option<String>,

    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_the_core_fields() {
        let errors = CreateListingValidator::default().validate().unwrap_err();
        let fields = errors.field_errors();

        for field in ["crop_name", "quantity", "rate", "location", "contact_number"] {
            assert!(fields.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn create_rejects_malformed_rate() {
        let validator = CreateListingValidator {
            crop_name: Some("Tomato".into()),
            quantity: Some("50 kg".into()),
            rate: Some("45.5.0".into()),
            location: Some("Bharatpur".into()),
            contact_number: Some("+9779800000000".into()),
            ..Default::default()
        };

        let errors = validator.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rate"));
    }

    #[test]
    fn update_accepts_a_partial_payload() {
        assert!(UpdateListingValidator::default().validate().is_ok());

        let validator = UpdateListingValidator {
            rate: Some("120".into()),
            ..Default::default()
        };
        assert!(validator.validate().is_ok());
    }
}
