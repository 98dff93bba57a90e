use std::fmt;

use crate::catalog::{CatalogSession, CategoryName};

use super::form::{FormField, PropertyForm};
use super::record::{Placeholder, PropertyRecord};

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViolationReason {
    #[error("'{value}' is not a published {category} value")]
    NotInCatalog {
        category: CategoryName,
        value: String,
    },
    #[error("amount {value} is negative")]
    NegativeAmount { value: f64 },
    #[error("amount {value} is not a finite number")]
    NonFiniteAmount { value: f64 },
    #[error("count {value} is negative")]
    NegativeCount { value: i64 },
    #[error("count {value} exceeds the supported maximum")]
    ExcessiveCount { value: i64 },
}

/// One rejected field paired with the reason it was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: FormField,
    pub reason: ViolationReason,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validation failure carrying every violation found in the submission, so
/// the form can flag all offending fields in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.violations
            .iter()
            .map(|violation| violation.field)
            .collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission rejected: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Convert raw form input into the canonical record, or report every field
/// that fails.
///
/// Checks run in the published order: catalog membership for the six
/// enumerated fields, then the numeric rules (amounts finite and
/// non-negative, counts non-negative and within the canonical unsigned
/// range). Text fields pass through untouched, the empty string included.
/// Fields the form does not collect are emitted as explicit unset
/// placeholders.
pub fn assemble_record(
    form: &PropertyForm,
    session: &CatalogSession,
) -> Result<PropertyRecord, ValidationError> {
    let mut violations = Vec::new();

    let memberships = [
        (FormField::OperationType, form.operation_type.as_str()),
        (FormField::OperationCurrency, form.operation_currency.as_str()),
        (FormField::ExpensesCurrency, form.expenses_currency.as_str()),
        (FormField::City, form.city.as_str()),
        (FormField::State, form.state.as_str()),
        (FormField::Country, form.country.as_str()),
    ];
    for (field, value) in memberships {
        check_membership(&mut violations, session, field, value);
    }

    let amounts = [
        (FormField::OperationAmount, form.operation_amount),
        (FormField::ExpensesAmount, form.expenses_amount),
        (FormField::TotalArea, form.total_area),
        (FormField::CoveredArea, form.covered_area),
    ];
    for (field, value) in amounts {
        check_amount(&mut violations, field, value);
    }

    let counts = [
        (FormField::Rooms, form.rooms),
        (FormField::Bedrooms, form.bedrooms),
        (FormField::Bathrooms, form.bathrooms),
        (FormField::Garages, form.garages),
        (FormField::Age, form.age),
        (FormField::Floors, form.floors),
        (FormField::ApartmentsPerFloor, form.apartments_per_floor),
        (FormField::ListingAge, form.listing_age),
    ];
    for (field, value) in counts {
        check_count(&mut violations, field, value);
    }

    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    Ok(PropertyRecord {
        id: form.id.clone(),
        name: form.name.clone(),
        operation_type: form.operation_type.clone(),
        operation_currency: form.operation_currency.clone(),
        operation_amount: form.operation_amount,
        expenses_currency: form.expenses_currency.clone(),
        expenses_amount: form.expenses_amount,
        total_area: form.total_area,
        covered_area: form.covered_area,
        rooms: bounded_count(form.rooms),
        bedrooms: bounded_count(form.bedrooms),
        bathrooms: bounded_count(form.bathrooms),
        garages: bounded_count(form.garages),
        age: bounded_count(form.age),
        building_layout: Placeholder::Unset,
        orientation: Placeholder::Unset,
        floors: bounded_count(form.floors),
        apartments_per_floor: bounded_count(form.apartments_per_floor),
        real_estate_type: Placeholder::Unset,
        posting_type: Placeholder::Unset,
        publisher_id: form.publisher_id.clone(),
        publisher_name: form.publisher_name.clone(),
        address: form.address.clone(),
        city: form.city.clone(),
        state: form.state.clone(),
        country: form.country.clone(),
        latitude: form.latitude.clone(),
        longitude: form.longitude.clone(),
        reserved: Placeholder::Unset,
        listing_age: bounded_count(form.listing_age),
        url: form.url.clone(),
    })
}

fn check_membership(
    violations: &mut Vec<FieldViolation>,
    session: &CatalogSession,
    field: FormField,
    value: &str,
) {
    let Some(category) = field.category() else {
        return;
    };

    if !session.contains(category, value) {
        violations.push(FieldViolation {
            field,
            reason: ViolationReason::NotInCatalog {
                category,
                value: value.to_string(),
            },
        });
    }
}

fn check_amount(violations: &mut Vec<FieldViolation>, field: FormField, value: f64) {
    if !value.is_finite() {
        violations.push(FieldViolation {
            field,
            reason: ViolationReason::NonFiniteAmount { value },
        });
    } else if value < 0.0 {
        violations.push(FieldViolation {
            field,
            reason: ViolationReason::NegativeAmount { value },
        });
    }
}

fn check_count(violations: &mut Vec<FieldViolation>, field: FormField, value: i64) {
    if value < 0 {
        violations.push(FieldViolation {
            field,
            reason: ViolationReason::NegativeCount { value },
        });
    } else if value > i64::from(u32::MAX) {
        violations.push(FieldViolation {
            field,
            reason: ViolationReason::ExcessiveCount { value },
        });
    }
}

fn bounded_count(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn ready_session() -> CatalogSession {
        CatalogSession::from_store(&CatalogStore::standard())
    }

    fn valid_form() -> PropertyForm {
        PropertyForm {
            id: "prop-001".to_string(),
            name: "Two bedroom with balcony".to_string(),
            operation_type: "Venta".to_string(),
            operation_currency: "USD".to_string(),
            operation_amount: 100_000.0,
            expenses_currency: "USD".to_string(),
            expenses_amount: 150.0,
            total_area: 68.0,
            covered_area: 61.5,
            rooms: 3,
            bedrooms: 2,
            bathrooms: 1,
            garages: 0,
            age: 12,
            floors: 8,
            apartments_per_floor: 4,
            listing_age: 30,
            publisher_id: "pub-77".to_string(),
            publisher_name: "Inmobiliaria Sur".to_string(),
            address: "Gorriti 4500".to_string(),
            city: "Palermo".to_string(),
            state: "Capital Federal".to_string(),
            country: "Argentina".to_string(),
            latitude: "-34.5889".to_string(),
            longitude: "-58.4301".to_string(),
            url: "https://example.com/prop-001".to_string(),
        }
    }

    #[test]
    fn well_formed_input_assembles_a_canonical_record() {
        let record =
            assemble_record(&valid_form(), &ready_session()).expect("valid form assembles");
        assert_eq!(record.operation_type, "Venta");
        assert_eq!(record.rooms, 3);
        assert!(record.building_layout.is_unset());
        assert!(record.orientation.is_unset());
        assert!(record.real_estate_type.is_unset());
        assert!(record.posting_type.is_unset());
        assert!(record.reserved.is_unset());
    }

    #[test]
    fn unlisted_selection_names_the_field_and_category() {
        let mut form = valid_form();
        form.operation_type = "Alquiler".to_string();

        let error = assemble_record(&form, &ready_session()).expect_err("rejected");
        assert_eq!(error.fields(), [FormField::OperationType]);
        assert_eq!(
            error.violations()[0].reason,
            ViolationReason::NotInCatalog {
                category: CategoryName::OperationType,
                value: "Alquiler".to_string(),
            }
        );
    }

    #[test]
    fn every_offending_field_is_collected_in_check_order() {
        let mut form = valid_form();
        form.city = "Montevideo".to_string();
        form.operation_amount = -5.0;
        form.rooms = -1;

        let error = assemble_record(&form, &ready_session()).expect_err("rejected");
        assert_eq!(
            error.fields(),
            [FormField::City, FormField::OperationAmount, FormField::Rooms]
        );
    }

    #[test]
    fn empty_catalog_blocks_every_enumerated_field() {
        let error =
            assemble_record(&valid_form(), &CatalogSession::empty()).expect_err("rejected");
        assert_eq!(error.violations().len(), 6);
        assert!(error
            .violations()
            .iter()
            .all(|violation| matches!(violation.reason, ViolationReason::NotInCatalog { .. })));
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        let mut form = valid_form();
        form.expenses_amount = f64::NAN;

        let error = assemble_record(&form, &ready_session()).expect_err("rejected");
        assert_eq!(error.fields(), [FormField::ExpensesAmount]);
        assert!(matches!(
            error.violations()[0].reason,
            ViolationReason::NonFiniteAmount { .. }
        ));
    }

    #[test]
    fn counts_beyond_the_canonical_range_are_rejected() {
        let mut form = valid_form();
        form.rooms = i64::from(u32::MAX) + 10;

        let error = assemble_record(&form, &ready_session()).expect_err("rejected");
        assert_eq!(error.fields(), [FormField::Rooms]);
        assert!(matches!(
            error.violations()[0].reason,
            ViolationReason::ExcessiveCount { .. }
        ));

        form.rooms = i64::from(u32::MAX);
        let record = assemble_record(&form, &ready_session()).expect("boundary value accepted");
        assert_eq!(record.rooms, u32::MAX);
    }

    #[test]
    fn empty_text_fields_pass_through() {
        let mut form = valid_form();
        form.name = String::new();
        form.address = String::new();
        form.latitude = String::new();

        let record = assemble_record(&form, &ready_session()).expect("still well-formed");
        assert_eq!(record.name, "");
        assert_eq!(record.latitude, "");
    }

    #[test]
    fn zero_numerics_are_legal() {
        let mut form = valid_form();
        form.operation_amount = 0.0;
        form.expenses_amount = 0.0;
        form.total_area = 0.0;
        form.covered_area = 0.0;
        form.rooms = 0;
        form.bedrooms = 0;
        form.bathrooms = 0;
        form.garages = 0;
        form.age = 0;
        form.floors = 0;
        form.apartments_per_floor = 0;
        form.listing_age = 0;

        let record = assemble_record(&form, &ready_session()).expect("zeros are non-negative");
        assert_eq!(record.operation_amount, 0.0);
        assert_eq!(record.rooms, 0);
    }
}
