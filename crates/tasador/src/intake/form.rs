use serde::{Deserialize, Serialize};

use crate::catalog::CategoryName;

/// Raw property submission exactly as the entry surface captured it.
///
/// Counts are signed and everything else is free text or a plain float; the
/// assembly step owns turning this into a canonical record or rejecting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyForm {
    pub id: String,
    pub name: String,
    pub operation_type: String,
    pub operation_currency: String,
    pub operation_amount: f64,
    pub expenses_currency: String,
    pub expenses_amount: f64,
    pub total_area: f64,
    pub covered_area: f64,
    pub rooms: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub garages: i64,
    pub age: i64,
    pub floors: i64,
    pub apartments_per_floor: i64,
    pub listing_age: i64,
    pub publisher_id: String,
    pub publisher_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    pub url: String,
}

/// Every validated form field, named for violation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    OperationType,
    OperationCurrency,
    ExpensesCurrency,
    City,
    State,
    Country,
    OperationAmount,
    ExpensesAmount,
    TotalArea,
    CoveredArea,
    Rooms,
    Bedrooms,
    Bathrooms,
    Garages,
    Age,
    Floors,
    ApartmentsPerFloor,
    ListingAge,
}

impl FormField {
    pub const fn label(self) -> &'static str {
        match self {
            FormField::OperationType => "operation_type",
            FormField::OperationCurrency => "operation_currency",
            FormField::ExpensesCurrency => "expenses_currency",
            FormField::City => "city",
            FormField::State => "state",
            FormField::Country => "country",
            FormField::OperationAmount => "operation_amount",
            FormField::ExpensesAmount => "expenses_amount",
            FormField::TotalArea => "total_area",
            FormField::CoveredArea => "covered_area",
            FormField::Rooms => "rooms",
            FormField::Bedrooms => "bedrooms",
            FormField::Bathrooms => "bathrooms",
            FormField::Garages => "garages",
            FormField::Age => "age",
            FormField::Floors => "floors",
            FormField::ApartmentsPerFloor => "apartments_per_floor",
            FormField::ListingAge => "listing_age",
        }
    }

    /// The catalog domain constraining this field, for the six enumerated ones.
    pub const fn category(self) -> Option<CategoryName> {
        match self {
            FormField::OperationType => Some(CategoryName::OperationType),
            FormField::OperationCurrency | FormField::ExpensesCurrency => {
                Some(CategoryName::Currency)
            }
            FormField::City => Some(CategoryName::City),
            FormField::State => Some(CategoryName::State),
            FormField::Country => Some(CategoryName::Country),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
