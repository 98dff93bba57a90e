use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of enumeration domains the catalog publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryName {
    Currency,
    OperationType,
    Country,
    State,
    City,
}

impl CategoryName {
    pub const fn ordered() -> [CategoryName; 5] {
        [
            CategoryName::Currency,
            CategoryName::OperationType,
            CategoryName::Country,
            CategoryName::State,
            CategoryName::City,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            CategoryName::Currency => "currency",
            CategoryName::OperationType => "operation_type",
            CategoryName::Country => "country",
            CategoryName::State => "state",
            CategoryName::City => "city",
        }
    }

    /// Path the catalog service publishes this category under.
    pub const fn route(self) -> &'static str {
        match self {
            CategoryName::Currency => "/currencies",
            CategoryName::OperationType => "/operationtypes",
            CategoryName::Country => "/countries",
            CategoryName::State => "/states",
            CategoryName::City => "/cities",
        }
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryName {
    type Err = CatalogError;

    /// Accepts the category label or the endpoint spelling of it.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "currency" | "currencies" => Ok(CategoryName::Currency),
            "operation_type" | "operationtypes" => Ok(CategoryName::OperationType),
            "country" | "countries" => Ok(CategoryName::Country),
            "state" | "states" => Ok(CategoryName::State),
            "city" | "cities" => Ok(CategoryName::City),
            _ => Err(CatalogError::UnknownCategory {
                name: value.to_string(),
            }),
        }
    }
}

/// A named enumeration domain: the ordered, duplicate-free values one form
/// field may legally take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: CategoryName,
    values: Vec<String>,
}

impl Category {
    pub fn new(name: CategoryName, values: Vec<String>) -> Result<Self, CatalogError> {
        if values.is_empty() {
            return Err(CatalogError::EmptyCategory { category: name });
        }

        for (index, value) in values.iter().enumerate() {
            if values[..index].contains(value) {
                return Err(CatalogError::DuplicateValue {
                    category: name,
                    value: value.clone(),
                });
            }
        }

        Ok(Self { name, values })
    }

    /// Constructor for compiled-in data sets whose invariants are asserted by tests.
    pub(crate) fn preloaded(name: CategoryName, values: &[&str]) -> Self {
        Self {
            name,
            values: values.iter().map(|value| value.to_string()).collect(),
        }
    }

    pub fn name(&self) -> CategoryName {
        self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|entry| entry == value)
    }
}

/// Failures raised while defining or looking up catalog data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown catalog category '{name}'")]
    UnknownCategory { name: String },
    #[error("category '{category}' must publish at least one value")]
    EmptyCategory { category: CategoryName },
    #[error("category '{category}' lists '{value}' more than once")]
    DuplicateValue { category: CategoryName, value: String },
    #[error("category '{category}' supplied more than once")]
    DuplicateCategory { category: CategoryName },
    #[error("category '{category}' missing from the supplied data set")]
    MissingCategory { category: CategoryName },
}
