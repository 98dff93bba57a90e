use std::collections::BTreeMap;

use super::domain::CategoryName;
use super::store::CatalogStore;

/// Read-only copy of the catalog held for the lifetime of one form session.
///
/// A category that could not be fetched is represented by an empty value set,
/// never by a missing entry, so lookups stay total while the session runs
/// degraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSession {
    values: BTreeMap<CategoryName, Vec<String>>,
}

impl CatalogSession {
    /// Session with every category empty, as used when bootstrap never ran.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_parts(
        currencies: Vec<String>,
        operation_types: Vec<String>,
        countries: Vec<String>,
        states: Vec<String>,
        cities: Vec<String>,
    ) -> Self {
        let mut values = BTreeMap::new();
        values.insert(CategoryName::Currency, currencies);
        values.insert(CategoryName::OperationType, operation_types);
        values.insert(CategoryName::Country, countries);
        values.insert(CategoryName::State, states);
        values.insert(CategoryName::City, cities);
        Self { values }
    }

    /// Snapshot a store directly, bypassing the HTTP boundary.
    pub fn from_store(store: &CatalogStore) -> Self {
        let mut values = BTreeMap::new();
        for name in CategoryName::ordered() {
            values.insert(name, store.values(name).to_vec());
        }
        Self { values }
    }

    pub fn values(&self, category: CategoryName) -> &[String] {
        self.values
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, category: CategoryName, value: &str) -> bool {
        self.values(category).iter().any(|entry| entry == value)
    }

    /// A category is ready once it offers at least one selectable value.
    pub fn is_ready(&self, category: CategoryName) -> bool {
        !self.values(category).is_empty()
    }

    /// Categories that fell back to an empty set during bootstrap.
    pub fn degraded(&self) -> Vec<CategoryName> {
        CategoryName::ordered()
            .into_iter()
            .filter(|category| !self.is_ready(*category))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.degraded().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_reports_every_category_degraded() {
        let session = CatalogSession::empty();
        assert_eq!(session.degraded(), CategoryName::ordered());
        assert!(!session.is_complete());
        assert!(session.values(CategoryName::City).is_empty());
        assert!(!session.contains(CategoryName::City, "Palermo"));
    }

    #[test]
    fn store_snapshot_is_complete_and_answers_membership() {
        let session = CatalogSession::from_store(&CatalogStore::standard());
        assert!(session.is_complete());
        assert!(session.contains(CategoryName::OperationType, "Venta"));
        assert!(!session.contains(CategoryName::OperationType, "Alquiler"));
        assert_eq!(session.values(CategoryName::Currency), ["USD", "$"]);
    }

    #[test]
    fn partially_fetched_session_names_only_the_missing_categories() {
        let session = CatalogSession::from_parts(
            vec!["USD".to_string()],
            Vec::new(),
            vec!["Argentina".to_string()],
            vec!["Capital Federal".to_string()],
            Vec::new(),
        );
        assert!(session.is_ready(CategoryName::Currency));
        assert_eq!(
            session.degraded(),
            [CategoryName::OperationType, CategoryName::City]
        );
    }
}
