use super::domain::{CatalogError, Category, CategoryName};

const CURRENCIES: [&str; 2] = ["USD", "$"];

const OPERATION_TYPES: [&str; 2] = ["Venta", "En Pozo"];

const COUNTRIES: [&str; 1] = ["Argentina"];

const STATES: [&str; 1] = ["Capital Federal"];

const CITIES: [&str; 57] = [
    "Belgrano",
    "Recoleta",
    "Parque Chacabuco",
    "Monserrat",
    "Palermo",
    "Retiro",
    "Villa Crespo",
    "Barrio Norte",
    "Flores",
    "Caballito",
    "Núñez",
    "Boedo",
    "Floresta",
    "Balvanera",
    "Villa Urquiza",
    "Almagro",
    "Colegiales",
    "Liniers",
    "Chacarita",
    "Centro / Microcentro",
    "Barracas",
    "Once",
    "Congreso",
    "Villa del Parque",
    "San Cristobal",
    "Versalles",
    "San Telmo",
    "La Paternal",
    "La Boca",
    "Parque Centenario",
    "Constitución",
    "Villa General Mitre",
    "Villa Devoto",
    "Abasto",
    "Saavedra",
    "Mataderos",
    "Coghlan",
    "Villa Ortuzar",
    "Monte Castro",
    "Parque Patricios",
    "San Nicolás",
    "Tribunales",
    "Villa Pueyrredón",
    "Villa Luro",
    "Villa Lugano",
    "Otro",
    "Puerto Madero",
    "Catalinas",
    "Velez Sarsfield",
    "Villa Santa Rita",
    "Parque Chas",
    "Pompeya",
    "Parque Avellaneda",
    "Agronomía",
    "Villa Real",
    "Villa Soldati",
    "Villa Riachuelo",
];

/// Authoritative, read-only source of every published category.
///
/// All five categories are present by construction, so keyed access never
/// fails once a store exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    currencies: Category,
    operation_types: Category,
    countries: Category,
    states: Category,
    cities: Category,
}

impl CatalogStore {
    /// The compiled-in Buenos Aires data set served by the deployed catalog.
    pub fn standard() -> Self {
        Self {
            currencies: Category::preloaded(CategoryName::Currency, &CURRENCIES),
            operation_types: Category::preloaded(CategoryName::OperationType, &OPERATION_TYPES),
            countries: Category::preloaded(CategoryName::Country, &COUNTRIES),
            states: Category::preloaded(CategoryName::State, &STATES),
            cities: Category::preloaded(CategoryName::City, &CITIES),
        }
    }

    /// Build a store from caller-supplied categories, enforcing that each of
    /// the five domains appears exactly once.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut slots: [Option<Category>; 5] = [None, None, None, None, None];

        for category in categories {
            let index = category.name() as usize;
            if slots[index].is_some() {
                return Err(CatalogError::DuplicateCategory {
                    category: category.name(),
                });
            }
            slots[index] = Some(category);
        }

        let mut take = |name: CategoryName| {
            slots[name as usize]
                .take()
                .ok_or(CatalogError::MissingCategory { category: name })
        };

        Ok(Self {
            currencies: take(CategoryName::Currency)?,
            operation_types: take(CategoryName::OperationType)?,
            countries: take(CategoryName::Country)?,
            states: take(CategoryName::State)?,
            cities: take(CategoryName::City)?,
        })
    }

    pub fn category(&self, name: CategoryName) -> &Category {
        match name {
            CategoryName::Currency => &self.currencies,
            CategoryName::OperationType => &self.operation_types,
            CategoryName::Country => &self.countries,
            CategoryName::State => &self.states,
            CategoryName::City => &self.cities,
        }
    }

    /// String-keyed lookup used by callers that take category names as input.
    pub fn get(&self, name: &str) -> Result<&Category, CatalogError> {
        let parsed = name.parse::<CategoryName>()?;
        Ok(self.category(parsed))
    }

    pub fn values(&self, name: CategoryName) -> &[String] {
        self.category(name).values()
    }
}
