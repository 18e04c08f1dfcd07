use crate::domain::money::Cents;
use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A coin denomination accepted by the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Display label, e.g. "25c" or "$2".
    pub label: String,
    /// Face value in minor units. Strictly positive.
    pub value: Cents,
}

/// A product offered by the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Price in minor units.
    pub price: Cents,
}

/// The machine's fixed denomination and price tables, keyed by the string
/// keys carried in input events.
///
/// Both tables are immutable after construction. `new` enforces the catalog
/// invariants: every denomination value is positive and all values are
/// distinct (the greedy change pass relies on a well-formed table).
#[derive(Debug, Clone)]
pub struct Catalog {
    denominations: HashMap<String, Denomination>,
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn new(
        denominations: HashMap<String, Denomination>,
        products: HashMap<String, Product>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for (key, denomination) in &denominations {
            if denomination.value.is_zero() {
                return Err(VendingError::InvalidCatalog(format!(
                    "denomination {key} has zero value"
                )));
            }
            if !seen.insert(denomination.value) {
                return Err(VendingError::InvalidCatalog(format!(
                    "duplicate denomination value {}",
                    denomination.value
                )));
            }
        }
        Ok(Self {
            denominations,
            products,
        })
    }

    /// The production table: Canadian coinage and the five stocked products.
    pub fn standard() -> Result<Self> {
        let denominations = [
            ("nickel", "5c", 5),
            ("dime", "10c", 10),
            ("quarter", "25c", 25),
            ("loonie", "$1", 100),
            ("toonie", "$2", 200),
        ]
        .into_iter()
        .map(|(key, label, value)| {
            (
                key.to_string(),
                Denomination {
                    label: label.to_string(),
                    value: Cents::new(value),
                },
            )
        })
        .collect();

        let products = [
            ("p0", "KitKat", 125),
            ("p1", "Chips", 175),
            ("p2", "Coke", 150),
            ("p3", "Gum", 50),
            ("p4", "Candy", 100),
        ]
        .into_iter()
        .map(|(key, name, price)| {
            (
                key.to_string(),
                Product {
                    name: name.to_string(),
                    price: Cents::new(price),
                },
            )
        })
        .collect();

        Self::new(denominations, products)
    }

    pub fn denomination(&self, key: &str) -> Result<&Denomination> {
        self.denominations
            .get(key)
            .ok_or_else(|| VendingError::UnknownDenomination(key.to_string()))
    }

    pub fn product(&self, key: &str) -> Result<&Product> {
        self.products
            .get(key)
            .ok_or_else(|| VendingError::UnknownProduct(key.to_string()))
    }

    /// Denominations sorted by face value, largest first. Computed once by the
    /// controller at construction and reused for every change pass.
    pub fn denominations_desc(&self) -> Vec<Denomination> {
        let mut coins: Vec<Denomination> = self.denominations.values().cloned().collect();
        coins.sort_by(|a, b| b.value.cmp(&a.value));
        coins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_lookups() {
        let catalog = Catalog::standard().unwrap();

        let quarter = catalog.denomination("quarter").unwrap();
        assert_eq!(quarter.value, Cents::new(25));
        assert_eq!(quarter.label, "25c");

        let coke = catalog.product("p2").unwrap();
        assert_eq!(coke.name, "Coke");
        assert_eq!(coke.price, Cents::new(150));
    }

    #[test]
    fn test_unknown_keys() {
        let catalog = Catalog::standard().unwrap();
        assert!(matches!(
            catalog.denomination("peso"),
            Err(VendingError::UnknownDenomination(_))
        ));
        assert!(matches!(
            catalog.product("p9"),
            Err(VendingError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_denominations_desc_order() {
        let catalog = Catalog::standard().unwrap();
        let values: Vec<u32> = catalog
            .denominations_desc()
            .iter()
            .map(|d| d.value.value())
            .collect();
        assert_eq!(values, vec![200, 100, 25, 10, 5]);
    }

    #[test]
    fn test_rejects_zero_value_denomination() {
        let denominations = HashMap::from([(
            "slug".to_string(),
            Denomination {
                label: "0c".to_string(),
                value: Cents::ZERO,
            },
        )]);
        let result = Catalog::new(denominations, HashMap::new());
        assert!(matches!(result, Err(VendingError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_duplicate_denomination_values() {
        let denominations = HashMap::from([
            (
                "nickel".to_string(),
                Denomination {
                    label: "5c".to_string(),
                    value: Cents::new(5),
                },
            ),
            (
                "shiny_nickel".to_string(),
                Denomination {
                    label: "5c".to_string(),
                    value: Cents::new(5),
                },
            ),
        ]);
        let result = Catalog::new(denominations, HashMap::new());
        assert!(matches!(result, Err(VendingError::InvalidCatalog(_))));
    }
}
