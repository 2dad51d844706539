use serde::{Deserialize, Serialize};

use foodorder_core::{Entity, Money, ProductId};

/// A product as referenced by an order line or listed in a restaurant catalog.
///
/// Order intake only knows the product id; name and price become *confirmed*
/// once they have been copied from the restaurant catalog. Equality is by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: Option<String>,
    price: Option<Money>,
}

impl Product {
    /// Product reference with nothing confirmed yet.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            price: None,
        }
    }

    /// Catalog entry with authoritative name and price.
    pub fn with_details(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: Some(name.into()),
            price: Some(price),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price(&self) -> Option<Money> {
        self.price
    }

    pub fn is_confirmed(&self) -> bool {
        self.name.is_some() && self.price.is_some()
    }

    /// Overwrite name and price with the catalog's current values.
    pub(crate) fn confirm_from(&mut self, catalog: &Product) {
        self.name = catalog.name.clone();
        self.price = catalog.price;
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}
