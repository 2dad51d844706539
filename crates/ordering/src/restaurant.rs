use std::collections::HashMap;

use foodorder_core::{Entity, ProductId, RestaurantId};

use crate::product::Product;

/// Read-only snapshot of a restaurant as currently known: its activity flag and
/// the catalog whose names and prices are authoritative for confirmation.
///
/// Supplied fresh by the caller for each validation; never mutated here.
#[derive(Debug, Clone)]
pub struct Restaurant {
    id: RestaurantId,
    active: bool,
    products: HashMap<ProductId, Product>,
}

impl Restaurant {
    /// Build a snapshot. The catalog is unique by product id; when the same id
    /// is listed twice the later entry wins.
    pub fn new(
        id: RestaurantId,
        active: bool,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id_typed(), product))
            .collect();

        Self { id, active, products }
    }

    pub fn id_typed(&self) -> RestaurantId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

impl Entity for Restaurant {
    type Id = RestaurantId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}
