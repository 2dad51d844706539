use serde::{Deserialize, Serialize};

use foodorder_core::{CustomerId, Entity};

/// Customer placing orders; the order refers to it by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
}

impl Customer {
    pub fn new(id: CustomerId) -> Self {
        Self { id }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}
