use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodorder_core::ValueObject;

/// Delivery address.
///
/// Carries a storage id for the persistence collaborator, but compares by
/// street, postal code and city only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetAddress {
    id: Uuid,
    street: String,
    postal_code: String,
    city: String,
}

impl StreetAddress {
    pub fn new(
        id: Uuid,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl PartialEq for StreetAddress {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street
            && self.postal_code == other.postal_code
            && self.city == other.city
    }
}

impl Eq for StreetAddress {}

impl ValueObject for StreetAddress {}
