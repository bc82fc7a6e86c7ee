//! Delivery address and pickup point types.

use crate::ids::{AddressId, PickupPointId};
use serde::{Deserialize, Serialize};

/// A postal delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// Address ID (None for unsaved addresses).
    pub id: Option<AddressId>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Company name (B2B deliveries).
    pub company: Option<String>,
    /// Address line 1.
    pub line1: String,
    /// Address line 2 (apt, building, etc.).
    pub line2: Option<String>,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Country code (e.g., "FR").
    pub country_code: String,
    /// Phone number.
    pub phone: Option<String>,
}

impl Address {
    /// Create a new address.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        line1: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: None,
            line1: line1.into(),
            line2: None,
            postal_code: postal_code.into(),
            city: city.into(),
            country: country.into(),
            country_code: country_code.into(),
            phone: None,
        }
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.line1.clone()];
        if let Some(ref line2) = self.line2 {
            parts.push(line2.clone());
        }
        parts.push(format!("{} {}", self.postal_code, self.city));
        parts.push(self.country_code.clone());
        parts.join(", ")
    }

    /// Check if the address has all required fields.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.line1.is_empty()
            && !self.postal_code.is_empty()
            && !self.city.is_empty()
            && !self.country_code.is_empty()
    }
}

/// A carrier pickup point (point relais).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupPoint {
    /// Unique pickup point identifier.
    pub id: PickupPointId,
    /// Display name.
    pub name: String,
    /// Street address line.
    pub line1: String,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// Carrier operating this point.
    pub carrier: Option<String>,
    /// Opening hours, free-form.
    pub opening_hours: Option<String>,
}

impl PickupPoint {
    /// Create a new pickup point.
    pub fn new(
        id: PickupPointId,
        name: impl Into<String>,
        line1: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            line1: line1.into(),
            postal_code: postal_code.into(),
            city: city.into(),
            carrier: None,
            opening_hours: None,
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.name, self.line1, self.postal_code, self.city
        )
    }
}
