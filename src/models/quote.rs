// Quote and shipment request models

use crate::models::{Cost, Days, Kilograms, Kilometres, Location, ShippingMethod, WeightBracket};
use serde::{Deserialize, Serialize};

/// Priced shipment with an estimated delivery time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Final cost in whole currency units, never below the minimum charge
    pub cost: Cost,

    /// Distance used for pricing
    pub distance_km: Kilometres,

    /// Method actually priced (after fallback)
    pub method: ShippingMethod,

    /// Delivery estimate, never below the method's floor
    pub estimated_days: Days,

    pub weight_bracket: WeightBracket,
}

/// Input for one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    pub origin: Location,
    pub destination: Location,
    pub weight: Kilograms,

    /// Raw method id; `None` means the caller did not pick one
    #[serde(default)]
    pub method: Option<String>,
}

impl ShipmentRequest {
    /// Creates a request without a method
    pub fn new<O: Into<Location>, D: Into<Location>>(origin: O, destination: D, weight: Kilograms) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
            method: None,
        }
    }

    /// Sets the raw method id
    pub fn with_method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = Some(method.into());
        self
    }
}
