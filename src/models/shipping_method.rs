// Shipping method model and the static method catalog

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery speed tier offered at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    Priority,
}

impl ShippingMethod {
    /// All methods in catalog order
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Standard,
        ShippingMethod::Express,
        ShippingMethod::Priority,
    ];

    /// Wire id of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Priority => "priority",
        }
    }

    /// Lenient resolution: an omitted or unrecognised id falls back to `Standard`
    pub fn resolve(method: Option<&str>) -> Self {
        method
            .and_then(|id| id.parse().ok())
            .unwrap_or(ShippingMethod::Standard)
    }

    /// Strict resolution: omitted means `Standard`, anything present must be a known id
    pub fn resolve_strict(method: Option<&str>) -> Result<Self, ValidationError> {
        match method {
            None => Ok(ShippingMethod::Standard),
            Some(id) => id.parse(),
        }
    }

    /// Catalog entry shown to buyers
    pub fn info(&self) -> MethodInfo {
        match self {
            ShippingMethod::Standard => MethodInfo {
                id: "standard",
                name: "Standard Shipping",
                description: "7-10 business days",
                icon: "🚚",
            },
            ShippingMethod::Express => MethodInfo {
                id: "express",
                name: "Express Shipping",
                description: "4-6 business days",
                icon: "⚡",
            },
            ShippingMethod::Priority => MethodInfo {
                id: "priority",
                name: "Priority Shipping",
                description: "2-3 business days",
                icon: "🏃",
            },
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            "priority" => Ok(ShippingMethod::Priority),
            other => Err(ValidationError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipping method as listed in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The fixed catalog: standard, express, priority
pub fn list_shipping_methods() -> Vec<MethodInfo> {
    ShippingMethod::ALL.iter().map(ShippingMethod::info).collect()
}
