//! Rate card: every constant the quote engine prices with.
//!
//! `RateCard::default()` is the built-in card. A JSON file with the same
//! (camelCase) shape can replace any part of it; omitted fields keep their
//! defaults.

use crate::error::{QuoteError, Result};
use crate::models::{Cost, Days, Kilograms, Kilometres, ShippingMethod, WeightBracket};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-method pricing and delivery rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRate {
    /// Currency units per km
    pub rate_per_km: f64,

    /// Kilometres covered per delivery day
    pub day_divisor_km: Kilometres,

    /// Minimum number of delivery days
    pub min_days: Days,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MethodRates {
    pub standard: MethodRate,
    pub express: MethodRate,
    pub priority: MethodRate,
}

impl Default for MethodRates {
    fn default() -> Self {
        Self {
            standard: MethodRate {
                rate_per_km: 0.1,
                day_divisor_km: 400,
                min_days: 3,
            },
            express: MethodRate {
                rate_per_km: 0.2,
                day_divisor_km: 600,
                min_days: 2,
            },
            priority: MethodRate {
                rate_per_km: 0.3,
                day_divisor_km: 1000,
                min_days: 1,
            },
        }
    }
}

impl MethodRates {
    pub fn get(&self, method: ShippingMethod) -> &MethodRate {
        match method {
            ShippingMethod::Standard => &self.standard,
            ShippingMethod::Express => &self.express,
            ShippingMethod::Priority => &self.priority,
        }
    }
}

/// Weight thresholds and the cost factor of each bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeightFactors {
    pub medium_from_kg: Kilograms,
    pub heavy_from_kg: Kilograms,
    pub light: f64,
    pub medium: f64,
    pub heavy: f64,
}

impl Default for WeightFactors {
    fn default() -> Self {
        Self {
            medium_from_kg: crate::models::MEDIUM_THRESHOLD_KG,
            heavy_from_kg: crate::models::HEAVY_THRESHOLD_KG,
            light: 0.2,
            medium: 0.4,
            heavy: 0.6,
        }
    }
}

impl WeightFactors {
    pub fn bracket(&self, weight: Kilograms) -> WeightBracket {
        WeightBracket::classify_with(weight, self.medium_from_kg, self.heavy_from_kg)
    }

    pub fn factor(&self, bracket: WeightBracket) -> f64 {
        match bracket {
            WeightBracket::Light => self.light,
            WeightBracket::Medium => self.medium,
            WeightBracket::Heavy => self.heavy,
        }
    }
}

/// One entry of the region distance table, stored in one direction only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDistance {
    pub from: String,
    pub to: String,
    pub km: Kilometres,
}

impl RegionDistance {
    pub fn new(from: &str, to: &str, km: Kilometres) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            km,
        }
    }
}

/// Complete pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateCard {
    pub minimum_charge: Cost,

    /// Distance used when origin and destination share a region
    pub intra_region_km: Kilometres,

    /// Distance used for region pairs missing from the table
    pub inter_region_default_km: Kilometres,

    pub methods: MethodRates,
    pub weight: WeightFactors,
    pub distances: Vec<RegionDistance>,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            minimum_charge: 50,
            intra_region_km: 100,
            inter_region_default_km: 1000,
            methods: MethodRates::default(),
            weight: WeightFactors::default(),
            distances: vec![
                RegionDistance::new("Delhi", "Punjab", 500),
                RegionDistance::new("Delhi", "Maharashtra", 1500),
                RegionDistance::new("Delhi", "Bangalore", 2000),
                RegionDistance::new("Punjab", "Maharashtra", 1700),
                RegionDistance::new("Punjab", "Bangalore", 2200),
                RegionDistance::new("Maharashtra", "Bangalore", 800),
            ],
        }
    }
}

impl RateCard {
    /// Checks the card for values the engine cannot price with
    pub fn validate(&self) -> Result<()> {
        if self.intra_region_km == 0 || self.inter_region_default_km == 0 {
            return Err(QuoteError::Config(
                "fallback distances must be positive".to_string(),
            ));
        }

        for method in ShippingMethod::ALL {
            let rate = self.methods.get(method);
            if !rate.rate_per_km.is_finite() || rate.rate_per_km < 0.0 {
                return Err(QuoteError::Config(format!(
                    "{} rate must be a non-negative number",
                    method
                )));
            }
            if rate.day_divisor_km == 0 {
                return Err(QuoteError::Config(format!(
                    "{} day divisor must be positive",
                    method
                )));
            }
        }

        let w = &self.weight;
        for factor in [w.light, w.medium, w.heavy] {
            if !factor.is_finite() || factor < 0.0 {
                return Err(QuoteError::Config(
                    "weight factors must be non-negative numbers".to_string(),
                ));
            }
        }
        if w.medium_from_kg.partial_cmp(&w.heavy_from_kg) != Some(Ordering::Less) {
            return Err(QuoteError::Config(format!(
                "medium threshold {} must be below heavy threshold {}",
                w.medium_from_kg, w.heavy_from_kg
            )));
        }

        for entry in &self.distances {
            if entry.km == 0 {
                return Err(QuoteError::Config(format!(
                    "distance {}-{} must be positive",
                    entry.from, entry.to
                )));
            }
            if entry.from == entry.to {
                return Err(QuoteError::Config(format!(
                    "distance entry {}-{} links a region to itself",
                    entry.from, entry.to
                )));
            }
        }

        Ok(())
    }
}
