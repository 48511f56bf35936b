// Weight bracket derived from a shipment's weight

use crate::models::Kilograms;
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the medium bracket, in kg
pub const MEDIUM_THRESHOLD_KG: Kilograms = 5.0;

/// Lower bound (inclusive) of the heavy bracket, in kg
pub const HEAVY_THRESHOLD_KG: Kilograms = 20.0;

/// Coarse weight class used to scale shipping cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightBracket {
    Light,
    Medium,
    Heavy,
}

impl WeightBracket {
    /// Classifies with the default 5 kg / 20 kg thresholds
    pub fn classify(weight: Kilograms) -> Self {
        Self::classify_with(weight, MEDIUM_THRESHOLD_KG, HEAVY_THRESHOLD_KG)
    }

    /// Classifies with explicit thresholds. NaN never reaches a threshold and
    /// lands in `Light`.
    pub fn classify_with(weight: Kilograms, medium_from: Kilograms, heavy_from: Kilograms) -> Self {
        if weight >= heavy_from {
            WeightBracket::Heavy
        } else if weight >= medium_from {
            WeightBracket::Medium
        } else {
            WeightBracket::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightBracket::Light => "light",
            WeightBracket::Medium => "medium",
            WeightBracket::Heavy => "heavy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(WeightBracket::classify(0.0), WeightBracket::Light);
        assert_eq!(WeightBracket::classify(4.99), WeightBracket::Light);
        assert_eq!(WeightBracket::classify(5.0), WeightBracket::Medium);
        assert_eq!(WeightBracket::classify(19.99), WeightBracket::Medium);
        assert_eq!(WeightBracket::classify(20.0), WeightBracket::Heavy);
        assert_eq!(WeightBracket::classify(250.0), WeightBracket::Heavy);
    }

    #[test]
    fn test_nan_is_light() {
        assert_eq!(WeightBracket::classify(f64::NAN), WeightBracket::Light);
    }

    #[test]
    fn test_brackets_are_ordered() {
        assert!(WeightBracket::Light < WeightBracket::Medium);
        assert!(WeightBracket::Medium < WeightBracket::Heavy);
    }
}
