//! Checkout helpers: turn a cart line into a shipment, a quote and totals.

use serde::{Deserialize, Serialize};

use crate::algorithms::QuoteEngine;
use crate::error::Result;
use crate::models::{Cost, Days, Kilograms, Quote, ShipmentRequest, ShippingMethod};

/// Estimated weight of one unit sold by something other than the kilogram
pub const NON_KG_UNIT_WEIGHT: Kilograms = 0.5;

/// Shipment weight for a cart line. Products sold per kg weigh 1 kg per
/// unit, anything else (dozen, bunch, litre, ...) is estimated at 0.5 kg.
pub fn estimate_weight(quantity: u32, unit: &str) -> Kilograms {
    let per_unit = if unit == "kg" { 1.0 } else { NON_KG_UNIT_WEIGHT };
    quantity as f64 * per_unit
}

/// Shipping details stored with an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipping {
    pub method: ShippingMethod,
    pub cost: Cost,
    pub estimated_days: Days,
}

impl From<&Quote> for OrderShipping {
    fn from(quote: &Quote) -> Self {
        Self {
            method: quote.method,
            cost: quote.cost,
            estimated_days: quote.estimated_days,
        }
    }
}

/// One product line being bought
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product_location: &'a str,
    pub buyer_location: &'a str,
    pub unit_price: f64,
    pub quantity: u32,
    pub unit: &'a str,
}

/// Price breakdown shown before an order is placed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub shipping: OrderShipping,
    pub total: f64,
    pub weight_kg: Kilograms,
    pub quote: Quote,
}

impl CheckoutSummary {
    /// Lenient checkout: an unknown method is shipped as standard
    pub fn build<E: QuoteEngine + ?Sized>(engine: &E, line: &CartLine<'_>, method: Option<&str>) -> Self {
        let request = shipment_for(line, method);
        Self::from_quote(line, request.weight, engine.quote(&request))
    }

    /// Strict checkout: invalid method ids are refused
    pub fn try_build<E: QuoteEngine + ?Sized>(
        engine: &E,
        line: &CartLine<'_>,
        method: Option<&str>,
    ) -> Result<Self> {
        let request = shipment_for(line, method);
        let quote = engine.try_quote(&request)?;
        Ok(Self::from_quote(line, request.weight, quote))
    }

    fn from_quote(line: &CartLine<'_>, weight_kg: Kilograms, quote: Quote) -> Self {
        let subtotal = line.unit_price * line.quantity as f64;
        Self {
            subtotal,
            shipping: OrderShipping::from(&quote),
            total: subtotal + quote.cost as f64,
            weight_kg,
            quote,
        }
    }
}

fn shipment_for(line: &CartLine<'_>, method: Option<&str>) -> ShipmentRequest {
    ShipmentRequest {
        origin: line.product_location.into(),
        destination: line.buyer_location.into(),
        weight: estimate_weight(line.quantity, line.unit),
        method: method.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::shipping_quote::ShippingQuoteEngine;

    #[test]
    fn test_estimate_weight() {
        assert_eq!(estimate_weight(3, "kg"), 3.0);
        assert_eq!(estimate_weight(3, "dozen"), 1.5);
        assert_eq!(estimate_weight(0, "kg"), 0.0);
    }

    #[test]
    fn test_summary_totals() {
        let engine = ShippingQuoteEngine::default();
        let line = CartLine {
            product_location: "Amritsar, Punjab, India",
            buyer_location: "Bangalore",
            unit_price: 40.0,
            quantity: 25,
            unit: "kg",
        };

        let summary = CheckoutSummary::build(&engine, &line, Some("express"));
        // 2200 * 0.2 * 0.6 = 264
        assert_eq!(summary.weight_kg, 25.0);
        assert_eq!(summary.subtotal, 1000.0);
        assert_eq!(summary.shipping.cost, 264);
        assert_eq!(summary.shipping.estimated_days, 4);
        assert_eq!(summary.total, 1264.0);
    }

    #[test]
    fn test_strict_summary_refuses_unknown_method() {
        let engine = ShippingQuoteEngine::default();
        let line = CartLine {
            product_location: "Punjab, India",
            buyer_location: "New Delhi, India",
            unit_price: 10.0,
            quantity: 1,
            unit: "kg",
        };
        assert!(CheckoutSummary::try_build(&engine, &line, Some("overnight")).is_err());
    }
}
