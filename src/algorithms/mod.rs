pub mod shipping_quote;

// Common quoting trait
use crate::error::Result;
use crate::models::{list_shipping_methods, MethodInfo, Quote, ShipmentRequest};

/// Trait for anything that can price a shipment
pub trait QuoteEngine {
    /// Price a shipment, falling back to defaults for anything unrecognised
    fn quote(&self, request: &ShipmentRequest) -> Quote;

    /// Price a shipment, rejecting negative or non-finite weights and
    /// unknown method ids
    fn try_quote(&self, request: &ShipmentRequest) -> Result<Quote>;

    /// Methods this engine can price
    fn methods(&self) -> Vec<MethodInfo> {
        list_shipping_methods()
    }
}
