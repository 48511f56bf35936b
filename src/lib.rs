// Public modules
pub mod algorithms;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

// Re-exports for convenience
pub use algorithms::shipping_quote::{calculate_shipping, list_shipping_methods, ShippingQuoteEngine};
pub use algorithms::QuoteEngine;
pub use config::RateCard;
pub use error::{QuoteError, Result, ValidationError};
pub use models::{Location, MethodInfo, Quote, ShipmentRequest, ShippingMethod, WeightBracket};
