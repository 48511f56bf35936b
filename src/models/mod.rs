// Models module - exports all model types

mod location;
mod quote;
mod shipping_method;
mod weight_bracket;

// Re-export model types
pub use self::location::{region_token, Location, UNKNOWN_REGION};
pub use self::quote::{Quote, ShipmentRequest};
pub use self::shipping_method::{list_shipping_methods, MethodInfo, ShippingMethod};
pub use self::weight_bracket::{WeightBracket, HEAVY_THRESHOLD_KG, MEDIUM_THRESHOLD_KG};

// Common type aliases for improved code readability
pub type Cost = u64;
pub type Kilometres = u32;
pub type Days = u32;
pub type Kilograms = f64;
