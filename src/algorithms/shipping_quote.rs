use std::sync::OnceLock;

use rayon::prelude::*;
use tracing::debug;

use crate::algorithms::QuoteEngine;
use crate::config::RateCard;
use crate::error::{Result, ValidationError};
use crate::models::{
    region_token, Cost, Kilograms, Kilometres, MethodInfo, Quote, ShipmentRequest,
    ShippingMethod,
};
use crate::utils::delivery::estimate_days;
use crate::utils::region_graph::RegionGraph;

/// Where a quote's distance came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceSource {
    /// The region pair is listed in the distance table (either order)
    Table,
    /// Origin and destination share a region token
    IntraRegion,
    /// Unlisted pair of different regions
    InterRegionDefault,
}

/// Deterministic shipping quote engine over a rate card
#[derive(Debug, Clone)]
pub struct ShippingQuoteEngine {
    rate_card: RateCard,

    /// Distance table as a region network
    regions: RegionGraph,
}

impl Default for ShippingQuoteEngine {
    fn default() -> Self {
        Self::new(RateCard::default())
    }
}

impl ShippingQuoteEngine {
    /// Engine over a rate card that has already passed `RateCard::validate`
    fn new(rate_card: RateCard) -> Self {
        let regions = RegionGraph::new(&rate_card.distances);
        Self { rate_card, regions }
    }

    /// Creates an engine after checking the rate card; the only constructor
    /// for custom cards
    pub fn try_new(rate_card: RateCard) -> Result<Self> {
        rate_card.validate()?;
        Ok(Self::new(rate_card))
    }

    pub fn rate_card(&self) -> &RateCard {
        &self.rate_card
    }

    /// Distance between two region tokens and the rule that produced it
    pub fn resolve_distance(&self, from_region: &str, to_region: &str) -> (Kilometres, DistanceSource) {
        if let Some(km) = self.regions.distance_between(from_region, to_region) {
            (km, DistanceSource::Table)
        } else if from_region == to_region {
            (self.rate_card.intra_region_km, DistanceSource::IntraRegion)
        } else {
            (
                self.rate_card.inter_region_default_km,
                DistanceSource::InterRegionDefault,
            )
        }
    }

    /// Lenient quote: never fails. Unknown or omitted methods price as
    /// standard and negative weights are treated as zero.
    pub fn calculate_shipping(
        &self,
        origin: &str,
        destination: &str,
        weight: Kilograms,
        method: Option<&str>,
    ) -> Quote {
        let method = ShippingMethod::resolve(method);
        self.price(origin, destination, weight.max(0.0), method)
    }

    /// Strict quote: rejects negative or non-finite weight and any method id
    /// that is present but unknown (the empty string included)
    pub fn try_calculate_shipping(
        &self,
        origin: &str,
        destination: &str,
        weight: Kilograms,
        method: Option<&str>,
    ) -> Result<Quote> {
        if !weight.is_finite() {
            return Err(ValidationError::NonFiniteWeight.into());
        }
        if weight < 0.0 {
            return Err(ValidationError::NegativeWeight(weight).into());
        }
        let method = ShippingMethod::resolve_strict(method)?;
        Ok(self.price(origin, destination, weight, method))
    }

    /// Quote many shipments in parallel; output order follows input order
    pub fn quote_batch(&self, requests: &[ShipmentRequest]) -> Vec<Quote> {
        requests
            .par_iter()
            .map(|request| self.quote(request))
            .collect()
    }

    /// Strict batch quoting; the first invalid request fails the batch
    pub fn try_quote_batch(&self, requests: &[ShipmentRequest]) -> Result<Vec<Quote>> {
        requests
            .par_iter()
            .map(|request| self.try_quote(request))
            .collect()
    }

    fn price(&self, origin: &str, destination: &str, weight: Kilograms, method: ShippingMethod) -> Quote {
        let from_region = region_token(origin);
        let to_region = region_token(destination);
        let (distance_km, source) = self.resolve_distance(from_region, to_region);

        let weight_bracket = self.rate_card.weight.bracket(weight);
        let rule = self.rate_card.methods.get(method);
        let raw_cost =
            distance_km as f64 * rule.rate_per_km * self.rate_card.weight.factor(weight_bracket);
        let cost = (raw_cost.round() as Cost).max(self.rate_card.minimum_charge);
        let estimated_days = estimate_days(distance_km, rule);

        debug!(
            from_region,
            to_region,
            ?source,
            distance_km,
            %method,
            bracket = weight_bracket.as_str(),
            raw_cost,
            cost,
            estimated_days,
            "Shipping quoted"
        );

        Quote {
            cost,
            distance_km,
            method,
            estimated_days,
            weight_bracket,
        }
    }
}

impl QuoteEngine for ShippingQuoteEngine {
    fn quote(&self, request: &ShipmentRequest) -> Quote {
        self.calculate_shipping(
            request.origin.as_str(),
            request.destination.as_str(),
            request.weight,
            request.method.as_deref(),
        )
    }

    fn try_quote(&self, request: &ShipmentRequest) -> Result<Quote> {
        self.try_calculate_shipping(
            request.origin.as_str(),
            request.destination.as_str(),
            request.weight,
            request.method.as_deref(),
        )
    }
}

fn default_engine() -> &'static ShippingQuoteEngine {
    static ENGINE: OnceLock<ShippingQuoteEngine> = OnceLock::new();
    ENGINE.get_or_init(ShippingQuoteEngine::default)
}

/// Lenient quote against the built-in rate card
pub fn calculate_shipping(origin: &str, destination: &str, weight: Kilograms, method: Option<&str>) -> Quote {
    default_engine().calculate_shipping(origin, destination, weight, method)
}

/// The fixed shipping method catalog
pub fn list_shipping_methods() -> Vec<MethodInfo> {
    default_engine().methods()
}
