use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::RateCard;
use crate::error::Result;

/// Load and validate a JSON rate card
pub fn load_rate_card<P: AsRef<Path>>(path: P) -> Result<RateCard> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading rate card");

    let json_str = fs::read_to_string(path)?;
    let card: RateCard = serde_json::from_str(&json_str)?;
    card.validate()?;

    info!(
        regions = card.distances.len(),
        minimum_charge = card.minimum_charge,
        "Rate card loaded"
    );
    Ok(card)
}

/// Load a rate card if the file exists, otherwise use the built-in card.
/// A file that exists but is unreadable or invalid is still an error.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<RateCard> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(path = %path.display(), "Rate card not found, using built-in rates");
        return Ok(RateCard::default());
    }
    load_rate_card(path)
}

/// Write a rate card as pretty JSON
pub fn save_rate_card<P: AsRef<Path>>(card: &RateCard, path: P) -> Result<()> {
    let json_str = serde_json::to_string_pretty(card)?;
    fs::write(path.as_ref(), json_str)?;
    info!(path = %path.as_ref().display(), "Rate card saved");
    Ok(())
}
