use farm_shipping::utils::rate_loader::load_or_default;
use farm_shipping::{QuoteEngine, ShipmentRequest, ShippingQuoteEngine};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const RATE_CARD_ENV: &str = "SHIPPING_RATE_CARD";
const DEFAULT_RATE_CARD: &str = "rate_card.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // load the rate card, falling back to built-in rates
    let path = env::var(RATE_CARD_ENV).unwrap_or_else(|_| DEFAULT_RATE_CARD.to_string());
    let engine = match load_or_default(&path).and_then(ShippingQuoteEngine::try_new) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error loading rate card: {}", e);
            eprintln!("Set {} to a valid JSON rate card or remove the file", RATE_CARD_ENV);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let requests = match parse_request(&args) {
        Ok(Some(request)) => vec![request],
        Ok(None) => sample_requests(),
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Usage: farm_shipping <origin> <destination> <weight-kg> [method]");
            return ExitCode::from(2);
        }
    };

    println!("Shipping methods:");
    for method in engine.methods() {
        println!("  {} {:<18} {}", method.icon, method.name, method.description);
    }

    println!("\nQuotes:");
    for request in &requests {
        match engine.try_quote(request) {
            Ok(quote) => match serde_json::to_string(&quote) {
                Ok(json) => println!(
                    "  {} -> {} ({} kg): {}",
                    request.origin.as_str(),
                    request.destination.as_str(),
                    request.weight,
                    json
                ),
                Err(e) => eprintln!("  Failed to serialize quote: {}", e),
            },
            Err(e) => {
                eprintln!("  {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn parse_request(args: &[String]) -> Result<Option<ShipmentRequest>, String> {
    match args {
        [] => Ok(None),
        [origin, destination, weight, rest @ ..] if rest.len() <= 1 => {
            let weight: f64 = weight
                .parse()
                .map_err(|_| format!("Invalid weight '{}'", weight))?;
            let mut request = ShipmentRequest::new(origin.as_str(), destination.as_str(), weight);
            if let Some(method) = rest.first() {
                request = request.with_method(method.as_str());
            }
            Ok(Some(request))
        }
        _ => Err("Expected 3 or 4 arguments".to_string()),
    }
}

fn sample_requests() -> Vec<ShipmentRequest> {
    vec![
        ShipmentRequest::new("Punjab, India", "New Delhi, India", 1.0).with_method("standard"),
        ShipmentRequest::new("Punjab, India", "New Delhi, India", 25.0).with_method("express"),
        ShipmentRequest::new("Amritsar, Punjab, India", "Pune, Maharashtra, India", 12.0)
            .with_method("priority"),
        ShipmentRequest::new("Nashik, Maharashtra, India", "Mumbai, Maharashtra, India", 3.0),
    ]
}
