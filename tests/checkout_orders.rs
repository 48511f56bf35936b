// Integration test: checkout pricing flowing into persisted orders
use farm_shipping::checkout::{CartLine, CheckoutSummary};
use farm_shipping::store::{
    JsonFileStore, NewOrder, OrderItem, OrderRepository, OrderStatus, Payment, PaymentStatus,
};
use farm_shipping::{ShippingMethod, ShippingQuoteEngine};
use std::error::Error;

fn tomato_line() -> CartLine<'static> {
    CartLine {
        product_location: "Ludhiana, Punjab, India",
        buyer_location: "Connaught Place, Delhi, India",
        unit_price: 30.0,
        quantity: 12,
        unit: "kg",
    }
}

fn tomato_item() -> OrderItem {
    OrderItem {
        product_id: "prod-tomato".to_string(),
        product_name: "Tomatoes".to_string(),
        quantity: 12,
        price: 30.0,
        unit: "kg".to_string(),
    }
}

#[test]
fn test_checkout_to_order_round_trip() -> Result<(), Box<dyn Error>> {
    let engine = ShippingQuoteEngine::default();
    let dir = tempfile::tempdir()?;

    // Punjab / Delhi is listed at 500 km; 12 kg is medium (0.4)
    let summary = CheckoutSummary::try_build(&engine, &tomato_line(), Some("priority"))?;
    assert_eq!(summary.quote.distance_km, 500);
    assert_eq!(summary.shipping.cost, 60);
    assert_eq!(summary.shipping.estimated_days, 1);
    assert_eq!(summary.subtotal, 360.0);
    assert_eq!(summary.total, 420.0);

    let repo = OrderRepository::new(JsonFileStore::new(dir.path()));
    let order = repo.create(
        NewOrder::from_checkout("buyer-7", "farmer-2", tomato_item(), &summary)
            .with_names("Meera", "Harjit")
            .with_payment(Payment::for_method("upi")),
    )?;
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(
        order.payment.as_ref().map(|p| p.status),
        Some(PaymentStatus::Completed)
    );
    assert_eq!(order.shipping.method, ShippingMethod::Priority);

    // A fresh repository over the same directory sees the stored order
    let reopened = OrderRepository::new(JsonFileStore::new(dir.path()));
    let stored = reopened.get(&order.id)?.ok_or("order missing after reload")?;
    assert_eq!(stored, order);

    let document = std::fs::read_to_string(dir.path().join("orders.json"))?;
    assert!(document.contains("\"estimatedDays\":1"));
    assert!(document.contains("\"method\":\"priority\""));

    reopened.update_status(&order.id, OrderStatus::Delivered)?;
    assert_eq!(reopened.by_farmer("farmer-2")?[0].status, OrderStatus::Delivered);
    Ok(())
}

#[test]
fn test_lenient_checkout_ships_standard() -> Result<(), Box<dyn Error>> {
    let engine = ShippingQuoteEngine::default();
    let line = CartLine {
        unit: "dozen",
        quantity: 4,
        ..tomato_line()
    };

    let summary = CheckoutSummary::build(&engine, &line, Some("overnight"));
    assert_eq!(summary.weight_kg, 2.0);
    assert_eq!(summary.shipping.method, ShippingMethod::Standard);
    assert_eq!(summary.shipping.cost, 50);
    assert_eq!(summary.shipping.estimated_days, 3);
    assert_eq!(summary.total, 170.0);
    Ok(())
}
