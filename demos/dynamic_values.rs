//! Rendering data that is only known at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde_dictxml::{to_string, Renderer, Value, XmlOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Any serde format can feed the renderer; here the input is JSON.
    let json = r#"{
        "order": {
            "id": 1001,
            "customer": "ACME & Sons",
            "lines": [
                {"sku": "A-1", "qty": 2},
                {"sku": "B-7", "qty": 1}
            ],
            "gift": false,
            "coupon": null
        }
    }"#;

    let data: Value = serde_json::from_str(json)?;
    println!("Document:\n{}\n", to_string(&data, "export")?);

    // Runtime type checking
    if let Some(order) = data.as_object().and_then(|m| m.get("order")) {
        println!("order is a collection: {}", order.is_collection());
    }

    // Top-level values must be mappings
    let bare = Value::Array(vec![Value::from(1), Value::from(2)]);
    match Renderer::new(&bare, XmlOptions::new("root")) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
