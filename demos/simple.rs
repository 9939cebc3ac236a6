//! Rendering a derived struct as an XML document.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_dictxml::to_string;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    manager: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        manager: None,
    };

    let xml = to_string(&user, "user")?;
    println!("XML output:\n{}\n", xml);

    assert!(xml.contains("<manager></manager>"));
    println!("✓ None fields render as empty elements");

    Ok(())
}
