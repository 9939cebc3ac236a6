//! Customizing the root element and the declaration with XmlOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_dictxml::{to_string, to_string_with_options, XmlOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
    };

    println!("Default:");
    println!("{}\n", to_string(&config, "config")?);

    println!("Root attributes:");
    let options = XmlOptions::new("config")
        .with_attribute("env", "prod")
        .with_attribute("owner", "ops & infra");
    println!("{}\n", to_string_with_options(&config, options)?);

    println!("Custom declaration:");
    let options = XmlOptions::new("config")
        .with_version("1.1")
        .with_encoding("ISO-8859-1");
    println!("{}\n", to_string_with_options(&config, options)?);

    println!("Without declaration:");
    let options = XmlOptions::new("config").with_prolog(false);
    println!("{}\n", to_string_with_options(&config, options)?);

    println!("Raw attribute values:");
    let options = XmlOptions::new("config")
        .with_attribute("note", "a&b")
        .with_attribute_escaping(false);
    println!("{}", to_string_with_options(&config, options)?);

    Ok(())
}
