//! Building value trees with the dict! macro.
//!
//! Run with: cargo run --example macro

use serde_dictxml::{dict, Renderer, XmlOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let host = "db.internal";

    let config = dict!({
        "server": {
            "host": host,
            "port": 5432
        },
        "features": ["auth", "logging"],
        "motd": "Welcome <guest> & friends",
        "maintenance": null
    });

    let renderer = Renderer::new(&config, XmlOptions::new("config"))?;
    println!("{}", renderer.xml(true));

    Ok(())
}
