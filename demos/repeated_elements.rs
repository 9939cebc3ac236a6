//! How sequences turn into sibling elements.
//!
//! Run with: cargo run --example repeated_elements

use serde_dictxml::{dict, Renderer, XmlOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A flat list: one <item> per element, no wrapper.
    let flat = dict!({ "item": ["apple", "pear", "plum"] });
    let renderer = Renderer::new(&flat, XmlOptions::new("basket"))?;
    println!("Flat list:\n{}\n", renderer.xml(false));

    // A list of mappings: each mapping gets its own <book> element.
    let records = dict!({
        "book": [
            { "title": "Dune", "year": 1965 },
            { "title": "Solaris", "year": 1961 }
        ]
    });
    let renderer = Renderer::new(&records, XmlOptions::new("library"))?;
    println!("List of mappings:\n{}\n", renderer.xml(false));

    // Nested lists flatten into one run of siblings.
    let grid = dict!({ "cell": [[1, 2], [3, 4]] });
    let renderer = Renderer::new(&grid, XmlOptions::new("grid"))?;
    println!("Nested lists:\n{}\n", renderer.xml(false));

    // Empty lists produce nothing at all.
    let empty = dict!({ "before": 1, "none": [], "after": 2 });
    let renderer = Renderer::new(&empty, XmlOptions::new("doc"))?;
    println!("Empty list:\n{}", renderer.xml(false));

    Ok(())
}
