//! Narrative walk-through of the interoperability gate.
//!
//! Loads the system catalog, wires up the default connectors and the
//! logging listener, connects two sample components, and drains a few
//! queued events.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storyteller [path/to/registry.yaml]
//! # registry path defaults to library/registry.yaml
//! # RUST_LOG=info to see the logging listener's output
//! ```

use std::collections::HashMap;

use serde_json::json;

use interop_gate::{
    default_connectors, ComponentRecord, ComponentRegistry, Event, EventDispatcher, EventKind,
    InteropManager, LogListener, SystemCatalog,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let registry_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "library/registry.yaml".to_string());

    let catalog = SystemCatalog::load(&registry_path);
    println!("{}", catalog.narrative(Some("technology interoperability")));
    if !catalog.is_empty() {
        println!("\nKnown components:");
        for description in catalog.components() {
            println!(
                "  {} — {} (v{})",
                description.name, description.role, description.version
            );
        }
    }

    let mut registry = ComponentRegistry::new();
    registry.register(ComponentRecord::with_capabilities(
        "java-core",
        "21",
        HashMap::from([("jit".to_string(), json!(true))]),
    ));
    registry.register(ComponentRecord::with_capabilities(
        "cpp-core",
        "20",
        HashMap::from([("simd".to_string(), json!(true))]),
    ));

    let manager = InteropManager::with_connectors(default_connectors());
    let mut dispatcher = EventDispatcher::with_listeners(&[&LogListener]);

    let source = registry.get("java-core")?;
    let destination = registry.get("cpp-core")?;
    let result = manager.connect("Java", "C++", source, destination)?;
    println!(
        "\nConnected {} -> {}: {}",
        result.technologies.0, result.technologies.1, result.status
    );

    dispatcher.queue(Event::data_transfer("java-core", "cpp-core", json!([1, 2, 3])));
    dispatcher.queue(Event::technology_connection(
        "Java",
        "C++",
        HashMap::from([("status".to_string(), json!(result.status))]),
    ));
    dispatcher.queue(Event::new(EventKind::SystemNotification, "gate", "all"));

    let dispatched = dispatcher.drain()?;
    println!("Dispatched {dispatched} queued events in priority order.");

    Ok(())
}
